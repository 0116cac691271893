use anyhow::Result;
use std::path::PathBuf;

use rolodex::book::AddressBook;
use rolodex::model::Contact;

fn unique_book(prefix: &str) -> PathBuf {
    let pid = std::process::id();
    let t = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir().join(format!("rolodex-ns-{prefix}-{pid}-{t}.json"))
}

#[test]
fn same_name_different_phones_both_returned() -> Result<()> {
    let path = unique_book("two-janes");
    AddressBook::init(&path)?;
    let book = AddressBook::open(&path)?;

    book.add_contact(Contact::new("jane", "doe", "555-0001", "jane1@x.com"));
    book.add_contact(Contact::new("jane", "doe", "555-0002", "jane2@x.com"));

    // Любой регистр запроса: ключ имени нормализуется.
    let got = book.search_by_name("Jane Doe");
    assert_eq!(got.len(), 2);
    let mut phones: Vec<&str> = got.iter().map(|c| c.phone_number.as_str()).collect();
    phones.sort();
    assert_eq!(phones, vec!["555-0001", "555-0002"]);

    let _ = std::fs::remove_file(&path);
    Ok(())
}

#[test]
fn stale_bucket_entries_resolve_to_current_contact() -> Result<()> {
    // Ключ в бакете указывает на текущий контакт под этим первичным ключом:
    // после перезаписи ключа поиск по имени возвращает новый email по обеим
    // позициям бакета (документированный риск append-only индекса).
    let path = unique_book("stale");
    AddressBook::init(&path)?;
    let book = AddressBook::open(&path)?;

    book.add_contact(Contact::new("Jane", "Doe", "555-1234", "old@x.com"));
    book.add_contact(Contact::new("Jane", "Doe", "555-1234", "new@x.com"));

    let got = book.search_by_name("Jane Doe");
    assert_eq!(got.len(), 2, "duplicate bucket entries both resolve");
    assert!(got.iter().all(|c| c.email_address == "new@x.com"));

    let _ = std::fs::remove_file(&path);
    Ok(())
}

#[test]
fn middle_name_does_not_affect_lookup() -> Result<()> {
    let path = unique_book("middle");
    AddressBook::init(&path)?;
    let book = AddressBook::open(&path)?;

    book.add_contact(Contact::new("Jane", "Doe", "555-1234", "jane@x.com"));

    // 3+ токенов: middle выпадает из ключа, остаток склеивается в last.
    assert_eq!(book.search_by_name("Jane Marie Doe").len(), 1);
    assert!(book.search_by_name("Jane Marie van Doe").is_empty());

    let _ = std::fs::remove_file(&path);
    Ok(())
}

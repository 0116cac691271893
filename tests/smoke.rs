use anyhow::Result;
use std::path::PathBuf;

use rolodex::book::AddressBook;
use rolodex::model::{Address, Contact};

fn unique_book(prefix: &str) -> PathBuf {
    let pid = std::process::id();
    let t = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir().join(format!("rolodex-{prefix}-{pid}-{t}.json"))
}

#[test]
fn smoke_init_add_search_list() -> Result<()> {
    let path = unique_book("smoke");

    // 1) init
    AddressBook::init(&path)?;

    // 2) writer: add two contacts
    {
        let book = AddressBook::open(&path)?;
        book.add_contact(Contact::new("Jane", "Doe", "555-1234", "jane@x.com"));
        book.add_contact(
            Contact::new("John", "Roe", "555-9999", "john@x.com").with_address(Address {
                kind: "personal".into(),
                street: "1 Main St".into(),
                city: "Springfield".into(),
                state: "IL".into(),
                zip: "62701".into(),
                country: "US".into(),
            }),
        );
        assert_eq!(book.len(), 2);
    }

    // 3) reader: searches hit, list is complete
    {
        let book = AddressBook::open_ro(&path)?;

        let c = book
            .search_by_phone_number("555-1234")
            .expect("phone search must find Jane");
        assert_eq!(c.first_name, "Jane");

        let by_name = book.search_by_name("John Roe");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].address.city, "Springfield");

        let all = book.list_all();
        assert_eq!(all.len(), 2);
    }

    // 4) init refuses to clobber an existing book
    assert!(AddressBook::init(&path).is_err());

    let _ = std::fs::remove_file(&path);
    Ok(())
}

#[test]
fn open_missing_book_fails() {
    let path = unique_book("missing");
    assert!(AddressBook::open(&path).is_err());
}

#[test]
fn phone_search_miss_is_none() -> Result<()> {
    let path = unique_book("miss");
    AddressBook::init(&path)?;
    let book = AddressBook::open(&path)?;
    book.add_contact(Contact::new("Jane", "Doe", "555-1234", "jane@x.com"));
    assert!(book.search_by_phone_number("never-used").is_none());
    let _ = std::fs::remove_file(&path);
    Ok(())
}

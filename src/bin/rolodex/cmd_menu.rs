//! Интерактивное меню — тонкий слой над ядром: пять действий, по одному
//! вызову операции книги на выбор.

use anyhow::Result;
use std::path::PathBuf;

use rolodex::book::AddressBook;
use rolodex::consts::{DEFAULT_ADDRESS_TYPE, LINE_SEPARATOR};
use rolodex::i18n::Messages;
use rolodex::model::{Address, Contact};
use rolodex::names::split_full_name;
use rolodex::validate::validate_contact;

use super::util::{read_line, render_contact, resolve_config};

pub fn exec(path: Option<PathBuf>, locale: Option<String>) -> Result<()> {
    let mut cfg = resolve_config(path);
    if let Some(l) = locale {
        cfg = cfg.with_locale(l);
    }
    let msgs = Messages::for_locale(&cfg.locale)?;
    let book = AddressBook::open_with_config(cfg)?;

    println!("{}", msgs.t("opening"));

    loop {
        println!();
        println!("{}", msgs.t("actions"));
        println!("  1) {}", msgs.t("create"));
        println!("  2) {}", msgs.t("search_by_name"));
        println!("  3) {}", msgs.t("search_by_phone"));
        println!("  4) {}", msgs.t("list"));
        println!("  5) {}", msgs.t("close"));

        // EOF на stdin закрывает меню так же, как пункт 5.
        let choice = match read_line(">") {
            Ok(c) => c,
            Err(_) => break,
        };
        match choice.as_str() {
            "1" => create_contact(&book, &msgs)?,
            "2" => search_by_name(&book, &msgs)?,
            "3" => search_by_phone(&book, &msgs)?,
            "4" => list_contacts(&book, &msgs)?,
            "5" => break,
            _ => println!("{}", msgs.t("unknown_choice")),
        }
    }

    println!("{}", msgs.t("closing"));
    Ok(())
}

fn create_contact(book: &AddressBook, msgs: &Messages) -> Result<()> {
    let full_name = read_line(&msgs.t("full_name"))?;
    let parsed = split_full_name(&full_name);

    println!("{}", msgs.t("contact_adding"));
    let mut contact = Contact::new(
        parsed.first,
        parsed.last,
        read_line(&msgs.t("phone"))?,
        read_line(&msgs.t("email"))?,
    );

    println!("{}", msgs.t("address_details"));
    contact = contact.with_address(Address {
        kind: DEFAULT_ADDRESS_TYPE.to_string(),
        street: read_line(&msgs.t("street"))?,
        city: read_line(&msgs.t("city"))?,
        state: read_line(&msgs.t("state"))?,
        zip: read_line(&msgs.t("zip"))?,
        country: read_line(&msgs.t("country"))?,
    });

    if let Err(e) = validate_contact(&contact) {
        println!("{}", msgs.tf("invalid_input", &[("reason", &format!("{e:#}"))]));
        println!("{LINE_SEPARATOR}");
        return Ok(());
    }

    book.add_contact(contact.clone());
    println!(
        "{}",
        msgs.tf(
            "contact_added",
            &[
                ("first_name", contact.first_name.as_str()),
                ("last_name", contact.last_name.as_str()),
                ("phone_number", contact.phone_number.as_str()),
                ("email_address", contact.email_address.as_str()),
            ],
        )
    );
    println!("{LINE_SEPARATOR}");
    Ok(())
}

fn search_by_name(book: &AddressBook, msgs: &Messages) -> Result<()> {
    let name = read_line(&msgs.t("full_name"))?;
    let contacts = book.search_by_name(&name);
    if contacts.is_empty() {
        println!("{}", msgs.tf("name_not_found", &[("name", name.as_str())]));
        println!("{LINE_SEPARATOR}");
        return Ok(());
    }
    println!("{}", msgs.tf("name_results", &[("name", name.as_str())]));
    for contact in &contacts {
        println!("{}", render_contact(contact)?);
        println!("{LINE_SEPARATOR}");
    }
    Ok(())
}

fn search_by_phone(book: &AddressBook, msgs: &Messages) -> Result<()> {
    let phone = read_line(&msgs.t("phone"))?;
    match book.search_by_phone_number(&phone) {
        Some(contact) => println!("{}", render_contact(&contact)?),
        None => println!("{}", msgs.tf("phone_not_found", &[("phone", phone.as_str())])),
    }
    println!("{LINE_SEPARATOR}");
    Ok(())
}

fn list_contacts(book: &AddressBook, msgs: &Messages) -> Result<()> {
    println!("{}", msgs.t("contacts_listing"));
    let contacts = book.list_all();
    if contacts.is_empty() {
        println!("{}", msgs.t("no_contacts"));
        return Ok(());
    }
    for contact in &contacts {
        println!("{}", render_contact(contact)?);
        println!("{LINE_SEPARATOR}");
    }
    Ok(())
}

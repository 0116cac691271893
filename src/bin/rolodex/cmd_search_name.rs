use anyhow::Result;
use std::path::PathBuf;

use rolodex::book::AddressBook;
use rolodex::consts::LINE_SEPARATOR;

use super::util::{render_contact, resolve_config};

pub fn exec(path: Option<PathBuf>, name: String, json: bool) -> Result<()> {
    let cfg = resolve_config(path);
    let book = AddressBook::open_ro(&cfg.book_path)?;
    let contacts = book.search_by_name(&name);

    if json {
        println!("{}", serde_json::to_string_pretty(&contacts)?);
        return Ok(());
    }

    if contacts.is_empty() {
        println!("Contacts not found for name: {name}");
        return Ok(());
    }
    println!("Contact details for name: {name}");
    for contact in &contacts {
        println!("{}", render_contact(contact)?);
        println!("{LINE_SEPARATOR}");
    }
    Ok(())
}

use anyhow::Result;
use std::path::PathBuf;

use rolodex::book::AddressBook;
use rolodex::consts::LINE_SEPARATOR;

use super::util::{render_contact, resolve_config};

pub fn exec(path: Option<PathBuf>, json: bool) -> Result<()> {
    let cfg = resolve_config(path);
    let book = AddressBook::open_ro(&cfg.book_path)?;
    let contacts = book.list_all();

    if json {
        println!("{}", serde_json::to_string_pretty(&contacts)?);
        return Ok(());
    }

    if contacts.is_empty() {
        println!("No contacts found in collection.");
        return Ok(());
    }
    for contact in &contacts {
        println!("{}", render_contact(contact)?);
        println!("{LINE_SEPARATOR}");
    }
    Ok(())
}

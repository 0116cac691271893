use anyhow::Result;
use std::path::PathBuf;

use rolodex::book::AddressBook;

use super::util::{render_contact, resolve_config};

pub fn exec(path: Option<PathBuf>, phone: String, json: bool) -> Result<()> {
    let cfg = resolve_config(path);
    let book = AddressBook::open_ro(&cfg.book_path)?;

    match book.search_by_phone_number(&phone) {
        Some(contact) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&contact)?);
            } else {
                println!("{}", render_contact(&contact)?);
            }
        }
        None => {
            if json {
                println!("null");
            } else {
                println!("Contact details not found for phone number: {phone}");
            }
        }
    }
    Ok(())
}

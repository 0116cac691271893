use anyhow::Result;
use std::path::PathBuf;

use rolodex::book::AddressBook;

use super::util::resolve_config;

pub fn exec(path: Option<PathBuf>) -> Result<()> {
    let cfg = resolve_config(path);
    if cfg.book_path.exists() {
        println!("Address book already initialized at {}", cfg.book_path.display());
        return Ok(());
    }
    AddressBook::init(&cfg.book_path)?;
    println!("Initialized empty address book at {}", cfg.book_path.display());
    Ok(())
}

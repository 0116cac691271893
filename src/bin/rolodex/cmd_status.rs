use anyhow::Result;
use std::path::PathBuf;

use rolodex::book::AddressBook;
use rolodex::metrics;

use super::util::resolve_config;

pub fn exec(path: Option<PathBuf>, json: bool) -> Result<()> {
    let cfg = resolve_config(path);
    let book = AddressBook::open_ro(&cfg.book_path)?;
    let state = book.state_snapshot();
    let m = metrics::snapshot();

    if json {
        let out = serde_json::json!({
            "book_path": cfg.book_path.display().to_string(),
            "contacts": state.contacts.len(),
            "name_buckets": state.name_index.len(),
            "phone_entries": state.phone_index.len(),
            "metrics": m,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("book:          {}", cfg.book_path.display());
    println!("contacts:      {}", state.contacts.len());
    println!("name buckets:  {}", state.name_index.len());
    println!("phone entries: {}", state.phone_index.len());
    println!(
        "saves:         ok={} failed={} (failure ratio {:.2})",
        m.snapshot_saves_ok,
        m.snapshot_saves_failed,
        m.save_failure_ratio()
    );
    Ok(())
}

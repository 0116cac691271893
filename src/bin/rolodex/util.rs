use anyhow::{anyhow, Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use rolodex::config::RolodexConfig;
use rolodex::model::Contact;

/// Конфиг из ENV с опциональным override пути из флага --path.
pub fn resolve_config(path: Option<PathBuf>) -> RolodexConfig {
    let cfg = RolodexConfig::from_env();
    match path {
        Some(p) => cfg.with_book_path(p),
        None => cfg,
    }
}

/// Контакт в одну JSON-строку (референсный вывод меню).
pub fn render_contact(contact: &Contact) -> Result<String> {
    serde_json::to_string(contact).context("serialize contact")
}

/// Prompt + одна строка из stdin, обрезанная по краям.
pub fn read_line(prompt: &str) -> Result<String> {
    println!("{prompt}");
    std::io::stdout().flush().ok();
    let mut line = String::new();
    let n = std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("read stdin")?;
    if n == 0 {
        return Err(anyhow!("stdin closed"));
    }
    Ok(line.trim().to_string())
}

use std::path::PathBuf;

use rolodex::config::{BookBuilder, RolodexConfig};
use rolodex::consts::{ENV_AUTOSAVE, ENV_BOOK_PATH, ENV_LOCALE, ENV_PRETTY};

#[test]
fn defaults_without_env() {
    let cfg = RolodexConfig::default();
    assert_eq!(cfg.book_path, PathBuf::from("address_book.json"));
    assert_eq!(cfg.locale, "en");
    assert!(cfg.pretty);
    assert!(cfg.autosave);
}

#[test]
fn builder_overrides_fields() {
    let cfg = BookBuilder::from_default()
        .book_path("/tmp/book.json")
        .locale("fr")
        .pretty(false)
        .autosave(false)
        .build();
    assert_eq!(cfg.book_path, PathBuf::from("/tmp/book.json"));
    assert_eq!(cfg.locale, "fr");
    assert!(!cfg.pretty);
    assert!(!cfg.autosave);
}

#[test]
fn fluent_setters_chain() {
    let cfg = RolodexConfig::default()
        .with_book_path("b.json")
        .with_locale("fr")
        .with_pretty(false)
        .with_autosave(false);
    assert_eq!(cfg.book_path, PathBuf::from("b.json"));
    assert_eq!(cfg.locale, "fr");
    assert!(!cfg.pretty && !cfg.autosave);
}

// ENV-тест один и последовательный: сеттим все переменные разом, чтобы
// не гоняться с параллельными тестами этого же бинаря.
#[test]
fn from_env_reads_all_vars() {
    std::env::set_var(ENV_BOOK_PATH, "/tmp/env-book.json");
    std::env::set_var(ENV_LOCALE, "FR");
    std::env::set_var(ENV_PRETTY, "off");
    std::env::set_var(ENV_AUTOSAVE, "0");

    let cfg = RolodexConfig::from_env();
    assert_eq!(cfg.book_path, PathBuf::from("/tmp/env-book.json"));
    assert_eq!(cfg.locale, "fr"); // locale нормализуется к нижнему регистру
    assert!(!cfg.pretty);
    assert!(!cfg.autosave);

    std::env::remove_var(ENV_BOOK_PATH);
    std::env::remove_var(ENV_LOCALE);
    std::env::remove_var(ENV_PRETTY);
    std::env::remove_var(ENV_AUTOSAVE);
}

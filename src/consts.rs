//! Общие константы (ключи, snapshot, ENV, локали).

// -------- Key derivation --------
// Разделитель в производных ключах: "{first}-{last}-{phone}" / "{first}-{last}".
pub const KEY_SEPARATOR: char = '-';

// -------- Snapshot --------
pub const DEFAULT_BOOK_FILE: &str = "address_book.json";
pub const LOCK_SUFFIX: &str = "lock";

// -------- ENV --------
pub const ENV_BOOK_PATH: &str = "ROLO_BOOK_PATH";
pub const ENV_LOCALE: &str = "ROLO_LOCALE";
pub const ENV_PRETTY: &str = "ROLO_PRETTY";
pub const ENV_AUTOSAVE: &str = "ROLO_AUTOSAVE";

// -------- Locales --------
pub const LOCALE_EN: &str = "en";
pub const LOCALE_FR: &str = "fr";
pub const DEFAULT_LOCALE: &str = LOCALE_EN;

// -------- Validation --------
// Лимит длины полного имени после вырезания обращения (Mr/Mrs/...).
pub const FULL_NAME_MAX_LEN: usize = 750;
pub const DEFAULT_ADDRESS_TYPE: &str = "personal";

// -------- CLI --------
pub const LINE_SEPARATOR: &str = "--------->";

// Базовые модули
pub mod consts;
pub mod config;
pub mod metrics;

// Модель и чистые функции (ключи, разбор имён, валидация)
pub mod model;
pub mod keys;
pub mod names;
pub mod validate;

// Ядро: книга контактов (папка с mod.rs)
pub mod book;     // src/book/{mod,core,state,insert,query}.rs

// Персистентность и блокировка
pub mod snapshot; // snapshot save/load (full JSON rewrite)
pub mod lock;     // advisory file lock (single writer)

// Локализация сообщений CLI
pub mod i18n;

// Удобные реэкспорты
pub use book::{AddressBook, BookState};
pub use config::{BookBuilder, RolodexConfig};
pub use model::{Address, Contact};

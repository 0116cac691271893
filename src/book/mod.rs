//! book — high-level API книги контактов.
//!
//! Разделение по подмодулям:
//! - state.rs  — BookState: contacts + name_index + phone_index (формат снапшота)
//! - core.rs   — AddressBook: RwLock вокруг BookState, init/open/open_ro, lock-хэндлинг
//! - insert.rs — add_contact: upsert в карту и оба индекса + синхронный save
//! - query.rs  — read-only операции: list_all / search_by_name / search_by_phone_number

pub mod core;
pub mod insert;
pub mod query;
pub mod state;

pub use core::AddressBook;
pub use state::BookState;

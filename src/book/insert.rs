//! book/insert — единственная мутация книги.
//!
//! Порядок под эксклюзивным lock:
//! 1. derive primary key, upsert contact map (overwrite on collision);
//! 2. append primary key в бакет имени (no dedup, no removal);
//! 3. upsert phone index (last writer wins);
//! 4. синхронный best-effort save снапшота, lock ещё удерживается.
//!
//! Save внутри критической секции сериализует всех писателей через один
//! дисковый round-trip и блокирует читателей на время записи — осознанная
//! цена референсного поведения. Ошибка записи логируется и глотается:
//! insert не падает, авторитетна память.

use crate::metrics::record_contact_inserted;
use crate::model::Contact;
use crate::snapshot;

use super::core::AddressBook;

impl AddressBook {
    /// Insert a contact. Never fails: input is assumed pre-validated by
    /// the external validation collaborator, the in-memory updates cannot
    /// fail, and persistence failure is swallowed (durability risk only).
    pub fn add_contact(&self, contact: Contact) {
        let mut state = self.state.write();
        state.upsert(contact);

        if self.cfg.autosave {
            snapshot::save(&state, &self.cfg.book_path, self.cfg.pretty);
        }
        record_contact_inserted();
    }
}

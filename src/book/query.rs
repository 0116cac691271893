//! book/query — read-only операции (shared lock, копии наружу).

use crate::keys::name_key;
use crate::metrics::{record_name_search, record_phone_search};
use crate::model::Contact;
use crate::names::split_full_name;

use super::core::AddressBook;

impl AddressBook {
    /// All contacts, unordered (map iteration order is not guaranteed —
    /// callers must not depend on ordering).
    pub fn list_all(&self) -> Vec<Contact> {
        let state = self.state.read();
        state.contacts.values().cloned().collect()
    }

    /// Case-insensitive search by free-text full name. The middle name,
    /// if any, does not participate in the name key.
    ///
    /// Each primary key stored in the bucket resolves to its *current*
    /// contact: if a later insert overwrote that key, the resolved record
    /// differs from the one originally indexed (documented staleness of
    /// the append-only bucket). Empty vec when no bucket exists.
    pub fn search_by_name(&self, full_name: &str) -> Vec<Contact> {
        let parsed = split_full_name(full_name);
        let nkey = name_key(&parsed.first, &parsed.last);

        let state = self.state.read();
        let results: Vec<Contact> = match state.name_index.get(&nkey) {
            Some(keys) => keys
                .iter()
                .filter_map(|k| state.contacts.get(k).cloned())
                .collect(),
            None => Vec::new(),
        };
        record_name_search(!results.is_empty());
        results
    }

    /// Exact phone lookup: phone index, then contact map. Either level
    /// missing reports not-found (None), never an error.
    pub fn search_by_phone_number(&self, phone_number: &str) -> Option<Contact> {
        let state = self.state.read();
        let found = state
            .phone_index
            .get(phone_number)
            .and_then(|key| state.contacts.get(key))
            .cloned();
        record_phone_search(found.is_some());
        found
    }
}

//! book/state — три согласованные структуры книги (формат снапшота).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::keys::{contact_key, name_key};
use crate::model::Contact;

/// The three co-owned structures of the book, always kept in lockstep.
/// Serializes 1:1 to the on-disk snapshot: absent top-level fields load
/// as empty maps, empty maps are omitted on save (reference format).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookState {
    /// primary key -> contact. Unique keys, no ordering guarantee.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub contacts: HashMap<String, Contact>,

    /// name key -> ordered bucket of primary keys. Append-only: duplicates
    /// possible on re-insert, never pruned (preserved reference quirk).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub name_index: HashMap<String, Vec<String>>,

    /// phone number -> primary key. Last writer wins.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub phone_index: HashMap<String, String>,
}

impl BookState {
    /// Upsert a contact into the map and both indexes. Never fails: all
    /// three updates are unconditional, collisions overwrite (map, phone
    /// index) or append (name bucket). Returns the derived primary key.
    pub(crate) fn upsert(&mut self, contact: Contact) -> String {
        let key = contact_key(&contact);
        let nkey = name_key(&contact.first_name, &contact.last_name);
        let phone = contact.phone_number.clone();

        self.contacts.insert(key.clone(), contact);
        self.name_index.entry(nkey).or_default().push(key.clone());
        self.phone_index.insert(phone, key.clone());
        key
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Contact;

    #[test]
    fn upsert_updates_all_three_structures() {
        let mut st = BookState::default();
        let key = st.upsert(Contact::new("Jane", "Doe", "555-1234", "jane@x.com"));

        assert_eq!(key, "Jane-Doe-555-1234");
        assert!(st.contacts.contains_key(&key));
        assert_eq!(st.name_index["jane-doe"], vec![key.clone()]);
        assert_eq!(st.phone_index["555-1234"], key);
    }

    #[test]
    fn identical_triple_overwrites_map_and_grows_bucket() {
        let mut st = BookState::default();
        let a = Contact::new("Jane", "Doe", "555-1234", "jane@x.com");
        let mut b = a.clone();
        b.email_address = "jane@y.com".into();

        let k1 = st.upsert(a);
        let k2 = st.upsert(b.clone());
        assert_eq!(k1, k2);

        // Карта: последний insert победил.
        assert_eq!(st.contacts[&k1].email_address, "jane@y.com");
        // Бакет имени append-only: тот же ключ дважды, без дедупликации.
        assert_eq!(st.name_index["jane-doe"], vec![k1.clone(), k1.clone()]);
        // Телефонный индекс: одна запись.
        assert_eq!(st.phone_index.len(), 1);
    }

    #[test]
    fn phone_collision_last_writer_wins() {
        let mut st = BookState::default();
        let k1 = st.upsert(Contact::new("Jane", "Doe", "555", "jane@x.com"));
        let k2 = st.upsert(Contact::new("John", "Roe", "555", "john@x.com"));
        assert_ne!(k1, k2);
        assert_eq!(st.phone_index["555"], k2);
        // Оба контакта остаются в карте.
        assert_eq!(st.contacts.len(), 2);
    }

    #[test]
    fn empty_state_serializes_to_empty_object() {
        let st = BookState::default();
        assert_eq!(serde_json::to_string(&st).unwrap(), "{}");
    }
}

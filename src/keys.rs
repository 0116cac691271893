//! keys — вывод производных ключей книги контактов.
//!
//! Две чистые функции:
//! - primary_key: "{first}-{last}-{phone}" (case-sensitive).
//! - name_key:    "{first}-{last}" в нижнем регистре (case-insensitive поиск).
//!
//! Асимметрия регистров намеренная и сохраняется для совместимости
//! со снапшотами референсного формата: первичный ключ различает "Jane"
//! и "jane", ключ имени — нет.

use crate::consts::KEY_SEPARATOR;
use crate::model::Contact;

/// Derive the primary key for a contact. Case-sensitive, no normalization:
/// differing capitalization produces a different key (preserved quirk).
/// Total over any inputs, including empty strings.
#[inline]
pub fn primary_key(first_name: &str, last_name: &str, phone_number: &str) -> String {
    format!("{first_name}{KEY_SEPARATOR}{last_name}{KEY_SEPARATOR}{phone_number}")
}

/// Derive the name-index key: both parts lowercased before joining.
#[inline]
pub fn name_key(first_name: &str, last_name: &str) -> String {
    format!(
        "{}{KEY_SEPARATOR}{}",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    )
}

/// primary_key от полей контакта.
#[inline]
pub fn contact_key(c: &Contact) -> String {
    primary_key(&c.first_name, &c.last_name, &c.phone_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_key_joins_with_separator() {
        assert_eq!(primary_key("Jane", "Doe", "555-1234"), "Jane-Doe-555-1234");
    }

    #[test]
    fn primary_key_is_case_sensitive() {
        assert_ne!(
            primary_key("Jane", "Doe", "555"),
            primary_key("jane", "doe", "555")
        );
    }

    #[test]
    fn primary_key_total_on_empty_inputs() {
        assert_eq!(primary_key("", "", ""), "--");
    }

    #[test]
    fn name_key_lowercases_both_parts() {
        assert_eq!(name_key("JANE", "DoE"), "jane-doe");
        assert_eq!(name_key("jane", "doe"), name_key("Jane", "Doe"));
    }

    #[test]
    fn name_key_deterministic() {
        assert_eq!(name_key("Élodie", "Durand"), name_key("élodie", "durand"));
    }
}

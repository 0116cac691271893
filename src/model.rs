//! model — записи Contact/Address и их JSON-представление.
//!
//! Формат полей совпадает со снапшотом на диске: snake_case имена,
//! `created_on` в RFC 3339 (chrono + serde).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact record. Identity is NOT a field here: the primary key is
/// derived from (first_name, last_name, phone_number) at insert time,
/// see `keys::primary_key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Address::is_empty")]
    pub address: Address,
    pub created_on: DateTime<Utc>,
}

/// A physical address attached to a contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// The kind of the address: personal, professional...
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub country: String,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.kind.is_empty()
            && self.street.is_empty()
            && self.city.is_empty()
            && self.state.is_empty()
            && self.zip.is_empty()
            && self.country.is_empty()
    }
}

impl Contact {
    /// Собрать контакт с текущим временем создания.
    pub fn new<S: Into<String>>(first_name: S, last_name: S, phone_number: S, email_address: S) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email_address: email_address.into(),
            phone_number: phone_number.into(),
            address: Address::default(),
            created_on: Utc::now(),
        }
    }

    pub fn with_address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_json_field_names() {
        let c = Contact::new("Jane", "Doe", "555-1234", "jane@x.com");
        let v: serde_json::Value = serde_json::to_value(&c).unwrap();
        assert_eq!(v["first_name"], "Jane");
        assert_eq!(v["last_name"], "Doe");
        assert_eq!(v["phone_number"], "555-1234");
        assert_eq!(v["email_address"], "jane@x.com");
        // Пустой адрес опускается (omitempty в референсном формате)
        assert!(v.get("address").is_none());
        assert!(v["created_on"].is_string());
    }

    #[test]
    fn address_type_field_renamed() {
        let a = Address {
            kind: "personal".into(),
            street: "1 Main St".into(),
            ..Default::default()
        };
        let v: serde_json::Value = serde_json::to_value(&a).unwrap();
        assert_eq!(v["type"], "personal");
        assert!(v.get("kind").is_none());
    }
}

//! validate — коллаборатор валидации ввода (CLI-слой).
//!
//! Ядро (book) НЕ перепроверяет данные: add_contact принимает контакт как
//! есть. Все правила формата живут здесь и применяются до вызова ядра:
//! - request-level: first/last/phone/email не пустые;
//! - имя: после вырезания обращения (Mr/Mrs/...) длина 1..=750;
//! - email: формат по regex + локальная часть длиннее 2 символов;
//! - телефон: цифры с разделителями `-`, пробел, `(`, `)`, `.`, опционально `+`.

use anyhow::{anyhow, Result};
use regex::Regex;
use std::sync::OnceLock;

use crate::consts::FULL_NAME_MAX_LEN;
use crate::model::Contact;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
const PHONE_PATTERN: &str = r"^\+?[0-9][0-9\-\s().]{4,17}[0-9]$";
const SALUTATION_PATTERN: &str = r"(?i)^(mr|mrs|ms|miss|dr|prof)\.?\s+";

fn email_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email regex"))
}

fn phone_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone regex"))
}

fn salutation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SALUTATION_PATTERN).expect("salutation regex"))
}

/// Request-level + field-format validation before the contact reaches the
/// core. Error message names the first offending field.
pub fn validate_contact(contact: &Contact) -> Result<()> {
    if contact.first_name.is_empty()
        || contact.last_name.is_empty()
        || contact.phone_number.is_empty()
        || contact.email_address.is_empty()
    {
        return Err(anyhow!("given inputs are invalid"));
    }

    if !is_valid_name_part(&contact.first_name) {
        return Err(anyhow!("invalid first_name provided: {}", contact.first_name));
    }
    if !is_valid_name_part(&contact.last_name) {
        return Err(anyhow!("invalid last_name provided: {}", contact.last_name));
    }
    if !is_valid_email_address(&contact.email_address) {
        return Err(anyhow!("invalid email_address provided: {}", contact.email_address));
    }
    if !is_valid_phone_number(&contact.phone_number) {
        return Err(anyhow!("invalid phone_number provided: {}", contact.phone_number));
    }
    Ok(())
}

/// Часть имени валидна, если после вырезания обращения остаётся
/// 1..=FULL_NAME_MAX_LEN символов.
pub fn is_valid_name_part(name: &str) -> bool {
    let stripped = salutation_re().replace(name, "");
    let trimmed = stripped.trim();
    !trimmed.is_empty() && trimmed.chars().count() <= FULL_NAME_MAX_LEN
}

/// Формат email + правило "локальная часть длиннее 2 символов".
pub fn is_valid_email_address(email: &str) -> bool {
    if !email_re().is_match(email) {
        return false;
    }
    match email.split('@').next() {
        Some(local) => local.len() > 2,
        None => false,
    }
}

pub fn is_valid_phone_number(phone: &str) -> bool {
    phone_re().is_match(phone)
}

//! names — разбор свободного полного имени на first/middle/last.
//!
//! Политика (совместимая с референсным поведением):
//! - повторные пробелы схлопываются перед разбиением;
//! - деление максимум на 3 токена: 1 -> first; 2 -> first+last;
//!   3+ -> first + middle + остаток целиком в last.

/// Разобранное полное имя.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedName {
    pub first: String,
    pub middle: String,
    pub last: String,
}

/// Split a free-text full name into (first, middle, last).
/// Interior words beyond the second collapse into the last-name slot.
pub fn split_full_name(full_name: &str) -> ParsedName {
    let collapsed = collapse_spaces(full_name);
    let parts: Vec<&str> = collapsed.splitn(3, ' ').collect();

    let mut out = ParsedName::default();
    if let Some(first) = parts.first() {
        out.first = (*first).to_string();
    }
    match parts.len() {
        2 => out.last = parts[1].to_string(),
        3 => {
            out.middle = parts[1].to_string();
            out.last = parts[2].to_string();
        }
        _ => {}
    }
    out
}

fn collapse_spaces(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

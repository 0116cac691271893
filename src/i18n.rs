//! i18n — каталоги сообщений CLI (en/fr), TOML key -> шаблон.
//!
//! Каталоги вшиты include_str! и парсятся один раз при создании Messages.
//! Подстановка параметров — простая замена плейсхолдеров вида {name}.
//! Неизвестная локаль откатывается на "en" с warn; неизвестный ключ
//! возвращается как есть (виден в выводе — проще починить каталог).

use anyhow::{Context, Result};
use log::warn;
use std::collections::HashMap;

use crate::consts::{LOCALE_EN, LOCALE_FR};

const EN_CATALOG: &str = include_str!("../i18n/en.toml");
const FR_CATALOG: &str = include_str!("../i18n/fr.toml");

pub struct Messages {
    locale: String,
    map: HashMap<String, String>,
}

impl Messages {
    /// Load the catalog for `locale`. Unknown locales fall back to English.
    pub fn for_locale(locale: &str) -> Result<Self> {
        let (locale, raw) = match locale {
            LOCALE_EN => (LOCALE_EN, EN_CATALOG),
            LOCALE_FR => (LOCALE_FR, FR_CATALOG),
            other => {
                warn!("unknown locale '{other}', falling back to '{LOCALE_EN}'");
                (LOCALE_EN, EN_CATALOG)
            }
        };
        let map: HashMap<String, String> =
            toml::from_str(raw).with_context(|| format!("parse {locale} message catalog"))?;
        Ok(Self {
            locale: locale.to_string(),
            map,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Message for `key`; the key itself when absent from the catalog.
    pub fn t(&self, key: &str) -> String {
        self.map.get(key).cloned().unwrap_or_else(|| key.to_string())
    }

    /// Message for `key` with `{name}` placeholder substitution.
    pub fn tf(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut out = self.t(key);
        for (name, value) in params {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }
}

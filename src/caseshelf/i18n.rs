//! UI string tables and language persistence.
//!
//! One flat key-value table per language, compiled in and loaded once.
//! Lookup falls back from the requested language to English, then to the
//! key itself; a missing translation shows up as the key in the UI, not
//! as a crash. The chosen language persists in the blob store under its
//! own key, independent of the favorites keys.

use crate::model::Lang;
use crate::store::{KvStore, LANGUAGE_KEY};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::{error, warn};

type Table = HashMap<String, String>;

static TABLES: Lazy<HashMap<Lang, Table>> = Lazy::new(|| {
    let mut tables = HashMap::new();
    tables.insert(Lang::En, parse_table(include_str!("locales/en.json")));
    tables.insert(Lang::Zh, parse_table(include_str!("locales/zh.json")));
    tables.insert(Lang::Ja, parse_table(include_str!("locales/ja.json")));
    tables.insert(Lang::Ko, parse_table(include_str!("locales/ko.json")));
    tables
});

fn parse_table(raw: &str) -> Table {
    serde_json::from_str(raw).expect("embedded locale table is valid JSON")
}

/// Resolves UI strings for one display language.
#[derive(Debug, Clone, Copy)]
pub struct Translator {
    lang: Lang,
}

impl Translator {
    pub fn new(lang: Lang) -> Self {
        Self { lang }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// Look up `key`: requested language → English → the key itself.
    pub fn t(&self, key: &str) -> String {
        lookup(self.lang, key)
            .or_else(|| lookup(Lang::En, key))
            .unwrap_or_else(|| {
                warn!(key, "missing translation key");
                key.to_string()
            })
    }
}

fn lookup(lang: Lang, key: &str) -> Option<String> {
    TABLES.get(&lang).and_then(|table| table.get(key)).cloned()
}

/// Read the persisted display language. Missing key, read failure, and
/// an unrecognized code all resolve to the default (English); nothing
/// propagates to the caller.
pub fn load_language<S: KvStore>(store: &S) -> Lang {
    let blob = match store.get(LANGUAGE_KEY) {
        Ok(Some(blob)) => blob,
        Ok(None) => return Lang::default(),
        Err(err) => {
            error!(key = LANGUAGE_KEY, %err, "failed to read language");
            return Lang::default();
        }
    };
    match serde_json::from_str::<Lang>(&blob) {
        Ok(lang) => lang,
        Err(err) => {
            warn!(key = LANGUAGE_KEY, %err, "stored language unrecognized, using default");
            Lang::default()
        }
    }
}

/// Persist the display language under its own key. Failures are logged
/// only; the in-memory switch stands either way.
pub fn store_language<S: KvStore>(store: &mut S, lang: Lang) {
    let blob = match serde_json::to_string(&lang) {
        Ok(blob) => blob,
        Err(err) => {
            error!(key = LANGUAGE_KEY, %err, "failed to encode language");
            return;
        }
    };
    if let Err(err) = store.set(LANGUAGE_KEY, &blob) {
        error!(key = LANGUAGE_KEY, %err, "failed to persist language");
    }
}

/// Languages the UI can offer, paired with their native names.
pub fn available_languages() -> impl Iterator<Item = (Lang, &'static str)> {
    Lang::ALL.into_iter().map(|lang| (lang, lang.native_name()))
}

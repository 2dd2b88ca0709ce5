//! The static case catalog.
//!
//! The catalog is a hand-authored JSON document compiled into the binary
//! and deserialized once. It is the read-only data source every screen
//! works from; nothing in the library ever mutates it. Ids are assigned
//! at authoring time and are stable across releases.

use crate::model::{Case, CaseId, Lang};
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

static CASES: Lazy<Vec<Case>> = Lazy::new(|| {
    serde_json::from_str(include_str!("data/cases.json"))
        .expect("embedded catalog is valid JSON")
});

/// The full catalog, in authored order.
pub fn cases() -> &'static [Case] {
    &CASES
}

/// Point lookup by id.
pub fn find_case(id: CaseId) -> Option<&'static Case> {
    CASES.iter().find(|case| case.id == id)
}

/// Distinct categories in first-seen order, resolved in `lang`.
pub fn categories(cases: &[Case], lang: Lang) -> Vec<String> {
    let mut seen = Vec::new();
    for case in cases {
        let category = case.category.get(lang);
        if !seen.iter().any(|c| c == category) {
            seen.push(category.to_string());
        }
    }
    seen
}

/// Distinct tags in first-seen order, resolved in `lang`.
pub fn all_tags(cases: &[Case], lang: Lang) -> Vec<String> {
    let mut seen = Vec::new();
    for case in cases {
        for tag in case.tags_in(lang) {
            if !seen.iter().any(|t| t == tag) {
                seen.push(tag.to_string());
            }
        }
    }
    seen
}

/// Case count per category, resolved in `lang`.
pub fn category_stats(cases: &[Case], lang: Lang) -> BTreeMap<String, usize> {
    let mut stats = BTreeMap::new();
    for case in cases {
        *stats.entry(case.category.get(lang).to_string()).or_insert(0) += 1;
    }
    stats
}

/// Case count per tag, resolved in `lang`.
pub fn tag_stats(cases: &[Case], lang: Lang) -> BTreeMap<String, usize> {
    let mut stats = BTreeMap::new();
    for case in cases {
        for tag in case.tags_in(lang) {
            *stats.entry(tag.to_string()).or_insert(0) += 1;
        }
    }
    stats
}

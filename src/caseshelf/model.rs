use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ShelfError;

/// Stable catalog identifier, baked into the static data source.
/// Never regenerated from storage.
pub type CaseId = u32;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Zh,
    Ja,
    Ko,
}

impl Lang {
    pub const ALL: [Lang; 4] = [Lang::En, Lang::Zh, Lang::Ja, Lang::Ko];

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Zh => "zh",
            Lang::Ja => "ja",
            Lang::Ko => "ko",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Zh => "中文",
            Lang::Ja => "日本語",
            Lang::Ko => "한국어",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Lang::En),
            "zh" => Ok(Lang::Zh),
            "ja" => Ok(Lang::Ja),
            "ko" => Ok(Lang::Ko),
            other => Err(ShelfError::UnknownLanguage(other.to_string())),
        }
    }
}

/// A text value carried in one or more languages, keyed by [`Lang`].
///
/// Resolution follows a fixed fallback chain: requested language, then
/// English (the base language of the catalog), then any variant present.
/// A missing translation can therefore never surface as an absent value
/// at a call site, only as a fallback string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<Lang, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-language text in the base language.
    pub fn plain(text: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(Lang::En, text.into());
        Self(map)
    }

    pub fn with(mut self, lang: Lang, text: impl Into<String>) -> Self {
        self.0.insert(lang, text.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve for display: `lang` → `En` → any present variant → "".
    pub fn get(&self, lang: Lang) -> &str {
        self.0
            .get(&lang)
            .or_else(|| self.0.get(&Lang::En))
            .or_else(|| self.0.values().next())
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// One gallery entry: a prompt, its example images, and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: CaseId,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub prompt: LocalizedText,
    pub author: String,
    pub category: LocalizedText,
    pub tags: Vec<LocalizedText>,
    /// Opaque asset handles; only ordinal position and input/output role
    /// carry meaning.
    pub input_images: Vec<String>,
    pub output_images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Case {
    /// Tags resolved in the given display language, original order kept.
    pub fn tags_in(&self, lang: Lang) -> Vec<&str> {
        self.tags.iter().map(|t| t.get(lang)).collect()
    }
}

/// Criteria for the search screen. Groups combine with AND; see
/// [`crate::search::filter_cases`] for the matching rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub query: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub favorites_only: bool,
}

impl SearchFilters {
    /// True when no query, category, or tag is active. `favorites_only`
    /// on its own does not constitute a search.
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.category.is_none() && self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_text_prefers_requested_language() {
        let text = LocalizedText::plain("Figurine").with(Lang::Zh, "手办");
        assert_eq!(text.get(Lang::Zh), "手办");
        assert_eq!(text.get(Lang::En), "Figurine");
    }

    #[test]
    fn localized_text_falls_back_to_english() {
        let text = LocalizedText::plain("Figurine");
        assert_eq!(text.get(Lang::Ja), "Figurine");
    }

    #[test]
    fn localized_text_falls_back_to_any_variant() {
        let text = LocalizedText::new().with(Lang::Zh, "手办");
        assert_eq!(text.get(Lang::Ja), "手办");
    }

    #[test]
    fn localized_text_empty_resolves_to_empty_string() {
        assert_eq!(LocalizedText::new().get(Lang::En), "");
    }

    #[test]
    fn lang_round_trips_through_code() {
        for lang in Lang::ALL {
            assert_eq!(lang.code().parse::<Lang>().unwrap(), lang);
        }
    }

    #[test]
    fn lang_rejects_unknown_code() {
        assert!("fr".parse::<Lang>().is_err());
    }

    #[test]
    fn filters_with_only_favorites_count_as_empty() {
        let filters = SearchFilters {
            favorites_only: true,
            ..Default::default()
        };
        assert!(filters.is_empty());
    }

    #[test]
    fn filters_with_whitespace_query_count_as_empty() {
        let filters = SearchFilters {
            query: "   ".into(),
            ..Default::default()
        };
        assert!(filters.is_empty());
    }
}

use crate::model::{Case, Lang};
use std::collections::BTreeMap;

pub mod favorite;
pub mod language;
pub mod list;
pub mod search;
pub mod stats;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Catalog statistics, resolved in one display language.
#[derive(Debug, Clone, Default)]
pub struct ShelfStats {
    pub categories: BTreeMap<String, usize>,
    pub tags: BTreeMap<String, usize>,
}

/// Structured result every command returns. The CLI decides how to
/// render it; nothing in here is terminal output.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_cases: Vec<Case>,
    pub stats: Option<ShelfStats>,
    pub language: Option<Lang>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_cases(mut self, cases: Vec<Case>) -> Self {
        self.listed_cases = cases;
        self
    }

    pub fn with_stats(mut self, stats: ShelfStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_language(mut self, language: Lang) -> Self {
        self.language = Some(language);
        self
    }
}

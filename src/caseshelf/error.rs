use crate::model::CaseId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("Case not found: {0}")]
    CaseNotFound(CaseId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;

//! # Storage Layer
//!
//! The durable side of caseshelf is a plain key-value blob store: string
//! keys mapped to JSON-encoded string values. The [`KvStore`] trait keeps
//! the rest of the library decoupled from where those blobs live.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production backend, one `<key>.json` file per key
//!   under a data directory.
//! - [`memory::MemoryStore`]: in-memory backend for tests, with optional
//!   fault injection to exercise read/write failure paths.
//!
//! ## Key layout
//!
//! ```text
//! favorites      # JSON array of case ids
//! favoriteCases  # JSON array of full Case payloads
//! app_language   # JSON string, language code
//! ```
//!
//! The two favorites keys are written independently (they are not a
//! transaction); [`crate::favorites::Favorites`] reconciles them on load.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Key holding the JSON array of favorited case ids.
pub const FAVORITE_IDS_KEY: &str = "favorites";

/// Key holding the JSON array of full favorited case payloads.
pub const FAVORITE_CASES_KEY: &str = "favoriteCases";

/// Key holding the persisted display-language code.
pub const LANGUAGE_KEY: &str = "app_language";

/// Abstract interface for the durable key-value blob store.
pub trait KvStore {
    /// Read the blob stored under `key`. A key that was never written
    /// (or was removed) yields `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous blob.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is a no-op.
    fn remove(&mut self, key: &str) -> Result<()>;
}

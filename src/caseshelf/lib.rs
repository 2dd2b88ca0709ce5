//! # Caseshelf Architecture
//!
//! Caseshelf is a **UI-agnostic gallery library**. The CLI that ships in
//! this crate is one client of it; the same core could sit behind a TUI,
//! a mobile shell, or a web service without change.
//!
//! ## The layers
//!
//! ```text
//! CLI (main.rs, args.rs, print.rs)
//!   argument parsing, terminal output, exit codes — nothing else
//!            │
//! API ([`api::ShelfApi`])
//!   thin facade, owns the composition (store, favorites, language)
//!            │
//! Commands (commands/*.rs)
//!   business logic per operation, returns structured [`commands::CmdResult`]
//!            │
//! Storage ([`store::KvStore`])
//!   durable key-value blobs: FileStore in production, MemoryStore in tests
//! ```
//!
//! From `api.rs` inward no code writes to stdout/stderr, calls
//! `std::process::exit`, or assumes a terminal.
//!
//! ## The data
//!
//! The catalog itself is static: a hand-authored, localized set of AI
//! image-generation case studies embedded at compile time ([`catalog`]).
//! The only durable state is user preference data — favorites and the
//! display language — kept in the blob store and owned by
//! [`favorites::Favorites`] and [`i18n`] respectively.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business logic for each command
//! - [`catalog`]: the embedded case data and derivation helpers
//! - [`favorites`]: the favorites store, synchronized to durable storage
//! - [`search`]: client-side filtering over the catalog
//! - [`i18n`]: UI string tables and language persistence
//! - [`store`]: storage abstraction and backends
//! - [`model`]: core data types (`Case`, `Lang`, `LocalizedText`)
//! - [`error`]: error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod error;
pub mod favorites;
pub mod i18n;
pub mod model;
pub mod search;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_fixtures;

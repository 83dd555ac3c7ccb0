//! Storage layer for cvkit.
//!
//! The core engine only requires a flat key-value byte store; [`KvStore`]
//! is that capability, with a SQLite-backed implementation for the CLI and
//! an in-memory one for tests and `--ephemeral` runs. [`ResumeStore`]
//! layers the two logical records (document, template) on top and absorbs
//! storage corruption at the boundary.

pub mod kv;
pub mod resume_store;
pub mod sqlite;

pub use kv::{KvStore, MemoryStore};
pub use resume_store::{DOCUMENT_KEY, ResumeStore, TEMPLATE_KEY};
pub use sqlite::SqliteStore;

pub mod app;
pub mod cli;
pub mod error;
pub mod render;
pub mod resume;
pub mod storage;

pub use error::{CvError, Result};

/// Package version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Application context assembled from CLI flags.

use std::path::PathBuf;

use tracing::debug;

use crate::cli::Cli;
use crate::error::{CvError, Result};
use crate::storage::{KvStore, MemoryStore, ResumeStore, SqliteStore};

/// Shared state for command handlers: the opened store plus output flags.
pub struct AppContext {
    pub store: ResumeStore<Box<dyn KvStore>>,
    pub robot_mode: bool,
    pub quiet: bool,
}

impl AppContext {
    /// Build the context from parsed CLI flags, opening the backing store.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let store: Box<dyn KvStore> = if cli.ephemeral {
            debug!("using ephemeral in-memory store");
            Box::new(MemoryStore::new())
        } else {
            let path = db_path(cli.data_dir.clone())?;
            debug!(path = %path.display(), "opening sqlite store");
            Box::new(SqliteStore::open(path)?)
        };

        Ok(Self {
            store: ResumeStore::new(store),
            robot_mode: cli.robot,
            quiet: cli.quiet,
        })
    }
}

fn db_path(data_dir: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match data_dir {
        Some(dir) => dir,
        None => dirs::data_dir()
            .ok_or_else(|| CvError::Config("cannot determine data directory; pass --data-dir".into()))?
            .join("cvkit"),
    };
    Ok(dir.join("cvkit.db"))
}

//! SQLite bootstrap for the key-value store.
//!
//! The database holds a single `kv_entries` table. Its layout version is
//! stamped into `PRAGMA user_version` so a file written by a newer build is
//! refused instead of being silently reused.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;

pub use open::{open_db, open_db_in_memory, KV_SCHEMA_VERSION};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// File was stamped by a build with a newer `kv_entries` layout.
    NewerLayout { found: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite: {err}"),
            Self::NewerLayout { found } => write!(
                f,
                "kv layout version {found} was written by a newer build (this build knows {KV_SCHEMA_VERSION})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::NewerLayout { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

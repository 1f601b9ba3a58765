//! SQLite bootstrap for the wishlist store.
//!
//! # Responsibility
//! - Open connections, run migrations, and verify the `wishlists` shape
//!   before any repository sees the connection.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - A connection handed out by `open_db*` always passes
//!   `schema::verify_wishlist_schema`.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};
pub use schema::verify_wishlist_schema;

pub type DbResult<T> = Result<T, DbError>;

/// Failure while opening, migrating or verifying the wishlist store.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// Database was written by a newer build.
    SchemaTooNew { found: u32, supported: u32 },
    /// Database has not been migrated to the version this build expects.
    SchemaOutdated { found: u32, expected: u32 },
    MissingTable(&'static str),
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "wishlist store schema version {found} is newer than supported {supported}"
            ),
            Self::SchemaOutdated { found, expected } => write!(
                f,
                "wishlist store schema version {found} does not match expected {expected}; open it with db::open_db first"
            ),
            Self::MissingTable(table) => write!(f, "wishlist store is missing table `{table}`"),
            Self::MissingColumn { table, column } => {
                write!(f, "wishlist store is missing column `{table}.{column}`")
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

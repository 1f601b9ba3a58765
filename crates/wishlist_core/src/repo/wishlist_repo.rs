//! Wishlist repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide list/create APIs over the `wishlists` table.
//! - Own timestamp assignment and soft-delete bookkeeping.
//!
//! # Invariants
//! - `created_at == updated_at` for freshly created rows.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::{verify_wishlist_schema, DbError};
use crate::model::wishlist::{Wishlist, WishlistId, WishlistInput};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const WISHLIST_SELECT_SQL: &str = "SELECT
    id,
    title,
    is_achieved,
    created_at,
    updated_at,
    deleted_at
FROM wishlists";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for wishlist persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(WishlistId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "wishlist not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted wishlist data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage port consumed by `WishlistUsecase`.
pub trait WishlistRepository {
    /// Lists live (not soft-deleted) wishlists.
    fn get_all(&self) -> RepoResult<Vec<Wishlist>>;
    /// Persists a new wishlist and returns the stored record.
    fn create(&self, input: &WishlistInput) -> RepoResult<Wishlist>;
}

/// SQLite-backed wishlist repository.
pub struct SqliteWishlistRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteWishlistRepository<'conn> {
    /// Wraps a connection after `db::verify_wishlist_schema` accepts it.
    ///
    /// Connections that did not come from `db::open_db*` fail with
    /// `RepoError::Db`.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        verify_wishlist_schema(conn)?;
        Ok(Self { conn })
    }

    /// Stamps `deleted_at` on one wishlist.
    ///
    /// Repeated calls keep the first tombstone timestamp.
    pub fn soft_delete(&self, id: WishlistId) -> RepoResult<()> {
        let now = Utc::now();
        let changed = self.conn.execute(
            "UPDATE wishlists
             SET
                deleted_at = COALESCE(deleted_at, ?1),
                updated_at = ?1
             WHERE id = ?2;",
            params![now, id],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    /// Loads one wishlist by id, including soft-deleted rows.
    pub fn find(&self, id: WishlistId) -> RepoResult<Option<Wishlist>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{WISHLIST_SELECT_SQL} WHERE id = ?1;"))?;
        let row = stmt
            .query_row([id], |row| Ok(parse_wishlist_row(row)))
            .optional()?;
        row.transpose()
    }
}

impl WishlistRepository for SqliteWishlistRepository<'_> {
    fn get_all(&self) -> RepoResult<Vec<Wishlist>> {
        let mut stmt = self.conn.prepare(&format!(
            "{WISHLIST_SELECT_SQL}
             WHERE deleted_at IS NULL
             ORDER BY id ASC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut wishlists = Vec::new();
        while let Some(row) = rows.next()? {
            wishlists.push(parse_wishlist_row(row)?);
        }

        Ok(wishlists)
    }

    fn create(&self, input: &WishlistInput) -> RepoResult<Wishlist> {
        let now = Utc::now();
        self.conn.execute(
            "INSERT INTO wishlists (
                title,
                is_achieved,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?3);",
            params![input.title.as_str(), input.is_achieved, now],
        )?;

        let id = self.conn.last_insert_rowid();
        self.find(id)?.ok_or(RepoError::NotFound(id))
    }
}

fn parse_wishlist_row(row: &Row<'_>) -> RepoResult<Wishlist> {
    let id: WishlistId = row.get("id")?;
    let is_achieved = match row.get::<_, i64>("is_achieved")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid is_achieved value `{other}` in wishlists.is_achieved (id {id})"
            )));
        }
    };

    Ok(Wishlist {
        id,
        title: row.get("title")?,
        is_achieved,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
        deleted_at: row.get("deleted_at")?,
    })
}

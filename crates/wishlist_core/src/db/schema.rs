//! Shape checks for the `wishlists` table.

use super::migrations::{current_version, latest_version};
use super::{DbError, DbResult};
use rusqlite::Connection;

pub const WISHLISTS_TABLE: &str = "wishlists";
pub const WISHLISTS_COLUMNS: &[&str] = &[
    "id",
    "title",
    "is_achieved",
    "created_at",
    "updated_at",
    "deleted_at",
];

/// Checks that `conn` is migrated and carries every `wishlists` column.
pub fn verify_wishlist_schema(conn: &Connection) -> DbResult<()> {
    let expected = latest_version();
    let found = current_version(conn)?;
    if found != expected {
        return Err(DbError::SchemaOutdated { found, expected });
    }

    let mut stmt = conn.prepare(&format!("PRAGMA table_info({WISHLISTS_TABLE});"))?;
    let present = stmt
        .query_map([], |row| row.get::<_, String>("name"))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    // table_info yields no rows for an unknown table.
    if present.is_empty() {
        return Err(DbError::MissingTable(WISHLISTS_TABLE));
    }

    match WISHLISTS_COLUMNS
        .iter()
        .find(|column| !present.iter().any(|name| name == *column))
    {
        Some(column) => Err(DbError::MissingColumn {
            table: WISHLISTS_TABLE,
            column: *column,
        }),
        None => Ok(()),
    }
}

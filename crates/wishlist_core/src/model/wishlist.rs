//! Wishlist domain model.
//!
//! # Responsibility
//! - Define the persisted wishlist record and its wire shape.
//! - Define `WishlistInput`, the creation request accepted by use-cases.
//!
//! # Invariants
//! - `id` and timestamps are assigned by storage, never by callers.
//! - `deleted_at` is the source of truth for tombstone state.
//! - `title` must be non-empty at creation time (checked by the use-case).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Unix seconds of `0001-01-01T00:00:00Z`.
const ZERO_TIME_UNIX_SECS: i64 = -62_135_596_800;

/// Storage-assigned wishlist identifier.
pub type WishlistId = i64;

/// Persisted wishlist record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wishlist {
    pub id: WishlistId,
    pub title: String,
    pub is_achieved: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft delete tombstone. Serialized as `null` while the record is live.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Wishlist {
    /// Returns whether this record has been softly deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Creation request for a wishlist record.
///
/// Missing fields deserialize to their zero values so that transport layers
/// can hand partial payloads straight to the use-case for validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WishlistInput {
    pub title: String,
    pub is_achieved: bool,
}

impl WishlistInput {
    pub fn new(title: impl Into<String>, is_achieved: bool) -> Self {
        Self {
            title: title.into(),
            is_achieved,
        }
    }

    /// Validates creation invariants.
    ///
    /// Only the empty string is rejected; whitespace-only titles pass.
    pub fn validate(&self) -> Result<(), WishlistValidationError> {
        if self.title.is_empty() {
            return Err(WishlistValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Validation error for wishlist creation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistValidationError {
    EmptyTitle,
}

impl Display for WishlistValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title cannot be empty"),
        }
    }
}

impl Error for WishlistValidationError {}

/// Returns `0001-01-01T00:00:00Z`, the zero timestamp.
pub fn zero_time() -> DateTime<Utc> {
    DateTime::from_timestamp(ZERO_TIME_UNIX_SECS, 0).expect("zero time is within chrono range")
}

//! Domain model for wishlist records.
//!
//! # Responsibility
//! - Define the record shape shared by storage, use-cases and callers.
//! - Define the creation request shape accepted by use-cases.
//!
//! # Invariants
//! - Deletion is represented by a soft-delete timestamp, not hard delete.

pub mod wishlist;

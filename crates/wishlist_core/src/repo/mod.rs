//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract consumed by wishlist use-cases.
//! - Isolate SQLite query details from use-case orchestration.
//!
//! # Invariants
//! - Repositories never validate creation input; that belongs to use-cases.
//! - Soft-deleted rows are invisible to list reads.

pub mod wishlist_repo;

//! Application use-cases.
//!
//! # Responsibility
//! - Validate caller input before it reaches storage.
//! - Keep transport layers decoupled from storage details.

pub mod wishlist_usecase;

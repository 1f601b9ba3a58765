//! Core domain logic for the wishlist API.
//! Transport layers call into `WishlistUsecase`; storage lives behind
//! `WishlistRepository`.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod usecase;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::wishlist::{
    zero_time, Wishlist, WishlistId, WishlistInput, WishlistValidationError,
};
pub use repo::wishlist_repo::{RepoError, RepoResult, SqliteWishlistRepository, WishlistRepository};
pub use usecase::wishlist_usecase::{UsecaseError, WishlistUsecase};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

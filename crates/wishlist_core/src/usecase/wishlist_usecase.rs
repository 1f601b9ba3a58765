//! Wishlist use-case.
//!
//! # Responsibility
//! - Expose list/create entry points to transport callers.
//! - Reject empty titles before any storage call.
//!
//! # Invariants
//! - Repository results and errors are returned unchanged.
//! - A rejected input never reaches `WishlistRepository::create`.

use crate::model::wishlist::{Wishlist, WishlistInput, WishlistValidationError};
use crate::repo::wishlist_repo::{RepoError, WishlistRepository};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Error returned by wishlist use-cases.
#[derive(Debug)]
pub enum UsecaseError {
    /// Creation input had an empty title.
    TitleEmpty,
    /// Storage failure, carried unmodified.
    Repo(RepoError),
}

impl Display for UsecaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleEmpty => write!(f, "{}", WishlistValidationError::EmptyTitle),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for UsecaseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::TitleEmpty => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for UsecaseError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<WishlistValidationError> for UsecaseError {
    fn from(value: WishlistValidationError) -> Self {
        match value {
            WishlistValidationError::EmptyTitle => Self::TitleEmpty,
        }
    }
}

/// Use-case facade over a wishlist repository.
pub struct WishlistUsecase<R: WishlistRepository> {
    repo: R,
}

impl<R: WishlistRepository> WishlistUsecase<R> {
    /// Creates a use-case bound to `repo` for its whole lifetime.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists wishlists exactly as the repository returns them.
    pub fn get_all(&self) -> Result<Vec<Wishlist>, UsecaseError> {
        let started_at = Instant::now();
        match self.repo.get_all() {
            Ok(wishlists) => {
                info!(
                    "event=wishlist_get_all module=usecase status=ok count={} duration_ms={}",
                    wishlists.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(wishlists)
            }
            Err(err) => {
                warn!(
                    "event=wishlist_get_all module=usecase status=error duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err.into())
            }
        }
    }

    /// Creates one wishlist.
    ///
    /// # Contract
    /// - Empty title fails with `UsecaseError::TitleEmpty` and skips storage.
    /// - Otherwise `input` is forwarded as-is and the repository outcome is
    ///   returned unchanged.
    pub fn create(&self, input: WishlistInput) -> Result<Wishlist, UsecaseError> {
        if let Err(err) = input.validate() {
            warn!("event=wishlist_create module=usecase status=rejected reason={err}");
            return Err(err.into());
        }

        let started_at = Instant::now();
        match self.repo.create(&input) {
            Ok(wishlist) => {
                info!(
                    "event=wishlist_create module=usecase status=ok id={} duration_ms={}",
                    wishlist.id,
                    started_at.elapsed().as_millis()
                );
                Ok(wishlist)
            }
            Err(err) => {
                warn!(
                    "event=wishlist_create module=usecase status=error duration_ms={} error={err}",
                    started_at.elapsed().as_millis()
                );
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{UsecaseError, WishlistUsecase};
    use crate::db::DbError;
    use crate::model::wishlist::{zero_time, Wishlist, WishlistInput};
    use crate::repo::wishlist_repo::{RepoError, RepoResult, WishlistRepository};
    use std::cell::RefCell;
    use std::error::Error;
    use std::rc::Rc;

    /// Canned repository; records every `create` input it receives.
    #[derive(Default)]
    struct FakeWishlistRepo {
        wishlists: Vec<Wishlist>,
        wishlist: Option<Wishlist>,
        error: Option<&'static str>,
        created: Rc<RefCell<Vec<WishlistInput>>>,
    }

    impl FakeWishlistRepo {
        fn failure(&self) -> Option<RepoError> {
            self.error.map(database_error)
        }
    }

    impl WishlistRepository for FakeWishlistRepo {
        fn get_all(&self) -> RepoResult<Vec<Wishlist>> {
            match self.failure() {
                Some(err) => Err(err),
                None => Ok(self.wishlists.clone()),
            }
        }

        fn create(&self, input: &WishlistInput) -> RepoResult<Wishlist> {
            self.created.borrow_mut().push(input.clone());
            if let Some(err) = self.failure() {
                return Err(err);
            }
            self.wishlist
                .clone()
                .ok_or_else(|| RepoError::InvalidData("no canned wishlist".to_string()))
        }
    }

    fn database_error(message: &str) -> RepoError {
        RepoError::Db(DbError::Sqlite(rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_ERROR),
            Some(message.to_string()),
        )))
    }

    fn house() -> Wishlist {
        Wishlist {
            id: 1,
            title: "Rumah 2 lantai".to_string(),
            is_achieved: false,
            created_at: zero_time(),
            updated_at: zero_time(),
            deleted_at: None,
        }
    }

    #[test]
    fn get_all_returns_repository_rows() {
        let usecase = WishlistUsecase::new(FakeWishlistRepo {
            wishlists: vec![house()],
            ..FakeWishlistRepo::default()
        });

        let result = usecase.get_all().unwrap();
        assert_eq!(result, vec![house()]);
    }

    #[test]
    fn get_all_surfaces_repository_error() {
        let usecase = WishlistUsecase::new(FakeWishlistRepo {
            error: Some("database error"),
            ..FakeWishlistRepo::default()
        });

        let err = usecase.get_all().unwrap_err();
        assert!(matches!(err, UsecaseError::Repo(RepoError::Db(_))));
        assert_eq!(err.to_string(), "database error");
    }

    #[test]
    fn repository_error_stays_in_source_chain() {
        let usecase = WishlistUsecase::new(FakeWishlistRepo {
            error: Some("database error"),
            ..FakeWishlistRepo::default()
        });

        let err = usecase.get_all().unwrap_err();
        let source = err.source().unwrap();
        assert!(source.downcast_ref::<RepoError>().is_some());
        assert!(UsecaseError::TitleEmpty.source().is_none());
    }

    #[test]
    fn create_forwards_input_unchanged() {
        let created = Rc::new(RefCell::new(Vec::new()));
        let usecase = WishlistUsecase::new(FakeWishlistRepo {
            wishlist: Some(house()),
            created: Rc::clone(&created),
            ..FakeWishlistRepo::default()
        });

        let input = WishlistInput::new("Rumah 2 lantai", false);
        let result = usecase.create(input.clone()).unwrap();

        assert_eq!(result, house());
        assert_eq!(*created.borrow(), vec![input]);
    }

    #[test]
    fn create_surfaces_repository_error_verbatim() {
        let usecase = WishlistUsecase::new(FakeWishlistRepo {
            error: Some("database error"),
            ..FakeWishlistRepo::default()
        });

        let err = usecase
            .create(WishlistInput::new("Rumah 2 lantai", false))
            .unwrap_err();
        assert_eq!(err.to_string(), "database error");
    }

    #[test]
    fn create_rejects_empty_title_without_touching_repository() {
        let created = Rc::new(RefCell::new(Vec::new()));
        let usecase = WishlistUsecase::new(FakeWishlistRepo {
            error: Some("email not found"),
            created: Rc::clone(&created),
            ..FakeWishlistRepo::default()
        });

        let err = usecase.create(WishlistInput::default()).unwrap_err();

        assert!(matches!(err, UsecaseError::TitleEmpty));
        assert_eq!(err.to_string(), "title cannot be empty");
        assert!(created.borrow().is_empty());
    }

    #[test]
    fn create_accepts_whitespace_only_title() {
        let created = Rc::new(RefCell::new(Vec::new()));
        let mut stored = house();
        stored.title = "   ".to_string();
        let usecase = WishlistUsecase::new(FakeWishlistRepo {
            wishlist: Some(stored),
            created: Rc::clone(&created),
            ..FakeWishlistRepo::default()
        });

        let result = usecase.create(WishlistInput::new("   ", true)).unwrap();

        assert_eq!(result.title, "   ");
        assert_eq!(created.borrow()[0].title, "   ");
    }
}

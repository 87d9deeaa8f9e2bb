//! Persisted login session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router's guard and every identity-aware API operation read the session
//! through [`SessionStore`]. The store never caches: each call goes back to
//! the underlying [`SessionStorage`], so a value read after an `.await` is
//! always current.

pub mod storage;
mod store;

pub use storage::{FileStorage, MemoryStorage, SessionStorage, StorageError};
pub use store::{LOGGED_IN_KEY, SessionStore, USER_ID_KEY};

/// Authentication state as persisted by the login flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    pub is_logged_in: bool,
    pub user_id: Option<i64>,
}

impl Session {
    /// Session written by a successful login.
    #[must_use]
    pub fn authenticated(user_id: i64) -> Self {
        Self { is_logged_in: true, user_id: Some(user_id) }
    }

    /// Both flags must agree. A stale `isLoggedIn` with no `user_id` is not
    /// a login.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.is_logged_in && self.user_id.is_some()
    }
}

//! Typed view over the two persisted session keys.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;

use super::Session;
use super::storage::{SessionStorage, StorageError};
use crate::config::DEFAULT_FALLBACK_USER_ID;

/// Decimal user id written by the login flow.
pub const USER_ID_KEY: &str = "user_id";
/// `"true"` while logged in; any other value or absence means logged out.
pub const LOGGED_IN_KEY: &str = "isLoggedIn";

const LOGGED_IN_VALUE: &str = "true";

/// Session accessor shared by the router and the API client.
///
/// Cloning is cheap and every clone reads the same storage.
pub struct SessionStore<S> {
    storage: Arc<S>,
    fallback_user_id: i64,
}

impl<S> Clone for SessionStore<S> {
    fn clone(&self) -> Self {
        Self { storage: Arc::clone(&self.storage), fallback_user_id: self.fallback_user_id }
    }
}

impl<S: SessionStorage> SessionStore<S> {
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::from_shared(Arc::new(storage))
    }

    #[must_use]
    pub fn from_shared(storage: Arc<S>) -> Self {
        Self { storage, fallback_user_id: DEFAULT_FALLBACK_USER_ID }
    }

    /// Override the anonymous/development identity returned by
    /// [`SessionStore::current_user_id`] when nobody is logged in.
    #[must_use]
    pub fn with_fallback_user_id(mut self, user_id: i64) -> Self {
        self.fallback_user_id = user_id;
        self
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn fallback_user_id(&self) -> i64 {
        self.fallback_user_id
    }

    /// Read both flags. Absent or malformed values read as logged out.
    #[must_use]
    pub fn get_session(&self) -> Session {
        let is_logged_in = self
            .storage
            .get_item(LOGGED_IN_KEY)
            .is_some_and(|v| v == LOGGED_IN_VALUE);
        let user_id = self
            .storage
            .get_item(USER_ID_KEY)
            .and_then(|raw| raw.trim().parse::<i64>().ok());
        Session { is_logged_in, user_id }
    }

    /// Persist both flags.
    ///
    /// The id is written before the logged-in flag and the flag is removed
    /// before the id, so a reader between the two writes never sees
    /// `isLoggedIn` without a `user_id`. If any write fails both keys are
    /// cleared, leaving the caller logged out rather than half logged in.
    ///
    /// # Errors
    ///
    /// Returns the first [`StorageError`] the backend reported.
    pub fn set_session(&self, session: Session) -> Result<(), StorageError> {
        let result = self.write_session(session);
        if result.is_err() {
            self.clear_session();
        }
        result
    }

    /// Remove both flags. Failures are logged; a later read still sees
    /// whatever the backend kept.
    pub fn clear_session(&self) {
        let _ = self.write(LOGGED_IN_KEY, None);
        let _ = self.write(USER_ID_KEY, None);
    }

    /// Persist the session returned by a successful login.
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::set_session`].
    pub fn record_login(&self, user_id: i64) -> Result<(), StorageError> {
        self.set_session(Session::authenticated(user_id))
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.get_session().is_authenticated()
    }

    /// Identity to act as for API calls.
    ///
    /// Falls back to the configured anonymous id when no `user_id` is stored.
    /// That fallback exists for local development and is logged every time.
    #[must_use]
    pub fn current_user_id(&self) -> i64 {
        if let Some(id) = self.get_session().user_id {
            return id;
        }
        tracing::warn!(
            fallback_user_id = self.fallback_user_id,
            "no user_id in session; acting as anonymous development user"
        );
        self.fallback_user_id
    }

    fn write_session(&self, session: Session) -> Result<(), StorageError> {
        if let Some(id) = session.user_id {
            self.write(USER_ID_KEY, Some(&id.to_string()))?;
        }
        self.write(LOGGED_IN_KEY, session.is_logged_in.then_some(LOGGED_IN_VALUE))?;
        if session.user_id.is_none() {
            self.write(USER_ID_KEY, None)?;
        }
        Ok(())
    }

    fn write(&self, key: &str, value: Option<&str>) -> Result<(), StorageError> {
        let result = match value {
            Some(v) => self.storage.set_item(key, v),
            None => self.storage.remove_item(key),
        };
        if let Err(e) = &result {
            tracing::warn!(key, error = %e, "session storage write failed");
        }
        result
    }
}

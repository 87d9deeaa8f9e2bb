//! Account registration and login.
//!
//! No identity injection: there is no user yet.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::types::{LoginRequest, LoginResponse, RegisterRequest, Registration};
use super::{ApiClient, ApiError, ApiRequest, Transport, encode};
use crate::api::error::Operation;
use crate::session::SessionStorage;

const REGISTER: Operation = Operation::new("register", "회원가입 실패");
const LOGIN: Operation = Operation::new("login", "로그인 실패");

impl<T: Transport, S: SessionStorage> ApiClient<T, S> {
    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with the server's message or `회원가입 실패`.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<Registration, ApiError> {
        let request = ApiRequest::post("/auth/register").json(encode(REGISTER, payload)?);
        self.execute(REGISTER, request).await
    }

    /// `POST /auth/login`. Does not touch the session; see [`ApiClient::sign_in`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with the server's message or `로그인 실패`.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let request = ApiRequest::post("/auth/login").json(encode(LOGIN, payload)?);
        self.execute(LOGIN, request).await
    }

    /// Log in and persist the returned `user_id` as the session.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::login`]; a rejected login leaves the session
    /// untouched. A session that cannot be persisted reports `로그인 실패` and
    /// leaves the user logged out.
    pub async fn sign_in(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self.login(payload).await?;
        if let Err(e) = self.session.record_login(response.user_id) {
            tracing::warn!(
                operation = LOGIN.name,
                error = %e,
                "login succeeded but session was not persisted"
            );
            return Err(LOGIN.failure(None));
        }
        tracing::debug!(user_id = response.user_id, "signed in");
        Ok(response)
    }

    /// Forget the stored session.
    pub fn sign_out(&self) {
        self.session.clear_session();
    }
}

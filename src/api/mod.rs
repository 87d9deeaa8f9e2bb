//! Typed REST client for the pantry backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call one [`ApiClient`] method per backend action. Operations that act
//! as the current user read the id from the [`SessionStore`] immediately
//! before building the request, so callers never pass identity and a login
//! or logout between two calls is always observed.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns [`ApiError::RequestFailed`] on any failure. There
//! is no retry, queueing or caching; concurrent calls are independent and the
//! caller discards stale responses.

mod auth;
mod error;
mod health;
mod inventory;
mod receipts;
mod recipes;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub use error::ApiError;
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport, TransportError};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{ClientConfig, ConfigError};
use crate::session::{SessionStorage, SessionStore};
use error::Operation;

pub struct ApiClient<T, S> {
    transport: T,
    session: SessionStore<S>,
    config: ClientConfig,
}

impl<S: SessionStorage> ApiClient<ReqwestTransport, S> {
    /// Client over HTTP using `config`.
    ///
    /// The session store's anonymous fallback is set from
    /// `config.fallback_user_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: ClientConfig, session: SessionStore<S>) -> Result<Self, ConfigError> {
        let transport = ReqwestTransport::new(&config)?;
        Ok(Self::new(transport, session, config))
    }
}

impl<T: Transport, S: SessionStorage> ApiClient<T, S> {
    #[must_use]
    pub fn new(transport: T, session: SessionStore<S>, config: ClientConfig) -> Self {
        let session = session.with_fallback_user_id(config.fallback_user_id);
        Self { transport, session, config }
    }

    #[must_use]
    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL for a server-relative asset path such as a receipt image.
    #[must_use]
    pub fn asset_url(&self, path: &str) -> String {
        self.config.asset_url(path)
    }

    fn current_user_id(&self) -> i64 {
        self.session.current_user_id()
    }

    async fn execute<R: DeserializeOwned>(&self, op: Operation, request: ApiRequest) -> Result<R, ApiError> {
        let response = self.transport.send(request).await.map_err(|e| {
            tracing::debug!(operation = op.name, error = %e, "request not sent");
            op.failure(None)
        })?;

        if !response.is_success() {
            tracing::debug!(operation = op.name, status = response.status, "request rejected");
            return Err(op.rejected(response.status, &response.body));
        }

        // An empty success body (e.g. 204) decodes as `null`.
        let body = if response.body.trim().is_empty() { "null" } else { response.body.as_str() };
        serde_json::from_str(body).map_err(|e| {
            tracing::debug!(operation = op.name, error = %e, "response body not decodable");
            op.failure(None)
        })
    }
}

fn encode<B: Serialize>(op: Operation, body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| {
        tracing::debug!(operation = op.name, error = %e, "request body not encodable");
        op.failure(None)
    })
}

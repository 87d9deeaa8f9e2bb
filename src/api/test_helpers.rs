//! Recording transport and client constructors for API tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::ApiClient;
use super::transport::{ApiRequest, ApiResponse, Transport, TransportError};
use crate::config::ClientConfig;
use crate::session::{MemoryStorage, SessionStorage, SessionStore, StorageError};

/// Replays queued responses in order and records every request it receives.
/// An empty queue answers `200 {}`.
#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
}

impl MockTransport {
    pub fn respond(&self, status: u16, body: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse { status, body: body.to_owned() }));
    }

    pub fn fail(&self, reason: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(TransportError::Request(reason.to_owned())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse { status: 200, body: "{}".to_owned() }))
    }
}

pub type TestClient = ApiClient<Arc<MockTransport>, MemoryStorage>;

/// Client whose storage starts with `pairs`.
pub fn client_with(pairs: &[(&str, &str)]) -> (Arc<MockTransport>, TestClient) {
    let transport = Arc::new(MockTransport::default());
    let session = SessionStore::new(MemoryStorage::with_items(pairs));
    let client = ApiClient::new(Arc::clone(&transport), session, ClientConfig::default());
    (transport, client)
}

/// Client with a full session for `user_id`.
pub fn logged_in(user_id: i64) -> (Arc<MockTransport>, TestClient) {
    let id = user_id.to_string();
    client_with(&[("isLoggedIn", "true"), ("user_id", id.as_str())])
}

/// Client with no stored session.
pub fn anonymous() -> (Arc<MockTransport>, TestClient) {
    client_with(&[])
}

/// Storage that refuses to persist `rejected_key`, as a full or read-only
/// backend would. Everything else goes to an in-memory map.
pub struct RejectingStorage {
    pub inner: MemoryStorage,
    pub rejected_key: &'static str,
}

impl RejectingStorage {
    pub fn rejecting(rejected_key: &'static str) -> Self {
        Self { inner: MemoryStorage::new(), rejected_key }
    }
}

impl SessionStorage for RejectingStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if key == self.rejected_key {
            return Err(StorageError::Io(std::io::Error::other("quota exceeded")));
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key)
    }
}

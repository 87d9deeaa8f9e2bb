use std::sync::Arc;

use super::test_helpers::{MockTransport, logged_in};
use super::*;
use crate::session::MemoryStorage;

#[tokio::test]
async fn configured_fallback_reaches_requests() {
    let transport = Arc::new(MockTransport::default());
    let config = ClientConfig { fallback_user_id: 77, ..ClientConfig::default() };
    let client = ApiClient::new(Arc::clone(&transport), SessionStore::new(MemoryStorage::new()), config);

    client.get_inventory().await.unwrap();
    assert_eq!(transport.last_request().query_value("user_id"), Some("77"));
}

#[tokio::test]
async fn every_request_is_sent_once() {
    let (transport, client) = logged_in(1);
    transport.respond(500, "");
    transport.respond(200, "[]");

    assert!(client.get_items().await.is_err());
    assert!(client.get_items().await.is_ok());
    assert_eq!(transport.requests().len(), 2);
}

#[test]
fn asset_url_uses_configured_host() {
    let (_transport, client) = logged_in(1);
    assert_eq!(client.asset_url("/uploads/receipt.png"), "http://localhost:3000/uploads/receipt.png");
}

#[test]
fn from_config_builds_reqwest_client() {
    let client = ApiClient::from_config(ClientConfig::default(), SessionStore::new(MemoryStorage::new())).unwrap();
    assert_eq!(client.config().api_base, "http://localhost:3000/api");
    assert_eq!(client.session().fallback_user_id(), 1);
}

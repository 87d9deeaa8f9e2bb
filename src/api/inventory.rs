//! The current user's inventory and the global item catalog.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use super::types::{InventoryDeletion, InventoryList, ItemCatalog};
use super::{ApiClient, ApiError, ApiRequest, Transport};
use crate::api::error::Operation;
use crate::session::SessionStorage;

const GET_INVENTORY: Operation = Operation::new("get_inventory", "재고 조회 실패");
const DELETE_INVENTORY: Operation = Operation::new("delete_inventory", "재고 삭제 실패");
const GET_ITEMS: Operation = Operation::new("get_items", "품목 조회 실패");

impl<T: Transport, S: SessionStorage> ApiClient<T, S> {
    /// `GET /inventories?user_id=`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with the server's message or `재고 조회 실패`.
    pub async fn get_inventory(&self) -> Result<InventoryList, ApiError> {
        let request = ApiRequest::get("/inventories").query("user_id", self.current_user_id());
        self.execute(GET_INVENTORY, request).await
    }

    /// Alias of [`ApiClient::get_inventory`].
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get_inventory`].
    pub async fn list_inventory(&self) -> Result<InventoryList, ApiError> {
        self.get_inventory().await
    }

    /// `DELETE /inventories/{inventory_id}?user_id=`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with the server's message or `재고 삭제 실패`.
    pub async fn delete_inventory(&self, inventory_id: i64) -> Result<InventoryDeletion, ApiError> {
        let request = ApiRequest::delete(format!("/inventories/{inventory_id}")).query("user_id", self.current_user_id());
        self.execute(DELETE_INVENTORY, request).await
    }

    /// `GET /items`. Global catalog, not user-scoped.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with the server's message or `품목 조회 실패`.
    pub async fn get_items(&self) -> Result<ItemCatalog, ApiError> {
        self.execute(GET_ITEMS, ApiRequest::get("/items")).await
    }
}

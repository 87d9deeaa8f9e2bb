//! Receipt upload, OCR results and the confirm-to-inventory step.

#[cfg(test)]
#[path = "receipts_test.rs"]
mod receipts_test;

use super::transport::{FormPart, FormValue};
use super::types::{CatalogItem, CatalogUpsertResult, InventoryAddResult, InventoryEntry, OcrItems, ReceiptImage, UploadedReceipt};
use super::{ApiClient, ApiError, ApiRequest, Transport};
use crate::api::error::Operation;
use crate::session::SessionStorage;

const UPLOAD_RECEIPT: Operation = Operation::new("upload_receipt_image", "업로드 실패");
const OCR_ITEMS: Operation = Operation::new("get_ocr_items", "OCR 결과 조회 실패");
const UPSERT_ITEMS: Operation = Operation::new("upsert_items_batch", "DB 저장 실패");
const ADD_TO_INVENTORY: Operation = Operation::new("add_to_inventory", "재고 추가 실패");

impl<T: Transport, S: SessionStorage> ApiClient<T, S> {
    /// `POST /receipts/upload` as multipart `receipt` + `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with the server's message or `업로드 실패`.
    pub async fn upload_receipt_image(&self, image: ReceiptImage) -> Result<UploadedReceipt, ApiError> {
        let user_id = self.current_user_id();
        let parts = vec![
            FormPart {
                name: "receipt".to_owned(),
                value: FormValue::File {
                    file_name: image.file_name,
                    content_type: image.content_type,
                    bytes: image.bytes,
                },
            },
            FormPart { name: "user_id".to_owned(), value: FormValue::Text(user_id.to_string()) },
        ];
        let request = ApiRequest::post("/receipts/upload").multipart(parts);
        self.execute(UPLOAD_RECEIPT, request).await
    }

    /// `GET /receipts/{receipt_id}/items`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with the server's message or `OCR 결과 조회 실패`.
    pub async fn get_ocr_items(&self, receipt_id: i64) -> Result<OcrItems, ApiError> {
        let request = ApiRequest::get(format!("/receipts/{receipt_id}/items"));
        self.execute(OCR_ITEMS, request).await
    }

    /// `POST /receipts/items/batch` with `{ items }`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with the server's message or `DB 저장 실패`.
    pub async fn upsert_items_batch(&self, items: &[CatalogItem]) -> Result<CatalogUpsertResult, ApiError> {
        let request = ApiRequest::post("/receipts/items/batch").json(serde_json::json!({ "items": items }));
        self.execute(UPSERT_ITEMS, request).await
    }

    /// `POST /receipts/add-to-inventory` with `{ user_id, items }`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with the server's message or `재고 추가 실패`.
    pub async fn add_to_inventory(&self, items: &[InventoryEntry]) -> Result<InventoryAddResult, ApiError> {
        let user_id = self.current_user_id();
        let request = ApiRequest::post("/receipts/add-to-inventory")
            .json(serde_json::json!({ "user_id": user_id, "items": items }));
        self.execute(ADD_TO_INVENTORY, request).await
    }
}

//! Per-user health profile used for calorie-aware recommendations.

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

use super::types::{HealthProfile, SavedHealthProfile, StoredHealthProfile};
use super::{ApiClient, ApiError, ApiRequest, Transport, encode};
use crate::api::error::Operation;
use crate::session::SessionStorage;

const SAVE_PROFILE: Operation = Operation::new("save_health_profile", "헬스 프로필 저장 실패");
const GET_PROFILE: Operation = Operation::new("get_health_profile", "헬스 프로필 조회 실패");

impl<T: Transport, S: SessionStorage> ApiClient<T, S> {
    /// `POST /health-profile` with the profile fields plus `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with the server's message or `헬스 프로필 저장 실패`.
    pub async fn save_health_profile(&self, profile: &HealthProfile) -> Result<SavedHealthProfile, ApiError> {
        let user_id = self.current_user_id();
        let mut body = encode(SAVE_PROFILE, profile)?;
        if let Some(fields) = body.as_object_mut() {
            fields.insert("user_id".to_owned(), user_id.into());
        }
        self.execute(SAVE_PROFILE, ApiRequest::post("/health-profile").json(body))
            .await
    }

    /// `GET /health-profile?user_id=`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with the server's message or `헬스 프로필 조회 실패`.
    pub async fn get_health_profile(&self) -> Result<StoredHealthProfile, ApiError> {
        let request = ApiRequest::get("/health-profile").query("user_id", self.current_user_id());
        self.execute(GET_PROFILE, request).await
    }
}

//! Recipe search, stored recipes and recommendations.
//!
//! Crawler search and DB recommendations are personalized and carry the
//! current user id; everything else addresses recipes by id or URL.

#[cfg(test)]
#[path = "recipes_test.rs"]
mod recipes_test;

use super::types::{
    CrawledRecipeDetail, CreatedRecipe, CreatedRecipeItem, NewRecipe, NewRecipeItem, RecipeDeletion, RecipeDetail,
    RecipeHealthInfo, RecipeList, RecipeSearchResults, RecommendedRecipes,
};
use super::{ApiClient, ApiError, ApiRequest, Transport, encode};
use crate::api::error::Operation;
use crate::session::SessionStorage;

pub const DEFAULT_SEARCH_LIMIT: u32 = 5;

const SEARCH: Operation = Operation::with_status("search_recipes_from_crawler", "레시피 검색 오류");
const FETCH_DETAIL: Operation = Operation::new("fetch_recipe_detail", "레시피 상세 정보 조회 실패");
const GET_RECIPES: Operation = Operation::new("get_recipes", "레시피 조회 실패");
const GET_RECIPE_DETAIL: Operation = Operation::new("get_recipe_detail", "레시피 상세 조회 실패");
const CREATE_RECIPE: Operation = Operation::new("create_recipe", "레시피 추가 실패");
const ADD_RECIPE_ITEM: Operation = Operation::new("add_recipe_item", "레시피 재료 추가 실패");
const DELETE_RECIPE: Operation = Operation::new("delete_recipe", "레시피 삭제 실패");
const RECOMMEND: Operation = Operation::new("get_recommended_recipes_from_db", "추천 레시피 조회 실패");
const HEALTH_INFO: Operation = Operation::new("get_recipe_health_info", "건강 정보 조회 실패");

impl<T: Transport, S: SessionStorage> ApiClient<T, S> {
    /// `POST /recipes/search` with `{ ingredients, userId, limit }`.
    /// `limit` defaults to [`DEFAULT_SEARCH_LIMIT`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with the server's message or
    /// `레시피 검색 오류: {status}`.
    pub async fn search_recipes_from_crawler(
        &self,
        ingredients: &[String],
        limit: Option<u32>,
    ) -> Result<RecipeSearchResults, ApiError> {
        let user_id = self.current_user_id();
        let body = serde_json::json!({
            "ingredients": ingredients,
            "userId": user_id,
            "limit": limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
        });
        self.execute(SEARCH, ApiRequest::post("/recipes/search").json(body)).await
    }

    /// `POST /recipes/fetch-detail` with `{ url }`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with the server's message or `레시피 상세 정보 조회 실패`.
    pub async fn fetch_recipe_detail(&self, url: &str) -> Result<CrawledRecipeDetail, ApiError> {
        let request = ApiRequest::post("/recipes/fetch-detail").json(serde_json::json!({ "url": url }));
        self.execute(FETCH_DETAIL, request).await
    }

    /// `GET /recipes`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with the server's message or `레시피 조회 실패`.
    pub async fn get_recipes(&self) -> Result<RecipeList, ApiError> {
        self.execute(GET_RECIPES, ApiRequest::get("/recipes")).await
    }

    /// `GET /recipes/{recipe_id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with the server's message or `레시피 상세 조회 실패`.
    pub async fn get_recipe_detail(&self, recipe_id: i64) -> Result<RecipeDetail, ApiError> {
        self.execute(GET_RECIPE_DETAIL, ApiRequest::get(format!("/recipes/{recipe_id}")))
            .await
    }

    /// `POST /recipes`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with the server's message or `레시피 추가 실패`.
    pub async fn create_recipe(&self, recipe: &NewRecipe) -> Result<CreatedRecipe, ApiError> {
        let request = ApiRequest::post("/recipes").json(encode(CREATE_RECIPE, recipe)?);
        self.execute(CREATE_RECIPE, request).await
    }

    /// `POST /recipe-items`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with the server's message or `레시피 재료 추가 실패`.
    pub async fn add_recipe_item(&self, item: &NewRecipeItem) -> Result<CreatedRecipeItem, ApiError> {
        let request = ApiRequest::post("/recipe-items").json(encode(ADD_RECIPE_ITEM, item)?);
        self.execute(ADD_RECIPE_ITEM, request).await
    }

    /// `DELETE /recipes/{recipe_id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with the server's message or `레시피 삭제 실패`.
    pub async fn delete_recipe(&self, recipe_id: i64) -> Result<RecipeDeletion, ApiError> {
        self.execute(DELETE_RECIPE, ApiRequest::delete(format!("/recipes/{recipe_id}")))
            .await
    }

    /// `GET /recipes/recommend/{user_id}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with the server's message or `추천 레시피 조회 실패`.
    pub async fn get_recommended_recipes_from_db(&self) -> Result<RecommendedRecipes, ApiError> {
        let user_id = self.current_user_id();
        self.execute(RECOMMEND, ApiRequest::get(format!("/recipes/recommend/{user_id}")))
            .await
    }

    /// `POST /recipes/health-info` with `{ recipe_url }`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::RequestFailed`] with the server's message or `건강 정보 조회 실패`.
    pub async fn get_recipe_health_info(&self, recipe_url: &str) -> Result<RecipeHealthInfo, ApiError> {
        let request = ApiRequest::post("/recipes/health-info").json(serde_json::json!({ "recipe_url": recipe_url }));
        self.execute(HEALTH_INFO, request).await
    }
}

use super::*;
use crate::api::test_helpers::logged_in;
use crate::api::transport::{Method, RequestBody};

fn ingredients() -> Vec<String> {
    vec!["두부".to_owned(), "김치".to_owned()]
}

// =============================================================================
// Personalized
// =============================================================================

#[tokio::test]
async fn search_injects_camel_case_user_id_and_default_limit() {
    let (transport, client) = logged_in(42);
    client.search_recipes_from_crawler(&ingredients(), None).await.unwrap();

    let req = transport.last_request();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.path, "/recipes/search");
    assert_eq!(
        req.body,
        RequestBody::Json(serde_json::json!({ "ingredients": ["두부", "김치"], "userId": 42, "limit": 5 }))
    );
}

#[tokio::test]
async fn search_honors_explicit_limit() {
    let (transport, client) = logged_in(42);
    client.search_recipes_from_crawler(&ingredients(), Some(12)).await.unwrap();
    let RequestBody::Json(body) = transport.last_request().body else {
        panic!("expected json body");
    };
    assert_eq!(body["limit"], 12);
}

#[tokio::test]
async fn search_default_message_includes_status() {
    let (transport, client) = logged_in(42);
    transport.respond(502, "Bad Gateway");

    let err = client.search_recipes_from_crawler(&ingredients(), None).await.unwrap_err();
    assert_eq!(err.message(), "레시피 검색 오류: 502");
}

#[tokio::test]
async fn recommend_puts_user_id_in_path() {
    let (transport, client) = logged_in(42);
    client.get_recommended_recipes_from_db().await.unwrap();

    let req = transport.last_request();
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.path, "/recipes/recommend/42");
    assert!(req.query.is_empty());
}

#[tokio::test]
async fn recommend_failure_default() {
    let (transport, client) = logged_in(42);
    transport.respond(500, "");
    let err = client.get_recommended_recipes_from_db().await.unwrap_err();
    assert_eq!(err.message(), "추천 레시피 조회 실패");
}

// =============================================================================
// Not personalized
// =============================================================================

#[tokio::test]
async fn fetch_detail_posts_url_only() {
    let (transport, client) = logged_in(42);
    client.fetch_recipe_detail("https://recipes.example.test/r/1").await.unwrap();

    let req = transport.last_request();
    assert_eq!(req.path, "/recipes/fetch-detail");
    assert_eq!(req.body, RequestBody::Json(serde_json::json!({ "url": "https://recipes.example.test/r/1" })));
}

#[tokio::test]
async fn get_recipes_and_detail_paths() {
    let (transport, client) = logged_in(42);
    client.get_recipes().await.unwrap();
    client.get_recipe_detail(3).await.unwrap();

    let paths: Vec<_> = transport.requests().into_iter().map(|r| (r.method, r.path)).collect();
    assert_eq!(paths, vec![(Method::Get, "/recipes".to_owned()), (Method::Get, "/recipes/3".to_owned())]);
}

#[tokio::test]
async fn create_recipe_skips_absent_optionals() {
    let (transport, client) = logged_in(42);
    let recipe = NewRecipe { menu: "김치찌개".into(), description: None, image_url: Some("/img/k.png".into()) };

    client.create_recipe(&recipe).await.unwrap();
    assert_eq!(
        transport.last_request().body,
        RequestBody::Json(serde_json::json!({ "menu": "김치찌개", "image_url": "/img/k.png" }))
    );
}

#[tokio::test]
async fn create_recipe_server_message() {
    let (transport, client) = logged_in(42);
    transport.respond(409, r#"{"error":"이미 존재하는 레시피"}"#);
    let recipe = NewRecipe { menu: "김치찌개".into(), description: None, image_url: None };
    assert_eq!(client.create_recipe(&recipe).await.unwrap_err().message(), "이미 존재하는 레시피");
}

#[tokio::test]
async fn add_recipe_item_body() {
    let (transport, client) = logged_in(42);
    let item = NewRecipeItem { recipe_id: 3, item_id: None, ingredient_name: "두부".into(), quantity: Some(0.5) };

    client.add_recipe_item(&item).await.unwrap();
    let req = transport.last_request();
    assert_eq!(req.path, "/recipe-items");
    assert_eq!(
        req.body,
        RequestBody::Json(serde_json::json!({ "recipe_id": 3, "ingredient_name": "두부", "quantity": 0.5 }))
    );
}

#[tokio::test]
async fn delete_recipe_failure_default() {
    let (transport, client) = logged_in(42);
    transport.respond(500, "{");

    let err = client.delete_recipe(3).await.unwrap_err();
    assert_eq!(err.message(), "레시피 삭제 실패");
    let req = transport.last_request();
    assert_eq!((req.method, req.path.as_str()), (Method::Delete, "/recipes/3"));
}

#[tokio::test]
async fn health_info_posts_recipe_url() {
    let (transport, client) = logged_in(42);
    transport.respond(200, r#"{"calories":420}"#);

    let info = client.get_recipe_health_info("https://recipes.example.test/r/1").await.unwrap();
    assert_eq!(info.as_value()["calories"], 420);
    assert_eq!(
        transport.last_request().body,
        RequestBody::Json(serde_json::json!({ "recipe_url": "https://recipes.example.test/r/1" }))
    );
}

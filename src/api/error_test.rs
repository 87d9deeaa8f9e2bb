use super::*;

const DELETE: Operation = Operation::new("delete_inventory", "재고 삭제 실패");
const SEARCH: Operation = Operation::with_status("search_recipes_from_crawler", "레시피 검색 오류");

// =============================================================================
// server_message
// =============================================================================

#[test]
fn server_message_reads_error_field() {
    assert_eq!(server_message(r#"{"error":"duplicate login id"}"#).as_deref(), Some("duplicate login id"));
}

#[test]
fn server_message_falls_back_to_message_field() {
    assert_eq!(server_message(r#"{"message":"bad receipt"}"#).as_deref(), Some("bad receipt"));
}

#[test]
fn server_message_prefers_error_over_message() {
    assert_eq!(server_message(r#"{"message":"m","error":"e"}"#).as_deref(), Some("e"));
}

#[test]
fn server_message_ignores_empty_and_non_string() {
    assert_eq!(server_message(r#"{"error":""}"#), None);
    assert_eq!(server_message(r#"{"error":{"code":7}}"#), None);
    assert_eq!(server_message(r#"["error"]"#), None);
}

#[test]
fn server_message_unparseable_body() {
    assert_eq!(server_message("<html>502 Bad Gateway</html>"), None);
    assert_eq!(server_message(""), None);
}

// =============================================================================
// Operation
// =============================================================================

#[test]
fn rejected_uses_server_message() {
    let err = DELETE.rejected(400, r#"{"error":"not yours"}"#);
    assert_eq!(err, ApiError::RequestFailed { message: "not yours".into() });
}

#[test]
fn rejected_unparseable_uses_default() {
    let err = DELETE.rejected(500, "oops");
    assert_eq!(err.message(), "재고 삭제 실패");
    assert_eq!(err.to_string(), "재고 삭제 실패");
}

#[test]
fn status_default_includes_status() {
    assert_eq!(SEARCH.rejected(503, "").message(), "레시피 검색 오류: 503");
}

#[test]
fn status_default_without_status_is_prefix() {
    assert_eq!(SEARCH.failure(None).message(), "레시피 검색 오류");
}

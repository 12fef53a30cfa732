use super::*;

#[test]
fn rejected_with_detail_surfaces_detail() {
    let err = StoreError::Rejected { status: 404, detail: Some("Todo not found".to_owned()) };
    assert_eq!(err.user_message("Failed to update todo"), "Todo not found");
}

#[test]
fn rejected_without_detail_uses_fallback() {
    let err = StoreError::Rejected { status: 500, detail: None };
    assert_eq!(err.user_message("Failed to create todo"), "Failed to create todo");
}

#[test]
fn transport_and_decode_use_generic_message() {
    let transport = StoreError::Transport("connection refused".to_owned());
    let decode = StoreError::Decode("expected value".to_owned());
    assert_eq!(transport.user_message("Failed to create todo"), GENERIC_ERROR);
    assert_eq!(decode.user_message("Failed to create todo"), GENERIC_ERROR);
}

#[test]
fn display_includes_status_for_rejections() {
    let err = StoreError::Rejected { status: 422, detail: None };
    assert_eq!(err.to_string(), "request rejected with status 422");
}

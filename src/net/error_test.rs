use super::*;

#[test]
fn status_errors_render_code() {
    assert_eq!(FetchError::Status(502).to_string(), "request failed with status 502");
    assert!(FetchError::Status(404).is_status());
    assert!(!FetchError::Transport("offline".to_owned()).is_status());
}

#[test]
fn serde_errors_become_decode_errors() {
    let err = serde_json::from_str::<Vec<u8>>("{").map_err(FetchError::from);
    assert!(matches!(err, Err(FetchError::Decode(_))));
}

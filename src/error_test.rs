use super::*;

#[test]
fn missing_element_names_the_selector() {
    let err = PageError::MissingElement("#preloader");
    assert_eq!(err.to_string(), "missing element: #preloader");
}

#[test]
fn config_error_converts_from_serde_json() {
    let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = PageError::from(parse);
    assert!(matches!(err, PageError::Config(_)));
    assert!(err.to_string().starts_with("invalid page config"));
}

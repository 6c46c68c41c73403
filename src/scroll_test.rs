use super::*;

#[test]
fn fragment_names_target_id() {
    assert_eq!(fragment_target("#about"), Some("about"));
    assert_eq!(fragment_target("#contact-me"), Some("contact-me"));
}

#[test]
fn bare_hash_targets_nothing() {
    assert_eq!(fragment_target("#"), None);
}

#[test]
fn non_fragment_href_targets_nothing() {
    assert_eq!(fragment_target("https://example.com/#about"), None);
    assert_eq!(fragment_target("about"), None);
    assert_eq!(fragment_target(""), None);
}

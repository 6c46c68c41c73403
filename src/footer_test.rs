use super::*;

#[test]
fn footer_matches_attribution_pattern() {
    assert_eq!(
        footer_text("Augustine Lysander Robin", 2026),
        "\u{a9} 2026 Augustine Lysander Robin. All Rights Reserved."
    );
}

#[test]
fn footer_uses_given_year() {
    assert!(footer_text("X", 1999).starts_with("\u{a9} 1999 X."));
}

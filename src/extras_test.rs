use super::*;

#[test]
fn greeting_has_three_styled_lines() {
    assert_eq!(GREETING.len(), 3);
    assert!(GREETING[0].0.ends_with("Hello, Developer!"));
    assert!(GREETING.iter().all(|(_, css)| css.contains("font-size")));
}

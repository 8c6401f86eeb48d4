#![cfg(test)]
//! The desktop build embeds `ui/assets/theme/main.css`; a missing or blank
//! theme would only show up at runtime as an unstyled window.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_is_not_empty() {
    assert!(!EMBEDDED_CSS.trim().is_empty(), "Embedded theme is empty");
}

#[test]
fn embedded_css_defines_palette() {
    for token in ["--color-bg", "--color-primary", "--color-danger", "body {"] {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

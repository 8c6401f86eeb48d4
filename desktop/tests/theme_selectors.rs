#![cfg(test)]
//! Selectors the Hero and waitlist components rely on must stay in the shared
//! theme. Update `REQUIRED_SELECTORS` together with the component markup.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Layout
    ":root",
    ".page {",
    ".container-main",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--outline",
    ".button:disabled",
    ".spinner",
    // Hero
    ".hero {",
    ".hero__badge",
    ".hero__title-accent",
    ".hero__actions",
    ".hero__traits",
    ".hero__visual",
    // Dialog
    ".dialog__overlay",
    ".dialog__content",
    ".dialog__close",
    // Waitlist states
    ".waitlist__form",
    ".waitlist__input:disabled",
    ".waitlist__success",
    ".waitlist__error",
    ".waitlist__privacy",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(**sel))
        .collect();
    assert!(missing.is_empty(), "Theme is missing selectors: {missing:?}");
}

#[test]
fn navbar_stylesheet_covers_navbar_markup() {
    for sel in [".navbar {", ".navbar__links", ".navbar__link", ".navbar__locale"] {
        assert!(NAVBAR_CSS.contains(sel), "navbar.css is missing `{sel}`");
    }
}

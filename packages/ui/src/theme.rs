use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

/// Shared palette for both themes, keyed on `html[data-theme]` and `body.light-mode`.
#[component]
pub fn AppTheme() -> Element {
    rsx! { document::Link { rel: "stylesheet", href: THEME_CSS } }
}

use dioxus::prelude::*;
use ui::Landing;

#[component]
pub fn Home() -> Element {
    rsx! {
        Landing {}
    }
}

use dioxus::prelude::*;

use crate::i18n::{t, Lang};
use crate::PreferenceMenu;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

const FEATURES: [(&str, &str); 4] = [
    ("blue", "home.feature.matching"),
    ("purple", "home.feature.cv"),
    ("orange", "home.feature.booking"),
    ("green", "home.feature.quality"),
];

const STEPS: [&str; 3] = ["home.step.profile", "home.step.match", "home.step.journey"];

const STATS: [(&str, &str); 4] = [
    ("5000+", "home.stat.students"),
    ("500+", "home.stat.companies"),
    ("200+", "home.stat.mentors"),
    ("95%", "home.stat.success"),
];

/// Public landing page.
#[component]
pub fn Landing() -> Element {
    let lang = crate::use_lang();
    let arrow = if lang.is_rtl() { "←" } else { "→" };

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        nav { class: "landing_nav",
            a { class: "brand", href: "/", {t(lang, "app.name")} }
            ul { class: "nav_links",
                li { a { href: "#home", {t(lang, "nav.home")} } }
                li { a { href: "#features", {t(lang, "nav.features")} } }
                li { a { href: "#how-it-works", {t(lang, "nav.how_it_works")} } }
            }
            div { class: "nav_actions",
                PreferenceMenu {}
                a { class: "btn", href: "/login", {t(lang, "nav.login")} }
                a { class: "btn primary", href: "/selectRole", {t(lang, "nav.signup")} }
            }
        }

        section { id: "home", class: "hero",
            h1 { class: "floating", {t(lang, "home.hero_title")} }
            p { {t(lang, "home.hero_subtitle")} }
            div { class: "cta_row",
                a { class: "btn primary", href: "/selectRole", {t(lang, "common.get_started")} " {arrow}" }
                a { class: "btn", href: "#features", {t(lang, "common.learn_more")} }
            }
        }

        section { id: "features", class: "features",
            div { class: "section_header",
                h2 { {t(lang, "nav.features")} }
                p { {t(lang, "home.features_subtitle")} }
            }
            div { class: "features_grid",
                for (color, key) in FEATURES {
                    FeatureCard { key: "{key}", lang, color, key_prefix: key }
                }
            }
        }

        section { id: "how-it-works", class: "how_it_works",
            div { class: "section_header",
                h2 { {t(lang, "nav.how_it_works")} }
                p { {t(lang, "home.how_subtitle")} }
            }
            div { class: "steps",
                for (i, step) in STEPS.iter().enumerate() {
                    div { key: "{step}", class: "step_card",
                        div { class: "step_number", {format!("{:02}", i + 1)} }
                        h3 { {t(lang, &format!("{step}.title"))} }
                        p { {t(lang, &format!("{step}.body"))} }
                    }
                }
            }
        }

        section { class: "statistics",
            div { class: "stats_row",
                for (value, label) in STATS {
                    div { key: "{label}", class: "stat_card",
                        div { class: "stat_number", "{value}" }
                        div { class: "stat_label", {t(lang, label)} }
                    }
                }
            }
        }

        section { class: "cta_section",
            h2 { {t(lang, "home.ready")} }
            p { {t(lang, "home.join_thousands")} }
            a { class: "btn primary", href: "/selectRole", {t(lang, "home.get_started_now")} }
        }

        footer { class: "landing_footer",
            p { "© 2025 " {t(lang, "app.name")} ". " {t(lang, "home.footer")} }
        }
    }
}

#[component]
fn FeatureCard(lang: Lang, color: &'static str, key_prefix: &'static str) -> Element {
    rsx! {
        div { class: "feature_card",
            div { class: "feature_icon {color}" }
            h3 { {t(lang, &format!("{key_prefix}.title"))} }
            p { {t(lang, &format!("{key_prefix}.body"))} }
        }
    }
}

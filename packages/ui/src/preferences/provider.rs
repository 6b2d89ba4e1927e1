use dioxus::prelude::*;

use super::{
    platform_backend, BackendHandle, Preference, PreferenceError, Preferences, Theme,
};
use crate::i18n::Lang;

/// Handle to the shared preferences, available below [`PreferenceProvider`].
#[derive(Clone, Copy, PartialEq)]
pub struct PreferenceContext {
    state: Signal<Preferences>,
    ready: Signal<bool>,
}

impl PreferenceContext {
    /// Current values. Reading subscribes the calling component.
    pub fn get(&self) -> Preference {
        self.state.read().snapshot()
    }

    pub fn lang(&self) -> Lang {
        self.get().lang
    }

    pub fn theme(&self) -> Theme {
        self.get().theme
    }

    pub fn is_ready(&self) -> bool {
        (self.ready)()
    }

    pub fn toggle_theme(&self) -> Theme {
        let mut state = self.state;
        let theme = state.write().toggle_theme();
        theme
    }

    pub fn set_language(&self, lang: Lang) {
        let mut state = self.state;
        state.write().set_language(lang);
    }
}

/// Owns the preferences for the tree below it.
///
/// Children stay invisible until stored values have been applied after mount,
/// which keeps the first paint from flashing the default theme.
#[component]
pub fn PreferenceProvider(
    /// Defaults to [`platform_backend`].
    #[props(default)]
    backend: Option<BackendHandle>,
    children: Element,
) -> Element {
    let state = use_signal(move || {
        let backend = backend
            .map(|handle| handle.0)
            .unwrap_or_else(platform_backend);
        Preferences::new(backend)
    });
    let mut ready = use_signal(|| false);
    let ctx = use_context_provider(|| PreferenceContext { state, ready });

    use_effect(move || {
        let mut state = ctx.state;
        state.write().load();
        ready.set(true);
    });

    rsx! {
        div {
            class: "preference_root",
            style: if ready() { "" } else { "visibility: hidden" },
            {children}
        }
    }
}

/// The provider's context, or [`PreferenceError::MissingProvider`].
pub fn try_preferences() -> Result<PreferenceContext, PreferenceError> {
    try_use_context::<PreferenceContext>().ok_or(PreferenceError::MissingProvider)
}

/// The provider's context. Panics outside a [`PreferenceProvider`].
pub fn use_preferences() -> PreferenceContext {
    match try_preferences() {
        Ok(ctx) => ctx,
        Err(err) => panic!("{err}"),
    }
}

/// Active language; shorthand for pages that only translate.
pub fn use_lang() -> Lang {
    use_preferences().lang()
}

/// Language picker and theme toggle for the nav bars.
#[component]
pub fn PreferenceMenu() -> Element {
    let prefs = use_preferences();
    let current = prefs.get();
    let lang = current.lang;
    let mut open = use_signal(|| false);

    let theme_icon = match current.theme {
        Theme::Light => "🌙",
        Theme::Dark => "☀️",
    };

    rsx! {
        div { class: "preference_menu",
            button {
                class: "icon_btn",
                title: crate::t(lang, "pref.toggle_theme"),
                "aria-label": crate::t(lang, "pref.toggle_theme"),
                onclick: move |_| {
                    prefs.toggle_theme();
                },
                "{theme_icon}"
            }
            div { class: "lang_menu",
                button {
                    class: "icon_btn",
                    title: crate::t(lang, "pref.change_language"),
                    "aria-label": crate::t(lang, "pref.change_language"),
                    onclick: move |_| {
                        let next = !open();
                        open.set(next);
                    },
                    "🌐 {lang.code().to_uppercase()}"
                }
                if open() {
                    div { class: "dropdown",
                        for option in Lang::ALL {
                            button {
                                key: "{option.code()}",
                                class: if option == lang { "dropdown_item active" } else { "dropdown_item" },
                                onclick: move |_| {
                                    prefs.set_language(option);
                                    open.set(false);
                                },
                                "{option.native_name()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use dioxus::dioxus_core::{NoOpMutations, VirtualDom};

    use super::*;
    use crate::preferences::{MemoryBackend, LANGUAGE_KEY, LIGHT_MODE_CLASS, THEME_KEY};

    type Seen = Result<(Lang, Theme, bool), PreferenceError>;

    thread_local! {
        static SEEN: RefCell<Vec<Seen>> = const { RefCell::new(Vec::new()) };
    }

    fn take_seen() -> Vec<Seen> {
        SEEN.with(|seen| seen.borrow_mut().drain(..).collect())
    }

    #[component]
    fn Reader() -> Element {
        let seen = try_preferences().map(|ctx| (ctx.lang(), ctx.theme(), ctx.is_ready()));
        SEEN.with(|s| s.borrow_mut().push(seen));
        rsx! { span { "reader" } }
    }

    #[component]
    fn Unwrapped() -> Element {
        rsx! { Reader {} }
    }

    #[component]
    fn Wrapped(backend: BackendHandle) -> Element {
        rsx! {
            PreferenceProvider { backend, Reader {} }
        }
    }

    async fn settle(dom: &mut VirtualDom) {
        for _ in 0..3 {
            let _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    #[test]
    fn reading_outside_a_provider_fails_fast() {
        take_seen();
        let mut dom = VirtualDom::new(Unwrapped);
        dom.rebuild_in_place();
        assert_eq!(take_seen(), vec![Err(PreferenceError::MissingProvider)]);
    }

    #[tokio::test]
    async fn provider_applies_stored_values_before_revealing_children() {
        take_seen();
        let backend = Rc::new(
            MemoryBackend::new()
                .with_stored(THEME_KEY, "dark")
                .with_stored(LANGUAGE_KEY, "ar"),
        );
        let mut dom = VirtualDom::new_with_props(
            Wrapped,
            WrappedProps {
                backend: BackendHandle::new(backend.clone()),
            },
        );
        dom.rebuild_in_place();

        assert_eq!(take_seen(), vec![Ok((Lang::En, Theme::Light, false))]);
        assert!(dioxus::ssr::render(&dom).contains("visibility: hidden"));

        settle(&mut dom).await;

        assert_eq!(take_seen().pop(), Some(Ok((Lang::Ar, Theme::Dark, true))));
        assert!(!dioxus::ssr::render(&dom).contains("visibility: hidden"));
        assert_eq!(backend.root_attribute("dir").as_deref(), Some("rtl"));
        assert_eq!(backend.root_attribute("lang").as_deref(), Some("ar"));
        assert_eq!(backend.root_attribute("data-theme").as_deref(), Some("dark"));
        assert!(!backend.has_body_class(LIGHT_MODE_CLASS));
    }

    #[component]
    fn ToggleOnMount() -> Element {
        let prefs = use_preferences();
        use_effect(move || {
            prefs.toggle_theme();
        });
        rsx! {}
    }

    #[component]
    fn WrappedToggle(backend: BackendHandle) -> Element {
        rsx! {
            PreferenceProvider { backend, ToggleOnMount {} }
        }
    }

    #[tokio::test]
    async fn toggling_through_the_context_applies_and_persists() {
        let backend = Rc::new(MemoryBackend::new());
        let mut dom = VirtualDom::new_with_props(
            WrappedToggle,
            WrappedToggleProps {
                backend: BackendHandle::new(backend.clone()),
            },
        );
        dom.rebuild_in_place();
        settle(&mut dom).await;

        assert_eq!(backend.stored(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(backend.root_attribute("data-theme").as_deref(), Some("dark"));
        assert!(!backend.has_body_class(LIGHT_MODE_CLASS));
    }
}

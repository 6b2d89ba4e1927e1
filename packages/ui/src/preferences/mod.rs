//! Theme and language preferences.
//!
//! [`Preferences`] holds the current choice and pushes every change through a
//! [`PreferenceBackend`]: the browser in production, [`MemoryBackend`] in tests
//! and non-browser renderers.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::rc::Rc;

use crate::i18n::{lookup, Dictionary, Lang};

mod provider;
mod storage;

pub use provider::{
    try_preferences, use_lang, use_preferences, PreferenceContext, PreferenceMenu,
    PreferenceProvider,
};
pub use storage::platform_backend;
#[cfg(target_arch = "wasm32")]
pub use storage::BrowserBackend;

/// Storage key of the theme.
pub const THEME_KEY: &str = "theme";
/// Storage key of the language code.
pub const LANGUAGE_KEY: &str = "language";
/// Body class present while the light theme is active.
pub const LIGHT_MODE_CLASS: &str = "light-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Read-only view of the active preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preference {
    pub theme: Theme,
    pub lang: Lang,
}

impl Preference {
    pub fn dictionary(&self) -> &'static Dictionary {
        lookup(self.lang)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    #[error("preferences used outside of a PreferenceProvider")]
    MissingProvider,
}

/// Where preferences are persisted and where they take visible effect.
///
/// Implementations are best-effort: a storage that refuses writes must not
/// break rendering.
pub trait PreferenceBackend {
    fn load(&self, key: &str) -> Option<String>;
    fn store(&self, key: &str, value: &str);
    /// Set an attribute on the root (`<html>`) element.
    fn set_root_attribute(&self, name: &str, value: &str);
    fn set_body_class(&self, class: &str, present: bool);
}

/// Cloneable handle to a backend, comparable by identity so it can be passed
/// as a component prop.
#[derive(Clone)]
pub struct BackendHandle(Rc<dyn PreferenceBackend>);

impl BackendHandle {
    pub fn new(backend: Rc<dyn PreferenceBackend>) -> Self {
        Self(backend)
    }
}

impl PartialEq for BackendHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for BackendHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BackendHandle(..)")
    }
}

pub struct Preferences {
    current: Preference,
    backend: Rc<dyn PreferenceBackend>,
}

impl fmt::Debug for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preferences")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl Preferences {
    /// Defaults (light, English). Nothing is read or applied until [`Self::load`].
    pub fn new(backend: Rc<dyn PreferenceBackend>) -> Self {
        Self {
            current: Preference::default(),
            backend,
        }
    }

    /// Read stored values, fall back to defaults for anything missing or
    /// unrecognised, and apply the result to the document.
    pub fn load(&mut self) -> Preference {
        let theme = self
            .backend
            .load(THEME_KEY)
            .and_then(|raw| {
                let parsed = Theme::parse(&raw);
                if parsed.is_none() {
                    tracing::warn!("preferences: ignoring stored theme {raw:?}");
                }
                parsed
            })
            .unwrap_or_default();
        let lang = self
            .backend
            .load(LANGUAGE_KEY)
            .and_then(|raw| {
                let parsed = Lang::from_code(&raw);
                if parsed.is_none() {
                    tracing::warn!("preferences: ignoring stored language {raw:?}");
                }
                parsed
            })
            .unwrap_or_default();

        self.current = Preference { theme, lang };
        self.apply_theme();
        self.apply_lang();
        tracing::debug!(
            "preferences: loaded theme={} lang={}",
            theme.as_str(),
            lang.code()
        );
        self.current
    }

    pub fn snapshot(&self) -> Preference {
        self.current
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.current.theme = self.current.theme.toggled();
        self.apply_theme();
        self.backend.store(THEME_KEY, self.current.theme.as_str());
        self.current.theme
    }

    pub fn set_language(&mut self, lang: Lang) {
        self.current.lang = lang;
        self.apply_lang();
        self.backend.store(LANGUAGE_KEY, lang.code());
    }

    fn apply_theme(&self) {
        let theme = self.current.theme;
        self.backend.set_root_attribute("data-theme", theme.as_str());
        self.backend
            .set_body_class(LIGHT_MODE_CLASS, theme == Theme::Light);
    }

    fn apply_lang(&self) {
        let lang = self.current.lang;
        self.backend.set_root_attribute("dir", lang.dir());
        self.backend.set_root_attribute("lang", lang.code());
    }
}

/// In-memory backend. Records everything it is asked to apply.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    stored: RefCell<HashMap<String, String>>,
    root_attributes: RefCell<BTreeMap<String, String>>,
    body_classes: RefCell<BTreeSet<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a stored value.
    pub fn with_stored(self, key: &str, value: &str) -> Self {
        self.stored
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.stored.borrow().get(key).cloned()
    }

    pub fn root_attribute(&self, name: &str) -> Option<String> {
        self.root_attributes.borrow().get(name).cloned()
    }

    pub fn has_body_class(&self, class: &str) -> bool {
        self.body_classes.borrow().contains(class)
    }
}

impl PreferenceBackend for MemoryBackend {
    fn load(&self, key: &str) -> Option<String> {
        self.stored(key)
    }

    fn store(&self, key: &str, value: &str) {
        self.stored
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        self.root_attributes
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn set_body_class(&self, class: &str, present: bool) {
        let mut classes = self.body_classes.borrow_mut();
        if present {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }
}

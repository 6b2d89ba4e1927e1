use std::rc::Rc;

use super::PreferenceBackend;

/// Backend for the current target: the browser on wasm32, memory elsewhere.
pub fn platform_backend() -> Rc<dyn PreferenceBackend> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserBackend)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(super::MemoryBackend::new())
    }
}

/// `localStorage` plus the live document.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserBackend;

#[cfg(target_arch = "wasm32")]
impl BrowserBackend {
    fn storage() -> Option<web_sys::Storage> {
        // Private browsing can deny storage entirely.
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceBackend for BrowserBackend {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn store(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("preferences: localStorage unavailable, not saving {key}");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("preferences: localStorage rejected {key}={value}");
        }
    }

    fn set_root_attribute(&self, name: &str, value: &str) {
        let Some(root) = Self::document().and_then(|d| d.document_element()) else {
            return;
        };
        if root.set_attribute(name, value).is_err() {
            tracing::warn!("preferences: could not set <html {name}>");
        }
    }

    fn set_body_class(&self, class: &str, present: bool) {
        let Some(body) = Self::document().and_then(|d| d.body()) else {
            return;
        };
        let list = body.class_list();
        let res = if present {
            list.add_1(class)
        } else {
            list.remove_1(class)
        };
        if res.is_err() {
            tracing::warn!("preferences: could not toggle body class {class}");
        }
    }
}

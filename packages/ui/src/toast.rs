use std::time::Duration;

use dioxus::prelude::*;

/// Time before a success or info toast dismisses itself. Errors stay until closed.
const AUTO_DISMISS: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastKind {
    Error,
    Info,
    Success,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Error => "toast toast_error",
            ToastKind::Info => "toast toast_info",
            ToastKind::Success => "toast toast_success",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub body: Option<String>,
    pub kind: ToastKind,
}

/// Notification queue shared through context.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn push(&self, title: String, body: Option<String>, kind: ToastKind) -> u64 {
        let mut next_id = self.next_id;
        let id = next_id();
        next_id.set(id + 1);
        let mut toasts = self.toasts;
        toasts.with_mut(|items| {
            items.push(Toast {
                id,
                title,
                body,
                kind,
            })
        });

        if kind != ToastKind::Error {
            let this = *self;
            spawn(async move {
                gloo_timers::future::sleep(AUTO_DISMISS).await;
                this.dismiss(id);
            });
        }
        id
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.with_mut(|items| items.retain(|toast| toast.id != id));
    }

    pub fn error(&self, title: String, body: Option<String>) {
        tracing::debug!("toast.error: {title}");
        self.push(title, body, ToastKind::Error);
    }

    pub fn info(&self, title: String, body: Option<String>) {
        self.push(title, body, ToastKind::Info);
    }

    pub fn success(&self, title: String, body: Option<String>) {
        self.push(title, body, ToastKind::Success);
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 1_u64);
    let ctx = use_context_provider(|| Toasts { toasts, next_id });

    rsx! {
        {children}
        ToastViewport { toasts: ctx }
    }
}

#[component]
fn ToastViewport(toasts: Toasts) -> Element {
    let lang = crate::use_lang();
    let items = (toasts.toasts)();
    rsx! {
        div { class: "toast_region", role: "status", "aria-live": "polite",
            for toast in items {
                div { key: "{toast.id}", class: toast.kind.class(),
                    div { class: "toast_content",
                        div { class: "toast_title", "{toast.title}" }
                        if let Some(body) = &toast.body {
                            div { class: "toast_body", "{body}" }
                        }
                    }
                    button {
                        class: "toast_close",
                        onclick: {
                            let id = toast.id;
                            move |_| toasts.dismiss(id)
                        },
                        {crate::t(lang, "common.dismiss")}
                    }
                }
            }
        }
    }
}

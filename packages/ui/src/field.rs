use dioxus::prelude::*;

use crate::forms::SubmitError;
use crate::i18n::{t, Lang};
use crate::toast::Toasts;
use crate::validation::FormDraft;

/// Labelled input bound to one field of a [`FormDraft`], with its inline error.
#[component]
pub fn TextField(
    mut draft: Signal<FormDraft>,
    field: &'static str,
    label: String,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] placeholder: String,
    #[props(default)] multiline: bool,
) -> Element {
    let lang = crate::use_lang();
    let value = draft.read().value(field).to_string();
    let error = draft.read().error(field);
    let class = if error.is_some() { "input has_error" } else { "input" };

    rsx! {
        div { class: "form_group",
            label { r#for: field, "{label}" }
            if multiline {
                textarea {
                    id: field,
                    name: field,
                    class,
                    rows: 4,
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |e| draft.write().set(field, e.value()),
                }
            } else {
                input {
                    id: field,
                    name: field,
                    class,
                    r#type: input_type,
                    placeholder: "{placeholder}",
                    value: "{value}",
                    oninput: move |e| draft.write().set(field, e.value()),
                }
            }
            if let Some(err) = error {
                FieldError { message: err.localized(lang) }
            }
        }
    }
}

#[component]
pub fn FieldError(message: String) -> Element {
    rsx! { small { class: "field_error", "{message}" } }
}

/// Route a failed submit to the right place: inline errors for invalid
/// fields, a toast for everything else.
pub(crate) fn report_submit_error(
    err: SubmitError,
    mut draft: Signal<FormDraft>,
    toasts: Toasts,
    lang: Lang,
    fallback_key: &str,
) {
    match err {
        SubmitError::Invalid(errors) => draft.write().set_errors(errors),
        SubmitError::Busy => {}
        SubmitError::Api(err) => {
            tracing::warn!("submit failed: {err}");
            toasts.error(
                t(lang, "common.error"),
                Some(err.user_message(&t(lang, fallback_key))),
            );
        }
        other => {
            tracing::warn!("submit failed: {other}");
            toasts.error(t(lang, "common.error"), Some(t(lang, fallback_key)));
        }
    }
}

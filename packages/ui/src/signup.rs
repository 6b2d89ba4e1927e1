use dioxus::prelude::*;
use serde_json::Value;

use crate::auth::{go_to, js_escape, use_api_client};
use crate::field::{report_submit_error, FieldError, TextField};
use crate::forms::{self, FormPhase, SubmitError};
use crate::i18n::{t, Lang};
use crate::toast::Toasts;
use crate::validation::{FormDraft, SelectedFile, CV_ACCEPT};
use crate::PreferenceMenu;

const AUTH_CSS: Asset = asset!("/assets/styling/auth.css");

const CV_INPUT_ID: &str = "cvFile";

/// Metadata of the file currently chosen in `<input type=file id=..>`.
pub(crate) async fn read_selected_file(input_id: &str) -> Option<SelectedFile> {
    let js = format!(
        r#"(function(){{
            const el = document.getElementById("{}");
            if(!el || !el.files || !el.files[0]) return null;
            const f = el.files[0];
            return {{ name: f.name, size: f.size, type: f.type || "" }};
        }})()"#,
        js_escape(input_id)
    );
    let value = document::eval(&js).await.ok()?;
    selected_file_from_value(&value)
}

/// Base64 content of the chosen file, read only when the form is submitted.
async fn read_file_base64(input_id: &str) -> Option<String> {
    let js = format!(
        r#"(async function(){{
            const el = document.getElementById("{}");
            if(!el || !el.files || !el.files[0]) return "";
            const bytes = new Uint8Array(await el.files[0].arrayBuffer());
            let bin = "";
            for (let i = 0; i < bytes.length; i++) bin += String.fromCharCode(bytes[i]);
            return btoa(bin);
        }})()"#,
        js_escape(input_id)
    );
    document::eval(&js)
        .await
        .ok()
        .and_then(|v| v.as_str().map(|s| s.to_string()))
        .filter(|s| !s.is_empty())
}

pub(crate) fn selected_file_from_value(value: &Value) -> Option<SelectedFile> {
    let name = value.get("name")?.as_str()?.to_string();
    let size = value.get("size")?.as_u64()?;
    let content_type = value
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    Some(SelectedFile {
        name,
        size,
        content_type,
    })
}

fn on_registered(toasts: Toasts, lang: Lang) {
    toasts.success(t(lang, "signup.success"), None);
    spawn(async move { go_to("/login").await });
}

#[component]
fn SignupShell(title: String, subtitle: String, children: Element) -> Element {
    let lang = crate::use_lang();
    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_CSS }
        div { class: "auth_page",
            div { class: "auth_topbar",
                a { class: "btn", href: "/selectRole", {t(lang, "common.back")} }
                PreferenceMenu {}
            }
            div { class: "auth_card wide",
                h2 { "{title}" }
                p { class: "hint", "{subtitle}" }
                {children}
                p { class: "hint",
                    {t(lang, "signup.already_have_account")}
                    " "
                    a { href: "/login", {t(lang, "nav.login")} }
                }
            }
        }
    }
}

#[component]
fn SubmitButton(phase: Signal<FormPhase>) -> Element {
    let lang = crate::use_lang();
    let busy = phase().is_submitting();
    rsx! {
        button { class: "btn primary wide", r#type: "submit", disabled: busy,
            if busy {
                {t(lang, "common.please_wait")}
            } else {
                {t(lang, "signup.create_account")}
            }
        }
    }
}

#[component]
fn PasswordPair(draft: Signal<FormDraft>) -> Element {
    let lang = crate::use_lang();
    rsx! {
        div { class: "form_grid",
            TextField {
                draft,
                field: "password",
                input_type: "password",
                label: t(lang, "form.password_label"),
                placeholder: t(lang, "form.password_placeholder"),
            }
            TextField {
                draft,
                field: "confirmPassword",
                input_type: "password",
                label: t(lang, "form.confirm_password"),
            }
        }
    }
}

#[component]
pub fn StudentSignup() -> Element {
    let lang = crate::use_lang();
    let toasts = crate::use_toasts();
    let client = use_api_client();

    let mut draft = use_signal(FormDraft::new);
    let mut phase = use_signal(FormPhase::default);

    let on_pick = move |_| {
        spawn(async move {
            let picked = read_selected_file(CV_INPUT_ID).await;
            draft.write().set_file(CV_INPUT_ID, picked);
        });
    };

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let snapshot = draft();
        let started = phase.write().start(forms::STUDENT_RULES, &snapshot);
        if let Err(err) = started {
            report_submit_error(err, draft, toasts, lang, "signup.failed");
            return;
        }
        let client = client.clone();
        spawn(async move {
            let cv = match (snapshot.file(CV_INPUT_ID), read_file_base64(CV_INPUT_ID).await) {
                (Some(meta), Some(content)) => forms::decode_cv(meta, &content),
                _ => Err(SubmitError::UnreadableFile("no file content".to_string())),
            };
            let cv = match cv {
                Ok(cv) => cv,
                Err(err) => {
                    phase.write().abort();
                    report_submit_error(err, draft, toasts, lang, "signup.failed");
                    return;
                }
            };
            let res = forms::register_student(&client, &snapshot, cv).await;
            let res = phase.write().finish(res);
            match res {
                Ok(()) => on_registered(toasts, lang),
                Err(err) => report_submit_error(err, draft, toasts, lang, "signup.failed"),
            }
        });
    };

    let picked = draft.read().file(CV_INPUT_ID).cloned();
    let cv_error = draft.read().error(CV_INPUT_ID);

    rsx! {
        SignupShell {
            title: t(lang, "signup.create_account"),
            subtitle: t(lang, "signup.start_journey"),
            form { class: "auth_form", novalidate: true, onsubmit: on_submit,
                TextField { draft, field: "fullName", label: t(lang, "form.full_name") }
                TextField {
                    draft,
                    field: "email",
                    input_type: "email",
                    label: t(lang, "form.email_label"),
                    placeholder: t(lang, "form.email_placeholder"),
                }
                PasswordPair { draft }
                div { class: "form_grid",
                    TextField { draft, field: "university", label: t(lang, "form.university") }
                    TextField { draft, field: "college", label: t(lang, "form.college") }
                    TextField { draft, field: "degree", label: t(lang, "form.degree") }
                    TextField { draft, field: "major", label: t(lang, "form.major") }
                }
                TextField {
                    draft,
                    field: "gradYear",
                    input_type: "number",
                    label: t(lang, "form.grad_year"),
                }

                div { class: "form_group",
                    label { r#for: CV_INPUT_ID, {t(lang, "signup.upload_cv")} }
                    label { class: if cv_error.is_some() { "upload_box has_error" } else { "upload_box" },
                        input {
                            id: CV_INPUT_ID,
                            r#type: "file",
                            accept: CV_ACCEPT,
                            hidden: true,
                            onchange: on_pick,
                        }
                        match picked {
                            Some(file) => rsx! {
                                strong { "{file.name}" }
                                span { class: "hint", {format!("{:.1} KB", file.size as f64 / 1024.0)} }
                            },
                            None => rsx! {
                                span { {t(lang, "signup.click_to_upload")} }
                                span { class: "hint", {t(lang, "signup.max_size")} }
                            },
                        }
                    }
                    if let Some(err) = cv_error {
                        FieldError { message: err.localized(lang) }
                    }
                }

                SubmitButton { phase }
            }
        }
    }
}

#[component]
pub fn MentorSignup() -> Element {
    let lang = crate::use_lang();
    let toasts = crate::use_toasts();
    let client = use_api_client();

    let draft = use_signal(FormDraft::new);
    let mut phase = use_signal(FormPhase::default);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let snapshot = draft();
        let started = phase.write().start(forms::MENTOR_RULES, &snapshot);
        if let Err(err) = started {
            report_submit_error(err, draft, toasts, lang, "signup.failed");
            return;
        }
        let client = client.clone();
        spawn(async move {
            let res = forms::register_mentor(&client, &snapshot).await;
            let res = phase.write().finish(res);
            match res {
                Ok(()) => on_registered(toasts, lang),
                Err(err) => report_submit_error(err, draft, toasts, lang, "signup.failed"),
            }
        });
    };

    rsx! {
        SignupShell {
            title: t(lang, "signup.mentor.title"),
            subtitle: t(lang, "signup.mentor.subtitle"),
            form { class: "auth_form", novalidate: true, onsubmit: on_submit,
                TextField { draft, field: "fullName", label: t(lang, "form.full_name") }
                TextField {
                    draft,
                    field: "email",
                    input_type: "email",
                    label: t(lang, "form.email_label"),
                    placeholder: t(lang, "form.email_placeholder"),
                }
                PasswordPair { draft }
                div { class: "form_grid",
                    TextField { draft, field: "expertise", label: t(lang, "form.expertise") }
                    TextField {
                        draft,
                        field: "yearsExperience",
                        input_type: "number",
                        label: t(lang, "form.years_experience"),
                    }
                }
                TextField { draft, field: "jobTitle", label: t(lang, "form.job_title") }
                TextField {
                    draft,
                    field: "linkedin",
                    input_type: "url",
                    label: t(lang, "form.linkedin"),
                    placeholder: "https://linkedin.com/in/…".to_string(),
                }
                SubmitButton { phase }
            }
        }
    }
}

#[component]
pub fn CompanySignup() -> Element {
    let lang = crate::use_lang();
    let toasts = crate::use_toasts();
    let client = use_api_client();

    let draft = use_signal(FormDraft::new);
    let mut phase = use_signal(FormPhase::default);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let snapshot = draft();
        let started = phase.write().start(forms::COMPANY_RULES, &snapshot);
        if let Err(err) = started {
            report_submit_error(err, draft, toasts, lang, "signup.failed");
            return;
        }
        let client = client.clone();
        spawn(async move {
            let res = forms::register_company(&client, &snapshot).await;
            let res = phase.write().finish(res);
            match res {
                Ok(()) => on_registered(toasts, lang),
                Err(err) => report_submit_error(err, draft, toasts, lang, "signup.failed"),
            }
        });
    };

    rsx! {
        SignupShell {
            title: t(lang, "signup.company.title"),
            subtitle: t(lang, "signup.company.subtitle"),
            form { class: "auth_form", novalidate: true, onsubmit: on_submit,
                TextField {
                    draft,
                    field: "email",
                    input_type: "email",
                    label: t(lang, "form.work_email"),
                    placeholder: t(lang, "form.email_placeholder"),
                }
                PasswordPair { draft }
                div { class: "form_grid",
                    TextField { draft, field: "companyName", label: t(lang, "form.company_name") }
                    TextField { draft, field: "industry", label: t(lang, "form.industry") }
                    TextField { draft, field: "location", label: t(lang, "form.location") }
                    TextField {
                        draft,
                        field: "webSite",
                        input_type: "url",
                        label: t(lang, "form.website"),
                        placeholder: "https://".to_string(),
                    }
                }
                TextField { draft, field: "address", label: t(lang, "form.address") }
                TextField {
                    draft,
                    field: "description",
                    multiline: true,
                    label: t(lang, "form.company_overview"),
                    placeholder: t(lang, "form.company_placeholder"),
                }
                SubmitButton { phase }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn picker_metadata_is_parsed() {
        let file = selected_file_from_value(&json!({
            "name": "cv.pdf",
            "size": 2048,
            "type": "application/pdf"
        }))
        .unwrap();
        assert_eq!(file.name, "cv.pdf");
        assert_eq!(file.size, 2048);
        assert!(file.is_accepted_cv());
    }

    #[test]
    fn picker_without_a_file_yields_nothing() {
        assert_eq!(selected_file_from_value(&Value::Null), None);
        assert_eq!(selected_file_from_value(&json!({ "name": "x" })), None);
        let untyped = selected_file_from_value(&json!({ "name": "x", "size": 1 })).unwrap();
        assert_eq!(untyped.content_type, "");
    }
}

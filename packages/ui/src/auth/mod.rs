use std::time::Duration;

use api::{HttpClient, LoginResponse, Role};
use dioxus::prelude::*;

use crate::field::{report_submit_error, TextField};
use crate::forms::{self, FormPhase, ResetLink};
use crate::i18n::t;
use crate::validation::FormDraft;
use crate::PreferenceMenu;

const AUTH_CSS: Asset = asset!("/assets/styling/auth.css");

/// localStorage keys written after a successful login.
const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

const RESET_REDIRECT_DELAY: Duration = Duration::from_secs(3);

/// The backend client provided at the app root, or one built from the
/// environment when rendered without it.
pub fn use_api_client() -> HttpClient {
    try_use_context::<HttpClient>().unwrap_or_else(HttpClient::from_env)
}

/// Full-page navigation, so the next page starts from fresh state.
pub(crate) async fn go_to(path: &str) {
    let _ = document::eval(&format!("window.location.assign(\"{}\")", js_escape(path))).await;
}

#[component]
pub fn SelectRole() -> Element {
    let lang = crate::use_lang();
    let toasts = crate::use_toasts();
    let mut selected = use_signal(|| None::<Role>);

    let on_continue = move |_| match selected() {
        Some(role) => {
            let path = role.signup_path();
            spawn(async move { go_to(path).await });
        }
        None => toasts.info(t(lang, "role.select_first"), None),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_CSS }
        div { class: "auth_page",
            div { class: "auth_topbar",
                a { class: "btn", href: "/", {t(lang, "common.back")} }
                PreferenceMenu {}
            }
            div { class: "role_select",
                h1 { {t(lang, "role.title")} }
                p { class: "hint", {t(lang, "role.subtitle")} }
                div { class: "role_grid",
                    for role in Role::ALL {
                        button {
                            key: "{role.as_str()}",
                            class: if selected() == Some(role) { "role_card selected" } else { "role_card" },
                            onclick: move |_| selected.set(Some(role)),
                            h3 { {t(lang, &format!("role.{}", role.as_str()))} }
                            p { {t(lang, &format!("role.{}_desc", role.as_str()))} }
                        }
                    }
                }
                button { class: "btn primary wide", onclick: on_continue, {t(lang, "common.continue")} }
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
pub fn Login() -> Element {
    let lang = crate::use_lang();
    let toasts = crate::use_toasts();
    let client = use_api_client();

    let draft = use_signal(FormDraft::new);
    let mut phase = use_signal(FormPhase::default);
    let mut role = use_signal(|| Role::Company);
    let mut remember = use_signal(|| false);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let snapshot = draft();
        let started = phase.write().start(forms::LOGIN_RULES, &snapshot);
        if let Err(err) = started {
            report_submit_error(err, draft, toasts, lang, "login.failed");
            return;
        }
        let client = client.clone();
        let role = role();
        spawn(async move {
            let res = forms::login(&client, &snapshot, role).await;
            let res = phase.write().finish(res);
            match res {
                Ok(session) => {
                    store_session(&session).await;
                    go_to("/").await;
                }
                Err(err) => report_submit_error(err, draft, toasts, lang, "login.failed"),
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_CSS }
        div { class: "auth_split",
            div { class: "auth_welcome",
                h1 { {t(lang, "login.welcome_title")} }
                p { {t(lang, "login.welcome_subtitle")} }
            }
            div { class: "auth_panel",
                div { class: "auth_topbar",
                    a { class: "btn", href: "/", {t(lang, "common.back")} }
                    PreferenceMenu {}
                }
                h2 { {t(lang, "login.title")} }
                p { class: "hint", {t(lang, "login.subtitle")} }

                p { class: "label", {t(lang, "login.role_title")} }
                div { class: "role_tabs",
                    for r in Role::ALL {
                        button {
                            key: "{r.as_str()}",
                            r#type: "button",
                            class: if role() == r { "role_tab active" } else { "role_tab" },
                            onclick: move |_| role.set(r),
                            {t(lang, &format!("role.{}", r.as_str()))}
                        }
                    }
                }

                form { class: "auth_form", novalidate: true, onsubmit: on_submit,
                    TextField {
                        draft,
                        field: "email",
                        input_type: "email",
                        label: t(lang, "form.email_label"),
                        placeholder: t(lang, "form.email_placeholder"),
                    }
                    TextField {
                        draft,
                        field: "password",
                        input_type: "password",
                        label: t(lang, "form.password_label"),
                        placeholder: t(lang, "form.password_placeholder"),
                    }
                    div { class: "form_row",
                        label { class: "checkbox",
                            input {
                                r#type: "checkbox",
                                checked: remember(),
                                onchange: move |e| remember.set(e.checked()),
                            }
                            {t(lang, "login.remember_me")}
                        }
                        a { href: "/forgotPassword", {t(lang, "login.forgot_password")} }
                    }
                    button {
                        class: "btn primary wide",
                        r#type: "submit",
                        disabled: phase().is_submitting(),
                        if phase().is_submitting() {
                            {t(lang, "common.please_wait")}
                        } else {
                            {t(lang, "login.button")}
                        }
                    }
                }
                p { class: "hint",
                    {t(lang, "login.no_account")}
                    " "
                    a { href: "/selectRole", {t(lang, "nav.signup")} }
                }
            }
        }
    }
}

#[component]
pub fn ForgotPassword() -> Element {
    let lang = crate::use_lang();
    let toasts = crate::use_toasts();
    let client = use_api_client();

    let draft = use_signal(FormDraft::new);
    let mut phase = use_signal(FormPhase::default);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let snapshot = draft();
        let started = phase.write().start(forms::FORGOT_RULES, &snapshot);
        if let Err(err) = started {
            report_submit_error(err, draft, toasts, lang, "forgot.failed");
            return;
        }
        let client = client.clone();
        spawn(async move {
            let res = forms::forgot_password(&client, client.config(), &snapshot).await;
            let res = phase.write().finish(res);
            if let Err(err) = res {
                report_submit_error(err, draft, toasts, lang, "forgot.failed");
            }
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_CSS }
        div { class: "auth_page",
            div { class: "auth_topbar",
                a { class: "btn", href: "/login", {t(lang, "auth.back_to_login")} }
                PreferenceMenu {}
            }
            div { class: "auth_card",
                if phase() == FormPhase::Succeeded {
                    div { class: "success_panel",
                        h2 { {t(lang, "forgot.success_title")} }
                        p { {t(lang, "forgot.success_message")} }
                        a { class: "btn primary wide", href: "/login", {t(lang, "auth.back_to_login")} }
                    }
                } else {
                    h2 { {t(lang, "forgot.title")} }
                    p { class: "hint", {t(lang, "forgot.subtitle")} }
                    form { class: "auth_form", novalidate: true, onsubmit: on_submit,
                        TextField {
                            draft,
                            field: "email",
                            input_type: "email",
                            label: t(lang, "forgot.email_label"),
                            placeholder: t(lang, "form.email_placeholder"),
                        }
                        button {
                            class: "btn primary wide",
                            r#type: "submit",
                            disabled: phase().is_submitting(),
                            if phase().is_submitting() {
                                {t(lang, "common.please_wait")}
                            } else {
                                {t(lang, "forgot.send")}
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Reset form reached from the emailed link. `query` is the raw query string.
#[component]
pub fn ResetPassword(query: String) -> Element {
    let lang = crate::use_lang();
    let toasts = crate::use_toasts();
    let client = use_api_client();

    let (token, email) = reset_params_from_query(&query);
    let link = ResetLink::new(token, email);

    let draft = use_signal(FormDraft::new);
    let mut phase = use_signal(FormPhase::default);

    let on_submit = {
        let link = link.clone();
        move |e: FormEvent| {
            e.prevent_default();
            let link = match link.clone() {
                Ok(link) => link,
                Err(err) => {
                    report_submit_error(err, draft, toasts, lang, "reset.invalid_token");
                    return;
                }
            };
            let snapshot = draft();
            let started = phase.write().start(forms::RESET_RULES, &snapshot);
            if let Err(err) = started {
                report_submit_error(err, draft, toasts, lang, "reset.invalid_token");
                return;
            }
            let client = client.clone();
            spawn(async move {
                let res = forms::reset_password(&client, client.config(), &link, &snapshot).await;
                let res = phase.write().finish(res);
                match res {
                    Ok(()) => {
                        spawn(async move {
                            gloo_timers::future::sleep(RESET_REDIRECT_DELAY).await;
                            go_to("/login").await;
                        });
                    }
                    Err(err) => report_submit_error(err, draft, toasts, lang, "reset.invalid_token"),
                }
            });
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_CSS }
        div { class: "auth_page",
            div { class: "auth_topbar",
                a { class: "btn", href: "/login", {t(lang, "auth.back_to_login")} }
                PreferenceMenu {}
            }
            div { class: "auth_card",
                if phase() == FormPhase::Succeeded {
                    div { class: "success_panel",
                        h2 { {t(lang, "reset.success_title")} }
                        p { {t(lang, "reset.success_message")} }
                        a { class: "btn primary wide", href: "/login", {t(lang, "auth.back_to_login")} }
                    }
                } else {
                    h2 { {t(lang, "reset.title")} }
                    p { class: "hint", {t(lang, "reset.subtitle")} }
                    if link.is_err() {
                        p { class: "error", {t(lang, "reset.token_required")} }
                    }
                    form { class: "auth_form", novalidate: true, onsubmit: on_submit,
                        TextField {
                            draft,
                            field: "newPassword",
                            input_type: "password",
                            label: t(lang, "reset.new_password_label"),
                            placeholder: t(lang, "reset.new_password_placeholder"),
                        }
                        TextField {
                            draft,
                            field: "confirmPassword",
                            input_type: "password",
                            label: t(lang, "reset.confirm_label"),
                            placeholder: t(lang, "reset.confirm_placeholder"),
                        }
                        button {
                            class: "btn primary wide",
                            r#type: "submit",
                            disabled: phase().is_submitting() || link.is_err(),
                            if phase().is_submitting() {
                                {t(lang, "common.please_wait")}
                            } else {
                                {t(lang, "reset.button")}
                            }
                        }
                    }
                }
            }
        }
    }
}

async fn store_session(session: &LoginResponse) {
    let _ = document::eval(&store_session_js(session)).await;
}

fn store_session_js(session: &LoginResponse) -> String {
    // `user` is only written when the backend sent one.
    let user = session
        .user
        .as_ref()
        .map(|u| format!(r#"localStorage.setItem("{USER_KEY}", "{}");"#, js_escape(&u.to_string())))
        .unwrap_or_default();
    format!(
        r#"(function(){{
            try {{
                localStorage.setItem("{TOKEN_KEY}", "{}");
                {user}
            }} catch(e) {{}}
            return "";
        }})()"#,
        js_escape(&session.token),
    )
}

/// `token` and `email` from a `?token=..&email=..` query, percent-decoded.
pub(crate) fn reset_params_from_query(query: &str) -> (Option<String>, Option<String>) {
    let mut token = None;
    let mut email = None;
    for pair in query.trim_start_matches('?').split('&') {
        let Some((k, v)) = pair.split_once('=') else {
            continue;
        };
        let decoded = urlencoding::decode(&v.replace('+', " "))
            .ok()
            .map(|s| s.into_owned())
            .filter(|s| !s.is_empty());
        match k {
            "token" => token = decoded,
            "email" => email = decoded,
            _ => {}
        }
    }
    (token, email)
}

pub(crate) fn js_escape(s: &str) -> String {
    // Minimal JS string escape for embedding into a double-quoted string.
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

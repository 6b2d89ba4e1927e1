use dioxus::prelude::*;

#[component]
pub fn SelectRole() -> Element {
    rsx! { ui::SelectRole {} }
}

#[component]
pub fn Login() -> Element {
    rsx! { ui::Login {} }
}

#[component]
pub fn StudentSignup() -> Element {
    rsx! { ui::StudentSignup {} }
}

#[component]
pub fn MentorSignup() -> Element {
    rsx! { ui::MentorSignup {} }
}

#[component]
pub fn CompanySignup() -> Element {
    rsx! { ui::CompanySignup {} }
}

#[component]
pub fn ForgotPassword() -> Element {
    rsx! { ui::ForgotPassword {} }
}

/// `/resetPassword?token=..&email=..`; the raw query is parsed by the form.
#[component]
pub fn ResetPassword(query: String) -> Element {
    rsx! { ui::ResetPassword { query } }
}

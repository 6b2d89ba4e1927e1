use dioxus::prelude::*;

#[component]
pub fn StudentDashboard() -> Element {
    rsx! { ui::StudentDashboard {} }
}

#[component]
pub fn StudentInternships() -> Element {
    rsx! { ui::InternshipsPage {} }
}

#[component]
pub fn StudentMentorships() -> Element {
    rsx! { ui::MentorshipsPage {} }
}

#[component]
pub fn StudentSessions() -> Element {
    rsx! { ui::SessionsPage {} }
}

#[component]
pub fn StudentProfile() -> Element {
    rsx! { ui::ProfilePage {} }
}

#[component]
pub fn MentorDashboard() -> Element {
    rsx! { ui::MentorDashboard {} }
}

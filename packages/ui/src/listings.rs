use api::mock::{
    self, BookedSession, InternshipFilter, MentorField, MentorFilter, SessionStatus, WorkType,
};
use dioxus::prelude::*;

use crate::dashboard::{InternshipCard, MentorCard, StudentNav, StudentShell};
use crate::i18n::{format_date, t, Lang};
use crate::signup::read_selected_file;
use crate::validation::SelectedFile;

const PROFILE_CV_INPUT_ID: &str = "profileCv";

#[component]
pub fn InternshipsPage() -> Element {
    let lang = crate::use_lang();
    let toasts = crate::use_toasts();
    let all = use_hook(mock::internships);
    let locations = mock::internship_locations(&all);
    let mut filter = use_signal(InternshipFilter::default);

    let current = filter();
    let visible: Vec<_> = current.apply(&all).into_iter().cloned().collect();

    rsx! {
        StudentShell { active: StudentNav::Internships,
            div { class: "page_header",
                h1 { {t(lang, "internships.title")} }
                p { class: "hint", {t(lang, "internships.subtitle")} }
            }
            div { class: "filters",
                input {
                    class: "input grow",
                    r#type: "search",
                    placeholder: t(lang, "internships.search"),
                    value: "{current.query}",
                    oninput: move |e| filter.write().query = e.value(),
                }
                select {
                    class: "input",
                    onchange: move |e| {
                        let v = e.value();
                        filter.write().location = if v.is_empty() { None } else { Some(v) };
                    },
                    option { value: "", {t(lang, "internships.all_locations")} }
                    for loc in locations {
                        option { key: "{loc}", value: "{loc}", "{loc}" }
                    }
                }
                select {
                    class: "input",
                    onchange: move |e| filter.write().work_type = WorkType::parse(&e.value()),
                    option { value: "", {t(lang, "internships.all_types")} }
                    for w in WorkType::ALL {
                        option { key: "{w.as_str()}", value: w.as_str(), {crate::dashboard::work_type_label(lang, w)} }
                    }
                }
            }
            if visible.is_empty() {
                p { class: "hint empty", {t(lang, "internships.none")} }
            }
            div { class: "card_grid",
                for item in visible {
                    InternshipCard {
                        key: "{item.id}",
                        item: item.clone(),
                        on_apply: move |_| toasts.success(t(lang, "student.applied"), None),
                    }
                }
            }
        }
    }
}

fn field_label(lang: Lang, field: MentorField) -> String {
    match field {
        MentorField::All => t(lang, "mentorships.all_fields"),
        MentorField::Software => t(lang, "field.software"),
        MentorField::Data => t(lang, "field.data"),
        MentorField::Ai => t(lang, "field.ai"),
        MentorField::Design => t(lang, "field.design"),
    }
}

#[component]
pub fn MentorshipsPage() -> Element {
    let lang = crate::use_lang();
    let toasts = crate::use_toasts();
    let all = use_hook(mock::mentors);
    let mut filter = use_signal(MentorFilter::default);

    let current = filter();
    let visible: Vec<_> = current.apply(&all).into_iter().cloned().collect();

    rsx! {
        StudentShell { active: StudentNav::Mentorships,
            div { class: "page_header",
                h1 { {t(lang, "mentorships.title")} }
                p { class: "hint", {t(lang, "mentorships.subtitle")} }
            }
            div { class: "filters",
                input {
                    class: "input grow",
                    r#type: "search",
                    placeholder: t(lang, "mentorships.search"),
                    value: "{current.query}",
                    oninput: move |e| filter.write().query = e.value(),
                }
                select {
                    class: "input",
                    onchange: move |e| filter.write().field = MentorField::parse(&e.value()),
                    for f in MentorField::ALL {
                        option {
                            key: "{f.as_str()}",
                            value: f.as_str(),
                            selected: f == current.field,
                            {field_label(lang, f)}
                        }
                    }
                }
            }
            if visible.is_empty() {
                p { class: "hint empty", {t(lang, "mentorships.none")} }
            }
            div { class: "card_grid",
                for mentor in visible {
                    MentorCard {
                        key: "{mentor.id}",
                        mentor: mentor.clone(),
                        on_book: {
                            let name = mentor.name;
                            move |_| {
                                toasts.info(format!("{} {name}", t(lang, "mentorships.booking")), None)
                            }
                        },
                    }
                }
            }
        }
    }
}

fn status_badge(lang: Lang, status: SessionStatus) -> (&'static str, String) {
    match status {
        SessionStatus::Completed => ("badge badge_done", t(lang, "sessions.completed")),
        SessionStatus::Confirmed => ("badge badge_ok", t(lang, "sessions.confirmed")),
        SessionStatus::AwaitingConfirmation => ("badge badge_wait", t(lang, "sessions.waiting")),
    }
}

#[component]
pub fn SessionsPage() -> Element {
    let lang = crate::use_lang();
    let mut sessions = use_signal(mock::booked_sessions);

    rsx! {
        StudentShell { active: StudentNav::Sessions,
            div { class: "page_header",
                h1 { {t(lang, "sessions.title")} }
                p { class: "hint", {t(lang, "sessions.subtitle")} }
            }
            if sessions.read().is_empty() {
                p { class: "hint empty", {t(lang, "sessions.none")} }
            }
            div { class: "card_grid",
                for session in sessions() {
                    SessionCard {
                        key: "{session.id}",
                        session: session.clone(),
                        on_cancel: move |id: u32| sessions.write().retain(|s| s.id != id),
                    }
                }
            }
        }
    }
}

#[component]
fn SessionCard(session: BookedSession, on_cancel: EventHandler<u32>) -> Element {
    let lang = crate::use_lang();
    let toasts = crate::use_toasts();
    let status = session.status();
    let (badge_class, badge_label) = status_badge(lang, status);
    let id = session.id;

    rsx! {
        div { class: "card",
            div { class: "card_top",
                div {
                    h3 { "{session.title}" }
                    p { class: "hint",
                        {t(lang, "sessions.with")}
                        " {session.mentor_name} · {session.mentor_role}"
                    }
                }
                span { class: badge_class, "{badge_label}" }
            }
            div { class: "meta",
                span { "📅 " {format_date(lang, session.date)} }
                span { "⏰ {session.time}" }
                span { class: "tag", "{session.category}" }
                span { "⭐ {session.rating:.1}" }
            }
            p { class: "summary", "{session.description}" }
            div { class: "card_footer",
                match status {
                    SessionStatus::Completed => rsx! {
                        button {
                            class: "btn",
                            onclick: move |_| toasts.info(t(lang, "sessions.leave_review"), None),
                            {t(lang, "sessions.leave_review")}
                        }
                    },
                    SessionStatus::Confirmed => rsx! {
                        button { class: "btn primary", {t(lang, "sessions.join")} }
                        button { class: "btn", {t(lang, "sessions.reschedule")} }
                        button {
                            class: "btn danger",
                            onclick: move |_| {
                                on_cancel.call(id);
                                toasts.info(t(lang, "sessions.cancelled"), None);
                            },
                            {t(lang, "sessions.cancel")}
                        }
                    },
                    SessionStatus::AwaitingConfirmation => rsx! {
                        button { class: "btn", disabled: true, {t(lang, "sessions.waiting_button")} }
                        button {
                            class: "btn danger",
                            onclick: move |_| {
                                on_cancel.call(id);
                                toasts.info(t(lang, "sessions.cancelled"), None);
                            },
                            {t(lang, "sessions.cancel")}
                        }
                    },
                }
            }
        }
    }
}

#[component]
pub fn ProfilePage() -> Element {
    let lang = crate::use_lang();
    let toasts = crate::use_toasts();
    let mut profile = use_signal(mock::student_profile);
    let mut new_skill = use_signal(String::new);
    let mut cv = use_signal(|| None::<SelectedFile>);

    let mut add_skill = move || {
        let skill = new_skill();
        if profile.write().add_skill(&skill) {
            new_skill.set(String::new());
        }
    };

    let on_pick_cv = move |_| {
        spawn(async move {
            match read_selected_file(PROFILE_CV_INPUT_ID).await {
                Some(file) if file.is_accepted_cv() => cv.set(Some(file)),
                Some(file) => {
                    tracing::debug!("profile: rejected cv type {:?}", file.content_type);
                    toasts.error(t(lang, "profile.bad_cv_type"), None);
                }
                None => {}
            }
        });
    };

    let p = profile();

    rsx! {
        StudentShell { active: StudentNav::Profile,
            div { class: "page_header",
                h1 { {t(lang, "profile.title")} }
                p { class: "hint", {t(lang, "profile.subtitle")} }
            }

            section { class: "panel",
                h2 { {t(lang, "profile.personal")} }
                div { class: "form_grid",
                    ProfileInput { label: t(lang, "profile.full_name"), value: p.name.clone(),
                        on_change: move |v| profile.write().name = v }
                    ProfileInput { label: t(lang, "profile.email"), value: p.email.clone(),
                        on_change: move |v| profile.write().email = v }
                    ProfileInput { label: t(lang, "profile.phone"), value: p.phone.clone(),
                        on_change: move |v| profile.write().phone = v }
                    ProfileInput { label: t(lang, "profile.location"), value: p.location.clone(),
                        on_change: move |v| profile.write().location = v }
                }
            }

            section { class: "panel",
                h2 { {t(lang, "profile.education")} }
                div { class: "form_grid",
                    ProfileInput { label: t(lang, "profile.university"), value: p.university.clone(),
                        on_change: move |v| profile.write().university = v }
                    ProfileInput { label: t(lang, "profile.college"), value: p.college.clone(),
                        on_change: move |v| profile.write().college = v }
                    ProfileInput { label: t(lang, "profile.major"), value: p.major.clone(),
                        on_change: move |v| profile.write().major = v }
                    ProfileInput { label: t(lang, "profile.graduation_year"), value: p.graduation_year.clone(),
                        on_change: move |v| profile.write().graduation_year = v }
                }
            }

            section { class: "panel",
                h2 { {t(lang, "profile.skills")} }
                div { class: "tags",
                    for skill in p.skills.clone() {
                        span { key: "{skill}", class: "tag removable",
                            "{skill}"
                            button {
                                class: "tag_remove",
                                onclick: {
                                    let skill = skill.clone();
                                    move |_| profile.write().remove_skill(&skill)
                                },
                                "×"
                            }
                        }
                    }
                }
                div { class: "filters",
                    input {
                        class: "input grow",
                        placeholder: t(lang, "profile.add_skill_placeholder"),
                        value: "{new_skill}",
                        oninput: move |e| new_skill.set(e.value()),
                        onkeydown: move |e| {
                            if e.key() == Key::Enter {
                                add_skill();
                            }
                        },
                    }
                    button { class: "btn", onclick: move |_| add_skill(), {t(lang, "profile.add")} }
                }
            }

            section { class: "panel",
                h2 { {t(lang, "profile.upload_cv_title")} }
                label { class: "upload_box",
                    input {
                        id: PROFILE_CV_INPUT_ID,
                        r#type: "file",
                        accept: crate::validation::CV_ACCEPT,
                        hidden: true,
                        onchange: on_pick_cv,
                    }
                    match cv() {
                        Some(file) => rsx! {
                            strong { "{file.name}" }
                            span { class: "hint",
                                {t(lang, "profile.file_selected")}
                                " · "
                                {t(lang, "profile.click_to_change")}
                            }
                        },
                        None => rsx! {
                            span { {t(lang, "profile.drag_drop_cv")} }
                            span { class: "hint", {t(lang, "profile.click_browse")} }
                        },
                    }
                }
            }

            div { class: "actions",
                button {
                    class: "btn primary",
                    onclick: move |_| toasts.success(t(lang, "profile.saved"), None),
                    {t(lang, "profile.save")}
                }
            }
        }
    }
}

#[component]
fn ProfileInput(label: String, value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        div { class: "form_group",
            label { "{label}" }
            input {
                class: "input",
                value: "{value}",
                oninput: move |e| on_change.call(e.value()),
            }
        }
    }
}

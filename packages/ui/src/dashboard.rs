use api::mock::{self, Internship, Mentor, SessionDay};
use dioxus::prelude::*;

use crate::auth::go_to;
use crate::i18n::{format_date, format_time, t, Lang};
use crate::PreferenceMenu;

const DASHBOARD_CSS: Asset = asset!("/assets/styling/dashboard.css");

const JS_CLEAR_SESSION: &str = r#"(function(){
    try { localStorage.removeItem("token"); localStorage.removeItem("user"); } catch(e) {}
    return "";
})()"#;

/// Entries of the student sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentNav {
    Dashboard,
    Internships,
    Mentorships,
    Sessions,
    Profile,
}

impl StudentNav {
    pub const ALL: [StudentNav; 5] = [
        StudentNav::Dashboard,
        StudentNav::Internships,
        StudentNav::Mentorships,
        StudentNav::Sessions,
        StudentNav::Profile,
    ];

    pub fn path(self) -> &'static str {
        match self {
            StudentNav::Dashboard => "/student/dashboard",
            StudentNav::Internships => "/student/internships",
            StudentNav::Mentorships => "/student/mentorships",
            StudentNav::Sessions => "/student/sessions",
            StudentNav::Profile => "/student/profile",
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            StudentNav::Dashboard => "nav.dashboard",
            StudentNav::Internships => "nav.internships",
            StudentNav::Mentorships => "nav.mentorships",
            StudentNav::Sessions => "nav.my_sessions",
            StudentNav::Profile => "nav.profile",
        }
    }
}

async fn log_out() {
    let _ = document::eval(JS_CLEAR_SESSION).await;
    go_to("/").await;
}

/// Sidebar plus top bar around every student page.
#[component]
pub fn StudentShell(active: StudentNav, children: Element) -> Element {
    let lang = crate::use_lang();
    rsx! {
        document::Link { rel: "stylesheet", href: DASHBOARD_CSS }
        div { class: "dashboard",
            aside { class: "sidebar",
                a { class: "brand", href: "/", {t(lang, "app.name")} }
                nav {
                    for item in StudentNav::ALL {
                        a {
                            key: "{item.path()}",
                            href: item.path(),
                            class: if item == active { "sidebar_link active" } else { "sidebar_link" },
                            {t(lang, item.label_key())}
                        }
                    }
                }
                button {
                    class: "sidebar_link logout",
                    onclick: move |_| {
                        spawn(log_out());
                    },
                    {t(lang, "nav.logout")}
                }
            }
            div { class: "dashboard_main",
                header { class: "topbar",
                    span { class: "icon_btn", title: t(lang, "nav.notifications"), "🔔" }
                    PreferenceMenu {}
                    span { class: "avatar", "AM" }
                }
                main { class: "dashboard_content", {children} }
            }
        }
    }
}

#[component]
pub fn StatCard(label: String, value: String) -> Element {
    rsx! {
        div { class: "stat_card",
            div { class: "stat_label", "{label}" }
            div { class: "stat_number", "{value}" }
        }
    }
}

#[component]
pub fn StudentDashboard() -> Element {
    let lang = crate::use_lang();
    let toasts = crate::use_toasts();
    let stats = mock::student_stats();

    let mut recommended = mock::internships();
    recommended.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    recommended.truncate(3);
    let mentors: Vec<Mentor> = mock::mentors().into_iter().filter(|m| m.available).take(3).collect();

    rsx! {
        StudentShell { active: StudentNav::Dashboard,
            div { class: "page_header",
                h1 { {t(lang, "student.welcome_back")} }
                p { class: "hint", {t(lang, "student.career_journey")} }
            }
            div { class: "stats_row",
                StatCard { label: t(lang, "student.internships_applied"), value: stats.applied_internships.to_string() }
                StatCard { label: t(lang, "student.sessions_booked"), value: stats.sessions_booked.to_string() }
                StatCard { label: t(lang, "student.upcoming_session"), value: stats.upcoming_session.to_string() }
            }

            section { class: "panel",
                div { class: "panel_header",
                    h2 { {t(lang, "student.recommended_internships")} }
                    a { href: StudentNav::Internships.path(), {t(lang, "common.learn_more")} }
                }
                if recommended.is_empty() {
                    p { class: "hint", {t(lang, "student.no_internships")} }
                }
                for item in recommended {
                    InternshipCard {
                        key: "{item.id}",
                        item: item.clone(),
                        on_apply: move |_| toasts.success(t(lang, "student.applied"), None),
                    }
                }
            }

            section { class: "panel",
                div { class: "panel_header",
                    h2 { {t(lang, "student.recommended_mentors")} }
                    a { href: StudentNav::Mentorships.path(), {t(lang, "common.learn_more")} }
                }
                if mentors.is_empty() {
                    p { class: "hint", {t(lang, "student.no_mentors")} }
                }
                div { class: "card_grid",
                    for mentor in mentors {
                        MentorCard {
                            key: "{mentor.id}",
                            mentor: mentor.clone(),
                            on_book: move |_| toasts.success(t(lang, "student.session_booked"), None),
                        }
                    }
                }
            }
        }
    }
}

pub(crate) fn stipend_label(lang: Lang, monthly_egp: Option<u32>) -> String {
    match monthly_egp {
        Some(amount) => format!("{amount} {}", t(lang, "internships.per_month")),
        None => t(lang, "internships.unpaid"),
    }
}

pub(crate) fn work_type_label(lang: Lang, work_type: mock::WorkType) -> String {
    match work_type {
        mock::WorkType::Remote => t(lang, "work.remote"),
        mock::WorkType::Hybrid => t(lang, "work.hybrid"),
        mock::WorkType::OnSite => t(lang, "work.on_site"),
    }
}

#[component]
pub fn InternshipCard(item: Internship, on_apply: EventHandler<()>) -> Element {
    let lang = crate::use_lang();
    rsx! {
        div { class: "card",
            div { class: "card_top",
                span { class: "avatar", "{item.avatar}" }
                div {
                    h3 { "{item.title}" }
                    p { class: "hint", "{item.company}" }
                }
                span { class: "match", "{item.match_score}% " {t(lang, "common.match")} }
            }
            div { class: "meta",
                span { "📍 {item.location}" }
                span { class: "badge", {work_type_label(lang, item.work_type)} }
                span { "⏱ {item.duration}" }
                span { "💰 " {stipend_label(lang, item.monthly_stipend_egp)} }
            }
            div { class: "tags",
                for skill in item.skills.iter() {
                    span { key: "{skill}", class: "tag", "{skill}" }
                }
            }
            div { class: "card_footer",
                span { class: "hint",
                    {t(lang, "internships.deadline")}
                    ": "
                    {format_date(lang, item.deadline)}
                }
                button { class: "btn primary", onclick: move |_| on_apply.call(()), {t(lang, "common.apply_now")} }
            }
        }
    }
}

#[component]
pub fn MentorCard(mentor: Mentor, on_book: EventHandler<()>) -> Element {
    let lang = crate::use_lang();
    let initials: String = mentor
        .name
        .split_whitespace()
        .filter(|w| !w.ends_with('.'))
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect();
    rsx! {
        div { class: "card",
            div { class: "card_top",
                span { class: "avatar", "{initials}" }
                div {
                    h3 { "{mentor.name}" }
                    p { class: "hint", "{mentor.title}" }
                }
            }
            div { class: "meta",
                span { "⭐ {mentor.rating:.1} ({mentor.reviews} " {t(lang, "mentorships.reviews")} ")" }
                span { "{mentor.experience_years} " {t(lang, "mentorships.years")} }
            }
            p { class: "summary", "{mentor.bio}" }
            div { class: "tags",
                for skill in mentor.expertise.iter() {
                    span { key: "{skill}", class: "tag", "{skill}" }
                }
            }
            div { class: "card_footer",
                match &mentor.next_available {
                    Some(slot) => rsx! {
                        span { class: "hint", {t(lang, "mentorships.next_available")} ": {slot.date} {slot.time}" }
                    },
                    None => rsx! {
                        span { class: "hint", {t(lang, "common.unavailable")} }
                    },
                }
                button {
                    class: "btn primary",
                    disabled: !mentor.available,
                    onclick: move |_| on_book.call(()),
                    {t(lang, "common.book_session")}
                }
            }
        }
    }
}

/// "Today" / "Tomorrow" / a formatted date.
pub(crate) fn session_day_label(lang: Lang, day: SessionDay) -> String {
    match day {
        SessionDay::Today => t(lang, "mentor.today"),
        SessionDay::Tomorrow => t(lang, "mentor.tomorrow"),
        SessionDay::On(date) => format_date(lang, date),
    }
}

/// "1 hour" for whole hours, minutes otherwise.
pub(crate) fn duration_label(lang: Lang, minutes: u16) -> String {
    if minutes % 60 == 0 {
        format!("{} {}", minutes / 60, t(lang, "time.hour"))
    } else {
        format!("{minutes} {}", t(lang, "time.min"))
    }
}

#[component]
pub fn MentorDashboard() -> Element {
    let lang = crate::use_lang();
    let stats = mock::mentor_stats();
    let sessions = mock::mentor_sessions();
    let mentees = mock::recent_mentees();

    rsx! {
        document::Link { rel: "stylesheet", href: DASHBOARD_CSS }
        div { class: "dashboard mentor",
            div { class: "dashboard_main",
                header { class: "topbar",
                    a { class: "brand", href: "/", {t(lang, "app.name")} }
                    span { class: "spacer" }
                    span { class: "icon_btn", title: t(lang, "nav.notifications"), "🔔" }
                    PreferenceMenu {}
                    button {
                        class: "btn",
                        onclick: move |_| {
                            spawn(log_out());
                        },
                        {t(lang, "nav.logout")}
                    }
                }
                main { class: "dashboard_content",
                    div { class: "page_header",
                        h1 { {t(lang, "mentor.welcome")} }
                        p { class: "hint", {t(lang, "mentor.subtitle")} }
                    }
                    div { class: "stats_row",
                        StatCard { label: t(lang, "mentor.total_sessions"), value: stats.total_sessions.to_string() }
                        StatCard { label: t(lang, "mentor.active_mentees"), value: stats.active_mentees.to_string() }
                        StatCard { label: t(lang, "mentor.hours_this_month"), value: stats.hours_this_month.to_string() }
                    }
                    div { class: "two_columns",
                        section { class: "panel",
                            h2 { {t(lang, "mentor.upcoming_sessions")} }
                            if sessions.is_empty() {
                                p { class: "hint", {t(lang, "mentor.no_sessions")} }
                            }
                            for s in sessions {
                                div { key: "{s.id}", class: "list_row",
                                    span { class: "avatar", "{s.avatar}" }
                                    div { class: "grow",
                                        strong { "{s.student_name}" }
                                        p { class: "hint", {t(lang, s.topic_key)} }
                                    }
                                    div { class: "align_end",
                                        div { {session_day_label(lang, s.day)} }
                                        div { class: "hint",
                                            {format_time(lang, s.starts_at)}
                                            " · "
                                            {duration_label(lang, s.duration_minutes)}
                                        }
                                    }
                                }
                            }
                        }
                        section { class: "panel",
                            h2 { {t(lang, "mentor.recent_mentees")} }
                            if mentees.is_empty() {
                                p { class: "hint", {t(lang, "mentor.no_mentees")} }
                            }
                            for m in mentees {
                                div { key: "{m.id}", class: "list_row",
                                    span { class: "avatar", "{m.avatar}" }
                                    div { class: "grow",
                                        strong { "{m.name}" }
                                        p { class: "hint", {t(lang, m.field_key)} }
                                    }
                                    span { class: "hint",
                                        "{m.sessions_completed} "
                                        {t(lang, "mentor.sessions_completed")}
                                    }
                                }
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
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn stipend_and_work_type_labels() {
        assert_eq!(stipend_label(Lang::En, Some(5000)), "5000 EGP/month");
        assert_eq!(stipend_label(Lang::En, None), "Unpaid");
        assert_eq!(stipend_label(Lang::Ar, None), "غير مدفوع");
        assert_eq!(work_type_label(Lang::En, mock::WorkType::OnSite), "On-site");
    }

    #[test]
    fn session_days_are_localized() {
        assert_eq!(session_day_label(Lang::En, SessionDay::Today), "Today");
        assert_eq!(session_day_label(Lang::Ar, SessionDay::Tomorrow), "غداً");
        let d = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert_eq!(session_day_label(Lang::En, SessionDay::On(d)), "Jan 2, 2025");
    }

    #[test]
    fn durations() {
        assert_eq!(duration_label(Lang::En, 60), "1 hour");
        assert_eq!(duration_label(Lang::En, 45), "45 min");
    }

    #[test]
    fn every_mock_translation_key_exists() {
        let en = crate::i18n::lookup(Lang::En);
        for s in mock::mentor_sessions() {
            assert!(en.get(s.topic_key).is_some(), "{}", s.topic_key);
        }
        for m in mock::recent_mentees() {
            assert!(en.get(m.field_key).is_some(), "{}", m.field_key);
        }
    }

    #[test]
    fn student_nav_paths_are_unique() {
        let paths: std::collections::HashSet<_> = StudentNav::ALL.iter().map(|n| n.path()).collect();
        assert_eq!(paths.len(), StudentNav::ALL.len());
    }
}

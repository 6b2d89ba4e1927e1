//! Placeholder records the dashboards render until the backend serves real ones.
//!
//! Everything here is static and never persisted. Listing filters live next to
//! the data they filter so pages only hold the query state.

use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Constant, valid calendar dates only.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkType {
    Remote,
    Hybrid,
    OnSite,
}

impl WorkType {
    pub const ALL: [WorkType; 3] = [WorkType::Remote, WorkType::Hybrid, WorkType::OnSite];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkType::Remote => "remote",
            WorkType::Hybrid => "hybrid",
            WorkType::OnSite => "on-site",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|w| w.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Internship {
    pub id: u32,
    pub title: &'static str,
    pub company: &'static str,
    pub avatar: &'static str,
    pub location: &'static str,
    pub work_type: WorkType,
    pub duration: &'static str,
    /// `None` for unpaid positions.
    pub monthly_stipend_egp: Option<u32>,
    pub deadline: NaiveDate,
    pub match_score: u8,
    pub skills: &'static [&'static str],
}

pub fn internships() -> Vec<Internship> {
    vec![
        Internship {
            id: 1,
            title: "Frontend Developer Intern",
            company: "Tech Corp",
            avatar: "TC",
            location: "Cairo",
            work_type: WorkType::Remote,
            duration: "3 months",
            monthly_stipend_egp: Some(5000),
            deadline: date(2024, 12, 30),
            match_score: 95,
            skills: &["React", "TypeScript", "CSS"],
        },
        Internship {
            id: 2,
            title: "UI/UX Designer Intern",
            company: "Digital Solutions",
            avatar: "DS",
            location: "Alexandria",
            work_type: WorkType::Hybrid,
            duration: "4 months",
            monthly_stipend_egp: Some(4500),
            deadline: date(2025, 1, 15),
            match_score: 88,
            skills: &["Figma", "Adobe XD", "Prototyping"],
        },
        Internship {
            id: 3,
            title: "Full Stack Developer",
            company: "Innovation Hub",
            avatar: "IH",
            location: "Remote",
            work_type: WorkType::Remote,
            duration: "6 months",
            monthly_stipend_egp: None,
            deadline: date(2025, 1, 20),
            match_score: 82,
            skills: &["Node.js", "MongoDB", "React"],
        },
        Internship {
            id: 4,
            title: "Data Analyst Intern",
            company: "Startup Labs",
            avatar: "SL",
            location: "Giza",
            work_type: WorkType::OnSite,
            duration: "3 months",
            monthly_stipend_egp: Some(6000),
            deadline: date(2024, 12, 25),
            match_score: 75,
            skills: &["Python", "SQL", "Excel"],
        },
    ]
}

/// Search box plus the two dropdowns of the internships page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InternshipFilter {
    pub query: String,
    /// `None` means "all locations".
    pub location: Option<String>,
    pub work_type: Option<WorkType>,
}

impl InternshipFilter {
    pub fn matches(&self, item: &Internship) -> bool {
        let q = self.query.to_lowercase();
        let matches_search = item.title.to_lowercase().contains(&q)
            || item.company.to_lowercase().contains(&q);
        let matches_location = self
            .location
            .as_deref()
            .map_or(true, |loc| item.location.eq_ignore_ascii_case(loc));
        let matches_type = self.work_type.map_or(true, |w| item.work_type == w);
        matches_search && matches_location && matches_type
    }

    pub fn apply<'a>(&self, items: &'a [Internship]) -> Vec<&'a Internship> {
        items.iter().filter(|i| self.matches(i)).collect()
    }
}

/// Distinct locations, in first-seen order, for the location dropdown.
pub fn internship_locations(items: &[Internship]) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for item in items {
        if !out.contains(&item.location) {
            out.push(item.location);
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
pub struct Availability {
    pub date: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mentor {
    pub id: u32,
    pub name: &'static str,
    pub title: &'static str,
    pub expertise: &'static [&'static str],
    pub experience_years: u8,
    pub rating: f32,
    pub reviews: u32,
    pub bio: &'static str,
    pub next_available: Option<Availability>,
    pub available: bool,
}

pub fn mentors() -> Vec<Mentor> {
    vec![
        Mentor {
            id: 1,
            name: "Dr. Ahmed Hassan",
            title: "Senior Software Engineer",
            expertise: &["React", "Node.js", "System Design", "Career Growth"],
            experience_years: 5,
            rating: 4.9,
            reviews: 127,
            bio: "Passionate about mentoring young developers and helping them navigate their career paths.",
            next_available: Some(Availability {
                date: "Tomorrow",
                time: "3PM",
            }),
            available: true,
        },
        Mentor {
            id: 2,
            name: "Eng. Sara Mohamed",
            title: "Lead Data Scientist",
            expertise: &["Python", "Machine Learning", "Data Analysis", "AI"],
            experience_years: 10,
            rating: 4.8,
            reviews: 89,
            bio: "Helping aspiring data scientists break into the field with practical guidance.",
            next_available: Some(Availability {
                date: "Dec 28",
                time: "10AM",
            }),
            available: true,
        },
        Mentor {
            id: 3,
            name: "Prof. Karim Ali",
            title: "AI Research Director",
            expertise: &["Deep Learning", "NLP", "Computer Vision", "Research"],
            experience_years: 12,
            rating: 4.7,
            reviews: 156,
            bio: "Research-focused mentor specializing in cutting-edge AI technologies.",
            next_available: None,
            available: false,
        },
        Mentor {
            id: 4,
            name: "Eng. Nour Khaled",
            title: "UX/UI Design Lead",
            expertise: &["Figma", "User Research", "Design Systems", "Portfolio"],
            experience_years: 8,
            rating: 4.9,
            reviews: 189,
            bio: "Helping designers build stunning portfolios and land their dream jobs.",
            next_available: Some(Availability {
                date: "Dec 27",
                time: "2PM",
            }),
            available: true,
        },
    ]
}

/// Field dropdown of the mentorships page. Matching is keyword based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MentorField {
    #[default]
    All,
    Software,
    Data,
    Ai,
    Design,
}

impl MentorField {
    pub const ALL: [MentorField; 5] = [
        MentorField::All,
        MentorField::Software,
        MentorField::Data,
        MentorField::Ai,
        MentorField::Design,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MentorField::All => "all",
            MentorField::Software => "software",
            MentorField::Data => "data",
            MentorField::Ai => "ai",
            MentorField::Design => "design",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == value)
            .unwrap_or_default()
    }

    fn keywords(&self) -> (&'static [&'static str], &'static [&'static str]) {
        // (expertise keywords, title keywords)
        match self {
            MentorField::All => (&[], &[]),
            MentorField::Software => (&["react", "node", "system"], &["software"]),
            MentorField::Data => (&["data", "python"], &["data"]),
            MentorField::Ai => (&["ai", "machine", "learning", "deep", "nlp"], &["ai"]),
            MentorField::Design => (&["design", "figma", "ux"], &["design"]),
        }
    }

    pub fn matches(&self, mentor: &Mentor) -> bool {
        if *self == MentorField::All {
            return true;
        }
        let expertise = mentor.expertise.join(" ").to_lowercase();
        let title = mentor.title.to_lowercase();
        let (in_expertise, in_title) = self.keywords();
        in_expertise.iter().any(|k| expertise.contains(k)) || in_title.iter().any(|k| title.contains(k))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MentorFilter {
    pub query: String,
    pub field: MentorField,
}

impl MentorFilter {
    pub fn matches(&self, mentor: &Mentor) -> bool {
        let q = self.query.to_lowercase();
        let matches_search = mentor.name.to_lowercase().contains(&q)
            || mentor.title.to_lowercase().contains(&q)
            || mentor.expertise.iter().any(|s| s.to_lowercase().contains(&q));
        matches_search && self.field.matches(mentor)
    }

    pub fn apply<'a>(&self, items: &'a [Mentor]) -> Vec<&'a Mentor> {
        items.iter().filter(|m| self.matches(m)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Completed,
    Confirmed,
    AwaitingConfirmation,
}

/// A mentoring session the student booked or requested.
#[derive(Debug, Clone, PartialEq)]
pub struct BookedSession {
    pub id: u32,
    pub title: &'static str,
    pub mentor_name: &'static str,
    pub mentor_role: &'static str,
    pub date: NaiveDate,
    pub time: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub booked: bool,
    pub completed: bool,
    pub rating: f32,
}

impl BookedSession {
    pub fn status(&self) -> SessionStatus {
        if self.completed {
            SessionStatus::Completed
        } else if self.booked {
            SessionStatus::Confirmed
        } else {
            SessionStatus::AwaitingConfirmation
        }
    }
}

pub fn booked_sessions() -> Vec<BookedSession> {
    vec![
        BookedSession {
            id: 1,
            title: "Career Path in Software Engineering",
            mentor_name: "Dr. Ahmed Hassan",
            mentor_role: "Senior Software Engineer",
            date: date(2024, 12, 28),
            time: "3:00 PM - 4:00 PM",
            category: "Career Guidance",
            description: "Learn the fundamentals of modern web development",
            booked: true,
            completed: false,
            rating: 4.8,
        },
        BookedSession {
            id: 2,
            title: "Machine Learning Fundamentals",
            mentor_name: "Eng. Sara Mohamed",
            mentor_role: "ML Engineer",
            date: date(2024, 12, 30),
            time: "10:00 AM - 11:00 AM",
            category: "Technical",
            description: "Build your first mobile app from scratch",
            booked: false,
            completed: false,
            rating: 4.9,
        },
        BookedSession {
            id: 3,
            title: "Portfolio Review Session",
            mentor_name: "Eng. Nour Khaled",
            mentor_role: "Senior Designer",
            date: date(2025, 1, 2),
            time: "2:00 PM - 3:00 PM",
            category: "Design Review",
            description: "Master backend development and REST APIs",
            booked: true,
            completed: false,
            rating: 4.7,
        },
        BookedSession {
            id: 4,
            title: "Deep Learning Research Discussion",
            mentor_name: "Prof. Karim Ali",
            mentor_role: "AI Researcher",
            date: date(2024, 12, 25),
            time: "4:00 PM - 5:00 PM",
            category: "Research",
            description: "Learn professional UI/UX design techniques",
            booked: true,
            completed: true,
            rating: 5.0,
        },
        BookedSession {
            id: 5,
            title: "System Design Interview Prep",
            mentor_name: "Eng. Omar Youssef",
            mentor_role: "Tech Lead",
            date: date(2024, 12, 29),
            time: "1:00 PM - 2:00 PM",
            category: "Career Guidance",
            description: "Introduction to machine learning concepts",
            booked: false,
            completed: false,
            rating: 4.6,
        },
        BookedSession {
            id: 6,
            title: "Mobile App Development Workshop",
            mentor_name: "Eng. Laila Ahmed",
            mentor_role: "Mobile Developer",
            date: date(2025, 1, 5),
            time: "3:00 PM - 4:00 PM",
            category: "Technical",
            description: "Deploy applications on AWS cloud platform",
            booked: false,
            completed: false,
            rating: 4.8,
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentStats {
    pub applied_internships: u32,
    pub sessions_booked: u32,
    pub upcoming_session: &'static str,
}

pub fn student_stats() -> StudentStats {
    StudentStats {
        applied_internships: 12,
        sessions_booked: 8,
        upcoming_session: "Tomorrow 3PM",
    }
}

/// Day of a mentor's upcoming session; relative days are localized by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionDay {
    Today,
    Tomorrow,
    On(NaiveDate),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MentorSession {
    pub id: u32,
    pub student_name: &'static str,
    /// Translation key of the session topic.
    pub topic_key: &'static str,
    pub day: SessionDay,
    /// 24h clock.
    pub starts_at: (u8, u8),
    pub duration_minutes: u16,
    pub avatar: &'static str,
}

pub fn mentor_sessions() -> Vec<MentorSession> {
    vec![
        MentorSession {
            id: 1,
            student_name: "Ahmed Mohamed",
            topic_key: "mentor.topic.career_guidance",
            day: SessionDay::Today,
            starts_at: (15, 0),
            duration_minutes: 60,
            avatar: "AM",
        },
        MentorSession {
            id: 2,
            student_name: "Sara Ali",
            topic_key: "mentor.topic.resume_review",
            day: SessionDay::Tomorrow,
            starts_at: (10, 0),
            duration_minutes: 45,
            avatar: "SA",
        },
        MentorSession {
            id: 3,
            student_name: "Karim Hassan",
            topic_key: "mentor.topic.interview_prep",
            day: SessionDay::On(date(2025, 1, 17)),
            starts_at: (14, 0),
            duration_minutes: 60,
            avatar: "KH",
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mentee {
    pub id: u32,
    pub name: &'static str,
    /// Translation key of the mentee's field.
    pub field_key: &'static str,
    pub sessions_completed: u32,
    pub avatar: &'static str,
}

pub fn recent_mentees() -> Vec<Mentee> {
    vec![
        Mentee {
            id: 1,
            name: "Layla Ibrahim",
            field_key: "mentor.field.software",
            sessions_completed: 5,
            avatar: "LI",
        },
        Mentee {
            id: 2,
            name: "Omar Saeed",
            field_key: "mentor.field.data",
            sessions_completed: 3,
            avatar: "OS",
        },
        Mentee {
            id: 3,
            name: "Nour Khalil",
            field_key: "mentor.field.design",
            sessions_completed: 7,
            avatar: "NK",
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct MentorStats {
    pub total_sessions: u32,
    pub active_mentees: u32,
    pub hours_this_month: u32,
}

pub fn mentor_stats() -> MentorStats {
    MentorStats {
        total_sessions: 47,
        active_mentees: 12,
        hours_this_month: 24,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub university: String,
    pub college: String,
    pub major: String,
    pub graduation_year: String,
    pub skills: Vec<String>,
}

impl StudentProfile {
    /// Adds a non-blank skill that is not already listed.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    pub fn remove_skill(&mut self, skill: &str) {
        self.skills.retain(|s| s != skill);
    }
}

pub fn student_profile() -> StudentProfile {
    StudentProfile {
        name: "Ahmed Mohamed".into(),
        email: "ahmed@example.com".into(),
        phone: "+20 123 456 7890".into(),
        location: "Cairo, Egypt".into(),
        university: "Cairo University".into(),
        college: "Faculty of Engineering".into(),
        major: "Computer Science".into(),
        graduation_year: "2025".into(),
        skills: vec![
            "React".into(),
            "TypeScript".into(),
            "Node.js".into(),
            "Python".into(),
        ],
    }
}

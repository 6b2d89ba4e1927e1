use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Mentor,
    Company,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Mentor, Role::Company];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Mentor => "mentor",
            Role::Company => "company",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "student" => Some(Role::Student),
            "mentor" => Some(Role::Mentor),
            "company" => Some(Role::Company),
            _ => None,
        }
    }

    /// Route of the signup form for this role.
    pub fn signup_path(&self) -> &'static str {
        match self {
            Role::Student => "/signup/student",
            Role::Mentor => "/signup/mentor",
            Role::Company => "/signup/company",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    /// Shape is owned by the backend; stored as-is.
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}

/// A file picked in the browser, read into memory for the multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Student signup, sent as `multipart/form-data`.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRegistration {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub university: String,
    pub college: String,
    pub degree: String,
    pub major: String,
    pub grad_year: String,
    pub cv: CvUpload,
}

impl StudentRegistration {
    /// Text parts in wire order; the CV travels as the `cvFile` part.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("fullName", self.full_name.clone()),
            ("email", self.email.clone()),
            ("password", self.password.clone()),
            ("university", self.university.clone()),
            ("college", self.college.clone()),
            ("degree", self.degree.clone()),
            ("major", self.major.clone()),
            ("gradYear", self.grad_year.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorRegistration {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub expertise: String,
    pub years_experience: String,
    pub job_title: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRegistration {
    pub email: String,
    pub password: String,
    pub company_name: String,
    pub industry: String,
    pub location: String,
    pub address: String,
    pub web_site: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub token: String,
    pub email: String,
    pub new_password: String,
}

/// Error body the backend sends with non-success statuses.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

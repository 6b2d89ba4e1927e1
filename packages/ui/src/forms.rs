//! Rule sets, payload builders and the submit flow of the auth forms.

use std::collections::BTreeMap;

use api::{
    ApiConfig, ApiError, AuthApi, CompanyRegistration, CvUpload, ForgotPasswordRequest,
    LoginRequest, LoginResponse, MentorRegistration, ResetPasswordRequest, Role,
    StudentRegistration,
};
use base64::Engine as _;

use crate::validation::{
    validate, FieldRules, FormDraft, Rule, SelectedFile, ValidationError, MAX_CV_BYTES,
};

pub const LOGIN_RULES: &[FieldRules] = &[
    FieldRules {
        field: "email",
        rules: &[Rule::Required, Rule::Email],
    },
    FieldRules {
        field: "password",
        rules: &[Rule::Required],
    },
];

const NEW_ACCOUNT_PASSWORD: [FieldRules; 2] = [
    FieldRules {
        field: "password",
        rules: &[Rule::MinLength(8)],
    },
    FieldRules {
        field: "confirmPassword",
        rules: &[Rule::Required, Rule::Matches("password")],
    },
];

const EMAIL: FieldRules = FieldRules {
    field: "email",
    rules: &[Rule::Required, Rule::Email],
};

const REQUIRED: &[Rule] = &[Rule::Required];

const fn required(field: &'static str) -> FieldRules {
    FieldRules {
        field,
        rules: REQUIRED,
    }
}

pub const STUDENT_RULES: &[FieldRules] = &[
    required("fullName"),
    EMAIL,
    NEW_ACCOUNT_PASSWORD[0],
    NEW_ACCOUNT_PASSWORD[1],
    required("university"),
    required("college"),
    required("major"),
    FieldRules {
        field: "cvFile",
        rules: &[Rule::FileRequired, Rule::MaxFileSize(MAX_CV_BYTES)],
    },
];

pub const MENTOR_RULES: &[FieldRules] = &[
    required("fullName"),
    EMAIL,
    NEW_ACCOUNT_PASSWORD[0],
    NEW_ACCOUNT_PASSWORD[1],
    required("expertise"),
    FieldRules {
        field: "yearsExperience",
        rules: &[Rule::Required, Rule::NonNegativeInteger],
    },
    required("jobTitle"),
    FieldRules {
        field: "linkedin",
        rules: &[Rule::StartsWith("http")],
    },
];

pub const COMPANY_RULES: &[FieldRules] = &[
    EMAIL,
    NEW_ACCOUNT_PASSWORD[0],
    NEW_ACCOUNT_PASSWORD[1],
    required("companyName"),
    required("industry"),
    required("location"),
    FieldRules {
        field: "webSite",
        rules: &[Rule::WebUrl],
    },
    FieldRules {
        field: "description",
        rules: &[Rule::MinTrimmedLength(20)],
    },
];

pub const FORGOT_RULES: &[FieldRules] = &[EMAIL];

pub const RESET_RULES: &[FieldRules] = &[
    FieldRules {
        field: "newPassword",
        rules: &[Rule::Required, Rule::MinLength(8)],
    },
    FieldRules {
        field: "confirmPassword",
        rules: &[Rule::Matches("newPassword")],
    },
];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(BTreeMap<&'static str, ValidationError>),
    #[error("a submission is already in progress")]
    Busy,
    #[error("reset link is missing its token or email")]
    MissingResetLink,
    #[error("could not read the selected file: {0}")]
    UnreadableFile(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Where a form is in its submit cycle.
///
/// `Idle -> Validating -> Submitting -> Succeeded`; an invalid form or a
/// failed call drops back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
}

impl FormPhase {
    pub fn is_submitting(&self) -> bool {
        *self == FormPhase::Submitting
    }

    /// Validate `draft`; on success the form is `Submitting` and the caller
    /// owns the one network call.
    pub fn start(&mut self, rules: &[FieldRules], draft: &FormDraft) -> Result<(), SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::Busy);
        }
        *self = FormPhase::Validating;
        let errors = validate(rules, draft);
        if !errors.is_empty() {
            tracing::debug!("forms: {} invalid field(s)", errors.len());
            *self = FormPhase::Idle;
            return Err(SubmitError::Invalid(errors));
        }
        *self = FormPhase::Submitting;
        Ok(())
    }

    /// Record the outcome of the call started by [`Self::start`].
    pub fn finish<T>(&mut self, result: Result<T, ApiError>) -> Result<T, SubmitError> {
        match result {
            Ok(value) => {
                *self = FormPhase::Succeeded;
                Ok(value)
            }
            Err(err) => {
                *self = FormPhase::Idle;
                Err(err.into())
            }
        }
    }

    /// Give up on a started submission without a call, e.g. an unreadable file.
    pub fn abort(&mut self) {
        *self = FormPhase::Idle;
    }
}

pub fn login_request(draft: &FormDraft, role: Role) -> LoginRequest {
    LoginRequest {
        email: draft.owned("email"),
        password: draft.owned("password"),
        role,
    }
}

pub fn student_registration(draft: &FormDraft, cv: CvUpload) -> StudentRegistration {
    StudentRegistration {
        full_name: draft.owned("fullName"),
        email: draft.owned("email"),
        password: draft.owned("password"),
        university: draft.owned("university"),
        college: draft.owned("college"),
        degree: draft.owned("degree"),
        major: draft.owned("major"),
        grad_year: draft.owned("gradYear"),
        cv,
    }
}

pub fn mentor_registration(draft: &FormDraft) -> MentorRegistration {
    MentorRegistration {
        full_name: draft.owned("fullName"),
        email: draft.owned("email"),
        password: draft.owned("password"),
        expertise: draft.owned("expertise"),
        years_experience: draft.value("yearsExperience").trim().to_string(),
        job_title: draft.owned("jobTitle"),
        linkedin: draft.owned("linkedin"),
    }
}

pub fn company_registration(draft: &FormDraft) -> CompanyRegistration {
    CompanyRegistration {
        email: draft.owned("email"),
        password: draft.owned("password"),
        company_name: draft.owned("companyName"),
        industry: draft.owned("industry"),
        location: draft.owned("location"),
        address: draft.owned("address"),
        web_site: draft.value("webSite").trim().to_string(),
        description: draft.value("description").trim().to_string(),
    }
}

/// Token and email carried by a password reset link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetLink {
    pub token: String,
    pub email: String,
}

impl ResetLink {
    pub fn new(token: Option<String>, email: Option<String>) -> Result<Self, SubmitError> {
        match (token, email) {
            (Some(token), Some(email)) if !token.trim().is_empty() && !email.trim().is_empty() => {
                Ok(Self { token, email })
            }
            _ => Err(SubmitError::MissingResetLink),
        }
    }

    pub fn request(&self, draft: &FormDraft) -> ResetPasswordRequest {
        ResetPasswordRequest {
            token: self.token.clone(),
            email: self.email.clone(),
            new_password: draft.owned("newPassword"),
        }
    }
}

/// Assemble the CV part from picker metadata and base64 content.
pub fn decode_cv(meta: &SelectedFile, content_b64: &str) -> Result<CvUpload, SubmitError> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(content_b64.trim())
        .map_err(|e| SubmitError::UnreadableFile(e.to_string()))?;
    if bytes.len() as u64 != meta.size {
        tracing::warn!(
            "forms: cv size changed since selection ({} -> {})",
            meta.size,
            bytes.len()
        );
    }
    Ok(CvUpload {
        file_name: meta.name.clone(),
        content_type: if meta.content_type.is_empty() {
            "application/octet-stream".to_string()
        } else {
            meta.content_type.clone()
        },
        bytes,
    })
}

pub async fn login(
    api: &dyn AuthApi,
    draft: &FormDraft,
    role: Role,
) -> Result<LoginResponse, ApiError> {
    api.login(&login_request(draft, role)).await
}

pub async fn register_mentor(api: &dyn AuthApi, draft: &FormDraft) -> Result<(), ApiError> {
    api.register_mentor(&mentor_registration(draft)).await
}

pub async fn register_company(api: &dyn AuthApi, draft: &FormDraft) -> Result<(), ApiError> {
    api.register_company(&company_registration(draft)).await
}

pub async fn register_student(
    api: &dyn AuthApi,
    draft: &FormDraft,
    cv: CvUpload,
) -> Result<(), ApiError> {
    api.register_student(&student_registration(draft, cv)).await
}

/// Request a reset email. Unreachable backends count as sent in local mode.
pub async fn forgot_password(
    api: &dyn AuthApi,
    config: &ApiConfig,
    draft: &FormDraft,
) -> Result<(), ApiError> {
    let req = ForgotPasswordRequest {
        email: draft.owned("email"),
    };
    mask_transport(config, api.forgot_password(&req).await)
}

/// Set the new password. Unreachable backends count as success in local mode.
pub async fn reset_password(
    api: &dyn AuthApi,
    config: &ApiConfig,
    link: &ResetLink,
    draft: &FormDraft,
) -> Result<(), ApiError> {
    mask_transport(config, api.reset_password(&link.request(draft)).await)
}

fn mask_transport(config: &ApiConfig, result: Result<(), ApiError>) -> Result<(), ApiError> {
    match result {
        Err(err) if err.is_transport() && config.masks_transport_failures() => {
            tracing::warn!(
                "forms: backend unreachable in {} mode, continuing: {err}",
                config.mode.as_str()
            );
            Ok(())
        }
        other => other,
    }
}

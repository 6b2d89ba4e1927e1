#![cfg(test)]

use api::test_utils::{RecordedCall, RecordingApi};
use api::{ApiConfig, ApiError, AppMode, Role};

use crate::forms::{self, FormPhase, ResetLink, SubmitError};
use crate::validation::{FieldRules, FormDraft, SelectedFile, ValidationError};

/// Drive one submit the way the pages do: validate, call once, record.
async fn submit<T, Fut>(
    rules: &[FieldRules],
    draft: &FormDraft,
    call: impl FnOnce() -> Fut,
) -> (FormPhase, Result<T, SubmitError>)
where
    Fut: std::future::Future<Output = Result<T, ApiError>>,
{
    let mut phase = FormPhase::Idle;
    if let Err(err) = phase.start(rules, draft) {
        return (phase, Err(err));
    }
    let res = call().await;
    let res = phase.finish(res);
    (phase, res)
}

fn invalid_fields(res: Result<(), SubmitError>) -> Vec<(&'static str, ValidationError)> {
    match res {
        Err(SubmitError::Invalid(errors)) => errors.into_iter().collect(),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

fn company_draft() -> FormDraft {
    FormDraft::new()
        .with("email", "hr@nile-tech.com")
        .with("password", "s3cure-pass")
        .with("confirmPassword", "s3cure-pass")
        .with("companyName", "Nile Tech")
        .with("industry", "Software")
        .with("location", "Cairo")
        .with("webSite", "https://nile-tech.com")
        .with("description", "  We build logistics software for the region.  ")
}

fn student_draft() -> FormDraft {
    FormDraft::new()
        .with("fullName", "Omar Hassan")
        .with("email", "omar@cu.edu.eg")
        .with("password", "password123")
        .with("confirmPassword", "password123")
        .with("university", "Cairo University")
        .with("college", "Engineering")
        .with("major", "Computer Science")
        .with("gradYear", "2026")
}

#[tokio::test]
async fn login_with_bad_email_never_calls_the_backend() {
    let api = RecordingApi::new();
    let draft = FormDraft::new()
        .with("email", "not-an-email")
        .with("password", "whatever");
    let (phase, res) = submit(forms::LOGIN_RULES, &draft, || {
        forms::login(&api, &draft, Role::Company)
    })
    .await;
    assert_eq!(phase, FormPhase::Idle);
    let Err(SubmitError::Invalid(errors)) = res else {
        panic!("expected validation failure");
    };
    assert_eq!(errors["email"], ValidationError::InvalidEmail);
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn signup_with_bad_email_never_calls_the_backend() {
    let api = RecordingApi::new();
    let draft = company_draft().with("email", "not-an-email");
    let (_, res) = submit(forms::COMPANY_RULES, &draft, || {
        forms::register_company(&api, &draft)
    })
    .await;
    assert_eq!(invalid_fields(res), vec![("email", ValidationError::InvalidEmail)]);
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn short_passwords_fail_on_length() {
    let api = RecordingApi::new();
    let draft = company_draft()
        .with("password", "short")
        .with("confirmPassword", "short");
    let (_, res) = submit(forms::COMPANY_RULES, &draft, || {
        forms::register_company(&api, &draft)
    })
    .await;
    assert_eq!(invalid_fields(res), vec![("password", ValidationError::TooShort(8))]);
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn mismatched_confirmation_fails_whatever_the_length() {
    for (password, confirm) in [("short", "shorter"), ("long-enough-1", "long-enough-2")] {
        let api = RecordingApi::new();
        let draft = company_draft()
            .with("password", password)
            .with("confirmPassword", confirm);
        let (_, res) = submit(forms::COMPANY_RULES, &draft, || {
            forms::register_company(&api, &draft)
        })
        .await;
        let errors = invalid_fields(res);
        assert!(
            errors.contains(&("confirmPassword", ValidationError::Mismatch)),
            "{password}/{confirm}: {errors:?}"
        );
        assert_eq!(api.call_count(), 0);
    }
}

#[tokio::test]
async fn valid_company_issues_exactly_one_call_without_confirmation() {
    let api = RecordingApi::new();
    let draft = company_draft();
    let (phase, res) = submit(forms::COMPANY_RULES, &draft, || {
        forms::register_company(&api, &draft)
    })
    .await;
    assert_eq!(res, Ok(()));
    assert_eq!(phase, FormPhase::Succeeded);

    let calls = api.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path(), "/auth/register/company");
    let RecordedCall::RegisterCompany(payload) = &calls[0] else {
        panic!("unexpected call {:?}", calls[0]);
    };
    assert_eq!(payload.description, "We build logistics software for the region.");
    let json = serde_json::to_value(payload).unwrap();
    assert!(json.get("confirmPassword").is_none());
    assert_eq!(json["companyName"], "Nile Tech");
}

#[tokio::test]
async fn student_without_cv_is_rejected_before_the_network() {
    let api = RecordingApi::new();
    let draft = student_draft();
    let mut phase = FormPhase::Idle;
    let res = phase.start(forms::STUDENT_RULES, &draft);
    assert_eq!(invalid_fields(res), vec![("cvFile", ValidationError::Required)]);
    assert_eq!(phase, FormPhase::Idle);
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn student_with_cv_sends_multipart_fields() {
    let api = RecordingApi::new();
    let meta = SelectedFile {
        name: "omar-cv.pdf".into(),
        size: 5,
        content_type: "application/pdf".into(),
    };
    let mut draft = student_draft();
    draft.set_file("cvFile", Some(meta.clone()));

    let mut phase = FormPhase::Idle;
    phase.start(forms::STUDENT_RULES, &draft).unwrap();
    let cv = forms::decode_cv(&meta, "aGVsbG8=").unwrap();
    assert_eq!(cv.bytes, b"hello");
    let res = phase.finish(forms::register_student(&api, &draft, cv).await);
    assert_eq!(res, Ok(()));

    let calls = api.calls();
    let RecordedCall::RegisterStudent(reg) = &calls[0] else {
        panic!("unexpected call {:?}", calls[0]);
    };
    let names: Vec<_> = reg.text_fields().into_iter().map(|(k, _)| k).collect();
    assert!(!names.contains(&"confirmPassword"));
    assert_eq!(reg.cv.file_name, "omar-cv.pdf");
    assert_eq!(reg.grad_year, "2026");
}

#[test]
fn corrupt_cv_content_is_reported() {
    let meta = SelectedFile {
        name: "cv.pdf".into(),
        size: 3,
        content_type: String::new(),
    };
    assert!(matches!(
        forms::decode_cv(&meta, "%%%"),
        Err(SubmitError::UnreadableFile(_))
    ));
    let cv = forms::decode_cv(&meta, "AAEC").unwrap();
    assert_eq!(cv.content_type, "application/octet-stream");
}

#[tokio::test]
async fn mentor_rules() {
    let api = RecordingApi::new();
    let draft = FormDraft::new()
        .with("fullName", "Sara Ali")
        .with("email", "sara@example.com")
        .with("password", "longenough")
        .with("confirmPassword", "longenough")
        .with("expertise", "Data Science")
        .with("yearsExperience", "-2")
        .with("jobTitle", "Lead Data Scientist")
        .with("linkedin", "linkedin.com/in/sara");
    let (_, res) = submit(forms::MENTOR_RULES, &draft, || forms::register_mentor(&api, &draft)).await;
    assert_eq!(
        invalid_fields(res),
        vec![
            ("linkedin", ValidationError::MustStartWith("http")),
            ("yearsExperience", ValidationError::Invalid),
        ]
    );

    let draft = draft
        .with("yearsExperience", "7")
        .with("linkedin", "https://linkedin.com/in/sara");
    let (_, res) = submit(forms::MENTOR_RULES, &draft, || forms::register_mentor(&api, &draft)).await;
    assert_eq!(res, Ok(()));
    assert_eq!(api.call_count(), 1);
}

#[tokio::test]
async fn backend_failure_returns_to_idle_with_its_message() {
    let api = RecordingApi::failing(ApiError::Http {
        status: 401,
        message: Some("Invalid credentials".into()),
    });
    let draft = FormDraft::new()
        .with("email", "a@b.co")
        .with("password", "x");
    let (phase, res) = submit(forms::LOGIN_RULES, &draft, || {
        forms::login(&api, &draft, Role::Student)
    })
    .await;
    assert_eq!(phase, FormPhase::Idle);
    let Err(SubmitError::Api(err)) = res else {
        panic!("expected api error");
    };
    assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    let calls = api.calls();
    let RecordedCall::Login(req) = &calls[0] else {
        panic!("expected login call");
    };
    assert_eq!(req.role, Role::Student);
}

#[test]
fn second_submit_while_submitting_is_ignored() {
    let draft = FormDraft::new()
        .with("email", "a@b.co")
        .with("password", "x");
    let mut phase = FormPhase::Idle;
    phase.start(forms::LOGIN_RULES, &draft).unwrap();
    assert!(phase.is_submitting());
    assert_eq!(phase.start(forms::LOGIN_RULES, &draft), Err(SubmitError::Busy));
    assert!(phase.is_submitting());
}

fn config(mode: AppMode) -> ApiConfig {
    ApiConfig::from_values(None, mode)
}

#[tokio::test]
async fn forgot_password_masks_transport_failures_only_locally() {
    let draft = FormDraft::new().with("email", "a@b.co");
    let down = || RecordingApi::failing(ApiError::Transport("connection refused".into()));

    let api = down();
    assert_eq!(forms::forgot_password(&api, &config(AppMode::Local), &draft).await, Ok(()));
    let api = down();
    assert!(forms::forgot_password(&api, &config(AppMode::Production), &draft)
        .await
        .unwrap_err()
        .is_transport());

    let rejected = RecordingApi::failing(ApiError::Http {
        status: 404,
        message: None,
    });
    assert!(forms::forgot_password(&rejected, &config(AppMode::Local), &draft)
        .await
        .is_err());
}

#[tokio::test]
async fn reset_password_needs_a_complete_link() {
    assert_eq!(
        ResetLink::new(Some("tok".into()), None),
        Err(SubmitError::MissingResetLink)
    );
    assert_eq!(
        ResetLink::new(Some(" ".into()), Some("a@b.co".into())),
        Err(SubmitError::MissingResetLink)
    );

    let link = ResetLink::new(Some("tok".into()), Some("a@b.co".into())).unwrap();
    let draft = FormDraft::new()
        .with("newPassword", "brand-new-pass")
        .with("confirmPassword", "brand-new-pass");
    let api = RecordingApi::new();
    let prod = config(AppMode::Production);
    let (_, res) = submit(forms::RESET_RULES, &draft, || {
        forms::reset_password(&api, &prod, &link, &draft)
    })
    .await;
    assert_eq!(res, Ok(()));
    let calls = api.calls();
    let RecordedCall::ResetPassword(req) = &calls[0] else {
        panic!("expected reset call");
    };
    assert_eq!(req.new_password, "brand-new-pass");
    assert_eq!(req.token, "tok");
}

#[test]
fn reset_rules() {
    let mut phase = FormPhase::Idle;
    let draft = FormDraft::new()
        .with("newPassword", "1234567")
        .with("confirmPassword", "12345678");
    assert_eq!(
        invalid_fields(phase.start(forms::RESET_RULES, &draft)),
        vec![
            ("confirmPassword", ValidationError::Mismatch),
            ("newPassword", ValidationError::TooShort(8)),
        ]
    );
}

#[tokio::test]
async fn company_website_is_trimmed_before_validation() {
    let padded = company_draft().with("webSite", "  https://nile-tech.com  ");
    let blank = company_draft().with("webSite", "   ");
    assert!(crate::validation::validate(forms::COMPANY_RULES, &padded).is_empty());
    assert!(crate::validation::validate(forms::COMPANY_RULES, &blank).is_empty());

    let api = RecordingApi::new();
    let (_, res) = submit(forms::COMPANY_RULES, &padded, || {
        forms::register_company(&api, &padded)
    })
    .await;
    assert_eq!(res, Ok(()));
    let calls = api.calls();
    let RecordedCall::RegisterCompany(payload) = &calls[0] else {
        panic!("unexpected call {:?}", calls[0]);
    };
    assert_eq!(payload.web_site, "https://nile-tech.com");

    let mut phase = FormPhase::Idle;
    let bogus = company_draft().with("webSite", "  not a site ");
    assert_eq!(
        invalid_fields(phase.start(forms::COMPANY_RULES, &bogus)),
        vec![("webSite", ValidationError::InvalidUrl)]
    );
}

#![cfg(test)]

use crate::types::{
    CompanyRegistration, ErrorBody, LoginResponse, MentorRegistration, ResetPasswordRequest, Role,
};

#[test]
fn role_round_trips_through_its_wire_name() {
    for role in Role::ALL {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
    assert_eq!(Role::parse(" Mentor "), Some(Role::Mentor));
    assert_eq!(Role::parse("admin"), None);
    assert_eq!(Role::Company.signup_path(), "/signup/company");
}

#[test]
fn company_payload_uses_camel_case_and_has_no_confirmation() {
    let payload = CompanyRegistration {
        email: "hr@acme.io".into(),
        password: "correct horse".into(),
        company_name: "Acme".into(),
        industry: "Software".into(),
        location: "Cairo".into(),
        address: String::new(),
        web_site: "https://acme.io".into(),
        description: "We build tools for builders.".into(),
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["companyName"], "Acme");
    assert_eq!(json["webSite"], "https://acme.io");
    assert!(json.get("confirmPassword").is_none());
}

#[test]
fn mentor_payload_field_names() {
    let payload = MentorRegistration {
        full_name: "Sara Ali".into(),
        email: "sara@example.com".into(),
        password: "longenough".into(),
        expertise: "Data".into(),
        years_experience: "7".into(),
        job_title: "Lead".into(),
        linkedin: String::new(),
    };
    let json = serde_json::to_value(&payload).unwrap();
    let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    assert_eq!(
        keys,
        ["email", "expertise", "fullName", "jobTitle", "linkedin", "password", "yearsExperience"]
    );
}

#[test]
fn reset_payload_names_new_password() {
    let json = serde_json::to_value(ResetPasswordRequest {
        token: "t".into(),
        email: "a@b.co".into(),
        new_password: "12345678".into(),
    })
    .unwrap();
    assert_eq!(json["newPassword"], "12345678");
}

#[test]
fn login_response_user_is_optional() {
    let res: LoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
    assert_eq!(res.token, "abc");
    assert!(res.user.is_none());

    let res: LoginResponse =
        serde_json::from_str(r#"{"token":"abc","user":{"id":7,"role":"student"}}"#).unwrap();
    assert_eq!(res.user.unwrap()["id"], 7);
}

#[test]
fn error_body_tolerates_missing_message() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(body.message, None);
}

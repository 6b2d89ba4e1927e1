//! Test doubles for code that talks to the backend through [`AuthApi`].

use std::cell::RefCell;

use async_trait::async_trait;

use crate::client::AuthApi;
use crate::error::ApiError;
use crate::types::{
    CompanyRegistration, ForgotPasswordRequest, LoginRequest, LoginResponse, MentorRegistration,
    ResetPasswordRequest, StudentRegistration,
};

/// One captured backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Login(LoginRequest),
    RegisterStudent(StudentRegistration),
    RegisterMentor(MentorRegistration),
    RegisterCompany(CompanyRegistration),
    ForgotPassword(ForgotPasswordRequest),
    ResetPassword(ResetPasswordRequest),
}

impl RecordedCall {
    pub fn path(&self) -> &'static str {
        match self {
            RecordedCall::Login(_) => "/auth/login",
            RecordedCall::RegisterStudent(_) => "/auth/register/student",
            RecordedCall::RegisterMentor(_) => "/auth/register/mentor",
            RecordedCall::RegisterCompany(_) => "/auth/register/company",
            RecordedCall::ForgotPassword(_) => "/auth/forgot-password",
            RecordedCall::ResetPassword(_) => "/auth/reset-password",
        }
    }
}

/// Records every call and answers with a canned result.
#[derive(Debug, Default)]
pub struct RecordingApi {
    calls: RefCell<Vec<RecordedCall>>,
    failure: Option<ApiError>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with `err`.
    pub fn failing(err: ApiError) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            failure: Some(err),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, call: RecordedCall) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for RecordingApi {
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.record(RecordedCall::Login(req.clone()))?;
        Ok(LoginResponse {
            token: "test-token".to_string(),
            user: Some(serde_json::json!({ "email": req.email, "role": req.role.as_str() })),
        })
    }

    async fn register_student(&self, reg: &StudentRegistration) -> Result<(), ApiError> {
        self.record(RecordedCall::RegisterStudent(reg.clone()))
    }

    async fn register_mentor(&self, reg: &MentorRegistration) -> Result<(), ApiError> {
        self.record(RecordedCall::RegisterMentor(reg.clone()))
    }

    async fn register_company(&self, reg: &CompanyRegistration) -> Result<(), ApiError> {
        self.record(RecordedCall::RegisterCompany(reg.clone()))
    }

    async fn forgot_password(&self, req: &ForgotPasswordRequest) -> Result<(), ApiError> {
        self.record(RecordedCall::ForgotPassword(req.clone()))
    }

    async fn reset_password(&self, req: &ResetPasswordRequest) -> Result<(), ApiError> {
        self.record(RecordedCall::ResetPassword(req.clone()))
    }
}

//! This crate contains the backend wire types, the HTTP client and the
//! placeholder data the dashboards render until the backend exists.

pub mod client;
pub mod config;
pub mod error;
pub mod mock;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

#[cfg(test)]
mod types_tests;

pub use client::{AuthApi, HttpClient};
pub use config::{ApiConfig, AppMode};
pub use error::ApiError;
pub use types::{
    CompanyRegistration, CvUpload, ErrorBody, ForgotPasswordRequest, LoginRequest, LoginResponse,
    MentorRegistration, ResetPasswordRequest, Role, StudentRegistration,
};

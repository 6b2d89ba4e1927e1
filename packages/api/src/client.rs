use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::types::{
    CompanyRegistration, ErrorBody, ForgotPasswordRequest, LoginRequest, LoginResponse,
    MentorRegistration, ResetPasswordRequest, StudentRegistration,
};

/// Backend calls made by the auth pages.
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError>;
    async fn register_student(&self, reg: &StudentRegistration) -> Result<(), ApiError>;
    async fn register_mentor(&self, reg: &MentorRegistration) -> Result<(), ApiError>;
    async fn register_company(&self, reg: &CompanyRegistration) -> Result<(), ApiError>;
    async fn forgot_password(&self, req: &ForgotPasswordRequest) -> Result<(), ApiError>;
    async fn reset_password(&self, req: &ResetPasswordRequest) -> Result<(), ApiError>;
}

/// Thin `reqwest` wrapper bound to the configured base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl HttpClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, ApiError> {
        let url = self.url(path);
        debug!("api.post_json: {url}");
        let resp = self.http.post(&url).json(body).send().await.map_err(|e| {
            warn!("api.post_json: transport failure url={url}: {e}");
            ApiError::from(e)
        })?;
        check_status(&url, resp).await
    }

    async fn post_multipart(&self, path: &str, form: Form) -> Result<reqwest::Response, ApiError> {
        let url = self.url(path);
        debug!("api.post_multipart: {url}");
        let resp = self.http.post(&url).multipart(form).send().await.map_err(|e| {
            warn!("api.post_multipart: transport failure url={url}: {e}");
            ApiError::from(e)
        })?;
        check_status(&url, resp).await
    }
}

async fn check_status(url: &str, resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    // Error bodies are best-effort; a non-JSON body just loses the message.
    let message = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message);
    warn!(
        "api.check_status: url={url} status={} message={:?}",
        status.as_u16(),
        message
    );
    Err(ApiError::Http {
        status: status.as_u16(),
        message,
    })
}

/// Build the multipart body for a student signup.
pub fn student_form(reg: &StudentRegistration) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for (name, value) in reg.text_fields() {
        form = form.text(name, value);
    }
    let cv = Part::bytes(reg.cv.bytes.clone())
        .file_name(reg.cv.file_name.clone())
        .mime_str(&reg.cv.content_type)
        .map_err(|e| ApiError::Payload(format!("cv content type: {e}")))?;
    Ok(form.part("cvFile", cv))
}

#[async_trait(?Send)]
impl AuthApi for HttpClient {
    async fn login(&self, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let resp = self.post_json("/auth/login", req).await?;
        let body = resp.json::<LoginResponse>().await.map_err(ApiError::from)?;
        debug!("api.login: ok role={}", req.role.as_str());
        Ok(body)
    }

    async fn register_student(&self, reg: &StudentRegistration) -> Result<(), ApiError> {
        let form = student_form(reg)?;
        self.post_multipart("/auth/register/student", form).await?;
        debug!("api.register_student: ok cv_bytes={}", reg.cv.bytes.len());
        Ok(())
    }

    async fn register_mentor(&self, reg: &MentorRegistration) -> Result<(), ApiError> {
        self.post_json("/auth/register/mentor", reg).await?;
        Ok(())
    }

    async fn register_company(&self, reg: &CompanyRegistration) -> Result<(), ApiError> {
        self.post_json("/auth/register/company", reg).await?;
        Ok(())
    }

    async fn forgot_password(&self, req: &ForgotPasswordRequest) -> Result<(), ApiError> {
        self.post_json("/auth/forgot-password", req).await?;
        Ok(())
    }

    async fn reset_password(&self, req: &ResetPasswordRequest) -> Result<(), ApiError> {
        self.post_json("/auth/reset-password", req).await?;
        Ok(())
    }
}

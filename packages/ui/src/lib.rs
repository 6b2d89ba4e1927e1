//! This crate contains all shared UI for the workspace.

mod i18n;
pub use i18n::{format_date, format_time, lookup, t, t_n, Dictionary, Lang};

pub mod preferences;
pub use preferences::{
    try_preferences, use_lang, use_preferences, MemoryBackend, Preference, PreferenceBackend,
    PreferenceContext, PreferenceError, PreferenceMenu, PreferenceProvider, Preferences, Theme,
};

pub mod validation;
pub use validation::{FormDraft, Rule, SelectedFile, ValidationError};

pub mod forms;
pub use forms::{FormPhase, SubmitError};

mod field;
pub use field::{FieldError, TextField};

mod theme;
pub use theme::AppTheme;

mod toast;
pub use toast::{use_toasts, ToastProvider, Toasts};

mod hero;
pub use hero::Landing;

mod auth;
pub use auth::{use_api_client, ForgotPassword, Login, ResetPassword, SelectRole};

mod signup;
pub use signup::{CompanySignup, MentorSignup, StudentSignup};

mod dashboard;
pub use dashboard::{MentorDashboard, StudentDashboard, StudentNav, StudentShell};

mod listings;
pub use listings::{InternshipsPage, MentorshipsPage, ProfilePage, SessionsPage};

#[cfg(test)]
mod forms_tests;

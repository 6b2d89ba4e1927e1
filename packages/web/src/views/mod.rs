mod auth;
pub use auth::{
    CompanySignup, ForgotPassword, Login, MentorSignup, ResetPassword, SelectRole, StudentSignup,
};

mod home;
pub use home::Home;

mod student;
pub use student::{
    MentorDashboard, StudentDashboard, StudentInternships, StudentMentorships, StudentProfile,
    StudentSessions,
};

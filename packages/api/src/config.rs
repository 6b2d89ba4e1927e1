/// Base URL used when neither the runtime nor the build environment sets one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        let raw = std::env::var("APP_MODE")
            .ok()
            .or_else(|| option_env!("APP_MODE").map(str::to_string))
            .unwrap_or_default();
        Self::parse(&raw)
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AppMode::Local => "local",
            AppMode::Production => "production",
        }
    }
}

/// Where the backend lives and how failures against it are treated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub mode: AppMode,
}

impl ApiConfig {
    /// Resolve from `INTERNWAY_API_URL` at runtime, then at build time (wasm has
    /// no process environment), then [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        let base_url = std::env::var("INTERNWAY_API_URL")
            .ok()
            .or_else(|| option_env!("INTERNWAY_API_URL").map(str::to_string));
        Self::from_values(base_url, AppMode::from_env())
    }

    pub fn from_values(base_url: Option<String>, mode: AppMode) -> Self {
        let base_url = base_url
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url, mode }
    }

    /// Local/demo mode treats transport failures on the password-recovery
    /// endpoints as success so the flows can be clicked through without a backend.
    pub fn masks_transport_failures(&self) -> bool {
        self.mode == AppMode::Local
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_values(None, AppMode::Production)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_mode_defaults_to_production() {
        assert_eq!(AppMode::parse(""), AppMode::Production);
    }

    #[test]
    fn test_app_mode_local_case_insensitive() {
        assert_eq!(AppMode::parse("local"), AppMode::Local);
        assert_eq!(AppMode::parse(" LOCAL "), AppMode::Local);
    }

    #[test]
    fn test_app_mode_invalid_defaults_to_production() {
        assert_eq!(AppMode::parse("invalid"), AppMode::Production);
    }

    #[test]
    fn base_url_falls_back_and_strips_trailing_slash() {
        let cfg = ApiConfig::from_values(None, AppMode::Production);
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);

        let cfg = ApiConfig::from_values(Some("  ".into()), AppMode::Production);
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);

        let cfg = ApiConfig::from_values(Some("https://api.internway.io/v1/".into()), AppMode::Local);
        assert_eq!(cfg.base_url, "https://api.internway.io/v1");
        assert!(cfg.masks_transport_failures());
    }

    #[test]
    fn production_never_masks_failures() {
        assert!(!ApiConfig::default().masks_transport_failures());
    }
}

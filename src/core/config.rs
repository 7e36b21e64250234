//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use super::credentials::AuthAction;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Base URL of the chat backend that owns `/api/user/*`
    /// Example: http://localhost:4001
    pub api_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_api_url(std::env::var("CHAT_API_URL").ok())
    }

    /// Build a config from an optional backend URL, ignoring blank values
    pub fn from_api_url(api_url: Option<String>) -> Self {
        let api_url = api_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        Self { api_url }
    }

    /// Upstream URL for an auth action, if the backend is configured
    pub fn upstream_url(&self, action: AuthAction) -> Option<String> {
        self.api_url
            .as_deref()
            .map(|base| format!("{}{}", base, action.endpoint()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_with_api_url() {
        let config = Config::from_api_url(Some("http://localhost:4001".to_string()));

        assert_eq!(
            config.upstream_url(AuthAction::Login).as_deref(),
            Some("http://localhost:4001/api/user/login")
        );
        assert_eq!(
            config.upstream_url(AuthAction::Signup).as_deref(),
            Some("http://localhost:4001/api/user/signup")
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = Config::from_api_url(Some("http://chat.internal/ ".to_string()));

        assert_eq!(config.api_url.as_deref(), Some("http://chat.internal"));
    }

    #[test]
    fn test_blank_api_url_is_unset() {
        assert_eq!(Config::from_api_url(Some("   ".to_string())).api_url, None);
        assert_eq!(Config::from_api_url(None).api_url, None);
        assert_eq!(Config::default().upstream_url(AuthAction::Login), None);
    }
}

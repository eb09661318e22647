use std::fmt::{Debug, Display, Formatter};

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "SENTINEL_API_URL";

/// Represents the backend the monitor talks to.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Local development backend.
    #[default]
    Local,
    /// Explicitly configured backend base URL.
    Custom { api_base_url: String },
}

impl Environment {
    /// Resolves the environment from `SENTINEL_API_URL`, falling back to the
    /// local default when the variable is unset or empty.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Environment::Custom {
                api_base_url: url.trim().to_string(),
            },
            _ => Environment::Local,
        }
    }

    /// Returns the API base URL associated with the environment.
    pub fn api_base_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:8000/api".to_string(),
            Environment::Custom { api_base_url } => api_base_url.clone(),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.api_base_url())
    }
}

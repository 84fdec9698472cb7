use thiserror::Error;

/// Configuration errors raised while reading the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set. Add it to your environment or .env file")]
    MissingVar(&'static str),
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

/// Runtime settings for the Privacy API client
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub page_size: u32,
}

impl Config {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.privacy.com/v1";
    pub const MAX_PAGE_SIZE: u32 = 1000;

    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingVar("API_KEY"))?;

        let base_url = lookup("PRIVACY_API_URL")
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());

        let page_size = match lookup("PRIVACY_PAGE_SIZE") {
            Some(raw) => {
                let size = raw.trim().parse::<u32>().map_err(|e| ConfigError::InvalidValue {
                    var: "PRIVACY_PAGE_SIZE",
                    reason: e.to_string(),
                })?;
                if size == 0 || size > Self::MAX_PAGE_SIZE {
                    return Err(ConfigError::InvalidValue {
                        var: "PRIVACY_PAGE_SIZE",
                        reason: format!("must be between 1 and {}", Self::MAX_PAGE_SIZE),
                    });
                }
                size
            }
            None => Self::MAX_PAGE_SIZE,
        };

        Ok(Self {
            api_key,
            base_url,
            page_size,
        })
    }
}

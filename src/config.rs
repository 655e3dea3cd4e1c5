use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub completion_base_url: String,
    pub completion_api_key: Option<SecretString>,
    pub assignment_store_base_url: String,
    pub default_model: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            completion_base_url: env::var("COMPLETION_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            completion_api_key: env::var("COMPLETION_API_KEY")
                .ok()
                .map(SecretString::from),
            assignment_store_base_url: env::var("ASSIGNMENT_STORE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            default_model: env::var("DEFAULT_MODEL")
                .unwrap_or_else(|_| "claude-haiku-4-5-20251001".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(30),
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            completion_base_url: "http://localhost:3000".to_string(),
            completion_api_key: None,
            assignment_store_base_url: "http://localhost:3000".to_string(),
            default_model: "test-model".to_string(),
            request_timeout_secs: 5,
        }
    }
}

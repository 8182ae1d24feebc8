use std::time::Duration;

/// Model identifier used when none is configured.
pub const DEFAULT_MODEL: &str = "openai/gpt-4";

/// Environment variable naming the backend base URL.
pub const ENV_BASE_URL: &str = "CODE_AGENT_BASE_URL";
/// Environment variable carrying the bearer credential.
pub const ENV_API_KEY: &str = "CODE_AGENT_API_KEY";
/// Environment variable selecting the model identifier.
pub const ENV_MODEL: &str = "CODE_AGENT_MODEL";

/// Transport configuration for code-agent requests.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Base URL of the backend. `None` switches both transport operations
    /// into offline stub mode.
    pub base_url: Option<String>,
    /// Optional bearer credential passed to `Authorization`.
    pub api_key: Option<String>,
    /// Model identifier sent in request payloads.
    pub model: String,
    /// Optional request timeout.
    pub timeout: Option<Duration>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
        }
    }
}

impl AgentConfig {
    /// Resolves configuration once from the process environment.
    ///
    /// Absent or blank variables fall back to the defaults; an unset base URL
    /// leaves the transport in stub mode.
    pub fn from_env() -> Self {
        Self {
            base_url: env_value(ENV_BASE_URL),
            api_key: env_value(ENV_API_KEY),
            model: env_value(ENV_MODEL).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Returns the trimmed base URL, or `None` when the transport should run
    /// in offline stub mode.
    pub fn configured_base_url(&self) -> Option<&str> {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

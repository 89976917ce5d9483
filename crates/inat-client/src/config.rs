//! Configuration for InatClient.

use std::env;
use std::time::Duration;

use crate::error::InatError;

/// Default base URL for the iNaturalist v1 API.
pub const DEFAULT_BASE_URL: &str = "https://api.inaturalist.org/v1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`crate::InatClient`].
#[derive(Debug, Clone)]
pub struct InatConfig {
    /// API base URL, without a trailing slash.
    pub base_url: String,

    /// User agent sent with every request.
    pub user_agent: String,

    /// Per-request timeout. A timeout is reported as a network error.
    pub timeout: Duration,

    /// Page size for observation fetches. The API caps pages at 200;
    /// one page of up to 100 is the whole candidate pool here.
    pub observations_per_page: usize,
}

impl Default for InatConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("sighting-bot/{}", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            observations_per_page: 100,
        }
    }
}

impl InatConfig {
    /// Create configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `INAT_BASE_URL` - API base URL (default: https://api.inaturalist.org/v1)
    /// - `INAT_USER_AGENT` - User agent string
    /// - `INAT_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Result<Self, InatError> {
        let mut config = Self::default();

        if let Ok(url) = env::var("INAT_BASE_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(agent) = env::var("INAT_USER_AGENT") {
            config.user_agent = agent;
        }

        if let Ok(secs) = env::var("INAT_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                InatError::Configuration(format!("INAT_TIMEOUT_SECS is not a number: {secs}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Create a new config builder.
    pub fn builder() -> InatConfigBuilder {
        InatConfigBuilder::default()
    }
}

/// Builder for [`InatConfig`].
#[derive(Debug, Default)]
pub struct InatConfigBuilder {
    config: InatConfig,
}

impl InatConfigBuilder {
    /// Set the API base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.config.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the observation page size.
    pub fn observations_per_page(mut self, per_page: usize) -> Self {
        self.config.observations_per_page = per_page;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> InatConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InatConfig::default();
        assert_eq!(config.base_url, "https://api.inaturalist.org/v1");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.observations_per_page, 100);
        assert!(config.user_agent.starts_with("sighting-bot/"));
    }

    #[test]
    fn test_builder_strips_trailing_slash() {
        let config = InatConfig::builder()
            .base_url("http://localhost:8080/v1/")
            .build();
        assert_eq!(config.base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn test_builder_all_options() {
        let config = InatConfig::builder()
            .base_url("http://localhost:8080")
            .user_agent("test-agent")
            .timeout(Duration::from_secs(3))
            .observations_per_page(50)
            .build();

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.observations_per_page, 50);
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_inat_vars() {
            std::env::remove_var("INAT_BASE_URL");
            std::env::remove_var("INAT_USER_AGENT");
            std::env::remove_var("INAT_TIMEOUT_SECS");
        }

        // Scenario 1: nothing set, defaults used
        clear_all_inat_vars();
        let config = InatConfig::from_env().unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);

        // Scenario 2: overrides applied
        clear_all_inat_vars();
        std::env::set_var("INAT_BASE_URL", "http://localhost:9000/v1/");
        std::env::set_var("INAT_USER_AGENT", "env-agent");
        std::env::set_var("INAT_TIMEOUT_SECS", "5");

        let config = InatConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert_eq!(config.user_agent, "env-agent");
        assert_eq!(config.timeout, Duration::from_secs(5));

        // Scenario 3: bad timeout is a configuration error
        clear_all_inat_vars();
        std::env::set_var("INAT_TIMEOUT_SECS", "soon");
        let result = InatConfig::from_env();
        assert!(matches!(result, Err(InatError::Configuration(_))));

        clear_all_inat_vars();
    }
}

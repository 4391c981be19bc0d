use innovalex_db::rest::DEFAULT_REQUEST_TIMEOUT_SECS;
use innovalex_db::BackendConfig;

use crate::error::ConfigError;

/// Host configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Hosted backend connection settings.
    pub backend: BackendConfig,
    /// Account the console host signs in with.
    pub email: Option<String>,
    pub password: Option<String>,
}

impl DashboardConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default |
    /// |------------------------|---------|
    /// | `BACKEND_URL`          | required |
    /// | `BACKEND_ANON_KEY`     | required |
    /// | `REQUEST_TIMEOUT_SECS` | `30`    |
    /// | `DASHBOARD_EMAIL`      | unset   |
    /// | `DASHBOARD_PASSWORD`   | unset   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let url = non_empty("BACKEND_URL").ok_or(ConfigError::Missing("BACKEND_URL"))?;
        let anon_key =
            non_empty("BACKEND_ANON_KEY").ok_or(ConfigError::Missing("BACKEND_ANON_KEY"))?;

        let request_timeout_secs = match non_empty("REQUEST_TIMEOUT_SECS") {
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                var: "REQUEST_TIMEOUT_SECS",
                expected: "a whole number of seconds",
                value: raw,
            })?,
        };

        let mut backend = BackendConfig::new(url, anon_key);
        backend.request_timeout_secs = request_timeout_secs;

        Ok(Self {
            backend,
            email: non_empty("DASHBOARD_EMAIL"),
            password: non_empty("DASHBOARD_PASSWORD"),
        })
    }

    /// Both sign-in credentials, when configured.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        Some((self.email.as_deref()?, self.password.as_deref()?))
    }
}

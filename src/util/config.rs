//! Runtime configuration resolved once at startup.

use std::sync::OnceLock;

use url::Url;

pub const AGENT_API_URL_VAR: &str = "AGENT_API_URL";
pub const DEFAULT_AGENT_API_URL: &str = "http://localhost:8000";

/// Value baked in at build time, used where there is no process environment (web).
const BUILD_AGENT_API_URL: Option<&str> = option_env!("AGENT_API_URL");

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub agent_api_url: Url,
}

impl AppConfig {
    /// Runtime environment first, then the build-time value, then the default.
    /// An unparsable value is skipped with a warning.
    pub fn from_env() -> Self {
        let runtime = std::env::var(AGENT_API_URL_VAR).ok();
        Self::resolve(runtime.as_deref(), BUILD_AGENT_API_URL)
    }

    fn resolve(runtime: Option<&str>, build_time: Option<&str>) -> Self {
        let agent_api_url = [runtime, build_time]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .find_map(|raw| match parse_base_url(raw) {
                Ok(url) => Some(url),
                Err(err) => {
                    tracing::warn!("ignoring {AGENT_API_URL_VAR}={raw}: {err}");
                    None
                }
            })
            .unwrap_or_else(default_agent_api_url);

        Self { agent_api_url }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            agent_api_url: default_agent_api_url(),
        }
    }
}

/// Process-wide configuration, resolved on first access.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let config = AppConfig::from_env();
        tracing::info!(agent_api_url = %config.agent_api_url, "configuration loaded");
        config
    })
}

/// Parses a base address and guarantees a trailing slash so that
/// `Url::join` appends to the path instead of replacing its last segment.
pub fn parse_base_url(raw: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn default_agent_api_url() -> Url {
    parse_base_url(DEFAULT_AGENT_API_URL).expect("default agent URL is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default() {
        let config = AppConfig::resolve(None, None);
        assert_eq!(config.agent_api_url.as_str(), "http://localhost:8000/");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn runtime_value_wins_over_build_value() {
        let config = AppConfig::resolve(Some("https://agents.example.com"), Some("http://build:1"));
        assert_eq!(config.agent_api_url.as_str(), "https://agents.example.com/");
    }

    #[test]
    fn invalid_runtime_value_falls_through() {
        let config = AppConfig::resolve(Some("not a url"), Some("http://build:9000/api"));
        assert_eq!(config.agent_api_url.as_str(), "http://build:9000/api/");

        let config = AppConfig::resolve(Some("   "), None);
        assert_eq!(config.agent_api_url.as_str(), "http://localhost:8000/");
    }

    #[test]
    fn base_url_keeps_prefix_path() {
        let base = parse_base_url("http://host/api/v1").expect("valid url");
        assert_eq!(base.join("agents").expect("join").as_str(), "http://host/api/v1/agents");
    }
}

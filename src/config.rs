use anyhow::{bail, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/workflow";
pub const DEFAULT_TITLE: &str = "Project & Case Study Assistant";

const API_URL_ENV: &str = "WFCHAT_API_URL";
const TITLE_ENV: &str = "WFCHAT_TITLE";
const DEBUG_PAYLOAD_ENV: &str = "WFCHAT_DEBUG_PAYLOAD";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub api_url: String,
    pub title: String,
    pub debug_payload: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            title: DEFAULT_TITLE.to_string(),
            debug_payload: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let api_url = non_blank_env(API_URL_ENV).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let title = non_blank_env(TITLE_ENV).unwrap_or_else(|| DEFAULT_TITLE.to_string());
        let debug_payload = non_blank_env(DEBUG_PAYLOAD_ENV)
            .and_then(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(Self {
            api_url: api_url.trim().to_string(),
            title,
            debug_payload,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            bail!(
                "Invalid {API_URL_ENV} '{}': expected http:// or https:// URL",
                self.api_url
            );
        }

        let parsed = match Url::parse(&self.api_url) {
            Ok(parsed) => parsed,
            Err(error) => bail!("Invalid {API_URL_ENV} '{}': {error}", self.api_url),
        };
        if parsed.host_str().map_or(true, str::is_empty) {
            bail!("Invalid {API_URL_ENV} '{}': missing host", self.api_url);
        }

        if parsed.scheme() == "http" && !self.is_local_endpoint() {
            tracing::warn!(url = %self.api_url, "workflow endpoint is plain http on a remote host");
        }

        Ok(())
    }

    pub fn is_local_endpoint(&self) -> bool {
        Url::parse(self.api_url.trim())
            .ok()
            .and_then(|url| url.host_str().map(is_loopback_host))
            .unwrap_or(false)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// `localhost`, any loopback address, or the unspecified address.
fn is_loopback_host(host: &str) -> bool {
    if host.eq_ignore_ascii_case("localhost") {
        return true;
    }
    host.trim_start_matches('[')
        .trim_end_matches(']')
        .parse::<IpAddr>()
        .is_ok_and(|addr| addr.is_loopback() || addr.is_unspecified())
}

fn non_blank_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clear_env() {
        std::env::remove_var(API_URL_ENV);
        std::env::remove_var(TITLE_ENV);
        std::env::remove_var(DEBUG_PAYLOAD_ENV);
    }

    #[test]
    fn load_uses_defaults_when_env_is_unset_or_blank() {
        let _env_lock = crate::test_support::ENV_LOCK.blocking_lock();
        clear_env();
        std::env::set_var(TITLE_ENV, "   ");

        let config = Config::load().expect("load");
        assert_eq!(config, Config::default());
        clear_env();
    }

    #[test]
    fn load_reads_overrides() {
        let _env_lock = crate::test_support::ENV_LOCK.blocking_lock();
        clear_env();
        std::env::set_var(API_URL_ENV, " https://chat.example.com/api/workflow ");
        std::env::set_var(TITLE_ENV, "Proposals");
        std::env::set_var(DEBUG_PAYLOAD_ENV, "yes");

        let config = Config::load().expect("load");
        assert_eq!(config.api_url, "https://chat.example.com/api/workflow");
        assert_eq!(config.title, "Proposals");
        assert!(config.debug_payload);
        clear_env();
    }

    #[test]
    fn unparseable_debug_flag_is_off() {
        let _env_lock = crate::test_support::ENV_LOCK.blocking_lock();
        clear_env();
        std::env::set_var(DEBUG_PAYLOAD_ENV, "maybe");

        assert!(!Config::load().expect("load").debug_payload);
        clear_env();
    }

    #[test]
    fn validate_rejects_non_http_urls() {
        let config = Config {
            api_url: "ftp://localhost/api/workflow".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            api_url: "http://".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn flag_values_parse_case_insensitively() {
        assert_eq!(parse_flag(" ON "), Some(true));
        assert_eq!(parse_flag("Yes"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn loopback_and_unspecified_hosts_are_local() {
        for url in [
            " HTTP://LOCALHOST:8000/api/workflow ",
            "http://127.0.0.1:8000/api/workflow",
            "http://127.4.5.6/api/workflow",
            "http://[::1]:8000/api/workflow",
            "http://0.0.0.0:8000/api/workflow",
        ] {
            let config = Config {
                api_url: url.to_string(),
                ..Config::default()
            };
            assert!(config.is_local_endpoint(), "{url}");
        }

        for url in [
            "https://evil-localhost.com/api/workflow",
            "http://10.0.0.8/api/workflow",
            "not a url",
        ] {
            let config = Config {
                api_url: url.to_string(),
                ..Config::default()
            };
            assert!(!config.is_local_endpoint(), "{url}");
        }
    }

    #[test]
    fn validate_accepts_default_local_endpoint() {
        let config = Config::default();
        assert!(config.is_local_endpoint());
        assert!(config.validate().is_ok());
    }
}

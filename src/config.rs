//! Configuration constants and profile loading for countryline
//!
//! Settings live in an INI profile file with one section per profile name.
//! A missing file or section yields the defaults.

use anyhow::{Context, Result};
use ini::{Ini, Properties};
use std::time::Duration;

/// Default profile file path
pub const DEFAULT_PROFILE_PATH: &str = "~/.countryline/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "COUNTRYLINE_PROFILE_PATH";

/// Default log file path, used with `--verbose`
pub const DEFAULT_LOG_PATH: &str = "~/.countryline/countryline.log";

/// Environment variable holding the log filter directives
pub const LOG_FILTER_ENV_VAR: &str = "COUNTRYLINE_LOG";

/// Filter used when `COUNTRYLINE_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "countryline=debug";

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v2";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Expand `~` and environment variables in a configured path
pub fn expand_path(path: &str) -> Result<String> {
    shellexpand::full(path)
        .map(|expanded| expanded.into_owned())
        .with_context(|| format!("Cannot expand path '{path}'"))
}

/// Settings of one profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetProfile {
    pub base_url: String,
    pub debounce: Duration,
    pub notice_delay: Duration,
    pub timeout: Duration,
    pub discard_stale: bool,
}

impl Default for WidgetProfile {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            debounce: crate::widget::events::DEFAULT_DEBOUNCE_DELAY,
            notice_delay: crate::widget::notifier::DEFAULT_NOTICE_DELAY,
            timeout: Duration::from_secs(10),
            discard_stale: true,
        }
    }
}

impl WidgetProfile {
    fn from_section(section: &Properties) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            base_url: section
                .get("base_url")
                .map(str::to_string)
                .unwrap_or(defaults.base_url),
            debounce: millis(section, "debounce_ms")?.unwrap_or(defaults.debounce),
            notice_delay: millis(section, "notice_delay_ms")?.unwrap_or(defaults.notice_delay),
            timeout: match millis(section, "timeout_ms")? {
                Some(timeout) if timeout.is_zero() => {
                    anyhow::bail!("Invalid timeout_ms value '0', must be greater than zero")
                }
                Some(timeout) => timeout,
                None => defaults.timeout,
            },
            discard_stale: match section.get("discard_stale") {
                Some(value) => parse_bool(value)
                    .with_context(|| format!("Invalid discard_stale value '{value}'"))?,
                None => defaults.discard_stale,
            },
        })
    }
}

/// Load profile `name` from the INI file at `path`
pub fn load_profile(path: &str, name: &str) -> Result<WidgetProfile> {
    let path = expand_path(path)?;
    tracing::debug!("Loading profile '{}' from '{}'", name, path);

    if !std::path::Path::new(&path).exists() {
        tracing::debug!("Profile file '{}' not found, using defaults", path);
        return Ok(WidgetProfile::default());
    }

    let ini = Ini::load_from_file(&path)
        .with_context(|| format!("Failed to read profile file '{path}'"))?;

    match ini.section(Some(name)) {
        Some(section) => WidgetProfile::from_section(section)
            .with_context(|| format!("Invalid profile '{name}' in '{path}'")),
        None => {
            tracing::debug!("Profile '{}' not found, using defaults", name);
            Ok(WidgetProfile::default())
        }
    }
}

fn millis(section: &Properties, key: &str) -> Result<Option<Duration>> {
    section
        .get(key)
        .map(|value| {
            value
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .with_context(|| format!("Invalid {key} value '{value}'"))
        })
        .transpose()
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => anyhow::bail!("expected true or false, got '{other}'"),
    }
}

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

use crate::modules::webhooks::core::history_merge::HistoryMerge;
use crate::shared::infrastructure::event_history::DEFAULT_RETENTION;

pub const HOST_VAR: &str = "WEBHOOK_HOST";
pub const PORT_VAR: &str = "WEBHOOK_PORT";
pub const RETENTION_VAR: &str = "WEBHOOK_RETENTION";
pub const EVENTS_FILE_VAR: &str = "WEBHOOK_EVENTS_FILE";
pub const MAX_BODY_BYTES_VAR: &str = "WEBHOOK_MAX_BODY_BYTES";
pub const ALWAYS_MERGE_HISTORY_VAR: &str = "WEBHOOK_ALWAYS_MERGE_HISTORY";

// GitHub caps webhook payloads at 25 MiB.
const DEFAULT_MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub retention: usize,
    pub events_file: PathBuf,
    pub max_body_bytes: usize,
    pub history_merge: HistoryMerge,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8080,
            retention: DEFAULT_RETENTION,
            events_file: PathBuf::from("github_events.json"),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            history_merge: HistoryMerge::CompletedOnly,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let retention = parse_or(&lookup, RETENTION_VAR, defaults.retention)?;
        if retention == 0 {
            let raw = lookup(RETENTION_VAR).unwrap_or_default();
            return Err(invalid(RETENTION_VAR, &raw, "must be at least 1"));
        }

        let always_merge = match lookup(ALWAYS_MERGE_HISTORY_VAR) {
            None => false,
            Some(value) => parse_bool(&value)
                .ok_or_else(|| invalid(ALWAYS_MERGE_HISTORY_VAR, &value, "expected true or false"))?,
        };

        Ok(Self {
            host: lookup(HOST_VAR).unwrap_or(defaults.host),
            port: parse_or(&lookup, PORT_VAR, defaults.port)?,
            retention,
            events_file: lookup(EVENTS_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.events_file),
            max_body_bytes: parse_or(&lookup, MAX_BODY_BYTES_VAR, defaults.max_body_bytes)?,
            history_merge: if always_merge {
                HistoryMerge::Always
            } else {
                HistoryMerge::CompletedOnly
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|err: T::Err| invalid(key, &value, err)),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid(key: &'static str, value: &str, reason: impl Display) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

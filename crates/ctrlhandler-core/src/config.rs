//! Environment-driven configuration.
//!
//! Values are resolved through a lookup function so callers (and tests) can
//! supply something other than the process environment. Blank values fall
//! back to the defaults.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::sink::DEFAULT_LOG_FILE;

pub const ENV_LOG_FILE: &str = "CTRLHANDLERDEMO_LOG_FILE";
pub const ENV_CLEANUP_DELAY_MS: &str = "CTRLHANDLERDEMO_CLEANUP_DELAY_MS";
pub const ENV_STOP_COMMAND: &str = "CTRLHANDLERDEMO_STOP_COMMAND";
pub const ENV_HOST_DEFAULT: &str = "CTRLHANDLERDEMO_HOST_DEFAULT";

/// Default pause simulating cleanup work.
pub const DEFAULT_CLEANUP_DELAY: Duration = Duration::from_millis(10_000);

/// Upper bound accepted for the cleanup delay.
pub const MAX_CLEANUP_DELAY_MS: u64 = 600_000;

/// Default command that stops the program from the control channel.
pub const DEFAULT_STOP_COMMAND: &str = "stop";

/// What happens after the control handler declines an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostDefaultMode {
    /// Terminate the process immediately, like the console host does.
    #[default]
    Terminate,
    /// Leave termination to the host; only the handler's log line remains.
    Passive,
}

impl HostDefaultMode {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "terminate" => Some(Self::Terminate),
            "passive" => Some(Self::Passive),
            _ => None,
        }
    }
}

/// Runtime configuration for the demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Log file path, relative to the working directory unless absolute.
    pub log_path: PathBuf,
    /// How long the terminating sequence pauses.
    pub cleanup_delay: Duration,
    /// Command text that triggers shutdown, compared case-sensitively.
    pub stop_command: String,
    /// Host behavior after the handler returns "not handled".
    pub host_default: HostDefaultMode,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl DemoConfig {
    pub fn with_defaults() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            cleanup_delay: DEFAULT_CLEANUP_DELAY,
            stop_command: DEFAULT_STOP_COMMAND.to_string(),
            host_default: HostDefaultMode::default(),
        }
    }

    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::with_defaults();

        if let Some(path) = value(ENV_LOG_FILE) {
            config.log_path = PathBuf::from(path);
        }

        if let Some(raw) = value(ENV_CLEANUP_DELAY_MS) {
            let ms: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidDelay {
                var: ENV_CLEANUP_DELAY_MS,
                value: raw.clone(),
            })?;
            if ms > MAX_CLEANUP_DELAY_MS {
                return Err(ConfigError::DelayTooLong {
                    var: ENV_CLEANUP_DELAY_MS,
                    value: ms,
                    max: MAX_CLEANUP_DELAY_MS,
                });
            }
            config.cleanup_delay = Duration::from_millis(ms);
        }

        if let Some(command) = value(ENV_STOP_COMMAND) {
            if command.contains(['\n', '\r']) {
                return Err(ConfigError::MultilineStopCommand {
                    var: ENV_STOP_COMMAND,
                });
            }
            config.stop_command = command;
        }

        if let Some(raw) = value(ENV_HOST_DEFAULT) {
            config.host_default =
                HostDefaultMode::parse(&raw).ok_or(ConfigError::InvalidHostDefault {
                    var: ENV_HOST_DEFAULT,
                    value: raw,
                })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = DemoConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DemoConfig::with_defaults());
        assert_eq!(config.log_path, PathBuf::from("ctrlhandlerdemo.log"));
        assert_eq!(config.cleanup_delay, Duration::from_secs(10));
        assert_eq!(config.stop_command, "stop");
        assert_eq!(config.host_default, HostDefaultMode::Terminate);
    }

    #[test]
    fn overrides_are_applied() {
        let config = DemoConfig::from_lookup(lookup(&[
            (ENV_LOG_FILE, "/var/log/demo.log"),
            (ENV_CLEANUP_DELAY_MS, "5000"),
            (ENV_STOP_COMMAND, "halt"),
            (ENV_HOST_DEFAULT, "Passive"),
        ]))
        .unwrap();
        assert_eq!(config.log_path, PathBuf::from("/var/log/demo.log"));
        assert_eq!(config.cleanup_delay, Duration::from_millis(5000));
        assert_eq!(config.stop_command, "halt");
        assert_eq!(config.host_default, HostDefaultMode::Passive);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = DemoConfig::from_lookup(lookup(&[
            (ENV_LOG_FILE, ""),
            (ENV_CLEANUP_DELAY_MS, "  "),
            (ENV_STOP_COMMAND, " "),
        ]))
        .unwrap();
        assert_eq!(config, DemoConfig::with_defaults());
    }

    #[test]
    fn zero_delay_is_allowed() {
        let config = DemoConfig::from_lookup(lookup(&[(ENV_CLEANUP_DELAY_MS, "0")])).unwrap();
        assert_eq!(config.cleanup_delay, Duration::ZERO);
    }

    #[test]
    fn malformed_delay_is_rejected() {
        let err = DemoConfig::from_lookup(lookup(&[(ENV_CLEANUP_DELAY_MS, "10s")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDelay { .. }));

        let err =
            DemoConfig::from_lookup(lookup(&[(ENV_CLEANUP_DELAY_MS, "600001")])).unwrap_err();
        assert!(matches!(err, ConfigError::DelayTooLong { value: 600_001, .. }));
    }

    #[test]
    fn stop_command_with_newline_is_rejected() {
        let err = DemoConfig::from_lookup(lookup(&[(ENV_STOP_COMMAND, "st\nop")])).unwrap_err();
        assert!(matches!(err, ConfigError::MultilineStopCommand { .. }));
    }

    #[test]
    fn stop_command_keeps_case_and_inner_spaces() {
        let config = DemoConfig::from_lookup(lookup(&[(ENV_STOP_COMMAND, "Stop Now")])).unwrap();
        assert_eq!(config.stop_command, "Stop Now");
    }

    #[test]
    fn unknown_host_default_is_rejected() {
        let err = DemoConfig::from_lookup(lookup(&[(ENV_HOST_DEFAULT, "ignore")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidHostDefault {
                var: ENV_HOST_DEFAULT,
                value: "ignore".into()
            }
        );
    }
}

//! Configuration loading from environment variables.
//!
//! All values are read from `GG_SERVE_*` environment variables with sensible
//! defaults. Invalid values fall back to defaults without crashing.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |---|---|---|
//! | `GG_SERVE_MAX_INPUT_TOKENS` | 4096 | Max tokens per segment and per request |
//! | `GG_SERVE_MAX_TEXT_BYTES` | 65536 | Max text segment size (bytes) |
//! | `GG_SERVE_LOG_LEVEL` | info | Tracing filter directive |
//! | `GG_SERVE_LOG_FORMAT` | json | `json` or `pretty` |
//! | `GG_SERVE_LOG_PATH` | unset | JSON log file (stderr if unset) |

use std::path::PathBuf;

use crate::data::{DataLimits, MAX_INPUT_TOKENS, MAX_TEXT_BYTES};
use crate::telemetry::{LogConfig, LogFormat};

/// All configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub limits: DataLimits,
    pub log: LogConfig,
}

/// Parse a `usize` env var, returning `default` on missing or invalid.
fn parse_usize(key: &str, default: usize) -> usize {
    match std::env::var(key) {
        Ok(val) => val.parse::<usize>().unwrap_or(default),
        Err(_) => default,
    }
}

/// Load segment limits from environment.
fn load_limits() -> DataLimits {
    let max_input_tokens = parse_usize("GG_SERVE_MAX_INPUT_TOKENS", MAX_INPUT_TOKENS);
    let max_text_bytes = parse_usize("GG_SERVE_MAX_TEXT_BYTES", MAX_TEXT_BYTES);
    DataLimits {
        max_input_tokens: max_input_tokens.max(1),
        max_text_bytes: max_text_bytes.max(1),
    }
}

/// Load logging configuration from environment.
fn load_log_config() -> LogConfig {
    let defaults = LogConfig::default();
    let level = std::env::var("GG_SERVE_LOG_LEVEL")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(defaults.level);
    let format = std::env::var("GG_SERVE_LOG_FORMAT")
        .ok()
        .and_then(|v| LogFormat::parse(&v))
        .unwrap_or(defaults.format);
    let output_path = std::env::var("GG_SERVE_LOG_PATH")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    LogConfig { format, level, output_path }
}

/// Load all configuration from environment variables.
///
/// Missing or invalid values fall back to safe defaults without panicking.
pub fn load() -> EnvConfig {
    EnvConfig {
        limits: load_limits(),
        log: load_log_config(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serialize env-mutating tests to avoid cross-test pollution.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "GG_SERVE_MAX_INPUT_TOKENS",
        "GG_SERVE_MAX_TEXT_BYTES",
        "GG_SERVE_LOG_LEVEL",
        "GG_SERVE_LOG_FORMAT",
        "GG_SERVE_LOG_PATH",
    ];

    fn clear_env_vars() {
        for k in ENV_KEYS {
            std::env::remove_var(k);
        }
    }

    #[test]
    fn test_defaults_are_sensible() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env_vars();
        let cfg = load();
        assert_eq!(cfg.limits, DataLimits::default());
        assert_eq!(cfg.limits.max_input_tokens, 4096);
        assert_eq!(cfg.limits.max_text_bytes, 65_536);
        assert_eq!(cfg.log.format, LogFormat::Json);
        assert_eq!(cfg.log.level, "info");
        assert!(cfg.log.output_path.is_none());
    }

    #[test]
    fn test_env_vars_override_defaults() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env_vars();
        std::env::set_var("GG_SERVE_MAX_INPUT_TOKENS", "8192");
        std::env::set_var("GG_SERVE_MAX_TEXT_BYTES", "1024");
        std::env::set_var("GG_SERVE_LOG_LEVEL", "gg_serve_data=debug");
        std::env::set_var("GG_SERVE_LOG_FORMAT", "pretty");
        std::env::set_var("GG_SERVE_LOG_PATH", "/tmp/gg-serve.log");
        let cfg = load();
        assert_eq!(cfg.limits.max_input_tokens, 8192);
        assert_eq!(cfg.limits.max_text_bytes, 1024);
        assert_eq!(cfg.log.level, "gg_serve_data=debug");
        assert_eq!(cfg.log.format, LogFormat::Pretty);
        assert_eq!(cfg.log.output_path, Some(PathBuf::from("/tmp/gg-serve.log")));
        clear_env_vars();
    }

    #[test]
    fn test_invalid_env_falls_back_to_default() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env_vars();
        std::env::set_var("GG_SERVE_MAX_INPUT_TOKENS", "not_a_number");
        std::env::set_var("GG_SERVE_MAX_TEXT_BYTES", "-5");
        std::env::set_var("GG_SERVE_LOG_FORMAT", "xml");
        let cfg = load();
        assert_eq!(cfg.limits.max_input_tokens, 4096);
        assert_eq!(cfg.limits.max_text_bytes, 65_536);
        assert_eq!(cfg.log.format, LogFormat::Json);
        clear_env_vars();
    }

    #[test]
    fn test_limits_have_floor() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env_vars();
        std::env::set_var("GG_SERVE_MAX_INPUT_TOKENS", "0");
        std::env::set_var("GG_SERVE_MAX_TEXT_BYTES", "0");
        let cfg = load();
        assert!(cfg.limits.max_input_tokens >= 1, "token limit must have floor");
        assert!(cfg.limits.max_text_bytes >= 1, "text limit must have floor");
        clear_env_vars();
    }
}

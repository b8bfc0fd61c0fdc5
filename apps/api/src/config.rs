use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use chrono::Duration;

/// Application configuration loaded from environment variables.
/// Every variable has a default; a missing asset directory is not an error.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Holds the optional `styles.css` and `job_card.html`.
    pub assets_dir: PathBuf,
    /// How long a session's last result stays downloadable after its last run.
    pub session_ttl: Duration,
    pub max_sessions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            assets_dir: PathBuf::from("assets"),
            session_ttl: Duration::hours(1),
            max_sessions: 10_000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            assets_dir: std::env::var("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.assets_dir),
            session_ttl: parse_ttl("SESSION_TTL_SECS", defaults.session_ttl)?,
            max_sessions: parse_env("MAX_SESSIONS", defaults.max_sessions)?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

/// Whole seconds, at least one, within `chrono::Duration` range.
fn parse_ttl(key: &str, default: Duration) -> Result<Duration> {
    let secs = match std::env::var(key) {
        Ok(_) => parse_env::<u64>(key, 0)?,
        Err(_) => return Ok(default),
    };
    if secs == 0 {
        bail!("Environment variable '{key}' must be at least 1 second");
    }
    i64::try_from(secs)
        .ok()
        .and_then(Duration::try_seconds)
        .with_context(|| format!("Environment variable '{key}' out of range: {secs}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_default_when_unset() {
        let port: u16 = parse_env("SKILLMAP_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("SKILLMAP_TEST_BAD_PORT", "eighty");
        let err = parse_env::<u16>("SKILLMAP_TEST_BAD_PORT", 8080).unwrap_err();
        assert!(err.to_string().contains("SKILLMAP_TEST_BAD_PORT"));
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("SKILLMAP_TEST_TTL", " 120 ");
        assert_eq!(parse_env::<i64>("SKILLMAP_TEST_TTL", 3600).unwrap(), 120);
    }

    #[test]
    fn test_parse_ttl_default_and_value() {
        let default = Duration::hours(1);
        assert_eq!(parse_ttl("SKILLMAP_TEST_TTL_UNSET", default).unwrap(), default);

        std::env::set_var("SKILLMAP_TEST_TTL_SET", "90");
        assert_eq!(
            parse_ttl("SKILLMAP_TEST_TTL_SET", default).unwrap(),
            Duration::seconds(90)
        );
    }

    #[test]
    fn test_parse_ttl_rejects_zero() {
        std::env::set_var("SKILLMAP_TEST_TTL_ZERO", "0");
        let err = parse_ttl("SKILLMAP_TEST_TTL_ZERO", Duration::hours(1)).unwrap_err();
        assert!(err.to_string().contains("at least 1 second"), "{err}");
    }

    #[test]
    fn test_parse_ttl_rejects_negative() {
        std::env::set_var("SKILLMAP_TEST_TTL_NEGATIVE", "-1");
        let err = parse_ttl("SKILLMAP_TEST_TTL_NEGATIVE", Duration::hours(1)).unwrap_err();
        assert!(err.to_string().contains("SKILLMAP_TEST_TTL_NEGATIVE"), "{err}");
    }

    #[test]
    fn test_parse_ttl_rejects_overflow() {
        for raw in ["9223372036854775807", "18446744073709551615"] {
            std::env::set_var("SKILLMAP_TEST_TTL_HUGE", raw);
            let err = parse_ttl("SKILLMAP_TEST_TTL_HUGE", Duration::hours(1)).unwrap_err();
            assert!(err.to_string().contains("out of range"), "{raw}: {err}");
        }
    }
}

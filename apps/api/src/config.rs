use std::str::FromStr;

use anyhow::{Context, Result};

use crate::seating::models::SeatingOptions;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Defaults applied to every request before its own overrides.
    pub seating: SeatingOptions,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = SeatingOptions::default();
        Ok(Config {
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            seating: SeatingOptions {
                organization_column: env_or(
                    "SEATING_ORGANIZATION_COLUMN",
                    defaults.organization_column,
                )?,
                name_column: env_or("SEATING_NAME_COLUMN", defaults.name_column)?,
                min_spacing: env_or("SEATING_MIN_SPACING", defaults.min_spacing)?,
                randomize_order: env_or("SEATING_RANDOMIZE_ORDER", defaults.randomize_order)?,
                has_header_row: env_or("SEATING_HAS_HEADER_ROW", defaults.has_header_row)?,
                preserve_other_columns: env_or(
                    "SEATING_PRESERVE_OTHER_COLUMNS",
                    defaults.preserve_other_columns,
                )?,
                shuffle_seed: None,
            },
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_uses_default_when_unset() {
        let port: u16 = env_or("SEATING_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_env_or_parses_value() {
        std::env::set_var("SEATING_TEST_MIN_SPACING", " 3 ");
        let spacing: usize = env_or("SEATING_TEST_MIN_SPACING", 2).unwrap();
        assert_eq!(spacing, 3);
    }

    #[test]
    fn test_env_or_rejects_malformed_value() {
        std::env::set_var("SEATING_TEST_RANDOMIZE", "sometimes");
        assert!(env_or("SEATING_TEST_RANDOMIZE", false).is_err());
    }
}

use core::fmt::{Debug, Display};

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct Config {
    pub database_url: String,
    /// Override for the number of tasting tables. Usually unset; the
    /// authoritative value lives in the settings collection of the store.
    #[serde(default)]
    pub table_count: Option<u32>,
}

#[derive(thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Figment(#[from] figment::Error),
}

impl Debug for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

pub fn get_config() -> Result<Config, ConfigError> {
    Ok(Figment::new()
        .merge(Toml::file("catas.toml"))
        .merge(Env::prefixed("CATAS_"))
        .extract()?)
}

#[cfg(test)]
mod tests {
    use super::get_config;

    #[test]
    fn reads_from_toml_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "catas.toml",
                r#"
                database_url = "postgres://localhost/catas"
                "#,
            )?;
            let config = get_config().expect("config should parse");
            assert_eq!(config.database_url, "postgres://localhost/catas");
            assert_eq!(config.table_count, None);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "catas.toml",
                r#"
                database_url = "postgres://localhost/catas"
                table_count = 5
                "#,
            )?;
            jail.set_env("CATAS_TABLE_COUNT", "8");
            let config = get_config().expect("config should parse");
            assert_eq!(config.table_count, Some(8));
            Ok(())
        });
    }

    #[test]
    fn missing_database_url_is_an_error() {
        figment::Jail::expect_with(|_jail| {
            assert!(get_config().is_err());
            Ok(())
        });
    }
}

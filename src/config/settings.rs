//! Settings read from the environment, with local-development fallbacks.

use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatabaseSettings {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    /// `DATABASE_URL`; replaces the individual parts when set.
    pub url: Option<String>,
    pub max_connections: u32,
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        match &self.url {
            Some(url) => PgConnectOptions::from_str(url).map_err(|e| ConfigError::Setting {
                name: "DATABASE_URL",
                reason: e.to_string(),
            }),
            None => Ok(PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .username(&self.user)
                .password(&self.password)
                .database(&self.name)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub bind_addr: SocketAddr,
    /// Create the database and tables on startup.
    pub create_schema: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let database = DatabaseSettings {
            user: var("POSTGRES_USER", "postgres"),
            password: var("POSTGRES_PASSWORD", "postgres"),
            host: var("POSTGRES_HOST", "localhost"),
            port: parse("POSTGRES_PORT", &var("POSTGRES_PORT", "5432"))?,
            name: var("POSTGRES_DB", "northwind"),
            url: lookup("DATABASE_URL").filter(|u| !u.trim().is_empty()),
            max_connections: parse(
                "DATABASE_MAX_CONNECTIONS",
                &var("DATABASE_MAX_CONNECTIONS", "5"),
            )?,
        };
        Ok(Settings {
            database,
            bind_addr: parse("NORTHWIND_BIND", &var("NORTHWIND_BIND", "0.0.0.0:8000"))?,
            create_schema: parse_flag(
                "NORTHWIND_CREATE_SCHEMA",
                &var("NORTHWIND_CREATE_SCHEMA", "true"),
            )?,
        })
    }
}

fn parse<T>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Setting {
        name,
        reason: format!("{:?}: {}", raw, e),
    })
}

fn parse_flag(name: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Setting {
            name,
            reason: format!("expected a boolean, got {:?}", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.database.user, "postgres");
        assert_eq!(s.database.password, "postgres");
        assert_eq!(s.database.host, "localhost");
        assert_eq!(s.database.port, 5432);
        assert_eq!(s.database.name, "northwind");
        assert_eq!(s.database.url, None);
        assert_eq!(s.database.max_connections, 5);
        assert_eq!(s.bind_addr, "0.0.0.0:8000".parse().unwrap());
        assert!(s.create_schema);
    }

    #[test]
    fn overrides() {
        let s = settings(&[
            ("POSTGRES_PORT", "6543"),
            ("POSTGRES_DB", "test_db"),
            ("NORTHWIND_BIND", "127.0.0.1:9000"),
            ("NORTHWIND_CREATE_SCHEMA", "off"),
        ])
        .unwrap();
        assert_eq!(s.database.port, 6543);
        assert_eq!(s.database.name, "test_db");
        assert_eq!(s.bind_addr.port(), 9000);
        assert!(!s.create_schema);
    }

    #[test]
    fn connect_options_from_parts() {
        let s = settings(&[("POSTGRES_HOST", "db"), ("POSTGRES_DB", "nw")]).unwrap();
        let opts = s.database.connect_options().unwrap();
        assert_eq!(opts.get_host(), "db");
        assert_eq!(opts.get_port(), 5432);
        assert_eq!(opts.get_database(), Some("nw"));
        assert_eq!(opts.get_username(), "postgres");
    }

    #[test]
    fn database_url_wins() {
        let s = settings(&[("DATABASE_URL", "postgres://app@dbhost:7777/other")]).unwrap();
        let opts = s.database.connect_options().unwrap();
        assert_eq!(opts.get_host(), "dbhost");
        assert_eq!(opts.get_port(), 7777);
        assert_eq!(opts.get_database(), Some("other"));
    }

    #[test]
    fn bad_numbers_are_errors() {
        match settings(&[("POSTGRES_PORT", "abc")]) {
            Err(ConfigError::Setting { name, .. }) => assert_eq!(name, "POSTGRES_PORT"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(settings(&[("DATABASE_MAX_CONNECTIONS", "-2")]).is_err());
        assert!(settings(&[("NORTHWIND_CREATE_SCHEMA", "maybe")]).is_err());
    }
}

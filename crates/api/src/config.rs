use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;
use sqlx::postgres::PgConnectOptions;

use crate::auth::jwt::JwtConfig;
use crate::auth::password::{validate_password_strength, MIN_PASSWORD_LENGTH};

/// Error raised when an environment variable is missing or malformed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long to wait for background tasks after the server stops (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Directory uploaded files are written to and served from.
    pub upload_dir: PathBuf,
    pub database: DatabaseConfig,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Initial admin account, created at startup when no admin exists.
    pub admin: Option<AdminCredentials>,
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connect_options: PgConnectOptions,
    pub max_connections: u32,
}

/// Username and plaintext password of the bootstrap admin account.
#[derive(Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                 | Default                  |
    /// |-------------------------|--------------------------|
    /// | `HOST`                  | `0.0.0.0`                |
    /// | `PORT`                  | `3000`                   |
    /// | `CORS_ORIGINS`          | `http://localhost:9002`  |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                     |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                     |
    /// | `UPLOAD_DIR`            | `public/uploads`         |
    ///
    /// Database, JWT and admin variables are documented on
    /// [`DatabaseConfig::from_lookup`], [`JwtConfig::from_lookup`] and
    /// [`AdminCredentials::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 3000u16)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:9002".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        for origin in &cors_origins {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
                var: "CORS_ORIGINS",
                value: origin.clone(),
                reason: e.to_string(),
            })?;
        }

        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;
        let shutdown_timeout_secs = parse_or(&lookup, "SHUTDOWN_TIMEOUT_SECS", 30u64)?;
        let upload_dir = PathBuf::from(
            lookup("UPLOAD_DIR").unwrap_or_else(|| "public/uploads".into()),
        );

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            upload_dir,
            database: DatabaseConfig::from_lookup(&lookup)?,
            jwt: JwtConfig::from_lookup(&lookup)?,
            admin: AdminCredentials::from_lookup(&lookup)?,
        })
    }
}

impl DatabaseConfig {
    /// | Env Var              | Default     |
    /// |----------------------|-------------|
    /// | `DATABASE_URL`       | (see below) |
    /// | `DB_HOST`            | `localhost` |
    /// | `DB_PORT`            | `5432`      |
    /// | `DB_USER`            | `postgres`  |
    /// | `DB_PASSWORD`        | (empty)     |
    /// | `DB_NAME`            | `medsite`   |
    /// | `DB_MAX_CONNECTIONS` | `10`        |
    ///
    /// `DATABASE_URL` wins when set; otherwise the connection is built from
    /// the `DB_*` parts, which are passed through verbatim (no URL escaping
    /// needed).
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let connect_options = match lookup("DATABASE_URL").filter(|u| !u.is_empty()) {
            Some(url) => PgConnectOptions::from_str(&url).map_err(|e| ConfigError::Invalid {
                var: "DATABASE_URL",
                value: "<redacted>".into(),
                reason: e.to_string(),
            })?,
            None => {
                let host = lookup("DB_HOST").unwrap_or_else(|| "localhost".into());
                let port = parse_or(lookup, "DB_PORT", 5432u16)?;
                let user = lookup("DB_USER").unwrap_or_else(|| "postgres".into());
                let name = lookup("DB_NAME").unwrap_or_else(|| "medsite".into());
                let options = PgConnectOptions::new()
                    .host(&host)
                    .port(port)
                    .username(&user)
                    .database(&name);
                match lookup("DB_PASSWORD").filter(|p| !p.is_empty()) {
                    Some(password) => options.password(&password),
                    None => options,
                }
            }
        };

        let max_connections = parse_or(
            lookup,
            "DB_MAX_CONNECTIONS",
            medsite_db::DEFAULT_MAX_CONNECTIONS,
        )?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS",
                value: "0".into(),
                reason: "must be at least 1".into(),
            });
        }

        Ok(Self {
            connect_options,
            max_connections,
        })
    }
}

impl AdminCredentials {
    /// `ADMIN_USERNAME` and `ADMIN_PASSWORD`. Both or neither must be set;
    /// the password must be at least [`MIN_PASSWORD_LENGTH`] characters.
    pub fn from_lookup<F>(lookup: &F) -> Result<Option<Self>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username = lookup("ADMIN_USERNAME").filter(|v| !v.trim().is_empty());
        let password = lookup("ADMIN_PASSWORD").filter(|v| !v.is_empty());

        match (username, password) {
            (None, None) => Ok(None),
            (Some(_), None) => Err(ConfigError::Missing("ADMIN_PASSWORD")),
            (None, Some(_)) => Err(ConfigError::Missing("ADMIN_USERNAME")),
            (Some(username), Some(password)) => {
                validate_password_strength(&password, MIN_PASSWORD_LENGTH).map_err(|reason| {
                    ConfigError::Invalid {
                        var: "ADMIN_PASSWORD",
                        value: "<redacted>".into(),
                        reason,
                    }
                })?;
                Ok(Some(Self {
                    username: username.trim().to_string(),
                    password,
                }))
            }
        }
    }
}

/// Parse `var` if set, otherwise return `default`.
pub(crate) fn parse_or<T, F>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_secret_is_set() {
        let config = ServerConfig::from_lookup(lookup_from(&[("JWT_SECRET", "s3cret")])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.upload_dir, PathBuf::from("public/uploads"));
        assert_eq!(config.database.connect_options.get_host(), "localhost");
        assert_eq!(config.database.connect_options.get_database(), Some("medsite"));
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.jwt.access_token_expiry_mins, 15);
        assert!(config.admin.is_none());
    }

    #[test]
    fn missing_secret_is_an_error() {
        assert_matches!(
            ServerConfig::from_lookup(lookup_from(&[])),
            Err(ConfigError::Missing("JWT_SECRET"))
        );
    }

    #[test]
    fn bad_port_names_the_variable() {
        let result =
            ServerConfig::from_lookup(lookup_from(&[("JWT_SECRET", "x"), ("PORT", "eighty")]));
        assert_matches!(result, Err(ConfigError::Invalid { var: "PORT", .. }));
    }

    #[test]
    fn database_connection_built_from_parts() {
        let db = DatabaseConfig::from_lookup(&lookup_from(&[
            ("DB_HOST", "db.internal"),
            ("DB_USER", "site"),
            ("DB_PASSWORD", "pw"),
            ("DB_NAME", "hospital"),
            ("DB_MAX_CONNECTIONS", "4"),
        ]))
        .unwrap();
        let options = &db.connect_options;
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_username(), "site");
        assert_eq!(options.get_database(), Some("hospital"));
        assert_eq!(db.max_connections, 4);
    }

    #[test]
    fn password_with_url_delimiters_keeps_host() {
        let db = DatabaseConfig::from_lookup(&lookup_from(&[
            ("DB_HOST", "localhost"),
            ("DB_USER", "postgres"),
            ("DB_PASSWORD", "p@ss/w#rd:1"),
        ]))
        .unwrap();
        let options = &db.connect_options;
        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_username(), "postgres");
        assert_eq!(options.get_database(), Some("medsite"));
    }

    #[test]
    fn database_url_wins_over_parts() {
        let db = DatabaseConfig::from_lookup(&lookup_from(&[
            ("DATABASE_URL", "postgres://a@b:6543/c"),
            ("DB_HOST", "ignored"),
        ]))
        .unwrap();
        assert_eq!(db.connect_options.get_host(), "b");
        assert_eq!(db.connect_options.get_port(), 6543);
        assert_eq!(db.connect_options.get_database(), Some("c"));
    }

    #[test]
    fn malformed_database_url_is_rejected() {
        let result = DatabaseConfig::from_lookup(&lookup_from(&[("DATABASE_URL", "not a url")]));
        assert_matches!(result, Err(ConfigError::Invalid { var: "DATABASE_URL", .. }));
    }

    #[test]
    fn admin_password_must_be_long_enough() {
        let result = AdminCredentials::from_lookup(&lookup_from(&[
            ("ADMIN_USERNAME", "admin"),
            ("ADMIN_PASSWORD", "short"),
        ]));
        assert_matches!(result, Err(ConfigError::Invalid { var: "ADMIN_PASSWORD", .. }));

        let result = AdminCredentials::from_lookup(&lookup_from(&[("ADMIN_USERNAME", "admin")]));
        assert_matches!(result, Err(ConfigError::Missing("ADMIN_PASSWORD")));
    }

    #[test]
    fn invalid_cors_origin_is_rejected() {
        let result = ServerConfig::from_lookup(lookup_from(&[
            ("JWT_SECRET", "x"),
            ("CORS_ORIGINS", "http://ok.example,bad\norigin"),
        ]));
        assert_matches!(result, Err(ConfigError::Invalid { var: "CORS_ORIGINS", .. }));
    }
}

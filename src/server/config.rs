use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

/// Application configuration loaded from environment variables.
///
/// `main` loads `.env` through `dotenvy` before calling [`Config::from_env`], so values
/// may come from either source.
pub struct Config {
    /// Database connection string (`DATABASE_URL`), e.g. `sqlite://trivia.db?mode=rwc`.
    pub database_url: String,

    /// Host or IP address the server binds to (`HOST`, default `127.0.0.1`).
    pub host: String,
    /// TCP port the server binds to (`PORT`, default `5000`).
    pub port: u16,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// `DATABASE_URL` is required; `HOST` and `PORT` fall back to their defaults when unset.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr(ConfigError::MissingEnvVar))` - `DATABASE_URL` is not set
    /// - `Err(AppError::ConfigErr(ConfigError::InvalidEnvVar))` - `PORT` is not a valid port
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
        })
    }

    /// Address the HTTP listener binds to, resolved by the listener so host names work.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(host: &str) -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            host: host.to_string(),
            port: DEFAULT_PORT,
        }
    }

    #[test]
    fn builds_bind_address_from_host_and_port() {
        assert_eq!(config("0.0.0.0").bind_address(), "0.0.0.0:5000");
        assert_eq!(config("localhost").bind_address(), "localhost:5000");
    }
}

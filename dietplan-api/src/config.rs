use std::env;

use dotenv::dotenv;

/// Raised at startup, before the server binds.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{name} is not a valid port: {value}")]
    InvalidPort { name: &'static str, value: String },
}

type Result<T> = std::result::Result<T, Error>;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_URL: &str = "/static";
const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Prefix under which templates resolve static assets (logo, backgrounds).
    pub static_url: String,
    pub log_config: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup("DIETPLAN_PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| Error::InvalidPort {
                    name: "DIETPLAN_PORT",
                    value: port,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("DIETPLAN_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port,
            static_url: lookup("DIETPLAN_STATIC_URL")
                .unwrap_or_else(|| DEFAULT_STATIC_URL.to_owned()),
            log_config: lookup("DIETPLAN_LOG_CONFIG")
                .unwrap_or_else(|| DEFAULT_LOG_CONFIG.to_owned()),
        })
    }
}

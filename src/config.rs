use std::env;

const DEFAULT_HOLIDAY_API_URL: &str = "https://content.capta.co/Recruitment/WorkingDays.json";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub holiday_api_url: String,
    pub holiday_cache_ttl_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://habil.db?mode=rwc".to_string());

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let holiday_api_url =
            env::var("HOLIDAY_API_URL").unwrap_or_else(|_| DEFAULT_HOLIDAY_API_URL.to_string());

        let holiday_cache_ttl_seconds = env::var("HOLIDAY_CACHE_TTL_SECONDS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidCacheTtl)?;

        Ok(Config {
            database_url,
            server_host,
            server_port,
            holiday_api_url,
            holiday_cache_ttl_seconds,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid holiday cache TTL")]
    InvalidCacheTtl,
}

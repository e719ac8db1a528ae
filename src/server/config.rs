use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_TOKEN_EXPIRY_HOURS: i64 = 720;

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub token_expiry_hours: i64,

    pub app_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let token_expiry_hours = match std::env::var("TOKEN_EXPIRY_HOURS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar("TOKEN_EXPIRY_HOURS".to_string()))?,
            Err(_) => DEFAULT_TOKEN_EXPIRY_HOURS,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            token_expiry_hours,
            app_addr: std::env::var("APP_ADDR").unwrap_or_else(|_| DEFAULT_APP_ADDR.to_string()),
        })
    }
}

use std::env;

use crate::constants::MAX_TOKEN_TTL_SECS;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub database_path: String,
    pub allowed_origins: Vec<String>,
    pub environment: String,
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub jwt_expires_in_secs: i64,
    pub bcrypt_cost: u32,
    pub log_requests: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| "Invalid SERVER_PORT")?;

        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| "./data/finpal.db".to_string());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:8081".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let jwt_secret = env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or("JWT_SECRET must be set for token signing")?;

        let jwt_expires_in_secs =
            parse_duration_secs(&env::var("JWT_EXPIRES_IN").unwrap_or_else(|_| "1h".to_string()))
                .ok_or("Invalid JWT_EXPIRES_IN")?;

        let bcrypt_cost = env::var("BCRYPT_COST")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u32>()
            .ok()
            .filter(|cost| (4..=31).contains(cost))
            .ok_or("Invalid BCRYPT_COST")?;

        let log_requests = env::var("LOG_REQUESTS")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Config {
            server_host,
            server_port,
            database_path,
            allowed_origins,
            environment,
            jwt_secret,
            jwt_expires_in_secs,
            bcrypt_cost,
            log_requests,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Parse a lifetime such as `3600`, `90s`, `15m`, `1h` or `7d` into seconds.
///
/// Zero, negative and longer-than-a-year lifetimes are rejected.
pub fn parse_duration_secs(value: &str) -> Option<i64> {
    let value = value.trim();
    let (digits, multiplier) = match value.chars().last()? {
        's' => (&value[..value.len() - 1], 1),
        'm' => (&value[..value.len() - 1], 60),
        'h' => (&value[..value.len() - 1], 3_600),
        'd' => (&value[..value.len() - 1], 86_400),
        _ => (value, 1),
    };

    let amount: i64 = digits.trim().parse().ok()?;
    if amount <= 0 {
        return None;
    }

    amount
        .checked_mul(multiplier)
        .filter(|secs| *secs <= MAX_TOKEN_TTL_SECS)
}

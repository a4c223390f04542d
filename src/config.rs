use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub relay_url: String,
    pub max_body_size: usize,
    pub submission_rate_limit: u32,
    pub submission_rate_window_secs: u64,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("MEDICOD_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid MEDICOD_HOST: {e}"))?;

        let port: u16 = env_or("MEDICOD_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid MEDICOD_PORT: {e}"))?;

        let relay_url = env_or("MEDICOD_RELAY_URL", "https://formspree.io/f/xdkdlqkn");

        let max_body_size: usize = env_or("MEDICOD_MAX_BODY_SIZE", "65536")
            .parse()
            .map_err(|e| format!("Invalid MEDICOD_MAX_BODY_SIZE: {e}"))?;

        let submission_rate_limit: u32 = env_or("MEDICOD_SUBMISSION_RATE_LIMIT", "10")
            .parse()
            .map_err(|e| format!("Invalid MEDICOD_SUBMISSION_RATE_LIMIT: {e}"))?;

        let submission_rate_window_secs: u64 = env_or("MEDICOD_SUBMISSION_RATE_WINDOW_SECS", "60")
            .parse()
            .map_err(|e| format!("Invalid MEDICOD_SUBMISSION_RATE_WINDOW_SECS: {e}"))?;

        let log_level = env_or("MEDICOD_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            relay_url,
            max_body_size,
            submission_rate_limit,
            submission_rate_window_secs,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

use anyhow::{bail, Context, Result};
use std::env;

const DEV_JWT_SECRET: &str = "dev-secret-change-in-production";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub log_level: String,
    pub jwt_secret: String,
    pub jwt_expires_in: chrono::Duration,
    pub scope_goal_listing: bool,
    pub seed_demo_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(port) => port.parse().context("PORT must be a port number")?,
            None => 3000,
        };
        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let jwt_secret = match lookup("JWT_SECRET") {
            Some(secret) if !secret.trim().is_empty() => secret,
            _ if is_production(&environment) => {
                bail!("JWT_SECRET must be set in production")
            }
            _ => DEV_JWT_SECRET.to_string(),
        };

        let expires_in_secs: i64 = match lookup("JWT_EXPIRES_IN") {
            Some(secs) => secs.parse().context("JWT_EXPIRES_IN must be a number of seconds")?,
            None => 3600,
        };
        if expires_in_secs <= 0 {
            bail!("JWT_EXPIRES_IN must be positive");
        }

        Ok(AppConfig {
            host,
            port,
            environment,
            log_level,
            jwt_secret,
            jwt_expires_in: chrono::Duration::seconds(expires_in_secs),
            scope_goal_listing: flag(lookup("SCOPE_GOAL_LISTING")),
            seed_demo_data: flag(lookup("SEED_DEMO_DATA")),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn is_production(environment: &str) -> bool {
    environment.eq_ignore_ascii_case("production")
}

fn flag(value: Option<String>) -> bool {
    matches!(
        value.as_deref().map(str::trim),
        Some("1") | Some("true") | Some("TRUE") | Some("yes")
    )
}

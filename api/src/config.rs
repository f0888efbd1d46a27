use std::env;
use std::path::PathBuf;

use crate::app::pricing_config::{DEFAULT_HORIZON_MONTHS, DEFAULT_YEARLY_RATE};

/// Per-IP limit applied to the listing routes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RateLimit {
    pub per_second: u64,
    pub burst_size: u32,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// JSON regression model artifact; a missing file is a valid state
    pub model_path: PathBuf,
    /// Append-only JSON file holding published listings
    pub listings_path: PathBuf,
    /// Yearly depreciation rate used when a request doesn't supply one
    pub default_yearly_rate: f64,
    /// Horizon used when a future-price request doesn't supply one
    pub default_horizon_months: i32,
    /// `None` disables rate limiting
    pub rate_limit: Option<RateLimit>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let per_second = parse_var("RATE_LIMIT_PER_SECOND", 2u64);
        let burst_size = parse_var("RATE_LIMIT_BURST", 5u32);

        Self {
            port: parse_var("PORT", 8080),
            model_path: env::var("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("model/model.json")),
            listings_path: env::var("LISTINGS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/listings.json")),
            default_yearly_rate: parse_var("DEPRECIATION_RATE", DEFAULT_YEARLY_RATE),
            default_horizon_months: parse_var("DEFAULT_HORIZON_MONTHS", DEFAULT_HORIZON_MONTHS),
            rate_limit: (per_second > 0 && burst_size > 0).then_some(RateLimit {
                per_second,
                burst_size,
            }),
        }
    }

    /// Check if rate limiting is configured
    pub fn rate_limit_enabled(&self) -> bool {
        self.rate_limit.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            model_path: PathBuf::from("model/model.json"),
            listings_path: PathBuf::from("data/listings.json"),
            default_yearly_rate: DEFAULT_YEARLY_RATE,
            default_horizon_months: DEFAULT_HORIZON_MONTHS,
            rate_limit: None,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring unparsable environment variable");
            default
        }),
        Err(_) => default,
    }
}

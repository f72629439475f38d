use std::env;

use crate::services::activity::DEFAULT_WEIGHT_KG;

/// Default daily intake goal in kcal.
pub const DEFAULT_DAILY_GOAL: i64 = 1800;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub daily_goal: i64,
    pub user_weight_kg: f64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://health.db".into()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".into())
                .parse()?,
            daily_goal: parse_or("DAILY_GOAL", DEFAULT_DAILY_GOAL)?,
            user_weight_kg: parse_weight(env::var("USER_WEIGHT_KG").ok())?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite::memory:".into(),
            host: "127.0.0.1".into(),
            port: 5000,
            daily_goal: DEFAULT_DAILY_GOAL,
            user_weight_kg: DEFAULT_WEIGHT_KG,
        }
    }
}

fn parse_or(key: &str, default: i64) -> anyhow::Result<i64> {
    match env::var(key).ok().filter(|s| !s.trim().is_empty()) {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid integer for {}: {}", key, v)),
        None => Ok(default),
    }
}

fn parse_weight(raw: Option<String>) -> anyhow::Result<f64> {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return Ok(DEFAULT_WEIGHT_KG);
    };
    let kg: f64 = raw
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid number for USER_WEIGHT_KG: {}", raw))?;
    anyhow::ensure!(
        kg.is_finite() && kg > 0.0,
        "USER_WEIGHT_KG must be a positive number, got {}",
        raw
    );
    Ok(kg)
}

use crate::errors::{PricingError, PricingResult};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub forward: f64,
    pub sigma: f64,
    pub ttl_years: f64,
    pub strikes: Vec<f64>,
}

impl AppConfig {
    pub fn from_env() -> PricingResult<Self> {
        dotenvy::dotenv().ok();

        let forward = parse_f64("FORWARD", &env_var_or("FORWARD", "100"))?;
        let sigma = parse_f64("SIGMA", &env_var_or("SIGMA", "0.2"))?;
        let ttl_years = parse_f64("TTL_YEARS", &env_var_or("TTL_YEARS", "1"))?;
        let strikes = parse_strikes(&env_var_or("STRIKES", "80,90,100,110,120"))?;

        Ok(Self { forward, sigma, ttl_years, strikes })
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_f64(key: &str, raw: &str) -> PricingResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| PricingError::Config(format!("{key}: {e}")))
}

/// Comma-separated strike list; blank entries are skipped.
fn parse_strikes(raw: &str) -> PricingResult<Vec<f64>> {
    let strikes = raw
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| parse_f64("STRIKES", s))
        .collect::<PricingResult<Vec<f64>>>()?;

    if strikes.is_empty() {
        return Err(PricingError::Config("STRIKES: no strikes given".to_string()));
    }
    Ok(strikes)
}

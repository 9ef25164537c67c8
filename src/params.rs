use crate::errors::{PricingError, PricingResult};

// ── Validated market inputs ──

/// Forward, volatility, strike and time to expiry for a single option.
/// Stack-allocated, Copy. Every field is strictly positive and finite;
/// the only way to build one is `MarketInputs::new`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct MarketInputs {
    forward: f64,
    sigma: f64,
    strike: f64,
    ttl_years: f64,
}

impl MarketInputs {
    pub fn new(forward: f64, sigma: f64, strike: f64, ttl_years: f64) -> PricingResult<Self> {
        check_positive("forward", forward)?;
        check_positive("sigma", sigma)?;
        check_positive("strike", strike)?;
        check_positive("ttl_years", ttl_years)?;
        Ok(Self { forward, sigma, strike, ttl_years })
    }

    #[inline]
    pub fn forward(&self) -> f64 {
        self.forward
    }

    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    #[inline]
    pub fn ttl_years(&self) -> f64 {
        self.ttl_years
    }

    /// Total volatility s = sigma * sqrt(t).
    #[inline]
    pub fn sigma_sqrt_t(&self) -> f64 {
        self.sigma * self.ttl_years.sqrt()
    }

    /// Same market, different strike.
    pub fn with_strike(&self, strike: f64) -> PricingResult<Self> {
        Self::new(self.forward, self.sigma, strike, self.ttl_years)
    }
}

// NaN fails `> 0.0` as well, so it is rejected here too.
fn check_positive(name: &'static str, value: f64) -> PricingResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        tracing::debug!(name, value, "rejected market input");
        Err(PricingError::InvalidInput { name, value })
    }
}

// ── Output record ──

#[derive(Debug, Clone, serde::Serialize)]
pub struct Quote {
    pub model: &'static str,
    pub forward: f64,
    pub sigma: f64,
    pub strike: f64,
    pub ttl_years: f64,
    pub put: f64,
    pub call: f64,
}

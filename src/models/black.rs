use crate::models::PricingModel;
use crate::params::MarketInputs;
use statrs::distribution::{ContinuousCDF, Normal};

/// Black (log-normal forward) European option pricing.
///
/// P = K * Phi(-d2) - F * Phi(-d1)
///
/// where d1 = (ln(F/K) + s^2/2) / s, d2 = d1 - s and s = sigma * sqrt(T).
/// Undiscounted, so it compares directly against the Gamma proxy.
pub struct Black {
    /// Standard normal distribution (created once, reused)
    normal: Normal,
}

impl Black {
    pub fn new() -> Self {
        Self { normal: Normal::standard() }
    }
}

impl Default for Black {
    fn default() -> Self {
        Self::new()
    }
}

impl PricingModel for Black {
    #[inline]
    fn name(&self) -> &'static str {
        "Black"
    }

    fn put(&self, inputs: &MarketInputs) -> f64 {
        let f = inputs.forward();
        let k = inputs.strike();
        let s = inputs.sigma_sqrt_t();

        // Guard: total variance underflowed, return intrinsic value
        if s <= 0.0 {
            return (k - f).max(0.0);
        }

        let d1 = ((f / k).ln() + 0.5 * s * s) / s;
        let d2 = d1 - s;

        k * self.normal.cdf(-d2) - f * self.normal.cdf(-d1)
    }
}

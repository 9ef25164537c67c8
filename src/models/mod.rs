pub mod black;
pub mod gamma;

use crate::params::{MarketInputs, Quote};

/// All option pricing models implement this trait.
/// Methods are pure functions of already-validated inputs, so they cannot fail.
/// Send + Sync so a model can be shared across threads.
pub trait PricingModel: Send + Sync {
    fn name(&self) -> &'static str;

    /// Undiscounted European put value E[(K - F_T)^+].
    fn put(&self, inputs: &MarketInputs) -> f64;

    /// Undiscounted European call value from forward put-call parity:
    /// C - P = E[F_T] - K = f - K for any model with mean f.
    #[inline]
    fn call(&self, inputs: &MarketInputs) -> f64 {
        self.put(inputs) + inputs.forward() - inputs.strike()
    }

    fn quote(&self, inputs: &MarketInputs) -> Quote {
        Quote {
            model: self.name(),
            forward: inputs.forward(),
            sigma: inputs.sigma(),
            strike: inputs.strike(),
            ttl_years: inputs.ttl_years(),
            put: self.put(inputs),
            call: self.call(inputs),
        }
    }
}

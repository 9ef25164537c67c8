use crate::errors::PricingResult;
use crate::models::PricingModel;
use crate::params::MarketInputs;
use crate::special::gamma_lr;
use statrs::function::gamma::gamma;

/// Gamma density g(x) = x^(a-1) exp(-b x) b^a / Gamma(a), shape a, rate b.
///
/// No validation: x <= 0 or non-positive parameters give whatever
/// `powf`/`exp` produce (0, NaN or inf).
#[inline]
pub fn pdf(x: f64, a: f64, b: f64) -> f64 {
    x.powf(a - 1.0) * (-b * x).exp() * b.powf(a) / gamma(a)
}

/// Gamma distribution function P(X <= x) = P(a, b x), the regularized lower
/// incomplete gamma function at the rescaled argument.
///
/// 0 for x <= 0 and 1 for x = +inf. Never panics: a shape outside (0, inf)
/// yields NaN.
#[inline]
pub fn cdf(x: f64, a: f64, b: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    gamma_lr(a, b * x)
}

/// Moment-matched Gamma parameters for total volatility s = sigma * sqrt(t).
///
/// The Black forward is F = f exp(s Z - s^2/2), with mean f and variance
/// f^2 (exp(s^2) - 1). Writing F = f G with G ~ Gamma(a, b), G needs mean 1
/// and variance exp(s^2) - 1:
///
///   a / b   = 1
///   a / b^2 = exp(s^2) - 1
///
/// so a = b = 1 / (exp(s^2) - 1). Even in s. Returns +inf once s^2 underflows.
#[inline]
pub fn convert(s: f64) -> (f64, f64) {
    let b = 1.0 / (s * s).exp_m1();
    (b, b)
}

/// Undiscounted European put under the Gamma proxy of the Black model.
///
/// E[(k - F)^+] = k P(F <= k) - E[F 1(F <= k)], and since
/// int_0^y x g(x; a, b) dx = (a/b) P(a + 1, b y) with a/b = 1,
/// E[F 1(F <= k)] = f cdf(k/f, a + 1, b).
///
/// Fails with `InvalidInput` unless f, sigma, k and t are all > 0.
pub fn put(f: f64, sigma: f64, k: f64, t: f64) -> PricingResult<f64> {
    let inputs = MarketInputs::new(f, sigma, k, t)?;
    Ok(GammaBlack.put(&inputs))
}

/// Undiscounted European call via forward put-call parity.
pub fn call(f: f64, sigma: f64, k: f64, t: f64) -> PricingResult<f64> {
    let inputs = MarketInputs::new(f, sigma, k, t)?;
    Ok(GammaBlack.call(&inputs))
}

/// Gamma-proxy Black model. Zero-sized; all state lives in the inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct GammaBlack;

impl GammaBlack {
    pub fn new() -> Self {
        Self
    }
}

impl PricingModel for GammaBlack {
    #[inline]
    fn name(&self) -> &'static str {
        "Gamma-Black"
    }

    fn put(&self, inputs: &MarketInputs) -> f64 {
        let f = inputs.forward();
        let k = inputs.strike();
        let (a, b) = convert(inputs.sigma_sqrt_t());

        // Zero-variance limit: F = f almost surely
        if !a.is_finite() {
            return (k - f).max(0.0);
        }

        let moneyness = k / f;
        let first = k * cdf(moneyness, a, b);
        let expectation = f * cdf(moneyness, a + 1.0, b);

        first - expectation
    }
}

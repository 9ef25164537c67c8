//! Closed-form European option pricing with a Gamma-distributed forward used
//! as a moment-matched proxy for the Black model.

pub mod config;
pub mod errors;
pub mod models;
pub mod params;
pub mod special;

pub use config::AppConfig;
pub use errors::{PricingError, PricingResult};
pub use models::black::Black;
pub use models::gamma::{call, cdf, convert, pdf, put, GammaBlack};
pub use models::PricingModel;
pub use params::{MarketInputs, Quote};

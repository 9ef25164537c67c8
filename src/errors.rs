/// Error types for the pricing library.
/// Only the public entry points validate; the density, distribution and
/// parameter conversion functions let NaN/inf propagate instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    /// Precondition violation: a market input must be strictly positive and finite.
    #[error("invalid input: {name} must be > 0, got {value}")]
    InvalidInput { name: &'static str, value: f64 },

    #[error("config error: {0}")]
    Config(String),

    #[error("serialize error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for PricingError {
    fn from(e: serde_json::Error) -> Self {
        PricingError::Serialize(e.to_string())
    }
}

pub type PricingResult<T> = Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_names_argument() {
        let err = PricingError::InvalidInput { name: "strike", value: -1.0 };
        assert_eq!(err.to_string(), "invalid input: strike must be > 0, got -1");
    }
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AreaError>;

/// Broad classification of an `AreaError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A constructor or selector received arguments it cannot accept.
    InvalidParameter,
    /// A valid object was asked to evaluate outside its domain.
    InvalidInput,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AreaError {
    #[error("invalid exponent {exponent}: only non-negative finite exponents are supported")]
    InvalidExponent { exponent: f64 },
    #[error("invalid step size {step_size}: step size must be positive and finite")]
    InvalidStepSize { step_size: f64 },
    #[error("invalid bounds [{lower} - {upper}]: upper bound must be finite and greater than the lower bound")]
    InvalidBounds { lower: f64, upper: f64 },
    #[error("unknown quadrature rule '{0}' (expected midpoint, trapezoid or simpson)")]
    UnknownRule(String),
    #[error("fractional exponents are not supported for negative inputs (x = {x})")]
    NegativeFractionalInput { x: f64 },
}

impl AreaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AreaError::InvalidExponent { .. }
            | AreaError::InvalidStepSize { .. }
            | AreaError::InvalidBounds { .. }
            | AreaError::UnknownRule(_) => ErrorKind::InvalidParameter,
            AreaError::NegativeFractionalInput { .. } => ErrorKind::InvalidInput,
        }
    }
}

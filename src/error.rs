use thiserror::Error;

pub type ObserverResult<T> = Result<T, ObserverError>;

/// Inputs the integrator refuses to work with. Any of these would otherwise
/// show up as NaN or infinity in the observer state.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ObserverError {
    #[error("orbital radius must be finite and greater than 1, got {0}")]
    InvalidRadius(f64),

    #[error("wall-clock delta must be finite and non-negative, got {0}")]
    InvalidDelta(f64),

    #[error("effective time delta is not finite")]
    NonFinite,
}

// Error type shared by every constructor in the crate.
//
// Angular momenta in messages are the doubled integers the caller passed in,
// so a message can be matched directly against the input.

use thiserror::Error;

/// Errors raised while building states, transitions, coefficients and correlations.
#[derive(Error, Debug)]
pub enum AngCorrError {
    /// Negative angular momentum, or a spin whose integer/half-integer
    /// character differs from the rest of the cascade.
    #[error("invalid spin 2J = {two_j}: {reason}")]
    InvalidSpin { two_j: i32, reason: &'static str },

    #[error("invalid multipolarity (2L = {two_l}, 2L' = {two_lp}): {reason}")]
    InvalidMultipolarity {
        two_l: i32,
        two_lp: i32,
        reason: &'static str,
    },

    #[error("excitation energy must be non-negative, got {0} MeV")]
    InvalidExcitationEnergy(f64),

    #[error("a cascade needs at least two transitions, got {0}")]
    TooShortCascade(usize),

    #[error("transition {step}: no gamma-ray transition between two spin-zero states")]
    SpinZeroSpinZero { step: usize },

    #[error(
        "transition {step}: neither 2L = {two_l} nor 2L' = {two_lp} couples 2J = {two_j_initial} to 2J = {two_j_final}"
    )]
    TriangleViolation {
        step: usize,
        two_j_initial: i32,
        two_j_final: i32,
        two_l: i32,
        two_lp: i32,
    },

    #[error("transition {step}: {reason}")]
    ParityEmInconsistency { step: usize, reason: String },

    #[error("unknown parity has no string representation")]
    UnknownParityStringification,

    #[error("unknown EM character has no string representation")]
    UnknownEmCharacterStringification,

    /// The kappa coefficient contains (nu - 2)!, so nu must be at least 2.
    #[error("kappa coefficient requires nu >= 2, got 2nu = {0}")]
    KappaNuTooSmall(i32),

    #[error("E_nu coefficient requires nu >= 2, got 2nu = {0}")]
    EvNuTooSmall(i32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AngCorrError>;

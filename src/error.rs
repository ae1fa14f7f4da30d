//! Error kinds surfaced by the commitment scheme.
//!
//! Every fallible operation returns [`KzgError`]. A proof that simply does
//! not verify is **not** an error: the verifier reports it as `Ok(false)`.

#![forbid(unsafe_code)]

use ark_serialize::SerializationError;
use thiserror::Error;

/// Errors returned by setup, commitment, proving and verification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KzgError {
    /// An integer supplied from outside is not below the scalar field modulus.
    #[error("value is not a canonical field element (must be below the modulus)")]
    InvalidFieldElement,
    /// The polynomial has more coefficients than the reference string has powers.
    #[error("reference string too short: need {needed} powers, have {available}")]
    InsufficientSetupSize {
        /// Powers required by the operation.
        needed: usize,
        /// Powers available in the reference string.
        available: usize,
    },
    /// Opening `points` points needs strictly more than `points` coefficients.
    #[error("cannot open {points} points of a polynomial with {coefficients} coefficients")]
    DegreeTooLow {
        /// Size of the claimed index set.
        points: usize,
        /// Coefficient count of the committed polynomial.
        coefficients: usize,
    },
    /// Duplicate indices, empty claim set, or indices/values length mismatch.
    #[error("malformed claim: {0}")]
    MalformedClaim(String),
    /// Exact polynomial division left a non-zero remainder.
    #[error("polynomial division left a non-zero remainder")]
    NonDivisiblePolynomial,
    /// A reference string is empty, unbalanced, or its powers are inconsistent.
    #[error("invalid reference string: {0}")]
    InvalidSetup(String),
    /// Canonical (de)serialization failed.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl From<SerializationError> for KzgError {
    fn from(err: SerializationError) -> Self {
        KzgError::Serialization(err.to_string())
    }
}

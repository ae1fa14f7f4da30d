//! KZG polynomial commitments with multi-point openings
//!
//! A polynomial `P` over the scalar field is committed with a single G1
//! element. Any set of evaluations `{(i, P(i))}` can then be proven with a
//! single G2 element and checked with one pairing equation:
//!
//! ```text
//!   C = [P(s)]G1                         commitment
//!   π = [Q(s)]G2,  Q = (P - I) / Z       multi-point proof
//!   e([Z(s)]G1, π) == e(C - [I(s)]G1, G2)
//! ```
//!
//! where `I` interpolates the claimed points and `Z` vanishes exactly on them.
//!
//! ## Layout
//!
//! - [`field`]: hash-to-scalar and validation of externally supplied integers.
//! - [`poly`]: interpolation, vanishing polynomials, exact division, Horner.
//! - [`srs`]: the structured reference string (generation, loading, checks).
//! - [`commitment`]: the generic MSM fold plus `Commitment` / `Proof` types.
//! - [`prover`] / [`verifier`]: handles bound to an injected reference string.
//! - [`config`]: setup parameters with a public, **insecure** default seed.
//!
//! Everything is generic over `E: Pairing`. The free functions at the crate
//! root fix `E = `[`Curve`] (BLS12-381) and use the process-wide
//! [`default_reference_string`], which is built once on first use and never
//! mutated afterwards.
//!
//! ## Security
//!
//! The default reference string is derived from a public seed, so its secret
//! is public. It is fine for tests and demos and unsound for anything else;
//! production callers should load ceremony output with
//! [`ReferenceString::from_powers`] and use [`Prover`] / [`Verifier`] directly.

#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms)]

use std::sync::OnceLock;

use num_bigint::BigUint;

/// Generic MSM fold, `Commitment` and `Proof` newtypes.
pub mod commitment;
/// Reference-string length and seed material.
pub mod config;
/// Error kinds shared by every module.
pub mod error;
/// Hash-to-scalar and integer validation.
pub mod field;
/// Dense univariate polynomial algebra over the scalar field.
pub mod poly;
/// Multi-point proof generation.
pub mod prover;
/// Structured reference string.
pub mod srs;
/// Pairing-based verification of multi-point claims.
pub mod verifier;

pub use commitment::{Commitment, Proof};
pub use config::{SetupConfig, DEFAULT_SETUP_SEED, DEFAULT_SRS_LENGTH};
pub use error::KzgError;
pub use prover::Prover;
pub use srs::ReferenceString;
pub use verifier::Verifier;

/// Pairing used by the crate-level functions.
pub type Curve = ark_bls12_381::Bls12_381;

/// Scalar field of [`Curve`].
pub type F = ark_bls12_381::Fr;

/// Shared, read-only reference string for [`Curve`] built from
/// [`SetupConfig::default`].
pub fn default_reference_string() -> &'static ReferenceString<Curve> {
    static SRS: OnceLock<ReferenceString<Curve>> = OnceLock::new();
    SRS.get_or_init(|| {
        SetupConfig::default()
            .generate()
            .expect("default setup length is non-zero")
    })
}

/// Derive a reference string of `length` powers from `seed` (insecure, see [`srs`]).
pub fn generate_reference_string(
    length: usize,
    seed: &[u8],
) -> Result<ReferenceString<Curve>, KzgError> {
    ReferenceString::generate(length, seed)
}

/// Coefficients of the polynomial taking `values[i]` at `x = i`, over [`F`].
///
/// The modulus is the order of [`F`]: every value must be below it, otherwise
/// [`KzgError::InvalidFieldElement`] is returned. For another scalar field,
/// validate with [`field::scalars_from_biguints`] and interpolate with
/// [`poly::interpolate_coefficients`].
pub fn interpolate_coefficients(values: &[BigUint]) -> Result<Vec<F>, KzgError> {
    let values: Vec<F> = field::scalars_from_biguints(values)?;
    poly::interpolate_coefficients(&values)
}

/// Commit to `coeffs` against the default reference string.
pub fn commit(coeffs: &[F]) -> Result<Commitment<Curve>, KzgError> {
    Prover::new(default_reference_string()).commit(coeffs)
}

/// Prove the evaluations of `coeffs` at every index in `indices`.
pub fn prove(coeffs: &[F], indices: &[u64]) -> Result<Proof<Curve>, KzgError> {
    Prover::new(default_reference_string()).prove(coeffs, indices)
}

/// Prove the evaluation of `coeffs` at `index`.
pub fn prove_single(coeffs: &[F], index: u64) -> Result<Proof<Curve>, KzgError> {
    Prover::new(default_reference_string()).prove_single(coeffs, index)
}

/// Check `values[j] == P(indices[j])` for the polynomial behind `commitment`.
pub fn verify(
    commitment: &Commitment<Curve>,
    proof: &Proof<Curve>,
    indices: &[u64],
    values: &[F],
) -> Result<bool, KzgError> {
    Verifier::new(default_reference_string()).verify(commitment, proof, indices, values)
}

/// Single-point form of [`verify`].
pub fn verify_single(
    commitment: &Commitment<Curve>,
    proof: &Proof<Curve>,
    index: u64,
    value: F,
) -> Result<bool, KzgError> {
    Verifier::new(default_reference_string()).verify_single(commitment, proof, index, value)
}

/// Hash arbitrary bytes to a scalar of [`Curve`].
pub fn encode_bytes_to_scalar(data: &[u8]) -> F {
    field::encode_bytes_to_scalar(data)
}

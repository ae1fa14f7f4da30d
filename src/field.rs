//! Scalar encoding
//!
//! Bridges external data into the scalar field shared by G1 and G2:
//! - arbitrary bytes are hashed to a scalar with a fixed domain separator,
//!   reducing 64 bytes of BLAKE3 XOF output (little-endian) so the result is
//!   statistically close to uniform,
//! - big integers are accepted only when already canonical (`v < p`),
//! - evaluation indices (`u64`) map to the scalars `0, 1, 2, …`.

#![forbid(unsafe_code)]

use ark_ff::PrimeField;
use blake3::Hasher;
use num_bigint::BigUint;

use crate::KzgError;

/// Domain separator for [`encode_bytes_to_scalar`].
const ENCODE_DST: &[u8] = b"KZG-MULTIPROOF.encode-to-scalar.v1";

/// Deterministically hash `data` to a scalar.
///
/// Layout absorbed into BLAKE3:
/// ```text
/// DST || len(data) as u64 BE || data
/// ```
/// followed by 64 bytes of XOF output reduced with `from_le_bytes_mod_order`.
pub fn encode_bytes_to_scalar<F: PrimeField>(data: &[u8]) -> F {
    let mut h = Hasher::new();
    h.update(ENCODE_DST);
    h.update(&(data.len() as u64).to_be_bytes());
    h.update(data);

    let mut buf = [0u8; 64];
    h.finalize_xof().fill(&mut buf);
    F::from_le_bytes_mod_order(&buf)
}

/// Convert a big integer into a scalar, rejecting non-canonical values.
pub fn scalar_from_biguint<F: PrimeField>(value: &BigUint) -> Result<F, KzgError> {
    let modulus: BigUint = F::MODULUS.into();
    if *value >= modulus {
        return Err(KzgError::InvalidFieldElement);
    }
    Ok(F::from(value.clone()))
}

/// Batch version of [`scalar_from_biguint`]; fails on the first bad value.
pub fn scalars_from_biguints<F: PrimeField>(values: &[BigUint]) -> Result<Vec<F>, KzgError> {
    values.iter().map(scalar_from_biguint).collect()
}

/// Map evaluation indices to their field representatives.
pub fn indices_to_scalars<F: PrimeField>(indices: &[u64]) -> Vec<F> {
    indices.iter().map(|&i| F::from(i)).collect()
}

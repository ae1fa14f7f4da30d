//! Commitment engine
//!
//! A polynomial `f(X) = Σ c_i X^i` is committed by folding its coefficients
//! against a prefix of the reference string:
//!
//! ```text
//!   C = Σ c_i · [s^i]G   =   [f(s)]G
//! ```
//!
//! The fold is one generic multi-scalar multiplication over any
//! [`CurveGroup`] (identity, addition, scalar multiplication), instantiated
//! for G1 to build commitments and for G2 to build proofs. Commitments are
//! additively homomorphic, which lets the verifier subtract the commitment of
//! an interpolation polynomial directly from a commitment.

#![forbid(unsafe_code)]

use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use core::ops::{Add, Sub};

use crate::{KzgError, ReferenceString};

/// Commitment to a polynomial: a single G1 element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Commitment<E: Pairing>(pub E::G1Affine);

/// Opening proof: the quotient polynomial committed in G2.
///
/// One proof covers an arbitrary set of evaluation points at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct Proof<E: Pairing>(pub E::G2Affine);

/// Fold `scalars` against the first `scalars.len()` entries of `bases`.
///
/// Fails with [`KzgError::InsufficientSetupSize`] when `bases` is too short.
/// An empty scalar slice folds to the identity.
pub fn fold<G: CurveGroup>(
    bases: &[G::Affine],
    scalars: &[G::ScalarField],
) -> Result<G, KzgError> {
    if scalars.len() > bases.len() {
        return Err(KzgError::InsufficientSetupSize {
            needed: scalars.len(),
            available: bases.len(),
        });
    }
    Ok(G::msm_unchecked(&bases[..scalars.len()], scalars))
}

/// Commit to `coeffs` in G1.
pub fn commit<E: Pairing>(
    coeffs: &[E::ScalarField],
    srs: &ReferenceString<E>,
) -> Result<Commitment<E>, KzgError> {
    let c: E::G1 = fold(&srs.g1_powers, coeffs)?;
    Ok(Commitment(c.into_affine()))
}

/// Commit to `coeffs` in G2 (used for proofs).
pub fn commit_g2<E: Pairing>(
    coeffs: &[E::ScalarField],
    srs: &ReferenceString<E>,
) -> Result<E::G2Affine, KzgError> {
    let c: E::G2 = fold(&srs.g2_powers, coeffs)?;
    Ok(c.into_affine())
}

impl<E: Pairing> Commitment<E> {
    /// Canonical compressed encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, KzgError> {
        let mut bytes = Vec::with_capacity(self.compressed_size());
        self.serialize_compressed(&mut bytes)?;
        Ok(bytes)
    }

    /// Decode a compressed encoding, checking curve and subgroup membership.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KzgError> {
        Ok(Self::deserialize_compressed(bytes)?)
    }
}

impl<E: Pairing> Proof<E> {
    /// Canonical compressed encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, KzgError> {
        let mut bytes = Vec::with_capacity(self.compressed_size());
        self.serialize_compressed(&mut bytes)?;
        Ok(bytes)
    }

    /// Decode a compressed encoding, checking curve and subgroup membership.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KzgError> {
        Ok(Self::deserialize_compressed(bytes)?)
    }
}

impl<E: Pairing> Add for Commitment<E> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Commitment((self.0 + rhs.0).into_affine())
    }
}

impl<E: Pairing> Sub for Commitment<E> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Commitment((self.0.into_group() - rhs.0.into_group()).into_affine())
    }
}

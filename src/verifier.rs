//! Verifier
//!
//! Checks a claimed set of evaluations `{(i, v_i)}` against a commitment `C`
//! and a proof `π` without access to the polynomial or its quotient. From the
//! claim alone it rebuilds
//!
//! ```text
//!   I(X) = interpolate({(i, v_i)}),   Z(X) = ∏ (X - i)
//! ```
//!
//! commits both in G1 and accepts iff
//!
//! ```text
//!   e([Z(s)]G1, π) == e(C - [I(s)]G1, G2)
//! ```
//!
//! evaluated as a single product `e(Z, π) · e(I - C, G2) == 1` with a
//! shared final exponentiation.

#![forbid(unsafe_code)]

use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup};
use ark_ff::One;
use tracing::{debug, instrument};

use crate::{
    commitment::{self, Commitment, Proof},
    field, poly, KzgError, ReferenceString,
};

/// Verifier handle over an injected reference string.
#[derive(Clone, Copy, Debug)]
pub struct Verifier<'a, E: Pairing> {
    /// Public parameters shared with the prover.
    pub srs: &'a ReferenceString<E>,
}

impl<'a, E: Pairing> Verifier<'a, E> {
    /// Bind a verifier to `srs`.
    pub fn new(srs: &'a ReferenceString<E>) -> Self {
        Self { srs }
    }

    /// Verify that the committed polynomial takes `values[j]` at `indices[j]`.
    ///
    /// Returns `Ok(false)` for a proof that does not check out. Errors are
    /// reserved for malformed claims (empty, repeated indices, length
    /// mismatch) and claims larger than the reference string supports.
    #[instrument(
        level = "debug",
        skip_all,
        fields(points = indices.len(), srs_len = self.srs.len())
    )]
    pub fn verify(
        &self,
        commitment: &Commitment<E>,
        proof: &Proof<E>,
        indices: &[u64],
        values: &[E::ScalarField],
    ) -> Result<bool, KzgError> {
        if indices.is_empty() {
            return Err(KzgError::MalformedClaim("no evaluation indices".into()));
        }
        if indices.len() != values.len() {
            return Err(KzgError::MalformedClaim(format!(
                "{} indices but {} values",
                indices.len(),
                values.len()
            )));
        }

        let xs: Vec<E::ScalarField> = field::indices_to_scalars(indices);
        let i_poly = poly::interpolate(&xs, values)?;
        let z_poly = poly::zero_polynomial(&xs);

        let z_commit = commitment::commit(&z_poly.coeffs, self.srs)?;
        let i_commit = commitment::commit(&i_poly.coeffs, self.srs)?;
        let g2 = self.srs.g2_generator()?;

        // e(Z, π) · e(I - C, G2) == 1
        let shifted: E::G1 = i_commit.0.into_group() - commitment.0.into_group();
        let mlo = E::multi_miller_loop([z_commit.0, shifted.into_affine()], [proof.0, g2]);
        let ok = E::final_exponentiation(mlo)
            .map_or(false, |out| out.0.is_one());
        if !ok {
            debug!("pairing check failed");
        }
        Ok(ok)
    }

    /// Verify a single-point claim through the multi-point path.
    pub fn verify_single(
        &self,
        commitment: &Commitment<E>,
        proof: &Proof<E>,
        index: u64,
        value: E::ScalarField,
    ) -> Result<bool, KzgError> {
        self.verify(commitment, proof, &[index], &[value])
    }
}

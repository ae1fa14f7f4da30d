//! Proof generator
//!
//! Opens a committed polynomial `P` at a set of indices `S` with a single
//! group element:
//!
//! ```text
//!   Z(X) = ∏_{i ∈ S} (X - i)          vanishing polynomial of S
//!   I(X) = interpolate(S, P(S))       agrees with P on S
//!   Q(X) = (P(X) - I(X)) / Z(X)       exact, since P - I vanishes on S
//!   π    = [Q(s)]G2
//! ```
//!
//! Single-point openings are the `S = {i}` case of the same path.

#![forbid(unsafe_code)]

use ark_ec::pairing::Pairing;
use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial};
use tracing::instrument;

use crate::{
    commitment::{self, Commitment, Proof},
    field, poly, KzgError, ReferenceString,
};

/// Prover handle over an injected reference string.
#[derive(Clone, Copy, Debug)]
pub struct Prover<'a, E: Pairing> {
    /// Public parameters shared with the verifier.
    pub srs: &'a ReferenceString<E>,
}

impl<'a, E: Pairing> Prover<'a, E> {
    /// Bind a prover to `srs`.
    pub fn new(srs: &'a ReferenceString<E>) -> Self {
        Self { srs }
    }

    /// Commit to a polynomial given by its coefficients (lowest degree first).
    #[instrument(level = "debug", skip_all, fields(coeffs = coeffs.len()))]
    pub fn commit(&self, coeffs: &[E::ScalarField]) -> Result<Commitment<E>, KzgError> {
        commitment::commit(coeffs, self.srs)
    }

    /// Prove the values of the polynomial at every index in `indices`.
    pub fn prove(&self, coeffs: &[E::ScalarField], indices: &[u64]) -> Result<Proof<E>, KzgError> {
        self.open(coeffs, indices).map(|(proof, _)| proof)
    }

    /// Prove the value at a single index.
    pub fn prove_single(
        &self,
        coeffs: &[E::ScalarField],
        index: u64,
    ) -> Result<Proof<E>, KzgError> {
        self.prove(coeffs, &[index])
    }

    /// Build the multi-point proof and return it with the opened values
    /// `P(indices[j])`, in index order.
    ///
    /// Errors:
    /// - [`KzgError::MalformedClaim`] for an empty or repeated index set,
    /// - [`KzgError::DegreeTooLow`] unless `indices.len() < coeffs.len()`,
    /// - [`KzgError::InsufficientSetupSize`] if `coeffs` exceeds the string.
    #[instrument(
        level = "debug",
        skip_all,
        fields(coeffs = coeffs.len(), points = indices.len(), srs_len = self.srs.len())
    )]
    pub fn open(
        &self,
        coeffs: &[E::ScalarField],
        indices: &[u64],
    ) -> Result<(Proof<E>, Vec<E::ScalarField>), KzgError> {
        if indices.is_empty() {
            return Err(KzgError::MalformedClaim("no evaluation indices".into()));
        }
        if indices.len() >= coeffs.len() {
            return Err(KzgError::DegreeTooLow {
                points: indices.len(),
                coefficients: coeffs.len(),
            });
        }
        if coeffs.len() > self.srs.len() {
            return Err(KzgError::InsufficientSetupSize {
                needed: coeffs.len(),
                available: self.srs.len(),
            });
        }

        let xs: Vec<E::ScalarField> = field::indices_to_scalars(indices);
        let values: Vec<E::ScalarField> = xs.iter().map(|&x| poly::evaluate(coeffs, x)).collect();

        let p = DensePolynomial::from_coefficients_slice(coeffs);
        let i_poly = poly::interpolate(&xs, &values)?;
        let z_poly = poly::zero_polynomial(&xs);
        let q_poly = poly::divide(&poly::subtract(&p, &i_poly), &z_poly)?;

        let proof = commitment::commit_g2(&q_poly.coeffs, self.srs)?;
        Ok((Proof(proof), values))
    }
}

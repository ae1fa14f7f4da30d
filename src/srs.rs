//! Structured reference string
//!
//! Two paired sequences of group elements encoding powers of a secret `s`:
//!
//! ```text
//!   g1_powers = [ [s^0]G1, [s^1]G1, …, [s^(n-1)]G1 ]
//!   g2_powers = [ [s^0]G2, [s^1]G2, …, [s^(n-1)]G2 ]
//! ```
//!
//! Element `i` of both sequences corresponds to the same exponent `i`. The
//! string is built once, then shared read-only by every commit/prove/verify
//! call; it holds no interior mutability, so `&ReferenceString` can be handed
//! to any number of threads.
//!
//! # Security
//!
//! [`ReferenceString::generate`] derives `s` by hashing public seed material.
//! Anyone who knows the seed knows `s` and can forge openings. This is only
//! suitable for tests and demonstrations; real deployments must load powers
//! from a multi-party ceremony through [`ReferenceString::from_powers`].

#![forbid(unsafe_code)]

use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup, Group, VariableBaseMSM};
use ark_ff::{Field, One, PrimeField};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use tracing::{debug, info, instrument};

use crate::{field, KzgError};

/// Paired powers of the toxic-waste scalar in G1 and G2.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct ReferenceString<E: Pairing> {
    /// `[s^i]G1` for `i = 0..n`.
    pub g1_powers: Vec<E::G1Affine>,
    /// `[s^i]G2` for `i = 0..n`.
    pub g2_powers: Vec<E::G2Affine>,
}

impl<E: Pairing> ReferenceString<E> {
    /// Derive a reference string of `length` powers from `seed`.
    ///
    /// `s = encode_bytes_to_scalar(seed)`, then `g1_powers[i] = G1 * s^i` and
    /// `g2_powers[i] = G2 * s^i` for the canonical generators.
    ///
    /// **Insecure**: `s` is recoverable from the seed. See the module docs.
    #[instrument(level = "debug", skip_all, fields(length = length))]
    pub fn generate(length: usize, seed: &[u8]) -> Result<Self, KzgError> {
        if length == 0 {
            return Err(KzgError::InvalidSetup("length must be positive".into()));
        }

        let s: E::ScalarField = field::encode_bytes_to_scalar(seed);
        let exponents: Vec<_> = (0..length as u64)
            .map(|i| s.pow([i]).into_bigint())
            .collect();

        let g1 = E::G1::generator();
        let g2 = E::G2::generator();
        let g1_powers: Vec<E::G1> = exponents.iter().map(|e| g1.mul_bigint(e)).collect();
        let g2_powers: Vec<E::G2> = exponents.iter().map(|e| g2.mul_bigint(e)).collect();

        info!(length, "generated deterministic reference string");
        Ok(Self {
            g1_powers: E::G1::normalize_batch(&g1_powers),
            g2_powers: E::G2::normalize_batch(&g2_powers),
        })
    }

    /// Adopt externally produced powers (e.g. from a ceremony transcript).
    ///
    /// Rejects empty or unbalanced sequences and runs [`Self::check_consistency`].
    pub fn from_powers(
        g1_powers: Vec<E::G1Affine>,
        g2_powers: Vec<E::G2Affine>,
    ) -> Result<Self, KzgError> {
        let srs = Self { g1_powers, g2_powers };
        srs.check_consistency()?;
        Ok(srs)
    }

    /// Number of powers `n`; polynomials with up to `n` coefficients can be committed.
    pub fn len(&self) -> usize {
        self.g1_powers.len().min(self.g2_powers.len())
    }

    /// Whether the string holds no powers at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The G2 generator `[s^0]G2` used on the right-hand side of the pairing check.
    pub fn g2_generator(&self) -> Result<E::G2Affine, KzgError> {
        self.g2_powers
            .first()
            .copied()
            .ok_or_else(|| KzgError::InvalidSetup("no G2 powers".into()))
    }

    /// Keep only the first `length` powers of both sequences.
    pub fn trim(&self, length: usize) -> Result<Self, KzgError> {
        if length == 0 {
            return Err(KzgError::InvalidSetup("cannot trim to zero powers".into()));
        }
        if length > self.len() {
            return Err(KzgError::InsufficientSetupSize {
                needed: length,
                available: self.len(),
            });
        }
        Ok(Self {
            g1_powers: self.g1_powers[..length].to_vec(),
            g2_powers: self.g2_powers[..length].to_vec(),
        })
    }

    /// Check that both sequences encode the same successive powers of one secret.
    ///
    /// With weights `r_i = ρ^i` (ρ hashed from the serialized string), we check
    /// the two batched ratios:
    ///
    /// ```text
    ///   e(Σ r_i·g1[i+1], g2[0]) == e(Σ r_i·g1[i], g2[1])
    ///   e(g1[0], Σ r_i·g2[i+1]) == e(g1[1], Σ r_i·g2[i])
    /// ```
    ///
    /// together with `e(g1[1], g2[0]) == e(g1[0], g2[1])`, which ties the two
    /// chains to the same `s`.
    #[instrument(level = "debug", skip_all, fields(length = self.g1_powers.len()))]
    pub fn check_consistency(&self) -> Result<(), KzgError> {
        let n = self.g1_powers.len();
        if n == 0 {
            return Err(KzgError::InvalidSetup("no powers".into()));
        }
        if n != self.g2_powers.len() {
            return Err(KzgError::InvalidSetup(format!(
                "{} G1 powers but {} G2 powers",
                n,
                self.g2_powers.len()
            )));
        }
        if self.g1_powers[0].is_zero() || self.g2_powers[0].is_zero() {
            return Err(KzgError::InvalidSetup("generator is the identity".into()));
        }
        if n == 1 {
            return Ok(());
        }

        let (g1, g2) = (&self.g1_powers, &self.g2_powers);
        if E::pairing(g1[1], g2[0]) != E::pairing(g1[0], g2[1]) {
            debug!("G1 and G2 chains use different secrets");
            return Err(KzgError::InvalidSetup("G1 and G2 powers disagree".into()));
        }

        let mut bytes = Vec::new();
        self.serialize_compressed(&mut bytes)?;
        let rho: E::ScalarField = field::encode_bytes_to_scalar(&bytes);
        let weights: Vec<E::ScalarField> = std::iter::successors(Some(E::ScalarField::one()), |w| {
            Some(*w * rho)
        })
        .take(n - 1)
        .collect();

        let g1_hi = E::G1::msm_unchecked(&g1[1..], &weights);
        let g1_lo = E::G1::msm_unchecked(&g1[..n - 1], &weights);
        if E::pairing(g1_hi, g2[0]) != E::pairing(g1_lo, g2[1]) {
            debug!("G1 powers are not successive");
            return Err(KzgError::InvalidSetup("G1 powers are not successive".into()));
        }

        let g2_hi = E::G2::msm_unchecked(&g2[1..], &weights);
        let g2_lo = E::G2::msm_unchecked(&g2[..n - 1], &weights);
        if E::pairing(g1[0], g2_hi) != E::pairing(g1[1], g2_lo) {
            debug!("G2 powers are not successive");
            return Err(KzgError::InvalidSetup("G2 powers are not successive".into()));
        }
        Ok(())
    }

    /// Canonical compressed encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, KzgError> {
        let mut bytes = Vec::with_capacity(self.compressed_size());
        self.serialize_compressed(&mut bytes)?;
        Ok(bytes)
    }

    /// Decode a compressed encoding (with subgroup checks) and verify consistency.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KzgError> {
        let srs = Self::deserialize_compressed(bytes)?;
        srs.check_consistency()?;
        Ok(srs)
    }
}

//! Setup configuration
//!
//! Parameters for the deterministic reference-string generator: how many
//! powers to produce and which seed material to hash into the secret scalar.
//!
//! **The default is insecure.** [`DEFAULT_SETUP_SEED`] is public, so the
//! secret derived from it is public too and anyone can forge openings against
//! [`SetupConfig::default`]. Use it for tests, benchmarks and reproducible
//! demos only.

#![forbid(unsafe_code)]

use ark_ec::pairing::Pairing;

use crate::{KzgError, ReferenceString};

/// Number of powers in the default reference string (max 256 coefficients).
pub const DEFAULT_SRS_LENGTH: usize = 256;

/// Public demonstration seed. Its derived secret is known to everyone.
pub const DEFAULT_SETUP_SEED: &str =
    "ebc388ab83362c66a69d80da50ed2f7e3e6a7be8c56722493cf17a4d0e6c774c";

/// Length and seed material for [`ReferenceString::generate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupConfig {
    /// Number of powers `n`.
    pub length: usize,
    /// Bytes hashed into the secret scalar.
    pub seed: Vec<u8>,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_SRS_LENGTH,
            seed: DEFAULT_SETUP_SEED.as_bytes().to_vec(),
        }
    }
}

impl SetupConfig {
    /// Override the number of powers.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Override the seed material.
    pub fn with_seed(mut self, seed: impl Into<Vec<u8>>) -> Self {
        self.seed = seed.into();
        self
    }

    /// Build the reference string described by this configuration.
    pub fn generate<E: Pairing>(&self) -> Result<ReferenceString<E>, KzgError> {
        ReferenceString::generate(self.length, &self.seed)
    }
}

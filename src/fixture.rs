//! draw random bytes
use rand::{Rng, RngCore};
use tracing::debug;

use crate::{error::RandHexError, NB_BYTES};

/// a sequence of exactly [`NB_BYTES`] bytes
///
/// the length is part of the type, so a fixture always splits evenly into
/// [`crate::NB_ROWS`] rows of [`crate::BYTES_PER_ROW`] bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    bytes: [u8; NB_BYTES],
}

impl Fixture {
    /// draws [`NB_BYTES`] bytes, each one uniformly in `[0, 255]`
    ///
    /// the source of randomness is left to the caller:
    /// - `rand::thread_rng()` is seeded from the system entropy and will give
    ///   a different fixture on every run
    /// - a seeded `rand::rngs::StdRng` gives reproducible fixtures
    pub fn random(rng: &mut impl RngCore) -> Self {
        let mut bytes = [0u8; NB_BYTES];
        for b in bytes.iter_mut() {
            *b = rng.gen::<u8>();
        }
        debug!("drew {} random bytes", NB_BYTES);

        Self { bytes }
    }

    /// builds a fixture from existing bytes
    ///
    /// # Errors
    /// [`RandHexError::WrongLength`] if there are not exactly [`NB_BYTES`]
    /// bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RandHexError> {
        let bytes = <[u8; NB_BYTES]>::try_from(bytes).map_err(|_| RandHexError::WrongLength {
            expected: NB_BYTES,
            found: bytes.len(),
        })?;

        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

use std::{fmt, str::FromStr};

use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that makes puzzle generation reproducible.
///
/// Seeds are displayed and parsed as 64 lowercase hexadecimal characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local RNG.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Builds the RNG used for one board shape.
    ///
    /// The board size and iteration count are hashed together with the seed,
    /// so one seed yields a different, still reproducible, sequence per shape.
    pub(crate) fn rng_for(self, size: usize, iterations: usize) -> Pcg64 {
        use rand::SeedableRng as _;

        let digest: [u8; 32] = Sha256::new()
            .chain_update(self.0)
            .chain_update((size as u64).to_le_bytes())
            .chain_update((iterations as u64).to_le_bytes())
            .finalize()
            .into();
        Pcg64::from_seed(digest)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors returned when parsing a [`PuzzleSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The input is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {len}")]
    InvalidLength {
        /// Number of characters read.
        len: usize,
    },
    /// The input contains a non-hexadecimal character.
    #[display("invalid hex digit {ch:?} in seed")]
    InvalidHexDigit {
        /// The offending character.
        ch: char,
    },
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let nibbles = s
            .trim()
            .chars()
            .map(|ch| ch.to_digit(16).ok_or(ParseSeedError::InvalidHexDigit { ch }))
            .collect::<Result<Vec<_>, _>>()?;
        if nibbles.len() != 64 {
            return Err(ParseSeedError::InvalidLength { len: nibbles.len() });
        }

        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(nibbles.chunks_exact(2)) {
            *byte = ((pair[0] << 4) | pair[1]) as u8;
        }
        Ok(Self(bytes))
    }
}

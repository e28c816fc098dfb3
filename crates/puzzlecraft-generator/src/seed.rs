use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a generated maze.
///
/// Seeds are written as 64 lowercase hexadecimal characters. A seed can
/// also be derived from any phrase, which makes it easy to share a maze by
/// name.
///
/// # Examples
///
/// ```
/// use puzzlecraft_generator::MazeSeed;
///
/// let seed = MazeSeed::from_phrase("hello");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<MazeSeed>(), Ok(seed));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MazeSeed([u8; 32]);

impl MazeSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    #[inline]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from the thread-local generator.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from the SHA-256 digest of `phrase`.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates the deterministic generator this seed stands for.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for MazeSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a [`MazeSeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The input is not 64 characters long.
    #[display("seed must be 64 hex characters, found {length}")]
    InvalidLength {
        /// Number of characters in the input.
        length: usize,
    },
    /// The input contains a non-hexadecimal character.
    #[display("invalid hex character {ch:?} at position {position}")]
    InvalidHexDigit {
        /// Zero-based position in the input.
        position: usize,
        /// The offending character.
        ch: char,
    },
}

impl FromStr for MazeSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let length = s.chars().count();
        if length != 64 {
            return Err(SeedParseError::InvalidLength { length });
        }
        let mut nibbles = [0_u8; 64];
        for (position, ch) in s.chars().enumerate() {
            let value = ch
                .to_digit(16)
                .ok_or(SeedParseError::InvalidHexDigit { position, ch })?;
            nibbles[position] = u8::try_from(value)
                .map_err(|_| SeedParseError::InvalidHexDigit { position, ch })?;
        }
        let mut bytes = [0_u8; 32];
        for (byte, pair) in bytes.iter_mut().zip(nibbles.chunks_exact(2)) {
            *byte = (pair[0] << 4) | pair[1];
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng as _;

    use super::*;

    #[test]
    fn test_parse_and_display() {
        let text = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";
        let seed: MazeSeed = text.parse().unwrap();
        assert_eq!(seed.as_bytes()[..3], [0, 1, 2]);
        assert_eq!(seed.as_bytes()[31], 0x1f);
        assert_eq!(seed.to_string(), text);
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let upper = "FF".repeat(32);
        let seed: MazeSeed = upper.parse().unwrap();
        assert_eq!(seed, MazeSeed::new([0xff; 32]));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<MazeSeed>(),
            Err(SeedParseError::InvalidLength { length: 3 })
        );
        let bad = format!("{}g", "0".repeat(63));
        assert_eq!(
            bad.parse::<MazeSeed>(),
            Err(SeedParseError::InvalidHexDigit {
                position: 63,
                ch: 'g'
            })
        );
    }

    #[test]
    fn test_phrase_is_stable() {
        assert_eq!(
            MazeSeed::from_phrase("").to_string(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_ne!(MazeSeed::from_phrase("a"), MazeSeed::from_phrase("b"));
    }

    #[test]
    fn test_same_seed_same_stream() {
        let seed = MazeSeed::from_phrase("stream");
        let a = seed.rng().random::<u64>();
        let b = seed.rng().random::<u64>();
        assert_eq!(a, b);
    }
}

//! Reproducible seeds for maze generation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use sha2::{Digest as _, Sha256};

/// Error returned when parsing a [`MazeSeed`] from hex text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    /// The text is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len} characters")]
    InvalidLength {
        /// Length of the input.
        len: usize,
    },
    /// A character is not a hex digit.
    #[display("invalid hex digit at position {position}")]
    InvalidDigit {
        /// Zero-based character position.
        position: usize,
    },
}

/// A 256-bit seed for the maze generator's random source.
///
/// Seeds are displayed and parsed as 64 lowercase hex digits, so a maze can be
/// reproduced from its printed seed.
///
/// # Examples
///
/// ```
/// use mazewalk_generator::MazeSeed;
///
/// let seed = MazeSeed::from_phrase("hello maze");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<MazeSeed>()?, seed);
/// # Ok::<(), mazewalk_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MazeSeed([u8; 32]);

impl MazeSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from system entropy.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Derives a seed from the SHA-256 digest of `phrase`.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        let mut bytes = [0; 32];
        bytes.copy_from_slice(&digest);
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
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

impl FromStr for MazeSeed {
    type Err = ParseSeedError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 64 {
            return Err(ParseSeedError::InvalidLength { len: s.len() });
        }
        let mut bytes = [0; 32];
        let mut digits = s.chars().enumerate().map(|(position, c)| {
            c.to_digit(16)
                .ok_or(ParseSeedError::InvalidDigit { position })
        });
        for byte in &mut bytes {
            let (Some(hi), Some(lo)) = (digits.next(), digits.next()) else {
                return Err(ParseSeedError::InvalidLength { len: s.len() });
            };
            *byte = ((hi? << 4) | lo?) as u8;
        }
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_lowercase_hex() {
        let mut bytes = [0; 32];
        bytes[0] = 0xab;
        bytes[31] = 0x01;
        let text = MazeSeed::from_bytes(bytes).to_string();
        assert!(text.starts_with("ab00"));
        assert!(text.ends_with("0001"));
    }

    #[test]
    fn test_parse_accepts_uppercase() {
        let lower = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";
        let upper = lower.to_ascii_uppercase();
        assert_eq!(
            lower.parse::<MazeSeed>().unwrap(),
            upper.parse::<MazeSeed>().unwrap()
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<MazeSeed>(),
            Err(ParseSeedError::InvalidLength { len: 3 })
        );
        let mut text = "0".repeat(64);
        text.replace_range(10..11, "g");
        assert_eq!(
            text.parse::<MazeSeed>(),
            Err(ParseSeedError::InvalidDigit { position: 10 })
        );
    }

    #[test]
    fn test_from_phrase_is_stable() {
        assert_eq!(MazeSeed::from_phrase("a"), MazeSeed::from_phrase("a"));
        assert_ne!(MazeSeed::from_phrase("a"), MazeSeed::from_phrase("b"));
    }
}

use crate::Generator;
use rand::Rng;
use relink_core::ShortCode;

/// URL-safe alphabet, 64 symbols.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

pub const DEFAULT_LENGTH: usize = 6;

/// Random short codes drawn uniformly from a URL-safe alphabet.
///
/// Six characters give 2^36 codes; collisions are rare but possible, so the
/// store's uniqueness constraint remains the source of truth.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    length: usize,
}

impl RandomGenerator {
    /// Creates a generator producing codes of `length` characters, clamped
    /// to the range accepted by [`ShortCode::new`].
    pub fn new(length: usize) -> Self {
        Self {
            length: length.clamp(*ShortCode::LENGTH.start(), *ShortCode::LENGTH.end()),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH)
    }
}

impl Generator for RandomGenerator {
    type Output = ShortCode;

    fn generate(&self) -> ShortCode {
        let mut rng = rand::rng();
        let code: String = (0..self.length)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        ShortCode::new_unchecked(code)
    }
}

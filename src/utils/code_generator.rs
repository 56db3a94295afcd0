//! Short code generation.
//!
//! Generation sits behind the [`CodeGenerator`] trait so the allocator can be
//! driven by a deterministic generator in tests.

use rand::Rng;

/// Alphabet used for generated codes.
///
/// Digits and ASCII letters without the visually ambiguous `0`, `O`, `1`,
/// `I` and `l`. 57 symbols, so a 7-character code carries ~40.8 bits.
pub const ALPHABET: &[u8] = b"23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Default length of generated codes.
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// Produces candidate short codes.
///
/// Implementations are pure generators that don't interact with storage;
/// uniqueness is enforced by the store and collisions are retried by
/// [`crate::application::services::AllocatorService`].
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a new candidate code.
    fn generate(&self) -> String;
}

/// Generates random codes from [`ALPHABET`] using the thread-local CSPRNG.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    /// Creates a generator producing codes of `length` characters.
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| {
                let idx = rng.random_range(0..ALPHABET.len());
                ALPHABET[idx] as char
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_alphabet_has_no_ambiguous_characters() {
        assert_eq!(ALPHABET.len(), 57);
        for c in [b'0', b'O', b'1', b'I', b'l'] {
            assert!(!ALPHABET.contains(&c));
        }
    }

    #[test]
    fn test_generate_code_has_default_length() {
        let code = RandomCodeGenerator::default().generate();
        assert_eq!(code.len(), 7);
    }

    #[test]
    fn test_generate_code_respects_configured_length() {
        let generator = RandomCodeGenerator::new(12);
        assert_eq!(generator.length(), 12);
        assert_eq!(generator.generate().len(), 12);
    }

    #[test]
    fn test_generate_code_uses_alphabet_only() {
        let generator = RandomCodeGenerator::default();
        for _ in 0..100 {
            let code = generator.generate();
            assert!(code.bytes().all(|b| ALPHABET.contains(&b)), "{code}");
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let generator = RandomCodeGenerator::default();
        let codes: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();

        assert_eq!(codes.len(), 1000);
    }
}

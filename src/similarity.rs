//! Similarity decisions over whole sequences of words.

use itertools::Itertools;

use crate::encoder::PhoneticEncoder;

/// Errors arising while deciding similarity.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SimilarityError {
    /// A rating comparison needs at least two words
    #[error("a rating comparison needs at least 2 words, got {0}")]
    NotEnoughWords(usize),
}

/// Decides whether a sequence of words shares one pronunciation.
///
/// The default rule encodes every word and accepts the sequence when
/// each key equals the key before it. Sequences of fewer than two
/// words are vacuously similar.
pub trait Similarity: PhoneticEncoder {
    /// Returns true when every word sounds like its predecessor.
    fn is_similar(&self, words: &[&str]) -> Result<bool, SimilarityError> {
        let keys: Vec<_> = words.iter().map(|word| self.build_key(word)).collect();
        Ok(keys.iter().tuple_windows().all(|(a, b)| a == b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soundex::Soundex;

    #[test]
    fn test_short_sequences_are_vacuously_similar() {
        let encoder = Soundex::new();
        assert!(encoder.is_similar(&[]).unwrap());
        assert!(encoder.is_similar(&["Knuth"]).unwrap());
    }

    #[test]
    fn test_default_rule_compares_consecutive_keys() {
        let encoder = Soundex::new();
        assert!(encoder.is_similar(&["Robert", "Rupert"]).unwrap());
        assert!(!encoder.is_similar(&["Robert", "Wright"]).unwrap());
        assert!(!encoder.is_similar(&["Robert", "Rupert", "Wright"]).unwrap());
    }
}

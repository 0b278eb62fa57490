//! The encoding contract shared by every phonetic algorithm.

use smol_str::SmolStr;

use self::keys::KeySet;

pub mod keys;

/// A phonetic encoder reduces a word to one or more short codes such
/// that words with a similar pronunciation share a code.
///
/// Encoders never reject input: a word without a single usable letter
/// still produces a key set, holding one possibly empty code. Only the
/// empty word produces an empty set.
pub trait PhoneticEncoder {
    /// Generates every code for the word, the most important first.
    fn build_keys(&self, word: &str) -> KeySet;

    /// Generates the most important code for the word, or the empty
    /// string when the word is empty.
    fn build_key(&self, word: &str) -> SmolStr {
        match self.build_keys(word).primary() {
            Some(code) => SmolStr::new(code),
            None => SmolStr::new(""),
        }
    }
}

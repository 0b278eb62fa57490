//! Key sets returned by the encoders.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// The ordered phonetic codes an encoder generated for one word.
///
/// Codes of more importance sit at smaller indices. Most encoders
/// produce exactly one code per word; the double metaphone adds a
/// second, alternate code when it judges the pronunciation ambiguous.
/// An empty word produces an empty set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeySet {
    codes: Vec<SmolStr>,
}

impl KeySet {
    /// creates an empty key set
    pub fn new() -> KeySet {
        KeySet { codes: Vec::new() }
    }

    /// creates a key set holding a single code
    pub fn single(code: SmolStr) -> KeySet {
        KeySet { codes: vec![code] }
    }

    /// creates a key set holding a primary and an alternate code
    pub fn pair(primary: SmolStr, alternate: SmolStr) -> KeySet {
        KeySet {
            codes: vec![primary, alternate],
        }
    }

    /// the most important code, if the set holds any
    pub fn primary(&self) -> Option<&str> {
        self.codes.first().map(|code| code.as_str())
    }

    /// the alternate code, present only for ambiguous pronunciations
    pub fn alternate(&self) -> Option<&str> {
        self.codes.get(1).map(|code| code.as_str())
    }

    /// number of codes in the set
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// true when the set holds no codes at all
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// iterates over the codes in importance order
    pub fn iter(&self) -> std::slice::Iter<'_, SmolStr> {
        self.codes.iter()
    }

    /// views the codes as a slice
    pub fn as_slice(&self) -> &[SmolStr] {
        &self.codes
    }

    /// unwraps the set into its backing vector
    pub fn into_vec(self) -> Vec<SmolStr> {
        self.codes
    }
}

impl IntoIterator for KeySet {
    type Item = SmolStr;
    type IntoIter = std::vec::IntoIter<SmolStr>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeySet {
    type Item = &'a SmolStr;
    type IntoIter = std::slice::Iter<'a, SmolStr>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}

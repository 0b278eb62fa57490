//! The metaphone family of encoders.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::constants::DEFAULT_KEY_LENGTH;
use crate::encoder::keys::KeySet;
use crate::encoder::PhoneticEncoder;
use crate::similarity::Similarity;
use crate::util::Letters;

mod double;

pub use self::double::DoubleMetaphone;

/// Encoder implementing the original metaphone algorithm.
///
/// Words reduce to a run of the sixteen consonant symbols
/// `0BFHJKLMNPRSTWXY`, where `0` stands for the TH sound and `X` for
/// SH or CH. Vowels survive only at the start of the word.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Metaphone {
    max_length: Option<usize>,
}

impl Metaphone {
    /// creates an encoder generating keys of up to 4 characters
    pub const fn new() -> Metaphone {
        Metaphone {
            max_length: Some(DEFAULT_KEY_LENGTH),
        }
    }

    /// creates an encoder generating keys of up to the given length
    pub const fn with_max_length(max_length: usize) -> Metaphone {
        Metaphone {
            max_length: Some(max_length),
        }
    }

    /// creates an encoder whose key length is not limited
    pub const fn unbounded() -> Metaphone {
        Metaphone { max_length: None }
    }

    fn encode(&self, word: &str) -> String {
        let mut word = word.to_uppercase();
        if ["GN", "KN", "PN", "WR", "AE"]
            .iter()
            .any(|prefix| word.starts_with(prefix))
        {
            word.remove(0);
        }
        if word.starts_with('X') {
            word.replace_range(..1, "S");
        }
        if word.starts_with("WH") {
            word.replace_range(..2, "W");
        }

        let letters = Letters::new(&word);
        let length = letters.len();
        let last = length - 1;
        let mut key = String::new();
        let mut n: isize = 0;

        while n < length && self.max_length.map_or(true, |max| key.len() < max) {
            let c = match letters.at(n) {
                Some(c) => c,
                None => break,
            };
            // repeated letters encode once, except C as in "focaccia"
            if c != 'C' && n > 0 && letters.has(n - 1, c) {
                n += 1;
                continue;
            }
            match c {
                'A' | 'E' | 'I' | 'O' | 'U' => {
                    if n == 0 {
                        key.push(c);
                    }
                }
                'B' => {
                    if !(n == last && letters.has(n - 1, 'M')) {
                        key.push('B');
                    }
                }
                'C' => {
                    if !letters.any(n - 1, &["SCE", "SCI", "SCY"]) {
                        if letters.any(n + 1, &["IA"]) {
                            key.push('X');
                        } else if letters.any(n + 1, &["E", "I", "Y"]) {
                            key.push('S');
                        } else if letters.any(n - 1, &["SCH"]) {
                            key.push('K');
                        } else if letters.has(n + 1, 'H') {
                            key.push(if n == 0 && !letters.vowel(n + 2) {
                                'K'
                            } else {
                                'X'
                            });
                        } else {
                            key.push('K');
                        }
                    }
                }
                'D' => {
                    key.push(if letters.any(n + 1, &["GE", "GI", "GY"]) {
                        'J'
                    } else {
                        'T'
                    });
                }
                'G' => {
                    let mut silent = letters.has(n + 1, 'H') && !letters.vowel(n + 2);
                    if n > 0 {
                        if (n + 1 == last && letters.has(n + 1, 'N'))
                            || (n + 3 == last && letters.any(n + 1, &["NED"]))
                        {
                            silent = true;
                        }
                        if letters.any(n - 1, &["DGE", "DGI", "DGY"]) {
                            silent = true;
                        }
                    }
                    if !silent {
                        key.push(
                            if letters.any(n + 1, &["E", "I", "Y"]) && !letters.has(n - 1, 'G') {
                                'J'
                            } else {
                                'K'
                            },
                        );
                    }
                }
                'H' => {
                    if n < last
                        && !letters.any(n - 1, &["C", "S", "P", "T", "G"])
                        && letters.vowel(n + 1)
                    {
                        key.push('H');
                    }
                }
                'F' | 'J' | 'L' | 'M' | 'N' | 'R' => key.push(c),
                'K' => {
                    if n == 0 || !letters.has(n - 1, 'C') {
                        key.push('K');
                    }
                }
                'P' => key.push(if letters.has(n + 1, 'H') { 'F' } else { 'P' }),
                'Q' => key.push('K'),
                'S' => {
                    if letters.any(n + 1, &["IO", "IA"]) || letters.has(n + 1, 'H') {
                        key.push('X');
                    } else {
                        key.push('S');
                    }
                }
                'T' => {
                    if letters.any(n + 1, &["IO", "IA"]) {
                        key.push('X');
                    } else if letters.has(n + 1, 'H') {
                        if !letters.has(n - 1, 'T') {
                            key.push('0');
                        }
                    } else if !letters.any(n + 1, &["CH"]) {
                        key.push('T');
                    }
                }
                'V' => key.push('F'),
                'W' | 'Y' => {
                    if letters.vowel(n + 1) {
                        key.push(c);
                    }
                }
                'X' => key.push_str("KS"),
                'Z' => key.push('S'),
                _ => {}
            }
            n += 1;
        }

        if let Some(max) = self.max_length {
            key.truncate(max);
        }
        key
    }
}

impl Default for Metaphone {
    fn default() -> Metaphone {
        Metaphone::new()
    }
}

impl PhoneticEncoder for Metaphone {
    fn build_keys(&self, word: &str) -> KeySet {
        if word.is_empty() {
            KeySet::new()
        } else {
            KeySet::single(self.build_key(word))
        }
    }

    fn build_key(&self, word: &str) -> SmolStr {
        if word.is_empty() {
            return SmolStr::new("");
        }
        SmolStr::new(self.encode(word))
    }
}

impl Similarity for Metaphone {}

impl fmt::Display for Metaphone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max_length {
            Some(max) => write!(f, "Metaphone_{}", max),
            None => write!(f, "Metaphone_unbounded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spelling_variants_share_a_key() {
        let encoder = Metaphone::new();
        for word in ["Spotify", "Spotfy", "Sputfi", "Spotifi"] {
            assert_eq!(encoder.build_key(word), "SPTF", "{}", word);
        }
    }

    #[test]
    fn test_consonant_rules() {
        let encoder = Metaphone::new();
        assert_eq!(encoder.build_key("Knuth"), "N0");
        assert_eq!(encoder.build_key("Thompson"), "0MPS");
        assert_eq!(encoder.build_key("Wright"), "RT");
        assert_eq!(encoder.build_key("Xavier"), "SFR");
        assert_eq!(encoder.build_key("Whale"), "WL");
        assert_eq!(encoder.build_key("aeneas"), "ENS");
        assert_eq!(encoder.build_key("school"), "SKL");
        assert_eq!(encoder.build_key("church"), "XRX");
        assert_eq!(encoder.build_key("dodge"), "TJ");
        assert_eq!(encoder.build_key("tough"), "T");
        assert_eq!(encoder.build_key("science"), "SNS");
        assert_eq!(encoder.build_key("lamb"), "LM");
        assert_eq!(encoder.build_key("psychology"), "PSXL");
        assert_eq!(encoder.build_key("gnome"), "NM");
        assert_eq!(encoder.build_key("United Air Lines"), "UNTT");
    }

    #[test]
    fn test_degenerate_words() {
        let encoder = Metaphone::new();
        assert_eq!(encoder.build_key("A"), "A");
        assert_eq!(encoder.build_key("H"), "");
        assert_eq!(encoder.build_key("X"), "S");
        assert_eq!(encoder.build_key(""), "");
        assert!(encoder.build_keys("").is_empty());
        assert_eq!(encoder.build_keys("H").len(), 1);
    }

    #[test]
    fn test_unbounded_keys() {
        let encoder = Metaphone::unbounded();
        assert_eq!(encoder.build_key("Encyclopedia"), "ENSKLPT");
        assert_eq!(encoder.build_key("Thompson"), "0MPSN");
        assert_eq!(encoder.build_key("Xylophone"), "SLFN");
    }

    #[test]
    fn test_similarity() {
        let encoder = Metaphone::new();
        assert!(encoder
            .is_similar(&["Spotify", "Spotfy", "Sputfi", "Spotifi"])
            .unwrap());
        assert!(!encoder.is_similar(&["Knuth", "Thompson"]).unwrap());
    }

    #[test]
    fn test_display_identity() {
        assert_eq!(Metaphone::new().to_string(), "Metaphone_4");
        assert_eq!(Metaphone::unbounded().to_string(), "Metaphone_unbounded");
        assert_eq!(Metaphone::with_max_length(6).to_string(), "Metaphone_6");
    }
}

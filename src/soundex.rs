//! Soundex, the numeric consonant-group encoder.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::constants::DEFAULT_KEY_LENGTH;
use crate::encoder::keys::KeySet;
use crate::encoder::PhoneticEncoder;
use crate::similarity::Similarity;

const UNMAPPED: char = '*';

/// Encoder implementing the soundex algorithm.
///
/// In the classic form the first character of the word passes through
/// verbatim and only the remainder is encoded, so `"Knuth"` becomes
/// `"K530"`. An encoder built with [`Soundex::full`] encodes the first
/// character like any other and turns `"Knuth"` into `"2530"`. Keys
/// shorter than the configured length are padded with zeros.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Soundex {
    encode_first: bool,
    length: usize,
}

impl Soundex {
    /// creates a classic soundex encoder generating keys of length 4
    pub const fn new() -> Soundex {
        Soundex {
            encode_first: false,
            length: DEFAULT_KEY_LENGTH,
        }
    }

    /// creates a classic soundex encoder generating keys of the given length
    pub const fn with_length(length: usize) -> Soundex {
        Soundex {
            encode_first: false,
            length,
        }
    }

    /// creates an encoder that also encodes the first character
    pub const fn full(length: usize) -> Soundex {
        Soundex {
            encode_first: true,
            length,
        }
    }
}

impl Default for Soundex {
    fn default() -> Soundex {
        Soundex::new()
    }
}

fn letter_code(c: char) -> char {
    match c.to_ascii_lowercase() {
        'b' | 'p' | 'f' | 'v' => '1',
        'c' | 's' | 'k' | 'g' | 'j' | 'q' | 'x' | 'z' => '2',
        'd' | 't' => '3',
        'l' => '4',
        'm' | 'n' => '5',
        'r' => '6',
        _ => UNMAPPED,
    }
}

impl PhoneticEncoder for Soundex {
    fn build_keys(&self, word: &str) -> KeySet {
        if word.is_empty() {
            KeySet::new()
        } else {
            KeySet::single(self.build_key(word))
        }
    }

    fn build_key(&self, word: &str) -> SmolStr {
        if self.length == 0 || word.is_empty() {
            return SmolStr::new("");
        }

        let chars: Vec<char> = word.chars().collect();
        let mut key = String::with_capacity(self.length);

        let (mut next, mut emitted, mut previous) = if self.encode_first {
            (0, 0, UNMAPPED)
        } else {
            let first = chars[0];
            key.push(first.to_uppercase().next().unwrap_or(first));
            (1, 1, letter_code(first))
        };

        while next < chars.len() && emitted < self.length {
            let code = letter_code(chars[next]);
            if code != UNMAPPED && code != previous {
                key.push(code);
                emitted += 1;
            }
            // an unmapped character still breaks a run of equal codes
            previous = code;
            next += 1;
        }

        for _ in emitted..self.length {
            key.push('0');
        }

        SmolStr::new(key)
    }
}

impl Similarity for Soundex {}

impl fmt::Display for Soundex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Soundex_{}_{}", self.encode_first, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_key() {
        let encoder = Soundex::new();
        assert_eq!(encoder.build_key("Knuth"), "K530");
        assert_eq!(encoder.build_key("Robert"), "R163");
        assert_eq!(encoder.build_key("Rupert"), "R163");
        assert_eq!(encoder.build_key("Tymczak"), "T522");
        assert_eq!(encoder.build_key("Pfister"), "P236");
        assert_eq!(encoder.build_key("Jackson"), "J250");
        assert_eq!(encoder.build_key("Ashcraft"), "A226");
    }

    #[test]
    fn test_full_key_encodes_first_character() {
        let encoder = Soundex::full(4);
        assert_eq!(encoder.build_key("Knuth"), "2530");
        assert_eq!(encoder.build_key("K"), "2000");
    }

    #[test]
    fn test_spelling_variants_share_a_key() {
        let encoder = Soundex::new();
        for word in ["Spotify", "Spotfy", "Sputfi", "Spotifi"] {
            assert_eq!(encoder.build_key(word), "S131", "{}", word);
        }
        for words in [
            "United Air Lines",
            "United Aire Lines",
            "United Air Line",
        ] {
            assert_eq!(encoder.build_key(words), "U533", "{}", words);
        }
    }

    #[test]
    fn test_key_length_configuration() {
        assert_eq!(Soundex::with_length(8).build_key("Ashcraft"), "A2261300");
        assert_eq!(Soundex::with_length(0).build_key("Ashcraft"), "");
        assert_eq!(Soundex::with_length(1).build_key("Knuth"), "K");
    }

    #[test]
    fn test_first_character_passes_through_verbatim() {
        let encoder = Soundex::new();
        assert_eq!(encoder.build_key(" "), " 000");
        assert_eq!(encoder.build_key("123"), "1000");
        assert_eq!(encoder.build_key("K"), "K000");
    }

    #[test]
    fn test_empty_word() {
        let encoder = Soundex::new();
        assert_eq!(encoder.build_key(""), "");
        assert!(encoder.build_keys("").is_empty());
        assert_eq!(encoder.build_keys("Knuth").len(), 1);
    }

    #[test]
    fn test_similarity() {
        let encoder = Soundex::new();
        assert!(encoder
            .is_similar(&["Spotify", "Spotfy", "Sputfi", "Spotifi"])
            .unwrap());
        assert!(!encoder.is_similar(&["Robert", "Wright"]).unwrap());
    }

    #[test]
    fn test_display_identity() {
        assert_eq!(Soundex::new().to_string(), "Soundex_false_4");
        assert_eq!(Soundex::full(6).to_string(), "Soundex_true_6");
    }
}

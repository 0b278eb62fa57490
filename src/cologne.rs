//! Kölner Phonetik, the digit-group encoder for German names.

use std::fmt;

use itertools::Itertools;
use smol_str::SmolStr;
use unic_ucd_category::GeneralCategory;

use crate::encoder::keys::KeySet;
use crate::encoder::PhoneticEncoder;
use crate::similarity::{Similarity, SimilarityError};
use crate::util;

/// Encoder implementing the Kölner Phonetik (Cologne phonetics).
///
/// Every letter maps to a digit group chosen by its neighbours, so
/// `"Wikipedia"` becomes `"304010200"`. Raw keys keep doubled digits
/// and inner zeros; [`clean_doubles`] and [`clean_zeros`] reduce them
/// to the compact form usually published, `"3412"` for the example
/// above.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cologne;

impl Cologne {
    /// creates a cologne encoder
    pub const fn new() -> Cologne {
        Cologne
    }
}

/// Collapses runs of the same digit into one.
pub fn clean_doubles(code: &str) -> String {
    util::collapse_adjacent(code)
}

/// Drops every zero except in leading position.
pub fn clean_zeros(code: &str) -> String {
    code.chars()
        .enumerate()
        .filter(|&(i, c)| c != '0' || i == 0)
        .map(|(_, c)| c)
        .collect()
}

fn encode(word: &str) -> String {
    // Invariant uppercasing in the original rule set keeps ß a single
    // letter; the full case mapping would expand it to SS before the
    // sibilant group could see it.
    let mut content: Vec<char> = Vec::with_capacity(word.len());
    for c in word.chars() {
        if c == 'ß' {
            content.push('ß');
        } else {
            content.extend(c.to_uppercase());
        }
    }

    let mut code = String::with_capacity(content.len());
    for (i, &entry) in content.iter().enumerate() {
        if !GeneralCategory::of(entry).is_letter() {
            continue;
        }
        if entry == 'H' {
            continue;
        }
        match entry {
            'A' | 'E' | 'I' | 'J' | 'O' | 'U' | 'Y' | 'Ä' | 'Ö' | 'Ü' => code.push('0'),
            'B' => code.push('1'),
            'F' | 'V' | 'W' => code.push('3'),
            'G' | 'K' | 'Q' => code.push('4'),
            'L' => code.push('5'),
            'M' | 'N' => code.push('6'),
            'R' => code.push('7'),
            'S' | 'Z' | 'ß' => code.push('8'),
            'P' => {
                if content.get(i + 1) == Some(&'H') {
                    code.push('3');
                } else {
                    code.push('1');
                }
            }
            'X' => {
                if i > 0 && matches!(content.get(i - 1), Some('C' | 'K' | 'Q')) {
                    code.push('8');
                } else {
                    code.push_str("48");
                }
            }
            'D' | 'T' => {
                if matches!(content.get(i + 1), Some('C' | 'S' | 'Z')) {
                    code.push('8');
                } else {
                    code.push('2');
                }
            }
            'C' => {
                if i == 0 {
                    if matches!(
                        content.get(i + 1),
                        Some('A' | 'H' | 'K' | 'L' | 'O' | 'Q' | 'R' | 'U' | 'X')
                    ) {
                        code.push('4');
                    } else {
                        code.push('8');
                    }
                } else if i + 1 >= content.len() {
                    // a word-final C in the middle groups is silent
                } else if matches!(content.get(i - 1), Some('S' | 'Z')) {
                    code.push('8');
                } else if matches!(
                    content.get(i + 1),
                    Some('A' | 'H' | 'K' | 'O' | 'Q' | 'U' | 'X')
                ) {
                    code.push('4');
                } else {
                    code.push('8');
                }
            }
            _ => {}
        }
    }
    code
}

impl PhoneticEncoder for Cologne {
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
        SmolStr::new(encode(word))
    }
}

impl Similarity for Cologne {
    /// Words compare on their keys with doubled digits collapsed, so
    /// spellings differing only in letter runs count as similar.
    fn is_similar(&self, words: &[&str]) -> Result<bool, SimilarityError> {
        let keys: Vec<String> = words
            .iter()
            .map(|word| clean_doubles(&clean_doubles(&self.build_key(word))))
            .collect();
        Ok(keys.iter().tuple_windows().all(|(a, b)| a == b))
    }
}

impl fmt::Display for Cologne {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cologne")
    }
}

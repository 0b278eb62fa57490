//! NYSIIS, the New York State Identification and Intelligence System
//! encoder.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::constants::NYSIIS_KEY_LENGTH;
use crate::encoder::keys::KeySet;
use crate::encoder::PhoneticEncoder;
use crate::similarity::Similarity;
use crate::util;

const STARTS: [(&str, &str); 6] = [
    ("MAC", "MCC"),
    ("KN", "N"),
    ("K", "C"),
    ("PH", "FF"),
    ("PF", "FF"),
    ("SCH", "SSS"),
];

/// Encoder implementing the NYSIIS algorithm.
///
/// The first letter of the word survives as is; the rest reduces to a
/// consonant skeleton whose only vowel is `A`, so `"Knight"` and
/// `"Night"` both become `"NAGT"`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Nysiis;

/// Both forms of the NYSIIS fingerprint generated for one word.
///
/// ```
/// use phonkey::nysiis::Nysiis;
///
/// let key = Nysiis::new().generate("MacDonald");
/// assert_eq!(key.key, "MCDANA");
/// assert_eq!(key.full_key, "MCDANALD");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NysiisKey {
    /// the canonical key, truncated to six characters
    pub key: SmolStr,
    /// the key before truncation
    pub full_key: SmolStr,
}

impl Nysiis {
    /// creates a NYSIIS encoder
    pub const fn new() -> Nysiis {
        Nysiis
    }

    /// Generates both the truncated and the full key for a word.
    pub fn generate(&self, word: &str) -> NysiisKey {
        let full = encode(word);
        let mut key = full.clone();
        key.truncate(NYSIIS_KEY_LENGTH);
        NysiisKey {
            key: SmolStr::new(key),
            full_key: SmolStr::new(full),
        }
    }
}

fn encode(word: &str) -> String {
    let mut name = util::upper_letters(word);
    if name.is_empty() {
        return name;
    }
    name = translate_first(name);
    name = translate_last(name);

    let first = match name.chars().next() {
        Some(c) => c,
        None => return String::new(),
    };
    let mut rest: String = name.chars().skip(1).collect();
    if !rest.is_empty() {
        rest = translate_remaining(rest);
        rest = fix_last(rest);
    }

    let mut key = String::with_capacity(1 + rest.len());
    key.push(first);
    key.push_str(&util::collapse_adjacent(&rest));
    key
}

fn translate_first(name: String) -> String {
    for (prefix, replacement) in STARTS {
        if let Some(stem) = name.strip_prefix(prefix) {
            return format!("{}{}", replacement, stem);
        }
    }
    name
}

fn translate_last(name: String) -> String {
    for suffix in ["EE", "IE"] {
        if let Some(stem) = name.strip_suffix(suffix) {
            return format!("{}Y", stem);
        }
    }
    for suffix in ["DT", "RT", "RD", "NT", "ND"] {
        if let Some(stem) = name.strip_suffix(suffix) {
            return format!("{}D", stem);
        }
    }
    name
}

fn translate_remaining(rest: String) -> String {
    let rest = rest.replace("EV", "AF");
    let rest: String = rest
        .chars()
        .map(|c| if util::is_vowel(c) { 'A' } else { c })
        .collect();
    let rest = rest
        .replace('Q', "G")
        .replace('Z', "S")
        .replace('M', "N")
        .replace("KN", "N")
        .replace('K', "C")
        .replace("SCH", "SSS")
        .replace("PH", "FF");
    let rest = drop_h_after_consonant(&rest);
    let rest = drop_h_cluster(&rest);
    flatten_vowel_w(&rest)
}

/// A consonant followed by H loses the H.
fn drop_h_after_consonant(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        out.push(chars[i]);
        if !util::is_vowel(chars[i]) && chars.get(i + 1) == Some(&'H') {
            i += 2;
        } else {
            i += 1;
        }
    }
    out
}

/// An H followed by a consonant drops together with that consonant.
fn drop_h_cluster(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        out.push(chars[i]);
        if chars.get(i + 1) == Some(&'H')
            && matches!(chars.get(i + 2), Some(c) if !util::is_vowel(*c))
        {
            i += 3;
        } else {
            i += 1;
        }
    }
    out
}

/// A vowel followed by W collapses to a single A.
fn flatten_vowel_w(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;
    while i < chars.len() {
        if util::is_vowel(chars[i]) && chars.get(i + 1) == Some(&'W') {
            out.push('A');
            i += 2;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

fn fix_last(rest: String) -> String {
    if let Some(stem) = rest.strip_suffix('S') {
        return stem.to_string();
    }
    if let Some(stem) = rest.strip_suffix("AY") {
        return format!("{}Y", stem);
    }
    if let Some(stem) = rest.strip_suffix('A') {
        return stem.to_string();
    }
    rest
}

impl PhoneticEncoder for Nysiis {
    fn build_keys(&self, word: &str) -> KeySet {
        if word.is_empty() {
            KeySet::new()
        } else {
            KeySet::single(self.build_key(word))
        }
    }

    /// The key built here is the full, untruncated form.
    fn build_key(&self, word: &str) -> SmolStr {
        if word.is_empty() {
            return SmolStr::new("");
        }
        SmolStr::new(encode(word))
    }
}

impl Similarity for Nysiis {}

impl fmt::Display for Nysiis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nysiis")
    }
}

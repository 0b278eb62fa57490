//! Caverphone, the start/end rule encoder (2004 revision).

use std::fmt;

use smol_str::SmolStr;

use crate::constants::{CAVERPHONE_KEY_LENGTH, CAVERPHONE_PAD};
use crate::encoder::keys::KeySet;
use crate::encoder::PhoneticEncoder;
use crate::similarity::Similarity;
use crate::util;

const STARTS: [(&str, &str); 7] = [
    ("cough", "cou2f"),
    ("rough", "rou2f"),
    ("tough", "tou2f"),
    ("trough", "trou2f"),
    ("enough", "enou2f"),
    ("gn", "2n"),
    ("mb", "m2"),
];

/// Encoder implementing the 2004 revision of the caverphone algorithm.
///
/// Keys are always ten characters long, padded with `1`s, so that
/// `"Stevenson"` and `"Stephenson"` both reduce to `"STFNSN1111"`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Caverphone;

impl Caverphone {
    /// creates a caverphone encoder
    pub const fn new() -> Caverphone {
        Caverphone
    }
}

fn encode(word: &str) -> String {
    let mut key = util::lower_letters(word);
    if key.is_empty() {
        return key;
    }
    if key.ends_with('e') {
        key.pop();
    }
    key = translate_start(key);
    key = translate_remaining(key);
    key.push_str(CAVERPHONE_PAD);
    key.truncate(CAVERPHONE_KEY_LENGTH);
    key
}

fn translate_start(key: String) -> String {
    for (prefix, replacement) in STARTS {
        if let Some(rest) = key.strip_prefix(prefix) {
            return format!("{}{}", replacement, rest);
        }
    }
    key
}

fn translate_remaining(key: String) -> String {
    let mut key = key
        .replace("cq", "2q")
        .replace("ci", "si")
        .replace("ce", "se")
        .replace("cy", "sy")
        .replace("tch", "2ch")
        .replace('c', "k")
        .replace('q', "k")
        .replace('x', "k")
        .replace('v', "f")
        .replace("dg", "2g")
        .replace("tio", "sio")
        .replace("tia", "sia")
        .replace('d', "t")
        .replace("ph", "fh")
        .replace('b', "p")
        .replace("sh", "s2")
        .replace('z', "s");

    if key.starts_with(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')) {
        key.replace_range(..1, "A");
    }
    key = key
        .chars()
        .map(|c| if matches!(c, 'a' | 'e' | 'i' | 'o' | 'u') { '3' } else { c })
        .collect();

    key = key.replace('j', "y");
    if key.starts_with("y3") {
        key.replace_range(..1, "Y");
    }
    if key.starts_with('y') {
        key.replace_range(..1, "A");
    }
    key = key
        .replace('y', "3")
        .replace("3gh3", "3kh3")
        .replace("gh", "22")
        .replace('g', "k");

    for (letter, group) in [
        ('s', 'S'),
        ('t', 'T'),
        ('p', 'P'),
        ('k', 'K'),
        ('f', 'F'),
        ('m', 'M'),
        ('n', 'N'),
    ] {
        key = squash_runs(&key, letter, group);
    }

    key = key.replace("w3", "W3").replace("wh3", "Wh3");
    if key.ends_with('w') {
        replace_last(&mut key, '3');
    }
    key = key.replace('w', "2");
    if key.starts_with('h') {
        key.replace_range(..1, "A");
    }
    key = key.replace('h', "2").replace("r3", "R3");
    if key.ends_with('r') {
        replace_last(&mut key, '3');
    }
    key = key.replace('r', "2").replace("l3", "L3");
    if key.ends_with('l') {
        replace_last(&mut key, '3');
    }
    key = key.replace('l', "2").replace('2', "");
    if key.ends_with('3') {
        replace_last(&mut key, 'A');
    }
    key.replace('3', "")
}

/// Replaces a run of the letter with a single group character.
fn squash_runs(key: &str, letter: char, group: char) -> String {
    let mut out = String::with_capacity(key.len());
    let mut in_run = false;
    for c in key.chars() {
        if c == letter {
            if !in_run {
                out.push(group);
            }
            in_run = true;
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

fn replace_last(key: &mut String, with: char) {
    key.pop();
    key.push(with);
}

impl PhoneticEncoder for Caverphone {
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

impl Similarity for Caverphone {}

impl fmt::Display for Caverphone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Caverphone")
    }
}

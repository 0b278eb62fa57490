//! The Western Airlines match rating approach.

use std::fmt;

use itertools::Itertools;
use smol_str::SmolStr;

use crate::constants::{MATCH_RATING_KEY_LENGTH, MAX_RATING, MINIMUM_RATINGS};
use crate::encoder::keys::KeySet;
use crate::encoder::PhoneticEncoder;
use crate::similarity::{Similarity, SimilarityError};
use crate::util;

/// Encoder implementing the match rating approach.
///
/// Besides a six character consonant key, the approach defines a
/// rating from 0 to 6 for a pair of words, computed by cancelling the
/// characters the words share; see
/// [`compute`](MatchRatingApproach::compute).
#[derive(Clone, Copy, Debug, Default)]
pub struct MatchRatingApproach;

impl MatchRatingApproach {
    /// creates a match rating encoder
    pub const fn new() -> MatchRatingApproach {
        MatchRatingApproach
    }

    /// Rates how alike two words sound, from 0 (dissimilar) to 6
    /// (indistinguishable).
    ///
    /// The comparison runs over the raw words uppercased; pass encoded
    /// keys to rate fingerprints instead. Words whose lengths differ
    /// by more than three rate 0, as does any rating under the
    /// minimum the combined length demands.
    ///
    /// ```
    /// use phonkey::match_rating::MatchRatingApproach;
    ///
    /// let encoder = MatchRatingApproach::new();
    /// assert_eq!(encoder.compute("Byrne", "Boern"), 5);
    /// assert_eq!(encoder.compute("Smith", "Smyth"), 5);
    /// assert_eq!(encoder.compute("left", "right"), 0);
    /// ```
    pub fn compute(&self, left: &str, right: &str) -> u8 {
        if left.is_empty() || right.is_empty() {
            return 0;
        }
        let (large, small) = if left.chars().count() >= right.chars().count() {
            (left.to_uppercase(), right.to_uppercase())
        } else {
            (right.to_uppercase(), left.to_uppercase())
        };
        let mut large: Vec<char> = large.chars().collect();
        let mut small: Vec<char> = small.chars().collect();

        if large.len().saturating_sub(small.len()) > 3 {
            return 0;
        }
        let minimum = minimum_rating(large.len() + small.len());

        cancel(&mut small, &mut large);
        small.reverse();
        large.reverse();
        cancel(&mut small, &mut large);

        let rating = usize::from(MAX_RATING).saturating_sub(large.len()) as u8;
        log::trace!("match rating {} against minimum {}", rating, minimum);
        if rating >= minimum {
            rating
        } else {
            0
        }
    }
}

/// The least rating still counting as a match for the combined length
/// of the two words.
fn minimum_rating(length_sum: usize) -> u8 {
    MINIMUM_RATINGS
        .iter()
        .find(|&&(sum, _)| length_sum <= sum)
        .map(|&(_, rating)| rating)
        .unwrap_or(0)
}

/// Removes every character of the smaller word from the larger one,
/// one matched pair at a time.
fn cancel(small: &mut Vec<char>, large: &mut Vec<char>) {
    let mut i = 0;
    while i < small.len() {
        match large.iter().position(|&c| c == small[i]) {
            Some(j) => {
                small.remove(i);
                large.remove(j);
            }
            None => i += 1,
        }
    }
}

fn build(word: &str) -> String {
    let mut name = util::upper_letters(word);
    if name.len() > 1 {
        let mut reduced = String::with_capacity(name.len());
        let mut chars = name.chars();
        if let Some(first) = chars.next() {
            reduced.push(first);
            reduced.extend(chars.filter(|&c| !util::is_vowel(c)));
        }
        name = reduced;
    }
    name = collapse_consonants(&name);
    if name.len() > MATCH_RATING_KEY_LENGTH {
        name = format!("{}{}", &name[..3], &name[name.len() - 3..]);
    }
    name
}

/// Doubled consonants encode once; doubled vowels survive.
fn collapse_consonants(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut previous: Option<char> = None;
    for c in name.chars() {
        if previous != Some(c) || util::is_vowel(c) {
            out.push(c);
        }
        previous = Some(c);
    }
    out
}

impl PhoneticEncoder for MatchRatingApproach {
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
        SmolStr::new(build(word))
    }
}

impl Similarity for MatchRatingApproach {
    /// Rates each consecutive pair of words and accepts the sequence
    /// when every pair rates the same. At least two words are needed;
    /// exactly two are vacuously similar, so callers wanting a
    /// thresholded decision for one pair should use
    /// [`compute`](MatchRatingApproach::compute).
    fn is_similar(&self, words: &[&str]) -> Result<bool, SimilarityError> {
        if words.len() < 2 {
            return Err(SimilarityError::NotEnoughWords(words.len()));
        }
        let ratings: Vec<u8> = words
            .windows(2)
            .map(|pair| self.compute(pair[1], pair[0]))
            .collect();
        Ok(ratings.iter().tuple_windows().all(|(a, b)| a == b))
    }
}

impl fmt::Display for MatchRatingApproach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MatchRatingApproach")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys() {
        let encoder = MatchRatingApproach::new();
        assert_eq!(encoder.build_key("Catherine"), "CTHRN");
        assert_eq!(encoder.build_key("Kathryn"), "KTHRYN");
        assert_eq!(encoder.build_key("Byrne"), "BYRN");
        assert_eq!(encoder.build_key("Boern"), "BRN");
        assert_eq!(encoder.build_key("Smith"), "SMTH");
        assert_eq!(encoder.build_key("Smyth"), "SMYTH");
        assert_eq!(encoder.build_key("Wednesday"), "WDNSDY");
        for word in ["Spotify", "Spotfy", "Sputfy"] {
            assert_eq!(encoder.build_key(word), "SPTFY", "{}", word);
        }
    }

    #[test]
    fn test_key_keeps_a_leading_vowel_and_doubled_vowels() {
        let encoder = MatchRatingApproach::new();
        assert_eq!(encoder.build_key("a"), "A");
        assert_eq!(encoder.build_key("Aountain"), "ANTN");
    }

    #[test]
    fn test_long_keys_keep_both_ends() {
        let encoder = MatchRatingApproach::new();
        // VNDRHDN squeezes to VND + HDN
        assert_eq!(encoder.build_key("Vanderheiden"), "VNDHDN");
    }

    #[test]
    fn test_degenerate_words() {
        let encoder = MatchRatingApproach::new();
        assert_eq!(encoder.build_key("123"), "");
        assert_eq!(encoder.build_key(""), "");
        assert!(encoder.build_keys("").is_empty());
        assert_eq!(encoder.build_keys("123").len(), 1);
    }

    #[test]
    fn test_compute_ratings() {
        let encoder = MatchRatingApproach::new();
        assert_eq!(encoder.compute("test", "TEST"), 6);
        assert_eq!(encoder.compute("Wednesday", "Wednesday"), 6);
        assert_eq!(encoder.compute("left", "right"), 0);
        assert_eq!(encoder.compute("Byrne", "Boern"), 5);
        assert_eq!(encoder.compute("Catherine", "Kathryn"), 2);
        assert_eq!(encoder.compute("CTHRN", "KTHRYN"), 4);
        assert_eq!(encoder.compute("BYRN", "BRN"), 5);
        assert_eq!(encoder.compute("SMTH", "SMYTH"), 5);
        assert_eq!(encoder.compute("Smith", "Smyth"), 5);
        assert_eq!(encoder.compute("ABCDEFG", "HIJKLMN"), 0);
    }

    #[test]
    fn test_compute_rejects_uncomparable_pairs() {
        let encoder = MatchRatingApproach::new();
        // length difference over three
        assert_eq!(encoder.compute("ABCDEFGH", "ABCD"), 0);
        assert_eq!(encoder.compute("", "anything"), 0);
        assert_eq!(encoder.compute("anything", ""), 0);
    }

    #[test]
    fn test_similarity_needs_two_words() {
        let encoder = MatchRatingApproach::new();
        assert!(matches!(
            encoder.is_similar(&[]),
            Err(SimilarityError::NotEnoughWords(0))
        ));
        assert!(matches!(
            encoder.is_similar(&["Smith"]),
            Err(SimilarityError::NotEnoughWords(1))
        ));
    }

    #[test]
    fn test_similarity_compares_pairwise_ratings() {
        let encoder = MatchRatingApproach::new();
        assert!(encoder
            .is_similar(&["Spotify", "Spotfy", "Sputfy"])
            .unwrap());
        // ratings 6 then 4 disagree
        assert!(!encoder.is_similar(&["test", "TEST", "left"]).unwrap());
        // a single pair has nothing to disagree with
        assert!(encoder.is_similar(&["left", "right"]).unwrap());
    }
}

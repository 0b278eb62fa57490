/// A word as an indexable run of characters, with window matching that
/// tolerates out-of-range positions.
///
/// The rule tables of the metaphone family probe positions relative to
/// the cursor, including positions before the start of the word, so
/// every accessor takes a signed position and answers negatively when
/// it falls outside the word.
pub struct Letters {
    chars: Vec<char>,
}

impl Letters {
    pub fn new(word: &str) -> Letters {
        Letters {
            chars: word.chars().collect(),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> isize {
        self.chars.len() as isize
    }

    #[inline(always)]
    pub fn at(&self, pos: isize) -> Option<char> {
        if pos < 0 {
            return None;
        }
        self.chars.get(pos as usize).copied()
    }

    #[inline(always)]
    pub fn has(&self, pos: isize, c: char) -> bool {
        self.at(pos) == Some(c)
    }

    /// True if any of the patterns starts at the given position and
    /// fits entirely inside the word.
    pub fn any(&self, pos: isize, patterns: &[&str]) -> bool {
        if pos < 0 || pos >= self.len() {
            return false;
        }
        let start = pos as usize;
        patterns.iter().any(|pat| {
            self.chars[start..]
                .iter()
                .copied()
                .take(pat.chars().count())
                .eq(pat.chars())
        })
    }

    /// True if the pattern occurs anywhere in the word.
    pub fn contains(&self, pattern: &str) -> bool {
        (0..self.len()).any(|pos| self.any(pos, &[pattern]))
    }

    #[inline(always)]
    pub fn vowel(&self, pos: isize) -> bool {
        matches!(self.at(pos), Some('A' | 'E' | 'I' | 'O' | 'U'))
    }
}

#[inline(always)]
pub fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'A' | 'E' | 'I' | 'O' | 'U' | 'a' | 'e' | 'i' | 'o' | 'u'
    )
}

/// Uppercases a word and keeps only the letters A through Z. Full case
/// mapping applies before the filter, so ß contributes SS.
#[inline(always)]
pub fn upper_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase())
        .collect()
}

/// Lowercases a word and keeps only the letters a through z.
#[inline(always)]
pub fn lower_letters(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Collapses runs of the same character into a single occurrence.
pub fn collapse_adjacent(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous: Option<char> = None;
    for c in value.chars() {
        if previous != Some(c) {
            out.push(c);
        }
        previous = Some(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_window_matching() {
        let letters = Letters::new("SCHMIDT");
        assert!(letters.any(0, &["SCH"]));
        assert!(letters.any(1, &["CH", "CZ"]));
        assert!(!letters.any(-1, &["SCH"]));
        assert!(!letters.any(5, &["DTX"]));
        assert!(!letters.any(7, &["S"]));
        assert!(letters.has(6, 'T'));
        assert!(!letters.has(-2, 'T'));
        assert_eq!(letters.at(3), Some('M'));
        assert_eq!(letters.at(9), None);
    }

    #[test]
    fn test_letters_vowel_and_contains() {
        let letters = Letters::new("WITZER");
        assert!(letters.vowel(1));
        assert!(!letters.vowel(0));
        assert!(!letters.vowel(-1));
        assert!(letters.contains("WITZ"));
        assert!(letters.contains("R"));
        assert!(!letters.contains("CZ"));
    }

    #[test]
    fn test_case_filters() {
        assert_eq!(upper_letters("O'Brien"), "OBRIEN");
        assert_eq!(upper_letters("Müller"), "MLLER");
        assert_eq!(upper_letters("Straße"), "STRASSE");
        assert_eq!(upper_letters("123"), "");
        assert_eq!(lower_letters("Whittle!"), "whittle");
    }

    #[test]
    fn test_collapse_adjacent() {
        assert_eq!(collapse_adjacent("AABBA"), "ABA");
        assert_eq!(collapse_adjacent("605507"), "60507");
        assert_eq!(collapse_adjacent(""), "");
        assert_eq!(collapse_adjacent("AAA"), "A");
    }
}

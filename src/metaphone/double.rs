//! Double metaphone, the dual-output revision of the metaphone rules.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::constants::DEFAULT_KEY_LENGTH;
use crate::encoder::keys::KeySet;
use crate::encoder::PhoneticEncoder;
use crate::similarity::Similarity;
use crate::util::Letters;

const SILENT_START: [&str; 5] = ["GN", "KN", "PN", "WR", "PS"];
const GERMANIC_PREFIXES: [&str; 3] = ["VAN ", "VON ", "SCH"];
const GREEK_CH_STEMS: [&str; 6] = ["HARAC", "HARIS", "HOR", "HYM", "HIA", "HEM"];
const HARD_CH_FOLLOWERS: [&str; 10] = ["L", "R", "N", "M", "B", "H", "F", "V", "W", " "];
const SOFT_G_STEMS: [&str; 12] = [
    "Y", "ES", "EP", "EB", "EL", "EY", "IB", "IL", "IN", "IE", "EI", "ER",
];

/// The primary and alternate reading accumulated during one build.
struct Buffers {
    primary: String,
    secondary: String,
    diverged: bool,
}

impl Buffers {
    fn new(capacity: usize) -> Buffers {
        Buffers {
            primary: String::with_capacity(capacity),
            secondary: String::with_capacity(capacity),
            diverged: false,
        }
    }

    fn add(&mut self, text: &str) {
        self.primary.push_str(text);
        self.secondary.push_str(text);
    }

    /// Appends diverging readings; a space as the alternate marks a
    /// sound present in the primary reading only.
    fn add_pair(&mut self, main: &str, alternate: &str) {
        self.primary.push_str(main);
        self.diverged = true;
        if alternate != " " {
            self.secondary.push_str(alternate);
        }
    }

    fn within(&self, max: Option<usize>) -> bool {
        max.map_or(true, |max| {
            self.primary.len() < max && self.secondary.len() < max
        })
    }

    fn into_keys(self, max: Option<usize>) -> KeySet {
        let Buffers {
            mut primary,
            mut secondary,
            diverged,
        } = self;
        if let Some(max) = max {
            primary.truncate(max);
            secondary.truncate(max);
        }
        if diverged {
            KeySet::pair(SmolStr::new(primary), SmolStr::new(secondary))
        } else {
            KeySet::single(SmolStr::new(primary))
        }
    }
}

/// Encoder implementing the double metaphone algorithm.
///
/// Builds a primary key for every word and, when the spelling admits
/// two plausible pronunciations, an alternate key as well, so that
/// `"Schmidt"` yields `XMT` with the alternate `SMT`.
///
/// ```
/// use phonkey::encoder::PhoneticEncoder;
/// use phonkey::metaphone::DoubleMetaphone;
///
/// let encoder = DoubleMetaphone::new();
/// let keys = encoder.build_keys("Smith");
/// assert_eq!(keys.primary(), Some("SM0"));
/// assert_eq!(keys.alternate(), Some("XMT"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DoubleMetaphone {
    max_length: Option<usize>,
}

impl DoubleMetaphone {
    /// creates an encoder generating keys of up to 4 characters
    pub const fn new() -> DoubleMetaphone {
        DoubleMetaphone {
            max_length: Some(DEFAULT_KEY_LENGTH),
        }
    }

    /// creates an encoder generating keys of up to the given length
    pub const fn with_max_length(max_length: usize) -> DoubleMetaphone {
        DoubleMetaphone {
            max_length: Some(max_length),
        }
    }

    /// creates an encoder whose key length is not limited
    pub const fn unbounded() -> DoubleMetaphone {
        DoubleMetaphone { max_length: None }
    }
}

impl Default for DoubleMetaphone {
    fn default() -> DoubleMetaphone {
        DoubleMetaphone::new()
    }
}

fn slavo_germanic(word: &str) -> bool {
    word.contains('W') || word.contains('K') || word.contains("CZ") || word.contains("WITZ")
}

impl PhoneticEncoder for DoubleMetaphone {
    fn build_keys(&self, word: &str) -> KeySet {
        if word.is_empty() {
            return KeySet::new();
        }
        log::trace!("Beginning dual-key build: {:?}", word);

        let word = word.to_uppercase();
        let letters = Letters::new(&word);
        let length = letters.len();
        let last = length - 1;
        let slavo = slavo_germanic(&word);

        let mut buffers = Buffers::new(word.len());
        let mut n: isize = 0;

        if letters.any(0, &SILENT_START) {
            n += 1;
        }
        if letters.has(0, 'X') {
            buffers.add("S");
            n += 1;
        }

        while n < length && buffers.within(self.max_length) {
            let c = match letters.at(n) {
                Some(c) => c,
                None => break,
            };
            match c {
                'A' | 'E' | 'I' | 'O' | 'U' | 'Y' => {
                    if n == 0 {
                        buffers.add("A");
                    }
                    n += 1;
                }
                'B' => {
                    buffers.add("P");
                    n += if letters.has(n + 1, 'B') { 2 } else { 1 };
                }
                'Ç' => {
                    buffers.add("S");
                    n += 1;
                }
                'C' => {
                    // germanic spellings like "bacher"
                    if n > 1
                        && !letters.vowel(n - 2)
                        && letters.any(n - 1, &["ACH"])
                        && !letters.has(n + 2, 'I')
                        && (!letters.has(n + 2, 'E')
                            || letters.any(n - 2, &["BACHER", "MACHER"]))
                    {
                        buffers.add("K");
                        n += 2;
                        continue;
                    }
                    if n == 0 && letters.any(n, &["CAESAR"]) {
                        buffers.add("S");
                        n += 2;
                        continue;
                    }
                    // italian "chianti"
                    if letters.any(n, &["CHIA"]) {
                        buffers.add("K");
                        n += 2;
                        continue;
                    }
                    if letters.any(n, &["CH"]) {
                        if n > 0 && letters.any(n, &["CHAE"]) {
                            buffers.add_pair("K", "X");
                            n += 2;
                            continue;
                        }
                        // greek roots like "chorus"
                        if n == 0
                            && letters.any(n + 1, &GREEK_CH_STEMS)
                            && !letters.any(0, &["CHORE"])
                        {
                            buffers.add("K");
                            n += 2;
                            continue;
                        }
                        if letters.any(0, &GERMANIC_PREFIXES)
                            || letters.any(n - 2, &["ORCHES", "ARCHIT", "ORCHID"])
                            || letters.any(n + 2, &["T", "S"])
                            || ((n == 0 || letters.any(n - 1, &["A", "O", "U", "E"]))
                                && letters.any(n + 2, &HARD_CH_FOLLOWERS))
                        {
                            buffers.add("K");
                        } else if n > 0 {
                            if letters.any(0, &["MC"]) {
                                buffers.add("K");
                            } else {
                                buffers.add_pair("X", "K");
                            }
                        } else {
                            buffers.add("X");
                        }
                        n += 2;
                        continue;
                    }
                    // polish "czerny"
                    if letters.any(n, &["CZ"]) && !letters.any(n - 2, &["WICZ"]) {
                        buffers.add_pair("S", "X");
                        n += 2;
                        continue;
                    }
                    // "focaccia"
                    if letters.any(n + 1, &["CIA"]) {
                        buffers.add("X");
                        n += 3;
                        continue;
                    }
                    if letters.any(n, &["CC"]) && !(n == 1 && letters.has(0, 'M')) {
                        if letters.any(n + 2, &["I", "E", "H"]) && !letters.any(n + 2, &["HU"]) {
                            if (n == 1 && letters.has(n - 1, 'A'))
                                || letters.any(n - 1, &["UCCEE", "UCCES"])
                            {
                                buffers.add("KS");
                            } else {
                                buffers.add("X");
                            }
                            n += 3;
                            continue;
                        }
                        buffers.add("K");
                        n += 2;
                        continue;
                    }
                    if letters.any(n, &["CK", "CG", "CQ"]) {
                        buffers.add("K");
                        n += 2;
                        continue;
                    }
                    if letters.any(n, &["CI", "CE", "CY"]) {
                        if letters.any(n, &["CIO", "CIE", "CIA"]) {
                            buffers.add_pair("S", "X");
                        } else {
                            buffers.add("S");
                        }
                        n += 2;
                        continue;
                    }
                    buffers.add("K");
                    if letters.any(n + 1, &[" C", " Q", " G"]) {
                        n += 3;
                    } else if letters.any(n + 1, &["C", "K", "Q"])
                        && !letters.any(n + 1, &["CE", "CI"])
                    {
                        n += 2;
                    } else {
                        n += 1;
                    }
                }
                'D' => {
                    if letters.any(n, &["DG"]) {
                        if letters.any(n + 2, &["I", "E", "Y"]) {
                            buffers.add("J");
                            n += 3;
                        } else {
                            buffers.add("TK");
                            n += 2;
                        }
                    } else if letters.any(n, &["DT", "DD"]) {
                        buffers.add("T");
                        n += 2;
                    } else {
                        buffers.add("T");
                        n += 1;
                    }
                }
                'F' => {
                    n += if letters.has(n + 1, 'F') { 2 } else { 1 };
                    buffers.add("F");
                }
                'G' => {
                    if letters.has(n + 1, 'H') {
                        if n > 0 && !letters.vowel(n - 1) {
                            buffers.add("K");
                            n += 2;
                            continue;
                        }
                        if n == 0 {
                            if letters.has(n + 2, 'I') {
                                buffers.add("J");
                            } else {
                                buffers.add("K");
                            }
                            n += 2;
                            continue;
                        }
                        // silent as in "hugh", "bough", "broughton"
                        if (n > 1 && letters.any(n - 2, &["B", "H", "D"]))
                            || (n > 2 && letters.any(n - 3, &["B", "H", "D"]))
                            || (n > 3 && letters.any(n - 4, &["B", "H"]))
                        {
                            n += 2;
                            continue;
                        }
                        if n > 2
                            && letters.has(n - 1, 'U')
                            && letters.any(n - 3, &["C", "G", "L", "R", "T"])
                        {
                            // "laugh", "cough", "rough", "tough"
                            buffers.add("F");
                        } else if n > 0 && !letters.has(n - 1, 'I') {
                            buffers.add("K");
                        }
                        n += 2;
                        continue;
                    }
                    if letters.has(n + 1, 'N') {
                        if n == 1 && letters.vowel(0) && !slavo {
                            buffers.add_pair("KN", "N");
                        } else if !letters.any(n + 2, &["EY"])
                            && !letters.has(n + 1, 'Y')
                            && !slavo
                        {
                            buffers.add_pair("N", "KN");
                        } else {
                            buffers.add("KN");
                        }
                        n += 2;
                        continue;
                    }
                    // "tagliaro"
                    if letters.any(n + 1, &["LI"]) && !slavo {
                        buffers.add_pair("KL", "L");
                        n += 2;
                        continue;
                    }
                    if n == 0 && letters.any(n + 1, &SOFT_G_STEMS) {
                        buffers.add_pair("K", "J");
                        n += 2;
                        continue;
                    }
                    if letters.any(n + 1, &["Y", "ER"])
                        && !letters.any(0, &["DANGER", "RANGER", "MANGER"])
                        && !letters.any(n - 1, &["E", "I"])
                        && !letters.any(n - 1, &["RGY", "OGY"])
                    {
                        buffers.add_pair("K", "J");
                        n += 2;
                        continue;
                    }
                    if letters.any(n + 1, &["E", "I", "Y"]) || letters.any(n - 1, &["AGGI", "OGGI"])
                    {
                        if letters.any(0, &GERMANIC_PREFIXES) || letters.any(n + 1, &["ET"]) {
                            buffers.add("K");
                        } else if letters.any(n + 1, &["IER"]) {
                            buffers.add("J");
                        } else {
                            buffers.add_pair("J", "K");
                        }
                        n += 2;
                        continue;
                    }
                    buffers.add("K");
                    n += if letters.has(n + 1, 'G') { 2 } else { 1 };
                }
                'H' => {
                    // only sounds between vowels or at the start
                    if (n == 0 || letters.vowel(n - 1)) && letters.vowel(n + 1) {
                        buffers.add("H");
                        n += 2;
                    } else {
                        n += 1;
                    }
                }
                'J' => {
                    // spanish "jose", "san jacinto"
                    if letters.any(n, &["JOSE"]) || letters.any(0, &["SAN "]) {
                        if (n == 0 && letters.has(n + 4, ' ')) || letters.any(0, &["SAN "]) {
                            buffers.add("H");
                        } else {
                            buffers.add_pair("J", "H");
                        }
                        n += 1;
                        continue;
                    }
                    if n == 0 && !letters.any(n, &["JOSE"]) {
                        buffers.add_pair("J", "A");
                    } else if letters.vowel(n - 1) && !slavo && letters.any(n + 1, &["A", "O"]) {
                        buffers.add_pair("J", "H");
                    } else if n == last {
                        buffers.add_pair("J", " ");
                    } else if !letters.any(n + 1, &["L", "T", "K", "S", "N", "M", "B", "Z"])
                        && !letters.any(n - 1, &["S", "K", "L"])
                    {
                        buffers.add("J");
                    }
                    n += if letters.has(n + 1, 'J') { 2 } else { 1 };
                }
                'K' => {
                    n += if letters.has(n + 1, 'K') { 2 } else { 1 };
                    buffers.add("K");
                }
                'L' => {
                    if letters.has(n + 1, 'L') {
                        // spanish "cabrillo", "gallegos"
                        if (n == length - 3 && letters.any(n - 1, &["ILLO", "ILLA", "ALLE"]))
                            || ((letters.any(last - 1, &["AS", "OS"])
                                || letters.any(last, &["A", "O"]))
                                && letters.any(n - 1, &["ALLE"]))
                        {
                            buffers.add_pair("L", " ");
                            n += 2;
                            continue;
                        }
                        n += 2;
                    } else {
                        n += 1;
                    }
                    buffers.add("L");
                }
                'M' => {
                    if (letters.any(n - 1, &["UMB"])
                        && (n + 1 == last || letters.any(n + 2, &["ER"])))
                        || letters.has(n + 1, 'M')
                    {
                        n += 2;
                    } else {
                        n += 1;
                    }
                    buffers.add("M");
                }
                'N' => {
                    n += if letters.has(n + 1, 'N') { 2 } else { 1 };
                    buffers.add("N");
                }
                'Ñ' => {
                    n += 1;
                    buffers.add("N");
                }
                'P' => {
                    if letters.has(n + 1, 'H') {
                        buffers.add("F");
                        n += 2;
                        continue;
                    }
                    n += if letters.any(n + 1, &["P", "B"]) { 2 } else { 1 };
                    buffers.add("P");
                }
                'Q' => {
                    n += if letters.has(n + 1, 'Q') { 2 } else { 1 };
                    buffers.add("K");
                }
                'R' => {
                    // french ending as in "rogier"
                    if n == last
                        && !slavo
                        && letters.any(n - 2, &["IE"])
                        && !letters.any(n - 4, &["ME", "MA"])
                    {
                        buffers.add_pair("", "R");
                    } else {
                        buffers.add("R");
                    }
                    n += if letters.has(n + 1, 'R') { 2 } else { 1 };
                }
                'S' => {
                    // silent as in "island", "isle"
                    if letters.any(n - 1, &["ISL", "YSL"]) {
                        n += 1;
                        continue;
                    }
                    if n == 0 && letters.any(n, &["SUGAR"]) {
                        buffers.add_pair("X", "S");
                        n += 1;
                        continue;
                    }
                    if letters.any(n, &["SH"]) {
                        // germanic
                        if letters.any(n + 1, &["HEIM", "HOEK", "HOLM", "HOLZ"]) {
                            buffers.add("S");
                        } else {
                            buffers.add("X");
                        }
                        n += 2;
                        continue;
                    }
                    if letters.any(n, &["SIO", "SIA"]) || letters.any(n, &["SIAN"]) {
                        if !slavo {
                            buffers.add_pair("S", "X");
                        } else {
                            buffers.add("S");
                        }
                        n += 3;
                        continue;
                    }
                    // "smith" matches "schmidt", "snider" matches "schneider"
                    if (n == 0 && letters.any(n + 1, &["M", "N", "L", "W"]))
                        || letters.has(n + 1, 'Z')
                    {
                        buffers.add_pair("S", "X");
                        n += if letters.has(n + 1, 'Z') { 2 } else { 1 };
                        continue;
                    }
                    if letters.any(n, &["SC"]) {
                        if letters.has(n + 2, 'H') {
                            if letters.any(n + 3, &["OO", "ER", "EN", "UY", "ED", "EM"]) {
                                // "schermerhorn", "schenker"
                                if letters.any(n + 3, &["ER", "EN"]) {
                                    buffers.add_pair("X", "SK");
                                } else {
                                    buffers.add("SK");
                                }
                                n += 3;
                                continue;
                            }
                            if n == 0 && !letters.vowel(3) && !letters.has(3, 'W') {
                                buffers.add_pair("X", "S");
                            } else {
                                buffers.add("X");
                            }
                            n += 3;
                            continue;
                        }
                        if letters.any(n + 2, &["I", "E", "Y"]) {
                            buffers.add("S");
                        } else {
                            buffers.add("SK");
                        }
                        n += 3;
                        continue;
                    }
                    // french ending as in "resnais", "artois"
                    if n == last && letters.any(n - 2, &["AI", "OI"]) {
                        buffers.add_pair("", "S");
                    } else {
                        buffers.add("S");
                    }
                    n += if letters.any(n + 1, &["S", "Z"]) { 2 } else { 1 };
                }
                'T' => {
                    if letters.any(n, &["TION"]) {
                        buffers.add("X");
                        n += 3;
                        continue;
                    }
                    if letters.any(n, &["TIA", "TCH"]) {
                        buffers.add("X");
                        n += 3;
                        continue;
                    }
                    if letters.any(n, &["TH", "TTH"]) {
                        // "thomas", "thames" or germanic
                        if letters.any(n + 2, &["OM", "AM"]) || letters.any(0, &GERMANIC_PREFIXES)
                        {
                            buffers.add("T");
                        } else {
                            buffers.add_pair("0", "T");
                        }
                        n += 2;
                        continue;
                    }
                    n += if letters.any(n + 1, &["T", "D"]) { 2 } else { 1 };
                    buffers.add("T");
                }
                'V' => {
                    n += if letters.has(n + 1, 'V') { 2 } else { 1 };
                    buffers.add("F");
                }
                'W' => {
                    if letters.any(n, &["WR"]) {
                        buffers.add("R");
                        n += 2;
                        continue;
                    }
                    if n == 0 && (letters.vowel(n + 1) || letters.any(n, &["WH"])) {
                        // "wasserman" should match "vasserman"
                        if letters.vowel(n + 1) {
                            buffers.add_pair("A", "F");
                        } else {
                            buffers.add("A");
                        }
                        // the word-final checks below still apply
                    }
                    if (n == last && letters.vowel(n - 1))
                        || letters.any(n - 1, &["EWSKI", "EWSKY", "OWSKI", "OWSKY"])
                        || letters.any(0, &["SCH"])
                    {
                        // "arnow" should match "arnoff"
                        buffers.add_pair("", "F");
                        n += 1;
                        continue;
                    }
                    // polish "filipowicz"
                    if letters.any(n, &["WICZ", "WITZ"]) {
                        buffers.add_pair("TS", "FX");
                        n += 4;
                        continue;
                    }
                    n += 1;
                }
                'X' => {
                    // french ending as in "breaux"
                    if !(n == last
                        && (letters.any(n - 3, &["IAU", "EAU"])
                            || letters.any(n - 2, &["AU", "OU"])))
                    {
                        buffers.add("KS");
                    }
                    n += if letters.any(n + 1, &["C", "X"]) { 2 } else { 1 };
                }
                'Z' => {
                    // chinese pinyin as in "zhao"
                    if letters.has(n + 1, 'H') {
                        buffers.add("J");
                        n += 2;
                        continue;
                    }
                    if letters.any(n + 1, &["ZO", "ZI", "ZA"])
                        || (slavo && n > 0 && !letters.has(n - 1, 'T'))
                    {
                        buffers.add_pair("S", "TS");
                    } else {
                        buffers.add("S");
                    }
                    n += if letters.has(n + 1, 'Z') { 2 } else { 1 };
                }
                _ => n += 1,
            }
        }

        buffers.into_keys(self.max_length)
    }
}

impl Similarity for DoubleMetaphone {}

impl fmt::Display for DoubleMetaphone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max_length {
            Some(max) => write!(f, "DoubleMetaphone_{}", max),
            None => write!(f, "DoubleMetaphone_unbounded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys_for(word: &str) -> Vec<String> {
        DoubleMetaphone::new()
            .build_keys(word)
            .iter()
            .map(|code| code.to_string())
            .collect()
    }

    #[test]
    fn test_spelling_variants_share_a_key() {
        for word in ["Spotify", "Spotfy", "Sputfi", "Spotifi"] {
            assert_eq!(keys_for(word), ["SPTF"], "{}", word);
        }
        for phrase in [
            "United Air Lines",
            "United Aire Lines",
            "Unitid Air Line",
        ] {
            assert_eq!(keys_for(phrase), ["ANTT"], "{}", phrase);
        }
        for word in ["Airbnb", "Airbandb"] {
            assert_eq!(keys_for(word), ["ARPN"], "{}", word);
        }
    }

    #[test]
    fn test_alternate_keys_for_ambiguous_spellings() {
        assert_eq!(keys_for("Smith"), ["SM0", "XMT"]);
        assert_eq!(keys_for("Schmidt"), ["XMT", "SMT"]);
        assert_eq!(keys_for("Snider"), ["SNTR", "XNTR"]);
        assert_eq!(keys_for("Schneider"), ["XNTR", "SNTR"]);
        assert_eq!(keys_for("Jose"), ["JS", "HS"]);
        assert_eq!(keys_for("Xavier"), ["SF", "SFR"]);
        assert_eq!(keys_for("cabrillo"), ["KPRL", "KPR"]);
        assert_eq!(keys_for("gallegos"), ["KLKS", "KKS"]);
        assert_eq!(keys_for("Michael"), ["MKL", "MXL"]);
        assert_eq!(keys_for("czerny"), ["SRN", "XRN"]);
        assert_eq!(keys_for("tagliaro"), ["TKLR", "TLR"]);
        assert_eq!(keys_for("biaggi"), ["PJ", "PK"]);
        assert_eq!(keys_for("bajador"), ["PJTR", "PHTR"]);
        assert_eq!(keys_for("sugar"), ["XKR", "SKR"]);
        assert_eq!(keys_for("Schermerhorn"), ["XRM", "SKRM"]);
        assert_eq!(keys_for("resnais"), ["RSN", "RSNS"]);
        assert_eq!(keys_for("artois"), ["ART", "ARTS"]);
        assert_eq!(keys_for("rogier"), ["RJ", "RJR"]);
        assert_eq!(keys_for("thumb"), ["0M", "TM"]);
        assert_eq!(keys_for("Wasserman"), ["ASRM", "FSRM"]);
        assert_eq!(keys_for("Filipowicz"), ["FLPT", "FLPF"]);
        assert_eq!(keys_for("Arnow"), ["ARN", "ARNF"]);
        assert_eq!(keys_for("Womo"), ["AM", "FM"]);
        assert_eq!(keys_for("Knuth"), ["N0", "NT"]);
        assert_eq!(keys_for("Jankelowicz"), ["JNKL", "ANKL"]);
    }

    #[test]
    fn test_single_key_words() {
        assert_eq!(keys_for("Thomas"), ["TMS"]);
        assert_eq!(keys_for("Thames"), ["TMS"]);
        assert_eq!(keys_for("San Jacinto"), ["SNHS"]);
        assert_eq!(keys_for("caesar"), ["SSR"]);
        assert_eq!(keys_for("chianti"), ["KNT"]);
        assert_eq!(keys_for("McHugh"), ["MK"]);
        assert_eq!(keys_for("focaccia"), ["FKX"]);
        assert_eq!(keys_for("bellocchio"), ["PLX"]);
        assert_eq!(keys_for("bacchus"), ["PKS"]);
        assert_eq!(keys_for("accident"), ["AKST"]);
        assert_eq!(keys_for("succeed"), ["SKST"]);
        assert_eq!(keys_for("bacci"), ["PX"]);
        assert_eq!(keys_for("McClellan"), ["MKLL"]);
        assert_eq!(keys_for("edge"), ["AJ"]);
        assert_eq!(keys_for("Edgar"), ["ATKR"]);
        assert_eq!(keys_for("ghislane"), ["JLN"]);
        assert_eq!(keys_for("hugh"), ["H"]);
        assert_eq!(keys_for("laugh"), ["LF"]);
        assert_eq!(keys_for("cagney"), ["KKN"]);
        assert_eq!(keys_for("Yankelovich"), ["ANKL"]);
        assert_eq!(keys_for("island"), ["ALNT"]);
        assert_eq!(keys_for("school"), ["SKL"]);
        assert_eq!(keys_for("hochmeier"), ["HKMR"]);
        assert_eq!(keys_for("dumb"), ["TM"]);
        assert_eq!(keys_for("campbell"), ["KMPL"]);
        assert_eq!(keys_for("raspberry"), ["RSPR"]);
        assert_eq!(keys_for("breaux"), ["PR"]);
        assert_eq!(keys_for("zhao"), ["J"]);
        assert_eq!(keys_for("Arnoff"), ["ARNF"]);
        assert_eq!(keys_for("Uomo"), ["AM"]);
        assert_eq!(keys_for("wright"), ["RT"]);
        assert_eq!(keys_for("McLaughlin"), ["MKLF"]);
        assert_eq!(keys_for("number"), ["NMR"]);
        assert_eq!(keys_for("lumber"), ["LMR"]);
    }

    #[test]
    fn test_accented_characters() {
        assert_eq!(keys_for("Peña"), ["PN"]);
        assert_eq!(keys_for("François"), ["FRNS"]);
        assert_eq!(keys_for("çñ"), ["SN"]);
    }

    #[test]
    fn test_degenerate_words() {
        let encoder = DoubleMetaphone::new();
        assert!(encoder.build_keys("").is_empty());
        assert_eq!(keys_for("h"), [""]);
        assert_eq!(keys_for("a"), ["A"]);
        assert_eq!(keys_for("ps"), ["S"]);
        assert_eq!(keys_for("X"), ["S"]);
    }

    #[test]
    fn test_unbounded_keys() {
        let encoder = DoubleMetaphone::unbounded();
        let keys = encoder.build_keys("Jankelowicz");
        assert_eq!(keys.primary(), Some("JNKLTS"));
        assert_eq!(keys.alternate(), Some("ANKLFX"));
        let keys = encoder.build_keys("Filipowicz");
        assert_eq!(keys.primary(), Some("FLPTS"));
        assert_eq!(keys.alternate(), Some("FLPFX"));
        assert_eq!(
            encoder.build_keys("Encyclopedia").primary(),
            Some("ANSKLPT")
        );
    }

    #[test]
    fn test_build_key_returns_the_primary() {
        let encoder = DoubleMetaphone::new();
        assert_eq!(encoder.build_key("Schmidt"), "XMT");
        assert_eq!(encoder.build_key(""), "");
    }

    #[test]
    fn test_similarity() {
        let encoder = DoubleMetaphone::new();
        assert!(encoder
            .is_similar(&["Spotify", "Spotfy", "Sputfi", "Spotifi"])
            .unwrap());
        assert!(encoder.is_similar(&["Airbnb", "Airbandb"]).unwrap());
        assert!(!encoder.is_similar(&["Smith", "Thomas"]).unwrap());
    }

    #[test]
    fn test_display_identity() {
        assert_eq!(DoubleMetaphone::new().to_string(), "DoubleMetaphone_4");
        assert_eq!(
            DoubleMetaphone::unbounded().to_string(),
            "DoubleMetaphone_unbounded"
        );
    }
}

/*! Phonetic key generation and name matching.

Implements the classic phonetic fingerprint algorithms: Soundex,
Metaphone and Double Metaphone, Caverphone (in its 2004 revision),
NYSIIS, the Kölner Phonetik and the match rating approach. Every
encoder reduces a word to one or more short codes under which
similar-sounding words collide, which makes the codes usable as fuzzy
index keys for names.

# Usage examples

```
use phonkey::encoder::PhoneticEncoder;
use phonkey::similarity::Similarity;
use phonkey::soundex::Soundex;

let encoder = Soundex::new();
assert_eq!(encoder.build_key("Knuth"), "K530");
assert!(encoder.is_similar(&["Spotify", "Spotfy", "Sputfy"]).unwrap());
```

Encoders differing in output shape share the
[`PhoneticEncoder`](crate::encoder::PhoneticEncoder) trait; Double
Metaphone is the one producing two keys per word, and the match
rating approach additionally rates word pairs directly.

*/

#![warn(missing_docs)]
pub mod caverphone;
pub mod cologne;
pub mod encoder;
pub mod match_rating;
pub mod metaphone;
pub mod nysiis;
pub mod similarity;
pub mod soundex;

pub(crate) mod constants;
pub(crate) mod util;

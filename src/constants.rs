pub const DEFAULT_KEY_LENGTH: usize = 4;

pub const CAVERPHONE_KEY_LENGTH: usize = 10;
pub const CAVERPHONE_PAD: &str = "1111111111";

pub const NYSIIS_KEY_LENGTH: usize = 6;

pub const MATCH_RATING_KEY_LENGTH: usize = 6;
pub const MAX_RATING: u8 = 6;

/// Minimum acceptable rating per combined key length, as
/// (largest length sum, minimum rating) rows checked in order.
pub const MINIMUM_RATINGS: [(usize, u8); 4] = [(4, 5), (7, 4), (11, 3), (12, 2)];

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn test_CAVERPHONE_PAD_covers_key_length() {
        assert_eq!(CAVERPHONE_PAD.len(), CAVERPHONE_KEY_LENGTH);
        assert!(CAVERPHONE_PAD.chars().all(|c| c == '1'));
    }

    #[test]
    fn test_MINIMUM_RATINGS_rows_are_ordered() {
        for window in MINIMUM_RATINGS.windows(2) {
            assert!(window[0].0 < window[1].0);
            assert!(window[0].1 > window[1].1);
        }
        for (_, rating) in MINIMUM_RATINGS {
            assert!(rating <= MAX_RATING);
        }
    }

    #[test]
    fn test_MAX_RATING_matches_key_length() {
        assert_eq!(MAX_RATING as usize, MATCH_RATING_KEY_LENGTH);
    }
}

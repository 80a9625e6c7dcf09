use super::catalog::Polarity;

pub const LIKERT_MIN: i64 = 1;
pub const LIKERT_MAX: i64 = 5;
const POINTS_PER_STEP: i64 = 25;

/// Value reported by [`normalize_or_neutral`] for answers outside the Likert range.
pub const NEUTRAL_FALLBACK: u8 = 0;

/// Map a raw 1–5 answer onto {0, 25, 50, 75, 100}; `None` when the answer is out of range.
pub fn normalize(polarity: Polarity, raw: i64) -> Option<u8> {
    if !(LIKERT_MIN..=LIKERT_MAX).contains(&raw) {
        return None;
    }

    let steps = match polarity {
        Polarity::Positive => raw - LIKERT_MIN,
        Polarity::Negative => LIKERT_MAX - raw,
    };

    Some((steps * POINTS_PER_STEP) as u8)
}

pub fn normalize_or_neutral(polarity: Polarity, raw: i64) -> u8 {
    normalize(polarity, raw).unwrap_or(NEUTRAL_FALLBACK)
}

/// Parse a textual Likert answer such as `"4"` or `" 2 "`.
pub fn parse_likert(raw: &str) -> Option<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|value| (LIKERT_MIN..=LIKERT_MAX).contains(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn positive_scale_ascends_in_quarter_steps() {
        let scores: Vec<_> = (1..=5)
            .map(|raw| normalize(Polarity::Positive, raw))
            .collect();
        assert_eq!(
            scores,
            vec![Some(0), Some(25), Some(50), Some(75), Some(100)]
        );
    }

    #[test]
    fn negative_scale_descends_in_quarter_steps() {
        let scores: Vec<_> = (1..=5)
            .map(|raw| normalize(Polarity::Negative, raw))
            .collect();
        assert_eq!(
            scores,
            vec![Some(100), Some(75), Some(50), Some(25), Some(0)]
        );
    }

    #[test]
    fn out_of_range_answers_fall_back_to_neutral() {
        for raw in [0, 6, -3, 42] {
            assert_eq!(normalize(Polarity::Positive, raw), None);
            assert_eq!(normalize_or_neutral(Polarity::Negative, raw), NEUTRAL_FALLBACK);
        }
    }

    #[test]
    fn parse_likert_rejects_text_and_range_errors() {
        assert_eq!(parse_likert(" 4 "), Some(4));
        assert_eq!(parse_likert("sempre"), None);
        assert_eq!(parse_likert("6"), None);
        assert_eq!(parse_likert(""), None);
    }

    proptest! {
        #[test]
        fn polarities_are_exact_complements(raw in 1i64..=5) {
            let positive = normalize(Polarity::Positive, raw).expect("in range");
            let negative = normalize(Polarity::Negative, raw).expect("in range");
            prop_assert_eq!(u16::from(positive) + u16::from(negative), 100);
        }

        #[test]
        fn normalized_points_stay_within_bounds(raw in any::<i64>()) {
            if let Some(points) = normalize(Polarity::Negative, raw) {
                prop_assert!(points <= 100);
                prop_assert_eq!(points % 25, 0);
            }
        }
    }
}

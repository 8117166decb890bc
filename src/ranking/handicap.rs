use crate::domain::HandicapMap;

/// A player's handicap, defaulting to 0 when unset.
pub fn handicap_for(handicaps: &HandicapMap, player: &str) -> u32 {
    handicaps.get(player).copied().unwrap_or(0)
}

/// Apply (or skip) the handicap adjustment to a raw score. Handicaps are
/// non-negative, so an adjusted score is never above the raw one.
pub fn normalize(raw: i32, handicap: u32, apply: bool) -> i32 {
    if apply {
        raw - handicap as i32
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn missing_handicap_defaults_to_zero() {
        let handicaps = HashMap::from([("Kondo".to_string(), 8)]);
        assert_eq!(handicap_for(&handicaps, "Kondo"), 8);
        assert_eq!(handicap_for(&handicaps, "Hiki"), 0);
    }

    #[test]
    fn normalize_is_identity_without_handicap_view() {
        assert_eq!(normalize(95, 12, false), 95);
        assert_eq!(normalize(95, 12, true), 83);
        assert_eq!(normalize(95, 0, true), 95);
    }

    #[test]
    fn raising_a_handicap_never_raises_the_adjusted_score() {
        let raw = 88;
        let mut previous = normalize(raw, 0, true);
        for hc in 1..=20 {
            let adjusted = normalize(raw, hc, true);
            assert!(adjusted <= previous);
            previous = adjusted;
        }
    }
}

//! Ratio scoring
//!
//! A ratio is "nice" when it lands on a human-friendly multiplier. Scores are
//! distances in log10 space, so being 2x too big costs the same as being 2x
//! too small. Lower is better; a nice number scores exactly zero.

pub use crate::constants::scoring::NICE_NUMBERS;

/// Log10 distance from `ratio` to the closest nice multiplier.
pub fn score_ratio(ratio: f64) -> f64 {
    NICE_NUMBERS
        .iter()
        .map(|nice| distance(ratio, *nice))
        .fold(f64::INFINITY, f64::min)
}

/// The nice multiplier `ratio` scores against.
pub fn nearest_nice(ratio: f64) -> f64 {
    let mut best = NICE_NUMBERS[0];
    let mut best_distance = f64::INFINITY;
    for nice in NICE_NUMBERS {
        let d = distance(ratio, nice);
        if d < best_distance {
            best = nice;
            best_distance = d;
        }
    }
    best
}

fn distance(ratio: f64, nice: f64) -> f64 {
    (ratio / nice).log10().abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_numbers_score_zero() {
        for nice in NICE_NUMBERS {
            assert_eq!(score_ratio(nice), 0.0, "score_ratio({nice})");
        }
        assert_eq!(score_ratio(1.0), 0.0);
    }

    #[test]
    fn test_nice_numbers_beat_odd_ones() {
        assert!(score_ratio(3.0) < score_ratio(7.3));
        assert!(score_ratio(0.5) < score_ratio(0.7));
        assert!(score_ratio(10.0) <= score_ratio(1.0));
    }

    #[test]
    fn test_over_and_under_shoot_score_the_same() {
        let over = score_ratio(10.0 * 1.1);
        let under = score_ratio(10.0 / 1.1);
        assert!((over - under).abs() < 1e-12);
    }

    #[test]
    fn test_nearest_nice() {
        assert_eq!(nearest_nice(4.8), 5.0);
        assert_eq!(nearest_nice(0.1), 0.5);
        assert_eq!(nearest_nice(25_000.0), 1000.0);
        assert_eq!(nearest_nice(2.0), 2.0);
    }
}

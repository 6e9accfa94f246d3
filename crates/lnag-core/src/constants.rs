/// Core constants used throughout the lnag matcher
///
/// This module centralizes the magic numbers the matchers and the scorer
/// depend on. The tunable ones are only defaults; `MatcherConfig` carries the
/// values actually used at runtime.
/// Ratio scoring constants
pub mod scoring {
    /// Human-friendly multipliers a comparison ratio is pulled towards
    pub const NICE_NUMBERS: [f64; 11] =
        [0.5, 1.0, 2.0, 3.0, 5.0, 10.0, 20.0, 50.0, 100.0, 500.0, 1000.0];
}

/// Defaults for `MatcherConfig`
pub mod matcher {
    /// Candidates scoring within this log10 distance of the best are near-ties
    pub const DEFAULT_SCORE_TOLERANCE: f64 = 0.1;

    /// Smallest ratio still considered relatable ("a hundredth of")
    pub const DEFAULT_MIN_RATIO: f64 = 0.01;

    /// Largest ratio still considered relatable
    pub const DEFAULT_MAX_RATIO: f64 = 100_000.0;

    /// Pair matching needs a unit item and a distinct target item
    pub const MIN_PAIR_CONCEPTS: usize = 2;
}

/// Configuration file and environment names
pub mod config {
    /// Environment variable naming the configuration file
    pub const CONFIG_PATH_ENV: &str = "LNAG_CONFIG_PATH";

    /// File looked up when neither a path nor the environment variable is given
    pub const DEFAULT_CONFIG_FILE: &str = "lnag.toml";

    pub const SCORE_TOLERANCE_ENV: &str = "LNAG_SCORE_TOLERANCE";
    pub const MIN_RATIO_ENV: &str = "LNAG_MIN_RATIO";
    pub const MAX_RATIO_ENV: &str = "LNAG_MAX_RATIO";
}

//! Number rendering.

/// Ratios this close to a quarter or a half are spelled out.
const FRACTION_TOLERANCE: f64 = 0.01;
/// Ratios this close to 1 need no multiplier at all.
const UNITY_TOLERANCE: f64 = 0.1;

/// Whole-number rendering with thousands separators.
///
/// ```
/// use lnag_formatter::humanize_count;
/// assert_eq!(humanize_count(1234567.0), "1,234,567");
/// assert_eq!(humanize_count(3.7), "4");
/// ```
pub fn humanize_count(count: f64) -> String {
    if !count.is_finite() {
        return count.to_string();
    }
    let rounded = count.round();
    let digits = format!("{:.0}", rounded.abs());
    if rounded < 0.0 {
        format!("-{}", group_thousands(&digits))
    } else {
        group_thousands(&digits)
    }
}

/// Rendering for a value the user typed in.
///
/// Whole numbers read like [`humanize_count`]; anything else keeps up to two
/// decimals with trailing zeros dropped, so `0.5` stays `0.5` instead of
/// rounding to `1`.
pub fn humanize_quantity(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (whole, decimals) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let decimals = decimals.trim_end_matches('0');
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    if decimals.is_empty() {
        format!("{sign}{}", group_thousands(whole))
    } else {
        format!("{sign}{}.{decimals}", group_thousands(whole))
    }
}

/// Multiplier wording for a ratio.
///
/// Returns an empty string for ratios close enough to 1 that no multiplier
/// should be said at all.
///
/// ```
/// use lnag_formatter::humanize_ratio;
/// assert_eq!(humanize_ratio(0.5), "half");
/// assert_eq!(humanize_ratio(3.0), "3x");
/// assert_eq!(humanize_ratio(5.5), "5 and a half times");
/// assert_eq!(humanize_ratio(1.0), "");
/// ```
pub fn humanize_ratio(ratio: f64) -> String {
    if (ratio - 0.25).abs() < FRACTION_TOLERANCE {
        return "a quarter".to_string();
    }
    if (ratio - 0.5).abs() < FRACTION_TOLERANCE {
        return "half".to_string();
    }
    if (ratio - 1.0).abs() < UNITY_TOLERANCE {
        return String::new();
    }
    if ratio.fract() == 0.0 {
        return format!("{}x", humanize_count(ratio));
    }
    if ratio < 1.0 {
        return format!("{ratio:.1}x");
    }
    match Tenths::of(ratio) {
        Tenths::Whole(n) => format!("{}x", humanize_count(n)),
        Tenths::Over(n) => format!("more than {} times", humanize_count(n)),
        Tenths::Half(n) => format!("{} and a half times", humanize_count(n)),
        Tenths::Under(n) => format!("almost {} times", humanize_count(n)),
    }
}

/// How many of something, rounded to the nearest half and hedged.
///
/// ```
/// use lnag_formatter::approx_count;
/// assert_eq!(approx_count(5.2), "more than 5");
/// assert_eq!(approx_count(5.5), "5 and a half");
/// assert_eq!(approx_count(5.8), "almost 6");
/// ```
pub fn approx_count(ratio: f64) -> String {
    if !ratio.is_finite() || ratio.fract() == 0.0 {
        return humanize_count(ratio);
    }
    match Tenths::of(ratio) {
        Tenths::Whole(n) => humanize_count(n),
        Tenths::Over(n) => format!("more than {}", humanize_count(n)),
        Tenths::Half(n) => format!("{} and a half", humanize_count(n)),
        Tenths::Under(n) => format!("almost {}", humanize_count(n)),
    }
}

/// Whether a rendered amount already hedges, making a leading "about" redundant.
pub(crate) fn is_hedged(amount: &str) -> bool {
    amount.starts_with("more than ") || amount.starts_with("almost ")
}

/// A positive non-integer split by its first decimal digit.
enum Tenths {
    Whole(f64),
    Over(f64),
    Half(f64),
    Under(f64),
}

impl Tenths {
    fn of(value: f64) -> Self {
        let whole = value.trunc();
        match ((value - whole) * 10.0).round() as u8 {
            0 => Self::Whole(whole),
            1..=3 => Self::Over(whole),
            4..=6 => Self::Half(whole),
            7..=9 => Self::Under(whole + 1.0),
            _ => Self::Whole(whole + 1.0),
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

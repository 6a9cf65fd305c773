//! Ordinal suffixes and lap headings for presenting rounds and positions

/// English ordinal suffix for `n`
///
/// Only 11, 12 and 13 themselves are special-cased; 111 reads "111st".
/// Zero and negative numbers take "th".
///
/// ```
/// use gallop_core::ordinal_suffix;
///
/// assert_eq!(ordinal_suffix(1, false), "st");
/// assert_eq!(ordinal_suffix(12, false), "th");
/// assert_eq!(ordinal_suffix(23, true), "RD");
/// ```
pub fn ordinal_suffix(n: i64, uppercase: bool) -> &'static str {
    let lower = if (11..=13).contains(&n) {
        "th"
    } else {
        match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };

    if !uppercase {
        return lower;
    }
    match lower {
        "st" => "ST",
        "nd" => "ND",
        "rd" => "RD",
        _ => "TH",
    }
}

/// `n` followed by its ordinal suffix, e.g. "2nd"
pub fn ordinal(n: i64) -> String {
    format!("{}{}", n, ordinal_suffix(n, false))
}

/// Title of the running round, e.g. "1st Lap 1200m"
pub fn lap_text(round: i64, distance: u32) -> String {
    format!("{}{} Lap {}m", round, ordinal_suffix(round, false), distance)
}

/// Heading used for schedule and result listings, e.g. "1ST Lap - 1200m"
pub fn round_heading(round: i64, distance: u32) -> String {
    format!("{}{} Lap - {}m", round, ordinal_suffix(round, true), distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_suffixes() {
        for n in [1, 21, 31, 101, 1001, 123456781] {
            assert_eq!(ordinal_suffix(n, false), "st", "{n}");
        }
        for n in [2, 22, 102, 1002] {
            assert_eq!(ordinal_suffix(n, false), "nd", "{n}");
        }
        for n in [3, 23, 103, 1003] {
            assert_eq!(ordinal_suffix(n, false), "rd", "{n}");
        }
        for n in [0, 4, 5, 9, 10, 20, 123456784] {
            assert_eq!(ordinal_suffix(n, false), "th", "{n}");
        }
    }

    #[test]
    fn test_teens() {
        assert_eq!(ordinal_suffix(11, false), "th");
        assert_eq!(ordinal_suffix(12, false), "th");
        assert_eq!(ordinal_suffix(13, false), "th");
        assert_eq!(ordinal_suffix(111, false), "st");
        assert_eq!(ordinal_suffix(112, false), "nd");
        assert_eq!(ordinal_suffix(413, false), "rd");
        assert_eq!(ordinal_suffix(1011, false), "st");
    }

    #[test]
    fn test_uppercase() {
        assert_eq!(ordinal_suffix(1, true), "ST");
        assert_eq!(ordinal_suffix(2, true), "ND");
        assert_eq!(ordinal_suffix(3, true), "RD");
        assert_eq!(ordinal_suffix(4, true), "TH");
        assert_eq!(ordinal_suffix(11, true), "TH");
        assert_eq!(ordinal_suffix(0, true), "TH");
    }

    #[test]
    fn test_negative() {
        for n in [-1, -2, -3, -4, -11] {
            assert_eq!(ordinal_suffix(n, false), "th");
        }
    }

    #[test]
    fn test_lap_text() {
        assert_eq!(lap_text(1, 1200), "1st Lap 1200m");
        assert_eq!(lap_text(2, 1400), "2nd Lap 1400m");
        assert_eq!(lap_text(3, 1600), "3rd Lap 1600m");
        assert_eq!(lap_text(0, 1000), "0th Lap 1000m");
        assert_eq!(lap_text(-1, 1000), "-1th Lap 1000m");
        assert_eq!(lap_text(100, 5000), "100th Lap 5000m");
        assert_eq!(round_heading(1, 1200), "1ST Lap - 1200m");
        assert_eq!(ordinal(22), "22nd");
    }
}

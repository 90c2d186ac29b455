use serde::Serialize;

/// Change larger than this (in either direction) between two consecutive
/// readings counts as movement.
pub const TREND_DELTA: i128 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Up => "↑ Rising",
            Trend::Down => "↓ Falling",
            Trend::Stable => "— Stable",
        }
    }

    /// Style class of the trend badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            Trend::Up => "stat-trend up",
            Trend::Down => "stat-trend down",
            Trend::Stable => "stat-trend normal",
        }
    }
}

/// Classify the move from `previous` to `current`. The difference is taken
/// in `i128` so it is exact for every pair of `i64` inputs.
pub fn classify_trend(current: i64, previous: i64) -> Trend {
    let diff = current as i128 - previous as i128;
    if diff > TREND_DELTA {
        Trend::Up
    } else if diff < -TREND_DELTA {
        Trend::Down
    } else {
        Trend::Stable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_stable() {
        assert_eq!(classify_trend(20, 10), Trend::Stable);
        assert_eq!(classify_trend(10, 20), Trend::Stable);
        assert_eq!(classify_trend(21, 10), Trend::Up);
        assert_eq!(classify_trend(10, 21), Trend::Down);
    }

    #[test]
    fn test_negative_inputs() {
        assert_eq!(classify_trend(-5, -5), Trend::Stable);
        assert_eq!(classify_trend(-30, -5), Trend::Down);
        assert_eq!(classify_trend(-5, -16), Trend::Up);
        assert_eq!(classify_trend(-15, -5), Trend::Stable);
    }

    #[test]
    fn test_extremes_do_not_overflow() {
        assert_eq!(classify_trend(i64::MAX, i64::MIN), Trend::Up);
        assert_eq!(classify_trend(i64::MIN, i64::MAX), Trend::Down);
        assert_eq!(classify_trend(i64::MAX, i64::MAX), Trend::Stable);
    }

    #[test]
    fn test_sweep_matches_definition() {
        for previous in -40..=40_i64 {
            for current in -40..=40_i64 {
                let expected = match current - previous {
                    d if d > 10 => Trend::Up,
                    d if d < -10 => Trend::Down,
                    _ => Trend::Stable,
                };
                assert_eq!(classify_trend(current, previous), expected);
            }
        }
    }
}

//! Audit scores and grades.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A 0..=100 audit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Score(u8);

impl Score {
    /// Highest possible score.
    pub const MAX: u8 = 100;

    /// Creates a score, clamping to 100.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Returns raw value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the rounded mean of two scores.
    #[must_use]
    pub fn average(a: Self, b: Self) -> Self {
        let sum = u16::from(a.0) + u16::from(b.0);
        // Half-up rounding of sum / 2.
        Self(u8::try_from(sum.div_ceil(2)).unwrap_or(Self::MAX))
    }

    /// Returns the grade band.
    #[must_use]
    pub const fn grade(self) -> Grade {
        if self.0 >= 80 {
            Grade::Good
        } else if self.0 >= 60 {
            Grade::Fair
        } else {
            Grade::Poor
        }
    }

    /// Returns the score as a 0.0..=1.0 ratio.
    #[must_use]
    pub fn ratio(self) -> f64 {
        f64::from(self.0) / f64::from(Self::MAX)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100", self.0)
    }
}

/// Grade band of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    /// 80 and above.
    Good,
    /// 60 to 79.
    Fair,
    /// Below 60.
    Poor,
}

impl Grade {
    /// Returns display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(100, Grade::Good ; "perfect")]
    #[test_case(80, Grade::Good ; "good_boundary")]
    #[test_case(79, Grade::Fair ; "just_below_good")]
    #[test_case(60, Grade::Fair ; "fair_boundary")]
    #[test_case(59, Grade::Poor ; "just_below_fair")]
    #[test_case(0, Grade::Poor ; "zero")]
    fn test_grade_bands(value: u8, expected: Grade) {
        assert_eq!(Score::new(value).grade(), expected);
    }

    #[test_case(85, 90, 88 ; "half_rounds_up")]
    #[test_case(72, 65, 69 ; "caution_audit")]
    #[test_case(92, 95, 94 ; "high_audit")]
    #[test_case(80, 80, 80 ; "even")]
    #[test_case(100, 100, 100 ; "max")]
    fn test_average(a: u8, b: u8, expected: u8) {
        assert_eq!(Score::average(Score::new(a), Score::new(b)).value(), expected);
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(Score::new(250).value(), 100);
        assert_eq!(Score::new(42).to_string(), "42/100");
    }
}

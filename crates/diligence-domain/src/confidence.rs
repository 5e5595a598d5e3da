//! Confidence score and star-rating discretization

use std::fmt;

/// A confidence score clamped to [0.0, 1.0].
///
/// The score summarizes evidence strength for one claim. It carries a
/// derived five-band star rating so a report reader can triage dozens
/// of claims at a glance without re-reading every citation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Confidence(f64);

impl Confidence {
    /// Create a confidence score, clamping the value into [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw score value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the score as a display percentage (0-100).
    pub fn as_percent(&self) -> f64 {
        self.0 * 100.0
    }

    /// Discretize the score into its star rating.
    pub fn stars(&self) -> StarRating {
        StarRating::from_confidence(*self)
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0}%", self.as_percent())
    }
}

/// Star rating - the five-band discretization of a confidence score
///
/// Exactly five bands cover [0, 1] with no gaps or overlaps:
/// - `>= 0.85` → five stars
/// - `[0.70, 0.85)` → four stars
/// - `[0.50, 0.70)` → three stars
/// - `[0.30, 0.50)` → two stars
/// - `< 0.30` → one star
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StarRating {
    /// Below 0.30 - essentially unsupported
    One,
    /// 0.30 to 0.50 - baseline support only
    Two,
    /// 0.50 to 0.70 - moderately supported
    Three,
    /// 0.70 to 0.85 - well supported
    Four,
    /// 0.85 and above - strongly supported
    Five,
}

impl StarRating {
    /// Bucket a confidence score into its star band.
    ///
    /// Pure threshold comparison: deterministic and monotonically
    /// non-decreasing in the score.
    pub fn from_confidence(confidence: Confidence) -> Self {
        let value = confidence.value();
        if value >= 0.85 {
            StarRating::Five
        } else if value >= 0.70 {
            StarRating::Four
        } else if value >= 0.50 {
            StarRating::Three
        } else if value >= 0.30 {
            StarRating::Two
        } else {
            StarRating::One
        }
    }

    /// Get the number of stars (1-5).
    pub fn count(&self) -> u8 {
        match self {
            StarRating::One => 1,
            StarRating::Two => 2,
            StarRating::Three => 3,
            StarRating::Four => 4,
            StarRating::Five => 5,
        }
    }

    /// Get the fixed-width star-symbol string used in rendered reports.
    pub fn symbols(&self) -> &'static str {
        match self {
            StarRating::One => "⭐",
            StarRating::Two => "⭐⭐",
            StarRating::Three => "⭐⭐⭐",
            StarRating::Four => "⭐⭐⭐⭐",
            StarRating::Five => "⭐⭐⭐⭐⭐",
        }
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbols())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_clamps() {
        assert_eq!(Confidence::new(1.195).value(), 1.0);
        assert_eq!(Confidence::new(-0.2).value(), 0.0);
        assert_eq!(Confidence::new(0.42).value(), 0.42);
    }

    #[test]
    fn test_band_boundaries_are_inclusive_below() {
        assert_eq!(Confidence::new(0.2999).stars(), StarRating::One);
        assert_eq!(Confidence::new(0.30).stars(), StarRating::Two);
        assert_eq!(Confidence::new(0.4999).stars(), StarRating::Two);
        assert_eq!(Confidence::new(0.50).stars(), StarRating::Three);
        assert_eq!(Confidence::new(0.6999).stars(), StarRating::Three);
        assert_eq!(Confidence::new(0.70).stars(), StarRating::Four);
        assert_eq!(Confidence::new(0.8499).stars(), StarRating::Four);
        assert_eq!(Confidence::new(0.85).stars(), StarRating::Five);
        assert_eq!(Confidence::new(1.0).stars(), StarRating::Five);
    }

    #[test]
    fn test_star_counts() {
        assert_eq!(StarRating::One.count(), 1);
        assert_eq!(StarRating::Five.count(), 5);
        assert_eq!(StarRating::Three.symbols().chars().count(), 3);
    }

    #[test]
    fn test_rating_order_follows_score_order() {
        assert!(StarRating::One < StarRating::Two);
        assert!(StarRating::Four < StarRating::Five);
    }
}

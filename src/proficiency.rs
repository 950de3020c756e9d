//! Proficiency classification
//!
//! Maps a 0-10 skill score to a tier label and a color bucket. This is the
//! single source of truth for the thresholds; renderers never carry their
//! own copies.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A proficiency score, clamped to the 0-10 domain on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Level(u8);

impl<'de> Deserialize<'de> for Level {
    /// Deserialized levels go through the same clamp as constructed ones.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Ok(Level::new(raw))
    }
}

impl Level {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 10;

    /// Create a level from any integer, clamping to [0, 10].
    /// Out-of-range input fails closed to the nearest bound instead of
    /// panicking or rendering an out-of-bounds bar.
    pub fn new(raw: i64) -> Self {
        Self(raw.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }

    /// The clamped score.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Bar width in percent: always `level * 10`, so 0 -> 0% and 10 -> 100%.
    pub fn width_percent(&self) -> u8 {
        self.0 * 10
    }

    /// Classify this level into its tier.
    pub fn tier(&self) -> Tier {
        match self.0 {
            9..=10 => Tier::Expert,
            7..=8 => Tier::Advanced,
            5..=6 => Tier::Intermediate,
            _ => Tier::Familiar,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

/// Proficiency tier derived from a level. Never stored, always computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Expert,
    Advanced,
    Intermediate,
    Familiar,
}

impl Tier {
    /// Short label shown next to the bar.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Expert => "Expert",
            Tier::Advanced => "Advanced",
            Tier::Intermediate => "Intermediate",
            Tier::Familiar => "Familiar",
        }
    }

    /// The level range covered by this tier, for legends.
    pub fn range_label(&self) -> &'static str {
        match self {
            Tier::Expert => "9-10",
            Tier::Advanced => "7-8",
            Tier::Intermediate => "5-6",
            Tier::Familiar => "0-4",
        }
    }

    /// Color bucket for this tier. Deriving the bucket from the tier keeps
    /// label and color thresholds aligned by construction.
    pub fn color_bucket(&self) -> ColorBucket {
        match self {
            Tier::Expert => ColorBucket::Highest,
            Tier::Advanced => ColorBucket::MidHigh,
            Tier::Intermediate => ColorBucket::Mid,
            Tier::Familiar => ColorBucket::Lowest,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Opaque visual bucket used by renderers to pick a style. Which concrete
/// color a bucket maps to is theme configuration, not domain logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorBucket {
    Highest,
    MidHigh,
    Mid,
    Lowest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_thresholds() {
        let expected = [
            (0, Tier::Familiar),
            (1, Tier::Familiar),
            (2, Tier::Familiar),
            (3, Tier::Familiar),
            (4, Tier::Familiar),
            (5, Tier::Intermediate),
            (6, Tier::Intermediate),
            (7, Tier::Advanced),
            (8, Tier::Advanced),
            (9, Tier::Expert),
            (10, Tier::Expert),
        ];

        for (raw, tier) in expected {
            assert_eq!(Level::new(raw).tier(), tier, "level {}", raw);
        }
    }

    #[test]
    fn test_label_is_one_of_four() {
        for raw in 0..=10 {
            let label = Level::new(raw).tier().label();
            assert!(
                ["Expert", "Advanced", "Intermediate", "Familiar"].contains(&label),
                "unexpected label {:?} for level {}",
                label,
                raw
            );
        }
    }

    #[test]
    fn test_width_is_level_times_ten() {
        assert_eq!(Level::new(0).width_percent(), 0);
        assert_eq!(Level::new(5).width_percent(), 50);
        assert_eq!(Level::new(10).width_percent(), 100);
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(Level::new(-1).value(), 0);
        assert_eq!(Level::new(15).value(), 10);
        assert_eq!(Level::new(-1).width_percent(), 0);
        assert_eq!(Level::new(15).width_percent(), 100);
        assert_eq!(Level::new(-1).tier(), Tier::Familiar);
        assert_eq!(Level::new(15).tier(), Tier::Expert);
    }

    #[test]
    fn test_deserialization_clamps() {
        let level: Level = serde_json::from_str("15").unwrap();
        assert_eq!(level.value(), 10);
        let level: Level = serde_json::from_str("-3").unwrap();
        assert_eq!(level.value(), 0);
    }

    #[test]
    fn test_color_bucket_follows_tier() {
        assert_eq!(Level::new(9).tier().color_bucket(), ColorBucket::Highest);
        assert_eq!(Level::new(8).tier().color_bucket(), ColorBucket::MidHigh);
        assert_eq!(Level::new(5).tier().color_bucket(), ColorBucket::Mid);
        assert_eq!(Level::new(4).tier().color_bucket(), ColorBucket::Lowest);
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub rising_above: u8,
    pub hot_above: u8,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            rising_above: 50,
            hot_above: 80,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViralityTier {
    Cold,
    Rising,
    Hot,
}

impl ViralityTier {
    pub fn from_score(score: u8) -> Self {
        Self::with_thresholds(score, &TierThresholds::default())
    }

    pub fn with_thresholds(score: u8, thresholds: &TierThresholds) -> Self {
        if score > thresholds.hot_above {
            ViralityTier::Hot
        } else if score > thresholds.rising_above {
            ViralityTier::Rising
        } else {
            ViralityTier::Cold
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViralityTier::Cold => "Cold",
            ViralityTier::Rising => "Rising",
            ViralityTier::Hot => "Hot",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_exclusive() {
        assert_eq!(ViralityTier::from_score(0), ViralityTier::Cold);
        assert_eq!(ViralityTier::from_score(50), ViralityTier::Cold);
        assert_eq!(ViralityTier::from_score(51), ViralityTier::Rising);
        assert_eq!(ViralityTier::from_score(80), ViralityTier::Rising);
        assert_eq!(ViralityTier::from_score(81), ViralityTier::Hot);
        assert_eq!(ViralityTier::from_score(100), ViralityTier::Hot);
    }

    #[test]
    fn custom_thresholds() {
        let thresholds = TierThresholds {
            rising_above: 10,
            hot_above: 20,
        };
        assert_eq!(ViralityTier::with_thresholds(15, &thresholds), ViralityTier::Rising);
        assert_eq!(ViralityTier::with_thresholds(21, &thresholds).label(), "Hot");
    }
}

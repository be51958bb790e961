pub mod config;
pub mod hooks;
pub mod scoring;
pub mod story;
pub mod tone;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ScoringConfig;
use crate::scoring::{
    build_feedback, extract_text_features, ScoreBreakdown, ScoreWeights, TierThresholds,
    ViralityTier, WeightedScorer,
};

pub use crate::hooks::{generate_hooks, DEFAULT_HOOK_COUNT};
pub use crate::tone::EmotionalTone;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViralAnalysis {
    pub score: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub estimated_reach_percentage: f64,
}

impl ViralAnalysis {
    pub fn tier(&self) -> ViralityTier {
        ViralityTier::from_score(self.score)
    }
}

/// Score engine bound to a set of weights and tier thresholds. Holds no
/// mutable state; share freely across threads.
#[derive(Debug, Clone, Default)]
pub struct ViralScorer {
    weighted: WeightedScorer,
    tiers: TierThresholds,
}

impl ViralScorer {
    pub fn new(weights: ScoreWeights, tiers: TierThresholds) -> Self {
        Self {
            weighted: WeightedScorer::new(weights),
            tiers,
        }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(config.weights.clone(), config.tiers.clone())
    }

    pub fn analyze(&self, content: &str, tone: Option<EmotionalTone>) -> ViralAnalysis {
        let features = extract_text_features(content, tone);
        let score = self.weighted.score(&features);
        let feedback = build_feedback(&features);

        debug!(
            words = features.word_count,
            viral = features.viral_keywords,
            tone = features.tone_keywords,
            score,
            "scored story"
        );

        ViralAnalysis {
            score,
            strengths: feedback.strengths,
            weaknesses: feedback.weaknesses,
            recommendations: feedback.recommendations,
            estimated_reach_percentage: self.weighted.reach_percentage(score),
        }
    }

    pub fn breakdown(&self, content: &str, tone: Option<EmotionalTone>) -> ScoreBreakdown {
        self.weighted.breakdown(&extract_text_features(content, tone))
    }

    pub fn tier(&self, score: u8) -> ViralityTier {
        ViralityTier::with_thresholds(score, &self.tiers)
    }
}

/// Scores `content` with the reference weights.
pub fn score(content: &str, tone: Option<EmotionalTone>) -> ViralAnalysis {
    score_with_weights(content, tone, &ScoreWeights::default())
}

/// Unrecognized labels score as if no tone had been chosen.
pub fn score_with_tone_label(content: &str, tone: &str) -> ViralAnalysis {
    score(content, EmotionalTone::from_label(tone))
}

pub fn score_with_weights(
    content: &str,
    tone: Option<EmotionalTone>,
    weights: &ScoreWeights,
) -> ViralAnalysis {
    ViralScorer::new(weights.clone(), TierThresholds::default()).analyze(content, tone)
}

pub(crate) fn stable_hash64(value: &str) -> u64 {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

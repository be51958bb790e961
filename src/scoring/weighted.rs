use serde::{Deserialize, Serialize};

use crate::scoring::TextFeatures;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub optimal_length_min: usize,
    pub optimal_length_max: usize,
    pub optimal_length: f64,
    pub acceptable_length_min: usize,
    pub acceptable_length_max: usize,
    pub acceptable_length: f64,
    pub long_length: f64,
    pub viral_keyword: f64,
    pub viral_keyword_cap: f64,
    pub tone_keyword: f64,
    pub tone_keyword_cap: f64,
    pub punctuation: f64,
    pub punctuation_cap: f64,
    pub line_break: f64,
    pub line_break_cap: f64,
    pub reach_ceiling: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            optimal_length_min: 50,
            optimal_length_max: 150,
            optimal_length: 20.0,
            acceptable_length_min: 30,
            acceptable_length_max: 300,
            acceptable_length: 15.0,
            long_length: 10.0,
            viral_keyword: 5.0,
            viral_keyword_cap: 20.0,
            tone_keyword: 4.0,
            tone_keyword_cap: 15.0,
            punctuation: 3.0,
            punctuation_cap: 15.0,
            line_break: 2.0,
            line_break_cap: 10.0,
            reach_ceiling: 85.0,
        }
    }
}

/// Per-signal contributions before rounding and clamping.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub length: f64,
    pub viral_keywords: f64,
    pub tone_keywords: f64,
    pub punctuation: f64,
    pub line_breaks: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.length + self.viral_keywords + self.tone_keywords + self.punctuation + self.line_breaks
    }
}

#[derive(Debug, Clone)]
pub struct WeightedScorer {
    weights: ScoreWeights,
}

impl WeightedScorer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    pub fn breakdown(&self, features: &TextFeatures) -> ScoreBreakdown {
        let line_breaks = if features.line_breaks > 0 {
            capped(features.line_breaks, self.weights.line_break, self.weights.line_break_cap)
        } else {
            0.0
        };

        ScoreBreakdown {
            length: self.length_score(features.word_count),
            viral_keywords: capped(
                features.viral_keywords,
                self.weights.viral_keyword,
                self.weights.viral_keyword_cap,
            ),
            tone_keywords: capped(
                features.tone_keywords,
                self.weights.tone_keyword,
                self.weights.tone_keyword_cap,
            ),
            punctuation: capped(
                features.punctuation(),
                self.weights.punctuation,
                self.weights.punctuation_cap,
            ),
            line_breaks,
        }
    }

    /// Rounded and clamped to 0..=100.
    pub fn score(&self, features: &TextFeatures) -> u8 {
        clamp_score(self.breakdown(features).total())
    }

    pub fn reach_percentage(&self, score: u8) -> f64 {
        (score as f64 / 100.0) * self.weights.reach_ceiling
    }

    fn length_score(&self, word_count: usize) -> f64 {
        let w = &self.weights;
        if (w.optimal_length_min..=w.optimal_length_max).contains(&word_count) {
            w.optimal_length
        } else if (w.acceptable_length_min..=w.acceptable_length_max).contains(&word_count) {
            w.acceptable_length
        } else if word_count > w.acceptable_length_max {
            w.long_length
        } else {
            0.0
        }
    }
}

impl Default for WeightedScorer {
    fn default() -> Self {
        Self::new(ScoreWeights::default())
    }
}

fn capped(count: usize, points: f64, cap: f64) -> f64 {
    (count as f64 * points).min(cap)
}

fn clamp_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

pub mod features;
pub mod feedback;
pub mod tier;
pub mod weighted;

pub use features::{count_words, extract_text_features, TextFeatures, VIRAL_KEYWORDS};
pub use feedback::{build_feedback, Feedback};
pub use tier::{TierThresholds, ViralityTier};
pub use weighted::{ScoreBreakdown, ScoreWeights, WeightedScorer};

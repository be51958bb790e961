use serde::{Deserialize, Serialize};

/// Author-selected emotional tone of a story. Selects the secondary keyword
/// table used by the score engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionalTone {
    Dramatic,
    Humorous,
    Inspirational,
    Sarcastic,
    Mysterious,
    Nostalgic,
}

const DRAMATIC: &[&str] = &["died", "broke", "devastated", "heartbroken", "ruined", "destroyed"];
const HUMOROUS: &[&str] = &["lol", "funny", "hilarious", "cracked", "jokes", "laughed"];
const INSPIRATIONAL: &[&str] = &["achieved", "success", "overcome", "believe", "dream", "won"];
const SARCASTIC: &[&str] = &["sure", "yeah right", "obviously", "because", "totally"];
const MYSTERIOUS: &[&str] = &["mysterious", "unknown", "strange", "weird", "odd", "curious"];
const NOSTALGIC: &[&str] = &[
    "remember",
    "remember when",
    "throwback",
    "old days",
    "childhood",
    "back then",
];

impl EmotionalTone {
    pub const ALL: [EmotionalTone; 6] = [
        EmotionalTone::Dramatic,
        EmotionalTone::Humorous,
        EmotionalTone::Inspirational,
        EmotionalTone::Sarcastic,
        EmotionalTone::Mysterious,
        EmotionalTone::Nostalgic,
    ];

    /// Exact match against the stored lowercase labels.
    pub fn from_label(value: &str) -> Option<Self> {
        match value {
            "dramatic" => Some(EmotionalTone::Dramatic),
            "humorous" => Some(EmotionalTone::Humorous),
            "inspirational" => Some(EmotionalTone::Inspirational),
            "sarcastic" => Some(EmotionalTone::Sarcastic),
            "mysterious" => Some(EmotionalTone::Mysterious),
            "nostalgic" => Some(EmotionalTone::Nostalgic),
            _ => None,
        }
    }

    /// Lenient parse for user input: ignores case and surrounding whitespace.
    pub fn from_str(value: &str) -> Option<Self> {
        Self::from_label(value.trim().to_lowercase().as_str())
    }

    pub fn label(self) -> &'static str {
        match self {
            EmotionalTone::Dramatic => "dramatic",
            EmotionalTone::Humorous => "humorous",
            EmotionalTone::Inspirational => "inspirational",
            EmotionalTone::Sarcastic => "sarcastic",
            EmotionalTone::Mysterious => "mysterious",
            EmotionalTone::Nostalgic => "nostalgic",
        }
    }

    /// Lowercase keywords matched against whole tokens. Multi-word entries
    /// never equal a single token and so never count.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            EmotionalTone::Dramatic => DRAMATIC,
            EmotionalTone::Humorous => HUMOROUS,
            EmotionalTone::Inspirational => INSPIRATIONAL,
            EmotionalTone::Sarcastic => SARCASTIC,
            EmotionalTone::Mysterious => MYSTERIOUS,
            EmotionalTone::Nostalgic => NOSTALGIC,
        }
    }
}

/// Keyword table for an optional tone; no tone means no keywords.
pub fn tone_keywords(tone: Option<EmotionalTone>) -> &'static [&'static str] {
    tone.map(EmotionalTone::keywords).unwrap_or(&[])
}

use crate::tone::{tone_keywords, EmotionalTone};

pub const VIRAL_KEYWORDS: &[&str] = &[
    "drama",
    "scandal",
    "shocking",
    "unbelievable",
    "insane",
    "crazy",
    "never",
    "forever",
    "always",
    "never again",
    "finally",
    "truth",
    "exposed",
    "revealed",
    "secret",
    "hidden",
    "incredible",
    "amazing",
];

/// Lexical counts the score engine works from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFeatures {
    pub word_count: usize,
    pub viral_keywords: usize,
    pub tone_keywords: usize,
    pub questions: usize,
    pub exclamations: usize,
    pub line_breaks: usize,
}

impl TextFeatures {
    pub fn punctuation(&self) -> usize {
        self.questions + self.exclamations
    }
}

/// Splitting on whitespace runs leaves one empty token at each edge that
/// starts or ends with whitespace; those count as words. Whitespace-only and
/// empty text yields zero words.
pub fn count_words(text: &str) -> usize {
    let tokens = text.split_whitespace().count();
    if tokens == 0 {
        return 0;
    }
    let leading = text.starts_with(char::is_whitespace) as usize;
    let trailing = text.ends_with(char::is_whitespace) as usize;
    tokens + leading + trailing
}

pub fn extract_text_features(text: &str, tone: Option<EmotionalTone>) -> TextFeatures {
    let lowercase = text.to_lowercase();
    let tone_words = tone_keywords(tone);

    let mut features = TextFeatures {
        word_count: count_words(&lowercase),
        ..TextFeatures::default()
    };
    for word in lowercase.split_whitespace() {
        if VIRAL_KEYWORDS.contains(&word) {
            features.viral_keywords += 1;
        }
        if tone_words.contains(&word) {
            features.tone_keywords += 1;
        }
    }

    for ch in text.chars() {
        match ch {
            '?' => features.questions += 1,
            '!' => features.exclamations += 1,
            '\n' => features.line_breaks += 1,
            _ => {}
        }
    }

    features
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viral_table_has_eighteen_terms() {
        assert_eq!(VIRAL_KEYWORDS.len(), 18);
    }

    #[test]
    fn whitespace_only_text_has_no_words() {
        assert_eq!(extract_text_features("", None).word_count, 0);
        assert_eq!(extract_text_features(" \t\n  ", None).word_count, 0);
    }

    #[test]
    fn edge_whitespace_adds_empty_tokens() {
        assert_eq!(count_words("a b"), 2);
        assert_eq!(count_words("a b\n"), 3);
        assert_eq!(count_words("  a   b  "), 4);
        assert_eq!(count_words("\ta\n\nb"), 3);
    }

    #[test]
    fn keyword_matches_are_whole_tokens() {
        let features = extract_text_features("SECRET secrets secret. secret", None);
        assert_eq!(features.word_count, 4);
        // "secret." keeps its period and does not match.
        assert_eq!(features.viral_keywords, 2);
    }

    #[test]
    fn counts_punctuation_and_line_breaks() {
        let features = extract_text_features("Why?!\nReally??\n", Some(EmotionalTone::Dramatic));
        assert_eq!(features.questions, 3);
        assert_eq!(features.exclamations, 1);
        assert_eq!(features.line_breaks, 2);
        assert_eq!(features.punctuation(), 4);
    }

    #[test]
    fn tone_keywords_follow_selected_tone() {
        let text = "we laughed and then she died";
        assert_eq!(extract_text_features(text, Some(EmotionalTone::Humorous)).tone_keywords, 1);
        assert_eq!(extract_text_features(text, Some(EmotionalTone::Dramatic)).tone_keywords, 1);
        assert_eq!(extract_text_features(text, None).tone_keywords, 0);
    }
}

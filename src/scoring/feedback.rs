use crate::scoring::TextFeatures;

const SHORT_STORY_WORDS: usize = 50;
const LONG_STORY_WORDS: usize = 300;
const EXPRESSIVE_EXCLAMATIONS: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Qualitative findings. Independent of the weights, so a tuned config never
/// changes the wording a writer sees.
pub fn build_feedback(features: &TextFeatures) -> Feedback {
    let mut feedback = Feedback::default();

    if features.viral_keywords > 0 {
        feedback.strength("Strong viral keywords detected");
    } else {
        feedback.weakness("Could use more engaging vocabulary");
        feedback.recommend("Add more dramatic or engaging words to increase impact");
    }

    if features.word_count < SHORT_STORY_WORDS {
        feedback.weakness("Story is too short");
        feedback.recommend("Expand your story to at least 50 words for better engagement");
    } else if features.word_count > LONG_STORY_WORDS {
        feedback.weakness("Story might be too long for social media");
        feedback.recommend("Consider breaking the story into shorter segments");
    } else {
        feedback.strength("Optimal story length for social media");
    }

    if features.exclamations > EXPRESSIVE_EXCLAMATIONS {
        feedback.strength("High emotional expression");
    } else if features.exclamations == 0 {
        feedback.recommend("Add more exclamation marks to convey emotion");
    }

    if features.questions > 0 {
        feedback.strength("Story engages reader with questions");
    } else {
        feedback.recommend("Consider using questions to engage readers");
    }

    feedback
}

impl Feedback {
    fn strength(&mut self, text: &str) {
        self.strengths.push(text.to_string());
    }

    fn weakness(&mut self, text: &str) {
        self.weaknesses.push(text.to_string());
    }

    fn recommend(&mut self, text: &str) {
        self.recommendations.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_gets_every_nudge() {
        let feedback = build_feedback(&TextFeatures::default());
        assert!(feedback.strengths.is_empty());
        assert_eq!(
            feedback.weaknesses,
            vec!["Could use more engaging vocabulary", "Story is too short"]
        );
        assert_eq!(feedback.recommendations.len(), 4);
    }

    #[test]
    fn one_or_two_exclamations_trigger_nothing() {
        for exclamations in [1, 2] {
            let features = TextFeatures {
                word_count: 80,
                exclamations,
                ..TextFeatures::default()
            };
            let feedback = build_feedback(&features);
            assert!(!feedback.strengths.iter().any(|s| s.contains("emotional")));
            assert!(!feedback.recommendations.iter().any(|s| s.contains("exclamation")));
        }
    }

    #[test]
    fn strong_story_has_strengths_in_rule_order() {
        let features = TextFeatures {
            word_count: 120,
            viral_keywords: 2,
            tone_keywords: 0,
            questions: 1,
            exclamations: 3,
            line_breaks: 0,
        };
        let feedback = build_feedback(&features);
        assert_eq!(
            feedback.strengths,
            vec![
                "Strong viral keywords detected",
                "Optimal story length for social media",
                "High emotional expression",
                "Story engages reader with questions",
            ]
        );
        assert!(feedback.weaknesses.is_empty());
        assert!(feedback.recommendations.is_empty());
    }

    #[test]
    fn long_story_is_flagged() {
        let features = TextFeatures {
            word_count: 301,
            ..TextFeatures::default()
        };
        let feedback = build_feedback(&features);
        assert!(feedback
            .weaknesses
            .contains(&"Story might be too long for social media".to_string()));
    }
}

//! Templated alternative openings for a story.
//!
//! Template `i` is always paired with sentence `i`; later sentences are never
//! promoted to fill an unused template.

pub const DEFAULT_HOOK_COUNT: usize = 5;

struct HookTemplate {
    prefix: &'static str,
    take: usize,
    suffix: &'static str,
}

const TEMPLATES: [HookTemplate; 6] = [
    HookTemplate {
        prefix: "You won't believe what happened next... ",
        take: 60,
        suffix: "...",
    },
    HookTemplate {
        prefix: "Wait for it... ",
        take: 50,
        suffix: "",
    },
    HookTemplate {
        prefix: "This is absolutely insane: ",
        take: 55,
        suffix: "...",
    },
    HookTemplate {
        prefix: "Plot twist: ",
        take: 60,
        suffix: "",
    },
    HookTemplate {
        prefix: "The truth is... ",
        take: 60,
        suffix: "",
    },
    HookTemplate {
        prefix: "Never thought I'd say this, but... ",
        take: 50,
        suffix: "",
    },
];

pub fn template_count() -> usize {
    TEMPLATES.len()
}

/// Splits on runs of `.`, `!` and `?`. Blank pieces are dropped; kept pieces
/// retain their surrounding whitespace.
pub fn split_sentences(content: &str) -> Vec<&str> {
    content
        .split(['.', '!', '?'])
        .filter(|sentence| !sentence.trim().is_empty())
        .collect()
}

pub fn generate_hooks(content: &str, count: usize) -> Vec<String> {
    let sentences = split_sentences(content);
    TEMPLATES
        .iter()
        .take(count)
        .zip(sentences)
        .map(|(template, sentence)| template.apply(sentence))
        .collect()
}

impl HookTemplate {
    fn apply(&self, sentence: &str) -> String {
        let head: String = sentence.chars().take(self.take).collect();
        format!("{}{}{}", self.prefix, head, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_punctuation_runs() {
        let sentences = split_sentences("First one!? Second one... third");
        assert_eq!(sentences, vec!["First one", " Second one", " third"]);
    }

    #[test]
    fn blank_sentences_are_dropped() {
        assert!(split_sentences("  ...!!  ?").is_empty());
        assert!(split_sentences("").is_empty());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let sentence = "é".repeat(80);
        let hooks = generate_hooks(&sentence, 1);
        assert_eq!(
            hooks[0],
            format!("You won't believe what happened next... {}...", "é".repeat(60))
        );
    }

    #[test]
    fn each_template_uses_its_own_length() {
        let sentence = "x".repeat(100);
        let content = vec![sentence.as_str(); 6].join(". ");
        let hooks = generate_hooks(&content, 6);
        assert_eq!(hooks.len(), 6);
        assert_eq!(hooks[0], format!("You won't believe what happened next... {}...", "x".repeat(60)));
        assert_eq!(hooks[1], format!("Wait for it...  {}", "x".repeat(49)));
        assert_eq!(hooks[2], format!("This is absolutely insane:  {}...", "x".repeat(54)));
        assert_eq!(hooks[3], format!("Plot twist:  {}", "x".repeat(59)));
        assert_eq!(hooks[4], format!("The truth is...  {}", "x".repeat(59)));
        assert_eq!(
            hooks[5],
            format!("Never thought I'd say this, but...  {}", "x".repeat(49))
        );
    }
}

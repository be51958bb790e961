use viral_stories::hooks::{split_sentences, template_count};
use viral_stories::{generate_hooks, DEFAULT_HOOK_COUNT};

const THREE_SENTENCES: &str = "I found a letter in the attic. It was addressed to me! Who wrote it?";

#[test]
fn zero_count_yields_nothing() {
    assert!(generate_hooks(THREE_SENTENCES, 0).is_empty());
}

#[test]
fn empty_content_yields_nothing() {
    assert!(generate_hooks("", 5).is_empty());
    assert!(generate_hooks("  ...  ", 5).is_empty());
}

#[test]
fn bounded_by_sentence_count() {
    let hooks = generate_hooks(THREE_SENTENCES, 10);
    assert_eq!(hooks.len(), 3);
}

#[test]
fn bounded_by_template_count() {
    let content = (1..=10)
        .map(|i| format!("Sentence number {}", i))
        .collect::<Vec<_>>()
        .join(". ");
    assert_eq!(template_count(), 6);
    assert_eq!(generate_hooks(&content, 10).len(), 6);
    assert_eq!(generate_hooks(&content, 4).len(), 4);
}

#[test]
fn templates_pair_positionally() {
    let hooks = generate_hooks(THREE_SENTENCES, 3);

    assert_eq!(
        hooks[0],
        "You won't believe what happened next... I found a letter in the attic..."
    );
    assert_eq!(hooks[1], "Wait for it...  It was addressed to me");
    assert_eq!(hooks[2], "This is absolutely insane:  Who wrote it...");
}

#[test]
fn default_count_is_five() {
    assert_eq!(DEFAULT_HOOK_COUNT, 5);
    let content = "One. Two. Three. Four. Five. Six. Seven.";
    assert_eq!(generate_hooks(content, DEFAULT_HOOK_COUNT).len(), 5);
}

#[test]
fn sentence_splitting_collapses_punctuation_runs() {
    assert_eq!(split_sentences("Wait... what?! Really"), vec!["Wait", " what", " Really"]);
}

#[test]
fn hooks_are_deterministic() {
    assert_eq!(generate_hooks(THREE_SENTENCES, 5), generate_hooks(THREE_SENTENCES, 5));
}

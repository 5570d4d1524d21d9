//! Script text helpers shared by the executor and the local studio.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static SENTENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]*").expect("sentence pattern is valid"));

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{N}][\p{L}\p{N}'-]*").expect("word pattern is valid"));

const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "all", "also", "an", "and", "any", "are", "around", "as", "at", "back",
    "be", "been", "before", "but", "by", "can", "could", "do", "does", "each", "end", "first",
    "for", "from", "get", "has", "have", "here", "how", "in", "into", "is", "it", "its", "just",
    "keeps", "let", "like", "make", "many", "more", "most", "next", "no", "not", "now", "number",
    "of", "on", "one", "or", "our", "out", "over", "so", "some", "stick", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "third", "this", "those", "through", "to",
    "today", "turns", "up", "us", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "will", "with", "without", "would", "you", "your",
];

/// Sentences of the script, trimmed, blanks removed.
pub(crate) fn sentences(script: &str) -> Vec<String> {
    SENTENCE
        .find_iter(script)
        .map(|m| m.as_str().split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|sentence| WORD.is_match(sentence))
        .collect()
}

/// Words of `text`, in order.
pub(crate) fn words(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}

/// First sentence of the script, cut at a word boundary to at most `max_chars`.
pub(crate) fn first_sentence(script: &str, max_chars: usize) -> String {
    let sentence = sentences(script).into_iter().next().unwrap_or_default();
    truncate_words(&sentence, max_chars)
}

/// Cut `text` at a word boundary so it fits in `max_chars` characters.
pub(crate) fn truncate_words(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out = String::new();
    for word in text.split_whitespace() {
        let needed = if out.is_empty() { word.chars().count() } else { word.chars().count() + 1 };
        if out.chars().count() + needed > max_chars {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    if out.is_empty() {
        out = text.chars().take(max_chars).collect();
    }
    out
}

/// Most frequent non-stop-words, lowercase, ties broken by first appearance.
pub(crate) fn keywords(text: &str, limit: usize) -> Vec<String> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, word) in words(text).into_iter().enumerate() {
        let word = word.to_lowercase();
        if word.chars().count() < 3 || STOP_WORDS.contains(&word.as_str()) {
            continue;
        }
        if word.chars().all(|c| c.is_numeric()) {
            continue;
        }
        counts.entry(word).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
        count_b.cmp(count_a).then(first_a.cmp(first_b))
    });
    ranked.into_iter().take(limit).map(|(word, _)| word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_sentences_on_terminal_punctuation() {
        let parts = sentences("Hello there!  How are   you? Fine.\n\nTrailing words");
        assert_eq!(parts, vec!["Hello there!", "How are you?", "Fine.", "Trailing words"]);
    }

    #[test]
    fn drops_punctuation_only_fragments() {
        assert_eq!(sentences("Wow... ?! Done."), vec!["Wow...", "Done."]);
    }

    #[test]
    fn truncates_at_word_boundary() {
        assert_eq!(truncate_words("one two three", 9), "one two");
        assert_eq!(truncate_words("short", 10), "short");
        assert_eq!(truncate_words("unbreakable", 4), "unbr");
    }

    #[test]
    fn ranks_keywords_by_frequency_then_position() {
        let ranked = keywords("Rust makes tools. Tools need rust. Rust rocks.", 3);
        assert_eq!(ranked, vec!["rust", "tools", "makes"]);
    }

    #[test]
    fn keywords_skip_stop_words_and_numbers() {
        let ranked = keywords("The 2025 and the 42 of it", 5);
        assert!(ranked.is_empty());
    }
}

//! Shared text helpers for segmentation, matching, and scoring.
//!
//! Everything here is pure and byte-offset aware so spans computed on a
//! slice can be mapped back into the owning document.

use std::collections::HashSet;

use crate::models::{ReadabilityMetrics, Span};

/// Words carrying no discriminating signal for term-overlap comparison.
/// Includes legal boilerplate that would otherwise dominate the overlap.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "of", "to", "in", "on", "at", "for", "with", "by",
    "from", "as", "is", "are", "was", "were", "be", "been", "being", "this", "that", "these",
    "those", "it", "its", "shall", "will", "may", "must", "not", "no", "any", "all", "such",
    "other", "than", "then", "if", "into", "upon", "under", "over", "between", "each", "either",
    "party", "parties", "agreement", "herein", "hereof", "thereof", "hereby", "hereunder",
];

/// Lowercase and collapse all whitespace runs to single spaces.
/// Two texts that normalize equal differ only in case and spacing.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Lowercased alphanumeric word tokens, in document order.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

/// Distinct content-bearing tokens: longer than two characters and not a
/// stop word.
pub fn significant_terms(text: &str) -> HashSet<String> {
    tokenize(text)
        .into_iter()
        .filter(|w| w.len() > 2 && !STOP_WORDS.contains(&w.as_str()))
        .collect()
}

/// Jaccard overlap of two term sets. Empty union yields 0.0.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}

/// Whether `word` occurs in `haystack` bounded by non-alphanumeric
/// characters on both sides. Both arguments are expected lowercased.
pub fn contains_word(haystack: &str, word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(word) {
        let start = from + pos;
        let end = start + word.len();
        let open = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let close = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if open && close {
            return true;
        }
        from = start + word.len();
    }
    false
}

/// Count word-bounded occurrences of `word` in `haystack`. Both arguments
/// are expected lowercased.
pub fn count_word(haystack: &str, word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(word) {
        let start = from + pos;
        let end = start + word.len();
        let open = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let close = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if open && close {
            count += 1;
        }
        from = end;
    }
    count
}

/// Split into sentences on runs of `.`, `!`, `?`, preserving byte spans
/// into the input. Trailing terminators stay with their sentence and
/// surrounding whitespace is trimmed out of each span.
pub fn split_sentences(text: &str) -> Vec<(Span, &str)> {
    let mut out = Vec::new();
    let mut start = 0usize;
    let mut in_terminator = false;
    for (i, ch) in text.char_indices() {
        if matches!(ch, '.' | '!' | '?') {
            in_terminator = true;
        } else if in_terminator {
            push_trimmed(&mut out, start, &text[start..i]);
            start = i;
            in_terminator = false;
        }
    }
    push_trimmed(&mut out, start, &text[start..]);
    out
}

fn push_trimmed<'a>(out: &mut Vec<(Span, &'a str)>, offset: usize, raw: &'a str) {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    let lead = raw.len() - raw.trim_start().len();
    let start = offset + lead;
    out.push((Span::new(start, start + trimmed.len()), trimmed));
}

/// Fraction of non-whitespace characters that are alphabetic.
/// Low values indicate tables, numbers, or other non-prose input.
pub fn alpha_ratio(text: &str) -> f64 {
    let mut total = 0usize;
    let mut alpha = 0usize;
    for c in text.chars().filter(|c| !c.is_whitespace()) {
        total += 1;
        if c.is_alphabetic() {
            alpha += 1;
        }
    }
    if total == 0 {
        0.0
    } else {
        alpha as f64 / total as f64
    }
}

/// Sentence-length based readability on a 0-100 scale, higher reading
/// easier. Long sentences and long words both pull the score down.
pub fn readability(text: &str) -> ReadabilityMetrics {
    let sentences = split_sentences(text);
    let words: Vec<&str> = text.split_whitespace().collect();
    if sentences.is_empty() || words.is_empty() {
        return ReadabilityMetrics {
            score: 0.0,
            avg_sentence_length: 0.0,
            avg_word_length: 0.0,
            level: "Difficult".to_string(),
        };
    }
    let avg_sentence_length = words.len() as f64 / sentences.len() as f64;
    let total_chars: usize = words.iter().map(|w| w.chars().count()).sum();
    let avg_word_length = total_chars as f64 / words.len() as f64;
    let score = (100.0 - avg_sentence_length * 2.0 - avg_word_length * 5.0).max(0.0);
    let level = if score > 70.0 {
        "Easy"
    } else if score > 40.0 {
        "Medium"
    } else {
        "Difficult"
    };
    ReadabilityMetrics {
        score,
        avg_sentence_length,
        avg_word_length,
        level: level.to_string(),
    }
}

/// Shorten to at most `max_chars` characters, appending "..." when cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_case_and_spacing() {
        assert_eq!(
            normalize("  Payment\tshall  be\nMADE "),
            "payment shall be made"
        );
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        let tokens = tokenize("Late payments accrue interest, at 1.5% per month.");
        assert_eq!(
            tokens,
            vec!["late", "payments", "accrue", "interest", "at", "1", "5", "per", "month"]
        );
    }

    #[test]
    fn test_significant_terms_drop_stop_words() {
        let terms = significant_terms("The party shall indemnify the other party");
        assert!(terms.contains("indemnify"), "content word should survive");
        assert!(!terms.contains("party"), "legal boilerplate should be dropped");
        assert!(!terms.contains("shall"), "modal should be dropped");
    }

    #[test]
    fn test_jaccard_identical_sets() {
        let a = significant_terms("liability cap exceeds fees paid");
        let sim = jaccard(&a, &a);
        assert!(
            (sim - 1.0).abs() < 1e-9,
            "Identical sets should have overlap 1.0, got {sim}"
        );
    }

    #[test]
    fn test_jaccard_disjoint_sets() {
        let a = significant_terms("liability cap");
        let b = significant_terms("confidential information");
        assert_eq!(jaccard(&a, &b), 0.0);
    }

    #[test]
    fn test_jaccard_empty_union() {
        let empty = HashSet::new();
        assert_eq!(jaccard(&empty, &empty), 0.0, "empty union must not divide by zero");
    }

    #[test]
    fn test_contains_word_boundaries() {
        assert!(contains_word("a penalty applies", "penalty"));
        assert!(contains_word("penalty applies", "penalty"), "match at start");
        assert!(contains_word("pay the penalty", "penalty"), "match at end");
        assert!(!contains_word("penalties apply", "penalty"), "substring of a longer word");
        assert!(!contains_word("no fine here", "penalty"));
    }

    #[test]
    fn test_count_word_bounded_occurrences() {
        assert_eq!(count_word("liability begets liability", "liability"), 2);
        assert_eq!(count_word("reliability is not liability", "liability"), 1);
        assert_eq!(count_word("no occurrences here", "liability"), 0);
    }

    #[test]
    fn test_contains_word_skips_embedded_then_finds_free() {
        assert!(contains_word("penalties and one penalty", "penalty"));
    }

    #[test]
    fn test_split_sentences_spans_map_back() {
        let text = "First sentence. Second one! Third?";
        let sentences = split_sentences(text);
        assert_eq!(sentences.len(), 3);
        for (span, s) in &sentences {
            assert_eq!(span.slice(text), *s, "span must slice to its sentence");
        }
        assert_eq!(sentences[0].1, "First sentence.");
        assert_eq!(sentences[1].1, "Second one!");
        assert_eq!(sentences[2].1, "Third?");
    }

    #[test]
    fn test_split_sentences_terminator_runs() {
        let sentences = split_sentences("Wait... really?! Yes.");
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0].1, "Wait...");
        assert_eq!(sentences[1].1, "really?!");
    }

    #[test]
    fn test_split_sentences_no_terminator() {
        let sentences = split_sentences("no terminal punctuation here");
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].1, "no terminal punctuation here");
    }

    #[test]
    fn test_split_sentences_empty() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n  ").is_empty());
    }

    #[test]
    fn test_alpha_ratio_prose_vs_table() {
        assert!(alpha_ratio("The parties agree as follows") > 0.9);
        assert!(alpha_ratio("12.5 | 44.0 | 91.2") < 0.2);
        assert_eq!(alpha_ratio(""), 0.0);
    }

    #[test]
    fn test_readability_short_simple_text() {
        let m = readability("The cat sat. The dog ran.");
        assert!(m.score > 70.0, "short simple sentences should score Easy, got {}", m.score);
        assert_eq!(m.level, "Easy");
        assert!((m.avg_sentence_length - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_readability_dense_legal_text() {
        let m = readability(
            "Notwithstanding anything contained hereinabove the aforementioned \
             indemnification obligations shall survive expiration notwithstanding \
             termination howsoever occasioned including without limitation circumstances \
             attributable to negligence misrepresentation or nonperformance.",
        );
        assert_eq!(m.level, "Difficult", "dense legalese should score Difficult");
    }

    #[test]
    fn test_readability_empty_text() {
        let m = readability("");
        assert_eq!(m.score, 0.0);
        assert_eq!(m.level, "Difficult");
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_long_text_ellipsis() {
        let out = truncate("a very long piece of clause text", 12);
        assert!(out.ends_with("..."));
        assert!(out.chars().count() <= 12);
    }

    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_sentence_spans_slice_back(text in "[ -~]{0,200}") {
                for (span, s) in split_sentences(&text) {
                    prop_assert_eq!(span.slice(&text), s);
                    prop_assert!(!s.trim().is_empty());
                }
            }

            #[test]
            fn prop_jaccard_bounded(a in "[a-z ]{0,80}", b in "[a-z ]{0,80}") {
                let sim = jaccard(&significant_terms(&a), &significant_terms(&b));
                prop_assert!((0.0..=1.0).contains(&sim));
            }

            #[test]
            fn prop_truncate_respects_limit(text in "\\PC{0,120}", max in 4usize..40) {
                let out = truncate(&text, max);
                prop_assert!(out.chars().count() <= max);
            }
        }
    }
}

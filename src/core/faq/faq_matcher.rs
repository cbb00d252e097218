// Fuzzy FAQ matching.
//
// Free text is compared against every stored question with a token-set
// similarity score on a 0-100 scale. The best candidate wins if it clears the
// threshold, otherwise callers get the fallback answer. No state is kept
// between lookups.

use std::collections::BTreeSet;

/// Minimum score a candidate needs before its answer is returned.
pub const DEFAULT_THRESHOLD: f64 = 70.0;

/// Reply used when no stored question is close enough.
pub const FALLBACK_ANSWER: &str =
    "Maaf, saya belum punya jawaban untuk pertanyaan itu. Silakan tanyakan hal lain.";

/// A canned question and its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// The winning candidate for a query.
#[derive(Debug, Clone, PartialEq)]
pub struct FaqHit<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome<'a> {
    Hit(FaqHit<'a>),
    Fallback,
}

impl MatchOutcome<'_> {
    /// Text to show the user. Never empty.
    pub fn reply(&self) -> &str {
        match self {
            MatchOutcome::Hit(hit) => hit.answer,
            MatchOutcome::Fallback => FALLBACK_ANSWER,
        }
    }
}

pub struct FaqMatcher {
    entries: Vec<FaqEntry>,
    // Lower-cased, trimmed questions, index-aligned with `entries`.
    normalized: Vec<String>,
    threshold: f64,
}

impl FaqMatcher {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self::with_threshold(entries, DEFAULT_THRESHOLD)
    }

    pub fn with_threshold(entries: Vec<FaqEntry>, threshold: f64) -> Self {
        let normalized = entries.iter().map(|e| normalize(&e.question)).collect();
        Self {
            entries,
            normalized,
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest-scoring candidate regardless of the threshold.
    ///
    /// Among equal scores a candidate identical to the normalized input is
    /// preferred; beyond that the choice is unspecified (currently the earliest
    /// entry).
    pub fn best_match(&self, input: &str) -> Option<FaqHit<'_>> {
        let query = normalize(input);
        let mut best: Option<(usize, f64, bool)> = None;

        for (idx, candidate) in self.normalized.iter().enumerate() {
            let score = token_set_ratio(&query, candidate);
            let exact = *candidate == query;
            let better = match best {
                None => true,
                Some((_, best_score, best_exact)) => {
                    score > best_score || (score == best_score && exact && !best_exact)
                }
            };
            if better {
                best = Some((idx, score, exact));
            }
        }

        best.map(|(idx, score, _)| {
            let entry = &self.entries[idx];
            FaqHit {
                question: &entry.question,
                answer: &entry.answer,
                score,
            }
        })
    }

    /// Answer for free text, or the fallback when nothing clears the threshold.
    pub fn answer(&self, input: &str) -> MatchOutcome<'_> {
        match self.best_match(input) {
            Some(hit) if hit.score >= self.threshold => MatchOutcome::Hit(hit),
            _ => MatchOutcome::Fallback,
        }
    }
}

/// Lower-case and trim. No stemming or stop-word removal.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Token-set similarity between two strings on a 0-100 scale.
///
/// Both strings are split on whitespace into sorted token sets. When one set
/// contains the other (and they share at least one token) the score is 100.
/// Otherwise the shared tokens are compared against each side's leftovers and
/// the best of the three pairings is returned, which keeps the score stable
/// under word reordering and extra words.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersection: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    if !intersection.is_empty() && (only_a.is_empty() || only_b.is_empty()) {
        return 100.0;
    }

    let sect = intersection.join(" ");
    let combined_a = join_nonempty(&sect, &only_a.join(" "));
    let combined_b = join_nonempty(&sect, &only_b.join(" "));

    let mut score = ratio(&combined_a, &combined_b);
    if !sect.is_empty() {
        score = score
            .max(ratio(&sect, &combined_a))
            .max(ratio(&sect, &combined_b));
    }
    score
}

fn join_nonempty(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (_, true) => head.to_string(),
        _ => format!("{} {}", head, tail),
    }
}

/// Normalized indel similarity: 2 * LCS / (len_a + len_b), scaled to 100.
fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    100.0 * (2 * lcs_len(&a, &b)) as f64 / total as f64
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut cur = vec![0usize; b.len() + 1];
    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            cur[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(cur[j])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::faq::faq_catalog::default_faq;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_token_set_ratio_ignores_word_order() {
        assert_eq!(token_set_ratio("kuning padi", "padi kuning"), 100.0);
    }

    #[test]
    fn test_token_set_ratio_subset_scores_full() {
        assert_eq!(token_set_ratio("padi kuning", "kenapa padi saya kuning"), 100.0);
    }

    #[test]
    fn test_token_set_ratio_partial_overlap() {
        // "padi kuneng" vs "padi kuning": 10 shared chars over 22
        assert_close(token_set_ratio("padi kuneng", "padi kuning"), 90.909);
    }

    #[test]
    fn test_token_set_ratio_disjoint_and_empty() {
        assert_close(token_set_ratio("apel", "jeruk"), 22.222);
        assert_eq!(token_set_ratio("", "padi"), 0.0);
        assert_eq!(token_set_ratio("   ", "   "), 0.0);
    }

    #[test]
    fn test_exact_question_scores_100() {
        let matcher = FaqMatcher::new(default_faq());
        match matcher.answer("mengapa padi saya kuning") {
            MatchOutcome::Hit(hit) => {
                assert_eq!(hit.question, "mengapa padi saya kuning");
                assert_eq!(hit.score, 100.0);
                assert!(hit.answer.contains("kekurangan nitrogen"));
            }
            MatchOutcome::Fallback => panic!("expected a hit"),
        }
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let matcher = FaqMatcher::new(default_faq());
        let plain = matcher.answer("mengapa padi saya kuning").reply().to_string();
        let noisy = matcher.answer("  Mengapa PADI saya Kuning \n").reply().to_string();
        assert_eq!(plain, noisy);
    }

    #[test]
    fn test_every_catalog_question_finds_itself() {
        let faq = default_faq();
        let matcher = FaqMatcher::new(faq.clone());
        for entry in &faq {
            match matcher.answer(&entry.question) {
                MatchOutcome::Hit(hit) => {
                    assert_eq!(normalize(hit.question), normalize(&entry.question));
                    assert_eq!(hit.score, 100.0);
                }
                MatchOutcome::Fallback => panic!("no hit for {:?}", entry.question),
            }
        }
    }

    #[test]
    fn test_typos_still_match() {
        let matcher = FaqMatcher::new(default_faq());

        let cases = [
            ("waktu tanem padi terbaik", "waktu tanam padi terbaik"),
            ("cara menanem jagung", "cara menanam jagung"),
            ("padi kunin", "padi kuning"),
        ];
        for (input, expected) in cases {
            match matcher.answer(input) {
                MatchOutcome::Hit(hit) => assert_eq!(hit.question, expected, "input {input:?}"),
                MatchOutcome::Fallback => panic!("fallback for {input:?}"),
            }
        }
    }

    #[test]
    fn test_unrelated_text_falls_back() {
        let matcher = FaqMatcher::new(default_faq());
        let outcome = matcher.answer("bagaimana cara bermain sepak bola di stadion");
        assert_eq!(outcome, MatchOutcome::Fallback);
        assert_eq!(outcome.reply(), FALLBACK_ANSWER);

        assert_eq!(matcher.answer("xyz qwerty"), MatchOutcome::Fallback);
    }

    #[test]
    fn test_empty_input_and_empty_catalog() {
        let matcher = FaqMatcher::new(default_faq());
        assert!(!matcher.is_empty());
        assert_eq!(matcher.answer("   "), MatchOutcome::Fallback);

        let empty = FaqMatcher::new(Vec::new());
        assert!(empty.is_empty());
        assert!(empty.best_match("padi").is_none());
        assert_eq!(empty.answer("padi kuning"), MatchOutcome::Fallback);
    }

    #[test]
    fn test_threshold_is_configurable() {
        let entries = vec![FaqEntry::new("padi kuning", "Kurang hara.")];

        let lenient = FaqMatcher::new(entries.clone());
        assert_eq!(lenient.answer("padi kuneng").reply(), "Kurang hara.");

        let strict = FaqMatcher::with_threshold(entries, 95.0);
        assert_eq!(strict.answer("padi kuneng"), MatchOutcome::Fallback);
    }

    #[test]
    fn test_choice_does_not_depend_on_candidate_order() {
        let faq = default_faq();
        let forward = FaqMatcher::new(faq.clone());

        let mut reversed_entries = faq.clone();
        reversed_entries.reverse();
        let reversed = FaqMatcher::new(reversed_entries);

        let mut rotated_entries = faq;
        rotated_entries.rotate_left(37);
        let rotated = FaqMatcher::new(rotated_entries);

        for input in [
            "mengapa padi saya kuning",
            "waktu tanem padi terbaik",
            "cara menanem jagung",
            "padi kunin",
            "jagung ga tumbuh",
        ] {
            let expected = forward.answer(input).reply().to_string();
            assert_eq!(reversed.answer(input).reply(), expected, "input {input:?}");
            assert_eq!(rotated.answer(input).reply(), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_capitalised_catalog_question_matches() {
        let matcher = FaqMatcher::new(vec![
            FaqEntry::new("fungsi pupuk N", "Daun dan batang."),
            FaqEntry::new("fungsi pupuk P", "Akar dan bunga."),
        ]);
        assert_eq!(matcher.answer("fungsi pupuk n").reply(), "Daun dan batang.");
    }
}

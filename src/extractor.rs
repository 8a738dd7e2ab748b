use std::sync::LazyLock;

use regex::Regex;

use crate::types::{DetectedSymptom, DetectedSymptoms, TriageError};
use crate::vocabulary::SymptomVocabulary;

/// Minimum partial-ratio similarity (out of 100) for a vocabulary phrase to
/// count as detected.
const FUZZY_ACCEPT_THRESHOLD: f64 = 80.0;

/// First-person and filler phrases that are never part of a symptom phrase.
/// Removed before matching; longer alternatives listed first.
static STOPLIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(suffering from|experiencing|i have|i feel|i am|feeling|having|with|and|but|the|an|a)\b",
    )
    .expect("stoplist pattern is valid")
});

static NON_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z\s]").expect("non-letter pattern is valid"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Lowercase, drop filler phrases, strip everything outside `[a-z ]`, and
/// collapse whitespace. The result is the only text the matcher ever sees.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = STOPLIST.replace_all(&lowered, "");
    let letters = NON_LETTER.replace_all(&stripped, " ");
    WHITESPACE.replace_all(&letters, " ").trim().to_string()
}

/// Approximate partial-ratio similarity (0–100): the best normalized
/// Levenshtein similarity between the shorter string and any window of the
/// longer one. Windows one character wider than the shorter string are also
/// tried so a single inserted character inside a phrase still scores high.
pub(crate) fn partial_ratio(a: &str, b: &str) -> f64 {
    let (shorter, longer) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let short_len = shorter.chars().count();
    if short_len == 0 {
        return 0.0;
    }

    let long_chars: Vec<char> = longer.chars().collect();
    let mut best = 0.0_f64;

    for window_len in [short_len, short_len + 1] {
        if window_len > long_chars.len() {
            continue;
        }
        for start in 0..=(long_chars.len() - window_len) {
            let window: String = long_chars[start..start + window_len].iter().collect();
            let similarity = strsim::normalized_levenshtein(shorter, &window) * 100.0;
            if similarity > best {
                best = similarity;
                if best >= 100.0 {
                    return best;
                }
            }
        }
    }

    best
}

/// Extract the canonical symptom set from free text.
///
/// The vocabulary is walked in definition order and every candidate keeps
/// its best similarity. Subsumption dedup resolves each overlap group in
/// favor of the closest match, falling back to base weight (then definition
/// order) on similarity ties: an exact hit on "severe headache" subsumes
/// plain "headache", but a fuzzy hit on a longer phrase never displaces a
/// near-exact hit on the phrase the input actually used. The surviving set
/// is ordered by descending base weight. Output is byte-identical across
/// runs for the same input.
pub fn extract(
    vocabulary: &SymptomVocabulary,
    text: &str,
) -> Result<DetectedSymptoms, TriageError> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Err(TriageError::NoSymptomsDetected);
    }

    let mut candidates: Vec<(DetectedSymptom, f64)> = Vec::new();
    for &(phrase, weight) in vocabulary.entries() {
        let similarity = partial_ratio(phrase, &normalized);
        if similarity > FUZZY_ACCEPT_THRESHOLD {
            candidates.push((DetectedSymptom { phrase, weight }, similarity));
        }
    }

    if candidates.is_empty() {
        return Err(TriageError::NoSymptomsDetected);
    }

    // Stable sort: similarity first, weight second, remaining ties keep
    // vocabulary definition order. The first phrase of each overlap group
    // wins the dedup below.
    candidates.sort_by(|(a, sim_a), (b, sim_b)| {
        sim_b
            .total_cmp(sim_a)
            .then(b.weight.total_cmp(&a.weight))
    });

    let mut kept: Vec<DetectedSymptom> = Vec::new();
    for (candidate, _) in candidates {
        let overlaps = kept
            .iter()
            .any(|k| k.phrase.contains(candidate.phrase) || candidate.phrase.contains(k.phrase));
        if !overlaps {
            kept.push(candidate);
        }
    }

    kept.sort_by(|a, b| b.weight.total_cmp(&a.weight));

    DetectedSymptoms::from_entries(kept).ok_or(TriageError::NoSymptomsDetected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> &'static SymptomVocabulary {
        SymptomVocabulary::global()
    }

    #[test]
    fn normalize_strips_fillers_and_punctuation() {
        assert_eq!(
            normalize("I have a fever and headache!!"),
            "fever headache"
        );
        assert_eq!(
            normalize("  I am   experiencing chest pain, really. "),
            "chest pain really"
        );
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!! ??? 123"), "");
    }

    #[test]
    fn partial_ratio_exact_substring_is_full_score() {
        assert_eq!(partial_ratio("fever", "high fever today"), 100.0);
        assert_eq!(partial_ratio("chest pain", "chest pain"), 100.0);
    }

    #[test]
    fn partial_ratio_rejects_unrelated_text() {
        assert!(partial_ratio("chest pain", "quick brown fox") < FUZZY_ACCEPT_THRESHOLD);
    }

    #[test]
    fn partial_ratio_is_symmetric_in_argument_order() {
        let a = partial_ratio("high fever", "very high fever");
        let b = partial_ratio("very high fever", "high fever");
        assert_eq!(a, b);
        assert_eq!(a, 100.0);
    }

    #[test]
    fn extracts_both_phrases_from_concrete_scenario() {
        let set = extract(vocab(), "I have chest pain and severe headache").unwrap();
        assert_eq!(set.phrases(), vec!["chest pain", "severe headache"]);
        // Plain "headache" matched too but was subsumed by "severe headache".
        assert!(!set.contains("headache"));
    }

    #[test]
    fn specific_phrase_subsumes_general_one() {
        let set = extract(vocab(), "I have a high fever and cough").unwrap();
        assert!(!set.contains("fever"));
        assert!(set.contains("cough"));
        // "high fever" is itself a window of "very high fever", so the most
        // specific (and heaviest) phrase wins the overlap group.
        assert!(set.contains("very high fever") || set.contains("high fever"));
    }

    #[test]
    fn no_output_phrase_contains_another() {
        for text in [
            "I have chest pain and severe headache",
            "high fever, sore throat and a severe sore throat",
            "bleeding and severe bleeding after the fall",
        ] {
            let set = extract(vocab(), text).unwrap();
            let phrases = set.phrases();
            for a in &phrases {
                for b in &phrases {
                    if a != b {
                        assert!(
                            !a.contains(b.as_str()),
                            "'{b}' subsumed by '{a}' in output for {text:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn output_is_sorted_by_descending_weight() {
        let set = extract(vocab(), "runny nose, chest pain and a cough").unwrap();
        let weights: Vec<f64> = set.iter().map(|e| e.weight).collect();
        for pair in weights.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
        assert_eq!(set.phrases()[0], "chest pain");
    }

    #[test]
    fn tolerates_small_typos() {
        let set = extract(vocab(), "I have a feever and soore throat").unwrap();
        assert!(set.contains("fever"));
        assert!(set.contains("sore throat"));
    }

    /// A misspelled plain phrase can also sit within fuzzy range of a longer,
    /// heavier vocabulary phrase ("soore throat" scores 83.3 against "severe
    /// sore throat" but 91.7 against "sore throat"). Dedup must resolve the
    /// overlap to the closer match, never escalate to wording the input
    /// does not contain.
    #[test]
    fn typo_is_not_promoted_to_heavier_phrase() {
        let set = extract(vocab(), "I have a feever and soore throat").unwrap();
        assert!(set.contains("sore throat"));
        assert!(!set.contains("severe sore throat"));

        // Exact-similarity ties still prefer the more specific phrase.
        let exact = extract(vocab(), "a truly severe sore throat").unwrap();
        assert!(exact.contains("severe sore throat"));
        assert!(!exact.contains("sore throat"));
    }

    #[test]
    fn extraction_is_deterministic() {
        let text = "I have chills, a high fever and body aches";
        let first = extract(vocab(), text).unwrap();
        let second = extract(vocab(), text).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.phrases(), second.phrases());
    }

    #[test]
    fn empty_input_is_insufficient() {
        assert_eq!(
            extract(vocab(), "").unwrap_err(),
            TriageError::NoSymptomsDetected
        );
        assert_eq!(
            extract(vocab(), "   !!!   ").unwrap_err(),
            TriageError::NoSymptomsDetected
        );
    }

    #[test]
    fn unrecognized_text_is_insufficient_not_zero() {
        let err = extract(vocab(), "the quick brown fox jumps").unwrap_err();
        assert_eq!(err, TriageError::NoSymptomsDetected);
    }
}

use crate::catalog::ConditionCatalog;
use crate::types::{ConditionMatch, DetectedSymptoms};

/// Minimum overlap percentage for a condition to be surfaced. Filters out
/// conditions sharing only a single coincidental symptom out of many.
const MATCH_SCORE_THRESHOLD: f64 = 30.0;

/// Number of ranked matches returned to the caller.
const TOP_N: usize = 3;

/// Rank catalog conditions by symptom overlap with the detected set.
///
/// `match_score = 100 · |detected ∩ required| / |required|`; only scores above
/// the inclusion threshold survive, sorted descending with catalog definition
/// order breaking ties. Pure function of the static catalog and the input.
pub fn match_conditions(
    catalog: &ConditionCatalog,
    symptoms: &DetectedSymptoms,
) -> Vec<ConditionMatch> {
    let mut scored: Vec<(f64, ConditionMatch)> = Vec::new();

    for entry in catalog.entries() {
        let overlap = entry
            .symptoms
            .iter()
            .filter(|required| symptoms.contains(required))
            .count();
        let raw = 100.0 * overlap as f64 / entry.symptoms.len() as f64;
        if raw > MATCH_SCORE_THRESHOLD {
            scored.push((
                raw,
                ConditionMatch {
                    condition: entry.name,
                    match_score: raw.round() as u8,
                    care_level: entry.care_level,
                    advice: entry.advice,
                },
            ));
        }
    }

    // Stable sort: equal scores keep catalog definition order.
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.truncate(TOP_N);
    scored.into_iter().map(|(_, m)| m).collect()
}

use std::time::Instant;

use crate::catalog::ConditionCatalog;
use crate::types::{AnalysisReport, TriageError, DISCLAIMER};
use crate::vocabulary::SymptomVocabulary;
use crate::{emergency, extractor, matcher, scorer};

/// Entry point of the triage core: extraction, scoring, condition matching,
/// and emergency screening over the built-in tables.
///
/// The engine holds only references to the process-wide read-only tables, so
/// it is free to construct per request or share across threads.
pub struct TriageEngine {
    vocabulary: &'static SymptomVocabulary,
    catalog: &'static ConditionCatalog,
}

impl TriageEngine {
    pub fn new() -> Self {
        Self {
            vocabulary: SymptomVocabulary::global(),
            catalog: ConditionCatalog::global(),
        }
    }

    /// Run the full triage pipeline on one request.
    ///
    /// Returns `NoSymptomsDetected` when no vocabulary phrase matches; the
    /// scorer is never invoked in that case, so an unrecognized input can
    /// never be mistaken for a low score.
    pub fn analyze(
        &self,
        text: &str,
        age: Option<u32>,
        duration_days: Option<i64>,
    ) -> Result<AnalysisReport, TriageError> {
        let start = Instant::now();

        let symptoms = extractor::extract(self.vocabulary, text)?;
        let severity = scorer::score(&symptoms, age, duration_days);
        let possible_conditions = matcher::match_conditions(self.catalog, &symptoms);
        let emergency = emergency::screen(text);

        let processing_time_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            symptoms = symptoms.len(),
            score = severity.score,
            risk = severity.risk.as_str(),
            conditions = possible_conditions.len(),
            emergency = emergency.is_emergency,
            processing_ms = processing_time_ms,
            "Symptom triage complete"
        );

        Ok(AnalysisReport {
            detected_symptoms: symptoms.phrases(),
            severity_score: severity.score,
            risk_level: severity.risk,
            age_factor: severity.age_factor,
            duration_factor: severity.duration_factor,
            symptom_count_factor: severity.symptom_count_factor,
            possible_conditions,
            emergency,
            disclaimer: DISCLAIMER,
            processing_time_ms,
        })
    }
}

impl Default for TriageEngine {
    fn default() -> Self {
        Self::new()
    }
}

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::types::{AnalysisReport, ConditionMatch, RiskLevel, TriageError, DISCLAIMER};

/// Structured summary handed to a downstream summarizer. Field order is fixed
/// by this struct, so two calls with the same report and timestamp produce
/// byte-identical JSON.
#[derive(Serialize)]
struct SummaryPayload<'a> {
    generated_at: NaiveDateTime,
    human_input: &'a str,
    symptom_analysis: SymptomAnalysis<'a>,
    disclaimer: &'static str,
}

#[derive(Serialize)]
struct SymptomAnalysis<'a> {
    detected_symptoms: &'a [String],
    severity_score: f64,
    risk_level: RiskLevel,
    possible_conditions: &'a [ConditionMatch],
}

/// Render a finished report as the pretty-printed summarizer payload.
///
/// The timestamp is supplied by the caller rather than read from the clock,
/// keeping the payload a pure function of its arguments.
pub fn build_summary_payload(
    report: &AnalysisReport,
    human_input: &str,
    generated_at: NaiveDateTime,
) -> Result<String, TriageError> {
    let payload = SummaryPayload {
        generated_at,
        human_input,
        symptom_analysis: SymptomAnalysis {
            detected_symptoms: &report.detected_symptoms,
            severity_score: report.severity_score,
            risk_level: report.risk_level,
            possible_conditions: &report.possible_conditions,
        },
        disclaimer: DISCLAIMER,
    };

    serde_json::to_string_pretty(&payload).map_err(|e| TriageError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::TriageEngine;
    use chrono::NaiveDate;

    fn sample_report() -> (AnalysisReport, &'static str) {
        let text = "I have chest pain and severe headache";
        let report = TriageEngine::new()
            .analyze(text, Some(30), Some(2))
            .unwrap();
        (report, text)
    }

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(9, 26, 53)
            .unwrap()
    }

    #[test]
    fn payload_is_valid_json_with_expected_fields() {
        let (report, text) = sample_report();
        let json = build_summary_payload(&report, text, timestamp()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["human_input"], text);
        assert_eq!(value["disclaimer"], DISCLAIMER);
        assert_eq!(value["symptom_analysis"]["risk_level"], "HIGH");
        assert_eq!(
            value["symptom_analysis"]["detected_symptoms"][0],
            "chest pain"
        );
        assert!(value["symptom_analysis"]["possible_conditions"].is_array());
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn payload_is_byte_identical_across_calls() {
        let (report, text) = sample_report();
        let first = build_summary_payload(&report, text, timestamp()).unwrap();
        let second = build_summary_payload(&report, text, timestamp()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn conditions_carry_care_level_and_advice() {
        let (report, text) = sample_report();
        let json = build_summary_payload(&report, text, timestamp()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        for condition in value["symptom_analysis"]["possible_conditions"]
            .as_array()
            .unwrap()
        {
            assert!(condition["condition"].is_string());
            assert!(condition["match_score"].is_u64());
            assert!(condition["care_level"].is_string());
            assert!(condition["advice"].is_string());
        }
    }
}

use serde::Serialize;

/// Phrases that mark an input as potentially life-threatening regardless of
/// the computed score. Screened as plain substrings of the lowercased raw
/// input, before any normalization, so wording like "difficulty breathing!"
/// still hits.
const CRITICAL_PHRASES: &[&str] = &[
    "chest pain",
    "difficulty breathing",
    "severe bleeding",
    "unconscious",
    "seizure",
    "stroke symptoms",
    "severe head injury",
    "poisoning",
    "severe allergic reaction",
    "heart attack",
    "severe burns",
    "choking",
    "drowning",
    "electric shock",
    "severe abdominal pain",
    "sudden confusion",
    "loss of consciousness",
    "paralysis",
    "severe trauma",
    "overdose",
];

const EMERGENCY_MESSAGE: &str =
    "CRITICAL SYMPTOMS DETECTED! Call emergency services immediately!";
const NON_EMERGENCY_MESSAGE: &str =
    "Symptoms do not appear critical, but please consult a doctor.";

/// Outcome of the critical-phrase screen, attached to every report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmergencyScreen {
    pub is_emergency: bool,
    pub message: &'static str,
}

/// Screen raw input text for critical symptom phrases.
pub fn screen(text: &str) -> EmergencyScreen {
    let lowered = text.to_lowercase();
    let is_emergency = CRITICAL_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase));

    EmergencyScreen {
        is_emergency,
        message: if is_emergency {
            EMERGENCY_MESSAGE
        } else {
            NON_EMERGENCY_MESSAGE
        },
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::emergency::EmergencyScreen;
use crate::vocabulary::SymptomVocabulary;

/// Fixed disclaimer attached to every report and summarizer payload.
pub const DISCLAIMER: &str =
    "This summary is informational and not a substitute for professional medical evaluation.";

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Coarse risk tier derived from the final, multiplier-adjusted severity score.
/// Boundaries are fixed constants in `scorer`; they are never evaluated against
/// the raw symptom average.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Moderate => "MODERATE",
            Self::High => "HIGH",
        }
    }
}

// ---------------------------------------------------------------------------
// CareLevel
// ---------------------------------------------------------------------------

/// Urgency of the recommended response for a matched condition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum CareLevel {
    SelfCare,
    Medical,
    Emergency,
}

impl CareLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelfCare => "self-care",
            Self::Medical => "medical",
            Self::Emergency => "emergency",
        }
    }
}

// ---------------------------------------------------------------------------
// DetectedSymptoms
// ---------------------------------------------------------------------------

/// One canonical symptom phrase recognized in the input, with its base weight.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct DetectedSymptom {
    pub phrase: &'static str,
    pub weight: f64,
}

/// Ordered, deduplicated set of canonical symptom phrases.
///
/// Invariants, enforced at construction:
/// - never empty (extraction with zero matches yields `NoSymptomsDetected`),
/// - insertion order is descending base weight,
/// - no phrase is a substring of another (subsumption dedup).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DetectedSymptoms {
    entries: Vec<DetectedSymptom>,
}

impl DetectedSymptoms {
    /// Build from pre-deduplicated entries. Internal: callers go through
    /// `extractor::extract` or `from_phrases`.
    pub(crate) fn from_entries(entries: Vec<DetectedSymptom>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self { entries })
    }

    /// Build directly from canonical phrases, resolving weights against the
    /// built-in vocabulary. Returns `None` if the list is empty or contains a
    /// phrase the vocabulary does not know.
    pub fn from_phrases<'a, I>(phrases: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let vocabulary = SymptomVocabulary::global();
        let mut entries = Vec::new();
        for phrase in phrases {
            let (canonical, weight) = vocabulary.entry_of(phrase)?;
            entries.push(DetectedSymptom {
                phrase: canonical,
                weight,
            });
        }
        Self::from_entries(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DetectedSymptom> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.entries.iter().any(|e| e.phrase == phrase)
    }

    /// Canonical phrases in detection order (descending base weight).
    pub fn phrases(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.phrase.to_string()).collect()
    }
}

// ---------------------------------------------------------------------------
// SeverityResult
// ---------------------------------------------------------------------------

/// Per-request severity outcome with its contributing multipliers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeverityResult {
    /// Final adjusted score, clamped to [0, 10], rounded to one decimal.
    pub score: f64,
    pub risk: RiskLevel,
    pub age_factor: f64,
    pub duration_factor: f64,
    pub symptom_count_factor: f64,
}

// ---------------------------------------------------------------------------
// ConditionMatch
// ---------------------------------------------------------------------------

/// A candidate condition ranked by symptom overlap.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConditionMatch {
    pub condition: &'static str,
    /// Rounded overlap percentage (0–100).
    pub match_score: u8,
    pub care_level: CareLevel,
    pub advice: &'static str,
}

// ---------------------------------------------------------------------------
// AnalysisReport
// ---------------------------------------------------------------------------

/// Successful outcome of `TriageEngine::analyze`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AnalysisReport {
    pub detected_symptoms: Vec<String>,
    pub severity_score: f64,
    pub risk_level: RiskLevel,
    pub age_factor: f64,
    pub duration_factor: f64,
    pub symptom_count_factor: f64,
    pub possible_conditions: Vec<ConditionMatch>,
    pub emergency: EmergencyScreen,
    pub disclaimer: &'static str,
    pub processing_time_ms: u64,
}

// ---------------------------------------------------------------------------
// TriageError
// ---------------------------------------------------------------------------

/// Failure modes of the triage core. Deliberately small: everything else is
/// total computation over static tables and clamped primitive inputs.
#[derive(Error, Debug, PartialEq)]
pub enum TriageError {
    /// No vocabulary phrase matched the input. Semantically distinct from a
    /// zero score: callers must surface this as "nothing recognized".
    #[error("No recognizable symptoms detected. Please describe your symptoms more clearly.")]
    NoSymptomsDetected,

    #[error("Serialization error: {0}")]
    Serialization(String),
}

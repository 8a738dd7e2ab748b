//! Deterministic symptom triage: free-text symptom extraction, heuristic
//! severity scoring, condition matching, and emergency screening over
//! built-in reference tables.
//!
//! The whole pipeline is rule-based and pure apart from wall-clock timing:
//! the same input always produces the same report. [`TriageEngine::analyze`]
//! is the entry point; [`payload::build_summary_payload`] renders a report
//! for a downstream summarizer.
//!
//! ```
//! use medisense_triage::TriageEngine;
//!
//! let engine = TriageEngine::new();
//! let report = engine
//!     .analyze("I have a fever and a bad cough", Some(34), Some(3))
//!     .unwrap();
//! assert!(report.detected_symptoms.contains(&"cough".to_string()));
//! ```

pub mod catalog;
pub mod emergency;
pub mod engine;
pub mod extractor;
pub mod matcher;
pub mod payload;
pub mod scorer;
pub mod types;
pub mod vocabulary;

pub use emergency::EmergencyScreen;
pub use engine::TriageEngine;
pub use payload::build_summary_payload;
pub use types::{
    AnalysisReport, CareLevel, ConditionMatch, DetectedSymptoms, RiskLevel, SeverityResult,
    TriageError, DISCLAIMER,
};

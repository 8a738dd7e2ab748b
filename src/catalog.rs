use std::sync::LazyLock;

use crate::types::CareLevel;

/// One catalog condition: the symptom set it requires, how urgent a matched
/// case is, and the patient-facing advice line.
#[derive(Debug, Clone, Copy)]
pub struct ConditionEntry {
    pub name: &'static str,
    /// Canonical vocabulary phrases. Overlap against the detected set drives
    /// the match score; the denominator is this slice's length.
    pub symptoms: &'static [&'static str],
    pub care_level: CareLevel,
    pub advice: &'static str,
}

/// Candidate conditions ranked by the matcher. Definition order is the
/// tie-break order for equal match scores, so it is part of the contract.
const CONDITION_CATALOG: &[ConditionEntry] = &[
    ConditionEntry {
        name: "common cold",
        symptoms: &["runny nose", "sneezing", "sore throat", "cough"],
        care_level: CareLevel::SelfCare,
        advice: "Rest and fluids usually help. If symptoms last more than a week, \
                 check in with a doctor.",
    },
    ConditionEntry {
        name: "influenza",
        symptoms: &["fever", "chills", "body aches", "fatigue", "cough"],
        care_level: CareLevel::SelfCare,
        advice: "Rest, fluids, and fever control at home. See a doctor if the fever \
                 is high or you have trouble breathing.",
    },
    ConditionEntry {
        name: "migraine",
        symptoms: &["severe headache", "nausea", "blurred vision"],
        care_level: CareLevel::SelfCare,
        advice: "A quiet, dark room and rest often help. A sudden worst-ever headache \
                 needs medical attention instead.",
    },
    ConditionEntry {
        name: "gastroenteritis",
        symptoms: &["nausea", "vomiting", "diarrhea", "abdominal pain"],
        care_level: CareLevel::SelfCare,
        advice: "Small sips of fluid to stay hydrated. See a doctor if it lasts more \
                 than two days or you see blood.",
    },
    ConditionEntry {
        name: "pneumonia",
        symptoms: &["high fever", "productive cough", "shortness of breath", "chest pain"],
        care_level: CareLevel::Medical,
        advice: "This combination should be examined by a doctor soon, ideally within \
                 a day.",
    },
    ConditionEntry {
        name: "urinary tract infection",
        symptoms: &["painful urination", "urinary frequency", "flank pain"],
        care_level: CareLevel::Medical,
        advice: "See a doctor for testing and treatment. Flank pain or fever makes \
                 this more pressing.",
    },
    ConditionEntry {
        name: "anemia",
        symptoms: &["fatigue", "pallor", "dizziness", "shortness of breath"],
        care_level: CareLevel::Medical,
        advice: "Worth a blood test with your doctor to find the cause.",
    },
    ConditionEntry {
        name: "dehydration",
        symptoms: &["extreme thirst", "dizziness", "weakness"],
        care_level: CareLevel::Medical,
        advice: "Rehydrate steadily. If you cannot keep fluids down or feel faint, \
                 seek medical care.",
    },
    ConditionEntry {
        name: "panic attack",
        symptoms: &["palpitations", "rapid breathing", "dizziness", "anxiety"],
        care_level: CareLevel::Medical,
        advice: "Slow breathing in a calm place can help. A first episode with chest \
                 symptoms should be checked by a doctor to rule out other causes.",
    },
    ConditionEntry {
        name: "acute coronary syndrome",
        symptoms: &["chest pain", "shortness of breath", "cold sweat", "nausea"],
        care_level: CareLevel::Emergency,
        advice: "Call emergency services now. Do not drive yourself.",
    },
    ConditionEntry {
        name: "stroke",
        symptoms: &["weakness on one side", "difficulty speaking", "confusion", "severe headache"],
        care_level: CareLevel::Emergency,
        advice: "Call emergency services immediately. Note the time symptoms started.",
    },
    ConditionEntry {
        name: "severe allergic reaction",
        symptoms: &["hives", "facial swelling", "lips swelling", "difficulty breathing"],
        care_level: CareLevel::Emergency,
        advice: "Call emergency services. Use an epinephrine auto-injector if one has \
                 been prescribed.",
    },
    ConditionEntry {
        name: "meningitis",
        symptoms: &["high fever", "severe neck stiffness", "severe headache", "confusion"],
        care_level: CareLevel::Emergency,
        advice: "Go to emergency care now. This combination must not wait.",
    },
    ConditionEntry {
        name: "appendicitis",
        symptoms: &["severe abdominal pain", "fever", "nausea", "loss of appetite"],
        care_level: CareLevel::Emergency,
        advice: "Go to emergency care for evaluation. Do not eat or drink on the way.",
    },
];

static CATALOG: LazyLock<ConditionCatalog> = LazyLock::new(|| ConditionCatalog {
    entries: CONDITION_CATALOG,
});

/// Read-only view over the built-in condition catalog.
pub struct ConditionCatalog {
    entries: &'static [ConditionEntry],
}

impl ConditionCatalog {
    /// Process-wide catalog instance.
    pub fn global() -> &'static Self {
        &CATALOG
    }

    /// Entries in definition order.
    pub fn entries(&self) -> &'static [ConditionEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::vocabulary::SymptomVocabulary;

    #[test]
    fn every_catalog_symptom_is_in_vocabulary() {
        let vocab = SymptomVocabulary::global();
        for entry in ConditionCatalog::global().entries() {
            for symptom in entry.symptoms {
                assert!(
                    vocab.weight_of(symptom).is_some(),
                    "{}: '{symptom}' is not a vocabulary phrase",
                    entry.name
                );
            }
        }
    }

    #[test]
    fn no_duplicate_condition_names() {
        let mut seen = HashSet::new();
        for entry in ConditionCatalog::global().entries() {
            assert!(seen.insert(entry.name), "duplicate condition: {}", entry.name);
        }
    }

    #[test]
    fn entries_are_well_formed() {
        for entry in ConditionCatalog::global().entries() {
            assert!(!entry.symptoms.is_empty(), "{} has no symptoms", entry.name);
            assert!(!entry.advice.trim().is_empty(), "{} has no advice", entry.name);
            let unique: HashSet<_> = entry.symptoms.iter().collect();
            assert_eq!(
                unique.len(),
                entry.symptoms.len(),
                "{} lists a symptom twice",
                entry.name
            );
        }
    }

    #[test]
    fn emergency_conditions_present() {
        let emergencies: Vec<_> = ConditionCatalog::global()
            .entries()
            .iter()
            .filter(|e| e.care_level == CareLevel::Emergency)
            .map(|e| e.name)
            .collect();
        assert!(emergencies.contains(&"acute coronary syndrome"));
        assert!(emergencies.contains(&"stroke"));
    }
}

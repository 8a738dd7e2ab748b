use std::collections::HashMap;
use std::sync::LazyLock;

/// Canonical symptom phrases and their base severity weights (1–10).
///
/// Definition order is significant: the extractor iterates this table in
/// order before sorting candidates by weight, so ties break the same way on
/// every run. Phrases must be lowercase; multi-word phrases are matched as
/// whole canonical phrases, never token by token.
const SYMPTOM_SEVERITY: &[(&str, f64)] = &[
    // General / constitutional
    ("fever", 4.0),
    ("high fever", 7.0),
    ("very high fever", 8.0),
    ("chills", 4.0),
    ("sweating", 3.0),
    ("fatigue", 2.0),
    ("severe fatigue", 5.0),
    ("weakness", 3.0),
    ("extreme weakness", 6.0),
    ("weight loss", 4.0),
    ("rapid weight loss", 6.0),
    ("loss of appetite", 2.0),
    ("night sweats", 5.0),
    ("malaise", 3.0),
    // Respiratory
    ("cough", 3.0),
    ("productive cough", 4.0),
    ("dry cough", 3.0),
    ("bloody cough", 8.0),
    ("shortness of breath", 7.0),
    ("severe shortness of breath", 9.0),
    ("difficulty breathing", 8.0),
    ("wheezing", 5.0),
    ("stridor", 9.0),
    ("rapid breathing", 7.0),
    ("slow breathing", 8.0),
    ("apnea", 10.0),
    ("difficulty breathing while lying down", 8.0),
    // Cardiovascular
    ("chest pain", 9.0),
    ("pressure in chest", 8.0),
    ("palpitations", 6.0),
    ("irregular heartbeat", 7.0),
    ("syncope", 9.0),
    ("fainting", 7.0),
    ("cold sweat", 6.0),
    ("leg swelling", 5.0),
    ("sudden leg swelling", 7.0),
    ("calf pain", 6.0),
    ("bluish lips", 9.0),
    ("pallor", 6.0),
    ("low blood pressure symptom", 8.0),
    ("high blood pressure symptom", 5.0),
    // Neurological
    ("headache", 3.0),
    ("severe headache", 9.0),
    ("migraine", 6.0),
    ("dizziness", 5.0),
    ("lightheadedness", 5.0),
    ("vertigo", 6.0),
    ("confusion", 7.0),
    ("altered mental status", 9.0),
    ("memory loss", 6.0),
    ("difficulty speaking", 8.0),
    ("numbness", 6.0),
    ("weakness on one side", 9.0),
    ("loss of coordination", 7.0),
    ("seizure", 9.0),
    ("loss of consciousness", 10.0),
    ("tremor", 4.0),
    ("blurred vision", 6.0),
    ("double vision", 7.0),
    ("slurred speech", 8.0),
    // Gastrointestinal
    ("nausea", 3.0),
    ("vomiting", 5.0),
    ("persistent vomiting", 7.0),
    ("blood in vomit", 9.0),
    ("diarrhea", 4.0),
    ("bloody diarrhea", 8.0),
    ("black stool", 9.0),
    ("abdominal pain", 6.0),
    ("severe abdominal pain", 9.0),
    ("bloating", 3.0),
    ("constipation", 3.0),
    ("jaundice", 7.0),
    ("yellowing of skin", 7.0),
    ("fruity breath", 7.0),
    // Genitourinary
    ("urinary frequency", 3.0),
    ("painful urination", 5.0),
    ("difficulty urinating", 5.0),
    ("urinary retention", 8.0),
    ("blood in urine", 7.0),
    ("flank pain", 7.0),
    ("pelvic pain", 6.0),
    ("vaginal bleeding", 7.0),
    ("heavy vaginal bleeding", 8.0),
    ("scrotal pain", 7.0),
    // Musculoskeletal
    ("body aches", 3.0),
    ("muscle pain", 4.0),
    ("muscle weakness", 5.0),
    ("joint pain", 4.0),
    ("joint swelling", 5.0),
    ("back pain", 4.0),
    ("neck stiffness", 6.0),
    ("severe neck stiffness", 8.0),
    // Dermatologic / allergic
    ("rash", 3.0),
    ("hives", 6.0),
    ("itching", 3.0),
    ("swelling", 6.0),
    ("facial swelling", 8.0),
    ("lips swelling", 8.0),
    ("redness", 3.0),
    ("warmth", 4.0),
    ("pus", 6.0),
    ("cellulitis signs", 7.0),
    ("blistering rash", 7.0),
    ("peeling skin", 8.0),
    ("purple rash", 9.0),
    // Ear, nose, throat
    ("sore throat", 3.0),
    ("severe sore throat", 5.0),
    ("difficulty swallowing", 7.0),
    ("runny nose", 2.0),
    ("sneezing", 1.0),
    ("ear pain", 4.0),
    ("ear discharge", 6.0),
    ("hearing loss", 6.0),
    ("hoarseness", 3.0),
    // Endocrine / metabolic
    ("extreme thirst", 5.0),
    ("polydipsia", 5.0),
    ("polyuria", 5.0),
    ("confusion in diabetics", 8.0),
    ("cold intolerance", 3.0),
    ("heat intolerance", 3.0),
    ("sweating episodes", 4.0),
    // Hematologic / immune
    ("easy bruising", 4.0),
    ("bleeding gums", 5.0),
    ("nosebleed", 4.0),
    ("persistent bleeding", 8.0),
    ("petechiae", 7.0),
    ("lymph node swelling", 4.0),
    ("bleeding", 7.0),
    ("severe bleeding", 9.0),
    ("internal bleeding", 10.0),
    // Psychiatric
    ("anxiety", 3.0),
    ("panic attack", 6.0),
    ("hallucinations", 8.0),
    ("paranoia", 7.0),
    ("suicidal thoughts", 10.0),
];

static VOCABULARY: LazyLock<SymptomVocabulary> = LazyLock::new(SymptomVocabulary::build);

/// Read-only view over the built-in symptom vocabulary.
/// Constructed once per process and shared by all callers; the underlying
/// table is a `const` and cannot be mutated at runtime.
pub struct SymptomVocabulary {
    index: HashMap<&'static str, f64>,
}

impl SymptomVocabulary {
    fn build() -> Self {
        let index = SYMPTOM_SEVERITY.iter().copied().collect();
        Self { index }
    }

    /// Process-wide vocabulary instance.
    pub fn global() -> &'static Self {
        &VOCABULARY
    }

    /// Entries in definition order.
    pub fn entries(&self) -> &'static [(&'static str, f64)] {
        SYMPTOM_SEVERITY
    }

    /// Base severity weight for a canonical phrase.
    pub fn weight_of(&self, phrase: &str) -> Option<f64> {
        self.index.get(phrase).copied()
    }

    /// Canonical phrase and weight, resolving through the index so callers
    /// get the `'static` table entry back.
    pub fn entry_of(&self, phrase: &str) -> Option<(&'static str, f64)> {
        self.index.get_key_value(phrase).map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        SYMPTOM_SEVERITY.len()
    }

    pub fn is_empty(&self) -> bool {
        SYMPTOM_SEVERITY.is_empty()
    }
}

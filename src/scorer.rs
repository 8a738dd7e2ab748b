use crate::types::{DetectedSymptoms, RiskLevel, SeverityResult};

/// Power-mean exponent. p > 1 biases the aggregate toward the more severe
/// reported symptoms instead of letting a mild one dilute them.
const POWER_MEAN_EXPONENT: f64 = 1.6;

/// Duration multiplier: saturating exponential `1 + k·(1 − e^(−d/τ))`.
const DURATION_GAIN: f64 = 0.4;
const DURATION_TAU_DAYS: f64 = 5.0;

/// Age multiplier: U-shaped around a central adult age, capped so age alone
/// cannot push a mild case into a high tier.
const AGE_CENTER_YEARS: f64 = 32.5;
const AGE_GAIN: f64 = 0.5;
const AGE_EXPONENT: f64 = 1.5;
const AGE_FACTOR_CAP: f64 = 1.5;
/// Ages outside this range are treated as unknown rather than rejected.
const AGE_MAX_YEARS: u32 = 130;

/// Symptom-count factor: one isolated symptom is ambiguous and down-weighted;
/// beyond two, each extra symptom shaves a little off so a severe aggregate
/// is not further inflated by count alone.
const SINGLE_SYMPTOM_FACTOR: f64 = 0.6;
const COUNT_STEP: f64 = 0.05;
const COUNT_FLOOR: f64 = 0.8;

const SCORE_MAX: f64 = 10.0;

/// Risk tier boundaries, evaluated against the final adjusted score.
const RISK_LOW_BELOW: f64 = 3.0;
const RISK_MODERATE_BELOW: f64 = 7.0;

/// Map a final adjusted score to its risk tier.
pub fn risk_level(score: f64) -> RiskLevel {
    if score < RISK_LOW_BELOW {
        RiskLevel::Low
    } else if score < RISK_MODERATE_BELOW {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

/// Compute the adjusted severity score for a detected symptom set.
///
/// Negative durations are clamped to 0 and out-of-range ages are treated as
/// unknown; both cases log the adjustment rather than failing the request.
/// The returned score is clamped to [0, 10] and rounded to one decimal.
pub fn score(
    symptoms: &DetectedSymptoms,
    age: Option<u32>,
    duration_days: Option<i64>,
) -> SeverityResult {
    let count = symptoms.len();
    let base = power_mean(symptoms);

    let duration_factor = match duration_days {
        Some(days) => {
            let days = if days < 0 {
                tracing::debug!(duration_days = days, "Negative duration clamped to 0");
                0
            } else {
                days
            };
            1.0 + DURATION_GAIN * (1.0 - (-(days as f64) / DURATION_TAU_DAYS).exp())
        }
        None => 1.0,
    };

    let age_factor = match age {
        Some(years) if years <= AGE_MAX_YEARS => {
            let distance = ((years as f64 - AGE_CENTER_YEARS).abs() / AGE_CENTER_YEARS)
                .powf(AGE_EXPONENT);
            (1.0 + AGE_GAIN * distance).min(AGE_FACTOR_CAP)
        }
        Some(years) => {
            tracing::debug!(age = years, "Age out of range, treated as unknown");
            1.0
        }
        None => 1.0,
    };

    let symptom_count_factor = if count == 1 {
        SINGLE_SYMPTOM_FACTOR
    } else {
        (1.0 - COUNT_STEP * (count as f64 - 2.0)).max(COUNT_FLOOR)
    };

    let raw = base * duration_factor * age_factor * symptom_count_factor;
    let final_score = round_one_decimal(raw.clamp(0.0, SCORE_MAX));

    SeverityResult {
        score: final_score,
        risk: risk_level(final_score),
        age_factor,
        duration_factor,
        symptom_count_factor,
    }
}

/// Generalized mean `(Σ wᵢᵖ / n)^(1/p)` over the base weights.
fn power_mean(symptoms: &DetectedSymptoms) -> f64 {
    let n = symptoms.len() as f64;
    let sum: f64 = symptoms
        .iter()
        .map(|s| s.weight.powf(POWER_MEAN_EXPONENT))
        .sum();
    (sum / n).powf(1.0 / POWER_MEAN_EXPONENT)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

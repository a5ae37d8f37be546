//! Input validation.
//!
//! Turns raw string answers into an [`InputRecord`]. Fields are checked in
//! feature-schema order, so under [`ValidationPolicy::FailFast`] the reported
//! error is the first violation in that order.

use serde::{Deserialize, Serialize};

use crate::error::{BevpriceError, Result};
use crate::schema::{FEATURE_SCHEMA, FIELD_COUNT};
use crate::types::{Answer, AnswerSource, InputRecord};

/// How many violations to report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Stop at the first violation and return it as-is.
    #[default]
    FailFast,

    /// Check every field and return all violations as
    /// [`BevpriceError::Validation`].
    CollectAll,
}

/// Validate raw answers, stopping at the first violation.
pub fn validate<S: AnswerSource + ?Sized>(raw: &S) -> Result<InputRecord> {
    validate_with(raw, ValidationPolicy::FailFast)
}

/// Validate raw answers under the given policy.
pub fn validate_with<S: AnswerSource + ?Sized>(
    raw: &S,
    policy: ValidationPolicy,
) -> Result<InputRecord> {
    let mut answers = [Answer::Choice(None); FIELD_COUNT];
    let mut errors = Vec::new();

    for (slot, spec) in answers.iter_mut().zip(FEATURE_SCHEMA.iter()) {
        let resolved = match raw.answer(spec.field) {
            Some(value) => spec.resolve(value),
            None => Err(BevpriceError::MissingField { field: spec.field }),
        };

        match resolved {
            Ok(answer) => *slot = answer,
            Err(e) if policy == ValidationPolicy::FailFast => return Err(e),
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(InputRecord::from_resolved(answers))
    } else {
        Err(BevpriceError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Field, RawAnswers};

    fn baseline() -> RawAnswers {
        [
            ("age_group", "18-25"),
            ("gender", "M"),
            ("zone", "Metro"),
            ("occupation", "Entrepreneur"),
            ("income_levels", "16L - 25L"),
            ("consume_frequency", "1-2"),
            ("current_brand", "Established"),
            ("preferable_size", "Small"),
            ("brand_awareness", "0"),
            ("current_brand_score", "1"),
            ("zone_awareness", "1"),
            ("brand_satisfaction", "1"),
            ("health_concerns", "Low"),
            ("flavor_preference", "Traditional"),
            ("purchase_channel", "Online"),
            ("packaging_preference", "Simple"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn fail_fast_reports_first_in_schema_order() {
        let mut raw = baseline();
        raw.remove("packaging_preference");
        raw.insert("income_levels".into(), "lots".into());

        let err = validate(&raw).unwrap_err();
        assert!(matches!(
            err,
            BevpriceError::UnknownCategory { field: Field::IncomeLevels, ref value } if value == "lots"
        ));
    }

    #[test]
    fn collect_all_reports_every_violation() {
        let mut raw = baseline();
        raw.remove("packaging_preference");
        raw.insert("income_levels".into(), "lots".into());
        raw.insert("zone_awareness".into(), "high".into());

        let err = validate_with(&raw, ValidationPolicy::CollectAll).unwrap_err();
        let BevpriceError::Validation(errors) = err else {
            panic!("expected Validation, got {err:?}");
        };
        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0], BevpriceError::UnknownCategory { field: Field::IncomeLevels, .. }));
        assert!(matches!(errors[1], BevpriceError::InvalidNumeric { field: Field::ZoneAwareness, .. }));
        assert!(matches!(errors[2], BevpriceError::MissingField { field: Field::PackagingPreference }));
    }

    #[test]
    fn collect_all_on_valid_input_succeeds() {
        let record = validate_with(&baseline(), ValidationPolicy::CollectAll).unwrap();
        assert_eq!(record.answer(Field::AgeGroup), Answer::Level(0));
        assert_eq!(record.answer(Field::Zone), Answer::Choice(None));
    }

    #[test]
    fn policy_deserializes_snake_case() {
        let policy: ValidationPolicy = serde_json::from_str("\"collect_all\"").unwrap();
        assert_eq!(policy, ValidationPolicy::CollectAll);
        assert_eq!(ValidationPolicy::default(), ValidationPolicy::FailFast);
    }
}

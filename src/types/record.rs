//! Raw survey answers and the validated record built from them.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use super::Field;
use crate::schema::{FEATURE_SCHEMA, FIELD_COUNT, schema_index};

/// Raw answers as supplied by the input layer: answer key → string value.
///
/// Keys that do not name a [`Field`] are ignored.
pub type RawAnswers = HashMap<String, String>;

/// Anything the validator can read survey answers from.
pub trait AnswerSource {
    /// The raw string answer for `field`, if present.
    fn answer(&self, field: Field) -> Option<&str>;
}

impl AnswerSource for HashMap<String, String> {
    fn answer(&self, field: Field) -> Option<&str> {
        self.get(field.as_str()).map(String::as_str)
    }
}

impl AnswerSource for BTreeMap<String, String> {
    fn answer(&self, field: Field) -> Option<&str> {
        self.get(field.as_str()).map(String::as_str)
    }
}

impl AnswerSource for HashMap<Field, String> {
    fn answer(&self, field: Field) -> Option<&str> {
        self.get(&field).map(String::as_str)
    }
}

impl AnswerSource for [(&str, &str)] {
    fn answer(&self, field: Field) -> Option<&str> {
        self.iter()
            .find(|(key, _)| *key == field.as_str())
            .map(|(_, value)| *value)
    }
}

/// A single answer resolved against its field's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Answer {
    /// Label-encoded position in an ordinal vocabulary.
    Level(usize),
    /// Integer score, used as-is.
    Score(i64),
    /// Position within a one-hot block; `None` is the baseline category.
    Choice(Option<usize>),
}

/// A fully validated set of survey answers.
///
/// Only [`crate::validate`] constructs records, so every ordinal answer is
/// known to be in its vocabulary and every score parsed. Answers are stored
/// in feature-schema order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputRecord {
    answers: [Answer; FIELD_COUNT],
}

impl InputRecord {
    pub(crate) fn from_resolved(answers: [Answer; FIELD_COUNT]) -> Self {
        Self { answers }
    }

    /// The resolved answer for `field`.
    pub fn answer(&self, field: Field) -> Answer {
        self.answers[schema_index(field)]
    }

    /// Resolved answers in feature-schema order.
    pub fn answers(&self) -> &[Answer; FIELD_COUNT] {
        &self.answers
    }

    /// Iterate `(field, answer)` pairs in feature-schema order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, Answer)> + '_ {
        FEATURE_SCHEMA
            .iter()
            .zip(self.answers.iter())
            .map(|(spec, answer)| (spec.field, *answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_map_source_uses_answer_keys() {
        let mut raw = RawAnswers::new();
        raw.insert("age_group".into(), "26-35".into());
        assert_eq!(raw.answer(Field::AgeGroup), Some("26-35"));
        assert_eq!(raw.answer(Field::Gender), None);
    }

    #[test]
    fn pair_slice_source() {
        let pairs: &[(&str, &str)] = &[("zone", "Rural"), ("gender", "F")];
        assert_eq!(pairs.answer(Field::Zone), Some("Rural"));
        assert_eq!(pairs.answer(Field::Gender), Some("F"));
        assert_eq!(pairs.answer(Field::Occupation), None);
    }

    #[test]
    fn answer_serializes_tagged() {
        let json = serde_json::to_value(Answer::Choice(None)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "choice", "value": null}));
        let json = serde_json::to_value(Answer::Level(2)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "level", "value": 2}));
    }
}

//! Category tables and feature-vector layout.
//!
//! The classifier was trained on a 25-wide vector with a fixed column order.
//! That order is declared once here as [`FEATURE_SCHEMA`]: an ordered list of
//! field specs, each tagged ordinal, score or one-hot. Vector offsets are
//! derived from the block widths at compile time, so the layout cannot drift
//! from the table.
//!
//! ```text
//!  0..=4   ordinal   age_group income_levels health_concerns
//!                    consume_frequency preferable_size
//!  5..=8   score     current_brand_score zone_awareness
//!                    brand_satisfaction brand_awareness
//!  9       one-hot   gender            (M)
//! 10..=12  one-hot   zone              (Metro)
//! 13..=16  one-hot   occupation        (Entrepreneur)
//! 17..=18  one-hot   current_brand     (Established)
//! 19..=20  one-hot   flavor_preference (Traditional)
//! 21..=22  one-hot   purchase_channel  (Online)
//! 23..=24  one-hot   packaging_preference (Simple)
//! ```
//!
//! One-hot baselines (in parentheses) are encoded as an all-zero block.

use std::ops::Range;

use crate::error::{BevpriceError, Result};
use crate::types::{Answer, Field};

/// Width of the classifier's input vector.
pub const FEATURE_LEN: usize = 25;

/// Number of survey fields.
pub const FIELD_COUNT: usize = 16;

/// How a field is turned into vector entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Label-encoded into one entry; the value's vocabulary index.
    Ordinal {
        vocabulary: &'static [&'static str],
    },
    /// One entry holding the parsed integer.
    ///
    /// `min..=max` are the choices offered on the form. They are not
    /// enforced: any integer is encoded as-is.
    Score { min: i64, max: i64 },
    /// One entry per non-baseline category. Unrecognized values collapse
    /// to the baseline.
    OneHot {
        baseline: &'static str,
        categories: &'static [&'static str],
    },
}

impl FieldKind {
    /// Number of vector entries this field occupies.
    pub const fn width(&self) -> usize {
        match self {
            Self::OneHot { categories, .. } => categories.len(),
            Self::Ordinal { .. } | Self::Score { .. } => 1,
        }
    }

    /// Short kind name for listings.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ordinal { .. } => "ordinal",
            Self::Score { .. } => "score",
            Self::OneHot { .. } => "one-hot",
        }
    }
}

/// One entry of the feature schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn ordinal(field: Field, vocabulary: &'static [&'static str]) -> Self {
        Self {
            field,
            kind: FieldKind::Ordinal { vocabulary },
        }
    }

    const fn score(field: Field, min: i64, max: i64) -> Self {
        Self {
            field,
            kind: FieldKind::Score { min, max },
        }
    }

    const fn one_hot(
        field: Field,
        baseline: &'static str,
        categories: &'static [&'static str],
    ) -> Self {
        Self {
            field,
            kind: FieldKind::OneHot {
                baseline,
                categories,
            },
        }
    }

    /// Resolve a raw answer against this field's vocabulary.
    ///
    /// Ordinal fields reject values outside their vocabulary; one-hot fields
    /// never fail and map unknown values to the baseline.
    pub fn resolve(&self, raw: &str) -> Result<Answer> {
        match self.kind {
            FieldKind::Ordinal { vocabulary } => vocabulary
                .iter()
                .position(|v| *v == raw)
                .map(Answer::Level)
                .ok_or_else(|| BevpriceError::UnknownCategory {
                    field: self.field,
                    value: raw.to_string(),
                }),
            FieldKind::Score { .. } => raw
                .trim()
                .parse::<i64>()
                .map(Answer::Score)
                .map_err(|_| BevpriceError::InvalidNumeric {
                    field: self.field,
                    value: raw.to_string(),
                }),
            FieldKind::OneHot { categories, .. } => {
                Ok(Answer::Choice(categories.iter().position(|c| *c == raw)))
            }
        }
    }

    /// The answers the survey form offers for this field.
    pub fn choices(&self) -> Vec<String> {
        match self.kind {
            FieldKind::Ordinal { vocabulary } => {
                vocabulary.iter().map(|v| v.to_string()).collect()
            }
            FieldKind::Score { min, max } => (min..=max).map(|n| n.to_string()).collect(),
            FieldKind::OneHot {
                baseline,
                categories,
            } => std::iter::once(baseline)
                .chain(categories.iter().copied())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// The feature schema, in vector order.
pub const FEATURE_SCHEMA: [FieldSpec; FIELD_COUNT] = [
    FieldSpec::ordinal(Field::AgeGroup, &["18-25", "26-35", "36-45", "46-55", "55+"]),
    FieldSpec::ordinal(Field::IncomeLevels, &["16L - 25L", "26L - 35L", "35L+"]),
    FieldSpec::ordinal(Field::HealthConcerns, &["Low", "Medium", "High"]),
    FieldSpec::ordinal(Field::ConsumeFrequency, &["1-2", "3-4", "5-7"]),
    FieldSpec::ordinal(Field::PreferableSize, &["Small", "Medium", "Large"]),
    FieldSpec::score(Field::CurrentBrandScore, 1, 10),
    FieldSpec::score(Field::ZoneAwareness, 1, 10),
    FieldSpec::score(Field::BrandSatisfaction, 1, 10),
    FieldSpec::score(Field::BrandAwareness, 0, 5),
    FieldSpec::one_hot(Field::Gender, "M", &["F"]),
    FieldSpec::one_hot(Field::Zone, "Metro", &["Tier 1", "Tier 2", "Rural"]),
    FieldSpec::one_hot(
        Field::Occupation,
        "Entrepreneur",
        &["Salaried", "Student", "Self-employed", "Other"],
    ),
    FieldSpec::one_hot(Field::CurrentBrand, "Established", &["New", "None"]),
    FieldSpec::one_hot(Field::FlavorPreference, "Traditional", &["Modern", "Mixed"]),
    FieldSpec::one_hot(Field::PurchaseChannel, "Online", &["Retail", "Both"]),
    FieldSpec::one_hot(Field::PackagingPreference, "Simple", &["Modern", "Premium"]),
];

/// Starting vector offset of each schema entry.
pub const OFFSETS: [usize; FIELD_COUNT] = offsets(&FEATURE_SCHEMA);

const fn offsets(schema: &[FieldSpec; FIELD_COUNT]) -> [usize; FIELD_COUNT] {
    let mut out = [0; FIELD_COUNT];
    let mut next = 0;
    let mut i = 0;
    while i < FIELD_COUNT {
        out[i] = next;
        next += schema[i].kind.width();
        i += 1;
    }
    out
}

const fn total_width(schema: &[FieldSpec; FIELD_COUNT]) -> usize {
    let mut width = 0;
    let mut i = 0;
    while i < FIELD_COUNT {
        width += schema[i].kind.width();
        i += 1;
    }
    width
}

const _: () = assert!(total_width(&FEATURE_SCHEMA) == FEATURE_LEN);

/// Index of `field` within [`FEATURE_SCHEMA`].
pub const fn schema_index(field: Field) -> usize {
    match field {
        Field::AgeGroup => 0,
        Field::IncomeLevels => 1,
        Field::HealthConcerns => 2,
        Field::ConsumeFrequency => 3,
        Field::PreferableSize => 4,
        Field::CurrentBrandScore => 5,
        Field::ZoneAwareness => 6,
        Field::BrandSatisfaction => 7,
        Field::BrandAwareness => 8,
        Field::Gender => 9,
        Field::Zone => 10,
        Field::Occupation => 11,
        Field::CurrentBrand => 12,
        Field::FlavorPreference => 13,
        Field::PurchaseChannel => 14,
        Field::PackagingPreference => 15,
    }
}

// Every schema entry maps back to its own slot, so the lookup and the table
// agree and no field is listed twice.
const _: () = {
    let mut i = 0;
    while i < FIELD_COUNT {
        assert!(schema_index(FEATURE_SCHEMA[i].field) == i);
        i += 1;
    }
};

/// The schema entry for `field`.
pub fn spec(field: Field) -> &'static FieldSpec {
    &FEATURE_SCHEMA[schema_index(field)]
}

/// Vector positions occupied by `field`.
pub fn positions(field: Field) -> Range<usize> {
    let index = schema_index(field);
    let start = OFFSETS[index];
    start..start + FEATURE_SCHEMA[index].kind.width()
}

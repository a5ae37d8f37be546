//! Feature-encoding contract tests.

use bevprice::schema::{FieldKind, positions, spec};
use bevprice::{
    BevpriceError, FEATURE_LEN, FEATURE_SCHEMA, Field, RawAnswers, encode, encode_answers,
    validate,
};

/// Every field at its baseline / first vocabulary value.
fn scenario_a() -> RawAnswers {
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

fn with(mut raw: RawAnswers, field: Field, value: &str) -> RawAnswers {
    raw.insert(field.as_str().to_string(), value.to_string());
    raw
}

const ONE_HOT_FIELDS: [Field; 7] = [
    Field::Gender,
    Field::Zone,
    Field::Occupation,
    Field::CurrentBrand,
    Field::FlavorPreference,
    Field::PurchaseChannel,
    Field::PackagingPreference,
];

// ============================================================================
// End-to-end scenarios
// ============================================================================

#[test]
fn scenario_a_encodes_to_baseline_vector() {
    let vector = encode_answers(&scenario_a()).unwrap();

    assert_eq!(vector.len(), FEATURE_LEN);
    // Positions 5..=7 carry the score answers, all "1".
    assert_eq!(
        &vector.as_slice()[..9],
        &[0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0]
    );
    assert!(vector.as_slice()[9..].iter().all(|v| *v == 0.0));
}

#[test]
fn scenario_b_sets_gender_zone_and_brand_bits() {
    let raw = with(scenario_a(), Field::Gender, "F");
    let raw = with(raw, Field::Zone, "Rural");
    let raw = with(raw, Field::CurrentBrand, "New");

    let baseline = encode_answers(&scenario_a()).unwrap();
    let vector = encode_answers(&raw).unwrap();

    for i in 0..FEATURE_LEN {
        let expected = match i {
            9 | 12 | 17 => 1.0,
            _ => baseline[i],
        };
        assert_eq!(vector[i], expected, "position {i}");
    }
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn every_ordinal_value_encodes_to_its_index() {
    for field_spec in FEATURE_SCHEMA.iter() {
        let FieldKind::Ordinal { vocabulary } = field_spec.kind else {
            continue;
        };
        let position = positions(field_spec.field).start;
        for (index, value) in vocabulary.iter().enumerate() {
            let vector = encode_answers(&with(scenario_a(), field_spec.field, value)).unwrap();
            assert_eq!(
                vector[position], index as f64,
                "{} = {value}",
                field_spec.field
            );
        }
    }
}

#[test]
fn unknown_ordinal_value_is_rejected() {
    for field_spec in FEATURE_SCHEMA.iter() {
        if !matches!(field_spec.kind, FieldKind::Ordinal { .. }) {
            continue;
        }
        let raw = with(scenario_a(), field_spec.field, "Not A Category");
        match encode_answers(&raw) {
            Err(BevpriceError::UnknownCategory { field, value }) => {
                assert_eq!(field, field_spec.field);
                assert_eq!(value, "Not A Category");
            }
            other => panic!("expected UnknownCategory for {}, got {other:?}", field_spec.field),
        }
    }
}

#[test]
fn one_hot_category_sets_only_its_position() {
    for field in ONE_HOT_FIELDS {
        let FieldKind::OneHot {
            baseline,
            categories,
        } = spec(field).kind
        else {
            panic!("{field} should be one-hot");
        };

        for (index, category) in categories.iter().enumerate() {
            let vector = encode_answers(&with(scenario_a(), field, category)).unwrap();
            let block = vector.block(field);
            for (j, bit) in block.iter().enumerate() {
                let expected = if j == index { 1.0 } else { 0.0 };
                assert_eq!(*bit, expected, "{field} = {category}, slot {j}");
            }
        }

        let vector = encode_answers(&with(scenario_a(), field, baseline)).unwrap();
        assert!(vector.block(field).iter().all(|v| *v == 0.0), "{field} baseline");
    }
}

#[test]
fn unrecognized_one_hot_value_collapses_to_baseline() {
    for field in ONE_HOT_FIELDS {
        for value in ["", "metro", "Unknown", "F ", "tier 1"] {
            let vector = encode_answers(&with(scenario_a(), field, value)).unwrap();
            assert!(
                vector.block(field).iter().all(|v| *v == 0.0),
                "{field} = {value:?} should be baseline"
            );
        }
    }
}

#[test]
fn one_hot_blocks_never_sum_above_one() {
    let combos = [
        ("F", "Tier 1", "Salaried", "None", "Modern", "Both", "Premium"),
        ("M", "Tier 2", "Student", "New", "Mixed", "Retail", "Modern"),
        ("X", "Rural", "Self-employed", "Established", "Traditional", "Online", "Simple"),
        ("F", "Metro", "Other", "Other", "Other", "Other", "Other"),
    ];

    for (gender, zone, occupation, brand, flavor, channel, packaging) in combos {
        let raw = with(scenario_a(), Field::Gender, gender);
        let raw = with(raw, Field::Zone, zone);
        let raw = with(raw, Field::Occupation, occupation);
        let raw = with(raw, Field::CurrentBrand, brand);
        let raw = with(raw, Field::FlavorPreference, flavor);
        let raw = with(raw, Field::PurchaseChannel, channel);
        let raw = with(raw, Field::PackagingPreference, packaging);

        let vector = encode_answers(&raw).unwrap();
        assert_eq!(vector.len(), FEATURE_LEN);
        for field in ONE_HOT_FIELDS {
            let sum: f64 = vector.block(field).iter().sum();
            assert!(sum == 0.0 || sum == 1.0, "{field} block sums to {sum}");
        }
    }
}

#[test]
fn scores_are_written_as_is() {
    let raw = with(scenario_a(), Field::CurrentBrandScore, "10");
    let raw = with(raw, Field::ZoneAwareness, "7");
    let raw = with(raw, Field::BrandSatisfaction, "3");
    let raw = with(raw, Field::BrandAwareness, "5");

    let vector = encode_answers(&raw).unwrap();
    assert_eq!(&vector.as_slice()[5..9], &[10.0, 7.0, 3.0, 5.0]);
}

#[test]
fn scores_outside_form_choices_are_not_range_checked() {
    let raw = with(scenario_a(), Field::BrandAwareness, "42");
    let vector = encode_answers(&raw).unwrap();
    assert_eq!(vector[8], 42.0);
}

#[test]
fn encoding_is_deterministic() {
    let raw = with(scenario_a(), Field::Occupation, "Student");
    let record = validate(&raw).unwrap();

    let first = encode(&record);
    let second = encode(&record);
    assert_eq!(first, second);
    assert!(
        first
            .as_slice()
            .iter()
            .zip(second.as_slice())
            .all(|(a, b)| a.to_bits() == b.to_bits())
    );
}

#[test]
fn extra_keys_are_ignored() {
    let raw = with(scenario_a(), Field::Gender, "M");
    let mut raw = raw;
    raw.insert("favourite_colour".into(), "teal".into());
    assert_eq!(
        encode_answers(&raw).unwrap(),
        encode_answers(&scenario_a()).unwrap()
    );
}

#[test]
fn vector_serializes_as_flat_array() {
    let vector = encode_answers(&scenario_a()).unwrap();
    let json = serde_json::to_value(vector).unwrap();
    let array = json.as_array().unwrap();
    assert_eq!(array.len(), FEATURE_LEN);
    assert_eq!(array[5], serde_json::json!(1.0));
}

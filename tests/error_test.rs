use bevprice::{BevpriceError, Field, PipelineStage, Result};

#[test]
fn test_error_display() {
    let err = BevpriceError::UnknownCategory {
        field: Field::AgeGroup,
        value: "99+".to_string(),
    };
    assert_eq!(err.to_string(), "unknown category '99+' for field 'age_group'");

    let err = BevpriceError::InvalidNumeric {
        field: Field::BrandAwareness,
        value: "lots".to_string(),
    };
    assert!(err.to_string().contains("brand_awareness"));
    assert!(err.to_string().contains("lots"));
}

#[test]
fn test_result_alias() {
    fn returns_error() -> Result<()> {
        Err(BevpriceError::ClassifierUnavailable("no model".into()))
    }
    assert!(returns_error().is_err());
}

#[test]
fn json_errors_convert() {
    fn parse() -> Result<serde_json::Value> {
        Ok(serde_json::from_str("{")?)
    }
    assert!(matches!(parse(), Err(BevpriceError::Json(_))));
}

// ============================================================================
// Classification
// ============================================================================

#[test]
fn validation_errors() {
    assert!(BevpriceError::MissingField { field: Field::Zone }.is_validation());
    assert!(
        BevpriceError::UnknownCategory {
            field: Field::IncomeLevels,
            value: "x".into()
        }
        .is_validation()
    );
    assert!(
        BevpriceError::InvalidNumeric {
            field: Field::ZoneAwareness,
            value: "x".into()
        }
        .is_validation()
    );
    assert!(BevpriceError::Validation(vec![]).is_validation());
}

#[test]
fn non_validation_errors() {
    assert!(!BevpriceError::ClassifierUnavailable("x".into()).is_validation());
    assert!(!BevpriceError::Classifier("x".into()).is_validation());
    assert!(!BevpriceError::ClassIndexOutOfRange(9).is_validation());
    assert!(!BevpriceError::Configuration("x".into()).is_validation());
    assert!(!BevpriceError::UnknownField("x".into()).is_validation());
}

#[test]
fn errors_map_to_stages() {
    assert_eq!(
        BevpriceError::MissingField { field: Field::Gender }.stage(),
        PipelineStage::Validating
    );
    assert_eq!(
        BevpriceError::ClassifierUnavailable("x".into()).stage(),
        PipelineStage::Predicting
    );
    assert_eq!(BevpriceError::Classifier("x".into()).stage(), PipelineStage::Predicting);
    assert_eq!(BevpriceError::ClassIndexOutOfRange(-1).stage(), PipelineStage::Decoding);
    assert_eq!(BevpriceError::Configuration("x".into()).stage(), PipelineStage::Idle);
}

#[test]
fn collected_errors_are_joined() {
    let err = BevpriceError::Validation(vec![
        BevpriceError::MissingField { field: Field::Gender },
        BevpriceError::MissingField { field: Field::Zone },
    ]);
    assert_eq!(
        err.to_string(),
        "2 invalid answers: missing required field 'gender'; missing required field 'zone'"
    );
}

#[test]
fn unknown_field_name() {
    let err = "favourite_colour".parse::<Field>().unwrap_err();
    assert!(matches!(err, BevpriceError::UnknownField(ref name) if name == "favourite_colour"));
}

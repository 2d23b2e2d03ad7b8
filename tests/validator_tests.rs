use sugarlog::core::validator::{Mode, check_value, validate, validate_full, validate_period};
use sugarlog::errors::AppError;
use sugarlog::models::field::{self, FIELDS};
use sugarlog::models::{FormInput, Period};

fn spec(name: &str) -> &'static sugarlog::models::FieldSpec {
    field::find(name).expect("known field")
}

fn full_form() -> FormInput {
    let mut form = FormInput::new();
    for f in FIELDS.iter() {
        form.set(f, &f.min.to_string());
    }
    form
}

#[test]
fn test_bounds_accepted_for_every_field() {
    for f in FIELDS.iter() {
        assert_eq!(check_value(f, &f.min.to_string()).unwrap(), f.min);
        assert_eq!(check_value(f, &f.max.to_string()).unwrap(), f.max);

        let mid = (f.min + f.max) / 2;
        assert_eq!(check_value(f, &mid.to_string()).unwrap(), mid);
    }
}

#[test]
fn test_just_outside_bounds_rejected_for_every_field() {
    for f in FIELDS.iter() {
        for v in [f.min - 1, f.max + 1] {
            match check_value(f, &v.to_string()) {
                Err(AppError::OutOfRange { field, min, max, .. }) => {
                    assert_eq!(field, f.name);
                    assert_eq!((min, max), (f.min, f.max));
                }
                other => panic!("{} = {v}: expected OutOfRange, got {other:?}", f.name),
            }
        }
    }
}

#[test]
fn test_morning_insulin_70_out_of_range_12_ok() {
    let f = spec("Morning Insulin");

    match check_value(f, "70") {
        Err(AppError::OutOfRange {
            value,
            max,
            advisory,
            ..
        }) => {
            assert_eq!(value, "70");
            assert_eq!(max, 60);
            assert_eq!(advisory, "Insulin dose too high or low.");
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }

    assert_eq!(check_value(f, "12").unwrap(), 12);
}

#[test]
fn test_out_of_range_message_carries_advisory() {
    let err = check_value(spec("Morning Glycemia"), "20").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Morning Glycemia is out of range!"));
    assert!(msg.contains("Allowed: 40 → 600"));
    assert!(msg.contains("Check your blood sugar!"));

    // no advisory → no trailing blank lines
    let err = check_value(spec("Lunch Insulin"), "0").unwrap_err();
    assert!(err.to_string().ends_with("Allowed: 1 → 60"));
}

#[test]
fn test_non_digit_input_is_invalid_format() {
    let f = spec("Morning Glycemia");
    for input in ["12.5", "-5", "abc", "", "1 2", "+5", "１２"] {
        assert!(
            matches!(check_value(f, input), Err(AppError::InvalidFormat { .. })),
            "'{input}' should be InvalidFormat"
        );
    }
}

#[test]
fn test_huge_digit_string_is_out_of_range() {
    let err = check_value(spec("Morning Glycemia"), "99999999999999999999").unwrap_err();
    assert!(matches!(err, AppError::OutOfRange { .. }));
}

#[test]
fn test_partial_skips_empty_fields() {
    let mut form = FormInput::new();
    form.set(spec("Morning Glycemia"), "110");

    let readings = validate_period(Period::Morning, &form).unwrap();
    assert_eq!(readings.len(), 1);
    assert_eq!(readings[0].0.name, "Morning Glycemia");
    assert_eq!(readings[0].1, 110);

    let none = validate_period(Period::Lunch, &FormInput::new()).unwrap();
    assert!(none.is_empty());
}

#[test]
fn test_partial_stops_at_first_failing_field_in_schema_order() {
    let mut form = FormInput::new();
    // inserted out of order on purpose
    form.set(spec("Morning Insulin"), "70");
    form.set(spec("Morning Glycemia"), "abc");

    match validate_period(Period::Morning, &form) {
        Err(AppError::InvalidFormat { field, input }) => {
            assert_eq!(field, "Morning Glycemia");
            assert_eq!(input, "abc");
        }
        other => panic!("expected InvalidFormat, got {other:?}"),
    }
}

#[test]
fn test_partial_rejects_field_from_another_period() {
    let mut form = FormInput::new();
    form.set(spec("Glycemia Before Lunch"), "100");
    form.set(spec("Morning Insulin"), "12");

    match validate_period(Period::Lunch, &form) {
        Err(AppError::FieldNotInPeriod { field, period }) => {
            assert_eq!(field, "Morning Insulin");
            assert_eq!(period, "Lunch");
        }
        other => panic!("expected FieldNotInPeriod, got {other:?}"),
    }
}

#[test]
fn test_full_requires_every_field() {
    let record = validate_full(&full_form()).unwrap();
    assert_eq!(record.len(), FIELDS.len());

    let mut form = full_form();
    form.set(spec("Lunch Insulin"), "");
    form.set(spec("Night Insulin"), "");

    match validate_full(&form) {
        Err(AppError::InvalidFormat { field, input }) => {
            assert_eq!(field, "Lunch Insulin");
            assert_eq!(input, "");
        }
        other => panic!("expected InvalidFormat, got {other:?}"),
    }
}

#[test]
fn test_full_mode_rejects_empty_where_partial_skips() {
    let fields: Vec<_> = field::period_fields(Period::Bedtime).collect();
    let form = FormInput::new();

    assert!(validate(fields.clone(), &form, Mode::Partial).unwrap().is_empty());
    assert!(matches!(
        validate(fields, &form, Mode::Full),
        Err(AppError::InvalidFormat { .. })
    ));
}

#[test]
fn test_form_from_assignments() {
    let form = FormInput::from_assignments(&[
        "morning-insulin= 12 ".to_string(),
        "Morning Glycemia=110".to_string(),
    ])
    .unwrap();
    assert_eq!(form.text(spec("Morning Insulin")), "12");
    assert_eq!(form.text(spec("Morning Glycemia")), "110");
    assert_eq!(form.text(spec("Night Insulin")), "");

    assert!(matches!(
        FormInput::from_assignments(&["Bogus=1".to_string()]),
        Err(AppError::UnknownField(_))
    ));
    assert!(matches!(
        FormInput::from_assignments(&["morning-insulin".to_string()]),
        Err(AppError::InvalidAssignment(_))
    ));
}

#[test]
fn test_field_table_layout() {
    let counts: Vec<usize> = Period::ALL
        .iter()
        .map(|p| field::period_fields(*p).count())
        .collect();
    assert_eq!(counts, vec![3, 3, 3, 2]);

    let night = spec("NIGHT-INSULIN");
    assert_eq!(night.name, "Night Insulin");
    assert_eq!((night.min, night.max), (1, 60));
    assert_eq!(night.period, Period::Bedtime);
}

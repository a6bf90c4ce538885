use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use proptest::prelude::*;

use gln_model::{CharClass, FieldRule, RuleTable, ViolationKind};
use gln_validate::validate;

fn frame(columns: Vec<(&str, Vec<Option<String>>)>) -> DataFrame {
    let columns: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values).into())
        .collect();
    DataFrame::new(columns).expect("build frame")
}

fn cell() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        "[ -~]{0,12}".prop_map(Some),
        "[0-9]{0,10}".prop_map(Some),
    ]
}

fn char_class() -> impl Strategy<Value = CharClass> {
    prop_oneof![
        Just(CharClass::Numeric),
        Just(CharClass::Alphabetic),
        Just(CharClass::Alphanumeric),
    ]
}

proptest! {
    /// The validator is total: arbitrary frames and tables never make it
    /// panic, and it only ever reports columns present in both.
    #[test]
    fn validator_never_fails_and_only_inspects_shared_columns(
        rows in prop::collection::vec((cell(), cell()), 0..8),
        class_a in char_class(),
        class_x in char_class(),
        max_a in 1u32..10,
        max_x in 1u32..10,
    ) {
        let a: Vec<Option<String>> = rows.iter().map(|(a, _)| a.clone()).collect();
        let b: Vec<Option<String>> = rows.iter().map(|(_, b)| b.clone()).collect();
        let height = a.len();
        let df = frame(vec![("a", a), ("b", b)]);
        // "x" is in the table but not the frame; "b" is in the frame but
        // not the table.
        let table = RuleTable::new(vec![
            FieldRule::new("a", class_a, max_a),
            FieldRule::new("x", class_x, max_x),
        ]);
        let violations = validate(&df, &table);
        for violation in &violations {
            prop_assert_eq!(&violation.column, "a");
            prop_assert!(violation.row < height);
        }
    }

    /// A value within its length limit and matching its class yields zero
    /// violations for that column.
    #[test]
    fn clean_numeric_values_round_trip(values in prop::collection::vec("[0-9]{0,8}", 1..6)) {
        let cells: Vec<Option<String>> = values.into_iter().map(Some).collect();
        let df = frame(vec![("chamber_registration_number", cells)]);
        let table = RuleTable::new(vec![FieldRule::new(
            "chamber_registration_number",
            CharClass::Numeric,
            8,
        )]);
        prop_assert!(validate(&df, &table).is_empty());
    }
}

#[test]
fn seventy_one_character_name_exceeds_the_company_limit() {
    let name = "Koninklijke Handelskwekerij en Exportbedrijf van Aalsmeer en Omstrekens".to_string();
    assert_eq!(name.chars().count(), 71);
    let df = frame(vec![("company_name", vec![Some(name.clone())])]);
    let table = RuleTable::new(vec![FieldRule::new(
        "company_name",
        CharClass::Alphanumeric,
        70,
    )]);
    let violations = validate(&df, &table);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].kind, ViolationKind::LengthExceeded);
    assert_eq!(violations[0].observed, name);
}

#[test]
fn validation_is_deterministic_across_runs() {
    let df = frame(vec![
        ("Sector_code", vec![Some("ABC".to_string()), Some("99".to_string())]),
        ("country_name_code", vec![Some("NL1".to_string()), None]),
    ]);
    let table = RuleTable::new(vec![
        FieldRule::new("country_name_code", CharClass::Alphabetic, 2),
        FieldRule::new("Sector_code", CharClass::Numeric, 1),
    ]);
    let first = validate(&df, &table);
    let second = validate(&df, &table);
    assert_eq!(first, second);
    // Rule order leads, row order follows.
    assert_eq!(first[0].column, "country_name_code");
    assert!(first.iter().filter(|v| v.column == "Sector_code").count() >= 2);
}

//! Field-rule validation.
//!
//! Applies a feed's rule table to a record-set frame and collects every
//! breach. Validation is total: it never fails, never panics, and only
//! inspects columns present in both the frame and the table. Results come
//! out in rule order, then row order, so repeated runs over the same input
//! produce identical reports.

use polars::prelude::{AnyValue, DataFrame};

use gln_core::data_utils::display_value;
use gln_model::{RuleTable, Violation, ViolationKind};

/// Resolve a rule's column against the frame's headers, case-insensitively.
///
/// The senders re-save workbooks and header casing drifts; the rules match
/// the contract spelling.
fn resolve_column(df: &DataFrame, column: &str) -> Option<String> {
    df.get_column_names()
        .iter()
        .find(|name| name.eq_ignore_ascii_case(column))
        .map(|name| name.to_string())
}

/// Validate a frame against a rule table.
pub fn validate(df: &DataFrame, rules: &RuleTable) -> Vec<Violation> {
    let mut violations = Vec::new();
    for rule in rules {
        let Some(column) = resolve_column(df, &rule.column) else {
            continue;
        };
        let Ok(series) = df.column(&column) else {
            continue;
        };
        for idx in 0..df.height() {
            let observed = display_value(series.get(idx).unwrap_or(AnyValue::Null));
            if observed.chars().count() > rule.max_length as usize {
                violations.push(Violation {
                    column: rule.column.clone(),
                    row: idx,
                    kind: ViolationKind::LengthExceeded,
                    observed: observed.clone(),
                });
            }
            if !rule.class.matches(&observed) {
                violations.push(Violation {
                    column: rule.column.clone(),
                    row: idx,
                    kind: ViolationKind::InvalidCharacterClass,
                    observed: observed.clone(),
                });
            }
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use gln_model::{CharClass, FieldRule};
    use polars::df;

    fn rules(entries: &[(&str, CharClass, u32)]) -> RuleTable {
        RuleTable::new(
            entries
                .iter()
                .map(|(column, class, max)| FieldRule::new(*column, *class, *max))
                .collect(),
        )
    }

    #[test]
    fn clean_values_yield_no_violations() {
        let df = df! {
            "chamber_registration_number" => ["00001234", "87654321"],
            "city_name" => ["Ede", "Lisse"],
        }
        .unwrap();
        let table = rules(&[
            ("chamber_registration_number", CharClass::Numeric, 8),
            ("city_name", CharClass::Alphabetic, 35),
        ]);
        assert!(validate(&df, &table).is_empty());
    }

    #[test]
    fn long_value_is_reported_once_per_check() {
        let name = "x".repeat(71);
        let df = df! { "company_name" => [name.as_str()] }.unwrap();
        let table = rules(&[("company_name", CharClass::Alphanumeric, 70)]);
        let violations = validate(&df, &table);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::LengthExceeded);
        assert_eq!(violations[0].column, "company_name");
        assert_eq!(violations[0].row, 0);
    }

    #[test]
    fn one_value_can_breach_both_checks() {
        let df = df! { "Sector_code" => ["ABC"] }.unwrap();
        let table = rules(&[("Sector_code", CharClass::Numeric, 1)]);
        let violations = validate(&df, &table);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].kind, ViolationKind::LengthExceeded);
        assert_eq!(violations[1].kind, ViolationKind::InvalidCharacterClass);
    }

    #[test]
    fn absent_columns_are_skipped() {
        let df = df! { "city_name" => ["Ede"] }.unwrap();
        let table = rules(&[
            ("FH_registration_nr", CharClass::Numeric, 8),
            ("city_name", CharClass::Alphabetic, 35),
        ]);
        assert!(validate(&df, &table).is_empty());
    }

    #[test]
    fn nulls_count_as_empty_strings() {
        let df = df! { "chamber_registration_number" => [None::<&str>, Some("1234A678")] }.unwrap();
        let table = rules(&[("chamber_registration_number", CharClass::Numeric, 8)]);
        let violations = validate(&df, &table);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].row, 1);
        assert_eq!(violations[0].kind, ViolationKind::InvalidCharacterClass);
    }

    #[test]
    fn float_suffix_does_not_false_positive() {
        // Excel round-trips integer identifier columns as floats.
        let df = df! { "chamber_registration_number" => ["12345678.0"] }.unwrap();
        let table = rules(&[("chamber_registration_number", CharClass::Numeric, 8)]);
        assert!(validate(&df, &table).is_empty());
    }

    #[test]
    fn ordering_is_rule_then_row() {
        let df = df! {
            "b" => ["toolong", "toolong"],
            "a" => ["toolong", "toolong"],
        }
        .unwrap();
        let table = rules(&[
            ("a", CharClass::Alphanumeric, 3),
            ("b", CharClass::Alphanumeric, 3),
        ]);
        let violations = validate(&df, &table);
        let order: Vec<(String, usize)> = violations
            .iter()
            .map(|violation| (violation.column.clone(), violation.row))
            .collect();
        assert_eq!(
            order,
            vec![
                ("a".to_string(), 0),
                ("a".to_string(), 1),
                ("b".to_string(), 0),
                ("b".to_string(), 1),
            ]
        );
    }

    #[test]
    fn header_casing_differences_still_match() {
        let df = df! { "Chamber_Registration_Number" => ["1234A"] }.unwrap();
        let table = rules(&[("chamber_registration_number", CharClass::Numeric, 8)]);
        let violations = validate(&df, &table);
        assert_eq!(violations.len(), 1);
        // Reported under the contract spelling, not the header spelling.
        assert_eq!(violations[0].column, "chamber_registration_number");
    }
}

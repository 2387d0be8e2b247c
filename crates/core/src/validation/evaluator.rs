//! Rule evaluator. Pure logic, no storage access.

use serde_json::Value;

use super::rules::{FieldRule, FieldViolation, RuleKind, ValidationResult};
use crate::types::Document;

/// Evaluate every rule against a single record, in table order.
pub fn evaluate_rules(rules: &[FieldRule], data: &Document) -> ValidationResult {
    let violations = rules
        .iter()
        .filter_map(|rule| evaluate_single_rule(rule, data))
        .collect();

    ValidationResult { violations }
}

fn evaluate_single_rule(rule: &FieldRule, data: &Document) -> Option<FieldViolation> {
    // `null` is treated exactly like a missing key.
    let value = data.get(rule.field).filter(|v| !v.is_null());

    let violated = match rule.kind {
        RuleKind::Required => value.is_none(),
        RuleKind::String => value.is_some_and(|v| !v.is_string()),
        RuleKind::Number => value.is_some_and(|v| !v.is_number()),
        RuleKind::Integer => value.is_some_and(|v| !(v.is_i64() || v.is_u64())),
        RuleKind::LengthBetween { min, max } => value
            .and_then(Value::as_str)
            .is_some_and(|s| !(min..=max).contains(&s.encode_utf16().count())),
        RuleKind::AtLeast { min } => value.and_then(Value::as_f64).is_some_and(|n| n < min),
        RuleKind::Between { min, max } => value
            .and_then(Value::as_f64)
            .is_some_and(|n| n < min || n > max),
        RuleKind::OneOf { values } => {
            value.is_some_and(|v| !v.as_str().is_some_and(|s| values.contains(&s)))
        }
    };

    violated.then(|| FieldViolation {
        field: rule.field,
        kind: rule.kind,
        message: rule.message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make_rule(kind: RuleKind) -> FieldRule {
        FieldRule::new("test_field", kind, "rule failed")
    }

    fn data(pairs: &[(&str, Value)]) -> Document {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn passes(kind: RuleKind, value: Value) -> bool {
        evaluate_rules(&[make_rule(kind)], &data(&[("test_field", value)])).is_valid()
    }

    #[test]
    fn required_passes_with_value() {
        assert!(passes(RuleKind::Required, json!("hello")));
    }

    #[test]
    fn required_fails_missing_field() {
        let result = evaluate_rules(&[make_rule(RuleKind::Required)], &data(&[]));
        assert!(!result.is_valid());
        assert_eq!(result.violations[0].kind, RuleKind::Required);
    }

    #[test]
    fn required_fails_null_value() {
        assert!(!passes(RuleKind::Required, Value::Null));
    }

    #[test]
    fn type_rules_ignore_absent_values() {
        for kind in [RuleKind::String, RuleKind::Number, RuleKind::Integer] {
            assert!(evaluate_rules(&[make_rule(kind)], &data(&[])).is_valid());
            assert!(passes(kind, Value::Null));
        }
    }

    #[test]
    fn string_rule() {
        assert!(passes(RuleKind::String, json!("x")));
        assert!(!passes(RuleKind::String, json!(42)));
        assert!(!passes(RuleKind::String, json!(["x"])));
    }

    #[test]
    fn number_rule_accepts_integers_and_floats() {
        assert!(passes(RuleKind::Number, json!(3)));
        assert!(passes(RuleKind::Number, json!(12.5)));
        assert!(!passes(RuleKind::Number, json!("12.5")));
    }

    #[test]
    fn integer_rule_rejects_fractions() {
        assert!(passes(RuleKind::Integer, json!(2)));
        assert!(passes(RuleKind::Integer, json!(-2)));
        assert!(!passes(RuleKind::Integer, json!(2.5)));
        assert!(!passes(RuleKind::Integer, json!("2")));
    }

    #[test]
    fn length_between_is_inclusive() {
        let kind = RuleKind::LengthBetween { min: 2, max: 4 };
        assert!(!passes(kind, json!("a")));
        assert!(passes(kind, json!("ab")));
        assert!(passes(kind, json!("abcd")));
        assert!(!passes(kind, json!("abcde")));
    }

    #[test]
    fn length_counts_utf16_units() {
        let kind = RuleKind::LengthBetween { min: 1, max: 3 };
        assert!(passes(kind, json!("äöü")));
        // Each of these sits outside the BMP and takes two units.
        assert!(!passes(kind, json!("🤖🤖")));
        assert!(passes(kind, json!("🤖a")));
    }

    #[test]
    fn length_skips_non_strings() {
        assert!(passes(RuleKind::LengthBetween { min: 5, max: 10 }, json!(1)));
    }

    #[test]
    fn at_least() {
        let kind = RuleKind::AtLeast { min: 0.0 };
        assert!(passes(kind, json!(0)));
        assert!(passes(kind, json!(0.01)));
        assert!(!passes(kind, json!(-0.01)));
    }

    #[test]
    fn between_is_inclusive() {
        let kind = RuleKind::Between { min: 1.0, max: 4.0 };
        assert!(!passes(kind, json!(0)));
        assert!(passes(kind, json!(1)));
        assert!(passes(kind, json!(4)));
        assert!(!passes(kind, json!(5)));
    }

    #[test]
    fn one_of() {
        let kind = RuleKind::OneOf {
            values: &["a", "b"],
        };
        assert!(passes(kind, json!("b")));
        assert!(!passes(kind, json!("c")));
        assert!(!passes(kind, json!(1)));
    }

    #[test]
    fn all_violations_are_collected_in_order() {
        let rules = [
            FieldRule::new("a", RuleKind::Required, "a required"),
            FieldRule::new("b", RuleKind::Number, "b number"),
            FieldRule::new("c", RuleKind::String, "c string"),
        ];
        let d = data(&[("b", json!("x")), ("c", json!(1))]);
        let result = evaluate_rules(&rules, &d);
        let messages: Vec<_> = result.violations.iter().map(|v| v.message).collect();
        assert_eq!(messages, ["a required", "b number", "c string"]);
        assert_eq!(result.joined(", "), "a required, b number, c string");
    }
}

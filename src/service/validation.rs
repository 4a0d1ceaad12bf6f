//! Request body validation from per-field rules.

use crate::error::{AppError, FieldError};
use serde_json::Value;
use std::collections::HashMap;

/// Rule for one string field of a request body.
#[derive(Clone, Copy, Debug)]
pub struct ValidationRule {
    pub field: &'static str,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRule {
    pub const fn string(field: &'static str) -> Self {
        ValidationRule {
            field,
            required: false,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn length(mut self, min: usize, max: usize) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }
}

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a full body: required fields must be present. Returns only the fields the rules know.
    pub fn validate(
        body: &Value,
        rules: &[ValidationRule],
    ) -> Result<HashMap<String, Value>, AppError> {
        Self::run(body, rules, false)
    }

    /// Validate only the fields present in body (partial update).
    /// Required is not enforced for missing fields.
    pub fn validate_partial(
        body: &Value,
        rules: &[ValidationRule],
    ) -> Result<HashMap<String, Value>, AppError> {
        Self::run(body, rules, true)
    }

    fn run(
        body: &Value,
        rules: &[ValidationRule],
        partial: bool,
    ) -> Result<HashMap<String, Value>, AppError> {
        let Value::Object(map) = body else {
            return Err(AppError::Validation(vec![FieldError::new(
                &["body"],
                "value is not a valid dict",
                "type_error.dict",
            )]));
        };
        let mut errors = Vec::new();
        let mut payload = HashMap::new();
        for rule in rules {
            match map.get(rule.field) {
                None => {
                    if rule.required && !partial {
                        errors.push(FieldError::new(
                            &["body", rule.field],
                            "field required",
                            "value_error.missing",
                        ));
                    }
                }
                Some(v) => match validate_field(rule, v) {
                    Some(e) => errors.push(e),
                    None => {
                        payload.insert(rule.field.to_string(), v.clone());
                    }
                },
            }
        }
        if errors.is_empty() {
            Ok(payload)
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

fn validate_field(rule: &ValidationRule, v: &Value) -> Option<FieldError> {
    let loc = ["body", rule.field];
    let s = match v {
        Value::Null => {
            return Some(FieldError::new(
                &loc,
                "none is not an allowed value",
                "type_error.none.not_allowed",
            ))
        }
        Value::String(s) => s,
        _ => return Some(FieldError::new(&loc, "str type expected", "type_error.str")),
    };
    if s.contains('\0') {
        return Some(FieldError::new(
            &loc,
            "string must not contain null characters",
            "value_error.any_str.null_char",
        ));
    }
    let len = s.chars().count();
    if let Some(min) = rule.min_length {
        if len < min {
            return Some(FieldError::new(
                &loc,
                format!("ensure this value has at least {} characters", min),
                "value_error.any_str.min_length",
            ));
        }
    }
    if let Some(max) = rule.max_length {
        if len > max {
            return Some(FieldError::new(
                &loc,
                format!("ensure this value has at most {} characters", max),
                "value_error.any_str.max_length",
            ));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const RULES: &[ValidationRule] = &[
        ValidationRule::string("name").required().length(1, 5),
        ValidationRule::string("note"),
    ];

    fn errors(r: Result<HashMap<String, Value>, AppError>) -> Vec<FieldError> {
        match r {
            Err(AppError::Validation(e)) => e,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn keeps_known_fields_only() {
        let payload = RequestValidator::validate(&json!({"name": "abc", "id": 4}), RULES).unwrap();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload["name"], json!("abc"));
    }

    #[test]
    fn missing_required_field() {
        let e = errors(RequestValidator::validate(&json!({"note": "x"}), RULES));
        assert_eq!(
            e,
            vec![FieldError::new(&["body", "name"], "field required", "value_error.missing")]
        );
    }

    #[test]
    fn partial_skips_missing_required() {
        let payload = RequestValidator::validate_partial(&json!({"note": "x"}), RULES).unwrap();
        assert_eq!(payload.len(), 1);
        assert!(payload.contains_key("note"));
        assert!(RequestValidator::validate_partial(&json!({}), RULES).unwrap().is_empty());
    }

    #[test]
    fn partial_still_checks_present_fields() {
        let e = errors(RequestValidator::validate_partial(&json!({"name": ""}), RULES));
        assert_eq!(e[0].kind, "value_error.any_str.min_length");
    }

    #[test]
    fn length_bounds_count_chars() {
        assert!(RequestValidator::validate(&json!({"name": "ééééé"}), RULES).is_ok());
        let e = errors(RequestValidator::validate(&json!({"name": "abcdef"}), RULES));
        assert_eq!(e[0].msg, "ensure this value has at most 5 characters");
        assert_eq!(e[0].kind, "value_error.any_str.max_length");
    }

    #[test]
    fn wrong_types_and_null() {
        let e = errors(RequestValidator::validate(&json!({"name": 5, "note": null}), RULES));
        assert_eq!(e.len(), 2);
        assert_eq!(e[0].kind, "type_error.str");
        assert_eq!(e[1].kind, "type_error.none.not_allowed");
    }

    #[test]
    fn nul_character_is_rejected() {
        let e = errors(RequestValidator::validate(&json!({"name": "x\0y"}), RULES));
        assert_eq!(e.len(), 1);
        assert_eq!(e[0].loc, vec!["body", "name"]);
        assert_eq!(e[0].kind, "value_error.any_str.null_char");
    }

    #[test]
    fn non_object_body() {
        let e = errors(RequestValidator::validate(&json!([1, 2]), RULES));
        assert_eq!(e[0].loc, vec!["body".to_string()]);
        assert_eq!(e[0].kind, "type_error.dict");
    }
}

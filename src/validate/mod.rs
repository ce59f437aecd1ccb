//! Field coercion and validation.
//!
//! A [`Validator`] is created per record, every field is run through it, and
//! [`Validator::finish`] returns every failure at once as
//! [`ValidationErrors`]. Validation never stops at the first bad field.

mod rules;

pub use rules::{is_absolute_url, is_rating, leading_token, Validator};

use serde::Serialize;
use std::fmt;

/// Name of the rule a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Required,
    Integer,
    Url,
    Rating,
    Range,
    Membership,
}

impl Rule {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Integer => "integer",
            Self::Url => "url",
            Self::Rating => "rating",
            Self::Range => "range",
            Self::Membership => "membership",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One offending field of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error(
    "failed validation for \"{record}.{field}\" field's \"{rule}:{expected}\" rule, provided value {value:?}"
)]
pub struct FieldError {
    /// Record shape name, e.g. `SiteMovie`.
    pub record: &'static str,
    pub field: String,
    pub rule: Rule,
    pub value: String,
    pub expected: String,
}

/// Every field failure of one record, in the order the fields were checked.
///
/// Never empty when returned as an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn entries(&self) -> &[FieldError] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Names of the offending fields, in check order.
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_str()).collect()
    }

    /// The failure recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// `Ok(())` when nothing was collected.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_error(field: &str, rule: Rule, value: &str, expected: &str) -> FieldError {
        FieldError {
            record: "TestEmployee",
            field: field.to_string(),
            rule,
            value: value.to_string(),
            expected: expected.to_string(),
        }
    }

    #[test]
    fn test_field_error_message() {
        let error = field_error("salary", Rule::Range, "0", "min=1");
        assert_eq!(
            error.to_string(),
            r#"failed validation for "TestEmployee.salary" field's "range:min=1" rule, provided value "0""#
        );
    }

    #[test]
    fn test_joined_message_is_one_line_per_field() {
        let errors = ValidationErrors::from(vec![
            field_error("name", Rule::Required, "", "non-empty"),
            field_error("salary", Rule::Range, "0", "min=1"),
        ]);

        let rendered = errors.to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("TestEmployee.name"));
        assert!(lines[1].contains("TestEmployee.salary"));
        assert_eq!(errors.fields(), vec!["name", "salary"]);
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::default().into_result().is_ok());

        let errors = ValidationErrors::from(vec![field_error("name", Rule::Required, "", "")]);
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.get("name").map(|e| e.rule), Some(Rule::Required));
    }
}

use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::domain::ClosedSet;
use crate::validate::{FieldError, Rule, ValidationErrors};

const RATING_PATTERN: &str = r"^(\d+(?:\.\d+)?) / 10$";
const MAX_RATING: f64 = 10.0;

static RATING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RATING_PATTERN).expect("rating pattern is a valid regex"));

/// First whitespace-delimited token of `text`.
pub fn leading_token(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}

/// `"<n>[.<n>] / 10"` with exactly one space around the slash and a score
/// no greater than ten.
pub fn is_rating(value: &str) -> bool {
    RATING_RE
        .captures(value)
        .and_then(|caps| caps.get(1))
        .and_then(|score| score.as_str().parse::<f64>().ok())
        .is_some_and(|score| score <= MAX_RATING)
}

pub fn is_absolute_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| url.has_host())
}

/// Collects field failures for one record.
#[derive(Debug)]
pub struct Validator {
    record: &'static str,
    errors: ValidationErrors,
}

impl Validator {
    pub fn new(record: &'static str) -> Self {
        Self {
            record,
            errors: ValidationErrors::default(),
        }
    }

    pub fn fail(
        &mut self,
        field: impl Into<String>,
        rule: Rule,
        value: impl Display,
        expected: impl Into<String>,
    ) {
        self.errors.push(FieldError {
            record: self.record,
            field: field.into(),
            rule,
            value: value.to_string(),
            expected: expected.into(),
        });
    }

    /// Fails `required` on an empty (or whitespace-only) value. Returns
    /// whether the value was present.
    pub fn required(&mut self, field: &str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.fail(field, Rule::Required, value, "non-empty");
            return false;
        }
        true
    }

    /// Required absolute URL. An empty value is reported once, as `required`.
    pub fn url(&mut self, field: &str, value: &str) {
        if self.required(field, value) && !is_absolute_url(value) {
            self.fail(field, Rule::Url, value, "absolute URL");
        }
    }

    /// Rating format check, applied as-is: callers decide whether an empty
    /// rating is acceptable for their record.
    pub fn rating(&mut self, field: &str, value: &str) {
        if !is_rating(value) {
            self.fail(field, Rule::Rating, value, "<0-10>[.<digits>] / 10");
        }
    }

    /// Inclusive range check. Reports the bound that was crossed.
    pub fn range(&mut self, field: &str, value: i64, min: i64, max: i64) -> bool {
        if value < min {
            self.fail(field, Rule::Range, value, format!("min={min}"));
            false
        } else if value > max {
            self.fail(field, Rule::Range, value, format!("max={max}"));
            false
        } else {
            true
        }
    }

    /// Coerces the leading token of `raw` to an integer.
    ///
    /// Missing text fails `required`, a non-numeric token fails `integer`.
    pub fn integer<T>(&mut self, field: &str, raw: &str) -> Option<T>
    where
        T: FromStr,
    {
        let Some(token) = leading_token(raw) else {
            self.fail(field, Rule::Required, raw, "non-empty");
            return None;
        };

        match token.parse::<T>() {
            Ok(value) => Some(value),
            Err(_) => {
                self.fail(field, Rule::Integer, token, "base-10 integer");
                None
            }
        }
    }

    /// Like [`integer`](Self::integer) but an absent value yields `default`.
    pub fn integer_or<T>(&mut self, field: &str, raw: Option<&str>, default: T) -> T
    where
        T: FromStr,
    {
        match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(raw) => self.integer(field, raw).unwrap_or(default),
            None => default,
        }
    }

    /// Parses a member of a closed set. Empty fails `required`, anything
    /// outside the set fails `membership`.
    pub fn member<T>(&mut self, field: &str, raw: &str) -> Option<T>
    where
        T: ClosedSet + FromStr,
    {
        let raw = raw.trim();
        if !self.required(field, raw) {
            return None;
        }

        match raw.parse::<T>() {
            Ok(value) => Some(value),
            Err(_) => {
                self.fail(field, Rule::Membership, raw, format!("oneof={}", T::one_of()));
                None
            }
        }
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        self.errors.into_result()
    }

    /// Returns `value` only if no failures were collected.
    pub fn finish_with<T>(self, value: T) -> Result<T, ValidationErrors> {
        self.finish().map(|()| value)
    }
}

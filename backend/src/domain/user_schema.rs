//! Boundary validation for the creatable user shape.
//!
//! Turns arbitrary parsed JSON into a [`NewUser`] or the full list of
//! [`FieldViolation`]s. Every field is checked independently and every
//! failure is reported. Unknown keys are ignored.

use std::num::IntErrorKind;

use chrono::NaiveDate;
use serde_json::{Map, Value};

use super::user::{Age, NewUser, PersonName};
use super::violation::FieldViolation;

const FIRSTNAME: &str = "firstname";
const LASTNAME: &str = "lastname";
const AGE: &str = "age";
const DATE_OF_BIRTH: &str = "date_of_birth";

const NOT_AN_OBJECT: &str = "Input should be a valid dictionary or object to extract fields from";
const NOT_A_STRING: &str = "Input should be a valid string";
const NOT_AN_INTEGER: &str = "Input should be a valid integer";
const UNPARSABLE_INTEGER: &str =
    "Input should be a valid integer, unable to parse string as an integer";
const NOT_A_DATE: &str = "Input should be a valid date";
const BAD_DATE_FORMAT: &str = "Input should be a valid date in the format YYYY-MM-DD";

impl NewUser {
    /// Validate a parsed JSON payload against the creatable shape.
    ///
    /// Violation locations are relative to the payload root, e.g. `["age"]`;
    /// callers add transport prefixes.
    ///
    /// # Examples
    /// ```
    /// use mobility_api::domain::{NewUser, ViolationKind};
    /// use serde_json::json;
    ///
    /// let violations = NewUser::from_json(&json!({"firstname": "Ada", "age": -1}))
    ///     .expect_err("incomplete payload");
    /// assert!(violations
    ///     .iter()
    ///     .any(|v| v.loc() == ["lastname"] && v.kind() == ViolationKind::Missing));
    /// assert!(violations
    ///     .iter()
    ///     .any(|v| v.loc() == ["age"] && v.kind() == ViolationKind::ConstraintViolation));
    /// ```
    pub fn from_json(payload: &Value) -> Result<Self, Vec<FieldViolation>> {
        let Value::Object(object) = payload else {
            return Err(vec![FieldViolation::type_mismatch(
                std::iter::empty::<String>(),
                NOT_AN_OBJECT,
            )]);
        };

        let mut violations = Vec::new();
        let firstname = name_field(object, FIRSTNAME, &mut violations);
        let lastname = name_field(object, LASTNAME, &mut violations);
        let age = age_field(object, &mut violations);
        let date_of_birth = date_field(object, &mut violations);

        match (firstname, lastname, age, date_of_birth) {
            (Some(firstname), Some(lastname), Some(age), Some(date_of_birth))
                if violations.is_empty() =>
            {
                Ok(Self::new(firstname, lastname, age, date_of_birth))
            }
            _ => Err(violations),
        }
    }
}

fn required<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<&'a Value> {
    let value = object.get(field);
    if value.is_none() {
        violations.push(FieldViolation::missing([field]));
    }
    value
}

fn name_field(
    object: &Map<String, Value>,
    field: &'static str,
    violations: &mut Vec<FieldViolation>,
) -> Option<PersonName> {
    let value = required(object, field, violations)?;
    let Some(raw) = value.as_str() else {
        violations.push(FieldViolation::type_mismatch([field], NOT_A_STRING));
        return None;
    };
    PersonName::new(raw)
        .map_err(|err| violations.push(FieldViolation::constraint([field], err.to_string())))
        .ok()
}

fn age_field(object: &Map<String, Value>, violations: &mut Vec<FieldViolation>) -> Option<Age> {
    let value = required(object, AGE, violations)?;
    let parsed = match value {
        Value::String(text) => integer_from_str(text).ok_or(UNPARSABLE_INTEGER),
        other => as_integer(other).ok_or(NOT_AN_INTEGER),
    };
    let raw = match parsed {
        Ok(raw) => raw,
        Err(msg) => {
            violations.push(FieldViolation::type_mismatch([AGE], msg));
            return None;
        }
    };
    Age::new(raw)
        .map_err(|err| violations.push(FieldViolation::constraint([AGE], err.to_string())))
        .ok()
}

fn date_field(
    object: &Map<String, Value>,
    violations: &mut Vec<FieldViolation>,
) -> Option<NaiveDate> {
    let value = required(object, DATE_OF_BIRTH, violations)?;
    let Some(raw) = value.as_str() else {
        violations.push(FieldViolation::type_mismatch([DATE_OF_BIRTH], NOT_A_DATE));
        return None;
    };
    let parsed = is_iso_date_shape(raw)
        .then(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .flatten();
    if parsed.is_none() {
        violations.push(FieldViolation::type_mismatch([DATE_OF_BIRTH], BAD_DATE_FORMAT));
    }
    parsed
}

/// Accept JSON integers and integral floats such as `30.0`.
///
/// Integers beyond `i64` saturate so the range check reports them.
fn as_integer(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(raw) = number.as_i64() {
        return Some(raw);
    }
    if number.as_u64().is_some() {
        return Some(i64::MAX);
    }
    number
        .as_f64()
        .filter(|raw| raw.is_finite() && raw.fract() == 0.0)
        .map(|raw| raw as i64)
}

/// Whole-number strings such as `"28"`; no whitespace, no fraction.
///
/// Digit strings beyond `i64` saturate so the range check reports them.
fn integer_from_str(text: &str) -> Option<i64> {
    match text.parse::<i64>() {
        Ok(raw) => Some(raw),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Strict `YYYY-MM-DD`: chrono alone also accepts unpadded fields.
fn is_iso_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

//! Payload validation driven by a [`ResourceSchema`].
//!
//! Handlers pass the raw JSON body here before touching the database. The
//! result is a list of typed [`FieldValue`]s, in schema order, that the
//! repository binds directly into its statement.

use chrono::{DateTime, NaiveDate};
use serde_json::{Map, Value};
use validator::ValidateEmail;

use crate::error::CoreError;
use crate::media::{is_absolute_http_url, is_valid_media_url, normalize_slug};
use crate::schema::{FieldKind, FieldSpec, ResourceSchema};

/// A validated, typed field value. `None` is stored as SQL `NULL`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(Option<String>),
    Int(Option<i32>),
    Date(Option<NaiveDate>),
}

impl FieldValue {
    fn null_for(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Int => Self::Int(None),
            FieldKind::Date => Self::Date(None),
            _ => Self::Text(None),
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            Self::Text(v) => v.is_none(),
            Self::Int(v) => v.is_none(),
            Self::Date(v) => v.is_none(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => v.as_deref(),
            _ => None,
        }
    }
}

/// Validated field values in schema order.
#[derive(Debug, Clone, Default)]
pub struct FieldValues {
    entries: Vec<(&'static FieldSpec, FieldValue)>,
}

impl FieldValues {
    fn push(&mut self, field: &'static FieldSpec, value: FieldValue) {
        self.entries.push((field, value));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static FieldSpec, &FieldValue)> + '_ {
        self.entries.iter().map(|(f, v)| (*f, v))
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(f, _)| f.key == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validate a full payload for create (or singleton upsert).
///
/// Every required field must be present and non-blank; defaults fill in
/// omitted optional fields. Unknown keys are ignored.
pub fn validate_create(schema: &ResourceSchema, payload: &Value) -> Result<FieldValues, CoreError> {
    let obj = as_object(payload)?;
    let mut values = FieldValues::default();
    let mut missing = Vec::new();

    for field in schema.fields {
        let value = match obj.get(field.key) {
            Some(raw) => parse_field(field, raw)?,
            None => FieldValue::null_for(field.kind),
        };
        let value = apply_default(field, value)?;

        if value.is_null() && field.required {
            missing.push(field.key);
            continue;
        }
        values.push(field, value);
    }

    if !missing.is_empty() {
        return Err(CoreError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    Ok(values)
}

/// Validate a partial payload for update.
///
/// Only keys the schema recognizes are kept. At least one must be present,
/// and required fields may not be cleared.
pub fn validate_update(schema: &ResourceSchema, payload: &Value) -> Result<FieldValues, CoreError> {
    let obj = as_object(payload)?;
    let mut values = FieldValues::default();

    for field in schema.fields {
        let Some(raw) = obj.get(field.key) else {
            continue;
        };
        let value = apply_default(field, parse_field(field, raw)?)?;
        if value.is_null() && field.required {
            return Err(CoreError::Validation(format!(
                "Field '{}' cannot be empty",
                field.key
            )));
        }
        values.push(field, value);
    }

    if values.is_empty() {
        return Err(CoreError::Validation(
            "No updatable fields provided".to_string(),
        ));
    }

    Ok(values)
}

fn as_object(payload: &Value) -> Result<&Map<String, Value>, CoreError> {
    payload
        .as_object()
        .ok_or_else(|| CoreError::Validation("Request body must be a JSON object".to_string()))
}

fn apply_default(field: &FieldSpec, value: FieldValue) -> Result<FieldValue, CoreError> {
    match field.default {
        Some(default) if value.is_null() => parse_field(field, &Value::String(default.into())),
        _ => Ok(value),
    }
}

fn invalid(field: &FieldSpec, reason: &str) -> CoreError {
    CoreError::Validation(format!("Field '{}' {reason}", field.key))
}

fn parse_field(field: &FieldSpec, raw: &Value) -> Result<FieldValue, CoreError> {
    if field.kind == FieldKind::Int {
        return parse_int(field, raw).map(FieldValue::Int);
    }

    let Some(text) = non_blank_string(field, raw)? else {
        return Ok(FieldValue::null_for(field.kind));
    };
    let trimmed = text.trim().to_string();

    let value = match field.kind {
        FieldKind::Text => FieldValue::Text(Some(text)),
        FieldKind::Media => {
            if !is_valid_media_url(&trimmed) {
                return Err(invalid(
                    field,
                    "must be an absolute http(s) URL or an uploaded file path",
                ));
            }
            FieldValue::Text(Some(trimmed))
        }
        FieldKind::Link => {
            if !is_absolute_http_url(&trimmed) {
                return Err(invalid(field, "must be an absolute http(s) URL"));
            }
            FieldValue::Text(Some(trimmed))
        }
        FieldKind::Email => {
            if !trimmed.validate_email() {
                return Err(invalid(field, "must be a valid e-mail address"));
            }
            FieldValue::Text(Some(trimmed))
        }
        FieldKind::Slug => {
            let slug = normalize_slug(&trimmed)
                .ok_or_else(|| invalid(field, "must be a path segment without spaces"))?;
            FieldValue::Text(Some(slug))
        }
        FieldKind::Enum(allowed) => {
            if !allowed.contains(&trimmed.as_str()) {
                return Err(invalid(
                    field,
                    &format!("must be one of: {}", allowed.join(", ")),
                ));
            }
            FieldValue::Text(Some(trimmed))
        }
        FieldKind::Date => FieldValue::Date(Some(parse_date(field, &trimmed)?)),
        FieldKind::Int => unreachable!("integers are parsed above"),
    };

    Ok(value)
}

/// `Some` for a string with non-whitespace content, `None` for null or blank.
fn non_blank_string(field: &FieldSpec, raw: &Value) -> Result<Option<String>, CoreError> {
    match raw {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        _ => Err(invalid(field, "must be a string")),
    }
}

fn parse_int(field: &FieldSpec, raw: &Value) -> Result<Option<i32>, CoreError> {
    let parsed = match raw {
        Value::Null => return Ok(None),
        Value::String(s) if s.trim().is_empty() => return Ok(None),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Number(n) => n.as_i64(),
        _ => None,
    };
    parsed
        .and_then(|n| i32::try_from(n).ok())
        .map(Some)
        .ok_or_else(|| invalid(field, "must be an integer"))
}

/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp whose date part is kept.
fn parse_date(field: &FieldSpec, value: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| invalid(field, "must be a date in YYYY-MM-DD format"))
}

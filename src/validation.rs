//! Schema validation for request payloads.
//!
//! A [`Schema`] is an explicit field specification — name, kind,
//! required/optional, bounds — interpreted by a small pure function over a
//! decoded JSON payload. It is independent of the HTTP layer: handlers run
//! [`Schema::check`] (or [`Schema::check_partial`] for partial updates)
//! before deserializing into a typed request struct.
//!
//! Checking is fail-fast: the first violation is reported and the rest of
//! the payload is not inspected. Field errors are reported in schema
//! order, then unknown fields.

use serde_json::Value;

/// Value kind a field must decode to. Types are strict, no coercion:
/// `"1965"` does not satisfy an integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
}

/// Specification of a single payload field.
///
/// For [`FieldKind::Text`] the bounds constrain the character count; for
/// [`FieldKind::Integer`] they constrain the value. Text fields reject the
/// empty string regardless of bounds.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: &'static str,
    kind: FieldKind,
    required: bool,
    min: Option<i64>,
    max: Option<i64>,
}

impl FieldSpec {
    pub fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            required: false,
            min: None,
            max: None,
        }
    }

    pub fn integer(name: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Integer,
            required: false,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min(mut self, bound: i64) -> Self {
        self.min = Some(bound);
        self
    }

    pub fn max(mut self, bound: i64) -> Self {
        self.max = Some(bound);
        self
    }
}

/// First violation found while checking a payload against a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct SchemaViolation {
    /// Failing field, when the violation concerns one.
    pub field: Option<String>,
    pub message: String,
}

impl SchemaViolation {
    fn field(name: impl Into<String>, message: String) -> Self {
        Self {
            field: Some(name.into()),
            message,
        }
    }

    fn payload(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

impl From<SchemaViolation> for crate::error::AppError {
    fn from(v: SchemaViolation) -> Self {
        crate::error::AppError::Validation(v.message)
    }
}

/// An ordered field specification for one payload shape.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// Checks a creation payload: all required fields present, every
    /// present field well-typed and in bounds, no unknown fields.
    pub fn check(&self, payload: &Value) -> Result<(), SchemaViolation> {
        self.run(payload, true)
    }

    /// Checks a partial-update payload: required-ness is waived, but the
    /// payload must supply at least one field and every supplied field is
    /// checked as usual.
    pub fn check_partial(&self, payload: &Value) -> Result<(), SchemaViolation> {
        let object = payload
            .as_object()
            .ok_or_else(|| SchemaViolation::payload("request body must be a JSON object"))?;
        if object.is_empty() {
            return Err(SchemaViolation::payload("at least one field is required"));
        }
        self.run(payload, false)
    }

    fn run(&self, payload: &Value, require: bool) -> Result<(), SchemaViolation> {
        let object = payload
            .as_object()
            .ok_or_else(|| SchemaViolation::payload("request body must be a JSON object"))?;

        for spec in &self.fields {
            match object.get(spec.name) {
                Some(value) => check_value(spec, value)?,
                None if require && spec.required => {
                    return Err(SchemaViolation::field(
                        spec.name,
                        format!("\"{}\" is required", spec.name),
                    ));
                }
                None => {}
            }
        }

        for key in object.keys() {
            if !self.fields.iter().any(|spec| spec.name == key) {
                return Err(SchemaViolation::field(
                    key.clone(),
                    format!("\"{key}\" is not allowed"),
                ));
            }
        }

        Ok(())
    }
}

fn check_value(spec: &FieldSpec, value: &Value) -> Result<(), SchemaViolation> {
    let name = spec.name;
    match spec.kind {
        FieldKind::Text => {
            let text = value.as_str().ok_or_else(|| {
                SchemaViolation::field(name, format!("\"{name}\" must be a string"))
            })?;
            if text.is_empty() {
                return Err(SchemaViolation::field(
                    name,
                    format!("\"{name}\" is not allowed to be empty"),
                ));
            }
            let length = text.chars().count() as i64;
            if let Some(min) = spec.min {
                if length < min {
                    return Err(SchemaViolation::field(
                        name,
                        format!("\"{name}\" length must be at least {min} characters long"),
                    ));
                }
            }
            if let Some(max) = spec.max {
                if length > max {
                    return Err(SchemaViolation::field(
                        name,
                        format!(
                            "\"{name}\" length must be less than or equal to {max} characters long"
                        ),
                    ));
                }
            }
        }
        FieldKind::Integer => {
            let number = value.as_i64().ok_or_else(|| {
                SchemaViolation::field(name, format!("\"{name}\" must be an integer"))
            })?;
            if let Some(min) = spec.min {
                if number < min {
                    return Err(SchemaViolation::field(
                        name,
                        format!("\"{name}\" must be greater than or equal to {min}"),
                    ));
                }
            }
            if let Some(max) = spec.max {
                if number > max {
                    return Err(SchemaViolation::field(
                        name,
                        format!("\"{name}\" must be less than or equal to {max}"),
                    ));
                }
            }
        }
    }
    Ok(())
}

//! Request payload validation
//!
//! Write operations (create, update) run their payload through
//! [`PersonPayload::validate`] before touching the store. Validation is a
//! pure function of the payload; failures map field names to ordered lists
//! of human-readable messages, serialized verbatim as the 400 response body.

use crate::state::Person;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Message reported for a missing or blank required field
const BLANK_FIELD_MESSAGE: &str = "Invalid format: Null or empty";

/// Mapping from field name to the ordered error messages for that field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    fn push(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    /// True when no field has any recorded error
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for a field, if any
    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Names of the fields that failed, in serialization order
    pub fn fields(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }
}

/// Incoming person payload for create and update operations
///
/// Fields are optional at the deserialization layer so that absent and JSON
/// null values reach the validator instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonPayload {
    /// First name; required non-blank
    pub first_name: Option<String>,
    /// Last name; required non-blank
    pub last_name: Option<String>,
}

impl PersonPayload {
    /// Validate the payload and convert it into a storable [`Person`]
    ///
    /// A field is invalid when it is absent, null, empty, or whitespace-only.
    /// Both fields are checked independently so a single failure reports
    /// every blank field at once. Callers must not mutate the store when
    /// this returns `Err`.
    pub fn validate(self) -> Result<Person, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let first_name = require_field(self.first_name, "firstName", &mut errors);
        let last_name = require_field(self.last_name, "lastName", &mut errors);

        match (first_name, last_name) {
            (Some(first_name), Some(last_name)) => Ok(Person::new(first_name, last_name)),
            _ => Err(errors),
        }
    }
}

/// Accept a non-blank value, recording a validation error otherwise
fn require_field(
    value: Option<String>,
    field: &str,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => {
            errors.push(field, BLANK_FIELD_MESSAGE);
            None
        }
    }
}

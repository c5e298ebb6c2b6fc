//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every helper yields an `invalid_request` error whose `details` carry a
//! stable reason code and, for field-level failures, the offending field.

use serde_json::json;

use crate::domain::Error;

/// Validation reason codes reported in error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    NotANumber,
    NotWholeMinutes,
    UndecodableBody,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::NotANumber => "not_a_number",
            Self::NotWholeMinutes => "not_whole_minutes",
            Self::UndecodableBody => "undecodable_body",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn field_error(field: FieldName, code: ValidationCode, message: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName, message: &str) -> Error {
    field_error(field, ValidationCode::MissingField, message)
}

/// The body was neither decodable JSON nor a decodable form, so no field
/// can be blamed.
pub(crate) fn undecodable_body_error(message: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "code": ValidationCode::UndecodableBody.as_str(),
    }))
}

/// Treat absent and empty text the same way.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

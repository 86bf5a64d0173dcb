use crate::constants::{
    ADDRESS_MAX_LEN, DEFAULT_SHIPMENT_STATUS, RECIPIENT_MAX_LEN, STATUS_MAX_LEN,
};
use crate::db::NewShipment;
use serde_json::{Map, Value};

/// Fields a create request must carry, in reporting order
const REQUIRED_FIELDS: [&str; 2] = ["recipient", "address"];

/// Reasons a create request is rejected before reaching the database
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Field must be a string: {0}")]
    InvalidType(&'static str),
    #[error("Field too long: {field} (max {max} characters)")]
    TooLong { field: &'static str, max: usize },
}

/// Parses a raw request body, treating an empty or malformed body as `{}`.
pub fn parse_body(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or_else(|_| Value::Object(Map::new()))
}

/// Checks a create request and turns it into an insertable record.
///
/// A required field is missing when it is absent, `null` or an empty string.
/// All missing fields are reported together so the caller can fix them in one
/// round trip. A body that is not a JSON object is treated as empty.
///
/// # Errors
///
/// Returns a ValidationError describing the first class of problem found:
/// missing fields, then non-string values, then over-long values
pub fn validate_create_request(body: &Value) -> Result<NewShipment, ValidationError> {
    let empty = Map::new();
    let fields = body.as_object().unwrap_or(&empty);

    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|name| is_missing(fields.get(*name)))
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let recipient = string_field(fields, "recipient", RECIPIENT_MAX_LEN)?
        .unwrap_or_default();
    let address = string_field(fields, "address", ADDRESS_MAX_LEN)?.unwrap_or_default();
    let status = string_field(fields, "status", STATUS_MAX_LEN)?
        .unwrap_or_else(|| DEFAULT_SHIPMENT_STATUS.to_string());

    Ok(NewShipment {
        recipient,
        address,
        status,
    })
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Reads an optional string field; absent and `null` both yield `None`.
fn string_field(
    fields: &Map<String, Value>,
    name: &'static str,
    max: usize,
) -> Result<Option<String>, ValidationError> {
    match fields.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.chars().count() > max => {
            Err(ValidationError::TooLong { field: name, max })
        }
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ValidationError::InvalidType(name)),
    }
}

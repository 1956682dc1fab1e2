use serde_json::Value;

use super::{as_object, contact_number, required_text, ValidationError};
use crate::models::NewNgoRequest;

/// Validate an NGO request creation body.
pub fn validate_ngo_request_input(raw: &Value) -> Result<NewNgoRequest, ValidationError> {
    let obj = as_object(raw)?;

    Ok(NewNgoRequest {
        ngo_name: required_text(obj, "ngoName", "NGO name")?,
        contact_number: contact_number(obj, "contactNumber")?,
        requirements: required_text(obj, "requirements", "Requirements")?,
        city: required_text(obj, "city", "City")?,
    })
}

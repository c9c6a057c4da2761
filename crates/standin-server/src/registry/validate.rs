//! Schema validation for submitted mock definitions.

use super::types::{MockDefinition, MockResponse, ResponseSpec, SUPPORTED_METHODS};
use crate::error::MockError;

/// Validate a submitted definition and return its normalized form.
///
/// The returned definition is a copy of the input with the request method
/// uppercased. Pure function: identical inputs always produce the same
/// result, and a failing input is reported by its first violated constraint
/// in declaration order (name, path, method, then each response).
pub fn validate(mock: &MockDefinition) -> Result<MockDefinition, MockError> {
    if mock.name.is_empty() {
        return Err(MockError::Validation(
            "name must be a non-empty string".to_string(),
        ));
    }

    if mock.request.path.is_empty() {
        return Err(MockError::Validation(
            "request.path must be a non-empty string".to_string(),
        ));
    }

    let method = mock.request.method.to_uppercase();
    if !SUPPORTED_METHODS.contains(&method.as_str()) {
        return Err(MockError::Validation(format!(
            "request.method must be one of GET, PUT, PATCH, POST, DELETE; got {:?}",
            mock.request.method
        )));
    }

    match &mock.response {
        MockResponse::Single(spec) => validate_response(spec)?,
        MockResponse::Sequence(specs) => {
            for spec in specs {
                validate_response(spec)?;
            }
        }
    }

    let mut validated = mock.clone();
    validated.request.method = method;
    Ok(validated)
}

/// `timeoutMs` non-negativity is carried by its unsigned type; a negative
/// wire value never reaches this point.
fn validate_response(spec: &ResponseSpec) -> Result<(), MockError> {
    if !(200..=599).contains(&spec.status_code) {
        return Err(MockError::Validation(format!(
            "response.statusCode must be between 200 and 599; got {}",
            spec.status_code
        )));
    }

    if !(spec.body.is_object() || spec.body.is_array()) {
        return Err(MockError::Validation(
            "response.body must be a JSON object or array".to_string(),
        ));
    }

    Ok(())
}

//! Wire types and response helpers for the HTTP boundary.

use crate::error::MockError;
use crate::registry::MockSubmission;
use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{Request, Response, StatusCode};
use serde::{Deserialize, Serialize};

/// Body shape accepted by `POST /mocks`.
#[derive(Debug, Deserialize)]
pub struct AddMocksRequest {
    pub data: MockSubmission,
}

/// Wire shape of an error report.
///
/// Built from a static kind name and a pre-rendered message, so
/// serialization cannot fail and an error report can never itself error.
#[derive(Debug, Serialize)]
pub struct ErrorReport<'a> {
    pub error: &'static str,
    pub message: &'a str,
}

/// Exhaustive kind→status mapping. Owned by the boundary layer; the core
/// error type carries no transport knowledge.
pub fn status_for(err: &MockError) -> StatusCode {
    match err {
        MockError::Validation(_) => StatusCode::BAD_REQUEST,
        MockError::AlreadyExists(_) => StatusCode::CONFLICT,
        MockError::NotFound(_) => StatusCode::NOT_FOUND,
        MockError::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Build an HTTP response with the given status and body.
///
/// Handles the unlikely case where `Response::builder()` fails by returning
/// a minimal 500 response.
pub fn build_response(status: StatusCode, body: impl Into<Bytes>) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .body(Full::new(body.into()))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::from("Internal Server Error"))))
}

/// Create a JSON response.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let json = serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string());
    let mut response = build_response(status, json);
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

/// Create the wire report for a core error.
pub fn error_response(err: &MockError) -> Response<Full<Bytes>> {
    let message = err.to_string();
    let report = ErrorReport {
        error: err.kind(),
        message: &message,
    };
    json_response(status_for(err), &report)
}

/// Collect a request body into bytes.
pub async fn collect_body(req: Request<Incoming>) -> Result<Bytes, MockError> {
    req.collect()
        .await
        .map(|collected| collected.to_bytes())
        .map_err(|e| MockError::Unspecified(format!("failed to read request body: {e}")))
}

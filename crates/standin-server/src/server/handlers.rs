//! Handlers for mock management and request replay.

use crate::error::MockError;
use crate::registry::{IncomingRequest, MockRegistry, MockResponse};
use crate::server::types::{
    build_response, collect_body, error_response, json_response, AddMocksRequest,
};
use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{Request, Response, StatusCode};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// POST /mocks — register one mock or an ordered batch.
pub async fn handle_add(
    req: Request<Incoming>,
    registry: Arc<MockRegistry>,
) -> Response<Full<Bytes>> {
    let body = match collect_body(req).await {
        Ok(b) => b,
        Err(e) => return error_response(&e),
    };

    let payload: AddMocksRequest = match serde_json::from_slice(&body) {
        Ok(p) => p,
        Err(e) => {
            return error_response(&MockError::Validation(format!("invalid mock payload: {e}")))
        }
    };

    match registry.add(payload.data) {
        Ok(()) => build_response(StatusCode::CREATED, "CREATED"),
        Err(e) => error_response(&e),
    }
}

/// GET /mocks — list every registered definition.
pub async fn handle_list(registry: Arc<MockRegistry>) -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, &registry.all())
}

/// DELETE /mocks — reset the registry.
pub async fn handle_clear(registry: Arc<MockRegistry>) -> Response<Full<Bytes>> {
    registry.clear();
    build_response(StatusCode::OK, "DELETED")
}

/// Fallback — replay the response registered for this request, if any.
pub async fn handle_replay(
    req: Request<Incoming>,
    registry: Arc<MockRegistry>,
) -> Response<Full<Bytes>> {
    let method = req.method().to_string();
    // Match on the full original URL: query strings are part of the lookup
    // key and never stripped.
    let path = req
        .uri()
        .path_and_query()
        .map(|pq| pq.to_string())
        .unwrap_or_else(|| req.uri().path().to_string());
    let headers: HashMap<String, String> = req
        .headers()
        .iter()
        .map(|(k, v)| (k.as_str().to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();

    let request = IncomingRequest {
        path,
        method,
        headers,
    };

    let found = match registry.find(&request) {
        Ok(Some(found)) => found,
        Ok(None) => {
            info!(method = %request.method, path = %request.path, "no matching mock");
            return error_response(&MockError::NotFound(format!(
                "{} {} mock not found",
                request.method, request.path
            )));
        }
        Err(e) => return error_response(&e),
    };

    let spec = match found.response {
        MockResponse::Single(spec) => spec,
        // find() collapses sequences before returning.
        MockResponse::Sequence(_) => {
            return error_response(&MockError::Unspecified(
                "registry returned an unconsumed response sequence".to_string(),
            ))
        }
    };

    if spec.timeout_ms > 0 {
        debug!(delay_ms = spec.timeout_ms, path = %request.path, "delaying response");
        tokio::time::sleep(Duration::from_millis(spec.timeout_ms)).await;
    }

    let status = StatusCode::from_u16(spec.status_code).unwrap_or(StatusCode::OK);
    let mut response = json_response(status, &spec.body);
    if let Some(replay_headers) = &spec.headers {
        for (name, value) in replay_headers {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                response.headers_mut().insert(name, value);
            }
        }
    }
    response
}

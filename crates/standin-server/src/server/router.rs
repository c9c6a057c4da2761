//! Route dispatch for the stub server.

use crate::registry::MockRegistry;
use crate::server::handlers;
use crate::server::types::build_response;
use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
    ACCESS_CONTROL_ALLOW_ORIGIN,
};
use hyper::{Method, Request, Response, StatusCode};
use std::sync::Arc;
use tracing::debug;

/// Main request router.
///
/// Management endpoints live under `/mocks`; every other request is treated
/// as a simulated call and matched against the registry.
pub async fn route_request(
    req: Request<Incoming>,
    registry: Arc<MockRegistry>,
) -> Result<Response<Full<Bytes>>, hyper::Error> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    debug!(%method, %path, "incoming request");

    let mut response = match (&method, path.as_str()) {
        (&Method::POST, "/mocks") => handlers::handle_add(req, registry).await,
        (&Method::GET, "/mocks") => handlers::handle_list(registry).await,
        (&Method::DELETE, "/mocks") => handlers::handle_clear(registry).await,
        // OPTIONS is not a registrable verb, so preflight never shadows a mock.
        (&Method::OPTIONS, _) => preflight_response(),
        _ => handlers::handle_replay(req, registry).await,
    };

    apply_cors(&mut response);
    Ok(response)
}

/// Answer CORS preflight for browser-driven test suites.
fn preflight_response() -> Response<Full<Bytes>> {
    let mut response = build_response(StatusCode::NO_CONTENT, Bytes::new());
    let headers = response.headers_mut();
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET,PUT,PATCH,POST,DELETE,OPTIONS"),
    );
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("*"));
    response
}

fn apply_cors(response: &mut Response<Full<Bytes>>) {
    response
        .headers_mut()
        .insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
}

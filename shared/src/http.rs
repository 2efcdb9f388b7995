//! HTTP helpers for the function responses.

use lambda_http::{Body, Response};
use serde::Serialize;

/// Headers sent on every response, including preflight and errors.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Headers", "Content-Type"),
    ("Content-Type", "application/json"),
];

/// Build a response carrying the CORS headers.
pub fn cors_response(status: u16, body: Body) -> Result<Response<Body>, lambda_http::Error> {
    let builder = CORS_HEADERS
        .iter()
        .fold(Response::builder().status(status), |builder, (name, value)| {
            builder.header(*name, *value)
        });

    Ok(builder.body(body).map_err(Box::new)?)
}

/// Create a JSON response with the given status code and data.
pub fn json_response<T: Serialize>(
    status: u16,
    data: &T,
) -> Result<Response<Body>, lambda_http::Error> {
    cors_response(status, Body::from(serde_json::to_string(data)?))
}

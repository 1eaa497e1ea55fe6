//! Permissive CORS handling applied to every response.
//!
//! tower-http's `CorsLayer` only attaches the method and header lists to
//! preflight responses, while this service promises all three headers on every
//! response and a bare 200 for any `OPTIONS` request, so the middleware is
//! spelled out here.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

pub async fn apply(req: Request, next: Next) -> Response {
    // Preflight: terminal, empty body.
    if req.method() == Method::OPTIONS {
        let mut res = StatusCode::OK.into_response();
        set_headers(res.headers_mut());
        return res;
    }

    let mut res = next.run(req).await;
    set_headers(res.headers_mut());
    res
}

fn set_headers(headers: &mut HeaderMap) {
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type"),
    );
}

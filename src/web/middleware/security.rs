//! Security headers middleware.

use axum::{
    body::Body,
    http::{header::HeaderValue, Request},
    middleware::Next,
    response::Response,
};

/// Security headers middleware.
///
/// Adds the following headers to all responses:
/// - X-Content-Type-Options: nosniff
/// - X-Frame-Options: SAMEORIGIN (board pages may frame themselves)
/// - X-DNS-Prefetch-Control: off
/// - Referrer-Policy: same-origin
///
/// The board's own pages still get a `Referer` on form posts, which the
/// create endpoints use to send the poster back.
pub async fn security_headers(req: Request<Body>, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        "X-Content-Type-Options",
        HeaderValue::from_static("nosniff"),
    );

    headers.insert("X-Frame-Options", HeaderValue::from_static("SAMEORIGIN"));

    headers.insert("X-DNS-Prefetch-Control", HeaderValue::from_static("off"));

    headers.insert("Referrer-Policy", HeaderValue::from_static("same-origin"));

    response
}

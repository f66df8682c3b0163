//! Per-request correlation middleware

use axum::extract::Request;
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use roster_core::core_types::schema::{FIELD_TRACE_ID, HEADER_REQUEST_ID, HEADER_TRACE_ID};
use roster_core::core_types::{RequestContext, TraceId};
use tracing::Instrument;

/// Attach a [`RequestContext`] to the request, run the rest of the stack in
/// a span carrying its ids, and echo them on the response.
///
/// An acceptable inbound `x-request-id` is reused; otherwise one is minted.
/// `x-trace-id` is only propagated when the caller sent a valid one.
pub async fn attach_request_context(mut req: Request, next: Next) -> Response {
    let mut ctx = RequestContext::from_inbound(header_str(req.headers(), HEADER_REQUEST_ID));
    if let Some(trace_id) = header_str(req.headers(), HEADER_TRACE_ID).and_then(TraceId::parse) {
        ctx = ctx.with_trace_id(trace_id);
    }

    let span = tracing::info_span!(
        "http_request",
        request_id = %ctx.request_id,
        trace_id = tracing::field::Empty,
        method = %req.method(),
        path = %req.uri().path(),
    );
    if let Some(trace_id) = &ctx.trace_id {
        span.record(FIELD_TRACE_ID, trace_id.as_str());
    }
    req.extensions_mut().insert(ctx.clone());

    let mut response = next.run(req).instrument(span).await;

    echo_header(&mut response, HEADER_REQUEST_ID, ctx.request_id.as_str());
    if let Some(trace_id) = &ctx.trace_id {
        echo_header(&mut response, HEADER_TRACE_ID, trace_id.as_str());
    }
    response
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

fn echo_header(response: &mut Response, name: &'static str, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(name), value);
    }
}

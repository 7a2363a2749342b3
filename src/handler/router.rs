//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, exact-path
//! dispatch to the index page, the specification endpoint or the asset
//! bundle, and access logging.

use crate::config::HandlerConfig;
use crate::handler::{index, spec_file, static_files};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response, Version};
use percent_encoding::percent_decode_str;
use std::time::Instant;

/// Request context encapsulating information needed for request processing
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub version: Version,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

impl RequestContext {
    /// Extract the parts of a request the handler needs
    pub fn from_request<B>(req: &Request<B>) -> Self {
        let method = req.method().clone();
        Self {
            is_head: method == Method::HEAD,
            method,
            path: decode_path(req.uri().path()),
            query: req.uri().query().map(ToString::to_string),
            version: req.version(),
            if_none_match: req
                .headers()
                .get("if-none-match")
                .and_then(|v| v.to_str().ok())
                .map(ToString::to_string),
        }
    }

    #[cfg(test)]
    pub fn get(path: &str) -> Self {
        Self {
            method: Method::GET,
            path: path.to_string(),
            query: None,
            version: Version::HTTP_11,
            is_head: false,
            if_none_match: None,
        }
    }
}

/// Percent-decode a request path before dispatch
///
/// Byte sequences that are not UTF-8 are replaced, so such paths match no route.
fn decode_path(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Main entry point for HTTP request handling
pub async fn handle_request(ctx: RequestContext, config: &HandlerConfig) -> Response<Full<Bytes>> {
    let started = Instant::now();
    let mut response = route_request(&ctx, config).await;

    if config.http.enable_cors {
        response.headers_mut().insert(
            "Access-Control-Allow-Origin",
            hyper::header::HeaderValue::from_static("*"),
        );
    }

    if config.logging.access_log {
        log_access(&ctx, &response, started, &config.logging.access_log_format);
    }
    response
}

/// Route request based on method and exact path
async fn route_request(ctx: &RequestContext, config: &HandlerConfig) -> Response<Full<Bytes>> {
    if let Some(resp) = check_http_method(&ctx.method, config.http.enable_cors) {
        return resp;
    }

    match ctx.path.as_str() {
        "" | "/" => index::serve_index(ctx, &config.source),
        "swagger.json" | "/swagger.json" => spec_file::serve_spec(ctx, &config.source).await,
        _ => static_files::serve_asset(ctx, &config.http),
    }
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

fn log_access(
    ctx: &RequestContext,
    response: &Response<Full<Bytes>>,
    started: Instant,
    format: &str,
) {
    let mut entry = AccessLogEntry::new(ctx.method.to_string(), ctx.path.clone());
    entry.query.clone_from(&ctx.query);
    entry.http_version = version_label(ctx.version).to_string();
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .body()
        .size_hint()
        .exact()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0);
    entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    logger::log_access(&entry, format);
}

fn version_label(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "0.9",
        Version::HTTP_10 => "1.0",
        Version::HTTP_2 => "2",
        Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

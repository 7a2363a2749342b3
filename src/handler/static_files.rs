//! Static file serving module
//!
//! Serves the embedded UI bundle with `ETag` validation.

use crate::assets;
use crate::config::HttpConfig;
use crate::handler::router::RequestContext;
use crate::http::{self, cache, response::build_cached_response, CachePolicy};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::borrow::Cow;

/// Serve an embedded asset, or 404 when the path is not part of the bundle
pub fn serve_asset(ctx: &RequestContext, http_config: &HttpConfig) -> Response<Full<Bytes>> {
    let Some(asset) = assets::lookup(&ctx.path) else {
        return http::build_404_response();
    };

    let etag = cache::generate_etag(&asset.data);
    let policy = CachePolicy::Public(http_config.cache_max_age);

    // Check if client has cached version
    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag, policy);
    }

    let body = match asset.data {
        Cow::Borrowed(data) => Bytes::from_static(data),
        Cow::Owned(data) => Bytes::from(data),
    };
    build_cached_response(body, asset.content_type, &etag, policy, ctx.is_head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;

    #[test]
    fn test_serves_bundle_file() {
        let resp = serve_asset(&RequestContext::get("/swagger-ui.css"), &HttpConfig::default());
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["Content-Type"], "text/css; charset=utf-8");
        assert_eq!(resp.headers()["Cache-Control"], "public, max-age=3600");
        assert!(resp.headers().contains_key("ETag"));
    }

    #[test]
    fn test_unknown_path() {
        let resp = serve_asset(&RequestContext::get("/test123file"), &HttpConfig::default());
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conditional_request() {
        let first = serve_asset(&RequestContext::get("/favicon-16x16.png"), &HttpConfig::default());
        let etag = first.headers()["ETag"].to_str().unwrap().to_string();

        let mut ctx = RequestContext::get("/favicon-16x16.png");
        ctx.if_none_match = Some(etag.clone());
        let second = serve_asset(&ctx, &HttpConfig::default());
        assert_eq!(second.status(), StatusCode::NOT_MODIFIED);
        assert_eq!(second.headers()["ETag"], etag.as_str());
    }

    #[test]
    fn test_configured_max_age() {
        let config = HttpConfig {
            cache_max_age: 120,
            enable_cors: false,
        };
        let resp = serve_asset(&RequestContext::get("/swagger-ui-bundle.js"), &config);
        assert_eq!(resp.headers()["Cache-Control"], "public, max-age=120");
    }
}

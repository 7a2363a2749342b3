//! Embedded UI assets
//!
//! The Swagger UI bundle (scripts, styles, icons and the OAuth2 redirect
//! page) is compiled into the binary. With the `swagger-ui-dist` feature the
//! upstream distribution is embedded from `swagger-ui/node_modules`; without
//! it, the lightweight viewer in `assets/` is used, which exposes the same
//! file names and globals.

use crate::http::mime;
use rust_embed::Embed;
use std::borrow::Cow;

#[derive(Embed)]
#[cfg_attr(
    feature = "swagger-ui-dist",
    folder = "swagger-ui/node_modules/swagger-ui-dist/",
    exclude = "index.html",
    exclude = "swagger-initializer.js",
    exclude = "*.map",
    exclude = "package.json",
    exclude = "*.md"
)]
#[cfg_attr(not(feature = "swagger-ui-dist"), folder = "assets/")]
struct Assets;

/// One embedded file
#[derive(Debug, Clone)]
pub struct Asset {
    pub data: Cow<'static, [u8]>,
    pub content_type: &'static str,
}

/// Look up an asset by request path
///
/// The leading `/` is ignored. Paths with empty, `.` or `..` segments never
/// match.
pub fn lookup(path: &str) -> Option<Asset> {
    let relative = path.strip_prefix('/').unwrap_or(path);
    if relative
        .split('/')
        .any(|segment| segment.is_empty() || segment == "." || segment == "..")
    {
        return None;
    }

    Assets::get(relative).map(|file| Asset {
        data: file.data,
        content_type: mime::content_type_for(relative),
    })
}

/// Names of all embedded assets
pub fn names() -> impl Iterator<Item = Cow<'static, str>> {
    Assets::iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUNDLE_FILES: [&str; 6] = [
        "favicon-16x16.png",
        "favicon-32x32.png",
        "oauth2-redirect.html",
        "swagger-ui.css",
        "swagger-ui-bundle.js",
        "swagger-ui-standalone-preset.js",
    ];

    #[test]
    fn test_bundle_is_embedded() {
        let embedded: Vec<_> = names().collect();
        for name in BUNDLE_FILES {
            assert!(
                embedded.iter().any(|e| e == name),
                "{name} missing from embedded assets"
            );
        }
    }

    #[test]
    fn test_lookup_with_and_without_slash() {
        let css = lookup("/swagger-ui.css").unwrap();
        assert_eq!(css.content_type, "text/css; charset=utf-8");
        assert!(!css.data.is_empty());
        assert!(lookup("swagger-ui.css").is_some());
    }

    #[test]
    fn test_png_signature() {
        let icon = lookup("/favicon-32x32.png").unwrap();
        assert_eq!(icon.content_type, "image/png");
        assert!(icon.data.starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn test_rejects_odd_paths() {
        assert!(lookup("/").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("/../Cargo.toml").is_none());
        assert!(lookup("/./swagger-ui.css").is_none());
        assert!(lookup("//swagger-ui.css").is_none());
        assert!(lookup("/test123file").is_none());
    }

    #[cfg(feature = "swagger-ui-dist")]
    #[test]
    fn test_upstream_page_is_not_embedded() {
        assert!(lookup("/index.html").is_none());
        assert!(lookup("/swagger-initializer.js").is_none());
    }
}

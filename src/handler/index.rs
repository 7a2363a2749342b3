//! Index page module
//!
//! Renders the page that boots the UI bundle and points it at the
//! specification URL.

use crate::config::SpecSource;
use crate::handler::router::RequestContext;
use crate::http::response::build_html_response;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

const INDEX_TEMPLATE: &str = include_str!("index.html");
const SPEC_URL_PLACEHOLDER: &str = "{{spec_url}}";

/// Serve the rendered index page
pub fn serve_index(ctx: &RequestContext, source: &SpecSource) -> Response<Full<Bytes>> {
    build_html_response(render_index(source.spec_url()), ctx.is_head)
}

/// Render the index page with `spec_url` as the bundle's `url` option
pub fn render_index(spec_url: &str) -> String {
    INDEX_TEMPLATE.replace(SPEC_URL_PLACEHOLDER, &script_string_literal(spec_url))
}

/// Quote `value` as a JavaScript string literal safe inside a `<script>` element
///
/// JSON string syntax covers quotes, backslashes and control characters.
/// Markup-significant characters and the JS line separators are escaped on
/// top, so the value can close neither the string nor the element.
fn script_string_literal(value: &str) -> String {
    let quoted = serde_json::Value::String(value.to_owned()).to_string();
    let mut escaped = String::with_capacity(quoted.len());
    for c in quoted.chars() {
        match c {
            '<' => escaped.push_str("\\u003c"),
            '>' => escaped.push_str("\\u003e"),
            '&' => escaped.push_str("\\u0026"),
            '\'' => escaped.push_str("\\u0027"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_has_placeholder() {
        assert_eq!(INDEX_TEMPLATE.matches(SPEC_URL_PLACEHOLDER).count(), 1);
    }

    #[test]
    fn test_render_plain_url() {
        let html = render_index("test_url_is_test");
        assert!(html.contains("<title>Swagger UI</title>"));
        assert!(html.contains("url: \"test_url_is_test\","));
        assert!(!html.contains(SPEC_URL_PLACEHOLDER));
    }

    #[test]
    fn test_render_local_url() {
        let html = render_index("./swagger.json");
        assert!(html.contains("url: \"./swagger.json\","));
    }

    #[test]
    fn test_render_empty_url() {
        let html = render_index("");
        assert!(html.contains("url: \"\","));
    }

    #[test]
    fn test_script_breakout_is_escaped() {
        let html = render_index("\"</script><script>alert(1)</script>");
        assert!(!html.contains("</script><script>alert(1)"));
        assert!(html.contains(r#"url: "\"\u003c/script\u003e\u003cscript\u003ealert(1)"#));
    }

    #[test]
    fn test_script_literal_escapes() {
        assert_eq!(script_string_literal("a'b&c"), r#""a\u0027b\u0026c""#);
        assert_eq!(script_string_literal("line\u{2028}sep"), r#""line\u2028sep""#);
        assert_eq!(script_string_literal("back\\slash"), r#""back\\slash""#);
        assert_eq!(
            script_string_literal("https://example.com/api?x=1"),
            "\"https://example.com/api?x=1\""
        );
    }
}

//! MIME type detection module
//!
//! Returns the Content-Type for the file types found in the UI bundle.

use std::path::Path;

/// Content type of the specification endpoint
pub const JSON: &str = "application/json";

/// Get MIME Content-Type based on file extension
///
/// # Examples
/// ```
/// use swagger_ui_handler::http::mime::get_content_type;
/// assert_eq!(get_content_type(Some("html")), "text/html; charset=utf-8");
/// assert_eq!(get_content_type(Some("js")), "application/javascript");
/// assert_eq!(get_content_type(None), "application/octet-stream");
/// ```
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    let Some(extension) = extension else {
        return "application/octet-stream";
    };

    match extension.to_ascii_lowercase().as_str() {
        // Text
        "html" | "htm" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "txt" | "md" => "text/plain; charset=utf-8",

        // Scripts and data
        "js" | "mjs" => "application/javascript",
        "map" | "json" => JSON,
        "yml" | "yaml" => "application/yaml",

        // Images
        "png" => "image/png",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "gif" => "image/gif",

        // Fonts
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",

        _ => "application/octet-stream",
    }
}

/// Get MIME Content-Type for a path
pub fn content_type_for(path: &str) -> &'static str {
    get_content_type(Path::new(path).extension().and_then(|e| e.to_str()))
}

//! Specification endpoint module
//!
//! Reads the configured file on every request and serves it as JSON,
//! converting YAML documents first.

use crate::config::{SpecFormat, SpecSource};
use crate::error::{Error, Result};
use crate::handler::router::RequestContext;
use crate::http::response::{build_error_response, build_json_response};
use crate::logger;
use crate::spec;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

/// Serve `/swagger.json`
pub async fn serve_spec(ctx: &RequestContext, source: &SpecSource) -> Response<Full<Bytes>> {
    match load_spec(source).await {
        Ok(json) => build_json_response(json, ctx.is_head),
        Err(err) => {
            match &err {
                Error::Io { .. } => logger::log_warning(&err.to_string()),
                Error::Conversion(_) => {
                    logger::log_error(&format!("Failed to convert swagger file: {err}"));
                }
                Error::NotFound | Error::Config(_) => {}
            }
            build_error_response(&err)
        }
    }
}

/// Load the specification document as JSON bytes
///
/// Only a local file source has a document to serve; with a remote URL the
/// client fetches the document itself.
pub async fn load_spec(source: &SpecSource) -> Result<Vec<u8>> {
    let SpecSource::LocalFile { path, format } = source else {
        return Err(Error::NotFound);
    };

    let data = fs::read(path).await.map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;

    match format {
        SpecFormat::Json => Ok(data),
        SpecFormat::Yaml => spec::yaml_to_json(&data),
    }
}

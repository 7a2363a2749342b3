// Configuration module entry point
// Loads settings and resolves them into an immutable handler configuration

mod types;

use crate::error::{Error, Result};
use crate::logger;
use crate::spec;

// Re-export public types
pub use types::{
    HandlerConfig, HttpConfig, LoggingConfig, Settings, SpecConfig, SpecFormat, SpecSource,
    LOCAL_SPEC_URL,
};

impl Settings {
    /// Load settings from specified file path (extension optional)
    ///
    /// A missing file is not an error; environment variables prefixed with
    /// `SWAGGER_UI` (e.g. `SWAGGER_UI_SPEC__FILE`) override file values.
    pub fn load_from(config_path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("SWAGGER_UI")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("http.cache_max_age", 3600)?
            .set_default("http.enable_cors", false)?
            .set_default("logging.access_log", false)?
            .set_default("logging.access_log_format", "common")?
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Resolve the specification source
    ///
    /// `spec.url` and `spec.file` are mutually exclusive; with neither set the
    /// file is discovered from `spec.search_dir`, or from the default roots.
    pub fn resolve_source(&self) -> Result<SpecSource> {
        match (&self.spec.file, &self.spec.url) {
            (Some(_), Some(_)) => Err(Error::Config(
                "spec.file and spec.url are mutually exclusive".to_string(),
            )),
            (Some(file), None) => Ok(SpecSource::local_file(file)),
            (None, Some(url)) => Ok(SpecSource::remote_url(url.as_str())),
            (None, None) => {
                let found = match &self.spec.search_dir {
                    Some(dir) => spec::locate(dir),
                    None => spec::locate_default(),
                };
                Ok(discovered_source(found))
            }
        }
    }

    /// Build the handler configuration
    pub fn to_handler_config(&self) -> Result<HandlerConfig> {
        Ok(HandlerConfig {
            source: self.resolve_source()?,
            http: self.http.clone(),
            logging: self.logging.clone(),
        })
    }
}

/// Turn a discovery result into a source, logging the outcome
pub fn discovered_source(found: Result<std::path::PathBuf>) -> SpecSource {
    match found {
        Ok(path) => {
            logger::log_spec_discovered(&path);
            SpecSource::local_file(path)
        }
        Err(_) => {
            logger::log_spec_not_discovered();
            SpecSource::None
        }
    }
}

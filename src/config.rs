use crate::error::Result;
use crate::utils::constants::{ARTICLE_EXTENSION, ENV_PREFIX};
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use validator::Validate;

/// Settings for a directory run.
///
/// Sources, lowest precedence first: built-in defaults, an optional settings
/// file (format from its extension), `COORD_EXTRACTOR_*` environment
/// variables, then command-line flags via [`ScanSettings::with_overrides`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ScanSettings {
    #[validate(length(min = 1))]
    pub file_extension: String,

    #[validate(range(min = 1, max = 1024))]
    pub max_workers: usize,

    pub require_document_id: bool,

    pub extract_bounding_boxes: bool,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            file_extension: ARTICLE_EXTENSION.to_string(),
            max_workers: num_cpus::get(),
            require_document_id: false,
            extract_bounding_boxes: false,
        }
    }
}

impl ScanSettings {
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = config_file {
            debug!("Loading settings from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        Self::from_config(builder.build()?)
    }

    pub fn from_config(config: Config) -> Result<Self> {
        let settings: ScanSettings = config.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Apply command-line values, then re-validate.
    pub fn with_overrides(
        mut self,
        max_workers: Option<usize>,
        file_extension: Option<String>,
    ) -> Result<Self> {
        if let Some(workers) = max_workers {
            self.max_workers = workers;
        }
        if let Some(extension) = file_extension {
            self.file_extension = extension.trim_start_matches('.').to_string();
        }
        self.validate()?;
        Ok(self)
    }
}

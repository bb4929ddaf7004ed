use std::path::{Path, PathBuf};

use common::{DEFAULT_ENDPOINT, ModelKind};
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, trace};
use validator::Validate;

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_NAME: &str = "stockcast";
/// Prefix of environment overrides, e.g. `STOCKCAST_ENDPOINT`
pub const ENV_PREFIX: &str = "STOCKCAST";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

/// Client settings after merging defaults, config file and environment.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClientConfig {
    /// Prediction endpoint the form is posted to
    #[validate(url)]
    pub endpoint: String,

    /// Model used when none is given on the command line
    pub model: ModelKind,

    /// Where the chart HTML is written
    pub output: PathBuf,
}

impl ClientConfig {
    /// Merge defaults, the config file and `STOCKCAST_*` variables.
    ///
    /// An explicit `path` must exist; the default `stockcast.toml` is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        trace!("Loading client configuration (explicit file: {:?})", path);

        let file = match path {
            Some(path) => File::from(path.to_path_buf()).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let config: ClientConfig = Config::builder()
            .set_default("endpoint", DEFAULT_ENDPOINT)?
            .set_default("model", ModelKind::default().as_str())?
            .set_default("output", "prediction.html")?
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        debug!("Client configuration: {:?}", config);
        Ok(config)
    }

    /// Command line flags win over everything else.
    pub fn with_overrides(
        mut self,
        endpoint: Option<String>,
        model: Option<ModelKind>,
        output: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        if let Some(model) = model {
            self.model = model;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self.validate()?;
        Ok(self)
    }
}

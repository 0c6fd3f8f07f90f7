//! Configuration management for Folio.
//!
//! Configuration is loaded with the following precedence (highest to lowest):
//! 1. Explicit overrides (command-line flags)
//! 2. Environment variables prefixed `FOLIO_` (e.g. `FOLIO_BACKEND__MODEL`)
//! 3. `./folio.toml` in the current directory
//! 4. `~/.config/folio/folio.toml`
//! 5. Bundled defaults (include_str! from folio.toml)

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use derive_getters::Getters;
use folio_error::{ConfigError, FolioResult};
use folio_writer::WriterConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../folio.toml");

/// Generation backend settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct BackendConfig {
    /// Full URL of the generate endpoint
    endpoint: String,
    /// Model identifier
    model: String,
}

/// Input and output locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PathsConfig {
    /// Synopsis text file
    synopsis: PathBuf,
    /// Outline file
    outline: PathBuf,
    /// Artifact the book is accumulated in
    artifact: PathBuf,
}

/// Run options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RunConfig {
    /// Request a summary of the finished book
    summarize: bool,
}

/// Top-level Folio configuration.
///
/// # Example
///
/// ```no_run
/// use folio::FolioConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = FolioConfig::load()?;
/// println!("Writing with {}", config.backend().model());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct FolioConfig {
    /// Backend settings
    backend: BackendConfig,
    /// File locations
    paths: PathsConfig,
    /// Run options
    run: RunConfig,
}

/// Values that replace loaded configuration, typically from CLI flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Generate endpoint
    pub endpoint: Option<String>,
    /// Model identifier
    pub model: Option<String>,
    /// Synopsis file
    pub synopsis: Option<PathBuf>,
    /// Outline file
    pub outline: Option<PathBuf>,
    /// Artifact file
    pub artifact: Option<PathBuf>,
    /// Request a final summary
    pub summarize: Option<bool>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig {
                endpoint: "http://localhost:11434/api/generate".to_string(),
                model: "llama3.3".to_string(),
            },
            paths: PathsConfig {
                synopsis: PathBuf::from("input.txt"),
                outline: PathBuf::from("outline.txt"),
                artifact: PathBuf::from("book.txt"),
            },
            run: RunConfig { summarize: false },
        }
    }
}

impl FolioConfig {
    /// Load configuration from the bundled defaults, the user's home
    /// directory, the current directory, and `FOLIO_` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is malformed or a value has the
    /// wrong type.
    #[instrument(name = "folio_config_load")]
    pub fn load() -> FolioResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled");

        let mut builder = Self::defaults();

        if let Some(config_dir) = dirs::home_dir() {
            let home_config = config_dir.join(".config/folio/folio.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("folio").required(false))
            .add_source(
                Environment::with_prefix("FOLIO")
                    .prefix_separator("_")
                    .separator("__"),
            );

        Self::finish(builder)
    }

    /// Load configuration from a single file layered over the bundled
    /// defaults.
    ///
    /// Keys missing from the file keep their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(name = "folio_config_from_file", skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> FolioResult<Self> {
        let builder = Self::defaults().add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// Apply explicit overrides on top of the loaded values.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(endpoint) = overrides.endpoint {
            self.backend.endpoint = endpoint;
        }
        if let Some(model) = overrides.model {
            self.backend.model = model;
        }
        if let Some(synopsis) = overrides.synopsis {
            self.paths.synopsis = synopsis;
        }
        if let Some(outline) = overrides.outline {
            self.paths.outline = outline;
        }
        if let Some(artifact) = overrides.artifact {
            self.paths.artifact = artifact;
        }
        if let Some(summarize) = overrides.summarize {
            self.run.summarize = summarize;
        }
        self
    }

    /// Settings for the book writer.
    pub fn writer_config(&self) -> WriterConfig {
        WriterConfig::new(self.paths.artifact.clone(), self.backend.model.clone())
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> FolioResult<Self> {
        let config = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
        Ok(config)
    }
}

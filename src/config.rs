use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::files::DEFAULT_RECIPE_EXTENSION;
use crate::render::{OutputFormat, DEFAULT_WRAP_WIDTH};

/// Tool settings shared by every command
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// Output format used when no `--output-format` flag is given
    #[serde(default)]
    pub output_format: OutputFormat,
    /// Maximum line width of wrapped step text
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
    /// File extension of recipe files when listing a directory
    #[serde(default = "default_recipe_extension")]
    pub recipe_extension: String,
    /// Aisle config to use instead of searching for one
    pub aisle: Option<PathBuf>,
    /// Inflection config to use instead of searching for one
    pub inflection: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            wrap_width: default_wrap_width(),
            recipe_extension: default_recipe_extension(),
            aisle: None,
            inflection: None,
        }
    }
}

fn default_wrap_width() -> usize {
    DEFAULT_WRAP_WIDTH
}

fn default_recipe_extension() -> String {
    DEFAULT_RECIPE_EXTENSION.to_string()
}

impl Settings {
    /// Load settings from file and environment variables
    ///
    /// Settings are loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COOK__ prefix
    /// 2. config/cook.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: COOK__WRAP_WIDTH
    pub fn load() -> Result<Self, ConfigError> {
        load_settings(Environment::with_prefix("COOK"))
    }
}

fn load_settings(environment: Environment) -> Result<Settings, ConfigError> {
    let settings = Config::builder()
        // Optional settings file (can be missing)
        .add_source(File::with_name("config/cook").required(false))
        .add_source(environment.separator("__").try_parsing(true))
        .build()?;

    settings.try_deserialize()
}

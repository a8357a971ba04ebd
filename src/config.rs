// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub input: InputConfig,
    pub language: LanguageConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    pub pdf_path: PathBuf,
    /// Zero disables the size check.
    #[serde(default)]
    pub max_file_size_mb: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LanguageConfig {
    pub model: String,
    pub model_dir: PathBuf,
    pub stopwords_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub raw_text_path: Option<PathBuf>,
    #[serde(default)]
    pub lemmas_path: Option<PathBuf>,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub pretty: bool,
    #[serde(default = "default_progress")]
    pub progress: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

fn default_progress() -> bool {
    true
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new("config/default.toml")).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("KEYPREP")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            input: InputConfig {
                pdf_path: PathBuf::from("ica2021.pdf"),
                max_file_size_mb: 100,
            },
            language: LanguageConfig {
                model: "sv_core_news_sm".to_string(),
                model_dir: PathBuf::from("models"),
                stopwords_path: PathBuf::from("stoppord.csv"),
            },
            output: OutputConfig {
                raw_text_path: None,
                lemmas_path: None,
                format: OutputFormat::Json,
                pretty: false,
                progress: true,
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.language.model.trim().is_empty() {
            return Err(PipelineError::Config(
                "language.model must not be empty".to_string(),
            ));
        }

        if self.language.stopwords_path.as_os_str().is_empty() {
            return Err(PipelineError::Config(
                "language.stopwords_path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

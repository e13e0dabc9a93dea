use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub model: ModelSettings,
    #[serde(default)]
    pub templates: TemplateSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelSettings {
    #[serde(default = "default_artifact_path")]
    pub artifact_path: String,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            artifact_path: default_artifact_path(),
        }
    }
}

fn default_artifact_path() -> String {
    "model/artifact.json".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplateSettings {
    #[serde(default = "default_templates_dir")]
    pub dir: String,
}

impl Default for TemplateSettings {
    fn default() -> Self {
        Self {
            dir: default_templates_dir(),
        }
    }
}

fn default_templates_dir() -> String {
    "templates".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}

impl LoggingSettings {
    /// Resolve the effective log level and format
    ///
    /// Environment variables win over the config file so operators can
    /// adjust verbosity without touching deployed configuration.
    pub fn resolve(&self, env_level: Option<String>, env_format: Option<String>) -> (String, String) {
        (
            env_level.unwrap_or_else(|| self.level.clone()),
            env_format.unwrap_or_else(|| self.format.clone()),
        )
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SCORECAST__)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // e.g., SCORECAST__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SCORECAST")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_env_overrides(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SCORECAST")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply bare-name environment overrides
///
/// `MODEL_ARTIFACT` is honored alongside `SCORECAST__MODEL__ARTIFACT_PATH`
/// so deploy tooling can point at an artifact without knowing the prefix
/// convention.
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let artifact_path = env::var("MODEL_ARTIFACT")
        .or_else(|_| env::var("SCORECAST__MODEL__ARTIFACT_PATH"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(path) = artifact_path {
        builder = builder.set_override("model.artifact_path", path)?;
    }

    builder.build()
}

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub gemini: GeminiSettings,
    #[serde(default)]
    pub static_files: StaticFilesSettings,
    #[serde(default = "default_run_mode")]
    pub run_mode: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesSettings {
    #[serde(default = "default_static_dir")]
    pub dir: String,
}

impl Default for StaticFilesSettings {
    fn default() -> Self {
        Self {
            dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    3001
}
fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}
fn default_static_dir() -> String {
    "frontend/dist".to_string()
}
fn default_run_mode() -> String {
    "development".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration files (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with EXAM__)
    /// 4. Direct operational variables: GEMINI_API_KEY, GEMINI_MODEL, PORT, RUN_MODE
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g. EXAM__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("EXAM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_env_overrides(settings)?;

        settings.try_deserialize()
    }

    /// True when the service should serve the pre-built UI bundle
    pub fn is_production(&self) -> bool {
        self.run_mode.eq_ignore_ascii_case("production")
    }
}

/// Apply the short environment variable names used in deployment
fn apply_env_overrides(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let mut builder = Config::builder().add_source(settings);

    if let Ok(api_key) = env::var("GEMINI_API_KEY") {
        if !api_key.is_empty() {
            builder = builder.set_override("gemini.api_key", api_key)?;
        }
    }
    if let Ok(model) = env::var("GEMINI_MODEL") {
        builder = builder.set_override("gemini.model", model)?;
    }
    if let Ok(port) = env::var("PORT") {
        builder = builder.set_override("server.port", port)?;
    }
    if let Ok(run_mode) = env::var("RUN_MODE") {
        builder = builder.set_override("run_mode", run_mode)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_settings() {
        let server = ServerSettings::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 3001);
        assert!(server.workers.is_none());
    }

    #[test]
    fn test_default_gemini_settings() {
        let gemini = GeminiSettings::default();
        assert!(gemini.api_key.is_none());
        assert_eq!(gemini.model, "gemini-1.5-flash");
    }

    #[test]
    fn test_is_production() {
        let mut settings = Settings {
            server: ServerSettings::default(),
            gemini: GeminiSettings::default(),
            static_files: StaticFilesSettings::default(),
            run_mode: default_run_mode(),
        };
        assert!(!settings.is_production());

        settings.run_mode = "Production".to_string();
        assert!(settings.is_production());
    }
}

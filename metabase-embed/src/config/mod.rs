pub mod secrets;

use std::path::Path;

use garde::Validate;
use serde::Deserialize;

use crate::options::DisplayOptions;

pub use secrets::{resolve_placeholders, DefaultSecretResolver, SecretResolver};

pub const ENV_SITE_URL: &str = "METABASE_SITE_URL";
pub const ENV_SECRET_KEY: &str = "METABASE_SECRET_KEY";
pub const ENV_BORDERED: &str = "METABASE_EMBED_BORDERED";
pub const ENV_TITLED: &str = "METABASE_EMBED_TITLED";
pub const ENV_THEME: &str = "METABASE_EMBED_THEME";
pub const ENV_WIDTH: &str = "METABASE_EMBED_WIDTH";
pub const ENV_HEIGHT: &str = "METABASE_EMBED_HEIGHT";

/// A single failed constraint from settings validation.
#[derive(Debug, Clone)]
pub struct ConfigValidationDetail {
    pub key: String,
    pub message: String,
}

/// Why an [`EmbedConfig`] could not be produced.
#[derive(Debug)]
pub enum ConfigError {
    /// Env var or `${...}` reference with no value.
    NotFound(String),
    TypeMismatch { key: String, expected: &'static str },
    /// Unreadable file, bad YAML, or an unclosed placeholder.
    Load(String),
    /// `garde` rejected `site_url` or `secret_key`.
    Validation(Vec<ConfigValidationDetail>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound(key) => write!(f, "Config key not found: {key}"),
            ConfigError::TypeMismatch { key, expected } => {
                write!(f, "Config type mismatch for '{key}': expected {expected}")
            }
            ConfigError::Load(msg) => write!(f, "Config load error: {msg}"),
            ConfigError::Validation(details) => {
                write!(f, "Config validation errors:")?;
                for detail in details {
                    write!(f, "\n  - {}: {}", detail.key, detail.message)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for one Metabase installation.
///
/// Built once and shared. Display settings here are only defaults: every
/// URL or iframe call takes its own [`DisplayOptions`], typically derived
/// from [`EmbedConfig::display`].
#[derive(Clone)]
pub struct EmbedConfig {
    site_url: String,
    secret: Vec<u8>,
    display: DisplayOptions,
}

impl std::fmt::Debug for EmbedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbedConfig")
            .field("site_url", &self.site_url)
            .field("secret", &"<redacted>")
            .field("display", &self.display)
            .finish()
    }
}

impl EmbedConfig {
    /// Create a config with default display settings. Trailing `/` on
    /// `site_url` is dropped.
    pub fn new(site_url: impl Into<String>, secret: impl Into<Vec<u8>>) -> Self {
        let site_url = site_url.into();
        Self {
            site_url: site_url.trim_end_matches('/').to_string(),
            secret: secret.into(),
            display: DisplayOptions::default(),
        }
    }

    pub fn with_display(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }

    pub fn with_border(mut self, border: bool) -> Self {
        self.display.border = border;
        self
    }

    pub fn with_title(mut self, title: bool) -> Self {
        self.display.title = title;
        self
    }

    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.display = self.display.with_theme(theme);
        self
    }

    pub fn with_size(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.display = self.display.with_size(width, height);
        self
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    pub(crate) fn secret(&self) -> &[u8] {
        &self.secret
    }

    /// Default display settings for this installation.
    pub fn display(&self) -> &DisplayOptions {
        &self.display
    }

    /// Load from YAML, resolving secret placeholders from the environment
    /// and files.
    ///
    /// ```yaml
    /// metabase:
    ///   site_url: https://bi.example.com
    ///   secret_key: ${env:METABASE_SECRET_KEY}
    ///   display:
    ///     bordered: true
    ///     titled: false
    ///     theme: night
    ///     width: "100%"
    ///     height: "800"
    /// ```
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Self::from_yaml_str_with(content, &DefaultSecretResolver)
    }

    pub fn from_yaml_str_with(
        content: &str,
        resolver: &dyn SecretResolver,
    ) -> Result<Self, ConfigError> {
        let doc: YamlDocument =
            serde_yaml::from_str(content).map_err(|e| ConfigError::Load(e.to_string()))?;
        let mut settings = doc.metabase;
        settings.site_url = resolve_placeholders(&settings.site_url, resolver)?;
        settings.secret_key = resolve_placeholders(&settings.secret_key, resolver)?;
        settings.into_config()
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Load(format!("{}: {e}", path.display())))?;
        Self::from_yaml_str(&content)
    }

    /// Load from `METABASE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment. Blank values
    /// count as unset. Display values and the site URL are trimmed; the secret
    /// is used byte for byte, since it is the HMAC key.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let site_url = get(ENV_SITE_URL).ok_or_else(|| ConfigError::NotFound(ENV_SITE_URL.into()))?;
        let secret_key = lookup(ENV_SECRET_KEY)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::NotFound(ENV_SECRET_KEY.into()))?;

        let mut display = DisplayOptions::default();
        if let Some(raw) = get(ENV_BORDERED) {
            display.border = parse_bool(ENV_BORDERED, &raw)?;
        }
        if let Some(raw) = get(ENV_TITLED) {
            display.title = parse_bool(ENV_TITLED, &raw)?;
        }
        display.theme = get(ENV_THEME);
        if let Some(width) = get(ENV_WIDTH) {
            display.width = width;
        }
        if let Some(height) = get(ENV_HEIGHT) {
            display.height = height;
        }

        EmbedSettings {
            site_url,
            secret_key,
            display,
        }
        .into_config()
    }
}

#[derive(Deserialize)]
struct YamlDocument {
    metabase: EmbedSettings,
}

#[derive(Debug, Deserialize, Validate)]
struct EmbedSettings {
    #[garde(url)]
    site_url: String,

    #[garde(length(min = 1))]
    secret_key: String,

    #[serde(default)]
    #[garde(skip)]
    display: DisplayOptions,
}

impl EmbedSettings {
    fn into_config(self) -> Result<EmbedConfig, ConfigError> {
        self.validate().map_err(|report| {
            let details = report
                .iter()
                .map(|(path, error)| ConfigValidationDetail {
                    key: path.to_string(),
                    message: error.message().to_string(),
                })
                .collect();
            ConfigError::Validation(details)
        })?;

        // a blank theme in YAML means no theme
        let mut display = self.display;
        let theme = display.theme.take().unwrap_or_default();
        let display = display.with_theme(theme);
        Ok(EmbedConfig::new(self.site_url, self.secret_key.into_bytes()).with_display(display))
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::TypeMismatch {
            key: key.to_string(),
            expected: "bool",
        }),
    }
}

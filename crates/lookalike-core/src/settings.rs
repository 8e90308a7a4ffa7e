// Lookalike Settings Module
// User defaults for the filter, loaded from a TOML file

#![cfg(feature = "settings")]

use std::path::{Path, PathBuf};

use crate::transform::{
    AnomalyPolicy, FilterConfig, CALIFORNIA_MAX_LENGTH, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH,
};

/// Default output file name
pub const DEFAULT_OUTPUT_PATH: &str = "output.txt";

/// Settings that provide defaults for the command line
///
/// These settings are loaded from a TOML file (default: ~/.config/lookalike/settings.toml).
/// Command line flags take precedence over every value here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Use the extended substitution table
    include_weird: bool,

    /// Use the California plate length limit
    california: bool,

    min_length: usize,

    /// Explicit maximum length (overrides the california default)
    max_length: Option<usize>,

    anomaly_policy: AnomalyPolicy,

    /// Output file path
    output_path: PathBuf,

    /// Where the settings were loaded from, reported in the debug log
    source_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct SettingsToml {
    #[serde(default)]
    filter: Option<FilterSettings>,

    #[serde(default)]
    anomalies: Option<AnomalySettings>,

    #[serde(default)]
    output: Option<OutputSettings>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct FilterSettings {
    #[serde(default)]
    include_weird: Option<toml::Value>,

    #[serde(default)]
    california: Option<toml::Value>,

    #[serde(default)]
    min_length: Option<usize>,

    #[serde(default)]
    max_length: Option<usize>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct AnomalySettings {
    #[serde(default)]
    policy: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct OutputSettings {
    #[serde(default)]
    path: Option<PathBuf>,
}

impl Settings {
    /// Create settings with built-in defaults
    pub fn new() -> Self {
        Self {
            include_weird: false,
            california: false,
            min_length: DEFAULT_MIN_LENGTH,
            max_length: None,
            anomaly_policy: AnomalyPolicy::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            source_path: None,
        }
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        Ok(settings)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        // Parse filter section
        if let Some(filter) = toml_settings.filter {
            if let Some(value) = filter.include_weird {
                settings.include_weird = parse_bool_value(&value)?;
            }
            if let Some(value) = filter.california {
                settings.california = parse_bool_value(&value)?;
            }
            if let Some(min_length) = filter.min_length {
                settings.min_length = min_length;
            }
            settings.max_length = filter.max_length;
        }

        // Parse anomalies section
        if let Some(policy) = toml_settings.anomalies.and_then(|a| a.policy) {
            settings.anomaly_policy = policy.parse().map_err(SettingsError::InvalidValue)?;
        }

        // Parse output section
        if let Some(path) = toml_settings.output.and_then(|o| o.path) {
            settings.output_path = path;
        }

        if settings.min_length > settings.max_length() {
            return Err(SettingsError::InvalidValue(format!(
                "min_length {} is greater than max_length {}",
                settings.min_length,
                settings.max_length()
            )));
        }

        Ok(settings)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lookalike").join("settings.toml"))
    }

    /// Load from default location (~/.config/lookalike/settings.toml)
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        // Return default settings if file doesn't exist
        Ok(Self::new())
    }

    pub fn include_weird(&self) -> bool {
        self.include_weird
    }

    pub fn california(&self) -> bool {
        self.california
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Effective maximum length: explicit value, else the california or default limit
    pub fn max_length(&self) -> usize {
        self.max_length.unwrap_or(if self.california {
            CALIFORNIA_MAX_LENGTH
        } else {
            DEFAULT_MAX_LENGTH
        })
    }

    pub fn anomaly_policy(&self) -> AnomalyPolicy {
        self.anomaly_policy
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Path of the file these settings were loaded from
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn set_include_weird(&mut self, value: bool) {
        self.include_weird = value;
    }

    pub fn set_california(&mut self, value: bool) {
        self.california = value;
    }

    pub fn set_min_length(&mut self, value: usize) {
        self.min_length = value;
    }

    pub fn set_max_length(&mut self, value: usize) {
        self.max_length = Some(value);
    }

    pub fn set_anomaly_policy(&mut self, policy: AnomalyPolicy) {
        self.anomaly_policy = policy;
    }

    pub fn set_output_path(&mut self, path: impl Into<PathBuf>) {
        self.output_path = path.into();
    }

    /// Resolve into the configuration used by the transliterator
    pub fn to_filter_config(&self) -> FilterConfig {
        FilterConfig {
            include_weird: self.include_weird,
            min_length: self.min_length,
            max_length: self.max_length(),
            anomaly_policy: self.anomaly_policy,
        }
    }
}

/// Parse a TOML value as a boolean
fn parse_bool_value(value: &toml::Value) -> Result<bool, SettingsError> {
    match value {
        toml::Value::Boolean(b) => Ok(*b),
        toml::Value::Integer(1) => Ok(true),
        toml::Value::Integer(0) => Ok(false),
        toml::Value::String(s) => match s.to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(SettingsError::InvalidValue(format!(
                "Cannot convert '{}' to boolean",
                s
            ))),
        },
        _ => Err(SettingsError::InvalidValue(format!(
            "Cannot convert {:?} to boolean",
            value
        ))),
    }
}

/// Create default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# Lookalike Settings
# Defaults for the lookalike command; flags on the command line win.
# Place this file at: ~/.config/lookalike/settings.toml

[filter]
# Also use loose look-alikes such as ч -> 4 and д -> D
include_weird = false

# Limit words to 7 letters (California plates)
california = false

# Inclusive word length bounds, in letters
min_length = 3
# max_length = 8

[anomalies]
# Words with characters outside the Cyrillic alphabet:
# "warn" logs them, "ignore" skips them quietly, "fail" stops the run
policy = "warn"

[output]
path = "output.txt"
"#
}

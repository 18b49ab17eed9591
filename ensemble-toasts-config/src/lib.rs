use std::{fmt, fs, io, path::Path, time::Duration};

/// Environment variable the host reads the config path from.
pub const CONFIG_PATH_ENV: &str = "ENSEMBLE_TOASTS_CONFIG";

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ToastsConfig {
    /// Time in milliseconds a toast stays on screen unless dismissed earlier.
    #[serde(default = "default_visible_duration_ms")]
    pub visible_duration_ms: u64,
    /// Pause in milliseconds between one toast leaving and the next appearing.
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,
    /// Session storage key holding the stashed message text.
    #[serde(default = "default_message_key")]
    pub message_key: String,
    /// Session storage key holding the stashed severity.
    #[serde(default = "default_severity_key")]
    pub severity_key: String,
    /// Id of the fixed element all toasts are appended to.
    #[serde(default = "default_container_id")]
    pub container_id: String,
    #[serde(default = "default_container_class")]
    pub container_class: String,
    #[serde(default = "default_z_index")]
    pub z_index: u32,
}

impl ToastsConfig {
    pub fn visible_duration(&self) -> Duration {
        Duration::from_millis(self.visible_duration_ms)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    /// Load the config from a JSON file.
    ///
    /// A missing file yields the defaults; fields absent from the file fall
    /// back to their defaults individually.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(err) => return Err(ConfigError::Io(err.to_string())),
        };

        let config: Self =
            serde_json::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.message_key.is_empty() || self.severity_key.is_empty() {
            return Err(ConfigError::Invalid("storage keys must not be empty"));
        }
        if self.message_key == self.severity_key {
            return Err(ConfigError::Invalid("storage keys must differ"));
        }
        Ok(())
    }
}

impl Default for ToastsConfig {
    fn default() -> Self {
        Self {
            visible_duration_ms: default_visible_duration_ms(),
            cooldown_ms: default_cooldown_ms(),
            message_key: default_message_key(),
            severity_key: default_severity_key(),
            container_id: default_container_id(),
            container_class: default_container_class(),
            z_index: default_z_index(),
        }
    }
}

/// Errors produced while loading a [`ToastsConfig`]
#[derive(Debug)]
pub enum ConfigError {
    /// The file exists but could not be read
    Io(String),
    /// The file is not valid JSON for this config
    Parse(String),
    /// The values parsed but cannot be used together
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error reading config: {}", e),
            ConfigError::Parse(e) => write!(f, "Config parse error: {}", e),
            ConfigError::Invalid(why) => write!(f, "Invalid config: {}", why),
        }
    }
}

impl std::error::Error for ConfigError {}

// Default value helpers for serde
const fn default_visible_duration_ms() -> u64 {
    3800
}

const fn default_cooldown_ms() -> u64 {
    200
}

fn default_message_key() -> String {
    "toast:message".to_string()
}

fn default_severity_key() -> String {
    "toast:type".to_string()
}

fn default_container_id() -> String {
    "globalToastContainer".to_string()
}

fn default_container_class() -> String {
    "toast-container position-fixed bottom-0 end-0 p-3".to_string()
}

const fn default_z_index() -> u32 {
    1055
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ToastsConfig::default();

        assert_eq!(config.visible_duration_ms, 3800);
        assert_eq!(config.cooldown_ms, 200);
        assert_eq!(config.message_key, "toast:message");
        assert_eq!(config.severity_key, "toast:type");
        assert_eq!(config.container_id, "globalToastContainer");
        assert_eq!(config.z_index, 1055);
        assert_eq!(config.visible_duration(), Duration::from_millis(3800));
        assert_eq!(config.cooldown(), Duration::from_millis(200));
    }

    #[test]
    fn test_config_deserialization_with_defaults() {
        let partial = r#"{ "cooldown_ms": 250 }"#;

        let config: ToastsConfig = serde_json::from_str(partial).unwrap();

        assert_eq!(config.cooldown_ms, 250);
        assert_eq!(config.visible_duration_ms, 3800);
        assert_eq!(config.message_key, "toast:message");
    }

    #[test]
    fn test_config_serialization() {
        let json = serde_json::to_string(&ToastsConfig::default()).unwrap();

        assert!(json.contains("visible_duration_ms"));
        assert!(json.contains("severity_key"));
        assert!(json.contains("container_class"));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ToastsConfig::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, ToastsConfig::default());
    }

    #[test]
    fn test_load_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toasts.json");
        fs::write(
            &path,
            r#"{
                "visible_duration_ms": 4000,
                "cooldown_ms": 150,
                "message_key": "flash:text",
                "severity_key": "flash:kind",
                "container_id": "flash",
                "container_class": "flash-area",
                "z_index": 10
            }"#,
        )
        .unwrap();

        let config = ToastsConfig::load(&path).unwrap();
        assert_eq!(config.visible_duration_ms, 4000);
        assert_eq!(config.cooldown_ms, 150);
        assert_eq!(config.message_key, "flash:text");
        assert_eq!(config.severity_key, "flash:kind");
        assert_eq!(config.container_id, "flash");
        assert_eq!(config.z_index, 10);
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toasts.json");
        fs::write(&path, "{ not json").unwrap();

        let err = ToastsConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_rejects_shared_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toasts.json");
        fs::write(&path, r#"{ "message_key": "k", "severity_key": "k" }"#).unwrap();

        let err = ToastsConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert_eq!(err.to_string(), "Invalid config: storage keys must differ");
    }
}

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::api::messages::Locale;

type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Config {
    pub default_profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Profile {
    pub base_url: String,
    pub locale: Option<String>,
    pub timeout_secs: Option<u64>,
    pub per_page: Option<u32>,
}

impl Profile {
    /// Unrecognized locale strings fall back to the Arabic default.
    pub fn locale(&self) -> Locale {
        match self.locale.as_deref() {
            Some("en") => Locale::En,
            _ => Locale::Ar,
        }
    }
}

impl Config {
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path.to_string_lossy().to_string(),
            message: e.to_string(),
        })?;

        Ok(config)
    }

    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| ConfigError::Parse {
            path: config_path.to_string_lossy().to_string(),
            message: e.to_string(),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| ConfigError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::DirNotFound)?;
        Ok(config_dir.join("swf-admin").join("config.toml"))
    }

    pub fn get_profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    pub fn set_profile(&mut self, name: String, profile: Profile) {
        self.profiles.insert(name, profile);
    }

    /// The profile a session should be built from: the named default, or the
    /// only profile when exactly one exists.
    pub fn active_profile(&self) -> Option<&Profile> {
        if let Some(name) = &self.default_profile {
            return self.get_profile(name);
        }
        if self.profiles.len() == 1 {
            return self.profiles.values().next();
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_profile() -> Profile {
        Profile {
            base_url: "https://api.swf.example".to_string(),
            locale: Some("ar".to_string()),
            timeout_secs: Some(30),
            per_page: Some(15),
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.default_profile, None);
        assert_eq!(config.profiles.len(), 0);
        assert!(config.active_profile().is_none());
    }

    #[test]
    fn test_profile_management() {
        let mut config = Config::default();
        config.set_profile("prod".to_string(), sample_profile());

        let retrieved = config.get_profile("prod");
        assert!(retrieved.is_some());
        if let Some(retrieved) = retrieved {
            assert_eq!(retrieved.base_url, "https://api.swf.example");
            assert_eq!(retrieved.per_page, Some(15));
        }
        assert!(config.get_profile("nonexistent").is_none());

        // Single profile is the implicit active one.
        assert!(config.active_profile().is_some());
    }

    #[test]
    fn test_profile_locale_parsing() {
        let mut profile = sample_profile();
        assert_eq!(profile.locale(), Locale::Ar);
        profile.locale = Some("en".to_string());
        assert_eq!(profile.locale(), Locale::En);
        profile.locale = Some("fr".to_string());
        assert_eq!(profile.locale(), Locale::Ar);
        profile.locale = None;
        assert_eq!(profile.locale(), Locale::Ar);
    }

    #[test]
    fn test_config_load_save_round_trip() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.default_profile = Some("prod".to_string());
        config.set_profile("prod".to_string(), sample_profile());

        config
            .save(Some(config_path.clone()))
            .expect("Failed to save config");
        let loaded = Config::load(Some(config_path)).expect("Failed to load config");

        assert_eq!(loaded.default_profile, config.default_profile);
        assert_eq!(loaded.profiles.len(), 1);
        let profile = loaded.active_profile().expect("active profile");
        assert_eq!(profile.base_url, "https://api.swf.example");
        assert_eq!(profile.timeout_secs, Some(30));
    }

    #[test]
    fn test_load_nonexistent_file_yields_default() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load(Some(temp_dir.path().join("missing.toml")))
            .expect("Failed to load default config");
        assert_eq!(config.profiles.len(), 0);
    }

    #[test]
    fn test_parse_error_is_reported_with_path() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "not = [valid").expect("write failed");

        let result = Config::load(Some(config_path));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}

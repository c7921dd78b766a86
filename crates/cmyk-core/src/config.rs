//! Runtime configuration
//!
//! A JSON file with every field optional:
//!
//! ```json
//! {
//!   "profiles_dir": "profiles",
//!   "engine": "lcms2",
//!   "intent": "perceptual",
//!   "icc_enabled": true,
//!   "profiles": [
//!     { "key": "fogra39", "path": "FOGRA39.icc", "title": "FOGRA39", "url": "https://www.eci.org/" }
//!   ]
//! }
//! ```

use crate::icc::{
    DirectorySource, EngineKind, IccProfileDescriptor, RenderingIntent, default_profiles,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory profile paths are resolved against
    pub profiles_dir: PathBuf,
    pub engine: EngineKind,
    /// Intent for every profile transform
    pub intent: RenderingIntent,
    /// When false, only the formula adapters run
    pub icc_enabled: bool,
    /// Profiles in initialization and display order
    pub profiles: Vec<IccProfileDescriptor>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profiles_dir: PathBuf::from("profiles"),
            engine: EngineKind::default(),
            intent: RenderingIntent::default(),
            icc_enabled: true,
            profiles: default_profiles(),
        }
    }
}

impl Config {
    /// Read a config file
    ///
    /// A relative `profiles_dir` is taken relative to the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let mut config = Self::from_json(&text)?;
        if config.profiles_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.profiles_dir = parent.join(&config.profiles_dir);
            }
        }
        tracing::debug!(path = %path.display(), profiles = config.profiles.len(), "config loaded");
        Ok(config)
    }

    /// Parse and validate JSON text
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Profile keys must be non-empty and unique, paths non-empty
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for profile in &self.profiles {
            if profile.key.trim().is_empty() {
                return Err(Error::Config("profile with empty key".into()));
            }
            if profile.path.trim().is_empty() {
                return Err(Error::Config(format!("profile {} has an empty path", profile.key)));
            }
            if !seen.insert(profile.key.as_str()) {
                return Err(Error::Config(format!("duplicate profile key {}", profile.key)));
            }
        }
        Ok(())
    }

    /// Source reading from `profiles_dir`
    pub fn profile_source(&self) -> DirectorySource {
        DirectorySource::new(&self.profiles_dir)
    }
}

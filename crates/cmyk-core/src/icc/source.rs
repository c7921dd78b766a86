//! Where profile bytes come from

use super::IccProfileDescriptor;
use crate::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Supplies the raw ICC bytes for a configured profile
pub trait ProfileSource {
    fn fetch(&self, profile: &IccProfileDescriptor) -> Result<Vec<u8>>;
}

/// Reads profiles from files relative to a root directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path a profile would be read from
    pub fn path_for(&self, profile: &IccProfileDescriptor) -> PathBuf {
        self.root.join(&profile.path)
    }
}

impl ProfileSource for DirectorySource {
    fn fetch(&self, profile: &IccProfileDescriptor) -> Result<Vec<u8>> {
        let path = self.path_for(profile);
        std::fs::read(&path).map_err(|e| Error::ProfileFetch {
            key: profile.key.clone(),
            reason: format!("{}: {}", path.display(), e),
        })
    }
}

/// Profiles held in memory, keyed by profile key
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    profiles: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add bytes for a key, replacing any previous entry
    pub fn insert(&mut self, key: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.profiles.insert(key.into(), data.into());
    }

    pub fn with(mut self, key: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(key, data);
        self
    }
}

impl ProfileSource for MemorySource {
    fn fetch(&self, profile: &IccProfileDescriptor) -> Result<Vec<u8>> {
        self.profiles
            .get(&profile.key)
            .cloned()
            .ok_or_else(|| Error::ProfileFetch {
                key: profile.key.clone(),
                reason: "not present in memory source".into(),
            })
    }
}

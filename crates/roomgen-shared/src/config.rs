//! Configuration for Roomgen
//!
//! Loaded from YAML. Every field has a default, so an empty file (or no
//! file at all) gives the standard room-tag setup.

use roomgen_domain::{ResourceCategory, TagTypeQuery};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{RoomgenError, UnknownCategoryError};

pub const DEFAULT_TAG_FAMILY: &str = "Level_RoomNumber";
pub const DEFAULT_FAMILY_EXTENSION: &str = "rfa";

/// Which tag family the run requires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TagFamilyConfig {
    /// Logical family name, matched exactly
    pub family_name: String,
    /// Category key (`room_tags`, `area_tags`, `space_tags`)
    pub category: String,
}

impl Default for TagFamilyConfig {
    fn default() -> Self {
        Self {
            family_name: DEFAULT_TAG_FAMILY.to_string(),
            category: ResourceCategory::RoomTags.key().to_string(),
        }
    }
}

impl TagFamilyConfig {
    pub fn category(&self) -> Result<ResourceCategory, UnknownCategoryError> {
        ResourceCategory::from_key(&self.category).ok_or_else(|| UnknownCategoryError {
            key: self.category.clone(),
            known: ResourceCategory::all()
                .iter()
                .map(|c| c.key().to_string())
                .collect(),
        })
    }

    pub fn query(&self) -> Result<TagTypeQuery, UnknownCategoryError> {
        Ok(TagTypeQuery::new(self.category()?, self.family_name.clone()))
    }
}

/// How the import prompt looks for family files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportConfig {
    /// File extension offered by the prompt, without the dot
    pub extension: String,
    /// Directory the prompt starts in; desktop or cwd when unset
    pub initial_directory: Option<PathBuf>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_FAMILY_EXTENSION.to_string(),
            initial_directory: None,
        }
    }
}

impl ImportConfig {
    /// Configured directory, else `$HOME/Desktop` if present, else `.`
    pub fn resolved_initial_directory(&self) -> PathBuf {
        if let Some(dir) = &self.initial_directory {
            return dir.clone();
        }
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join("Desktop"))
            .filter(|desktop| desktop.is_dir())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Labels given to each transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionLabels {
    pub activate: String,
    pub import: String,
    pub create_rooms: String,
}

impl Default for TransactionLabels {
    fn default() -> Self {
        Self {
            activate: "Activate room tag type".to_string(),
            import: "Load room tag family".to_string(),
            create_rooms: "Create rooms".to_string(),
        }
    }
}

/// Top-level configuration (roomgen.yaml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomgenConfig {
    pub tag_family: TagFamilyConfig,
    pub import: ImportConfig,
    pub transactions: TransactionLabels,
}

impl RoomgenConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> crate::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    pub fn to_yaml(&self) -> crate::Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> crate::Result<()> {
        if self.tag_family.family_name.is_empty() {
            return Err(RoomgenError::Config(
                "tagFamily.familyName must not be empty".to_string(),
            ));
        }
        if self.import.extension.is_empty() || self.import.extension.starts_with('.') {
            return Err(RoomgenError::Config(format!(
                "import.extension must be a bare extension, got '{}'",
                self.import.extension
            )));
        }
        self.tag_family.category()?;
        Ok(())
    }
}

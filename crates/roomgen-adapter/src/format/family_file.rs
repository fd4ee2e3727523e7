//! Family files - Loadable tag families
//!
//! A family file is JSON with the host's family extension (`.rfa` by
//! default):
//!
//! ```json
//! { "familyName": "Level_RoomNumber", "category": "room_tags", "symbols": ["Standard"] }
//! ```

use roomgen_domain::ResourceCategory;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AdapterError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyFile {
    pub family_name: String,
    /// Category key, see [`ResourceCategory::key`]
    pub category: String,
    /// Symbol (type) names the family provides
    pub symbols: Vec<String>,
}

impl FamilyFile {
    pub fn new(
        family_name: impl Into<String>,
        category: ResourceCategory,
        symbols: &[&str],
    ) -> Self {
        Self {
            family_name: family_name.into(),
            category: category.key().to_string(),
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Load and validate a family file, checking its extension
    pub fn load(path: &Path, extension: &str) -> Result<Self> {
        let matches_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));
        if !matches_extension {
            return Err(AdapterError::InvalidFamily(format!(
                "{} is not a .{} file",
                path.display(),
                extension
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let family: Self = serde_json::from_str(&content)?;
        family.validate()?;
        Ok(family)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn category(&self) -> Result<ResourceCategory> {
        ResourceCategory::from_key(&self.category).ok_or_else(|| {
            AdapterError::InvalidFamily(format!("unknown category '{}'", self.category))
        })
    }

    fn validate(&self) -> Result<()> {
        if self.family_name.trim().is_empty() {
            return Err(AdapterError::InvalidFamily(
                "family name is empty".to_string(),
            ));
        }
        if self.symbols.is_empty() {
            return Err(AdapterError::InvalidFamily(format!(
                "family '{}' has no symbols",
                self.family_name
            )));
        }
        self.category()?;
        Ok(())
    }
}

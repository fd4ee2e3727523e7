//! Model files - A building model snapshot on disk
//!
//! ```json
//! {
//!   "levels": [
//!     { "id": "L1", "name": "Level 1", "elevation": 0.0, "circuits": ["c1", "c2"] },
//!     { "id": "R", "name": "Roof", "elevation": 9.0 }
//!   ],
//!   "rooms": [{ "id": "room-1", "level": "L1", "circuit": "c1", "number": "1" }],
//!   "tagTypes": [{ "id": "tag-1", "category": "room_tags",
//!                  "familyName": "Level_RoomNumber", "typeName": "Standard", "active": true }]
//! }
//! ```
//!
//! A level without `circuits` has no plan topology.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelFile {
    #[serde(default)]
    pub levels: Vec<LevelRecord>,
    #[serde(default)]
    pub rooms: Vec<RoomRecord>,
    #[serde(default)]
    pub tag_types: Vec<TagTypeRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub elevation: f64,
    /// Circuit ids of the plan topology; absent when there is none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circuits: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRecord {
    pub id: String,
    pub level: String,
    pub circuit: String,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagTypeRecord {
    pub id: String,
    pub category: String,
    pub family_name: String,
    pub type_name: String,
    #[serde(default)]
    pub active: bool,
}

impl ModelFile {
    /// Load a model from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_circuits_means_no_topology() {
        let json = r#"{
            "levels": [
                { "id": "L1", "name": "Level 1", "elevation": 0.0, "circuits": [] },
                { "id": "R", "name": "Roof", "elevation": 9.0 }
            ]
        }"#;

        let model: ModelFile = serde_json::from_str(json).unwrap();
        assert_eq!(model.levels[0].circuits, Some(vec![]));
        assert_eq!(model.levels[1].circuits, None);
        assert!(model.rooms.is_empty());
        assert!(model.tag_types.is_empty());
    }

    #[test]
    fn test_tag_type_defaults_to_inactive() {
        let json = r#"{
            "tagTypes": [{ "id": "t", "category": "room_tags",
                           "familyName": "Level_RoomNumber", "typeName": "Standard" }]
        }"#;

        let model: ModelFile = serde_json::from_str(json).unwrap();
        assert!(!model.tag_types[0].active);
    }
}

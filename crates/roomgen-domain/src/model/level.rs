//! Level - A horizontal reference plane of the building
//!
//! Levels are enumerated from the host, never created or destroyed here.
//! Identity is the host-assigned id; name and elevation are descriptive.

/// Host-assigned identifier of a Level
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LevelId(String);

impl LevelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for LevelId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named elevation plane in the model
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    id: LevelId,
    name: String,
    /// Elevation in host units (informational only)
    elevation: f64,
}

impl Level {
    pub fn new(id: LevelId, name: impl Into<String>, elevation: f64) -> Self {
        Self {
            id,
            name: name.into(),
            elevation,
        }
    }

    pub fn id(&self) -> &LevelId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elevation(&self) -> f64 {
        self.elevation
    }
}

//! TagResourceType - A loadable annotation symbol used to label rooms
//!
//! A tag type belongs to a family (the logical name we search for) inside a
//! category. It must be active before the host lets anything place it.

/// Host-assigned identifier of a tag type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagTypeId(String);

impl TagTypeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for TagTypeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category a resource is filed under in the host model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceCategory {
    RoomTags,
    AreaTags,
    SpaceTags,
}

impl ResourceCategory {
    /// Stable key used in config and model files
    pub fn key(&self) -> &'static str {
        match self {
            ResourceCategory::RoomTags => "room_tags",
            ResourceCategory::AreaTags => "area_tags",
            ResourceCategory::SpaceTags => "space_tags",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.key() == key)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceCategory::RoomTags => "Room Tags",
            ResourceCategory::AreaTags => "Area Tags",
            ResourceCategory::SpaceTags => "Space Tags",
        }
    }

    pub fn all() -> &'static [ResourceCategory] {
        &[
            ResourceCategory::RoomTags,
            ResourceCategory::AreaTags,
            ResourceCategory::SpaceTags,
        ]
    }
}

impl core::fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagResourceType {
    id: TagTypeId,
    category: ResourceCategory,
    /// Logical family name, matched exactly and case-sensitively
    family_name: String,
    /// Symbol (type) name within the family
    type_name: String,
    active: bool,
}

impl TagResourceType {
    /// Create an inactive tag type
    pub fn new(
        id: TagTypeId,
        category: ResourceCategory,
        family_name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            category,
            family_name: family_name.into(),
            type_name: type_name.into(),
            active: false,
        }
    }

    /// Builder: mark as already active
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    pub fn id(&self) -> &TagTypeId {
        &self.id
    }

    pub fn category(&self) -> ResourceCategory {
        self.category
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Exact, case-sensitive match on category and family name
    pub fn matches(&self, category: ResourceCategory, family_name: &str) -> bool {
        self.category == category && self.family_name == family_name
    }

    /// Host-side mutation used by store implementations
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// Proof that a tag type was confirmed active against the store
///
/// Only [`crate::service::activation::activate_tag_type`] hands these out,
/// and room materialization requires one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTagType(TagResourceType);

impl ActiveTagType {
    pub(crate) fn confirmed(tag: TagResourceType) -> Self {
        debug_assert!(tag.is_active());
        Self(tag)
    }

    pub fn tag_type(&self) -> &TagResourceType {
        &self.0
    }
}

//! ResourceStore - Loadable resources (tag families) of the model

use std::path::Path;

use crate::model::tag_type::{ResourceCategory, TagResourceType, TagTypeId};
use crate::port::error::HostError;

/// What happened when a family file was handed to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportResult {
    /// Family loaded; `symbols` tag types were added to the model
    Loaded { family_name: String, symbols: usize },
    /// The host refused the file (unreadable, wrong kind, corrupt)
    Rejected { reason: String },
}

/// Resource Store Trait
///
/// This is a PORT in hexagonal architecture.
pub trait ResourceStore {
    /// All tag types filed under `category`, in host-defined order
    fn tag_types(&self, category: ResourceCategory) -> Result<Vec<TagResourceType>, HostError>;

    /// Look up a tag type by id
    fn tag_type(&self, id: &TagTypeId) -> Result<Option<TagResourceType>, HostError>;

    /// First tag type in `category` whose family name equals `family_name`
    fn find_by_name(
        &self,
        category: ResourceCategory,
        family_name: &str,
    ) -> Result<Option<TagResourceType>, HostError> {
        Ok(self
            .tag_types(category)?
            .into_iter()
            .find(|t| t.matches(category, family_name)))
    }

    /// Activate a tag type. Mutation: requires an open transaction.
    fn activate(&mut self, id: &TagTypeId) -> Result<(), HostError>;

    /// Load a family file into the model. Mutation: requires an open
    /// transaction. A refused file is `Ok(ImportResult::Rejected)`;
    /// `Err` is reserved for host failures.
    fn import_family(&mut self, path: &Path) -> Result<ImportResult, HostError>;
}

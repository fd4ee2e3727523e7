//! Tag type activation
//!
//! The host will not place a tag whose type is inactive. Activation is a
//! persisted mutation, so the caller opens the transaction; this function
//! only decides whether a mutation is needed and verifies the result.

use crate::model::tag_type::{ActiveTagType, TagResourceType};
use crate::port::error::HostError;
use crate::port::resource_store::ResourceStore;

/// True when `tag` must be activated before use
pub fn needs_activation(tag: &TagResourceType) -> bool {
    !tag.is_active()
}

/// Activate `tag` if needed and confirm it against the store
///
/// Returns the proof token required by
/// [`crate::service::materializer::RoomMaterializer::materialize_all`].
pub fn activate_tag_type<S>(store: &mut S, tag: &TagResourceType) -> Result<ActiveTagType, HostError>
where
    S: ResourceStore + ?Sized,
{
    if needs_activation(tag) {
        store.activate(tag.id())?;
    }
    confirm_active(store, tag)
}

/// Re-read `tag` from the store and check that it is active
pub fn confirm_active<S>(store: &S, tag: &TagResourceType) -> Result<ActiveTagType, HostError>
where
    S: ResourceStore + ?Sized,
{
    let current = store
        .tag_type(tag.id())?
        .ok_or_else(|| HostError::ElementNotFound {
            id: tag.id().to_string(),
        })?;

    if current.is_active() {
        Ok(ActiveTagType::confirmed(current))
    } else {
        Err(HostError::ActivationNotApplied {
            id: tag.id().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tag_type::{ResourceCategory, TagTypeId};
    use crate::port::resource_store::ImportResult;
    use std::path::Path;

    struct OneTagStore {
        tag: TagResourceType,
        /// Host silently ignores activation
        ignore_activate: bool,
        activations: usize,
    }

    impl ResourceStore for OneTagStore {
        fn tag_types(
            &self,
            _category: ResourceCategory,
        ) -> Result<Vec<TagResourceType>, HostError> {
            Ok(vec![self.tag.clone()])
        }

        fn tag_type(&self, id: &TagTypeId) -> Result<Option<TagResourceType>, HostError> {
            Ok((self.tag.id() == id).then(|| self.tag.clone()))
        }

        fn activate(&mut self, _id: &TagTypeId) -> Result<(), HostError> {
            self.activations += 1;
            if !self.ignore_activate {
                self.tag.set_active(true);
            }
            Ok(())
        }

        fn import_family(&mut self, _path: &Path) -> Result<ImportResult, HostError> {
            unreachable!()
        }
    }

    fn store(active: bool, ignore_activate: bool) -> OneTagStore {
        let mut tag = TagResourceType::new(
            TagTypeId::new("t1"),
            ResourceCategory::RoomTags,
            "Level_RoomNumber",
            "Standard",
        );
        tag.set_active(active);
        OneTagStore {
            tag,
            ignore_activate,
            activations: 0,
        }
    }

    #[test]
    fn test_activates_inactive_tag() {
        let mut s = store(false, false);
        let tag = s.tag.clone();

        let active = activate_tag_type(&mut s, &tag).unwrap();
        assert!(active.tag_type().is_active());
        assert_eq!(s.activations, 1);
    }

    #[test]
    fn test_already_active_is_not_mutated() {
        let mut s = store(true, false);
        let tag = s.tag.clone();

        activate_tag_type(&mut s, &tag).unwrap();
        assert_eq!(s.activations, 0);
    }

    #[test]
    fn test_activation_that_did_not_stick_is_an_error() {
        let mut s = store(false, true);
        let tag = s.tag.clone();

        let err = activate_tag_type(&mut s, &tag).unwrap_err();
        assert_eq!(
            err,
            HostError::ActivationNotApplied {
                id: "t1".to_string()
            }
        );
    }
}

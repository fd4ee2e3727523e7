//! Tag Resolution - Finding the tag type, with an import fallback
//!
//! The flow is a small state machine. The orchestrator performs the side
//! effects (lookup, prompt, import) and feeds what happened back in as
//! events:
//!
//! ```text
//! Initial ──Located──▶ Resolved
//!    │
//!    └─NotFound─▶ AwaitingImport ──ImportCancelled/Rejected──▶ Failed(UserCancelledOrInvalid)
//!                      │
//!                      └─ImportSucceeded─▶ Imported ──Located──▶ Resolved
//!                                              │
//!                                              └─NotFound──▶ Failed(ImportDidNotYieldResource)
//! ```
//!
//! Resolution after an import is attempted exactly once. There is no path
//! back to `AwaitingImport`, so the user is never prompted twice.

use crate::model::tag_type::{ResourceCategory, TagResourceType};
use crate::port::error::HostError;
use crate::port::resource_store::ResourceStore;

/// What to look for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTypeQuery {
    pub category: ResourceCategory,
    pub family_name: String,
}

impl TagTypeQuery {
    pub fn new(category: ResourceCategory, family_name: impl Into<String>) -> Self {
        Self {
            category,
            family_name: family_name.into(),
        }
    }

    /// Room tags of the given family
    pub fn room_tags(family_name: impl Into<String>) -> Self {
        Self::new(ResourceCategory::RoomTags, family_name)
    }
}

/// Pure lookup of the required tag type among existing resources
#[derive(Debug, Clone)]
pub struct TagResourceResolver {
    query: TagTypeQuery,
}

impl TagResourceResolver {
    pub fn new(query: TagTypeQuery) -> Self {
        Self { query }
    }

    pub fn query(&self) -> &TagTypeQuery {
        &self.query
    }

    /// First match in host-defined order, or `None`. No side effects.
    pub fn resolve<S>(&self, store: &S) -> Result<Option<TagResourceType>, HostError>
    where
        S: ResourceStore + ?Sized,
    {
        store.find_by_name(self.query.category, &self.query.family_name)
    }

    /// Run a lookup and turn it into the matching event
    pub fn lookup_event<S>(&self, store: &S) -> Result<ResolutionEvent, HostError>
    where
        S: ResourceStore + ?Sized,
    {
        Ok(match self.resolve(store)? {
            Some(tag) => ResolutionEvent::Located(tag),
            None => ResolutionEvent::NotFound,
        })
    }
}

/// Why resolution gave up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionFailure {
    /// Prompt dismissed, empty path, or the host refused the file.
    /// Reported as a cancellation, not an error.
    UserCancelledOrInvalid { detail: Option<String> },
    /// Import went through but the family still is not in the model
    ImportDidNotYieldResource { family_name: String },
}

impl core::fmt::Display for ResolutionFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ResolutionFailure::UserCancelledOrInvalid { detail: None } => {
                write!(f, "No family file was selected")
            }
            ResolutionFailure::UserCancelledOrInvalid {
                detail: Some(detail),
            } => write!(f, "Family file is invalid: {}", detail),
            ResolutionFailure::ImportDidNotYieldResource { family_name } => {
                write!(
                    f,
                    "Imported file does not contain the family \"{}\"",
                    family_name
                )
            }
        }
    }
}

/// Something that happened while resolving
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionEvent {
    /// Lookup found the tag type
    Located(TagResourceType),
    /// Lookup found nothing
    NotFound,
    /// User dismissed the prompt or gave an empty path
    ImportCancelled,
    /// Host refused the chosen file
    ImportRejected { reason: String },
    /// Host loaded the chosen file
    ImportSucceeded,
}

impl ResolutionEvent {
    fn name(&self) -> &'static str {
        match self {
            ResolutionEvent::Located(_) => "Located",
            ResolutionEvent::NotFound => "NotFound",
            ResolutionEvent::ImportCancelled => "ImportCancelled",
            ResolutionEvent::ImportRejected { .. } => "ImportRejected",
            ResolutionEvent::ImportSucceeded => "ImportSucceeded",
        }
    }
}

/// Where the resolution flow currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionState {
    Initial,
    AwaitingImport,
    /// Import done, waiting for the single re-lookup
    Imported,
    Resolved(TagResourceType),
    Failed(ResolutionFailure),
}

impl ResolutionState {
    pub fn new() -> Self {
        ResolutionState::Initial
    }

    /// Apply an event, consuming the current state
    ///
    /// `family_name` is only used to describe a failed re-lookup.
    pub fn apply(
        self,
        event: ResolutionEvent,
        family_name: &str,
    ) -> Result<ResolutionState, TransitionError> {
        use ResolutionEvent as E;
        use ResolutionState as S;

        match (self, event) {
            (S::Initial, E::Located(tag)) | (S::Imported, E::Located(tag)) => Ok(S::Resolved(tag)),
            (S::Initial, E::NotFound) => Ok(S::AwaitingImport),
            (S::AwaitingImport, E::ImportCancelled) => Ok(S::Failed(
                ResolutionFailure::UserCancelledOrInvalid { detail: None },
            )),
            (S::AwaitingImport, E::ImportRejected { reason }) => Ok(S::Failed(
                ResolutionFailure::UserCancelledOrInvalid {
                    detail: Some(reason),
                },
            )),
            (S::AwaitingImport, E::ImportSucceeded) => Ok(S::Imported),
            (S::Imported, E::NotFound) => Ok(S::Failed(
                ResolutionFailure::ImportDidNotYieldResource {
                    family_name: family_name.to_string(),
                },
            )),
            (state, event) => Err(TransitionError {
                from: state.name(),
                event: event.name(),
            }),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ResolutionState::Resolved(_) | ResolutionState::Failed(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            ResolutionState::Initial => "Initial",
            ResolutionState::AwaitingImport => "AwaitingImport",
            ResolutionState::Imported => "Imported",
            ResolutionState::Resolved(_) => "Resolved",
            ResolutionState::Failed(_) => "Failed",
        }
    }
}

impl Default for ResolutionState {
    fn default() -> Self {
        Self::new()
    }
}

/// An event arrived that the current state does not accept
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionError {
    pub from: &'static str,
    pub event: &'static str,
}

impl core::fmt::Display for TransitionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Invalid resolution transition: {} does not accept {}",
            self.from, self.event
        )
    }
}

impl std::error::Error for TransitionError {}

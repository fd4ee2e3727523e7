//! CreateRoomsUseCase - The transactional orchestrator
//!
//! ```text
//! list levels
//!   → resolve tag type ──(missing)──▶ notice + prompt + import   [txn: import]
//!   → activate tag type if inactive                              [txn: activate]
//!   → materialize rooms on every level                           [txn: create rooms]
//!   → exactly one terminal notification
//! ```
//!
//! Import and activation commit on their own, so a later room failure
//! does not force the user to import the family again on retry. Room
//! creation is one all-or-nothing batch.

use std::path::PathBuf;

use roomgen_domain::{
    activate_tag_type, in_transaction, service::activation::confirm_active, ActiveTagType,
    Document, HostError, ImportChoice, ImportFlow, ImportResult, Level, MaterializationReport,
    Notifier, Outcome, ResolutionEvent, ResolutionFailure, ResolutionState, RoomMaterializer,
    TagResourceResolver, TagResourceType, TagTypeQuery, TransactionError,
};
use tracing::{debug, error, info, warn};

use crate::error::RunError;
use crate::messages;

/// What to look for and how to label the transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub query: TagTypeQuery,
    pub activate_label: String,
    pub import_label: String,
    pub create_rooms_label: String,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            query: TagTypeQuery::room_tags("Level_RoomNumber"),
            activate_label: "Activate room tag type".to_string(),
            import_label: "Load room tag family".to_string(),
            create_rooms_label: "Create rooms".to_string(),
        }
    }
}

/// Import transaction failed for one of two reasons
enum ImportAbort {
    Host(HostError),
    Rejected(String),
}

impl From<HostError> for ImportAbort {
    fn from(err: HostError) -> Self {
        ImportAbort::Host(err)
    }
}

/// One run over one host document
///
/// The document, the import prompt and the notifier are all passed in
/// explicitly; the use case holds no global state.
pub struct CreateRoomsUseCase<'a, D: ?Sized, I: ?Sized, N: ?Sized> {
    doc: &'a mut D,
    import_flow: &'a mut I,
    notifier: &'a mut N,
    settings: RunSettings,
    resolver: TagResourceResolver,
    materializer: RoomMaterializer,
    report: Option<MaterializationReport>,
}

impl<'a, D, I, N> CreateRoomsUseCase<'a, D, I, N>
where
    D: Document + ?Sized,
    I: ImportFlow + ?Sized,
    N: Notifier + ?Sized,
{
    pub fn new(
        doc: &'a mut D,
        import_flow: &'a mut I,
        notifier: &'a mut N,
        settings: RunSettings,
    ) -> Self {
        let resolver = TagResourceResolver::new(settings.query.clone());
        Self {
            doc,
            import_flow,
            notifier,
            settings,
            resolver,
            materializer: RoomMaterializer::new(),
            report: None,
        }
    }

    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    /// Report of the last successful materialization
    pub fn report(&self) -> Option<&MaterializationReport> {
        self.report.as_ref()
    }

    /// Run the whole flow and notify the user exactly once
    pub fn run(&mut self) -> Outcome {
        info!(
            family = %self.settings.query.family_name,
            category = %self.settings.query.category,
            "Starting room creation"
        );

        match self.execute() {
            Ok(report) => {
                let rooms_created = report.rooms_created();
                info!(
                    rooms_created,
                    levels = report.levels.len(),
                    levels_without_topology = report.levels_without_topology(),
                    already_occupied = report.circuits_already_occupied(),
                    "Room creation finished"
                );
                self.notifier
                    .show(messages::TITLE_MESSAGE, &messages::rooms_created(rooms_created));
                self.report = Some(report);
                Outcome::Succeeded { rooms_created }
            }
            Err(err) if err.is_cancellation() => {
                warn!(reason = %err, "Run cancelled");
                self.notifier
                    .show(messages::TITLE_CANCELLED, &err.to_string());
                err.to_outcome()
            }
            Err(err) => {
                error!(error = %err, "Run failed");
                self.notifier.show(messages::TITLE_ERROR, &err.to_string());
                err.to_outcome()
            }
        }
    }

    fn execute(&mut self) -> Result<MaterializationReport, RunError> {
        let levels = self.doc.list_levels()?;
        debug!(count = levels.len(), "Listed levels");

        let tag = self.resolve_tag_type()?;
        let active = self.activate(&tag)?;
        self.materialize(&levels, &active)
    }

    /// Drive the resolution state machine to a terminal state
    fn resolve_tag_type(&mut self) -> Result<TagResourceType, RunError> {
        let family_name = self.settings.query.family_name.clone();
        let mut state = ResolutionState::new();

        while !state.is_terminal() {
            let event = match &state {
                ResolutionState::Initial | ResolutionState::Imported => {
                    self.resolver.lookup_event(&*self.doc)?
                }
                ResolutionState::AwaitingImport => self.import_family(&family_name)?,
                ResolutionState::Resolved(_) | ResolutionState::Failed(_) => break,
            };
            debug!(from = state.name(), ?event, "Resolution event");
            state = state.apply(event, &family_name)?;
        }

        match state {
            ResolutionState::Resolved(tag) => {
                info!(
                    id = %tag.id(),
                    family = tag.family_name(),
                    type_name = tag.type_name(),
                    active = tag.is_active(),
                    "Resolved tag type"
                );
                Ok(tag)
            }
            ResolutionState::Failed(ResolutionFailure::UserCancelledOrInvalid { detail }) => {
                Err(RunError::UserCancelled { detail })
            }
            ResolutionState::Failed(ResolutionFailure::ImportDidNotYieldResource {
                family_name,
            }) => Err(RunError::ResourceUnresolvable { family_name }),
            other => Err(RunError::UnexpectedHostError {
                message: format!("Resolution stopped in state {}", other.name()),
            }),
        }
    }

    /// Tell the user, prompt for a file, import it in its own transaction
    fn import_family(&mut self, family_name: &str) -> Result<ResolutionEvent, RunError> {
        warn!(family = family_name, "Tag family not found in model");
        self.notifier
            .show(messages::TITLE_ERROR, &messages::family_missing(family_name));

        let path: PathBuf = match self.import_flow.prompt()? {
            ImportChoice::Cancelled => {
                info!("Import prompt cancelled");
                return Ok(ResolutionEvent::ImportCancelled);
            }
            ImportChoice::Path(path) if path.as_os_str().is_empty() => {
                info!("Import prompt returned an empty path");
                return Ok(ResolutionEvent::ImportCancelled);
            }
            ImportChoice::Path(path) => path,
        };

        info!(path = %path.display(), "Importing tag family");
        let label = self.settings.import_label.clone();
        let result = in_transaction(&mut *self.doc, &label, |doc| {
            match doc.import_family(&path)? {
                ImportResult::Loaded {
                    family_name,
                    symbols,
                } => Ok((family_name, symbols)),
                ImportResult::Rejected { reason } => Err(ImportAbort::Rejected(reason)),
            }
        });

        match result {
            Ok((loaded, symbols)) => {
                info!(family = %loaded, symbols, "Family imported");
                Ok(ResolutionEvent::ImportSucceeded)
            }
            Err(TransactionError::Aborted {
                cause: ImportAbort::Rejected(reason),
                rollback: None,
            }) => {
                warn!(path = %path.display(), %reason, "Family file rejected");
                Ok(ResolutionEvent::ImportRejected { reason })
            }
            Err(err) => Err(RunError::UnexpectedHostError {
                message: err
                    .map_cause(|cause| match cause {
                        ImportAbort::Host(e) => e.to_string(),
                        ImportAbort::Rejected(reason) => reason,
                    })
                    .to_string(),
            }),
        }
    }

    /// Activate in its own transaction, or just confirm if already active
    fn activate(&mut self, tag: &TagResourceType) -> Result<ActiveTagType, RunError> {
        let activation_failure = |message: String| RunError::ActivationFailure {
            tag_type: format!("{}: {}", tag.family_name(), tag.type_name()),
            message,
        };

        if tag.is_active() {
            debug!(id = %tag.id(), "Tag type already active");
            return confirm_active(&*self.doc, tag).map_err(|e| activation_failure(e.to_string()));
        }

        let label = self.settings.activate_label.clone();
        let active = in_transaction(&mut *self.doc, &label, |doc| activate_tag_type(doc, tag))
            .map_err(|e| activation_failure(e.to_string()))?;
        info!(id = %tag.id(), "Tag type activated");
        Ok(active)
    }

    /// Create every missing room in one transaction
    fn materialize(
        &mut self,
        levels: &[Level],
        active: &ActiveTagType,
    ) -> Result<MaterializationReport, RunError> {
        let label = self.settings.create_rooms_label.clone();
        let materializer = &self.materializer;

        let report = in_transaction(&mut *self.doc, &label, |doc| {
            materializer.materialize_all(doc, levels, active)
        })
        .map_err(|e| RunError::MaterializationFailure {
            message: e.to_string(),
        })?;

        for level in &report.levels {
            debug!(
                level = %level.level_id,
                name = %level.level_name,
                created = level.rooms_created(),
                status = ?level.status,
                "Level processed"
            );
        }
        Ok(report)
    }
}

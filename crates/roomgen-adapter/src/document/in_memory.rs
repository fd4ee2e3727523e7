//! In-Memory Host Document
//!
//! A complete stand-in for the host model: levels, plan topology, rooms,
//! tag types, family import and a flat transaction primitive.
//!
//! Transactions snapshot the whole model on `begin`; `rollback` restores
//! the snapshot and `commit` drops it. Every mutation requires an open
//! transaction and is written to the [`TransactionJournal`].
//!
//! Faults can be injected to exercise the failure paths of callers.

use std::collections::HashMap;
use std::path::Path;

use roomgen_audit::TransactionJournal;
use roomgen_domain::{
    BoundaryCircuit, CircuitId, HostError, ImportResult, Level, LevelCatalog, LevelId,
    ResourceCategory, ResourceStore, Room, RoomId, RoomStore, TagResourceType, TagTypeId,
    TopologyProbe, TransactionHost,
};
use tracing::{debug, trace};
use uuid::Uuid;

use crate::error::{AdapterError, Result};
use crate::format::family_file::FamilyFile;
use crate::format::model_file::{LevelRecord, ModelFile, RoomRecord, TagTypeRecord};

/// Failure to inject into the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    /// `activate` fails with this message
    Activation(String),
    /// `import_family` fails (host error, not a rejection)
    Import(String),
    /// The n-th `create_room` call (1-based, over the document's life) fails
    RoomCreation { nth: usize, message: String },
    /// `commit` fails for transactions with this label
    Commit { label: String, message: String },
}

/// Everything a transaction can change
#[derive(Debug, Clone, Default)]
struct ModelState {
    levels: Vec<Level>,
    /// Levels absent from this map have no plan topology
    topology: HashMap<LevelId, Vec<CircuitId>>,
    rooms: Vec<Room>,
    tag_types: Vec<TagResourceType>,
    next_room: u64,
    next_tag: u64,
}

impl ModelState {
    fn level(&self, id: &LevelId) -> Option<&Level> {
        self.levels.iter().find(|l| l.id() == id)
    }

    fn is_occupied(&self, level: &LevelId, circuit: &CircuitId) -> bool {
        self.rooms
            .iter()
            .any(|r| r.level_id() == level && r.circuit_id() == circuit)
    }

    fn add_tag_type(
        &mut self,
        category: ResourceCategory,
        family_name: &str,
        type_name: &str,
    ) -> Option<TagTypeId> {
        let exists = self
            .tag_types
            .iter()
            .any(|t| t.matches(category, family_name) && t.type_name() == type_name);
        if exists {
            return None;
        }
        self.next_tag += 1;
        let id = TagTypeId::new(format!("tag-{}", self.next_tag));
        self.tag_types.push(TagResourceType::new(
            id.clone(),
            category,
            family_name,
            type_name,
        ));
        Some(id)
    }
}

#[derive(Debug)]
struct OpenTransaction {
    id: Uuid,
    label: String,
    snapshot: ModelState,
    mutations: usize,
}

/// In-memory host document
#[derive(Debug)]
pub struct InMemoryDocument {
    state: ModelState,
    open: Option<OpenTransaction>,
    journal: TransactionJournal,
    faults: Vec<Fault>,
    family_extension: String,
    room_creation_calls: usize,
}

impl Default for InMemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self {
            state: ModelState::default(),
            open: None,
            journal: TransactionJournal::default(),
            faults: Vec::new(),
            family_extension: "rfa".to_string(),
            room_creation_calls: 0,
        }
    }

    // ========== Builders ==========

    /// Add a level whose plan topology has the given circuits
    pub fn with_level(mut self, level: Level, circuits: &[&str]) -> Self {
        self.state.topology.insert(
            level.id().clone(),
            circuits.iter().map(|c| CircuitId::new(*c)).collect(),
        );
        self.state.levels.push(level);
        self
    }

    /// Add a level the host has no plan topology for
    pub fn with_level_without_topology(mut self, level: Level) -> Self {
        self.state.levels.push(level);
        self
    }

    /// Place an existing room (not journaled, this is model setup)
    pub fn with_room(mut self, level: &str, circuit: &str) -> Self {
        self.state.next_room += 1;
        let n = self.state.next_room;
        self.state.rooms.push(Room::new(
            RoomId::new(format!("room-{}", n)),
            LevelId::new(level),
            CircuitId::new(circuit),
            n.to_string(),
        ));
        self
    }

    pub fn with_tag_type(mut self, tag: TagResourceType) -> Self {
        self.state.tag_types.push(tag);
        self
    }

    pub fn with_fault(mut self, fault: Fault) -> Self {
        self.faults.push(fault);
        self
    }

    /// Extension accepted by `import_family`, without the dot
    pub fn with_family_extension(mut self, extension: impl Into<String>) -> Self {
        self.family_extension = extension.into();
        self
    }

    // ========== Model files ==========

    pub fn from_model_file(model: &ModelFile) -> Result<Self> {
        let mut doc = Self::new();

        for record in &model.levels {
            let level = Level::new(LevelId::new(&record.id), &record.name, record.elevation);
            if doc.state.level(level.id()).is_some() {
                return Err(AdapterError::InvalidModel(format!(
                    "duplicate level id '{}'",
                    record.id
                )));
            }
            if let Some(circuits) = &record.circuits {
                let mut ids: Vec<CircuitId> = Vec::with_capacity(circuits.len());
                for circuit in circuits.iter().map(CircuitId::new) {
                    if ids.contains(&circuit) {
                        return Err(AdapterError::InvalidModel(format!(
                            "duplicate circuit id '{}' on level '{}'",
                            circuit, record.id
                        )));
                    }
                    ids.push(circuit);
                }
                doc.state.topology.insert(level.id().clone(), ids);
            }
            doc.state.levels.push(level);
        }

        for record in &model.rooms {
            let level = LevelId::new(&record.level);
            let circuit = CircuitId::new(&record.circuit);
            if doc.state.level(&level).is_none() {
                return Err(AdapterError::InvalidModel(format!(
                    "room '{}' is on unknown level '{}'",
                    record.id, record.level
                )));
            }
            if doc.state.rooms.iter().any(|r| r.id().as_str() == record.id) {
                return Err(AdapterError::InvalidModel(format!(
                    "duplicate room id '{}'",
                    record.id
                )));
            }
            if doc.state.is_occupied(&level, &circuit) {
                return Err(AdapterError::InvalidModel(format!(
                    "circuit '{}' on level '{}' holds more than one room",
                    record.circuit, record.level
                )));
            }
            doc.state.rooms.push(Room::new(
                RoomId::new(&record.id),
                level,
                circuit,
                &record.number,
            ));
        }
        doc.state.next_room =
            next_sequence(doc.state.rooms.iter().map(|r| r.id().as_str()), "room-");

        for record in &model.tag_types {
            let category = ResourceCategory::from_key(&record.category).ok_or_else(|| {
                AdapterError::InvalidModel(format!(
                    "tag type '{}' has unknown category '{}'",
                    record.id, record.category
                ))
            })?;
            if doc.state.tag_types.iter().any(|t| t.id().as_str() == record.id) {
                return Err(AdapterError::InvalidModel(format!(
                    "duplicate tag type id '{}'",
                    record.id
                )));
            }
            let mut tag = TagResourceType::new(
                TagTypeId::new(&record.id),
                category,
                &record.family_name,
                &record.type_name,
            );
            tag.set_active(record.active);
            doc.state.tag_types.push(tag);
        }
        doc.state.next_tag =
            next_sequence(doc.state.tag_types.iter().map(|t| t.id().as_str()), "tag-");

        Ok(doc)
    }

    /// Snapshot of the committed model
    pub fn to_model_file(&self) -> ModelFile {
        let state = self.committed_state();
        ModelFile {
            levels: state
                .levels
                .iter()
                .map(|l| LevelRecord {
                    id: l.id().to_string(),
                    name: l.name().to_string(),
                    elevation: l.elevation(),
                    circuits: state
                        .topology
                        .get(l.id())
                        .map(|cs| cs.iter().map(|c| c.to_string()).collect()),
                })
                .collect(),
            rooms: state
                .rooms
                .iter()
                .map(|r| RoomRecord {
                    id: r.id().to_string(),
                    level: r.level_id().to_string(),
                    circuit: r.circuit_id().to_string(),
                    number: r.number().to_string(),
                })
                .collect(),
            tag_types: state
                .tag_types
                .iter()
                .map(|t| TagTypeRecord {
                    id: t.id().to_string(),
                    category: t.category().key().to_string(),
                    family_name: t.family_name().to_string(),
                    type_name: t.type_name().to_string(),
                    active: t.is_active(),
                })
                .collect(),
        }
    }

    // ========== Inspection ==========

    pub fn rooms(&self) -> &[Room] {
        &self.state.rooms
    }

    pub fn room_count(&self) -> usize {
        self.state.rooms.len()
    }

    pub fn all_tag_types(&self) -> &[TagResourceType] {
        &self.state.tag_types
    }

    pub fn journal(&self) -> &TransactionJournal {
        &self.journal
    }

    /// Committed state: the snapshot while a transaction is open
    fn committed_state(&self) -> &ModelState {
        match &self.open {
            Some(txn) => &txn.snapshot,
            None => &self.state,
        }
    }

    // ========== Internals ==========

    fn require_transaction(&self, operation: &str) -> std::result::Result<(), HostError> {
        if self.open.is_some() {
            Ok(())
        } else {
            Err(HostError::NoOpenTransaction {
                operation: operation.to_string(),
            })
        }
    }

    fn record_mutation(&mut self, detail: String) {
        if let Some(txn) = self.open.as_mut() {
            txn.mutations += 1;
            trace!(transaction = %txn.label, %detail, "Mutation");
            self.journal.log_mutation(txn.id, &txn.label, detail);
        }
    }

    fn activation_fault(&self) -> Option<&str> {
        self.faults.iter().find_map(|f| match f {
            Fault::Activation(message) => Some(message.as_str()),
            _ => None,
        })
    }

    fn import_fault(&self) -> Option<&str> {
        self.faults.iter().find_map(|f| match f {
            Fault::Import(message) => Some(message.as_str()),
            _ => None,
        })
    }

    fn room_fault(&self, call: usize) -> Option<&str> {
        self.faults.iter().find_map(|f| match f {
            Fault::RoomCreation { nth, message } if *nth == call => Some(message.as_str()),
            _ => None,
        })
    }

    fn commit_fault(&self, label: &str) -> Option<&str> {
        self.faults.iter().find_map(|f| match f {
            Fault::Commit { label: l, message } if l == label => Some(message.as_str()),
            _ => None,
        })
    }
}

/// Highest `<prefix><n>` suffix among `ids`, or the id count if larger
fn next_sequence<'a>(ids: impl Iterator<Item = &'a str>, prefix: &str) -> u64 {
    let mut count = 0u64;
    let mut highest = 0u64;
    for id in ids {
        count += 1;
        if let Some(n) = id.strip_prefix(prefix).and_then(|n| n.parse::<u64>().ok()) {
            highest = highest.max(n);
        }
    }
    count.max(highest)
}

impl LevelCatalog for InMemoryDocument {
    fn list_levels(&self) -> std::result::Result<Vec<Level>, HostError> {
        Ok(self.state.levels.clone())
    }
}

impl TopologyProbe for InMemoryDocument {
    fn circuits_for(
        &self,
        level: &LevelId,
    ) -> std::result::Result<Option<Vec<BoundaryCircuit>>, HostError> {
        if self.state.level(level).is_none() {
            return Err(HostError::ElementNotFound {
                id: level.to_string(),
            });
        }

        Ok(self.state.topology.get(level).map(|circuits| {
            circuits
                .iter()
                .map(|id| {
                    let circuit = BoundaryCircuit::new(id.clone(), level.clone());
                    if self.state.is_occupied(level, id) {
                        circuit.occupied()
                    } else {
                        circuit
                    }
                })
                .collect()
        }))
    }
}

impl RoomStore for InMemoryDocument {
    fn create_room(
        &mut self,
        level: &Level,
        circuit: &BoundaryCircuit,
    ) -> std::result::Result<Room, HostError> {
        self.require_transaction("create a room")?;
        self.room_creation_calls += 1;

        if let Some(message) = self.room_fault(self.room_creation_calls) {
            return Err(HostError::Rejected {
                operation: "Create room".to_string(),
                message: message.to_string(),
            });
        }

        let known_circuit = self
            .state
            .topology
            .get(level.id())
            .is_some_and(|cs| cs.contains(circuit.id()));
        if !known_circuit {
            return Err(HostError::ElementNotFound {
                id: format!("{}/{}", level.id(), circuit.id()),
            });
        }
        if self.state.is_occupied(level.id(), circuit.id()) {
            return Err(HostError::CircuitOccupied {
                level: level.id().to_string(),
                circuit: circuit.id().to_string(),
            });
        }

        self.state.next_room += 1;
        let n = self.state.next_room;
        let room = Room::new(
            RoomId::new(format!("room-{}", n)),
            level.id().clone(),
            circuit.id().clone(),
            n.to_string(),
        );
        self.state.rooms.push(room.clone());
        self.record_mutation(format!(
            "room {} ({}) in circuit {} on {}",
            room.id(),
            room.number(),
            circuit.id(),
            level.name()
        ));
        Ok(room)
    }

    fn rooms_on(&self, level: &Level) -> std::result::Result<Vec<Room>, HostError> {
        Ok(self
            .state
            .rooms
            .iter()
            .filter(|r| r.level_id() == level.id())
            .cloned()
            .collect())
    }
}

impl ResourceStore for InMemoryDocument {
    fn tag_types(
        &self,
        category: ResourceCategory,
    ) -> std::result::Result<Vec<TagResourceType>, HostError> {
        Ok(self
            .state
            .tag_types
            .iter()
            .filter(|t| t.category() == category)
            .cloned()
            .collect())
    }

    fn tag_type(&self, id: &TagTypeId) -> std::result::Result<Option<TagResourceType>, HostError> {
        Ok(self.state.tag_types.iter().find(|t| t.id() == id).cloned())
    }

    fn activate(&mut self, id: &TagTypeId) -> std::result::Result<(), HostError> {
        self.require_transaction("activate a tag type")?;

        if let Some(message) = self.activation_fault() {
            return Err(HostError::Rejected {
                operation: "Activate".to_string(),
                message: message.to_string(),
            });
        }

        let tag = self
            .state
            .tag_types
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or_else(|| HostError::ElementNotFound { id: id.to_string() })?;
        tag.set_active(true);
        self.record_mutation(format!("activate tag type {}", id));
        Ok(())
    }

    fn import_family(&mut self, path: &Path) -> std::result::Result<ImportResult, HostError> {
        self.require_transaction("load a family")?;

        if let Some(message) = self.import_fault() {
            return Err(HostError::Rejected {
                operation: "Load family".to_string(),
                message: message.to_string(),
            });
        }

        let family = match FamilyFile::load(path, &self.family_extension) {
            Ok(family) => family,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "Family file rejected");
                return Ok(ImportResult::Rejected {
                    reason: err.to_string(),
                });
            }
        };
        // validated by FamilyFile::load
        let category = match family.category() {
            Ok(category) => category,
            Err(err) => {
                return Ok(ImportResult::Rejected {
                    reason: err.to_string(),
                })
            }
        };

        let mut added = Vec::new();
        for symbol in &family.symbols {
            if let Some(id) = self
                .state
                .add_tag_type(category, &family.family_name, symbol)
            {
                added.push(id);
            }
        }
        for id in &added {
            self.record_mutation(format!("load tag type {} from {}", id, path.display()));
        }

        Ok(ImportResult::Loaded {
            family_name: family.family_name,
            symbols: added.len(),
        })
    }
}

impl TransactionHost for InMemoryDocument {
    fn begin(&mut self, label: &str) -> std::result::Result<(), HostError> {
        if let Some(txn) = &self.open {
            return Err(HostError::TransactionAlreadyOpen {
                open: txn.label.clone(),
                requested: label.to_string(),
            });
        }

        let id = self.journal.log_begin(label);
        debug!(transaction = label, %id, "Transaction started");
        self.open = Some(OpenTransaction {
            id,
            label: label.to_string(),
            snapshot: self.state.clone(),
            mutations: 0,
        });
        Ok(())
    }

    fn commit(&mut self) -> std::result::Result<(), HostError> {
        let label = match &self.open {
            Some(txn) => txn.label.clone(),
            None => {
                return Err(HostError::NoOpenTransaction {
                    operation: "commit".to_string(),
                })
            }
        };

        if let Some(message) = self.commit_fault(&label) {
            return Err(HostError::Rejected {
                operation: format!("Commit '{}'", label),
                message: message.to_string(),
            });
        }

        if let Some(txn) = self.open.take() {
            self.journal.log_commit(txn.id, &txn.label, txn.mutations);
            debug!(transaction = %txn.label, mutations = txn.mutations, "Transaction committed");
        }
        Ok(())
    }

    fn rollback(&mut self) -> std::result::Result<(), HostError> {
        let txn = self.open.take().ok_or_else(|| HostError::NoOpenTransaction {
            operation: "roll back".to_string(),
        })?;

        self.state = txn.snapshot;
        self.journal.log_rollback(txn.id, &txn.label, txn.mutations);
        debug!(transaction = %txn.label, discarded = txn.mutations, "Transaction rolled back");
        Ok(())
    }

    fn open_transaction(&self) -> Option<&str> {
        self.open.as_ref().map(|t| t.label.as_str())
    }
}

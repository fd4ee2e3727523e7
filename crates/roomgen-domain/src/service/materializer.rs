//! RoomMaterializer - Create a room in every unoccupied circuit
//!
//! For each level:
//! 1. Ask the TopologyProbe for circuits (no topology ⇒ skip the level)
//! 2. Create a room for every circuit that is not occupied
//! 3. Leave occupied circuits alone
//!
//! The caller wraps the whole call in ONE transaction so the batch is all
//! or nothing. Order does not matter: every circuit gets at most one room.

use crate::model::level::{Level, LevelId};
use crate::model::room::Room;
use crate::model::tag_type::ActiveTagType;
use crate::port::error::HostError;
use crate::port::room_store::RoomStore;
use crate::port::topology_probe::TopologyProbe;

/// What happened on one level
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelStatus {
    /// Host has no topology for this level; skipped
    NoTopology,
    Processed {
        created: Vec<Room>,
        already_occupied: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelReport {
    pub level_id: LevelId,
    pub level_name: String,
    pub status: LevelStatus,
}

impl LevelReport {
    pub fn rooms_created(&self) -> usize {
        self.created().len()
    }

    pub fn created(&self) -> &[Room] {
        match &self.status {
            LevelStatus::Processed { created, .. } => created,
            LevelStatus::NoTopology => &[],
        }
    }
}

/// Informational summary of a materialization pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializationReport {
    pub levels: Vec<LevelReport>,
}

impl MaterializationReport {
    pub fn rooms_created(&self) -> usize {
        self.levels.iter().map(LevelReport::rooms_created).sum()
    }

    pub fn levels_without_topology(&self) -> usize {
        self.levels
            .iter()
            .filter(|l| l.status == LevelStatus::NoTopology)
            .count()
    }

    pub fn circuits_already_occupied(&self) -> usize {
        self.levels
            .iter()
            .map(|l| match &l.status {
                LevelStatus::Processed {
                    already_occupied, ..
                } => *already_occupied,
                LevelStatus::NoTopology => 0,
            })
            .sum()
    }

    pub fn created_rooms(&self) -> impl Iterator<Item = &Room> {
        self.levels.iter().flat_map(LevelReport::created)
    }
}

/// RoomMaterializer - stateless, like every domain service here
#[derive(Debug, Default)]
pub struct RoomMaterializer;

impl RoomMaterializer {
    pub fn new() -> Self {
        Self
    }

    /// Materialize rooms on every level in `levels`
    ///
    /// `_tag` is the proof that the room tag type is active; it cannot be
    /// forged outside this crate.
    pub fn materialize_all<D>(
        &self,
        doc: &mut D,
        levels: &[Level],
        _tag: &ActiveTagType,
    ) -> Result<MaterializationReport, HostError>
    where
        D: TopologyProbe + RoomStore + ?Sized,
    {
        let mut report = MaterializationReport::default();
        for level in levels {
            report.levels.push(self.materialize_level(doc, level)?);
        }
        Ok(report)
    }

    /// Materialize rooms on a single level
    pub fn materialize_level<D>(&self, doc: &mut D, level: &Level) -> Result<LevelReport, HostError>
    where
        D: TopologyProbe + RoomStore + ?Sized,
    {
        let status = match doc.circuits_for(level.id())? {
            None => LevelStatus::NoTopology,
            Some(circuits) => {
                let mut created = Vec::new();
                let mut already_occupied = 0;
                for circuit in &circuits {
                    if circuit.is_occupied() {
                        already_occupied += 1;
                        continue;
                    }
                    created.push(doc.create_room(level, circuit)?);
                }
                LevelStatus::Processed {
                    created,
                    already_occupied,
                }
            }
        };

        Ok(LevelReport {
            level_id: level.id().clone(),
            level_name: level.name().to_string(),
            status,
        })
    }
}

use std::path::{Path, PathBuf};

use roomgen_adapter::{
    Fault, FamilyFile, InMemoryDocument, RecordingNotifier, ScriptedImportFlow,
};
use roomgen_audit::JournalEventType;
use roomgen_domain::{
    Level, LevelCatalog, LevelId, Outcome, ResourceCategory, ResourceStore, RoomStore,
    TagResourceType, TagTypeId, TopologyProbe,
};
use roomgen_usecase::{CreateRoomsUseCase, RunSettings};

const FAMILY: &str = "Level_RoomNumber";
const IMPORT: &str = "Load room tag family";
const ACTIVATE: &str = "Activate room tag type";
const CREATE: &str = "Create rooms";

fn level(id: &str, elevation: f64) -> Level {
    Level::new(LevelId::new(id), format!("Level {}", id), elevation)
}

fn tag(id: &str, family: &str) -> TagResourceType {
    TagResourceType::new(
        TagTypeId::new(id),
        ResourceCategory::RoomTags,
        family,
        "Standard",
    )
}

fn three_levels() -> InMemoryDocument {
    InMemoryDocument::new()
        .with_level(level("L1", 0.0), &["a", "b"])
        .with_level(level("L2", 3.0), &["c", "d"])
        .with_level(level("L3", 6.0), &[])
}

fn write_family(dir: &Path, file: &str, family: &str) -> PathBuf {
    let path = dir.join(file);
    FamilyFile::new(family, ResourceCategory::RoomTags, &["Standard"])
        .save(&path)
        .unwrap();
    path
}

struct Run {
    outcome: Outcome,
    notifier: RecordingNotifier,
    flow: ScriptedImportFlow,
}

fn run(doc: &mut InMemoryDocument, mut flow: ScriptedImportFlow) -> Run {
    let mut notifier = RecordingNotifier::new();
    let outcome =
        CreateRoomsUseCase::new(doc, &mut flow, &mut notifier, RunSettings::default()).run();
    Run {
        outcome,
        notifier,
        flow,
    }
}

fn rooms_on(doc: &InMemoryDocument, id: &str) -> usize {
    let level = doc
        .list_levels()
        .unwrap()
        .into_iter()
        .find(|l| l.id().as_str() == id)
        .unwrap();
    doc.rooms_on(&level).unwrap().len()
}

#[test]
fn three_levels_four_rooms() {
    let mut doc = three_levels().with_tag_type(tag("tag-1", FAMILY).active());

    let r = run(&mut doc, ScriptedImportFlow::cancelling());

    assert_eq!(r.outcome, Outcome::Succeeded { rooms_created: 4 });
    assert_eq!(rooms_on(&doc, "L1"), 2);
    assert_eq!(rooms_on(&doc, "L2"), 2);
    assert_eq!(rooms_on(&doc, "L3"), 0);
    assert_eq!(r.flow.prompts(), 0);
    assert_eq!(r.notifier.titles(), vec!["Message"]);
    assert_eq!(doc.journal().committed_labels(), vec![CREATE]);
}

#[test]
fn all_occupied_and_active_creates_nothing() {
    let mut doc = three_levels()
        .with_room("L1", "a")
        .with_room("L1", "b")
        .with_room("L2", "c")
        .with_room("L2", "d")
        .with_tag_type(tag("tag-1", FAMILY).active());

    let r = run(&mut doc, ScriptedImportFlow::cancelling());

    assert_eq!(r.outcome, Outcome::Succeeded { rooms_created: 0 });
    assert_eq!(doc.room_count(), 4);
    assert_eq!(r.flow.prompts(), 0);
    assert_eq!(doc.journal().get_stats().mutations_committed, 0);
}

#[test]
fn second_run_is_idempotent() {
    let mut doc = three_levels()
        .with_room("L2", "d")
        .with_tag_type(tag("tag-1", FAMILY).active());

    let first = run(&mut doc, ScriptedImportFlow::cancelling());
    assert_eq!(first.outcome.rooms_created(), 3);
    let after_first = doc.rooms().to_vec();

    let second = run(&mut doc, ScriptedImportFlow::cancelling());
    assert_eq!(second.outcome, Outcome::Succeeded { rooms_created: 0 });
    assert_eq!(doc.rooms(), after_first.as_slice());
}

#[test]
fn every_unoccupied_circuit_is_filled() {
    let mut doc = three_levels()
        .with_room("L1", "b")
        .with_tag_type(tag("tag-1", FAMILY).active());

    let r = run(&mut doc, ScriptedImportFlow::cancelling());
    assert!(r.outcome.is_success());

    for level in doc.list_levels().unwrap() {
        let circuits = doc.circuits_for(level.id()).unwrap().unwrap();
        assert!(circuits.iter().all(|c| c.is_occupied()));
    }
    // pre-existing room untouched, one room per circuit
    assert_eq!(doc.room_count(), 4);
    assert_eq!(doc.rooms()[0].id().as_str(), "room-1");
}

#[test]
fn failed_batch_leaves_no_rooms() {
    let mut doc = three_levels()
        .with_tag_type(tag("tag-1", FAMILY).active())
        .with_fault(Fault::RoomCreation {
            nth: 4,
            message: "boundary changed".to_string(),
        });

    let r = run(&mut doc, ScriptedImportFlow::cancelling());

    match &r.outcome {
        Outcome::Failed { reason } => assert!(reason.contains("boundary changed")),
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(doc.room_count(), 0);
    assert_eq!(doc.journal().rolled_back_labels(), vec![CREATE]);
    assert!(doc.journal().committed_labels().is_empty());
    assert_eq!(r.notifier.titles(), vec!["Error"]);
}

#[test]
fn commit_failure_rolls_back_batch() {
    let mut doc = three_levels()
        .with_tag_type(tag("tag-1", FAMILY).active())
        .with_fault(Fault::Commit {
            label: CREATE.to_string(),
            message: "model is read-only".to_string(),
        });

    let r = run(&mut doc, ScriptedImportFlow::cancelling());

    assert!(r.outcome.is_failure());
    assert_eq!(doc.room_count(), 0);
    assert_eq!(doc.journal().rolled_back_labels(), vec![CREATE]);
}

#[test]
fn cancelled_import_commits_nothing() {
    let mut doc = three_levels();

    let r = run(&mut doc, ScriptedImportFlow::cancelling());

    assert_eq!(r.outcome, Outcome::Cancelled);
    assert_eq!(r.flow.prompts(), 1);
    assert_eq!(doc.room_count(), 0);
    assert_eq!(doc.journal().get_stats().begun, 0);
    // notice before the prompt, then the terminal notification
    assert_eq!(r.notifier.titles(), vec!["Error", "Cancelled"]);
    assert!(r.notifier.notifications()[0].message.contains(FAMILY));
}

#[test]
fn empty_path_counts_as_cancel() {
    let mut doc = three_levels();

    let r = run(&mut doc, ScriptedImportFlow::choosing(""));

    assert_eq!(r.outcome, Outcome::Cancelled);
    assert_eq!(doc.journal().get_stats().begun, 0);
}

#[test]
fn successful_import_then_full_run() {
    let dir = tempfile::tempdir().unwrap();
    let family = write_family(dir.path(), "room-number.rfa", FAMILY);
    let mut doc = three_levels();

    let r = run(&mut doc, ScriptedImportFlow::choosing(family));

    assert_eq!(r.outcome, Outcome::Succeeded { rooms_created: 4 });
    assert_eq!(r.flow.prompts(), 1);
    assert_eq!(
        doc.journal().committed_labels(),
        vec![IMPORT, ACTIVATE, CREATE]
    );

    let imported = doc
        .find_by_name(ResourceCategory::RoomTags, FAMILY)
        .unwrap()
        .unwrap();
    assert!(imported.is_active());
    assert_eq!(r.notifier.last().unwrap().title, "Message");
}

#[test]
fn import_without_the_family_fails() {
    let dir = tempfile::tempdir().unwrap();
    let family = write_family(dir.path(), "other.rfa", "Room_Name_Area");
    let mut doc = three_levels();

    let r = run(&mut doc, ScriptedImportFlow::choosing(family));

    match &r.outcome {
        Outcome::Failed { reason } => assert!(reason.contains(FAMILY)),
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(r.flow.prompts(), 1);
    assert_eq!(doc.room_count(), 0);
    assert!(!doc
        .journal()
        .entries()
        .any(|e| e.label == CREATE));
}

#[test]
fn invalid_family_file_is_a_cancellation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.rfa");
    std::fs::write(&path, "not a family").unwrap();
    let mut doc = three_levels();

    let r = run(&mut doc, ScriptedImportFlow::choosing(path));

    assert_eq!(r.outcome, Outcome::Cancelled);
    assert!(doc.all_tag_types().is_empty());
    assert_eq!(doc.journal().rolled_back_labels(), vec![IMPORT]);
    assert_eq!(r.notifier.last().unwrap().title, "Cancelled");
}

#[test]
fn wrong_extension_is_a_cancellation() {
    let dir = tempfile::tempdir().unwrap();
    let family = write_family(dir.path(), "room-number.json", FAMILY);
    let mut doc = three_levels();

    let r = run(&mut doc, ScriptedImportFlow::choosing(family));

    assert_eq!(r.outcome, Outcome::Cancelled);
    assert_eq!(doc.room_count(), 0);
}

#[test]
fn import_host_error_is_a_failure() {
    let dir = tempfile::tempdir().unwrap();
    let family = write_family(dir.path(), "room-number.rfa", FAMILY);
    let mut doc = three_levels().with_fault(Fault::Import("host busy".to_string()));

    let r = run(&mut doc, ScriptedImportFlow::choosing(family));

    match &r.outcome {
        Outcome::Failed { reason } => assert!(reason.contains("host busy")),
        other => panic!("expected failure, got {:?}", other),
    }
    assert!(doc.all_tag_types().is_empty());
}

#[test]
fn activation_failure_stops_before_rooms() {
    let mut doc = three_levels()
        .with_tag_type(tag("tag-1", FAMILY))
        .with_fault(Fault::Activation("type is locked".to_string()));

    let r = run(&mut doc, ScriptedImportFlow::cancelling());

    match &r.outcome {
        Outcome::Failed { reason } => assert!(reason.contains("type is locked")),
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(doc.room_count(), 0);
    assert_eq!(doc.journal().rolled_back_labels(), vec![ACTIVATE]);
    assert!(!doc.journal().entries().any(|e| e.label == CREATE));
    assert_eq!(r.notifier.titles(), vec!["Error"]);
}

#[test]
fn activation_commits_before_materialization_begins() {
    let mut doc = three_levels().with_tag_type(tag("tag-1", FAMILY));

    let r = run(&mut doc, ScriptedImportFlow::cancelling());
    assert!(r.outcome.is_success());

    let events: Vec<_> = doc
        .journal()
        .entries()
        .filter(|e| e.event_type != JournalEventType::Mutation)
        .map(|e| (e.label.as_str(), e.event_type))
        .collect();
    assert_eq!(
        events,
        vec![
            (ACTIVATE, JournalEventType::Begin),
            (ACTIVATE, JournalEventType::Commit),
            (CREATE, JournalEventType::Begin),
            (CREATE, JournalEventType::Commit),
        ]
    );
    assert!(doc
        .tag_type(&TagTypeId::new("tag-1"))
        .unwrap()
        .unwrap()
        .is_active());
}

#[test]
fn failed_rooms_keep_committed_activation() {
    let mut doc = three_levels()
        .with_tag_type(tag("tag-1", FAMILY))
        .with_fault(Fault::RoomCreation {
            nth: 1,
            message: "no".to_string(),
        });

    let r = run(&mut doc, ScriptedImportFlow::cancelling());

    assert!(r.outcome.is_failure());
    assert_eq!(doc.room_count(), 0);
    assert!(doc
        .tag_type(&TagTypeId::new("tag-1"))
        .unwrap()
        .unwrap()
        .is_active());
}

#[test]
fn first_match_in_host_order_wins() {
    let mut doc = three_levels()
        .with_tag_type(tag("tag-1", FAMILY))
        .with_tag_type(tag("tag-2", FAMILY).active());

    let r = run(&mut doc, ScriptedImportFlow::cancelling());

    assert!(r.outcome.is_success());
    assert_eq!(doc.journal().committed_labels(), vec![ACTIVATE, CREATE]);
    assert!(doc
        .tag_type(&TagTypeId::new("tag-1"))
        .unwrap()
        .unwrap()
        .is_active());
}

#[test]
fn same_family_in_other_category_is_not_a_match() {
    let area_tag = TagResourceType::new(
        TagTypeId::new("tag-1"),
        ResourceCategory::AreaTags,
        FAMILY,
        "Standard",
    )
    .active();
    let mut doc = three_levels().with_tag_type(area_tag);

    let r = run(&mut doc, ScriptedImportFlow::cancelling());

    assert_eq!(r.outcome, Outcome::Cancelled);
    assert_eq!(r.flow.prompts(), 1);
}

#[test]
fn level_without_topology_is_skipped() {
    let mut doc = InMemoryDocument::new()
        .with_level_without_topology(level("B1", -3.0))
        .with_level(level("L1", 0.0), &["a"])
        .with_tag_type(tag("tag-1", FAMILY).active());

    let r = run(&mut doc, ScriptedImportFlow::cancelling());

    assert_eq!(r.outcome, Outcome::Succeeded { rooms_created: 1 });
    assert_eq!(rooms_on(&doc, "B1"), 0);
}

#[test]
fn zero_levels_is_not_an_error() {
    let mut doc = InMemoryDocument::new().with_tag_type(tag("tag-1", FAMILY).active());

    let r = run(&mut doc, ScriptedImportFlow::cancelling());

    assert_eq!(r.outcome, Outcome::Succeeded { rooms_created: 0 });
    assert_eq!(r.notifier.titles(), vec!["Message"]);
}

#[test]
fn custom_family_name_is_honoured() {
    let mut doc = three_levels().with_tag_type(tag("tag-1", "Room_Name_Area").active());
    let mut flow = ScriptedImportFlow::cancelling();
    let mut notifier = RecordingNotifier::new();
    let settings = RunSettings {
        query: roomgen_domain::TagTypeQuery::room_tags("Room_Name_Area"),
        ..RunSettings::default()
    };

    let mut use_case = CreateRoomsUseCase::new(&mut doc, &mut flow, &mut notifier, settings);
    let outcome = use_case.run();

    assert_eq!(outcome, Outcome::Succeeded { rooms_created: 4 });
    let report = use_case.report().unwrap();
    assert_eq!(report.levels.len(), 3);
    assert_eq!(report.levels[2].rooms_created(), 0);
    assert_eq!(flow.prompts(), 0);
}

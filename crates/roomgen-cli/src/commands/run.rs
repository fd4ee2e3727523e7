//! create-rooms run command

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use roomgen_adapter::{
    ConsoleNotifier, DialoguerImportFlow, InMemoryDocument, ModelFile, ScriptedImportFlow,
};
use roomgen_domain::{ImportFlow, Outcome};
use roomgen_shared::RoomgenConfig;
use roomgen_usecase::{CreateRoomsUseCase, RunSettings};
use tracing::{debug, info};

#[derive(Debug, Args)]
pub struct RunCommand {
    /// Model file (JSON)
    #[arg(short, long)]
    pub model: PathBuf,

    /// Configuration file (YAML); defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Where to write the updated model (defaults to --model)
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Import this family file instead of prompting when the family is missing
    #[arg(long, conflicts_with = "no_prompt")]
    pub family: Option<PathBuf>,

    /// Never prompt; a missing family cancels the run
    #[arg(long)]
    pub no_prompt: bool,

    /// Print the transaction journal as JSON when done
    #[arg(long)]
    pub journal: bool,

    /// Do not write the model back
    #[arg(long)]
    pub dry_run: bool,
}

impl RunCommand {
    pub fn run(&self) -> anyhow::Result<Outcome> {
        let config = RoomgenConfig::load_or_default(self.config.as_deref())
            .context("Failed to load configuration")?;
        let settings = settings_from(&config)?;

        let model = ModelFile::from_file(&self.model)
            .with_context(|| format!("Failed to read model {}", self.model.display()))?;
        let mut doc = InMemoryDocument::from_model_file(&model)?
            .with_family_extension(config.import.extension.clone());
        debug!(model = %self.model.display(), "Model loaded");

        let mut import_flow = self.import_flow(&config);
        let mut notifier = ConsoleNotifier::new();
        let outcome =
            CreateRoomsUseCase::new(&mut doc, &mut *import_flow, &mut notifier, settings).run();

        if self.journal {
            println!(
                "{}",
                serde_json::to_string_pretty(&doc.journal().export_json())?
            );
        }

        if outcome.is_success() && !self.dry_run {
            let target = self.save.as_deref().unwrap_or(&self.model);
            save_model(&doc, target)?;
        }

        Ok(outcome)
    }

    fn import_flow(&self, config: &RoomgenConfig) -> Box<dyn ImportFlow> {
        match &self.family {
            Some(path) => Box::new(ScriptedImportFlow::choosing(path.clone())),
            None if self.no_prompt => Box::new(ScriptedImportFlow::cancelling()),
            None => Box::new(DialoguerImportFlow::new(
                config.import.resolved_initial_directory(),
                config.import.extension.clone(),
            )),
        }
    }
}

/// Map configuration onto the use case settings
pub fn settings_from(config: &RoomgenConfig) -> anyhow::Result<RunSettings> {
    Ok(RunSettings {
        query: config.tag_family.query()?,
        activate_label: config.transactions.activate.clone(),
        import_label: config.transactions.import.clone(),
        create_rooms_label: config.transactions.create_rooms.clone(),
    })
}

fn save_model(doc: &InMemoryDocument, path: &Path) -> anyhow::Result<()> {
    doc.to_model_file()
        .save(path)
        .with_context(|| format!("Failed to write model {}", path.display()))?;
    info!(path = %path.display(), rooms = doc.room_count(), "Model saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL: &str = r#"{
        "levels": [
            { "id": "L1", "name": "Ground", "elevation": 0.0, "circuits": ["a", "b"] },
            { "id": "L2", "name": "First", "elevation": 3.0, "circuits": ["c"] },
            { "id": "R", "name": "Roof", "elevation": 6.0 }
        ],
        "rooms": [
            { "id": "room-1", "level": "L2", "circuit": "c", "number": "1" }
        ],
        "tagTypes": []
    }"#;

    fn command(dir: &Path) -> RunCommand {
        let model = dir.join("model.json");
        std::fs::write(&model, MODEL).unwrap();
        RunCommand {
            model,
            config: None,
            save: Some(dir.join("out.json")),
            family: None,
            no_prompt: true,
            journal: false,
            dry_run: false,
        }
    }

    fn write_family(dir: &Path) -> PathBuf {
        let path = dir.join("Level_RoomNumber.rfa");
        std::fs::write(
            &path,
            r#"{ "familyName": "Level_RoomNumber", "category": "room_tags", "symbols": ["Standard"] }"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_missing_family_without_prompt_cancels() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = command(dir.path());

        let outcome = cmd.run().unwrap();

        assert_eq!(outcome, Outcome::Cancelled);
        assert!(!dir.path().join("out.json").exists());
    }

    #[test]
    fn test_family_flag_imports_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let mut cmd = command(dir.path());
        cmd.no_prompt = false;
        cmd.family = Some(write_family(dir.path()));

        let outcome = cmd.run().unwrap();
        assert_eq!(outcome, Outcome::Succeeded { rooms_created: 2 });

        let saved = ModelFile::from_file(&dir.path().join("out.json")).unwrap();
        assert_eq!(saved.rooms.len(), 3);
        assert_eq!(saved.tag_types.len(), 1);
        assert!(saved.tag_types[0].active);
    }

    #[test]
    fn test_dry_run_leaves_model_alone() {
        let dir = tempfile::tempdir().unwrap();
        let mut cmd = command(dir.path());
        cmd.family = Some(write_family(dir.path()));
        cmd.no_prompt = false;
        cmd.dry_run = true;

        assert!(cmd.run().unwrap().is_success());
        assert!(!dir.path().join("out.json").exists());
    }

    #[test]
    fn test_config_changes_family() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("roomgen.yaml");
        std::fs::write(&config, "tagFamily:\n  familyName: Room_Tag\n").unwrap();
        let mut cmd = command(dir.path());
        cmd.config = Some(config);
        // the family file provides Level_RoomNumber, not Room_Tag
        cmd.family = Some(write_family(dir.path()));
        cmd.no_prompt = false;

        let outcome = cmd.run().unwrap();
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_settings_from_defaults() {
        let settings = settings_from(&RoomgenConfig::default()).unwrap();
        assert_eq!(settings, RunSettings::default());
    }

    #[test]
    fn test_missing_model_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut cmd = command(dir.path());
        cmd.model = dir.path().join("absent.json");

        assert!(cmd.run().is_err());
    }
}

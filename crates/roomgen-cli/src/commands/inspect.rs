//! create-rooms inspect command

use std::fmt::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use console::style;
use roomgen_adapter::{InMemoryDocument, ModelFile};
use roomgen_domain::{LevelCatalog, TopologyProbe};

#[derive(Debug, Args)]
pub struct InspectCommand {
    /// Model file (JSON)
    #[arg(short, long)]
    pub model: PathBuf,
}

impl InspectCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let model = ModelFile::from_file(&self.model)
            .with_context(|| format!("Failed to read model {}", self.model.display()))?;
        let doc = InMemoryDocument::from_model_file(&model)?;

        println!("{}", style(self.model.display()).bold());
        print!("{}", render(&doc)?);
        Ok(())
    }
}

/// Levels with their circuits and occupancy, then the tag types
pub fn render(doc: &InMemoryDocument) -> anyhow::Result<String> {
    let mut out = String::new();
    let levels = doc.list_levels()?;

    writeln!(out, "Levels ({}):", levels.len())?;
    for level in &levels {
        writeln!(
            out,
            "  {} {} (elevation {:.2})",
            level.id(),
            level.name(),
            level.elevation()
        )?;
        match doc.circuits_for(level.id())? {
            None => writeln!(out, "    no plan topology")?,
            Some(circuits) if circuits.is_empty() => writeln!(out, "    no circuits")?,
            Some(circuits) => {
                for circuit in circuits {
                    let state = if circuit.is_occupied() {
                        "occupied"
                    } else {
                        "free"
                    };
                    writeln!(out, "    {} {}", circuit.id(), state)?;
                }
            }
        }
    }

    let tags = doc.all_tag_types();
    writeln!(out, "Tag types ({}):", tags.len())?;
    for tag in tags {
        writeln!(
            out,
            "  {} [{}] {}: {}{}",
            tag.id(),
            tag.category().key(),
            tag.family_name(),
            tag.type_name(),
            if tag.is_active() { " (active)" } else { "" }
        )?;
    }

    Ok(out)
}

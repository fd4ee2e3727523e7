//! Import prompts
//!
//! `DialoguerImportFlow` asks on the terminal; `ScriptedImportFlow`
//! replays fixed answers for tests and non-interactive runs.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use roomgen_domain::{HostError, ImportChoice, ImportFlow};
use tracing::debug;

use crate::error::Result;

/// Terminal file picker
///
/// Lists the family files found in the initial directory, plus an entry
/// for typing a path by hand. Esc cancels.
pub struct DialoguerImportFlow {
    directory: PathBuf,
    extension: String,
    theme: ColorfulTheme,
}

impl DialoguerImportFlow {
    pub fn new(directory: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            extension: extension.into(),
            theme: ColorfulTheme::default(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Family files in the initial directory, sorted by path
    pub fn candidates(&self) -> Result<Vec<PathBuf>> {
        candidates_in(&self.directory, &self.extension)
    }

    fn ask(&self) -> Result<ImportChoice> {
        let candidates = self.candidates()?;
        debug!(
            directory = %self.directory.display(),
            found = candidates.len(),
            "Listing family files"
        );

        let mut items: Vec<String> = candidates
            .iter()
            .map(|p| {
                p.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| p.display().to_string())
            })
            .collect();
        items.push("Enter a path...".to_string());

        let selection = Select::with_theme(&self.theme)
            .with_prompt(format!(
                "Select a .{} family file in {} (Esc to cancel)",
                self.extension,
                self.directory.display()
            ))
            .items(&items)
            .default(0)
            .interact_opt()?;

        match selection {
            None => Ok(ImportChoice::Cancelled),
            Some(i) if i < candidates.len() => Ok(ImportChoice::Path(candidates[i].clone())),
            Some(_) => {
                let typed = Input::<String>::with_theme(&self.theme)
                    .with_prompt("Family file path (empty to cancel)")
                    .allow_empty(true)
                    .interact_text()?;
                Ok(ImportChoice::from_path(typed.trim()))
            }
        }
    }
}

impl ImportFlow for DialoguerImportFlow {
    fn prompt(&mut self) -> std::result::Result<ImportChoice, HostError> {
        self.ask().map_err(|e| HostError::Rejected {
            operation: "File prompt".to_string(),
            message: e.to_string(),
        })
    }
}

/// `*.<extension>` files directly inside `directory`
pub fn candidates_in(directory: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/*.{}",
        glob::Pattern::escape(&directory.to_string_lossy()),
        glob::Pattern::escape(extension)
    );
    let mut paths: Vec<PathBuf> = glob::glob(&pattern)?
        .filter_map(|entry| entry.ok())
        .filter(|p| p.is_file())
        .collect();
    paths.sort();
    Ok(paths)
}

/// Replays a fixed list of answers
///
/// Once the script runs out every prompt is a cancellation.
#[derive(Debug, Clone, Default)]
pub struct ScriptedImportFlow {
    answers: VecDeque<ImportChoice>,
    prompts: usize,
}

impl ScriptedImportFlow {
    pub fn new(answers: impl IntoIterator<Item = ImportChoice>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: 0,
        }
    }

    /// Always cancels
    pub fn cancelling() -> Self {
        Self::default()
    }

    /// Picks `path` on the first prompt
    pub fn choosing(path: impl Into<PathBuf>) -> Self {
        Self::new([ImportChoice::from_path(path)])
    }

    /// How many times the prompt was shown
    pub fn prompts(&self) -> usize {
        self.prompts
    }
}

impl ImportFlow for ScriptedImportFlow {
    fn prompt(&mut self) -> std::result::Result<ImportChoice, HostError> {
        self.prompts += 1;
        Ok(self.answers.pop_front().unwrap_or(ImportChoice::Cancelled))
    }
}

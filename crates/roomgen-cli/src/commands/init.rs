//! create-rooms init command

use clap::Args;
use roomgen_shared::RoomgenConfig;
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "roomgen.yaml";

#[derive(Debug, Args)]
pub struct InitCommand {
    /// Directory to write roomgen.yaml into
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Overwrite an existing roomgen.yaml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let path = self.write_config()?;
        println!("✓ Wrote {}", path.display());
        Ok(())
    }

    fn write_config(&self) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(&self.directory)?;

        let path = self.directory.join(CONFIG_FILE);
        if path.exists() && !self.force {
            anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
        }

        std::fs::write(&path, RoomgenConfig::default().to_yaml()?)?;
        Ok(path)
    }
}

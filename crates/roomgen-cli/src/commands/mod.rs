//! CLI Commands

pub mod init;
pub mod inspect;
pub mod run;

pub use init::InitCommand;
pub use inspect::InspectCommand;
pub use run::RunCommand;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dictstep", version, about = "Configure dict deserializer workflow steps")]
pub struct Cli {
    /// Dialog settings file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the step editor (the default)
    Gui {
        #[arg(default_value = "workflow.json")]
        workflow: PathBuf,
    },
    /// Validate every dict deserializer step of a workflow
    Check { workflow: PathBuf },
    /// Append an unconfigured dict deserializer step
    Add { workflow: PathBuf },
    /// Configure one step, asking before saving an invalid configuration
    Set {
        workflow: PathBuf,
        step: u64,
        #[arg(long)]
        identifier: Option<String>,
        #[arg(long)]
        input: Option<String>,
        /// Answer "yes" to the invalid configuration prompt
        #[arg(long)]
        yes: bool,
    },
}

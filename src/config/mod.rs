pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "typed-app")]
#[command(about = "Typed application starter: user models and matrix utilities", version)]
pub struct CliConfig {
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Directory to export results into (report.json, product.csv)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the demo (the default when no command is given)
    Demo {
        /// TOML file overriding the demo inputs
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Show shape, transpose, determinant and trace of a CSV matrix
    Inspect {
        file: PathBuf,
    },
    /// Multiply two CSV matrices
    Multiply {
        left: PathBuf,
        right: PathBuf,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// The subcommand to run; no subcommand means the demo.
    pub fn effective_command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Demo { config: None })
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(output) = &self.output {
            validate_path("output", &output.to_string_lossy())?;
        }
        Ok(())
    }
}

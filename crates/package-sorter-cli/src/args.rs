use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "package-sorter")]
#[command(about = "Dispatch classifier for packages by size and weight")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.package-sorter)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

/// Raw measurement values; parsed by the core so bad text reports as invalid input
#[derive(Args, Debug)]
pub struct MeasurementArgs {
    /// Width (cm)
    #[arg(allow_hyphen_values = true)]
    pub width: String,

    /// Height (cm)
    #[arg(allow_hyphen_values = true)]
    pub height: String,

    /// Length (cm)
    #[arg(allow_hyphen_values = true)]
    pub length: String,

    /// Mass (kg)
    #[arg(allow_hyphen_values = true)]
    pub mass: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the dispatch stack for one package
    Classify {
        #[command(flatten)]
        measurement: MeasurementArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the stack together with volume, bulk and weight facts
    Describe {
        #[command(flatten)]
        measurement: MeasurementArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Classify the built-in sample packages and print a summary
    Demo,

    /// Prompt for package measurements until blank input
    Interactive,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g., display.length_unit)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., display.format)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Initialize config file with defaults
    Init,
}

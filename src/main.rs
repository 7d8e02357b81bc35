use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use numeral::config::Overrides;

mod cmd;

#[derive(Parser)]
#[command(name = "numeral")]
#[command(version, about = "Spell whole numbers as English numerals")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to numeral.toml. Defaults to ./numeral.toml, then the user config directory
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding lexicon.toml and scales.toml. Overrides the config file
    #[arg(long, global = true)]
    pub tables_dir: Option<PathBuf>,

    /// How far the final scale tier reaches: open, zero-width
    #[arg(long, global = true)]
    pub policy: Option<String>,

    /// Print phrases exactly as composed, without capitalizing the first letter
    #[arg(long, global = true)]
    pub no_capitalize: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    fn overrides(&self) -> Result<Overrides> {
        let policy = self
            .policy
            .as_deref()
            .map(str::parse)
            .transpose()
            .context("Invalid --policy")?;

        Ok(Overrides {
            config_file: self.config.clone(),
            tables_dir: self.tables_dir.clone(),
            policy,
            no_capitalize: self.no_capitalize,
            verbose: self.verbose,
        })
    }
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Prompt for numbers and spell each one (the default)
    Interactive,
    /// Spell the given numbers and exit
    Translate {
        /// Numbers to spell
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<String>,

        /// Emit one JSON object per number
        #[arg(long)]
        json: bool,
    },
    /// Show the loaded word tables and the supported range
    Tables,
    /// View, validate or create configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Validate configuration and the word tables it points at
    Validate,
    /// Write a default numeral.toml
    Init {
        /// Write to the user config directory instead of the working directory
        #[arg(long)]
        global: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    numeral::logging::init_logging(cli.verbose);

    let working_dir = std::env::current_dir().context("Failed to get current directory")?;
    let overrides = cli.overrides()?;

    match cli.command.clone().unwrap_or(Commands::Interactive) {
        Commands::Interactive => cmd::cmd_interactive(&working_dir, &overrides)?,
        Commands::Translate { numbers, json } => {
            cmd::cmd_translate(&working_dir, &overrides, &numbers, json)?
        }
        Commands::Tables => cmd::cmd_tables(&working_dir, &overrides)?,
        Commands::Config { command } => cmd::cmd_config(&working_dir, &overrides, command)?,
    }

    Ok(())
}

//! Configuration view and validation commands — `numeral config`.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::super::ConfigCommands;
use numeral::config::{Config, Overrides, user_config_path};

pub fn cmd_config(
    working_dir: &Path,
    overrides: &Overrides,
    command: Option<ConfigCommands>,
) -> Result<()> {
    use numeral::ScaleProvider;
    use numeral::numeral_config::{CONFIG_FILE, NumeralToml};
    use numeral::ui::icons::{CHECK, CROSS, FILE_NEW, WARN};

    match command {
        None | Some(ConfigCommands::Show) => {
            let config = Config::new(working_dir, overrides)?;

            println!();
            println!("Numeral Configuration");
            println!("=====================");
            println!();

            match &config.config_file {
                Some(path) => {
                    println!("Config file: {}", path.display());
                    println!();

                    let toml = NumeralToml::load(path)?;

                    println!("[tables]");
                    match &toml.tables.dir {
                        Some(dir) => println!("  dir = \"{}\"", dir.display()),
                        None => println!("  (built-in tables)"),
                    }
                    println!();

                    println!("[limits]");
                    println!("  policy = \"{}\"", toml.limits.policy);
                    if let Some(exponent) = toml.limits.ceiling_exponent {
                        println!("  ceiling_exponent = {}", exponent);
                    }
                    println!();

                    println!("[output]");
                    println!("  capitalize = {}", toml.output.capitalize);
                    println!();
                }
                None => {
                    println!("No {} found. Using default configuration.", CONFIG_FILE);
                    println!();
                    println!("Run 'numeral config init' to create one.");
                    println!();
                }
            }

            // Show effective values (including env overrides)
            println!("Effective values (with env/CLI overrides):");
            println!("  tables = {}", config.table_source);
            println!("  policy = \"{}\"", config.limits.policy);
            if let Some(exponent) = config.limits.ceiling_exponent {
                println!("  ceiling_exponent = {}", exponent);
            }
            println!("  capitalize = {}", config.capitalize);
            println!();
        }
        Some(ConfigCommands::Validate) => {
            let config = Config::new(working_dir, overrides)?;

            println!();
            println!("Validating configuration...");
            println!();

            match &config.config_file {
                Some(path) => {
                    let warnings = NumeralToml::load(path)?.validate();
                    if warnings.is_empty() {
                        println!("{}Configuration is valid.", CHECK);
                    } else {
                        println!("Configuration warnings:");
                        for warning in warnings {
                            println!("  {}{}", WARN, warning);
                        }
                    }
                }
                None => println!("No {} found. Using defaults (valid).", CONFIG_FILE),
            }

            match config.load_tables() {
                Ok(tables) => {
                    println!(
                        "{}Word tables load from {} (numbers below {})",
                        CHECK,
                        config.table_source,
                        tables.scales().ceiling()
                    );
                    println!();
                }
                Err(err) => {
                    println!("{}{:#}", CROSS, err);
                    println!();
                    return Err(err);
                }
            }
        }
        Some(ConfigCommands::Init { global }) => {
            let path = init_target(working_dir, overrides, global)?;

            if path.exists() {
                println!("{} already exists at {}", CONFIG_FILE, path.display());
                println!("Delete it first if you want to recreate it.");
                return Ok(());
            }

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }

            NumeralToml::default().save(&path)?;

            println!("{}Created {} at {}", FILE_NEW, CONFIG_FILE, path.display());
            println!();
            println!("You can now customize:");
            println!("  - [tables] dir");
            println!("  - [limits] policy, ceiling_exponent");
            println!("  - [output] capitalize");
            println!();
        }
    }

    Ok(())
}

/// Where `config init` writes: `--config`, the user config dir, or the working dir.
fn init_target(working_dir: &Path, overrides: &Overrides, global: bool) -> Result<PathBuf> {
    use numeral::numeral_config::CONFIG_FILE;

    if let Some(path) = &overrides.config_file {
        return Ok(path.clone());
    }
    if global {
        return user_config_path().context("Could not determine the user config directory");
    }
    Ok(working_dir.join(CONFIG_FILE))
}

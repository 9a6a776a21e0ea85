//! Config command - inspect and edit the JSON configuration file.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use vfv_core::models::config::AppConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration (password redacted)
    Show,

    /// Write a configuration file with default values
    Init {
        /// Where to write the file (default: the active config path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print one value, addressed by a dotted key such as "smtp.port"
    Get { key: String },

    /// Change one value; JSON literals are parsed, anything else is a string
    Set { key: String, value: String },

    /// Print the active config path and whether the file exists
    Path,
}

pub async fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<ExitCode> {
    let path = config_file_path(config_path);
    match args.command {
        ConfigCommand::Show => show(&path)?,
        ConfigCommand::Init { output, force } => init(output.as_deref().unwrap_or(path.as_path()), force)?,
        ConfigCommand::Get { key } => get(&path, &key)?,
        ConfigCommand::Set { key, value } => set(&path, &key, &value)?,
        ConfigCommand::Path => describe_path(&path),
    }
    Ok(ExitCode::SUCCESS)
}

/// The explicit `--config` path, or `<config_dir>/vfv/config.json`.
pub fn config_file_path(config_path: Option<&str>) -> PathBuf {
    match config_path {
        Some(path) => PathBuf::from(path),
        None => dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vfv")
            .join("config.json"),
    }
}

/// Load the active configuration.
///
/// A path given with `--config` must exist; a missing default file means
/// built-in defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<AppConfig> {
    let path = config_file_path(config_path);
    if config_path.is_none() && !path.exists() {
        return Ok(AppConfig::default());
    }
    AppConfig::from_file(&path).with_context(|| format!("Failed to load config {}", path.display()))
}

fn read_or_default(path: &Path) -> anyhow::Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    AppConfig::from_file(path).with_context(|| format!("Failed to load config {}", path.display()))
}

/// `smtp.port` -> `/smtp/port`
fn pointer(key: &str) -> String {
    key.split('.').fold(String::new(), |mut acc, part| {
        acc.push('/');
        acc.push_str(part);
        acc
    })
}

fn show(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        eprintln!("{} {} not found, showing defaults.", style("ℹ").blue(), path.display());
    }

    let mut json = serde_json::to_value(read_or_default(path)?)?;
    if let Some(password) = json.pointer_mut("/smtp/sender_password") {
        *password = Value::String("***".to_string());
    }
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn init(target: &Path, force: bool) -> anyhow::Result<()> {
    if target.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            target.display()
        );
    }
    if let Some(dir) = target.parent() {
        fs::create_dir_all(dir)?;
    }

    AppConfig::default().save(target)?;
    println!("{} Wrote default configuration to {}", style("✓").green(), target.display());
    Ok(())
}

fn get(path: &Path, key: &str) -> anyhow::Result<()> {
    let json = serde_json::to_value(read_or_default(path)?)?;
    let value = json
        .pointer(&pointer(key))
        .with_context(|| format!("Unknown configuration key: {key}"))?;

    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn set(path: &Path, key: &str, raw: &str) -> anyhow::Result<()> {
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));

    let (section, name) = key
        .rsplit_once('.')
        .with_context(|| format!("Expected a dotted key like smtp.port, got {key}"))?;

    let mut json = serde_json::to_value(read_or_default(path)?)?;
    json.pointer_mut(&pointer(section))
        .and_then(Value::as_object_mut)
        .with_context(|| format!("Unknown configuration section: {section}"))?
        .insert(name.to_string(), value.clone());

    let config: AppConfig =
        serde_json::from_value(json).with_context(|| format!("Invalid value for {key}"))?;

    // Unknown fields are dropped on deserialize, so a typo never round-trips.
    let stored = serde_json::to_value(&config)?;
    if stored.pointer(&pointer(key)) != Some(&value) {
        anyhow::bail!("Unknown configuration key: {key}");
    }

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    config.save(path)?;

    println!("{} {} = {}", style("✓").green(), key, value);
    Ok(())
}

fn describe_path(path: &Path) {
    println!("Configuration file: {}", path.display());
    if path.exists() {
        println!("Status: {}", style("exists").green());
    } else {
        println!("Status: {}", style("not created").yellow());
        println!("Run 'vfv config init' to create it.");
    }
}

//! Config command implementation.

use colored::Colorize;
use tracing::info;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::MindfulError;
use crate::output::{format_config, to_json};

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error if the config file cannot be read, parsed or written.
pub fn config(
    paths: &Paths,
    cmd: &ConfigCommands,
    format: OutputFormat,
) -> Result<String, MindfulError> {
    match cmd {
        ConfigCommands::Show => {
            let config = Config::load_from_path(&paths.config_file)?;
            format_config(&config, format)
        }

        ConfigCommands::Path => match format {
            OutputFormat::Json => to_json(&serde_json::json!({
                "path": paths.config_file,
                "exists": paths.config_file.exists(),
            })),
            OutputFormat::Pretty => Ok(paths.config_file.display().to_string()),
        },

        ConfigCommands::Init { force } => init_config(paths, *force, format),
    }
}

/// Write a default config file.
fn init_config(paths: &Paths, force: bool, format: OutputFormat) -> Result<String, MindfulError> {
    if paths.config_file.exists() && !force {
        return Err(MindfulError::Config(format!(
            "{} already exists. Use --force to overwrite it.",
            paths.config_file.display()
        )));
    }

    paths.ensure_dirs()?;
    Config::default().save_to_path(&paths.config_file)?;
    info!(path = %paths.config_file.display(), "wrote default config");

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "path": paths.config_file,
            "created": true,
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {}",
            "Config written to".green(),
            paths.config_file.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_then_show() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("mindful"));

        config(&paths, &ConfigCommands::Init { force: false }, OutputFormat::Json).unwrap();
        assert!(paths.config_file.exists());

        let shown = config(&paths, &ConfigCommands::Show, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&shown).unwrap();
        assert_eq!(value["breathing"]["pattern"]["inhale"], 4);
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());

        config(&paths, &ConfigCommands::Init { force: false }, OutputFormat::Pretty).unwrap();
        let err = config(&paths, &ConfigCommands::Init { force: false }, OutputFormat::Pretty)
            .unwrap_err();
        assert!(matches!(err, MindfulError::Config(_)));

        config(&paths, &ConfigCommands::Init { force: true }, OutputFormat::Pretty).unwrap();
    }

    #[test]
    fn test_path() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().to_path_buf());
        let output = config(&paths, &ConfigCommands::Path, OutputFormat::Pretty).unwrap();
        assert!(output.ends_with("config.yaml"));
    }
}

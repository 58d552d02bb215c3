use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::debug;

use mindful::cli::args::{Cli, Commands};
use mindful::cli::commands;
use mindful::config::{Config, Paths};
use mindful::error::MindfulError;
use mindful::logging;
use mindful::tui::Tab;

/// Exit code for rejected input, matching clap's usage errors.
const EXIT_USAGE: i32 = 2;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        let user_error = e
            .downcast_ref::<MindfulError>()
            .is_some_and(MindfulError::is_user_error);
        std::process::exit(if user_error { EXIT_USAGE } else { 1 });
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let paths = Paths::new()?;
    let config = Config::load_from_path(&paths.config_file)?;
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);
    debug!(?format, config = %paths.config_file.display(), "starting");

    let output = match cli.command {
        Commands::Breathe(args) => commands::breathe(&config.breathing, &args, format)?,
        Commands::Mood => commands::companion(&config.breathing, Tab::Mood, format)?,
        Commands::Journal => commands::companion(&config.breathing, Tab::Journal, format)?,
        Commands::Gratitude => commands::companion(&config.breathing, Tab::Gratitude, format)?,
        Commands::Affirm { all } => commands::affirm(all, format)?,
        Commands::Resources => commands::resources(format)?,
        Commands::Config(args) => commands::config(&paths, &args.command, format)?,
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}

//! Album Renumber - dense time-ordered image renumbering
//!
//! A CLI tool that renames the images inside every subdirectory of a
//! root folder into a gap-free numeric sequence ordered by file
//! creation/modification time.

use album_renumber::{Cli, LOG_FILE_NAME, RenameStatus, Renamer};
use anyhow::Result;
use clap::Parser;
use tracing::{Level, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// CLI Output Module
mod cli_output {
    //! Styled console output for the run summary.

    use crossterm::{
        ExecutableCommand,
        style::{Color, Print, Stylize, style},
    };
    use std::io::stdout;

    /// CLI theme colors
    pub struct CliTheme;

    impl CliTheme {
        pub const SUCCESS: Color = Color::Green;
        pub const WARNING: Color = Color::Yellow;
        pub const ERROR: Color = Color::Red;
        pub const HINT: Color = Color::DarkGrey;
        pub const ACCENT: Color = Color::Cyan;
    }

    pub fn print_separator() {
        let _ = stdout().execute(Print(format!("{}\n", "─".repeat(60))));
    }

    pub fn print_title(title: &str) {
        let _ = stdout().execute(Print(format!("{}\n\n", style(title).bold())));
    }

    pub fn print_hint(msg: &str) {
        let _ = stdout().execute(Print(style("→ ").with(CliTheme::HINT)));
        let _ = stdout().execute(Print(format!("{}\n", msg)));
    }

    pub fn print_error(msg: &str) {
        let _ = stdout().execute(Print(style("✗ ").with(CliTheme::ERROR).bold()));
        let _ = stdout().execute(Print(format!("{}\n", msg)));
    }

    /// Print a key-value pair, value colored when a color is given
    pub fn print_key_value(key: &str, value: &str, value_color: Option<Color>) {
        let key_styled = style(key).with(CliTheme::HINT);
        let value_styled = match value_color {
            Some(color) => style(value).with(color),
            None => style(value).bold(),
        };
        let _ = stdout().execute(Print(format!("  {}: {}\n", key_styled, value_styled)));
    }

    /// Print a statistics line
    pub fn print_stat(key: &str, value: &str, color: Color) {
        let key_styled = style(key).with(CliTheme::HINT);
        let value_styled = style(value).with(color).bold();
        let _ = stdout().execute(Print(format!("  {}: {}\n", key_styled, value_styled)));
    }

    /// Print a per-file result line
    pub fn print_result(status_icon: &str, status_color: Color, source: &str, dest_or_msg: &str) {
        let icon_styled = style(status_icon).with(status_color).bold();
        let source_styled = style(source).italic();
        let msg_styled = style(dest_or_msg).with(CliTheme::HINT);
        let _ = stdout().execute(Print(format!(
            "  {} {} {}\n",
            icon_styled, source_styled, msg_styled
        )));
    }

    pub fn print_log_path(path: &str) {
        let _ = stdout().execute(Print(style("\n  Log file: ").with(CliTheme::HINT)));
        let _ = stdout().execute(Print(format!("{}\n", path)));
    }

    pub fn print_blank() {
        let _ = stdout().execute(Print("\n"));
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging before anything else touches the filesystem
    let _guard = setup_logging(&cli)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Album Renumber starting"
    );

    // Validate the root before processing
    if !cli.root.is_dir() {
        anyhow::bail!(
            "Root directory does not exist or is not a directory: {}",
            cli.root.display()
        );
    }

    let config = cli.to_config();
    if cli.verbose {
        info!(?config, "Configuration loaded");
    }
    info!(log_file = LOG_FILE_NAME, "Log file location");

    // Create and run the engine
    let mut renamer = Renamer::new(config);

    match renamer.run() {
        Ok(results) => {
            use cli_output::*;

            let stats = renamer.stats();

            // Print summary header
            print_separator();
            print_title("Renumbering complete");

            print_stat("Directories", &stats.directories.to_string(), CliTheme::ACCENT);
            print_stat("Renamed", &stats.renamed.to_string(), CliTheme::SUCCESS);
            print_stat("Skipped", &stats.skipped.to_string(), CliTheme::WARNING);
            print_stat("Failed", &stats.failed.to_string(), CliTheme::ERROR);
            print_blank();

            // Print detailed results if verbose
            if cli.verbose && !results.is_empty() {
                print_separator();
                print_hint("Detailed results");
                print_blank();

                for result in &results {
                    let source = result.source.display().to_string();
                    match result.status {
                        RenameStatus::Renamed => {
                            let dest = result
                                .destination
                                .as_ref()
                                .map(|p| p.display().to_string())
                                .unwrap_or_default();
                            print_result("✓", CliTheme::SUCCESS, &source, &format!("→ {}", dest));
                        }
                        RenameStatus::Skipped => {
                            print_result("⊘", CliTheme::WARNING, &source, "already numbered");
                        }
                        RenameStatus::Failed => {
                            let error_msg = result.error.as_deref().unwrap_or("unknown error");
                            print_result("✗", CliTheme::ERROR, &source, error_msg);
                        }
                    }
                }
            }

            // Report failed files summary
            let failed_items: Vec<_> = results
                .iter()
                .filter(|r| r.status == RenameStatus::Failed)
                .collect();

            if !failed_items.is_empty() {
                print_separator();
                print_error(&format!("Failed to process {} files", failed_items.len()));
                print_blank();
                for result in &failed_items {
                    print_key_value(
                        &result.source.display().to_string(),
                        result.error.as_deref().unwrap_or("unknown error"),
                        Some(CliTheme::ERROR),
                    );
                }
            }

            print_separator();
            print_log_path(LOG_FILE_NAME);

            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Renumbering failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Setup logging: append-mode file log plus a stderr layer
fn setup_logging(cli: &Cli) -> Result<WorkerGuard> {
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE_NAME)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(guard)
}

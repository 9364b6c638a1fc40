//! CLI argument parsing with clap

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Album Renumber - dense time-ordered image renumbering
///
/// Renames the images inside every subdirectory of the root folder into a
/// gap-free numeric sequence (1.jpg, 2.jpg, ...) ordered by file creation
/// time on Windows and modification time elsewhere. Missing numbers are
/// filled before new ones are appended, and every renamed file gets the
/// .jpg extension.
#[derive(Parser, Debug)]
#[command(name = "album-renumber")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Root directory whose subdirectories will be renumbered
    pub root: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Convert CLI arguments to Config
    pub fn to_config(&self) -> Config {
        Config {
            root_dir: self.root.clone(),
            verbose: self.verbose,
        }
    }
}

//! Configuration for the album renumberer
//!
//! The configurable surface is deliberately tiny: a root directory and a
//! verbosity switch. The recognized extensions, the canonical extension,
//! the slot origin and the log file name are fixed constants of the
//! design, not knobs.

use std::path::PathBuf;

/// Image extensions recognized during directory scans (lowercase)
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Extension every renamed file receives, regardless of its original one
pub const CANONICAL_EXTENSION: &str = "jpg";

/// Slot numbering starts here
pub const FIRST_SLOT: u64 = 1;

/// Fixed name of the append-mode diagnostics log in the working directory
pub const LOG_FILE_NAME: &str = "rename_images.log";

/// Configuration for a renumbering run
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory whose subdirectories are renumbered
    pub root_dir: PathBuf,

    /// Verbose output
    pub verbose: bool,
}

impl Config {
    /// Check if a file extension is a recognized image format
    pub fn is_image_extension(ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        IMAGE_EXTENSIONS.iter().any(|e| *e == ext_lower)
    }
}

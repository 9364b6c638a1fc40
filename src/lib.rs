//! Album Renumber - dense time-ordered image renumbering
//!
//! This library renames the images inside every subdirectory of a root
//! folder into a gap-free numeric sequence (1.jpg, 2.jpg, ...) with
//! support for:
//! - Time-ordered slot assignment (creation time on Windows,
//!   modification time elsewhere)
//! - Gap detection with smallest-first reuse before appending
//! - Extension normalization to a single canonical extension
//! - Per-file and per-directory failure isolation with persistent
//!   error logging

pub mod cli;
pub mod config;
pub mod error;
pub mod process;
pub mod scan;
pub mod slots;
pub mod time;

pub use cli::Cli;
pub use config::{CANONICAL_EXTENSION, Config, IMAGE_EXTENSIONS, LOG_FILE_NAME};
pub use error::{Error, Result};
pub use process::{FileResult, RenameStats, RenameStatus, Renamer};
pub use slots::SlotAllocator;
pub use time::TimestampSource;

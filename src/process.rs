//! The renumbering engine
//!
//! Walks every subdirectory of the root and renames the recognized images
//! in each into a dense numeric sequence. Each directory is an
//! independent flat scope: its images are ordered by timestamp, files
//! that already carry a slot are skipped, and every other image receives
//! the smallest missing slot (or the next one past the maximum) with the
//! canonical extension.
//!
//! Renaming is idempotent at the directory level: once all images are
//! numbered, a second run renames nothing. A run interrupted midway
//! leaves a valid partially-renumbered directory that the next run
//! resumes, because gaps are recomputed from the current state.

use crate::config::{CANONICAL_EXTENSION, Config};
use crate::error::{Error, Result};
use crate::scan::{self, FileClass};
use crate::slots::SlotAllocator;
use crate::time::TimestampSource;
use chrono::NaiveDateTime;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{Level, debug, error, info, span, warn};
use walkdir::WalkDir;

/// Result of processing a single file
#[derive(Debug, Clone)]
pub struct FileResult {
    /// Source file path
    pub source: PathBuf,
    /// Destination path (attempted or reached)
    pub destination: Option<PathBuf>,
    /// Ordering timestamp, when it could be read
    pub timestamp: Option<NaiveDateTime>,
    /// Processing status
    pub status: RenameStatus,
    /// Error message (if failed)
    pub error: Option<String>,
}

/// Status of a single file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameStatus {
    /// File received a slot and was renamed
    Renamed,
    /// File already carried its slot
    Skipped,
    /// Timestamp lookup or rename failed
    Failed,
}

/// Counters for one run
#[derive(Debug, Default, Clone)]
pub struct RenameStats {
    /// Directories processed to completion
    pub directories: usize,
    /// Directories abandoned on a listing error
    pub failed_directories: usize,
    pub renamed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RenameStats {
    pub fn summary(&self) -> String {
        format!(
            "Directories: {} ({} failed), Renamed: {}, Skipped: {}, Failed: {}",
            self.directories,
            self.failed_directories,
            self.renamed,
            self.skipped,
            self.failed
        )
    }
}

/// One recognized image inside a directory
struct ImageEntry {
    path: PathBuf,
    name: String,
    /// Occupied slot for numbered files, `None` for files needing one
    slot: Option<u64>,
    timestamp: NaiveDateTime,
}

/// Renumbering engine
pub struct Renamer {
    config: Config,
    timestamp_source: TimestampSource,
    stats: RenameStats,
}

impl Renamer {
    /// Create an engine using the platform's timestamp strategy
    pub fn new(config: Config) -> Self {
        Self::with_timestamp_source(config, TimestampSource::for_platform())
    }

    /// Create an engine with an explicit timestamp strategy
    pub fn with_timestamp_source(config: Config, timestamp_source: TimestampSource) -> Self {
        Self {
            config,
            timestamp_source,
            stats: RenameStats::default(),
        }
    }

    /// Run the renumbering pass over every subdirectory of the root.
    ///
    /// Directory-level failures are logged and do not abort the remaining
    /// directories.
    pub fn run(&mut self) -> Result<Vec<FileResult>> {
        let _span = span!(Level::INFO, "renumber_run").entered();

        info!(root = %self.config.root_dir.display(), "Scanning for directories");
        let directories = self.collect_directories();
        info!(count = directories.len(), "Found directories");

        let mut results = Vec::new();
        for dir in &directories {
            match self.rename_directory(dir) {
                Ok(mut dir_results) => {
                    self.stats.directories += 1;
                    results.append(&mut dir_results);
                }
                Err(e) => {
                    error!(directory = %dir.display(), error = %e, "Directory could not be processed");
                    self.stats.failed_directories += 1;
                }
            }
        }

        info!("{}", self.stats.summary());

        Ok(results)
    }

    /// Collect every descendant directory of the root, in sorted path
    /// order. The root itself is never a renumbering scope.
    fn collect_directories(&self) -> Vec<PathBuf> {
        let mut directories: Vec<PathBuf> = WalkDir::new(&self.config.root_dir)
            .min_depth(1)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_dir())
            .map(|entry| entry.path().to_path_buf())
            .collect();

        directories.sort();
        directories
    }

    /// Renumber the images directly inside one directory.
    fn rename_directory(&mut self, dir: &Path) -> Result<Vec<FileResult>> {
        let _span = span!(Level::DEBUG, "rename_directory", directory = %dir.display()).entered();
        debug!("Processing directory");

        let mut results = Vec::new();
        let mut images = Vec::new();
        let mut occupied = BTreeSet::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                debug!(name = ?file_name, "Skipping non-UTF-8 file name");
                continue;
            };

            let slot = match scan::classify(name) {
                FileClass::Other => continue,
                FileClass::Numbered(slot) => {
                    occupied.insert(slot);
                    Some(slot)
                }
                FileClass::Unnumbered => None,
            };

            // A file whose timestamp cannot be read is excluded from the
            // ordering; its slot (if any) stays occupied.
            let path = entry.path();
            match self.timestamp_source.ordering_timestamp(&path) {
                Ok(timestamp) => images.push(ImageEntry {
                    path,
                    name: name.to_string(),
                    slot,
                    timestamp,
                }),
                Err(e) => {
                    error!(path = %path.display(), error = %e, "Failed to read ordering timestamp");
                    self.stats.failed += 1;
                    results.push(FileResult {
                        source: path,
                        destination: None,
                        timestamp: None,
                        status: RenameStatus::Failed,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        // Timestamp order, ties broken by name so runs are deterministic
        images.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then_with(|| a.name.cmp(&b.name)));

        let mut allocator = SlotAllocator::from_occupied(&occupied);
        let missing = allocator.missing_slots();
        if !missing.is_empty() {
            debug!(?missing, "Filling gaps in the numbering");
        }

        for image in images {
            match image.slot {
                Some(slot) => {
                    debug!(path = %image.path.display(), slot, "Already numbered, skipping");
                    self.stats.skipped += 1;
                    results.push(FileResult {
                        source: image.path,
                        destination: None,
                        timestamp: Some(image.timestamp),
                        status: RenameStatus::Skipped,
                        error: None,
                    });
                }
                None => {
                    let slot = allocator.next_slot();
                    let destination = dir.join(format!("{slot}.{CANONICAL_EXTENSION}"));
                    match fs::rename(&image.path, &destination) {
                        Ok(()) => {
                            debug!(from = %image.path.display(), to = %destination.display(), "Renamed");
                            self.stats.renamed += 1;
                            results.push(FileResult {
                                source: image.path,
                                destination: Some(destination),
                                timestamp: Some(image.timestamp),
                                status: RenameStatus::Renamed,
                                error: None,
                            });
                        }
                        Err(e) => {
                            let err = Error::Rename {
                                from: image.path.clone(),
                                to: destination.clone(),
                                message: e.to_string(),
                            };
                            error!(error = %err, "Rename failed");
                            // The slot stays unoccupied; the next file takes it
                            allocator.release(slot);
                            self.stats.failed += 1;
                            results.push(FileResult {
                                source: image.path,
                                destination: Some(destination),
                                timestamp: Some(image.timestamp),
                                status: RenameStatus::Failed,
                                error: Some(err.to_string()),
                            });
                        }
                    }
                }
            }
        }

        Ok(results)
    }

    /// Get run statistics
    pub fn stats(&self) -> &RenameStats {
        &self.stats
    }
}

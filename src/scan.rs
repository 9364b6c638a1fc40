//! Filename classification
//!
//! Two patterns drive the whole tool: the strict numbered pattern
//! (`^\d+\.jpg$`, case-insensitive) that marks a file as already carrying
//! its slot, and the broader image pattern that recognizes the supported
//! extensions with an optional `!`-introduced trailing marker (download
//! variants like `photo.webp!thumb`).
//!
//! The strict pattern applies to the entire name: a `!`-suffixed file is
//! never considered numbered, even when its stem is numeric, and will be
//! renamed to a fresh slot with the marker stripped.

use crate::config::{CANONICAL_EXTENSION, IMAGE_EXTENSIONS};
use regex::Regex;
use std::sync::OnceLock;

/// Strict pattern for files that already carry a slot
static NUMBERED_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Broad pattern for recognized image files, `!`-suffix allowed
static IMAGE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn numbered_pattern() -> &'static Regex {
    NUMBERED_PATTERN.get_or_init(|| {
        Regex::new(&format!(r"(?i)^(\d+)\.{CANONICAL_EXTENSION}$")).unwrap()
    })
}

fn image_pattern() -> &'static Regex {
    IMAGE_PATTERN.get_or_init(|| {
        Regex::new(&format!(r"(?i)\.({})(!.*)?$", IMAGE_EXTENSIONS.join("|"))).unwrap()
    })
}

/// Classification of a directory entry by its file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClass {
    /// Already numbered; the integer is its occupied slot
    Numbered(u64),
    /// Recognized image that still needs a slot
    Unnumbered,
    /// Not an image, left alone
    Other,
}

/// Classify a file name.
///
/// A digit run too large for a slot fails strict parsing and demotes the
/// file to `Unnumbered`, so it gets renamed to a fresh slot instead of
/// poisoning the occupied set.
pub fn classify(name: &str) -> FileClass {
    if let Some(caps) = numbered_pattern().captures(name)
        && let Ok(slot) = caps[1].parse::<u64>()
    {
        return FileClass::Numbered(slot);
    }

    if image_pattern().is_match(name) {
        FileClass::Unnumbered
    } else {
        FileClass::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_names() {
        assert_eq!(classify("1.jpg"), FileClass::Numbered(1));
        assert_eq!(classify("42.jpg"), FileClass::Numbered(42));
        assert_eq!(classify("12.JPG"), FileClass::Numbered(12));
        assert_eq!(classify("007.jpg"), FileClass::Numbered(7));
    }

    #[test]
    fn test_unnumbered_images() {
        assert_eq!(classify("photo.png"), FileClass::Unnumbered);
        assert_eq!(classify("photo.JPeG"), FileClass::Unnumbered);
        assert_eq!(classify("animation.gif"), FileClass::Unnumbered);
        assert_eq!(classify("shot.webp"), FileClass::Unnumbered);
        // Canonical extension but not a bare integer stem
        assert_eq!(classify("12a.jpg"), FileClass::Unnumbered);
        assert_eq!(classify("12.jpeg"), FileClass::Unnumbered);
    }

    #[test]
    fn test_suffixed_names_are_unnumbered() {
        assert_eq!(classify("photo.webp!thumb"), FileClass::Unnumbered);
        assert_eq!(classify("photo.png!small"), FileClass::Unnumbered);
        // A marker demotes even a numbered-looking name
        assert_eq!(classify("5.jpg!large"), FileClass::Unnumbered);
        assert_eq!(classify("12.JPG!thumb"), FileClass::Unnumbered);
        assert_eq!(classify("a.jpg!"), FileClass::Unnumbered);
    }

    #[test]
    fn test_other_files() {
        assert_eq!(classify("notes.txt"), FileClass::Other);
        assert_eq!(classify("clip.mp4"), FileClass::Other);
        assert_eq!(classify("photo.jpg.bak"), FileClass::Other);
        assert_eq!(classify("jpg"), FileClass::Other);
        assert_eq!(classify(""), FileClass::Other);
    }

    #[test]
    fn test_oversized_digit_run_is_demoted() {
        // Does not fit in u64; still a recognized image
        let name = format!("{}.jpg", "9".repeat(25));
        assert_eq!(classify(&name), FileClass::Unnumbered);
    }
}

//! Persistence of the curated pattern block inside the git exclude file.
//!
//! The block is a delimited region embedded in `.git/info/exclude`. Whatever
//! the user keeps outside the region is preserved byte-for-byte; the region
//! itself is rewritten in full on every save and removed entirely when the
//! pattern set is empty.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::errors::{Error, Result};
use crate::domain::model::IgnorePattern;

pub const DEFAULT_START_MARKER: &str = "# Git Ignore Helper - Start";
pub const DEFAULT_END_MARKER: &str = "# Git Ignore Helper - End";

/// Reads and rewrites the delimited pattern region of an exclude file.
#[derive(Debug, Clone)]
pub struct ExcludeStore {
    path: PathBuf,
    start_marker: String,
    end_marker: String,
}

impl ExcludeStore {
    /// Create a store for the given exclude file with the default markers.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            start_marker: DEFAULT_START_MARKER.to_owned(),
            end_marker: DEFAULT_END_MARKER.to_owned(),
        }
    }

    /// Override the region marker lines.
    pub fn with_markers(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_marker = start.into();
        self.end_marker = end.into();
        self
    }

    /// Location of the exclude file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted pattern set.
    ///
    /// A missing file or a missing region yields an empty set. A start marker
    /// without a matching end marker is treated as "no region".
    pub fn load(&self) -> Result<Vec<IgnorePattern>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| Error::Io {
            action: "read",
            path: self.path.clone(),
            source,
        })?;

        let lines: Vec<&str> = content.split('\n').collect();
        let Some((start, end)) = self.find_region(&lines) else {
            return Ok(Vec::new());
        };

        let mut patterns = Vec::new();
        for line in &lines[start + 1..end] {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            patterns.push(IgnorePattern::from_line(trimmed));
        }
        Ok(patterns)
    }

    /// Rewrite the exclude file with the given pattern set.
    ///
    /// Content outside the region is carried over unchanged. The blank
    /// separator line the store writes before the start marker is stripped
    /// together with the region, so repeated saves do not accumulate blank
    /// lines.
    pub fn save(&self, patterns: &[IgnorePattern]) -> Result<()> {
        let existing = if self.path.exists() {
            fs::read_to_string(&self.path).map_err(|source| Error::Io {
                action: "read",
                path: self.path.clone(),
                source,
            })?
        } else {
            String::new()
        };

        let outside = self.strip_region(&existing);

        if patterns.is_empty() && outside.is_empty() && !self.path.exists() {
            return Ok(());
        }

        let mut out = outside;
        if !patterns.is_empty() {
            if !out.is_empty() {
                if !out.ends_with('\n') {
                    out.push('\n');
                }
                out.push('\n');
            }
            out.push_str(&self.start_marker);
            out.push('\n');
            for pattern in patterns {
                out.push_str(pattern.as_str());
                out.push('\n');
            }
            out.push_str(&self.end_marker);
            out.push('\n');
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                action: "create directory",
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, out).map_err(|source| Error::Io {
            action: "write",
            path: self.path.clone(),
            source,
        })
    }

    fn find_region(&self, lines: &[&str]) -> Option<(usize, usize)> {
        let start = lines
            .iter()
            .position(|line| line.trim() == self.start_marker)?;
        let end = lines[start + 1..]
            .iter()
            .position(|line| line.trim() == self.end_marker)
            .map(|offset| start + 1 + offset)?;
        Some((start, end))
    }

    fn strip_region(&self, content: &str) -> String {
        let lines: Vec<&str> = content.split('\n').collect();
        let Some((start, end)) = self.find_region(&lines) else {
            return content.to_owned();
        };

        // The separator blank line belongs to the region, not the user.
        let start = if start > 0 && lines[start - 1].trim().is_empty() {
            start - 1
        } else {
            start
        };

        let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
        kept.extend_from_slice(&lines[..start]);
        kept.extend_from_slice(&lines[end + 1..]);
        kept.join("\n")
    }
}

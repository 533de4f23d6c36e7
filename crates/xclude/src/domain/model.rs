//! Domain models for ignore patterns and working-tree status.

/// A single entry in the curated ignore set.
///
/// Patterns are workspace-relative paths using `/` separators. Directory
/// patterns carry a trailing `/` and cover everything beneath them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnorePattern(String);

impl IgnorePattern {
    /// Build a pattern from a workspace-relative path.
    pub fn from_relative(rel: &str, is_dir: bool) -> Self {
        let rel = rel.trim_end_matches('/');
        if is_dir {
            Self(format!("{rel}/"))
        } else {
            Self(rel.to_owned())
        }
    }

    /// Reconstruct a pattern exactly as it was persisted.
    pub fn from_line(line: &str) -> Self {
        Self(line.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_dir(&self) -> bool {
        self.0.ends_with('/')
    }

    /// The pattern's path without the directory marker.
    pub fn rel_path(&self) -> &str {
        self.0.trim_end_matches('/')
    }

    /// Whether a workspace-relative path is covered by this pattern.
    ///
    /// A file pattern covers only the exact path. A directory pattern covers
    /// the directory itself and any path beneath it, compared component-wise:
    /// `foo/` covers `foo/bar` but never `foobar/x`.
    pub fn covers(&self, rel: &str) -> bool {
        if self.is_dir() {
            rel == self.rel_path() || rel.starts_with(self.0.as_str())
        } else {
            rel == self.0
        }
    }
}

/// Category filter for bulk additions from the working-tree status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeScope {
    /// Every changed path: modified-family plus untracked.
    AllChanged,
    /// Tracked paths with pending changes only.
    ModifiedOnly,
    /// Untracked paths only.
    UntrackedOnly,
}

impl ChangeScope {
    pub fn accepts(self, class: StatusClass) -> bool {
        match self {
            Self::AllChanged => matches!(class, StatusClass::Modified | StatusClass::Untracked),
            Self::ModifiedOnly => class == StatusClass::Modified,
            Self::UntrackedOnly => class == StatusClass::Untracked,
        }
    }
}

/// One record of `git status --porcelain` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// Index-side status column.
    pub index: char,
    /// Worktree-side status column.
    pub worktree: char,
    /// Workspace-relative path (the post-rename path for rename records).
    pub path: String,
}

/// Classification of a two-character porcelain status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// Not present in the index (`??`).
    Untracked,
    /// Ignored by git's own ignore rules (`!!`).
    Ignored,
    /// No pending change in either column.
    Clean,
    /// Tracked with a pending change (M/A/D/R/C/T/U in either column).
    Modified,
}

impl StatusEntry {
    /// Exhaustive mapping from the porcelain code to a [`StatusClass`].
    pub fn class(&self) -> StatusClass {
        match (self.index, self.worktree) {
            ('?', '?') => StatusClass::Untracked,
            ('!', '!') => StatusClass::Ignored,
            (' ', ' ') => StatusClass::Clean,
            _ => StatusClass::Modified,
        }
    }
}

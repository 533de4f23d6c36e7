//! Git integration: workspace discovery, the version-control port, and the
//! CLI adapter that shells out to `git`.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::errors::{Error, Result};
use crate::domain::model::StatusEntry;

/// Narrow capability interface over the version-control tool.
///
/// All paths are workspace-relative. Implementations other than [`GitCli`]
/// exist only in tests, where a fake records invocations instead of spawning
/// processes.
pub trait VersionControlPort {
    /// List tracked files matching a pathspec, one relative path per entry.
    fn list_tracked(&self, pathspec: &str) -> Result<Vec<String>>;

    /// Current working-tree status records.
    fn status(&self) -> Result<Vec<StatusEntry>>;

    /// Toggle the skip-worktree marker on a tracked path.
    fn set_skip_worktree(&self, path: &str, skip: bool) -> Result<()>;

    /// Remove a path from the index without touching the worktree.
    fn unstage(&self, path: &str) -> Result<()>;
}

impl<P: VersionControlPort + ?Sized> VersionControlPort for std::sync::Arc<P> {
    fn list_tracked(&self, pathspec: &str) -> Result<Vec<String>> {
        (**self).list_tracked(pathspec)
    }

    fn status(&self) -> Result<Vec<StatusEntry>> {
        (**self).status()
    }

    fn set_skip_worktree(&self, path: &str, skip: bool) -> Result<()> {
        (**self).set_skip_worktree(path, skip)
    }

    fn unstage(&self, path: &str) -> Result<()> {
        (**self).unstage(path)
    }
}

/// Workspace coordinates resolved from a git repository.
#[derive(Debug, Clone)]
pub struct WorkspaceInfo {
    /// Root of the working tree.
    pub root: PathBuf,
    /// The repository's `info/exclude` file (inside the git dir, which also
    /// resolves correctly for linked worktrees).
    pub exclude_path: PathBuf,
}

/// Locate the enclosing git workspace starting from `start`.
pub fn discover_workspace(start: impl AsRef<Path>) -> Option<WorkspaceInfo> {
    let repo = gix::discover(start).ok()?;
    let root = repo
        .work_dir()
        .map(Path::to_path_buf)
        .or_else(|| repo.path().parent().map(Path::to_path_buf))?;
    let exclude_path = repo.path().join("info").join("exclude");
    Some(WorkspaceInfo { root, exclude_path })
}

/// Port implementation that spawns the configured git binary with the
/// workspace root as working directory.
///
/// Invocations run to completion with no timeout; a hanging git process
/// blocks the calling operation.
#[derive(Debug, Clone)]
pub struct GitCli {
    root: PathBuf,
    binary: String,
}

impl GitCli {
    pub fn new(root: impl Into<PathBuf>, binary: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            binary: binary.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let command = format!("{} {}", self.binary, args.join(" "));
        tracing::debug!(command = %command, "running git");

        let output = Command::new(&self.binary)
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|source| Error::GitSpawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::GitCommand {
                command,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| Error::GitOutputUtf8 { command })
    }
}

impl VersionControlPort for GitCli {
    fn list_tracked(&self, pathspec: &str) -> Result<Vec<String>> {
        let stdout = self.run(&["ls-files", "--", pathspec])?;
        Ok(stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(unquote_path)
            .collect())
    }

    fn status(&self) -> Result<Vec<StatusEntry>> {
        let stdout = self.run(&["status", "--porcelain"])?;
        Ok(parse_porcelain(&stdout))
    }

    fn set_skip_worktree(&self, path: &str, skip: bool) -> Result<()> {
        let flag = if skip {
            "--skip-worktree"
        } else {
            "--no-skip-worktree"
        };
        self.run(&["update-index", flag, "--", path]).map(|_| ())
    }

    fn unstage(&self, path: &str) -> Result<()> {
        self.run(&["reset", "-q", "HEAD", "--", path]).map(|_| ())
    }
}

/// Parse `git status --porcelain` output into status entries.
///
/// Each record is `XY <path>`; rename and copy records carry
/// `<old> -> <new>`, of which only the new path is kept. Paths containing
/// special characters arrive C-quoted and are unquoted here.
pub fn parse_porcelain(stdout: &str) -> Vec<StatusEntry> {
    let mut entries = Vec::new();
    for line in stdout.split('\n') {
        if line.trim().is_empty() || line.len() < 4 {
            continue;
        }

        let mut chars = line.chars();
        let index = chars.next().unwrap_or(' ');
        let worktree = chars.next().unwrap_or(' ');
        let Some(raw) = line.get(3..) else {
            continue;
        };

        // Rename/copy records: keep the path that exists in the worktree.
        let raw = raw.rsplit(" -> ").next().unwrap_or(raw);

        entries.push(StatusEntry {
            index,
            worktree,
            path: unquote_path(raw),
        });
    }
    entries
}

/// Undo git's C-style path quoting (`"a\303\251.txt"`, `"with\tTab"`).
fn unquote_path(raw: &str) -> String {
    let raw = raw.trim();
    if raw.len() < 2 || !raw.starts_with('"') || !raw.ends_with('"') {
        return raw.to_owned();
    }

    let inner = &raw[1..raw.len() - 1];
    let mut bytes: Vec<u8> = Vec::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            let mut buf = [0u8; 4];
            bytes.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        match chars.next() {
            Some('n') => bytes.push(b'\n'),
            Some('t') => bytes.push(b'\t'),
            Some('r') => bytes.push(b'\r'),
            Some('\\') => bytes.push(b'\\'),
            Some('"') => bytes.push(b'"'),
            Some(digit @ '0'..='7') => {
                let mut value = digit as u32 - '0' as u32;
                for _ in 0..2 {
                    match chars.peek() {
                        Some(next @ '0'..='7') => {
                            value = value * 8 + (*next as u32 - '0' as u32);
                            chars.next();
                        }
                        _ => break,
                    }
                }
                bytes.push(value as u8);
            }
            Some(other) => {
                let mut buf = [0u8; 4];
                bytes.extend_from_slice(other.encode_utf8(&mut buf).as_bytes());
            }
            None => break,
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

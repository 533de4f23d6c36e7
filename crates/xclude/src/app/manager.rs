//! The ignore-set manager: reconciles the in-memory pattern set, the
//! persisted exclude block, and the git index.

use std::path::{Component, Path, PathBuf};

use parking_lot::Mutex;

use crate::domain::errors::{Error, Result};
use crate::domain::model::{ChangeScope, IgnorePattern};
use crate::infra::exclude::ExcludeStore;
use crate::infra::git::VersionControlPort;

/// Outcome of a bulk operation. Per-path failures never abort the loop; they
/// are collected here for the caller to surface.
#[derive(Debug, Default)]
pub struct BulkReport {
    /// Paths whose reconciliation succeeded.
    pub applied: usize,
    /// Paths skipped because they were already in the set.
    pub skipped: usize,
    /// Paths whose reconciliation failed, with the failure.
    pub failures: Vec<(String, Error)>,
}

/// Tracks the curated ignore set for one workspace and keeps the exclude
/// file and the git index consistent with it.
///
/// Mutations take `&self`; the pattern set sits behind a mutex so a manager
/// shared between callers serializes its updates. A manager built without a
/// workspace rejects every mutation with [`Error::NoWorkspace`] and answers
/// queries with empty results.
pub struct IgnoreSetManager<P> {
    workspace: Option<Workspace<P>>,
}

struct Workspace<P> {
    root: PathBuf,
    store: ExcludeStore,
    port: P,
    patterns: Mutex<Vec<IgnorePattern>>,
}

impl<P: VersionControlPort> IgnoreSetManager<P> {
    /// Create a manager bound to a workspace, loading the persisted set.
    ///
    /// A load failure is logged and yields an empty set; the exclude file is
    /// rewritten from memory on the next mutation.
    pub fn new(root: impl Into<PathBuf>, store: ExcludeStore, port: P) -> Self {
        let patterns = match store.load() {
            Ok(patterns) => patterns,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load exclude file, starting empty");
                Vec::new()
            }
        };
        Self {
            workspace: Some(Workspace {
                root: root.into(),
                store,
                port,
                patterns: Mutex::new(patterns),
            }),
        }
    }

    /// Create a manager with no workspace.
    pub fn detached() -> Self {
        Self { workspace: None }
    }

    /// Root of the bound workspace, if any.
    pub fn root(&self) -> Option<&Path> {
        self.workspace.as_ref().map(|ws| ws.root.as_path())
    }

    fn workspace(&self) -> Result<&Workspace<P>> {
        self.workspace.as_ref().ok_or(Error::NoWorkspace)
    }

    /// Add a file or directory to the ignore set.
    ///
    /// Directories get a trailing `/` pattern and a skip-worktree marker on
    /// every tracked file beneath them; tracked files get the marker
    /// directly; untracked files are evicted from the index so they cannot
    /// reappear as staged. Reconciliation runs before the set is touched, so
    /// a failed marker toggle leaves the set unchanged. Re-adding an existing
    /// pattern re-runs reconciliation without duplicating it.
    pub fn add_path(&self, path: &Path) -> Result<()> {
        let ws = self.workspace()?;
        let rel = workspace_relative(&ws.root, path)?;
        let is_dir = ws.root.join(&rel).is_dir();
        let pattern = IgnorePattern::from_relative(&rel, is_dir);

        if is_dir {
            ws.toggle_dir(&rel, true)?;
        } else {
            ws.reconcile_added_file(&rel)?;
        }

        {
            let mut set = ws.patterns.lock();
            if !set.contains(&pattern) {
                set.push(pattern);
            }
        }
        ws.persist();
        Ok(())
    }

    /// Remove a file or directory from the ignore set, restoring index state.
    ///
    /// No-op when neither the file nor the directory form of the pattern is
    /// present. The set is updated and persisted even when a marker toggle
    /// fails; the failure is still returned.
    pub fn remove_path(&self, path: &Path) -> Result<()> {
        let ws = self.workspace()?;
        let rel = workspace_relative(&ws.root, path)?;
        let file_form = IgnorePattern::from_relative(&rel, false);
        let dir_form = IgnorePattern::from_relative(&rel, true);

        let mut had_dir_form = false;
        let removed = {
            let mut set = ws.patterns.lock();
            let before = set.len();
            set.retain(|pattern| {
                if *pattern == dir_form {
                    had_dir_form = true;
                    return false;
                }
                *pattern != file_form
            });
            set.len() != before
        };
        if !removed {
            return Ok(());
        }

        // The stored form decides directory handling when the path itself no
        // longer exists on disk.
        let result = if had_dir_form || ws.root.join(&rel).is_dir() {
            ws.toggle_dir(&rel, false)
        } else {
            ws.reconcile_removed_file(&rel)
        };
        ws.persist();
        result
    }

    /// Add every changed path matching `scope` to the ignore set.
    ///
    /// Applies the single-path add logic per entry, skipping entries already
    /// in the set. A failure on one path does not abort the rest.
    pub fn add_changed(&self, scope: ChangeScope) -> Result<BulkReport> {
        let ws = self.workspace()?;
        let entries = ws.port.status()?;

        let mut report = BulkReport::default();
        for entry in entries {
            if !scope.accepts(entry.class()) {
                continue;
            }

            let is_dir = entry.path.ends_with('/');
            let rel = entry.path.trim_end_matches('/').to_owned();
            let pattern = IgnorePattern::from_relative(&rel, is_dir);
            if ws.patterns.lock().contains(&pattern) {
                report.skipped += 1;
                continue;
            }

            let outcome = if is_dir {
                ws.toggle_dir(&rel, true)
            } else {
                ws.reconcile_added_file(&rel)
            };
            match outcome {
                Ok(()) => {
                    ws.patterns.lock().push(pattern);
                    report.applied += 1;
                }
                Err(err) => {
                    tracing::warn!(path = %rel, error = %err, "failed to ignore changed path");
                    report.failures.push((rel, err));
                }
            }
        }

        ws.persist();
        Ok(report)
    }

    /// Clear the whole set, restoring the skip-worktree marker best-effort.
    ///
    /// Per-pattern failures are collected; the set is emptied and persisted
    /// regardless.
    pub fn clear_all(&self) -> Result<BulkReport> {
        let ws = self.workspace()?;
        let snapshot: Vec<IgnorePattern> = ws.patterns.lock().clone();

        let mut report = BulkReport::default();
        for pattern in &snapshot {
            let rel = pattern.rel_path();
            let outcome = if pattern.is_dir() {
                ws.toggle_dir(rel, false)
            } else {
                ws.reconcile_removed_file(rel)
            };
            match outcome {
                Ok(()) => report.applied += 1,
                Err(err) => {
                    tracing::warn!(path = %rel, error = %err, "failed to restore index state");
                    report.failures.push((rel.to_owned(), err));
                }
            }
        }

        ws.patterns.lock().clear();
        ws.persist();
        Ok(report)
    }

    /// Whether a path is covered by the ignore set. Never fails: an unbound
    /// manager or a path outside the workspace answers `false`.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let Some(ws) = self.workspace.as_ref() else {
            return false;
        };
        let Ok(rel) = workspace_relative(&ws.root, path) else {
            return false;
        };
        ws.patterns.lock().iter().any(|pattern| pattern.covers(&rel))
    }

    /// Ordered snapshot of the pattern set. Never fails.
    pub fn ignored_patterns(&self) -> Vec<String> {
        match self.workspace.as_ref() {
            Some(ws) => ws
                .patterns
                .lock()
                .iter()
                .map(|pattern| pattern.as_str().to_owned())
                .collect(),
            None => Vec::new(),
        }
    }
}

impl<P: VersionControlPort> Workspace<P> {
    /// Tracked means the index lists the path; any port error counts as
    /// untracked, since an error is the tool's normal signal for "not found
    /// in index".
    fn is_tracked(&self, rel: &str) -> bool {
        match self.port.list_tracked(rel) {
            Ok(listed) => !listed.is_empty(),
            Err(err) => {
                tracing::debug!(path = %rel, error = %err, "classification failed, treating as untracked");
                false
            }
        }
    }

    fn reconcile_added_file(&self, rel: &str) -> Result<()> {
        if self.is_tracked(rel) {
            self.port.set_skip_worktree(rel, true)
        } else {
            // Eviction failures are non-fatal: the file stays ignored either way.
            if let Err(err) = self.port.unstage(rel) {
                tracing::warn!(path = %rel, error = %err, "failed to remove path from index");
            }
            Ok(())
        }
    }

    fn reconcile_removed_file(&self, rel: &str) -> Result<()> {
        if self.is_tracked(rel) {
            self.port.set_skip_worktree(rel, false)
        } else {
            Ok(())
        }
    }

    /// Toggle the marker on every tracked file beneath a directory. An empty
    /// listing (brand-new directory) is not an error.
    fn toggle_dir(&self, rel: &str, skip: bool) -> Result<()> {
        let descendants = match self.port.list_tracked(&format!("{rel}/*")) {
            Ok(descendants) => descendants,
            Err(err) => {
                tracing::debug!(path = %rel, error = %err, "no tracked files under directory");
                return Ok(());
            }
        };
        for tracked in descendants {
            self.port.set_skip_worktree(&tracked, skip)?;
        }
        Ok(())
    }

    /// Write the set back to the exclude file. Save failures are non-fatal:
    /// the in-memory set stays authoritative for the session.
    fn persist(&self) {
        let snapshot = self.patterns.lock().clone();
        if let Err(err) = self.store.save(&snapshot) {
            tracing::warn!(
                path = %self.store.path().display(),
                error = %err,
                "failed to save exclude file; in-memory set unchanged"
            );
        }
    }
}

/// Normalize a path to its workspace-relative, `/`-separated form.
///
/// Absolute paths must live under the root; `..` components may not escape
/// it.
fn workspace_relative(root: &Path, path: &Path) -> Result<String> {
    let rel = if path.is_absolute() {
        path.strip_prefix(root)
            .map_err(|_| Error::OutsideWorkspace {
                path: path.to_path_buf(),
            })?
            .to_path_buf()
    } else {
        path.to_path_buf()
    };

    let mut parts: Vec<String> = Vec::new();
    for component in rel.components() {
        match component {
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::CurDir => {}
            Component::ParentDir => {
                if parts.pop().is_none() {
                    return Err(Error::OutsideWorkspace {
                        path: path.to_path_buf(),
                    });
                }
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(Error::OutsideWorkspace {
                    path: path.to_path_buf(),
                });
            }
        }
    }

    if parts.is_empty() {
        return Err(Error::OutsideWorkspace {
            path: path.to_path_buf(),
        });
    }
    Ok(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::sync::Arc;

    use crate::domain::model::StatusEntry;

    #[derive(Default)]
    struct FakePort {
        tracked: Vec<String>,
        status: Vec<StatusEntry>,
        fail_skip_for: Vec<String>,
        fail_list: bool,
        skip_calls: Mutex<Vec<(String, bool)>>,
        unstage_calls: Mutex<Vec<String>>,
    }

    impl FakePort {
        fn with_tracked(tracked: &[&str]) -> Self {
            Self {
                tracked: tracked.iter().map(|s| s.to_string()).collect(),
                ..Self::default()
            }
        }

        fn injected_failure(what: &str) -> Error {
            Error::GitSpawn {
                command: what.to_owned(),
                source: std::io::Error::other("injected failure"),
            }
        }
    }

    impl VersionControlPort for FakePort {
        fn list_tracked(&self, pathspec: &str) -> Result<Vec<String>> {
            if self.fail_list {
                return Err(Self::injected_failure("ls-files"));
            }
            let matches: Vec<String> = match pathspec.strip_suffix("/*") {
                Some(dir) => self
                    .tracked
                    .iter()
                    .filter(|t| t.starts_with(&format!("{dir}/")))
                    .cloned()
                    .collect(),
                None => self
                    .tracked
                    .iter()
                    .filter(|t| t.as_str() == pathspec)
                    .cloned()
                    .collect(),
            };
            Ok(matches)
        }

        fn status(&self) -> Result<Vec<StatusEntry>> {
            Ok(self.status.clone())
        }

        fn set_skip_worktree(&self, path: &str, skip: bool) -> Result<()> {
            if self.fail_skip_for.iter().any(|p| p == path) {
                return Err(Self::injected_failure("update-index"));
            }
            self.skip_calls.lock().push((path.to_owned(), skip));
            Ok(())
        }

        fn unstage(&self, path: &str) -> Result<()> {
            self.unstage_calls.lock().push(path.to_owned());
            Ok(())
        }
    }

    struct Fixture {
        _dir: tempfile::TempDir,
        root: PathBuf,
        port: Arc<FakePort>,
        manager: IgnoreSetManager<Arc<FakePort>>,
    }

    fn fixture(port: FakePort) -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();
        let store = ExcludeStore::new(root.join(".git/info/exclude"));
        let port = Arc::new(port);
        let manager = IgnoreSetManager::new(root.clone(), store, port.clone());
        Fixture {
            _dir: dir,
            root,
            port,
            manager,
        }
    }

    fn exclude_content(root: &Path) -> String {
        fs::read_to_string(root.join(".git/info/exclude")).unwrap_or_default()
    }

    #[test]
    fn adding_a_tracked_file_sets_the_skip_marker_and_persists() {
        let fx = fixture(FakePort::with_tracked(&["a.txt"]));

        fx.manager.add_path(Path::new("a.txt")).unwrap();

        assert_eq!(fx.manager.ignored_patterns(), vec!["a.txt"]);
        assert_eq!(
            fx.port.skip_calls.lock().as_slice(),
            &[("a.txt".to_owned(), true)]
        );
        assert!(exclude_content(&fx.root).contains("a.txt"));
    }

    #[test]
    fn adding_an_untracked_file_evicts_it_from_the_index() {
        let fx = fixture(FakePort::default());

        fx.manager.add_path(Path::new("notes.md")).unwrap();

        assert_eq!(fx.manager.ignored_patterns(), vec!["notes.md"]);
        assert!(fx.port.skip_calls.lock().is_empty());
        assert_eq!(fx.port.unstage_calls.lock().as_slice(), &["notes.md".to_owned()]);
    }

    #[test]
    fn adding_twice_is_idempotent_for_the_pattern_set() {
        let fx = fixture(FakePort::with_tracked(&["a.txt"]));

        fx.manager.add_path(Path::new("a.txt")).unwrap();
        fx.manager.add_path(Path::new("a.txt")).unwrap();

        assert_eq!(fx.manager.ignored_patterns(), vec!["a.txt"]);
        // Reconciliation still ran both times; repeating it is safe.
        assert_eq!(fx.port.skip_calls.lock().len(), 2);
    }

    #[test]
    fn adding_a_directory_marks_every_tracked_descendant() {
        let fx = fixture(FakePort::with_tracked(&["src/lib.rs", "src/deep/util.rs", "other.rs"]));
        fs::create_dir_all(fx.root.join("src/deep")).unwrap();

        fx.manager.add_path(&fx.root.join("src")).unwrap();

        assert_eq!(fx.manager.ignored_patterns(), vec!["src/"]);
        let calls = fx.port.skip_calls.lock();
        assert!(calls.contains(&("src/lib.rs".to_owned(), true)));
        assert!(calls.contains(&("src/deep/util.rs".to_owned(), true)));
        assert_eq!(calls.len(), 2);
    }

    #[test]
    fn directory_patterns_cover_descendants_but_not_siblings() {
        let fx = fixture(FakePort::default());
        fs::create_dir_all(fx.root.join("src")).unwrap();

        fx.manager.add_path(Path::new("src")).unwrap();

        assert!(fx.manager.is_ignored(&fx.root.join("src/index.ts")));
        assert!(!fx.manager.is_ignored(&fx.root.join("srcOther/index.ts")));
    }

    #[test]
    fn failed_marker_toggle_leaves_the_set_unchanged() {
        let mut port = FakePort::with_tracked(&["a.txt"]);
        port.fail_skip_for = vec!["a.txt".to_owned()];
        let fx = fixture(port);

        assert!(fx.manager.add_path(Path::new("a.txt")).is_err());
        assert!(fx.manager.ignored_patterns().is_empty());
        assert_eq!(exclude_content(&fx.root), "");
    }

    #[test]
    fn remove_restores_a_tracked_file_and_the_exclude_file() {
        let fx = fixture(FakePort::with_tracked(&["a.txt"]));

        fx.manager.add_path(Path::new("a.txt")).unwrap();
        fx.manager.remove_path(Path::new("a.txt")).unwrap();

        assert!(fx.manager.ignored_patterns().is_empty());
        assert_eq!(
            fx.port.skip_calls.lock().as_slice(),
            &[("a.txt".to_owned(), true), ("a.txt".to_owned(), false)]
        );
        assert!(!exclude_content(&fx.root).contains("a.txt"));
    }

    #[test]
    fn remove_of_an_absent_path_is_a_noop() {
        let fx = fixture(FakePort::with_tracked(&["a.txt"]));

        fx.manager.remove_path(Path::new("a.txt")).unwrap();

        assert!(fx.port.skip_calls.lock().is_empty());
    }

    #[test]
    fn remove_uses_the_stored_directory_form_when_the_path_is_gone() {
        let fx = fixture(FakePort::with_tracked(&["gone/b.txt"]));
        fs::create_dir_all(fx.root.join("gone")).unwrap();
        fx.manager.add_path(Path::new("gone")).unwrap();
        fs::remove_dir_all(fx.root.join("gone")).unwrap();

        fx.manager.remove_path(Path::new("gone")).unwrap();

        assert!(fx.manager.ignored_patterns().is_empty());
        assert!(
            fx.port
                .skip_calls
                .lock()
                .contains(&("gone/b.txt".to_owned(), false))
        );
    }

    #[test]
    fn add_changed_filters_by_scope_and_tolerates_partial_failure() {
        let entry = |index, worktree, path: &str| StatusEntry {
            index,
            worktree,
            path: path.to_owned(),
        };
        let mut port = FakePort::with_tracked(&["one.rs", "two.rs", "three.rs"]);
        port.status = vec![
            entry(' ', 'M', "one.rs"),
            entry('M', ' ', "two.rs"),
            entry(' ', 'M', "three.rs"),
            entry('?', '?', "untracked.md"),
        ];
        port.fail_skip_for = vec!["two.rs".to_owned()];
        let fx = fixture(port);

        let report = fx.manager.add_changed(ChangeScope::ModifiedOnly).unwrap();

        assert_eq!(report.applied, 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, "two.rs");
        assert_eq!(fx.manager.ignored_patterns(), vec!["one.rs", "three.rs"]);
        let persisted = exclude_content(&fx.root);
        assert!(persisted.contains("one.rs"));
        assert!(persisted.contains("three.rs"));
        assert!(!persisted.contains("two.rs"));
        assert!(!persisted.contains("untracked.md"));
    }

    #[test]
    fn add_changed_untracked_scope_takes_only_untracked_entries() {
        let entry = |index, worktree, path: &str| StatusEntry {
            index,
            worktree,
            path: path.to_owned(),
        };
        let mut port = FakePort::with_tracked(&["one.rs"]);
        port.status = vec![
            entry(' ', 'M', "one.rs"),
            entry('?', '?', "notes.md"),
            entry('?', '?', "newdir/"),
        ];
        let fx = fixture(port);

        let report = fx.manager.add_changed(ChangeScope::UntrackedOnly).unwrap();

        assert_eq!(report.applied, 2);
        assert_eq!(fx.manager.ignored_patterns(), vec!["notes.md", "newdir/"]);
        assert_eq!(
            fx.port.unstage_calls.lock().as_slice(),
            &["notes.md".to_owned()]
        );
    }

    #[test]
    fn add_changed_skips_entries_already_in_the_set() {
        let entry = |index, worktree, path: &str| StatusEntry {
            index,
            worktree,
            path: path.to_owned(),
        };
        let mut port = FakePort::with_tracked(&["one.rs"]);
        port.status = vec![entry(' ', 'M', "one.rs")];
        let fx = fixture(port);

        fx.manager.add_path(Path::new("one.rs")).unwrap();
        let report = fx.manager.add_changed(ChangeScope::AllChanged).unwrap();

        assert_eq!(report.applied, 0);
        assert_eq!(report.skipped, 1);
        assert_eq!(fx.manager.ignored_patterns(), vec!["one.rs"]);
    }

    #[test]
    fn clear_all_restores_files_and_directories_and_empties_the_region() {
        let fx = fixture(FakePort::with_tracked(&["a.txt", "dir/b.txt"]));
        fs::create_dir_all(fx.root.join("dir")).unwrap();

        fx.manager.add_path(Path::new("a.txt")).unwrap();
        fx.manager.add_path(Path::new("dir")).unwrap();
        let report = fx.manager.clear_all().unwrap();

        assert_eq!(report.applied, 2);
        assert!(report.failures.is_empty());
        assert!(fx.manager.ignored_patterns().is_empty());
        let calls = fx.port.skip_calls.lock();
        assert!(calls.contains(&("a.txt".to_owned(), false)));
        assert!(calls.contains(&("dir/b.txt".to_owned(), false)));
        assert_eq!(exclude_content(&fx.root), "");
    }

    #[test]
    fn clear_all_continues_past_per_pattern_failures() {
        let mut port = FakePort::with_tracked(&["a.txt", "b.txt"]);
        port.fail_skip_for = vec!["a.txt".to_owned()];
        let fx = fixture(port);
        {
            // Seed the set without triggering the injected failure.
            let ws = fx.manager.workspace().unwrap();
            let mut set = ws.patterns.lock();
            set.push(IgnorePattern::from_line("a.txt"));
            set.push(IgnorePattern::from_line("b.txt"));
        }

        let report = fx.manager.clear_all().unwrap();

        assert_eq!(report.applied, 1);
        assert_eq!(report.failures.len(), 1);
        assert!(fx.manager.ignored_patterns().is_empty());
        assert!(
            fx.port
                .skip_calls
                .lock()
                .contains(&("b.txt".to_owned(), false))
        );
    }

    #[test]
    fn detached_manager_rejects_mutations_and_answers_queries_empty() {
        let manager: IgnoreSetManager<FakePort> = IgnoreSetManager::detached();

        assert!(matches!(
            manager.add_path(Path::new("a.txt")),
            Err(Error::NoWorkspace)
        ));
        assert!(matches!(
            manager.clear_all(),
            Err(Error::NoWorkspace)
        ));
        assert!(!manager.is_ignored(Path::new("a.txt")));
        assert!(manager.ignored_patterns().is_empty());
    }

    #[test]
    fn paths_outside_the_workspace_are_rejected() {
        let fx = fixture(FakePort::default());

        assert!(matches!(
            fx.manager.add_path(Path::new("/elsewhere/file.txt")),
            Err(Error::OutsideWorkspace { .. })
        ));
        assert!(matches!(
            fx.manager.add_path(Path::new("../escape.txt")),
            Err(Error::OutsideWorkspace { .. })
        ));
    }

    #[test]
    fn construction_loads_the_persisted_set() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_path_buf();
        let store = ExcludeStore::new(root.join(".git/info/exclude"));
        store
            .save(&[
                IgnorePattern::from_line("a.txt"),
                IgnorePattern::from_line("dir/"),
            ])
            .unwrap();

        let manager = IgnoreSetManager::new(root, store, Arc::new(FakePort::default()));
        assert_eq!(manager.ignored_patterns(), vec!["a.txt", "dir/"]);
    }

    #[test]
    fn classification_errors_fall_back_to_untracked() {
        let mut port = FakePort::default();
        port.fail_list = true;
        let fx = fixture(port);

        // list_tracked fails, so the path is treated as untracked and evicted.
        fx.manager.add_path(Path::new("a.txt")).unwrap();
        assert_eq!(fx.manager.ignored_patterns(), vec!["a.txt"]);
        assert_eq!(fx.port.unstage_calls.lock().as_slice(), &["a.txt".to_owned()]);
    }

    #[test]
    fn workspace_relative_normalizes_separators_and_dots() {
        let root = Path::new("/repo");
        assert_eq!(
            workspace_relative(root, Path::new("/repo/src/lib.rs")).unwrap(),
            "src/lib.rs"
        );
        assert_eq!(
            workspace_relative(root, Path::new("src/./lib.rs")).unwrap(),
            "src/lib.rs"
        );
        assert_eq!(
            workspace_relative(root, Path::new("src/sub/../lib.rs")).unwrap(),
            "src/lib.rs"
        );
        assert!(workspace_relative(root, Path::new("/other/file")).is_err());
        assert!(workspace_relative(root, Path::new("..")).is_err());
    }
}

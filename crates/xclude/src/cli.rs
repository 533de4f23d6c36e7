//! Command-line surface calling into the ignore-set core.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::app::manager::{BulkReport, IgnoreSetManager};
use crate::domain::model::ChangeScope;
use crate::infra::config::Config;
use crate::infra::exclude::ExcludeStore;
use crate::infra::git::{self, GitCli};

#[derive(Parser)]
#[command(
    name = "xclude",
    version,
    about = "Locally exclude files from git change detection",
    long_about = None
)]
pub struct Cli {
    /// Workspace root (defaults to discovering the enclosing repository).
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add files or directories to the local ignore set
    Add {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Remove entries from the set and restore their index state
    Remove {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Add every changed path reported by git status
    AddChanged {
        #[arg(long, value_enum, default_value = "all")]
        scope: Scope,
    },
    /// Clear the whole ignore set
    Clear,
    /// Print the ignore set in order
    List {
        #[arg(long)]
        json: bool,
    },
    /// Check whether a path is ignored (exits non-zero when it is not)
    Check { path: PathBuf },
    /// Generate a shell completion script
    Completions { shell: Shell },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scope {
    All,
    Modified,
    Untracked,
}

impl From<Scope> for ChangeScope {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::All => ChangeScope::AllChanged,
            Scope::Modified => ChangeScope::ModifiedOnly,
            Scope::Untracked => ChangeScope::UntrackedOnly,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut command = Cli::command();
        clap_complete::generate(*shell, &mut command, "xclude", &mut io::stdout());
        return Ok(());
    }

    let manager = build_manager(cli.root.as_deref())?;

    match cli.command {
        Commands::Add { paths } => {
            for_each_path(paths, "add", |path| Ok(manager.add_path(path)?))
        }
        Commands::Remove { paths } => {
            for_each_path(paths, "remove", |path| Ok(manager.remove_path(path)?))
        }
        Commands::AddChanged { scope } => {
            let report = manager.add_changed(scope.into())?;
            print_report("added", &report);
            Ok(())
        }
        Commands::Clear => {
            let report = manager.clear_all()?;
            print_report("restored", &report);
            Ok(())
        }
        Commands::List { json } => {
            let patterns = manager.ignored_patterns();
            if json {
                println!("{}", serde_json::to_string_pretty(&patterns)?);
            } else {
                for pattern in patterns {
                    println!("{pattern}");
                }
            }
            Ok(())
        }
        Commands::Check { path } => {
            let ignored = manager.is_ignored(&absolutize(&path)?);
            println!("{ignored}");
            if !ignored {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Completions { .. } => unreachable!("handled above"),
    }
}

fn build_manager(root_override: Option<&Path>) -> Result<IgnoreSetManager<GitCli>> {
    let start = match root_override {
        Some(root) => root.to_path_buf(),
        None => env::current_dir().context("failed to resolve current directory")?,
    };
    let Some(info) = git::discover_workspace(&start) else {
        bail!("no git workspace found at {}", start.display());
    };

    let config = Config::load(Some(&info.root))?;
    let exclude_path = config.exclude_path(&info.root, &info.exclude_path);
    let store = ExcludeStore::new(exclude_path)
        .with_markers(config.markers.start.clone(), config.markers.end.clone());
    let port = GitCli::new(info.root.clone(), config.git.binary.clone());
    Ok(IgnoreSetManager::new(info.root, store, port))
}

fn for_each_path(
    paths: Vec<PathBuf>,
    action: &str,
    mut apply: impl FnMut(&Path) -> Result<()>,
) -> Result<()> {
    let mut failed = 0usize;
    for path in &paths {
        let abs = absolutize(path)?;
        if let Err(err) = apply(&abs) {
            eprintln!("warning: failed to {action} {}: {err:#}", path.display());
            failed += 1;
        }
    }
    if failed > 0 {
        bail!("{failed} of {} path(s) failed", paths.len());
    }
    Ok(())
}

fn print_report(verb: &str, report: &BulkReport) {
    println!("{} {} path(s), {} skipped", verb, report.applied, report.skipped);
    for (path, err) in &report.failures {
        eprintln!("warning: {path}: {err}");
    }
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()
            .context("failed to resolve current directory")?
            .join(path))
    }
}

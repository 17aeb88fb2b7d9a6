//! Git queries that feed version resolution.
//!
//! Version numbers are derived from the local repository state, so the
//! only Git operations needed are counting commits and checking whether
//! the working tree is dirty. Both go through the `GitOperations` trait
//! so version resolution can be tested without a real repository.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};

/// Queries the local Git repository for version inputs.
///
/// The default implementation shells out to the system `git` command,
/// which keeps repository discovery, worktree handling, and user config
/// identical to what the developer sees on the command line.
pub trait GitOperations {
    /// Counts the commits reachable from `HEAD`.
    fn commit_count(&self) -> Result<u64>;

    /// Reports whether the working tree has uncommitted changes.
    ///
    /// Untracked files count as changes, matching `git status --porcelain`.
    fn is_dirty(&self) -> Result<bool>;
}

/// `GitOperations` implementation backed by the system git command
pub struct DefaultGitOperations {
    root: PathBuf,
}

impl DefaultGitOperations {
    /// Creates git operations that run inside the given project root.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| Error::GitCommand {
                command: args.join(" "),
                stderr: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::GitCommand {
                command: args.join(" "),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl GitOperations for DefaultGitOperations {
    fn commit_count(&self) -> Result<u64> {
        let stdout = self.run(&["rev-list", "--count", "HEAD"])?;
        let trimmed = stdout.trim();
        trimmed.parse().map_err(|_| Error::GitCommand {
            command: "rev-list --count HEAD".to_string(),
            stderr: format!("unexpected output: {}", trimmed),
        })
    }

    fn is_dirty(&self) -> Result<bool> {
        let stdout = self.run(&["status", "--porcelain"])?;
        Ok(!stdout.trim().is_empty())
    }
}

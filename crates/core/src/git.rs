//! Git operations using command-line git
//!
//! Uses command-line git to avoid dependency issues with git2/libgit2.
//! This is the staged-file enumerator: the scanner only ever sees the
//! path list produced here.

use crate::error::{Error, Result};
use crate::process::run_command_in_dir;
use std::path::{Path, PathBuf};

/// Git repository wrapper
#[derive(Debug)]
pub struct GitRepo {
    workdir: PathBuf,
}

impl GitRepo {
    /// Open a git repository at the given path
    pub fn open(path: &Path) -> Result<Self> {
        // Verify it's a git repo
        let result = run_command_in_dir("git", &["rev-parse", "--git-dir"], path)?;
        if !result.success {
            return Err(Error::not_a_git_repo());
        }

        // Get the working directory root
        let result = run_command_in_dir("git", &["rev-parse", "--show-toplevel"], path)?;
        let workdir = PathBuf::from(result.stdout.trim());

        Ok(Self { workdir })
    }

    /// Open the repository in the current directory
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        Self::open(&current_dir)
    }

    /// Get the repository working directory
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Get staged files relative to the repository root
    ///
    /// Filters to Added/Copied/Modified/Renamed entries; deleted files
    /// are excluded since there is no content left to scan. An empty
    /// result means nothing is staged and is not an error.
    pub fn staged_files(&self) -> Result<Vec<PathBuf>> {
        let result = run_command_in_dir(
            "git",
            &["diff", "--cached", "--name-only", "--diff-filter=ACMR"],
            &self.workdir,
        )?;

        if !result.success {
            return Err(Error::git(format!(
                "Failed to list staged files: {}",
                result.stderr.trim()
            )));
        }

        Ok(result
            .stdout
            .lines()
            .filter(|l| !l.is_empty())
            .map(PathBuf::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;
    use tempfile::TempDir;

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git").args(args).current_dir(dir).status().unwrap();
        assert!(status.success(), "git {:?} failed", args);
    }

    fn init_repo(dir: &Path) {
        git(dir, &["init", "-q"]);
        git(dir, &["config", "user.email", "test@example.com"]);
        git(dir, &["config", "user.name", "Test"]);
        git(dir, &["commit", "-q", "--allow-empty", "-m", "init"]);
    }

    #[test]
    fn test_open_non_repo_fails() {
        let tmp = TempDir::new().unwrap();
        let err = GitRepo::open(tmp.path()).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::NotAGitRepo);
    }

    #[test]
    fn test_staged_files_empty_repo() {
        let tmp = TempDir::new().unwrap();
        init_repo(tmp.path());
        let repo = GitRepo::open(tmp.path()).unwrap();
        assert!(repo.staged_files().unwrap().is_empty());
    }

    #[test]
    fn test_staged_files_excludes_deleted() {
        let tmp = TempDir::new().unwrap();
        init_repo(tmp.path());

        std::fs::write(tmp.path().join("keep.txt"), "keep\n").unwrap();
        std::fs::write(tmp.path().join("gone.txt"), "gone\n").unwrap();
        git(tmp.path(), &["add", "."]);
        git(tmp.path(), &["commit", "-q", "-m", "seed"]);

        std::fs::write(tmp.path().join("new.txt"), "new\n").unwrap();
        git(tmp.path(), &["add", "new.txt"]);
        git(tmp.path(), &["rm", "-q", "gone.txt"]);

        let repo = GitRepo::open(tmp.path()).unwrap();
        let staged = repo.staged_files().unwrap();
        assert_eq!(staged, vec![PathBuf::from("new.txt")]);
    }

    #[test]
    fn test_open_finds_root_from_subdirectory() {
        let tmp = TempDir::new().unwrap();
        init_repo(tmp.path());
        let sub = tmp.path().join("app");
        std::fs::create_dir(&sub).unwrap();

        let repo = GitRepo::open(&sub).unwrap();
        assert_eq!(
            repo.workdir().canonicalize().unwrap(),
            tmp.path().canonicalize().unwrap()
        );
    }
}

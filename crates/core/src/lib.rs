//! Core utilities for the secretgate pre-commit gate
//!
//! This crate provides the plumbing shared by the scanner and the CLI:
//!
//! - **Error handling**: structured errors with codes, context, and recovery suggestions
//! - **Git operations**: staged-file enumeration using command-line git
//! - **Process execution**: safe command execution with captured output
//! - **Configuration**: optional TOML configuration with serde validation
//!
//! # Example
//!
//! ```rust,no_run
//! use secretgate_core::git::GitRepo;
//!
//! let repo = GitRepo::open_current().expect("Not a git repo");
//! let staged = repo.staged_files().expect("Failed to get staged files");
//! println!("{} file(s) staged", staged.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod git;
pub mod process;

pub use error::{Error, ErrorCode, Result, ResultExt};

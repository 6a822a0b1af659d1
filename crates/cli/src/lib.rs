//! CLI utilities for the secretgate pre-commit gate
//!
//! Terminal output formatting shared by the gate executable.

#![warn(missing_docs)]

pub mod output;

//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `addon-packer` application. It uses the `thiserror` library to create a
//! comprehensive `Error` enum that covers all anticipated failure modes,
//! providing clear and descriptive error messages.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum that represents all possible errors that can
//!   occur within the application. Each variant corresponds to a specific
//!   type of error and includes contextual information to aid in debugging.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`, used
//!   throughout the application to simplify function signatures and ensure
//!   type safety.
//!
//! The `Error` enum covers:
//!
//! - Configuration parsing errors.
//! - Git command execution failures.
//! - Dev-build counter persistence errors.
//! - Manifest patching errors.
//! - Filesystem operations.
//! - I/O errors.
//! - JSON parsing errors.
//! - Zip archive errors.
//! - Glob pattern errors.
//! - Regex errors.
//!
//! Not every failure is fatal to a build: manifest patching errors are
//! caught at the archive stage, where the unpatched file is carried into
//! the archive unchanged instead of aborting the build.

use thiserror::Error;

/// Main error type for addon-packer operations
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while parsing the `.addon-packer.yaml` configuration file.
    ///
    /// This error includes the specific parsing issue and optionally a hint
    /// about how to fix it.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// An error occurred while executing a Git command.
    #[error("Git command failed: git {command} - {stderr}")]
    GitCommand { command: String, stderr: String },

    /// An error occurred while reading or writing the dev-build counter file.
    #[error("Dev-build counter error for {path}: {message}")]
    Counter { path: String, message: String },

    /// An error occurred while patching a pack manifest.
    #[error("Manifest patch error in {section}: {message}")]
    Manifest { section: String, message: String },

    /// An error occurred with a filesystem operation.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON parsing or serialization error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A zip archive error, wrapped from `zip::result::ZipError`.
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

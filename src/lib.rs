//! lin scaffolds a webpack page project from a remote template.
//! It asks a few questions, fetches the template and rewrites its
//! placeholder files with the answers.

/// Command-line interface module
pub mod cli;

/// Run configuration (template source, date provider)
pub mod config;

pub mod constants;

/// The `create` command pipeline
pub mod create;

/// Error types and handling
pub mod error;

/// Directory rename, `.npmrc` handling and the closing summary
pub mod finalizer;

/// Template retrieval from git or a local directory
pub mod loader;

pub mod logger;

/// Rewrites the fixed set of templated files
pub mod materializer;

/// Answers to parameters
pub mod params;

/// User input and interaction handling
pub mod prompt;

/// The fixed question sequence
pub mod questions;

/// Placeholder rendering
pub mod renderer;

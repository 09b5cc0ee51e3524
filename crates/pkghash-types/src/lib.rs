//! Stable types and IDs used across the pkghash workspace.
//!
//! This crate is intentionally boring:
//! - well-known file names and the default install command
//! - project-relative path handling
//! - the `Fingerprint` value type

#![forbid(unsafe_code)]

pub mod fingerprint;
pub mod ids;
pub mod path;

pub use fingerprint::Fingerprint;
pub use path::RepoPath;

/// Handles argument parsing and the command-line run.
pub mod cli;

/// Constants shared across the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// The entry arena, context stack and depth-first walk.
pub mod tree;

/// Scoped construction of a project tree.
pub mod session;

/// File leaves and their format renderers.
pub mod file;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Filesystem steps taken while materializing a tree.
pub mod synth;

/// The project root, synth and dry-run planning.
pub mod project;

/// Poetry package modules with managed dependency versions.
pub mod poetry;

/// Declarative blueprints read by the command line.
pub mod blueprint;

pub use blueprint::Blueprint;
pub use error::{Error, Result};
pub use file::{
    Content, EmptyFile, File, GitIgnore, IniFile, License, LicenseKind, SimpleFile, TomlFile,
    YamlFile,
};
pub use poetry::{DependencyVersion, PoetryModule, Version, VersionSpec};
pub use project::{synth, Project};
pub use session::{Scope, Session};
pub use tree::{NodeId, Tree};

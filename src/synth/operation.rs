use std::path::PathBuf;

use crate::error::Result;
use crate::ioutils::{create_dir_all, write_read_only};

#[derive(Debug)]
pub enum SynthOperation {
    CreateDirectory { target: PathBuf, target_exists: bool },
    Write { target: PathBuf, content: String, target_exists: bool },
}

impl SynthOperation {
    pub fn target_path(&self) -> &PathBuf {
        match self {
            SynthOperation::CreateDirectory { target, .. } => target,
            SynthOperation::Write { target, .. } => target,
        }
    }

    /// Returns a brief description of this operation for error messages.
    pub fn error_context(&self) -> String {
        match self {
            SynthOperation::CreateDirectory { target, .. } => {
                format!("create directory '{}'", target.display())
            }
            SynthOperation::Write { target, .. } => {
                format!("write '{}'", target.display())
            }
        }
    }

    /// Gets a message describing the operation and its status.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] " } else { "" };

        match self {
            SynthOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!(
                        "{}Skipping directory creation '{}' (already exists)",
                        prefix,
                        target.display()
                    )
                } else {
                    format!("{}Creating directory '{}'", prefix, target.display())
                }
            }

            SynthOperation::Write { target, target_exists, .. } => {
                if *target_exists {
                    format!("{}Overwriting read-only file '{}'", prefix, target.display())
                } else {
                    format!("{}Writing to '{}'", prefix, target.display())
                }
            }
        }
    }

    /// Applies the operation to the filesystem.
    pub fn execute(&self) -> Result<()> {
        match self {
            SynthOperation::CreateDirectory { target, .. } => create_dir_all(target),
            SynthOperation::Write { target, content, .. } => write_read_only(content, target),
        }
    }
}

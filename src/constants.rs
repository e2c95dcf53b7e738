//! Constants used throughout treesynth

/// Blueprint file names searched in a directory, in order of preference
pub const BLUEPRINT_FILENAMES: &[&str] =
    &["treesynth.json", "treesynth.yaml", "treesynth.yml"];

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Marker used by blueprints for a centrally managed dependency version
pub const MANAGED_VERSION: &str = "managed";

/// Fixed file names of the self-naming renderers
pub mod filenames {
    pub const LICENSE: &str = "LICENSE";
    pub const GITIGNORE: &str = ".gitignore";
    pub const PYPROJECT: &str = "pyproject.toml";
}

/// Permission bits applied around generated files
pub mod modes {
    /// Read for owner, group and other; no write bits.
    pub const READ_ONLY: u32 = 0o444;
    pub const OWNER_WRITE: u32 = 0o200;
}

/// Build system table written into every poetry `pyproject.toml`
pub mod poetry {
    pub const BUILD_REQUIRES: &str = "poetry-core>=1.0.0";
    pub const BUILD_BACKEND: &str = "poetry.core.masonry.api";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}

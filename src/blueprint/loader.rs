//! Blueprint loading from files, directories and stdin

use super::Blueprint;
use crate::constants::{BLUEPRINT_FILENAMES, STDIN_INDICATOR};
use crate::error::{Error, Result};
use crate::ioutils::{read_file, read_from};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlueprintFormat {
    Json,
    Yaml,
}

impl BlueprintFormat {
    /// `.json` files are JSON; anything else is read as YAML, which also
    /// accepts JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => BlueprintFormat::Json,
            _ => BlueprintFormat::Yaml,
        }
    }
}

impl Blueprint {
    pub fn parse(content: &str, format: BlueprintFormat) -> Result<Self> {
        let blueprint = match format {
            BlueprintFormat::Json => serde_json::from_str(content)?,
            BlueprintFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(blueprint)
    }

    /// Loads a blueprint from `source`: a file, a directory holding one of
    /// the standard blueprint files, or `-` for stdin.
    pub fn load<P: AsRef<Path>>(source: P) -> Result<Self> {
        let source = source.as_ref();

        if source.as_os_str() == STDIN_INDICATOR {
            log::debug!("Reading blueprint from stdin");
            let content = read_from(std::io::stdin())?;
            return Self::parse(&content, BlueprintFormat::Yaml);
        }

        if source.is_dir() {
            return Self::load_from_dir(source);
        }

        log::debug!("Reading blueprint from '{}'", source.display());
        let content = read_file(source)?;
        Self::parse(&content, BlueprintFormat::from_path(source))
    }

    fn load_from_dir(dir: &Path) -> Result<Self> {
        for blueprint_file_name in BLUEPRINT_FILENAMES.iter() {
            let blueprint_path = dir.join(blueprint_file_name);

            if blueprint_path.is_file() {
                log::debug!("Reading blueprint from '{}'", blueprint_path.display());
                let content = read_file(&blueprint_path)?;
                return Self::parse(&content, BlueprintFormat::from_path(&blueprint_path));
            }
        }

        Err(Error::BlueprintNotFound {
            dir: dir.display().to_string(),
            candidates: BLUEPRINT_FILENAMES.join(", "),
        })
    }
}

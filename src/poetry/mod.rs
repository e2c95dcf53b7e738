//! Poetry package modules
//!
//! A [`PoetryModule`] is not a file itself: attaching it declares a
//! directory named after the package holding a generated `pyproject.toml`.

pub mod versions;

pub use versions::{resolve_dependencies, DependencyVersion, Version, VersionSpec};

use crate::constants::{filenames, poetry};
use crate::error::Result;
use crate::file::TomlFile;
use crate::session::Session;
use crate::tree::NodeId;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct PoetryModule {
    name: String,
    description: String,
    version: String,
    #[serde(default)]
    authors: Vec<String>,
    #[serde(default)]
    license: Option<String>,
    #[serde(default)]
    dependencies: IndexMap<String, DependencyVersion>,
    #[serde(default, alias = "dev-dependencies")]
    dev_dependencies: IndexMap<String, DependencyVersion>,
    #[serde(default, alias = "dependency-management")]
    dependency_management: IndexMap<String, Version>,
}

impl PoetryModule {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            version: version.into(),
            authors: Vec::new(),
            license: None,
            dependencies: IndexMap::new(),
            dev_dependencies: IndexMap::new(),
            dependency_management: IndexMap::new(),
        }
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.authors.push(author.into());
        self
    }

    pub fn license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    pub fn dependency(
        mut self,
        name: impl Into<String>,
        version: impl Into<DependencyVersion>,
    ) -> Self {
        self.dependencies.insert(name.into(), version.into());
        self
    }

    pub fn dev_dependency(
        mut self,
        name: impl Into<String>,
        version: impl Into<DependencyVersion>,
    ) -> Self {
        self.dev_dependencies.insert(name.into(), version.into());
        self
    }

    /// Central versions that managed dependencies resolve against.
    pub fn dependency_management(mut self, management: IndexMap<String, Version>) -> Self {
        self.dependency_management = management;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_dependency_management(&self) -> bool {
        !self.dependency_management.is_empty()
    }

    /// The `pyproject.toml` payload, with every managed dependency resolved.
    pub fn pyproject(&self) -> Result<Value> {
        let mut tool_poetry = Map::new();
        tool_poetry.insert("name".into(), json!(self.name));
        tool_poetry.insert("description".into(), json!(self.description));
        tool_poetry.insert("version".into(), json!(self.version));
        tool_poetry.insert("authors".into(), json!(self.authors));
        if let Some(license) = &self.license {
            tool_poetry.insert("license".into(), json!(license));
        }
        for (key, dependencies) in
            [("dependencies", &self.dependencies), ("dev-dependencies", &self.dev_dependencies)]
        {
            if dependencies.is_empty() {
                continue;
            }
            let resolved =
                resolve_dependencies(&self.name, dependencies, &self.dependency_management)?;
            let table: Map<String, Value> =
                resolved.iter().map(|(name, version)| (name.clone(), version.to_value())).collect();
            tool_poetry.insert(key.into(), Value::Object(table));
        }

        Ok(json!({
            "build-system": {
                "requires": [poetry::BUILD_REQUIRES],
                "build-backend": poetry::BUILD_BACKEND,
            },
            "tool": {
                "poetry": Value::Object(tool_poetry),
            },
        }))
    }

    /// Declares the module directory and its `pyproject.toml` in the
    /// current scope, returning the id of the `pyproject.toml` file.
    ///
    /// Dependencies are resolved first, so a missing managed version leaves
    /// the tree untouched.
    pub fn attach(&self, session: &mut Session<'_>) -> Result<NodeId> {
        let pyproject = self.pyproject()?;
        log::debug!("Declaring poetry module '{}'", self.name);
        session.dir(self.name.as_str(), |s| s.add(TomlFile::new(filenames::PYPROJECT, pyproject)))
    }
}

use crate::constants::MANAGED_VERSION;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A concrete dependency version as written into `pyproject.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Version {
    Constraint(String),
    Detailed(VersionSpec),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSpec {
    pub version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<String>,
}

impl Version {
    /// The bare version string, without extras.
    pub fn version(&self) -> &str {
        match self {
            Version::Constraint(version) => version,
            Version::Detailed(spec) => &spec.version,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Version::Constraint(version) => Value::String(version.clone()),
            Version::Detailed(VersionSpec { version, extras }) if extras.is_empty() => {
                json!({ "version": version })
            }
            Version::Detailed(VersionSpec { version, extras }) => {
                json!({ "version": version, "extras": extras })
            }
        }
    }
}

impl From<&str> for Version {
    fn from(version: &str) -> Self {
        Version::Constraint(version.to_string())
    }
}

impl From<String> for Version {
    fn from(version: String) -> Self {
        Version::Constraint(version)
    }
}

/// A declared dependency version, possibly deferred to a central table.
///
/// In blueprints the string `"managed"` marks a managed dependency, either
/// on its own or as the `version` of a spec that adds extras.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Version")]
pub enum DependencyVersion {
    Pinned(Version),
    /// Take the managed entry as it is.
    Managed,
    /// Take the managed version string, with these extras.
    ManagedSpec { extras: Vec<String> },
}

impl From<Version> for DependencyVersion {
    fn from(version: Version) -> Self {
        match version {
            Version::Constraint(v) if v == MANAGED_VERSION => DependencyVersion::Managed,
            Version::Detailed(VersionSpec { version, extras }) if version == MANAGED_VERSION => {
                DependencyVersion::ManagedSpec { extras }
            }
            version => DependencyVersion::Pinned(version),
        }
    }
}

impl From<&str> for DependencyVersion {
    fn from(version: &str) -> Self {
        Version::from(version).into()
    }
}

impl From<VersionSpec> for DependencyVersion {
    fn from(spec: VersionSpec) -> Self {
        Version::Detailed(spec).into()
    }
}

/// Replaces managed markers with versions from `management`.
///
/// Fails on the first managed dependency that has no entry.
pub fn resolve_dependencies(
    module: &str,
    dependencies: &IndexMap<String, DependencyVersion>,
    management: &IndexMap<String, Version>,
) -> Result<IndexMap<String, Version>> {
    dependencies
        .iter()
        .map(|(name, declared)| {
            let managed = || {
                management.get(name).ok_or_else(|| Error::MissingManagedDependency {
                    dependency: name.clone(),
                    module: module.to_string(),
                })
            };
            let resolved = match declared {
                DependencyVersion::Pinned(version) => version.clone(),
                DependencyVersion::Managed => managed()?.clone(),
                DependencyVersion::ManagedSpec { extras } => Version::Detailed(VersionSpec {
                    version: managed()?.version().to_string(),
                    extras: extras.clone(),
                }),
            };
            Ok((name.clone(), resolved))
        })
        .collect()
}

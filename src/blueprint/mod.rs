//! Declarative blueprints
//!
//! A blueprint describes a project tree as data. Entries are replayed
//! through a [`Session`] so a blueprint tree obeys the same naming and
//! scoping rules as one built in code.

pub mod loader;

pub use loader::BlueprintFormat;

use crate::error::Result;
use crate::file::{
    Content, EmptyFile, GitIgnore, IniFile, License, LicenseKind, SimpleFile, TomlFile, YamlFile,
};
use crate::poetry::{PoetryModule, Version};
use crate::project::Project;
use crate::session::Session;
use crate::tree::NodeId;
use chrono::Datelike;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct Blueprint {
    /// Versions inherited by poetry modules that declare none of their own.
    #[serde(default)]
    pub dependency_management: IndexMap<String, Version>,
    #[serde(default)]
    pub entries: Vec<EntrySpec>,
}

/// One entry of a blueprint, tagged by `type`.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum EntrySpec {
    Dir {
        name: String,
        #[serde(default)]
        entries: Vec<EntrySpec>,
    },
    Empty {
        name: String,
    },
    Simple {
        name: String,
        content: Content,
    },
    Toml {
        name: String,
        value: Value,
    },
    Yaml {
        name: String,
        value: Value,
    },
    Ini {
        name: String,
        value: Value,
    },
    License {
        #[serde(default)]
        kind: LicenseKind,
        /// Defaults to the current year.
        #[serde(default)]
        period: Option<String>,
        holders: String,
    },
    Gitignore {
        #[serde(default)]
        ignore: Vec<String>,
        #[serde(default)]
        allow: Vec<String>,
    },
    PoetryModule(PoetryModule),
}

impl Blueprint {
    /// Builds a project holding every entry of the blueprint.
    pub fn into_project(self) -> Result<Project> {
        let Blueprint { dependency_management, entries } = self;
        let mut project = Project::new();
        project.build(|s| declare_all(s, entries, &dependency_management))?;
        Ok(project)
    }
}

fn declare_all(
    session: &mut Session<'_>,
    entries: Vec<EntrySpec>,
    management: &IndexMap<String, Version>,
) -> Result<()> {
    for entry in entries {
        entry.declare(session, management)?;
    }
    Ok(())
}

impl EntrySpec {
    fn declare(
        self,
        session: &mut Session<'_>,
        management: &IndexMap<String, Version>,
    ) -> Result<NodeId> {
        match self {
            EntrySpec::Dir { name, entries } => {
                let mut scope = session.open_dir(name)?;
                declare_all(&mut scope, entries, management)?;
                Ok(scope.id())
            }
            EntrySpec::Empty { name } => session.add(EmptyFile::new(name)),
            EntrySpec::Simple { name, content } => session.add(SimpleFile::new(name, content)),
            EntrySpec::Toml { name, value } => session.add(TomlFile::new(name, value)),
            EntrySpec::Yaml { name, value } => session.add(YamlFile::new(name, value)),
            EntrySpec::Ini { name, value } => session.add(IniFile::new(name, value)),
            EntrySpec::License { kind, period, holders } => {
                let period = period.unwrap_or_else(current_year);
                session.add(License::new(kind, period, holders))
            }
            EntrySpec::Gitignore { ignore, allow } => {
                session.add(GitIgnore::new().ignore(ignore).allow(allow))
            }
            EntrySpec::PoetryModule(module) => {
                let module = if module.has_dependency_management() {
                    module
                } else {
                    module.dependency_management(management.clone())
                };
                module.attach(session)
            }
        }
    }
}

fn current_year() -> String {
    chrono::Local::now().year().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::file::File;

    fn parse(yaml: &str) -> Blueprint {
        Blueprint::parse(yaml, BlueprintFormat::Yaml).unwrap()
    }

    #[test]
    fn nested_entries_become_a_tree() {
        let project = parse(
            r#"
entries:
  - type: dir
    name: src
    entries:
      - type: simple
        name: __init__.py
        content: '__version__ = "0.1.0"'
  - type: license
    period: "2021"
    holders: ACME
  - type: gitignore
    ignore: [".venv/"]
"#,
        )
        .into_project()
        .unwrap();

        let paths: Vec<String> = project.subpaths().collect();
        assert_eq!(paths, vec!["src/__init__.py", "LICENSE", ".gitignore"]);
    }

    #[test]
    fn simple_content_accepts_lines() {
        let project = parse(
            r#"
entries:
  - type: simple
    name: notes.txt
    content: [a, b]
"#,
        )
        .into_project()
        .unwrap();

        let (_, leaf) = project.walk().next().unwrap();
        match leaf.file {
            File::Simple(file) => assert_eq!(file.render(), "a\nb\n"),
            other => panic!("unexpected file {other:?}"),
        }
    }

    #[test]
    fn license_period_defaults_to_current_year() {
        let project = parse("entries: [{ type: license, holders: ACME }]").into_project().unwrap();

        let (_, leaf) = project.walk().next().unwrap();
        let File::License(license) = leaf.file else { panic!("expected a license") };
        assert!(license.render().starts_with(&format!("Copyright © {} ACME", current_year())));
    }

    #[test]
    fn poetry_modules_inherit_dependency_management() {
        let project = parse(
            r#"
dependency_management:
  pandas: 1.2.0
entries:
  - type: poetry-module
    name: beta
    description: Beta lambda
    version: 1.0.0
    dependencies:
      pandas: managed
"#,
        )
        .into_project()
        .unwrap();

        let (resolver, leaf) = project.walk().next().unwrap();
        assert_eq!(resolver.relative(), "beta/pyproject.toml");
        let File::Toml(pyproject) = leaf.file else { panic!("expected toml") };
        assert_eq!(pyproject.value()["tool"]["poetry"]["dependencies"]["pandas"], "1.2.0");
    }

    #[test]
    fn duplicate_entries_are_rejected() {
        let err = parse(
            r#"
entries:
  - { type: empty, name: a }
  - { type: empty, name: a }
"#,
        )
        .into_project()
        .unwrap_err();
        assert!(matches!(err, Error::DuplicateName { ref name, .. } if name == "a"));
    }

    #[test]
    fn unknown_entry_type_is_a_parse_error() {
        let err = Blueprint::parse("entries: [{ type: zip, name: a }]", BlueprintFormat::Yaml)
            .unwrap_err();
        assert!(matches!(err, Error::BlueprintParseError(_)));
    }
}

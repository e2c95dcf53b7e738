//! File leaves and their renderers
//!
//! Every file kind produces its text lazily through [`File::render`], so
//! payload changes made before synth are reflected in the output.

pub mod gitignore;
pub mod ini;
pub mod license;
pub mod text;
pub mod toml_file;
pub mod yaml_file;

pub use gitignore::GitIgnore;
pub use ini::IniFile;
pub use license::{License, LicenseKind};
pub use text::{Content, EmptyFile, SimpleFile};
pub use toml_file::TomlFile;
pub use yaml_file::YamlFile;

use crate::error::{Error, Result};
use crate::tree::{NodeId, Tree};

/// What a renderer may know about where its file lives.
pub struct RenderContext<'a> {
    tree: &'a Tree,
    parent: NodeId,
}

impl<'a> RenderContext<'a> {
    pub fn new(tree: &'a Tree, parent: NodeId) -> Self {
        Self { tree, parent }
    }

    /// Files declared next to (and below) the file being rendered.
    pub fn sibling_paths(&self) -> impl Iterator<Item = String> + 'a {
        let tree = self.tree;
        tree.subpaths(self.parent)
    }
}

#[derive(Debug, Clone)]
pub enum File {
    Empty(EmptyFile),
    Simple(SimpleFile),
    Toml(TomlFile),
    Yaml(YamlFile),
    Ini(IniFile),
    License(License),
    GitIgnore(GitIgnore),
}

impl File {
    pub fn name(&self) -> &str {
        match self {
            File::Empty(f) => f.name(),
            File::Simple(f) => f.name(),
            File::Toml(f) => f.name(),
            File::Yaml(f) => f.name(),
            File::Ini(f) => f.name(),
            File::License(f) => f.name(),
            File::GitIgnore(f) => f.name(),
        }
    }

    /// Short label of the output format, used in logs and errors.
    pub fn format(&self) -> &'static str {
        match self {
            File::Empty(_) => "empty",
            File::Simple(_) => "text",
            File::Toml(_) => toml_file::FORMAT,
            File::Yaml(_) => yaml_file::FORMAT,
            File::Ini(_) => ini::FORMAT,
            File::License(_) => "license",
            File::GitIgnore(_) => gitignore::FORMAT,
        }
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> Result<String> {
        match self {
            File::Empty(f) => Ok(f.render()),
            File::Simple(f) => Ok(f.render()),
            File::Toml(f) => f.render(),
            File::Yaml(f) => f.render(),
            File::Ini(f) => f.render(),
            File::License(f) => Ok(f.render()),
            File::GitIgnore(f) => f.render(ctx.sibling_paths()),
        }
    }
}

macro_rules! impl_from_file_kind {
    ($($kind:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$kind> for File {
                fn from(file: $kind) -> Self {
                    File::$variant(file)
                }
            }
        )*
    };
}

impl_from_file_kind! {
    EmptyFile => Empty,
    SimpleFile => Simple,
    TomlFile => Toml,
    YamlFile => Yaml,
    IniFile => Ini,
    License => License,
    GitIgnore => GitIgnore,
}

/// Appends a newline unless `line` already ends with one.
pub(crate) fn ensure_newline(line: &str) -> String {
    if line.ends_with('\n') {
        line.to_string()
    } else {
        format!("{line}\n")
    }
}

/// Trims trailing whitespace and terminates with exactly one newline.
pub(crate) fn ensure_trailing_newline(text: &str) -> String {
    format!("{}\n", text.trim_end())
}

pub(crate) fn render_error(name: &str, format: &str, reason: impl Into<String>) -> Error {
    Error::RenderError {
        name: name.to_string(),
        format: format.to_string(),
        reason: reason.into(),
    }
}

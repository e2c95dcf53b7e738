use super::{ensure_trailing_newline, render_error};
use crate::constants::filenames;
use crate::error::Result;
use globset::Glob;

pub const FORMAT: &str = "gitignore";

/// A `.gitignore` that ignores `ignore` patterns but re-allows every file
/// generated next to it, itself included, plus any explicit `allow` patterns.
#[derive(Debug, Clone, Default)]
pub struct GitIgnore {
    ignore: Vec<String>,
    allow: Vec<String>,
}

impl GitIgnore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn allow<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow.extend(patterns.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &str {
        filenames::GITIGNORE
    }

    pub fn ignore_patterns(&self) -> &[String] {
        &self.ignore
    }

    pub fn allow_patterns(&self) -> &[String] {
        &self.allow
    }

    pub fn ignore_patterns_mut(&mut self) -> &mut Vec<String> {
        &mut self.ignore
    }

    pub fn allow_patterns_mut(&mut self) -> &mut Vec<String> {
        &mut self.allow
    }

    /// Renders with `generated` listing the files declared alongside this one.
    pub fn render(&self, generated: impl Iterator<Item = String>) -> Result<String> {
        for pattern in self.ignore.iter().chain(&self.allow) {
            Glob::new(pattern).map_err(|e| {
                render_error(self.name(), FORMAT, format!("invalid pattern '{pattern}': {e}"))
            })?;
        }

        let lines: Vec<String> = self
            .ignore
            .iter()
            .cloned()
            .chain(generated.map(|path| format!("!{path}")))
            .chain(self.allow.iter().map(|pattern| format!("!{pattern}")))
            .collect();
        Ok(ensure_trailing_newline(&lines.join("\n")))
    }
}

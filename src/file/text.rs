use super::ensure_newline;
use serde::{Deserialize, Serialize};

/// A file with no content.
#[derive(Debug, Clone)]
pub struct EmptyFile {
    name: String,
}

impl EmptyFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn render(&self) -> String {
        String::new()
    }
}

/// Text payload of a [`SimpleFile`]: one block or a sequence of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Text(String),
    Lines(Vec<String>),
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Vec<String>> for Content {
    fn from(lines: Vec<String>) -> Self {
        Content::Lines(lines)
    }
}

impl From<&[&str]> for Content {
    fn from(lines: &[&str]) -> Self {
        Content::Lines(lines.iter().map(|line| line.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Content {
    fn from(lines: [&str; N]) -> Self {
        Content::Lines(lines.iter().map(|line| line.to_string()).collect())
    }
}

/// Plain text. Every line ends with exactly one newline.
#[derive(Debug, Clone)]
pub struct SimpleFile {
    name: String,
    content: Content,
}

impl SimpleFile {
    pub fn new(name: impl Into<String>, content: impl Into<Content>) -> Self {
        Self { name: name.into(), content: content.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<Content>) {
        self.content = content.into();
    }

    pub fn render(&self) -> String {
        match &self.content {
            Content::Text(text) => ensure_newline(text),
            Content::Lines(lines) => lines.iter().map(|line| ensure_newline(line)).collect(),
        }
    }
}

//! In-memory model of the tree being synthesized
//!
//! This module contains the core data structures:
//! - `Tree`: arena of nodes, rooted at an anonymous project container
//! - `context`: the stack of open containers used by scoped blocks
//! - `walk`: depth-first traversal yielding a path resolver per file

pub mod context;
pub mod walk;

pub use context::ContextStack;
pub use walk::{Leaf, PathResolver, Walk};

use crate::error::{Error, Result};
use crate::file::File;
use indexmap::IndexMap;

/// Handle to a node stored in a [`Tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A node that can hold named children: the project root or a directory.
#[derive(Debug, Default)]
pub struct Container {
    /// `None` for the project root.
    name: Option<String>,
    children: IndexMap<String, NodeId>,
}

impl Container {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.children.get(name).copied()
    }

    pub(crate) fn child_at(&self, index: usize) -> Option<(&str, NodeId)> {
        self.children.get_index(index).map(|(name, id)| (name.as_str(), *id))
    }
}

#[derive(Debug)]
pub enum NodeKind {
    Container(Container),
    File(File),
}

#[derive(Debug)]
pub struct Node {
    /// Lookup link to the owning container; never used for ownership.
    parent: Option<NodeId>,
    kind: NodeKind,
}

impl Node {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Container(container) => container.name(),
            NodeKind::File(file) => Some(file.name()),
        }
    }
}

/// A value ready to be attached under a container.
#[derive(Debug)]
pub enum Entry {
    Dir(String),
    File(File),
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::Dir(name) => name,
            Entry::File(file) => file.name(),
        }
    }
}

impl From<File> for Entry {
    fn from(file: File) -> Self {
        Entry::File(file)
    }
}

/// Arena holding every entry of one project.
#[derive(Debug)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Id of the anonymous project container every tree starts with.
    pub const ROOT: NodeId = NodeId(0);

    pub fn new() -> Self {
        let root = Node { parent: None, kind: NodeKind::Container(Container::default()) };
        Self { nodes: vec![root] }
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn container(&self, id: NodeId) -> Option<&Container> {
        match self.get(id).map(Node::kind) {
            Some(NodeKind::Container(container)) => Some(container),
            _ => None,
        }
    }

    pub fn file(&self, id: NodeId) -> Option<&File> {
        match self.get(id).map(Node::kind) {
            Some(NodeKind::File(file)) => Some(file),
            _ => None,
        }
    }

    /// Mutable access to a file payload. Changes show up in the next synth.
    pub fn file_mut(&mut self, id: NodeId) -> Option<&mut File> {
        match self.nodes.get_mut(id.0).map(|node| &mut node.kind) {
            Some(NodeKind::File(file)) => Some(file),
            _ => None,
        }
    }

    /// Number of entries, excluding the project root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slash-separated path of a node relative to the project root.
    pub fn display_path(&self, id: NodeId) -> String {
        let mut parts = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let Some(node) = self.get(node_id) else { break };
            if let Some(name) = node.name() {
                parts.push(name);
            }
            current = node.parent;
        }
        if parts.is_empty() {
            return ".".to_string();
        }
        parts.reverse();
        parts.join("/")
    }

    /// Registers `entry` as a child of `parent`.
    ///
    /// Fails without touching the tree when the name is invalid, already
    /// taken by a sibling, or `parent` is not a container.
    pub fn attach(&mut self, parent: NodeId, entry: impl Into<Entry>) -> Result<NodeId> {
        let entry = entry.into();
        validate_name(entry.name())?;

        let container = self.container(parent).ok_or_else(|| Error::InvalidName {
            name: entry.name().to_string(),
            reason: format!("'{}' is not a directory", self.display_path(parent)),
        })?;
        if container.get(entry.name()).is_some() {
            return Err(Error::DuplicateName {
                name: entry.name().to_string(),
                container: self.display_path(parent),
            });
        }

        let id = NodeId(self.nodes.len());
        let (name, kind) = match entry {
            Entry::Dir(name) => (
                name.clone(),
                NodeKind::Container(Container { name: Some(name), ..Default::default() }),
            ),
            Entry::File(file) => (file.name().to_string(), NodeKind::File(file)),
        };
        self.nodes.push(Node { parent: Some(parent), kind });
        if let NodeKind::Container(container) = &mut self.nodes[parent.0].kind {
            container.children.insert(name, id);
        }
        log::debug!("Attached '{}'", self.display_path(id));
        Ok(id)
    }

    /// Depth-first, insertion-ordered walk over the files below `container`.
    pub fn walk(&self, container: NodeId) -> Walk<'_> {
        Walk::new(self, container)
    }

    /// Paths of every file below `container`, relative to it and joined
    /// with forward slashes. Directories themselves are not listed.
    pub fn subpaths(&self, container: NodeId) -> impl Iterator<Item = String> + '_ {
        self.walk(container).map(|(resolver, _)| resolver.relative())
    }
}

fn validate_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name must not be empty"
    } else if name == "." || name == ".." {
        "name must not be a relative path marker"
    } else if name.contains('/') || name.contains('\\') {
        "name must not contain a path separator"
    } else {
        return Ok(());
    };
    Err(Error::InvalidName { name: name.to_string(), reason: reason.to_string() })
}

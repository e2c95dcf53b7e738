use super::{NodeId, NodeKind, Tree};
use crate::file::File;
use std::path::{Path, PathBuf};

/// Maps a base directory to the location of one entry below it.
///
/// Resolvers compose: the resolver of a file nested in directories is the
/// directory resolvers followed by the file's own segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathResolver {
    segments: Vec<String>,
}

impl PathResolver {
    /// Resolver that appends a single `name` to its base.
    pub fn new(name: impl Into<String>) -> Self {
        Self { segments: vec![name.into()] }
    }

    /// Resolver that maps a base onto itself.
    pub fn identity() -> Self {
        Self::default()
    }

    /// This resolver extended by one more segment.
    pub fn join(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }

    /// Applies `self` first, then `inner`.
    pub fn compose(&self, inner: &PathResolver) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(inner.segments.iter().cloned());
        Self { segments }
    }

    pub fn resolve(&self, base: &Path) -> PathBuf {
        let mut path = base.to_path_buf();
        path.extend(&self.segments);
        path
    }

    /// The resolved path relative to its base, always using `/`.
    pub fn relative(&self) -> String {
        self.segments.join("/")
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

/// A file reached by a [`Walk`].
#[derive(Debug, Clone, Copy)]
pub struct Leaf<'a> {
    pub id: NodeId,
    /// Container the file was declared in.
    pub parent: NodeId,
    pub file: &'a File,
}

struct Frame {
    container: NodeId,
    next_child: usize,
    resolver: PathResolver,
}

/// Lazy depth-first traversal in insertion order.
///
/// Built by [`Tree::walk`]; calling it again restarts from the top.
pub struct Walk<'a> {
    tree: &'a Tree,
    frames: Vec<Frame>,
}

impl<'a> Walk<'a> {
    pub(super) fn new(tree: &'a Tree, container: NodeId) -> Self {
        let frames = match tree.container(container) {
            Some(_) => vec![Frame {
                container,
                next_child: 0,
                resolver: PathResolver::identity(),
            }],
            None => Vec::new(),
        };
        Self { tree, frames }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (PathResolver, Leaf<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        loop {
            let frame = self.frames.last_mut()?;
            let child = tree
                .container(frame.container)
                .and_then(|container| container.child_at(frame.next_child));

            let Some((name, id)) = child else {
                self.frames.pop();
                continue;
            };
            frame.next_child += 1;
            let resolver = frame.resolver.join(name);
            let parent = frame.container;

            match tree.get(id).map(|node| node.kind()) {
                Some(NodeKind::File(file)) => {
                    return Some((resolver, Leaf { id, parent, file }));
                }
                Some(NodeKind::Container(_)) => {
                    self.frames.push(Frame { container: id, next_child: 0, resolver });
                }
                None => {}
            }
        }
    }
}

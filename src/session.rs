//! Scoped construction of a [`Tree`]
//!
//! A [`Session`] pairs the tree with the stack of currently open
//! containers. Opening a project root or a directory returns a [`Scope`]
//! guard; new entries go into the innermost open scope, and dropping the
//! guard closes it again on every exit path.

use crate::error::{Error, Result};
use crate::file::File;
use crate::tree::{ContextStack, Entry, NodeId, Tree};
use std::ops::{Deref, DerefMut};

pub struct Session<'t> {
    tree: &'t mut Tree,
    stack: ContextStack,
}

impl<'t> Session<'t> {
    /// Starts a session with nothing open.
    pub fn new(tree: &'t mut Tree) -> Self {
        Self { tree, stack: ContextStack::new() }
    }

    pub fn tree(&self) -> &Tree {
        &*self.tree
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// The container new entries are attached to.
    pub fn current(&self) -> Option<NodeId> {
        self.stack.current()
    }

    /// Opens the project root. Fails if anything is already open.
    pub fn open_root(&mut self) -> Result<Scope<'_, 't>> {
        self.stack.enter_root(Tree::ROOT)?;
        log::debug!("Opened project root");
        Ok(Scope { session: self, container: Tree::ROOT })
    }

    /// Declares directory `name` in the current scope and opens it.
    pub fn open_dir(&mut self, name: impl Into<String>) -> Result<Scope<'_, 't>> {
        let id = self.attach(Entry::Dir(name.into()))?;
        self.stack.enter(id);
        log::debug!("Opened directory '{}'", self.tree.display_path(id));
        Ok(Scope { session: self, container: id })
    }

    /// Declares directory `name` and runs `body` with it open.
    pub fn dir<F, R>(&mut self, name: impl Into<String>, body: F) -> Result<R>
    where
        F: FnOnce(&mut Session<'t>) -> Result<R>,
    {
        let mut scope = self.open_dir(name)?;
        body(&mut scope)
    }

    /// Declares `file` in the current scope.
    pub fn add(&mut self, file: impl Into<File>) -> Result<NodeId> {
        self.attach(Entry::File(file.into()))
    }

    fn attach(&mut self, entry: Entry) -> Result<NodeId> {
        let parent = self
            .stack
            .current()
            .ok_or_else(|| Error::NoActiveContext { name: entry.name().to_string() })?;
        self.tree.attach(parent, entry)
    }
}

/// An open container. Closes it when dropped.
pub struct Scope<'s, 't> {
    session: &'s mut Session<'t>,
    container: NodeId,
}

impl Scope<'_, '_> {
    pub fn id(&self) -> NodeId {
        self.container
    }
}

impl<'t> Deref for Scope<'_, 't> {
    type Target = Session<'t>;

    fn deref(&self) -> &Self::Target {
        &*self.session
    }
}

impl<'t> DerefMut for Scope<'_, 't> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.session
    }
}

impl Drop for Scope<'_, '_> {
    fn drop(&mut self) {
        match self.session.stack.exit() {
            Ok(closed) if closed == self.container => {
                log::debug!("Closed '{}'", self.session.tree.display_path(closed));
            }
            Ok(closed) => log::warn!(
                "Closed '{}' while '{}' was expected",
                self.session.tree.display_path(closed),
                self.session.tree.display_path(self.container)
            ),
            Err(e) => log::warn!("{e}"),
        }
    }
}

use super::NodeId;
use crate::error::{Error, Result};

/// LIFO stack of open containers. The top is where new entries go.
#[derive(Debug, Default)]
pub struct ContextStack {
    frames: Vec<NodeId>,
}

impl ContextStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a project root. Only one root may be open per stack.
    pub fn enter_root(&mut self, root: NodeId) -> Result<()> {
        if !self.frames.is_empty() {
            return Err(Error::AlreadyRooted);
        }
        self.frames.push(root);
        Ok(())
    }

    /// Opens a nested container on top of the current one.
    pub fn enter(&mut self, container: NodeId) {
        self.frames.push(container);
    }

    /// Closes the innermost container and returns it.
    pub fn exit(&mut self) -> Result<NodeId> {
        self.frames.pop().ok_or(Error::UnbalancedScope)
    }

    pub fn current(&self) -> Option<NodeId> {
        self.frames.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

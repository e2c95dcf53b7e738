//! The project root and its materialization
//!
//! A [`Project`] owns the [`Tree`] built through a [`Session`]. Nothing
//! touches the filesystem until [`Project::synth`] walks the tree, renders
//! every file and writes it read-only below the chosen root.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::file::{File, RenderContext};
use crate::session::Session;
use crate::synth::SynthOperation;
use crate::tree::{NodeId, Tree, Walk};

#[derive(Debug, Default)]
pub struct Project {
    tree: Tree,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the project root and runs `body` with it as the current scope.
    ///
    /// The root is closed again when `body` returns, whether it succeeded
    /// or not. Calling `build` again appends to the same tree.
    pub fn build<F, R>(&mut self, body: F) -> Result<R>
    where
        F: FnOnce(&mut Session<'_>) -> Result<R>,
    {
        let mut session = Session::new(&mut self.tree);
        let mut root = session.open_root()?;
        body(&mut root)
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Mutable access to a declared file, for payload changes before synth.
    pub fn file_mut(&mut self, id: NodeId) -> Option<&mut File> {
        self.tree.file_mut(id)
    }

    pub fn walk(&self) -> Walk<'_> {
        self.tree.walk(Tree::ROOT)
    }

    pub fn subpaths(&self) -> impl Iterator<Item = String> + '_ {
        self.tree.subpaths(Tree::ROOT)
    }

    /// Renders every file and returns the steps synth would take, without
    /// touching the filesystem.
    pub fn plan(&self, root: Option<&Path>) -> Result<Vec<SynthOperation>> {
        let root = resolve_root(root)?;
        self.operations(&root).collect()
    }

    /// Writes the tree below `root`, or the current directory when `None`.
    ///
    /// Returns the paths written, in walk order. The first failure aborts
    /// the run; files already written stay on disk.
    pub fn synth(&self, root: Option<&Path>) -> Result<Vec<PathBuf>> {
        let root = resolve_root(root)?;
        log::debug!("Synthesizing {} entries into '{}'", self.tree.len(), root.display());

        let mut written = Vec::new();
        for operation in self.operations(&root) {
            let operation = operation?;
            log::info!("{}", operation.get_message(false));
            if let Err(e) = operation.execute() {
                log::error!("Failed to {}", operation.error_context());
                return Err(e);
            }
            if let SynthOperation::Write { target, .. } = operation {
                written.push(target);
            }
        }
        Ok(written)
    }

    /// Root directory first, then one write per file in walk order. Each
    /// file is rendered only when its operation is pulled.
    fn operations<'a>(
        &'a self,
        root: &'a Path,
    ) -> impl Iterator<Item = Result<SynthOperation>> + 'a {
        let create_root = SynthOperation::CreateDirectory {
            target: root.to_path_buf(),
            target_exists: root.is_dir(),
        };
        std::iter::once(Ok(create_root)).chain(self.walk().map(move |(resolver, leaf)| {
            let content = leaf.file.render(&RenderContext::new(&self.tree, leaf.parent))?;
            let target = resolver.resolve(root);
            Ok(SynthOperation::Write { target_exists: target.is_file(), target, content })
        }))
    }
}

fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
    match root {
        Some(root) => Ok(root.to_path_buf()),
        None => Ok(std::env::current_dir()?),
    }
}

/// Builds a fresh project with `body`, synthesizes it into `root` and
/// returns it.
pub fn synth<F>(root: Option<&Path>, body: F) -> Result<Project>
where
    F: FnOnce(&mut Session<'_>) -> Result<()>,
{
    let mut project = Project::new();
    project.build(body)?;
    project.synth(root)?;
    Ok(project)
}

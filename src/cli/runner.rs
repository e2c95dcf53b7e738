use crate::{blueprint::Blueprint, cli::Args, error::Result, project::Project, synth::SynthOperation};
use std::path::{Path, PathBuf};

/// Main CLI runner: load the blueprint, build the tree, then synth or plan it.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub fn run(self) -> Result<()> {
        let blueprint = Blueprint::load(&self.args.blueprint)?;
        let project = blueprint.into_project()?;
        let output_root = self.output_root()?;

        if self.args.dry_run {
            let written = self.preview(&project, &output_root)?;
            println!(
                "[DRY RUN] {} files would be written to {}.",
                written,
                output_root.display()
            );
        } else {
            let written = project.synth(Some(&output_root))?;
            println!(
                "Synthesized {} files in {}.",
                written.len(),
                output_root.display()
            );
        }
        Ok(())
    }

    fn output_root(&self) -> Result<PathBuf> {
        match &self.args.output_dir {
            Some(output_dir) => Ok(output_dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Logs every planned operation and returns the number of files.
    fn preview(&self, project: &Project, output_root: &Path) -> Result<usize> {
        let operations = project.plan(Some(output_root))?;
        for operation in &operations {
            log::info!("{}", operation.get_message(true));
        }
        Ok(operations
            .iter()
            .filter(|operation| matches!(operation, SynthOperation::Write { .. }))
            .count())
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}

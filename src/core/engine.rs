//! Digest engine
//!
//! Owns one run: truncates the output, walks the tree, reduces and appends
//! every selected file, and reports what happened.

use crate::core::emitter::{Emitter, OutputArtifact};
use crate::core::error::{DigestError, Result};
use crate::core::fs::{FileSystem, OsFileSystem};
use crate::core::models::{DigestConfig, RunReport};
use crate::core::walker::TreeWalker;
use std::path::{Path, PathBuf};

/// Runs digests for one configuration.
#[derive(Debug, Clone)]
pub struct DigestEngine {
    config: DigestConfig,
}

impl DigestEngine {
    pub fn new(config: DigestConfig) -> Self {
        Self { config }
    }

    /// Run against an arbitrary filesystem. Only failing to open the output
    /// is fatal; everything else lands in the report.
    pub fn run<F: FileSystem + ?Sized>(&self, fs: &F, root: &Path) -> Result<RunReport> {
        let output = self.config.output_path(root);
        let mut artifact = OutputArtifact::open(fs, &output)?;
        let emitter = Emitter::new(self.config.elide_bodies);

        let walker = TreeWalker::new(fs, &self.config.policy, &self.config.extension)
            .skipping(output.clone());
        let report = walker.walk(root, |file| emitter.emit(file, &mut artifact));

        tracing::info!(
            merged = report.merged_count(),
            skipped = report.skipped_files,
            pruned = report.pruned_dirs,
            errors = report.errors.len(),
            elided = report.elided_bodies,
            partial = report.partial.len(),
            "all matching .{} files merged into {}",
            self.config.extension,
            output.display()
        );
        Ok(report)
    }

    /// Canonical root and absolute output path for a run on disk
    fn resolve_on_disk(&self, root: &Path) -> Result<(PathBuf, PathBuf)> {
        if !root.is_dir() {
            return Err(DigestError::DirectoryNotFound {
                path: root.to_path_buf(),
            });
        }
        let root = root.canonicalize()?;
        let mut output = match &self.config.output {
            Some(output) if output.is_relative() => std::env::current_dir()?.join(output),
            _ => self.config.output_path(&root),
        };
        // Match the canonical root so the walker recognises the output file.
        if let (Some(parent), Some(name)) = (output.parent(), output.file_name()) {
            if let Ok(parent) = parent.canonicalize() {
                output = parent.join(name);
            }
        }
        Ok((root, output))
    }
}

/// Digest `root` on disk with `config`, returning the output path and report.
/// `root` must be an existing directory; paths in provenance headers are
/// absolute.
pub fn digest_project(root: &Path, config: DigestConfig) -> Result<(PathBuf, RunReport)> {
    let engine = DigestEngine::new(config);
    let (root, output) = engine.resolve_on_disk(root)?;
    let report = DigestEngine::new(engine.config.with_output(output.clone()))
        .run(&OsFileSystem::new(), &root)?;
    Ok((output, report))
}

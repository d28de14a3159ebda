//! Directory traversal for java-digest
//!
//! Depth-first, pre-order walk over a `FileSystem`. Siblings are visited in
//! byte order of their names, so the output is the same on every platform.
//! A directory that cannot be listed and a file that cannot be read or
//! emitted are recorded in the report; the walk carries on with the rest.

use crate::core::error::Result;
use crate::core::filter::PathFilter;
use crate::core::fs::FileSystem;
use crate::core::models::{EmitOutcome, RunReport, SelectionPolicy, SourceFile};
use std::path::{Path, PathBuf};

/// Whether `filename` has `extension` (no dot), ignoring case
pub fn has_extension(filename: &str, extension: &str) -> bool {
    Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

fn join_relative(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}

/// Walks a source tree and hands every selected file to a visitor.
pub struct TreeWalker<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    filter: PathFilter<'a>,
    extension: &'a str,
    skip_path: Option<PathBuf>,
}

impl<'a, F: FileSystem + ?Sized> TreeWalker<'a, F> {
    pub fn new(fs: &'a F, policy: &'a SelectionPolicy, extension: &'a str) -> Self {
        Self {
            fs,
            filter: PathFilter::new(policy),
            extension,
            skip_path: None,
        }
    }

    /// Never visit this file, even if it matches (used for the output itself)
    pub fn skipping(mut self, path: impl Into<PathBuf>) -> Self {
        self.skip_path = Some(path.into());
        self
    }

    /// Walk `root`, calling `visit` for each selected file in traversal order.
    pub fn walk<V>(&self, root: &Path, mut visit: V) -> RunReport
    where
        V: FnMut(&SourceFile) -> Result<EmitOutcome>,
    {
        let mut report = RunReport::default();
        self.walk_dir(root, "", &mut visit, &mut report);
        report
    }

    fn walk_dir<V>(&self, dir: &Path, relative: &str, visit: &mut V, report: &mut RunReport)
    where
        V: FnMut(&SourceFile) -> Result<EmitOutcome>,
    {
        let mut entries = match self.fs.list_entries(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("cannot list directory {}: {}", dir.display(), e);
                report.record_error(dir, e.to_string());
                return;
            }
        };
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        for entry in entries {
            let path = dir.join(&entry.name);
            let child = join_relative(relative, &entry.name);

            if entry.is_dir {
                if !self.filter.should_descend(&child) {
                    tracing::debug!("pruned directory {}", child);
                    report.pruned_dirs += 1;
                    continue;
                }
                self.walk_dir(&path, &child, visit, report);
                continue;
            }

            if !has_extension(&entry.name, self.extension) {
                continue;
            }
            if self.skip_path.as_deref() == Some(path.as_path()) {
                continue;
            }
            if !self.filter.should_emit(&child, &entry.name) {
                tracing::debug!("skipped file {}", child);
                report.skipped_files += 1;
                continue;
            }

            let content = match self.fs.read_text(&path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!("cannot read {}: {}", path.display(), e);
                    report.record_error(&path, e.to_string());
                    continue;
                }
            };

            let source = SourceFile::new(path, child, content);
            match visit(&source) {
                Ok(outcome) => {
                    tracing::info!("merged file: {}", source.path.display());
                    if outcome.partial {
                        tracing::warn!(
                            "unbalanced braces in {}, body elision stopped early",
                            source.path.display()
                        );
                    }
                    report.record_merged(source.path, outcome);
                }
                Err(e) => {
                    tracing::warn!("cannot emit {}: {}", source.path.display(), e);
                    report.record_error(&source.path, e.to_string());
                }
            }
        }
    }
}

//! Output artifact and per-file emission
//!
//! Each selected file becomes one block:
//!
//! ```text
//!
//!
//! === /abs/path/Foo.java ===
//!
//! <reduced text>
//! ```
//!
//! Blocks are appended in traversal order and never rewritten.

use crate::core::error::{DigestError, Result};
use crate::core::fs::{FileSystem, WriteMode};
use crate::core::models::{EmitOutcome, SourceFile, TransformedFile};
use crate::reducer;
use std::path::{Path, PathBuf};

/// Delimiter around the path in a provenance header
pub const PROVENANCE_MARKER: &str = "===";

/// Render one output block
pub fn render_block(path: &Path, text: &str) -> String {
    format!(
        "\n\n{marker} {} {marker}\n\n{}",
        path.display(),
        text,
        marker = PROVENANCE_MARKER
    )
}

/// Append-only output file. Truncated once when opened.
pub struct OutputArtifact<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    path: PathBuf,
}

impl<'a, F: FileSystem + ?Sized> OutputArtifact<'a, F> {
    /// Create or truncate the output. Failure here aborts the run.
    pub fn open(fs: &'a F, path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Err(e) = fs.write_text(&path, "", WriteMode::Truncate) {
            return Err(DigestError::OutputInit {
                path,
                source: Box::new(e),
            });
        }
        Ok(Self { fs, path })
    }

    pub fn append(&mut self, file: &TransformedFile) -> Result<()> {
        let block = render_block(&file.path, &file.content);
        self.fs.write_text(&self.path, &block, WriteMode::Append)
    }
}

/// Reduces accepted files and appends them to the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Emitter {
    elide_bodies: bool,
}

impl Emitter {
    pub fn new(elide_bodies: bool) -> Self {
        Self { elide_bodies }
    }

    pub fn transform(&self, source: &SourceFile) -> TransformedFile {
        let reduced = reducer::reduce(&source.content, self.elide_bodies);
        TransformedFile {
            path: source.path.clone(),
            content: reduced.content,
            elided: reduced.elided,
            partial: reduced.unterminated,
        }
    }

    /// Reduce `source` and append it. The outcome is only returned once the
    /// block is written.
    pub fn emit<F: FileSystem + ?Sized>(
        &self,
        source: &SourceFile,
        artifact: &mut OutputArtifact<'_, F>,
    ) -> Result<EmitOutcome> {
        let transformed = self.transform(source);
        artifact.append(&transformed)?;
        Ok(transformed.outcome())
    }
}

//! Core module for java-digest
//!
//! Everything around the reducer: selection policy, traversal, output and
//! the engine tying them together.
//!
//! # Architecture
//!
//! - `models`: Data structures (SelectionPolicy, SourceFile, DigestConfig, RunReport)
//! - `error`: Error types using thiserror
//! - `filter`: PathFilter predicates over a SelectionPolicy
//! - `fs`: FileSystem trait + OsFileSystem
//! - `walker`: Depth-first TreeWalker
//! - `emitter`: OutputArtifact and Emitter
//! - `engine`: DigestEngine orchestration

pub mod models;
pub mod error;
pub mod filter;
pub mod fs;
pub mod walker;
pub mod emitter;
pub mod engine;

// Re-export commonly used types
pub use models::{
    DigestConfig, EmitOutcome, FileConfig, RunReport, SelectionMode, SelectionPolicy,
    SourceFile, TestExclusionRules, TransformedFile, DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_FILE,
};
pub use error::{DigestError, Result};
pub use filter::PathFilter;
pub use fs::{DirEntry, FileSystem, OsFileSystem, WriteMode};
pub use walker::TreeWalker;
pub use emitter::{render_block, Emitter, OutputArtifact, PROVENANCE_MARKER};
pub use engine::{digest_project, DigestEngine};

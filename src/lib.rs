//! java-digest - structural digest of a Java source tree
//!
//! Walks a source tree, selects files by name and path, strips comments,
//! optionally collapses method bodies to empty blocks, and concatenates the
//! results into one text file with a provenance header per file:
//!
//! ```text
//!
//!
//! === /abs/path/BeanFactory.java ===
//!
//! public interface BeanFactory {
//!     Object getBean(String name);
//! }
//! ```
//!
//! # Architecture
//!
//! This crate follows the "Library-First" pattern:
//! - **reducer**: the text transforms (comment stripping, body elision)
//! - **core**: selection, traversal, output and orchestration
//! - **bin/java_digest.rs**: thin CLI wrapper that calls the library
//!
//! # Example
//!
//! ```
//! use java_digest::reducer::reduce;
//!
//! let src = "class A {\n    // id\n    long id() {\n        return 1;\n    }\n}\n";
//! let reduced = reduce(src, true);
//! assert_eq!(reduced.content, "class A {\n    long id(){\n}\n}\n");
//! assert_eq!(reduced.elided, 1);
//! ```

pub mod core;
pub mod reducer;

pub use crate::core::{
    digest_project, DigestConfig, DigestEngine, DigestError, RunReport, SelectionMode,
    SelectionPolicy,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

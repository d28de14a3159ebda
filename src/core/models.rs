//! Core data models for java-digest
//!
//! Selection policy, the per-file artifacts that flow through the reducer,
//! run configuration and the report returned at the end of a run.

use crate::core::error::{DigestError, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the project root
pub const DEFAULT_CONFIG_FILE: &str = ".java_digest_config.json";

/// Name of the output file written to the project root by default
pub const DEFAULT_OUTPUT_FILE: &str = "output.txt";

/// How files are selected once they pass the directory filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Every file passing the directory filters
    #[default]
    All,
    /// Only files whose name contains one of the name tokens
    ByName,
}

/// Fixed rules rejecting test sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestExclusionRules {
    /// Directory segment marking a test tree
    pub dir_name: String,
    /// Filename suffix of test classes (empty disables)
    pub suffix: String,
    /// Filename prefix of test classes (empty disables)
    pub prefix: String,
}

impl Default for TestExclusionRules {
    fn default() -> Self {
        Self {
            dir_name: "test".to_string(),
            suffix: "Test.java".to_string(),
            prefix: "Test".to_string(),
        }
    }
}

/// Declarative configuration deciding which directories are descended and
/// which files are emitted. Never mutated during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPolicy {
    pub mode: SelectionMode,
    pub excluded_dir_names: BTreeSet<String>,
    pub included_dir_names: BTreeSet<String>,
    pub name_tokens: BTreeSet<String>,
    pub test_rules: TestExclusionRules,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            mode: SelectionMode::All,
            excluded_dir_names: ["node_modules", ".git"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            included_dir_names: BTreeSet::new(),
            name_tokens: BTreeSet::new(),
            test_rules: TestExclusionRules::default(),
        }
    }
}

impl SelectionPolicy {
    /// Policy accepting every file, with no excluded directories
    pub fn all() -> Self {
        Self {
            excluded_dir_names: BTreeSet::new(),
            ..Self::default()
        }
    }

    /// Switch to by-name selection with the given tokens
    pub fn by_name<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mode = SelectionMode::ByName;
        self.name_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_excluded<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_dir_names.extend(dirs.into_iter().map(Into::into));
        self
    }

    pub fn with_included<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.included_dir_names.extend(dirs.into_iter().map(Into::into));
        self
    }

    pub fn with_test_rules(mut self, rules: TestExclusionRules) -> Self {
        self.test_rules = rules;
        self
    }
}

/// A source file as read from disk
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Absolute path, used in the provenance header
    pub path: PathBuf,
    /// Path relative to the walk root, `/`-separated
    pub relative_path: String,
    /// Raw text content
    pub content: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, relative_path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            relative_path: relative_path.into(),
            content: content.into(),
        }
    }
}

/// A source file after comment stripping and optional body elision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedFile {
    pub path: PathBuf,
    pub content: String,
    /// Method bodies collapsed
    pub elided: usize,
    /// Elision stopped at a body whose braces never balance
    pub partial: bool,
}

impl TransformedFile {
    pub fn outcome(&self) -> EmitOutcome {
        EmitOutcome {
            elided: self.elided,
            partial: self.partial,
        }
    }
}

/// What the reducer did to one emitted file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitOutcome {
    pub elided: usize,
    pub partial: bool,
}

/// Runtime configuration for one digest run
#[derive(Debug, Clone)]
pub struct DigestConfig {
    pub policy: SelectionPolicy,
    /// Target file extension without the dot, compared case-insensitively
    pub extension: String,
    /// Collapse method bodies to empty blocks
    pub elide_bodies: bool,
    /// Output artifact location (None = `<root>/output.txt`)
    pub output: Option<PathBuf>,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            policy: SelectionPolicy::default(),
            extension: "java".to_string(),
            elide_bodies: false,
            output: None,
        }
    }
}

impl DigestConfig {
    /// Create a new DigestConfig with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_elide_bodies(mut self, elide: bool) -> Self {
        self.elide_bodies = elide;
        self
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    /// Output location for a run rooted at `root`
    pub fn output_path(&self, root: &Path) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| root.join(DEFAULT_OUTPUT_FILE))
    }

    /// Load a config file and layer it over the defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let file: FileConfig = serde_json::from_str(&text)?;
        file.apply(Self::default())
    }
}

/// Configuration loaded from .java_digest_config.json
///
/// Every field is optional; absent fields keep the defaults.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub mode: Option<SelectionMode>,
    /// Replaces the default excluded directories when present
    #[serde(default)]
    pub exclude_dirs: Option<Vec<String>>,
    #[serde(default)]
    pub include_dirs: Vec<String>,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub elide_bodies: Option<bool>,
    #[serde(default)]
    pub test_dir: Option<String>,
    #[serde(default)]
    pub test_suffix: Option<String>,
    #[serde(default)]
    pub test_prefix: Option<String>,
}

impl FileConfig {
    /// Layer this file's settings over `base`
    pub fn apply(self, mut base: DigestConfig) -> Result<DigestConfig> {
        let policy = &mut base.policy;
        if let Some(dirs) = self.exclude_dirs {
            policy.excluded_dir_names = dirs.into_iter().collect();
        }
        policy.included_dir_names.extend(self.include_dirs);
        policy.name_tokens.extend(self.names);
        if let Some(mode) = self.mode {
            policy.mode = mode;
        } else if !policy.name_tokens.is_empty() {
            policy.mode = SelectionMode::ByName;
        }
        if policy.mode == SelectionMode::ByName && policy.name_tokens.is_empty() {
            return Err(DigestError::invalid_config(
                "mode \"by_name\" requires at least one entry in \"names\"",
            ));
        }
        if let Some(dir) = self.test_dir {
            policy.test_rules.dir_name = dir;
        }
        if let Some(suffix) = self.test_suffix {
            policy.test_rules.suffix = suffix;
        }
        if let Some(prefix) = self.test_prefix {
            policy.test_rules.prefix = prefix;
        }
        if let Some(ext) = self.extension {
            let ext = ext.trim_start_matches('.');
            if ext.is_empty() {
                return Err(DigestError::invalid_config("extension must not be empty"));
            }
            base.extension = ext.to_string();
        }
        if let Some(elide) = self.elide_bodies {
            base.elide_bodies = elide;
        }
        Ok(base)
    }
}

/// Outcome of a digest run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Files appended to the output, in emission order
    pub merged: Vec<PathBuf>,
    /// Files with the target extension rejected by the filter
    pub skipped_files: usize,
    /// Directories not descended into
    pub pruned_dirs: usize,
    /// Non-fatal errors (unlistable directories, unreadable files, failed appends)
    pub errors: Vec<(PathBuf, String)>,
    /// Merged files whose elision stopped early; the tail is emitted verbatim
    pub partial: Vec<PathBuf>,
    /// Method bodies collapsed across all merged files
    pub elided_bodies: usize,
}

impl RunReport {
    pub fn merged_count(&self) -> usize {
        self.merged.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub(crate) fn record_error(&mut self, path: &Path, message: impl Into<String>) {
        self.errors.push((path.to_path_buf(), message.into()));
    }

    pub(crate) fn record_merged(&mut self, path: PathBuf, outcome: EmitOutcome) {
        self.elided_bodies += outcome.elided;
        if outcome.partial {
            self.partial.push(path.clone());
        }
        self.merged.push(path);
    }
}

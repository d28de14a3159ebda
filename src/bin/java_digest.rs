//! java-digest CLI - Command-line interface
//!
//! Thin wrapper: clap parses arguments, the config file is layered under the
//! flags, and the library does the work.

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use java_digest::core::{
    digest_project, DigestConfig, SelectionMode, DEFAULT_CONFIG_FILE,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Merge the Java sources of a project into one digest with comments removed.
#[derive(Parser, Debug)]
#[command(name = "java-digest")]
#[command(version = java_digest::VERSION)]
#[command(about = "Merge Java sources into one comment-free digest, optionally with method bodies elided.")]
#[command(after_help = "Examples:
  # Everything except tests, bodies kept
  java-digest .

  # Only bean factory classes, signatures only
  java-digest . --name BeanFactory --name BeanDefinition --elide-bodies -o beans.txt

  # One module
  java-digest . --include-dir micro-spring-core
")]
struct Cli {
    /// The root directory of the project to digest
    #[arg(value_name = "PROJECT_ROOT", default_value = ".")]
    project_root: PathBuf,

    /// Output file path. Defaults to <PROJECT_ROOT>/output.txt
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Path to a JSON configuration file.
    /// Defaults to <PROJECT_ROOT>/.java_digest_config.json
    #[arg(short = 'c', long = "config", value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Selection mode. Giving --name implies by-name.
    #[arg(long = "mode", value_enum)]
    mode: Option<ModeArg>,

    /// Keep only files whose name contains one of these tokens
    #[arg(short = 'n', long = "name", value_name = "TOKEN")]
    names: Vec<String>,

    /// Directory names to skip. Adds to config excludes.
    #[arg(long = "exclude-dir", value_name = "DIR")]
    exclude_dirs: Vec<String>,

    /// Only descend into paths containing one of these directory names
    #[arg(long = "include-dir", value_name = "DIR")]
    include_dirs: Vec<String>,

    /// File extension to collect
    #[arg(long = "extension", value_name = "EXT")]
    extension: Option<String>,

    /// Collapse method bodies to empty blocks
    #[arg(long = "elide-bodies")]
    elide_bodies: bool,

    /// Log skipped files and pruned directories
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    All,
    ByName,
}

fn load_config(cli: &Cli) -> anyhow::Result<DigestConfig> {
    let mut config = match &cli.config {
        Some(path) => DigestConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => {
            let default_config = cli.project_root.join(DEFAULT_CONFIG_FILE);
            if default_config.exists() {
                DigestConfig::from_file(&default_config)
                    .with_context(|| format!("loading config {}", default_config.display()))?
            } else {
                DigestConfig::default()
            }
        }
    };

    // CLI overrides
    let policy = &mut config.policy;
    policy.excluded_dir_names.extend(cli.exclude_dirs.iter().cloned());
    policy.included_dir_names.extend(cli.include_dirs.iter().cloned());
    if !cli.names.is_empty() {
        policy.name_tokens = cli.names.iter().cloned().collect();
        policy.mode = SelectionMode::ByName;
    }
    if let Some(mode) = cli.mode {
        policy.mode = match mode {
            ModeArg::All => SelectionMode::All,
            ModeArg::ByName => SelectionMode::ByName,
        };
    }
    if policy.mode == SelectionMode::ByName && policy.name_tokens.is_empty() {
        bail!("--mode by-name needs at least one --name");
    }
    if let Some(ext) = &cli.extension {
        config = config.with_extension(ext);
    }
    if cli.elide_bodies {
        config.elide_bodies = true;
    }
    if let Some(output) = &cli.output {
        config.output = Some(output.clone());
    }
    Ok(config)
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = load_config(&cli)?;
    let (output, report) = digest_project(&cli.project_root, config)
        .with_context(|| format!("digesting {}", cli.project_root.display()))?;

    eprintln!(
        "Merged {} file(s) into {} ({} skipped, {} error(s))",
        report.merged_count(),
        output.display(),
        report.skipped_files,
        report.errors.len()
    );
    for path in &report.partial {
        eprintln!("warning: unbalanced braces, bodies kept after elision stopped: {}", path.display());
    }
    Ok(!report.has_errors())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        // Partial output was written; signal that some files are missing.
        Ok(false) => ExitCode::from(2),
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

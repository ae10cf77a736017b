//! depprint - print the modules and compile dependencies of a multi-module project.
//!
//! Usage:
//!   depprint modules [PATH]                 Report the leaf modules under PATH
//!   depprint dependencies --artifacts FILE  Report compile dependencies from a manifest
//!   depprint --help                         Show help

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use depprint_analyze::{ArtifactSource, DependencyFilter, DependencySetBuilder, JsonManifest};
use depprint_core::{PrintConfig, write_report};
use depprint_scan::{ModuleResolver, module_lines};

#[derive(Parser)]
#[command(
    name = "depprint",
    version,
    about = "Print the modules and dependencies of a multi-module project",
    long_about = "depprint writes a plain-text report, one `group:artifact:version` line per \
                  entry, into the build output directory.\n\n\
                  Use `modules` to list the leaf modules of a project tree, or `dependencies` \
                  to list the compile dependencies from a resolved artifact manifest."
)]
struct Cli {
    /// TOML config file; command-line flags override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log every reported record and the report location
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report the leaf modules of a project tree
    Modules {
        /// Project directory (any module of the tree)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Start at PATH instead of climbing to the aggregator root
        #[arg(long)]
        no_climb: bool,
    },

    /// Report the compile dependencies of a project
    Dependencies {
        /// JSON artifact manifest (`-` reads stdin)
        #[arg(short, long)]
        artifacts: PathBuf,
    },
}

/// Per-run overrides of the config file.
#[derive(Args, Clone)]
struct Overrides {
    /// Directory the report is written into
    #[arg(long, global = true)]
    output_directory: Option<PathBuf>,

    /// File name of the report
    #[arg(long, global = true)]
    output_file_name: Option<String>,

    /// Group id owned by the project (repeatable)
    #[arg(long = "project-group-id", global = true)]
    project_group_ids: Vec<String>,

    #[arg(long, global = true)]
    include_dependencies: Option<bool>,

    #[arg(long, global = true)]
    include_project_artifacts: Option<bool>,

    #[arg(long, global = true)]
    print_type: Option<bool>,

    #[arg(long, global = true)]
    print_packaging: Option<bool>,

    #[arg(long, global = true)]
    print_group_id: Option<bool>,

    #[arg(long, global = true)]
    print_artifact_id: Option<bool>,

    #[arg(long, global = true)]
    print_version: Option<bool>,

    #[arg(long, global = true)]
    print_repository_url: Option<bool>,
}

impl Overrides {
    fn apply(self, config: &mut PrintConfig) {
        if let Some(dir) = self.output_directory {
            config.output_directory = dir;
        }
        if let Some(name) = self.output_file_name {
            config.output_file_name = name;
        }
        if !self.project_group_ids.is_empty() {
            config.project_group_ids = self.project_group_ids.into_iter().collect::<BTreeSet<_>>();
        }

        let toggles = [
            (self.include_dependencies, &mut config.include_dependencies),
            (self.include_project_artifacts, &mut config.include_project_artifacts),
            (self.print_type, &mut config.print_type),
            (self.print_packaging, &mut config.print_packaging),
            (self.print_group_id, &mut config.print_group_id),
            (self.print_artifact_id, &mut config.print_artifact_id),
            (self.print_version, &mut config.print_version),
            (self.print_repository_url, &mut config.print_repository_url),
        ];
        for (value, field) in toggles {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(config.verbose);

    run(cli.command, &config)?;
    Ok(())
}

/// Set up the tracing subscriber. `RUST_LOG` wins over the verbose flag.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Assemble the run configuration from the config file and flags.
fn load_config(cli: &Cli) -> Result<PrintConfig> {
    let mut config = match &cli.config {
        Some(path) => PrintConfig::from_toml_file(path)
            .wrap_err_with(|| format!("Failed to load config {}", path.display()))?,
        None => PrintConfig::default(),
    };

    cli.overrides.clone().apply(&mut config);
    if cli.verbose {
        config.verbose = true;
    }

    config.validate().wrap_err("Invalid configuration")?;
    Ok(config)
}

/// Build the requested report and write it. Returns the report path.
fn run(command: Command, config: &PrintConfig) -> Result<PathBuf> {
    if config.prints_nothing() {
        tracing::warn!("every print toggle is off; report lines will be empty");
    }

    let lines = match command {
        Command::Modules { path, no_climb } => run_modules(path, no_climb, config)?,
        Command::Dependencies { artifacts } => run_dependencies(artifacts, config)?,
    };

    let path = write_report(config, &lines).context("Failed to write report")?;
    Ok(path)
}

fn run_modules(path: PathBuf, no_climb: bool, config: &PrintConfig) -> Result<Vec<String>> {
    let tree = ModuleResolver::new()
        .climb_to_root(!no_climb)
        .resolve(&path)
        .wrap_err_with(|| format!("Failed to resolve modules of {}", path.display()))?;

    tracing::debug!(
        root = %tree.root_path().display(),
        leaves = tree.leaf_count(),
        descriptors = tree.stats.descriptors_read,
        missing = tree.stats.missing_descriptors,
        truncated = tree.was_truncated(),
        elapsed_ms = tree.scan_duration.as_millis() as u64,
        "module tree resolved"
    );

    Ok(module_lines(&tree, config))
}

fn run_dependencies(artifacts: PathBuf, config: &PrintConfig) -> Result<Vec<String>> {
    let artifacts = JsonManifest::new(artifacts)
        .artifacts()
        .context("Failed to read artifact manifest")?;

    let report = DependencySetBuilder::with_filter(DependencyFilter::from(config)).build(artifacts);
    tracing::debug!(
        input = report.input_count,
        duplicates = report.duplicates_dropped,
        compile = report.compile_count,
        project_dropped = report.project_dropped,
        external_dropped = report.external_dropped,
        "dependency set built"
    );

    Ok(report.lines(config))
}

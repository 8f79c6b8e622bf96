/// netfacts: extract C# facts as JSON
///
/// Modes:
/// - file: extract one file, compiled on its own
/// - project: extract every source file of a directory as one compilation
/// - inspect: read a JSON model back through the converter list
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use netfacts::config::FactsConfig;
use netfacts::extractor::FactExtractor;
use netfacts::models::{ClassType, CompilationUnitType, ProjectModel};
use netfacts::project::{CancellationToken, ProjectLoader, extract_file};

#[derive(Parser)]
#[command(name = "netfacts")]
#[command(about = "Extract classes, members, relationships and complexity from C# sources", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract facts from a single source file
    File {
        /// Path to the source file
        path: PathBuf,

        /// Print compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Extract facts from every source file under a directory
    Project {
        /// Project root directory
        directory: PathBuf,

        /// Write JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to netfacts.toml in the directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Summarize a project or compilation unit JSON file
    Inspect {
        /// JSON produced by `file` or `project`
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::File { path, compact } => {
            let unit = extract_file(&path, &FactExtractor::new())?;
            write_json(&unit, !compact, None)?;
        }
        Commands::Project {
            directory,
            output,
            config,
        } => {
            let config = match config {
                Some(path) => FactsConfig::load(&path)?,
                None => FactsConfig::for_project(&directory)?,
            };
            let pretty = config.pretty;
            let loader = ProjectLoader::new(config);
            let project = loader.load(&directory, &CancellationToken::new())?;
            write_json(&project, pretty, output.as_deref())?;
        }
        Commands::Inspect { path } => {
            inspect(&path)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays valid JSON.
fn init_logging() {
    let filter = EnvFilter::try_from_env("NETFACTS_LOG")
        .unwrap_or_else(|_| EnvFilter::new("netfacts=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn write_json<T: Serialize>(value: &T, pretty: bool, output: Option<&Path>) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }
    Ok(())
}

fn inspect(path: &Path) -> Result<()> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    let units: Vec<CompilationUnitType> = if value.get("CompilationUnits").is_some() {
        let project: ProjectModel =
            serde_json::from_value(value).context("Failed to read project model")?;
        println!(
            "project {} ({} units, {} namespaces)",
            project.name,
            project.compilation_units.len(),
            project.namespaces.len()
        );
        project.compilation_units
    } else {
        vec![serde_json::from_value(value).context("Failed to read compilation unit")?]
    };

    for unit in &units {
        println!("{}", unit.file_path);
        for class_type in &unit.class_types {
            println!("  {}", summarize(class_type));
        }
    }
    Ok(())
}

fn summarize(class_type: &ClassType) -> String {
    let details = match class_type {
        ClassType::Class(model) => format!(
            "{} fields, {} properties, {} methods",
            model.fields.len(),
            model.properties.len(),
            model.methods.len()
        ),
        ClassType::Enum(model) => format!("{} labels", model.labels.len()),
        ClassType::Delegate(model) => format!("{} parameters", model.parameters.len()),
    };
    format!(
        "{} {} [{}]: {}",
        class_type.class_type(),
        class_type.name(),
        class_type.language(),
        details
    )
}

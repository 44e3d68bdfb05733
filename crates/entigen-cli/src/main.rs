use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use entigen_core::{has_stereotype, ClassOutcome, Config, GenerationReport, ModelReader};
use entigen_engine::emitter::ENTITY_STEREOTYPE;
use entigen_engine::{FileHeader, FsSink, Generator, HeaderProvider, StaticHeader};
use entigen_model::InMemoryModel;

const DEFAULT_CONFIG: &str = "entigen.toml";

/// Entigen - persistence-annotated entity source generator
#[derive(Parser)]
#[command(name = "entigen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config file (default: entigen.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one source file per selected class
    Generate {
        /// Classes to generate (all classes if none given)
        classes: Vec<String>,

        /// Path to the exported model
        #[arg(short, long, default_value = "model.json")]
        model: PathBuf,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// License header file (overrides config)
        #[arg(long)]
        header: Option<PathBuf>,

        /// Write a JSON generation report
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// List the classes in a model
    List {
        /// Path to the exported model
        #[arg(short, long, default_value = "model.json")]
        model: PathBuf,
    },

    /// Write a default configuration file
    InitConfig {
        /// Where to write the config
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref(), cli.verbose)?;

    match cli.command {
        Commands::Generate {
            classes,
            model,
            output,
            header,
            report,
        } => generate_command(&config, &classes, &model, output, header, report.as_deref(), cli.verbose),
        Commands::List { model } => list_command(&config, &model),
        Commands::InitConfig { path, force } => init_config_command(&path, force),
    }
}

/// Log to stderr; RUST_LOG wins over the verbosity flag
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load_config(path: Option<&Path>, verbose: bool) -> Result<Config> {
    let config = if let Some(config_path) = path {
        Config::from_file(config_path)
            .with_context(|| format!("Failed to load config {}", config_path.display()))?
    } else if Path::new(DEFAULT_CONFIG).exists() {
        Config::from_file(Path::new(DEFAULT_CONFIG))?
    } else {
        if verbose {
            eprintln!("{}", "No config file found, using defaults".yellow());
        }
        Config::default()
    };

    if verbose {
        eprintln!("{} profile: {}", "Using".cyan(), config.profile);
    }

    Ok(config)
}

fn load_model(path: &Path) -> Result<InMemoryModel> {
    InMemoryModel::from_file(path).with_context(|| format!("Failed to load model {}", path.display()))
}

/// Generate command - emit one file per selected class
fn generate_command(
    config: &Config,
    classes: &[String],
    model_path: &Path,
    output: Option<PathBuf>,
    header: Option<PathBuf>,
    report_path: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let model = load_model(model_path)?;
    let output_dir = output.unwrap_or_else(|| config.output_dir());

    if verbose {
        eprintln!("{} {}", "Loaded model from:".cyan(), model_path.display());
        eprintln!("{} {}", "Writing to:".cyan(), output_dir.display());
    }

    let header: Box<dyn HeaderProvider> = match header.or_else(|| config.header_path()) {
        Some(path) => Box::new(FileHeader::new(path)),
        None => Box::new(StaticHeader::default()),
    };

    let mut sink = FsSink::new(&output_dir);
    let report = Generator::new(config).run(&model, classes, header.as_ref(), &mut sink);

    if let Some(path) = report_path {
        report
            .save_to_file(path)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        if verbose {
            eprintln!("{} {}", "Report written to:".cyan(), path.display());
        }
    }

    print_report_summary(&report, sink.root());

    if report.has_failures() {
        anyhow::bail!("{} of {} classes failed", report.summary.failed, report.summary.selected);
    }

    Ok(())
}

/// List command - show classes and how they would be generated
fn list_command(config: &Config, model_path: &Path) -> Result<()> {
    let model = load_model(model_path)?;

    if model.is_empty() {
        println!("{}", "Model contains no classes".yellow());
        return Ok(());
    }

    for class in model.classes() {
        let kind = if has_stereotype(&class.stereotypes, ENTITY_STEREOTYPE, &config.profile) {
            "entity".green()
        } else {
            "class".normal()
        };

        println!(
            "{} {} [{}] {} attributes, {} association ends",
            class.name.bold(),
            class.package_name().dimmed(),
            kind,
            class.attributes.len(),
            class.association_ends.len()
        );
    }

    Ok(())
}

/// Init config command - write defaults for editing
fn init_config_command(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    Config::default()
        .save_to_file(path)
        .with_context(|| format!("Failed to write config {}", path.display()))?;

    println!("{} {}", "Wrote".green(), path.display());
    Ok(())
}

/// Print run summary to stdout
fn print_report_summary(report: &GenerationReport, output_dir: &Path) {
    println!("\n{}", "=".repeat(60).bright_blue());
    println!("{}", "Entity Generation Report".bold().bright_blue());
    println!("{}", "=".repeat(60).bright_blue());
    println!();

    println!("Output: {}", output_dir.display());
    println!("Timestamp: {}", report.timestamp);
    println!();

    println!("{}", "Summary:".bold());
    println!("  Selected:  {}", report.summary.selected);
    println!("  Generated: {}", format!("{}", report.summary.generated).green());

    if report.summary.failed > 0 {
        println!("  Failed:    {}", format!("{}", report.summary.failed).red().bold());
    } else {
        println!("  Failed:    {}", format!("{}", report.summary.failed).green());
    }
    println!();

    for outcome in &report.outcomes {
        match outcome {
            ClassOutcome::Generated { class, path } => {
                println!("  [{}] {} -> {}", "OK".green(), class, path.display());
            }
            ClassOutcome::Failed { class, message } => {
                println!("  [{}] {}: {}", "FAIL".red().bold(), class, message);
            }
        }
    }

    println!();
    println!("{}", "=".repeat(60).bright_blue());
}

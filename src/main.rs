//! printmark - Markdown to print-document content converter
//!
//! CLI entry point

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use printmark::{
    document_value, exit_codes, export_filename, Cli, CliOverrides, Commands, Config,
    ConvertArgs, DocumentMetadata, DocumentRenderer, JsonRenderer, MarkdownConverter,
};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert(args) => run_convert(&args),
        Commands::Info => run_info(),
    };

    std::process::exit(match result {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_codes::GENERAL_ERROR
        }
    });
}

// ============ Convert Command ============

fn run_convert(args: &ConvertArgs) -> anyhow::Result<()> {
    init_tracing(args.verbose);
    let start_time = Instant::now();

    let markdown = read_input(&args.input)?;

    // Load config file if specified, otherwise search the default locations
    let file_config = match &args.config {
        Some(config_path) => match Config::load_from_path(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Warning: Failed to load config file: {}", e);
                Config::default()
            }
        },
        None => Config::load().unwrap_or_default(),
    };

    // Merge config file with CLI arguments (CLI takes precedence)
    let overrides = create_cli_overrides(args);
    let config = file_config.merge_with_cli(&overrides);
    let metadata = config.metadata.clone();

    let converter = MarkdownConverter::new();
    let blocks = converter.convert(&markdown);

    match &args.output {
        Some(path) => {
            let renderer = if config.output.pretty {
                JsonRenderer::new(path)
            } else {
                JsonRenderer::new(path).compact()
            };
            let rendered = renderer
                .render(&blocks, &metadata)
                .with_context(|| format!("writing {}", path.display()))?;

            if !args.quiet {
                println!(
                    "Wrote {} ({} blocks, {:.2}s)",
                    rendered.reference,
                    blocks.len(),
                    start_time.elapsed().as_secs_f64()
                );
                println!("Suggested filename: {}", export_filename(&metadata));
            }
        }
        None => {
            let document = document_value(&blocks, &metadata);
            let serialized = if config.output.pretty {
                serde_json::to_string_pretty(&document)?
            } else {
                serde_json::to_string(&document)?
            };
            println!("{}", serialized);
        }
    }

    Ok(())
}

/// Read markdown from a file, or from stdin when the input is `-`
fn read_input(input: &Path) -> anyhow::Result<String> {
    if input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("reading stdin")?;
        return Ok(buffer);
    }

    if !input.exists() {
        eprintln!("Error: Input path does not exist: {}", input.display());
        std::process::exit(exit_codes::INPUT_NOT_FOUND);
    }

    std::fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))
}

/// Create CLI overrides from ConvertArgs.
///
/// Only values the user passed explicitly are carried over, so config file
/// defaults survive unless overridden.
fn create_cli_overrides(args: &ConvertArgs) -> CliOverrides {
    let mut overrides = CliOverrides::new();

    overrides.metadata = DocumentMetadata {
        title: args.title.clone(),
        author: args.author.clone(),
        subject: args.subject.clone(),
        keywords: args.keywords.clone(),
        ..Default::default()
    };

    if args.compact {
        overrides.pretty = Some(false);
    }

    overrides
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

// ============ Info Command ============

fn run_info() -> anyhow::Result<()> {
    println!("printmark v{}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("System Information:");
    println!("  Platform: {}", std::env::consts::OS);
    println!("  Arch: {}", std::env::consts::ARCH);

    println!();
    println!("Config File Locations:");
    println!("  Local: ./{}", printmark::config::CONFIG_FILENAME);
    if let Some(config_dir) = dirs::config_dir() {
        println!(
            "  User:  {}",
            config_dir.join(printmark::config::USER_CONFIG_PATH).display()
        );
    }

    Ok(())
}

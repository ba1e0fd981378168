//! Tether Code Generator
//!
//! Generates typed forwarding clients from tether API descriptors.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tether_gen::config::{DEFAULT_NAMESPACE, DEFAULT_RUNTIME_PATH};
use tether_gen::output::{output_path, write_atomic};
use tether_gen::{DescriptorSource, Diagnostics, GeneratorConfig, GeneratorError, compile};

/// Tether code generator - turns API descriptors into typed forwarding clients
#[derive(Parser, Debug)]
#[command(name = "tether-gen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Descriptor file and the module path it occupies (e.g. src/orders.rs=crate::orders)
    #[arg(short, long = "descriptor", value_name = "FILE=MODULE", required = true)]
    descriptors: Vec<DescriptorSource>,

    /// Root node to generate (repeatable); defaults to every parentless node
    #[arg(short, long = "root", value_name = "NAME")]
    roots: Vec<String>,

    /// Output namespace, used as the generated file name
    #[arg(short, long, default_value = DEFAULT_NAMESPACE)]
    namespace: String,

    /// Path to the runtime crate in generated code
    #[arg(long, default_value = DEFAULT_RUNTIME_PATH)]
    runtime: String,

    /// Output directory for generated code
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Print generated code without writing files
    #[arg(long)]
    dry_run: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v.
    let base_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        match cli.verbose {
            0 => "warn",
            1 => "warn,tether_gen=info",
            2 => "info,tether_gen=debug",
            _ => "debug,tether_gen=trace",
        }
        .to_string()
    });
    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(GeneratorError::Diagnostics(diagnostics)) => {
            print_diagnostics(&diagnostics);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), GeneratorError> {
    let config = GeneratorConfig {
        sources: cli.descriptors,
        roots: cli.roots,
        namespace: cli.namespace,
        runtime_path: cli.runtime,
    };

    info!(sources = config.sources.len(), "scanning descriptors");
    let generation = compile(&config)?.into_clean()?;

    if cli.dry_run {
        println!("{}", generation.code);
        return Ok(());
    }

    let path = output_path(&cli.output, &config.namespace);
    write_atomic(&path, &generation.code)?;
    eprintln!(
        "{} {} ({} operations in {} modules)",
        "generated".green().bold(),
        path.display(),
        generation.tree.operation_count(),
        generation.tree.unit_count()
    );
    Ok(())
}

fn print_diagnostics(diagnostics: &Diagnostics) {
    for diagnostic in diagnostics {
        let label = format!("{}:", diagnostic.kind.label());
        eprintln!("{} {diagnostic}", label.red().bold());
    }
    eprintln!(
        "{} {} problem(s) found; nothing was written",
        "error:".red().bold(),
        diagnostics.len()
    );
}

use std::{path::PathBuf, process::ExitCode};

use clap::{ArgAction, Parser};
use fair_hash::{run, FunctionName, GeneratorConfig, DEFAULT_SEED};
use tracing_subscriber::EnvFilter;

/// Generate a fair and evenly distributed hash function in SystemVerilog.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Width of the input key in bits (e.g., 4 for 0-15)
    #[arg(short, long)]
    key_width: u32,

    /// Random seed for reproducibility
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Output file path to save the SystemVerilog function
    #[arg(short, long)]
    output: PathBuf,

    /// Name of the generated function
    #[arg(short, long, default_value = FunctionName::DEFAULT)]
    name: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_config(cli: Cli) -> fair_hash::Result<GeneratorConfig> {
    let name = FunctionName::new(cli.name)?;
    Ok(GeneratorConfig::new(cli.key_width, cli.output)?
        .with_seed(cli.seed)
        .with_function_name(name))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = build_config(cli).and_then(|config| {
        let path = run(&config)?;
        println!("SystemVerilog fair hash function saved to: {}", path.display());
        Ok(())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

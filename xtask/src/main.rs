// Licensed under the Apache-2.0 license

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use mems_reg_config_conv::FileType;
use simple_logger::SimpleLogger;
use std::path::PathBuf;

mod reg_config_gen;

#[derive(Parser)]
#[command(name = "xtask", version, about = "MEMS register configuration tasks")]
struct Xtask {
    #[command(subcommand)]
    xtask: Commands,

    /// Log every pipeline stage
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Rust register table from a JSON or UCF configuration
    RegConfigGen(RegConfigArgs),
    /// Check that a generated register table matches its configuration
    RegConfigCheck(RegConfigArgs),
}

#[derive(Args, Debug)]
pub(crate) struct RegConfigArgs {
    /// Input configuration file
    #[arg(long, value_name = "FILE")]
    pub input: PathBuf,

    /// Generated Rust file
    #[arg(long, value_name = "FILE")]
    pub output: PathBuf,

    /// Name of the generated const array
    #[arg(long)]
    pub array_name: String,

    /// Sensor the configuration targets
    #[arg(long)]
    pub sensor_id: String,

    /// Input format: json or ucf
    #[arg(long)]
    pub file_type: FileType,

    /// Rust path that provides `UcfLineExt` and `MemsUcfOp` to the generated file
    #[arg(long)]
    pub entry_path: Option<String>,

    /// License text placed at the top of the generated file
    #[arg(long)]
    pub license_header: Option<String>,
}

fn main() {
    let cli = Xtask::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    let result = match &cli.xtask {
        Commands::RegConfigGen(args) => reg_config_gen::generate(args),
        Commands::RegConfigCheck(args) => reg_config_gen::check(args),
    };
    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

use crate::config::Config;
use crate::school::School;
use clap::Parser;
use eyre::Error;
use tracing_subscriber::EnvFilter;

mod config;
mod display;
mod errors;
mod export;
mod model;
mod school;
mod shell;
mod stats;

#[derive(Debug, Parser)]
#[command(version, about = "Track students, teachers and per-course gradebooks")]
struct Args {
    /// Use FILE instead of registrar.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), Error> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(format!("registrar={level}"))?)
        .init();
    let config = match &args.config {
        Some(file_name) => Config::load(file_name)?,
        None => Config::load_or_default("registrar.toml")?,
    };
    let mut school = School::new();
    shell::run(&mut school, &config, std::io::stdin().lock())
}

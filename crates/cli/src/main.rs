//! gfcalc - Command-line calculator for finite fields GF(p^k)
//!
//! Elements are addressed by index: the base-p digits of an index are the
//! coefficients of its polynomial, constant term first.

mod commands;
mod config;
mod error;
mod formats;
mod operation;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::Commands;
use config::Config;

#[derive(Parser)]
#[command(
    name = "gfcalc",
    version,
    about = "gfcalc - Finite field arithmetic calculator",
    long_about = "A command-line calculator for finite fields GF(p^k). Elements are numbered \
                  by the base-p digits of their polynomial coefficients; products are reduced \
                  modulo an irreducible polynomial given on the command line, in the config \
                  file, or found by search."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let config = Config::load(cli.config.as_deref())?;

    match cli.command.execute(&config) {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);

            if cli.verbose {
                for cause in e.chain().skip(1) {
                    eprintln!("  Caused by: {}", cause);
                }
            }
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}

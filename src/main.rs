//! Basis conversion CLI
//!
//! Lists the supported Keplerian fitting bases and converts CSV parameter tables
//! (one row per sample) between a fitting basis and the CPS basis.
//!
//! Usage:
//!   rvbasis list
//!   rvbasis convert --basis "per tc secosw sesinw logk" --planets 2 \
//!                   --input chains.csv --output chains_cps.csv

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rvbasis::basis::{transform::Basis, BasisListing};
use rvbasis::params::table::ParamTable;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "rvbasis",
    about = "Convert radial-velocity orbital parameters between fitting bases"
)]
struct Args {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the supported basis names
    List,

    /// Convert a CSV parameter table
    Convert {
        /// Basis name, e.g. "per tc secosw sesinw logk"
        #[arg(short, long)]
        basis: String,

        /// Number of planets in each row
        #[arg(short = 'n', long, default_value_t = 1)]
        planets: usize,

        /// Input CSV file with a header row
        #[arg(short, long)]
        input: PathBuf,

        /// Output CSV file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Convert from the CPS basis to `--basis` instead
        #[arg(long)]
        reverse: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match args.command {
        Command::List => {
            println!("{}", BasisListing);
        }
        Command::Convert {
            basis,
            planets,
            input,
            output,
            reverse,
        } => {
            let basis = Basis::new(&basis, planets).with_context(|| {
                format!("cannot build basis transformer\n{}", BasisListing)
            })?;

            let table = ParamTable::from_csv_path(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            info!("Loaded {} rows from {:?}", table.len(), input);

            let converted = if reverse {
                basis.from_canonical_table(&table)?
            } else {
                basis.to_canonical_table(&table)?
            };
            if let Some(first) = converted.rows().first() {
                debug!("First converted row:\n{}", first);
            }

            match output {
                Some(path) => {
                    converted
                        .to_csv_path(&path)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!("Wrote {} rows to {:?}", converted.len(), path);
                }
                None => converted.to_csv_writer(io::stdout().lock())?,
            }
        }
    }

    Ok(())
}

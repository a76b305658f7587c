//! CLI frontend for the day reachability calculator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dayreach",
    about = "Day reachability: which days 1-31 multiply up to a number 1-65",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    options: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args)]
struct GlobalOptions {
    /// First day searched (inclusive)
    #[arg(long, global = true, default_value = "1")]
    first_day: u8,

    /// Last day searched (inclusive)
    #[arg(long, global = true, default_value = "31")]
    last_day: u8,

    /// Decimal places for fractional probabilities
    #[arg(long, global = true, default_value = "5")]
    decimals: usize,

    /// Decimal places for percentages
    #[arg(long, global = true, default_value = "2")]
    percent_decimals: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which days reach a number and how likely it is
    Check {
        /// Target number (1-65)
        number: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the probability of every number 1-65
    Table,

    /// Show the most and least likely numbers
    Insights,

    /// Export the probability table as CSV
    Export {
        /// Output file path
        #[arg(short, long, default_value = "day_probabilities.csv")]
        output: PathBuf,

        /// Replace the output file if it already exists
        #[arg(short, long)]
        force: bool,
    },

    /// Draw the probability distribution as a bar chart
    Chart {
        /// Write an SVG chart to this path instead of printing to the terminal
        #[arg(long)]
        svg: Option<PathBuf>,

        /// Replace the SVG file if it already exists
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    dr_core::logging::init_tracing();

    let cli = Cli::parse();
    let opts = &cli.options;

    let result = commands::config(
        opts.first_day,
        opts.last_day,
        opts.decimals,
        opts.percent_decimals,
    )
    .and_then(|config| match cli.command {
        Commands::Check { number, json } => commands::check::run(&config, &number, json),
        Commands::Table => commands::table::run(&config),
        Commands::Insights => commands::insights::run(&config),
        Commands::Export { output, force } => commands::export::run(&config, &output, force),
        Commands::Chart { svg, force } => commands::chart::run(&config, svg.as_deref(), force),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "molw",
    about = "Molecular weight computation from chemical formulas",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute molecular weights of one or more formulas
    #[command(visible_alias = "w")]
    Weight(WeightArgs),

    /// Print the element table
    #[command(visible_alias = "t")]
    Table(TableArgs),
}

/// Element table options shared by all commands.
#[derive(Args)]
pub struct TableOptions {
    /// Custom element table (TOML file, 112 ordered records)
    #[arg(long = "elements", value_name = "FILE")]
    pub elements: Option<PathBuf>,
}

#[derive(Args)]
pub struct WeightArgs {
    /// Chemical formulas (read line by line from stdin if omitted)
    #[arg(value_name = "FORMULA")]
    pub formulas: Vec<String>,

    #[command(flatten)]
    pub table: TableOptions,

    /// Decimal places in printed weights
    #[arg(short, long, value_name = "N", default_value = "4")]
    pub precision: usize,
}

#[derive(Args)]
pub struct TableArgs {
    #[command(flatten)]
    pub table: TableOptions,

    /// Only print these symbols (comma-separated)
    #[arg(long, value_name = "SYM", value_delimiter = ',')]
    pub symbols: Vec<String>,
}

pub fn parse() -> Cli {
    Cli::parse()
}

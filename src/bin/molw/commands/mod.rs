mod table;
mod weight;

use std::fs;

use anyhow::{Context, Result};

use molweight::MolecularWeightCalculator;

use crate::cli::{Command, TableOptions};

pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Weight(args) => weight::run_weight(args),
        Command::Table(args) => table::run_table(args),
    }
}

pub(crate) fn build_calculator(opts: &TableOptions) -> Result<MolecularWeightCalculator> {
    match &opts.elements {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read element table '{}'", path.display()))?;
            let records = molweight::data::parse_elements(&text)
                .with_context(|| format!("Failed to parse element table '{}'", path.display()))?;
            MolecularWeightCalculator::from_records(records)
                .context("Element table failed validation")
        }
        None => MolecularWeightCalculator::new().context("Built-in element table is unusable"),
    }
}

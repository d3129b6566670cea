use std::io::{self, BufRead, IsTerminal};

use anyhow::{bail, Context, Result};

use molweight::MolecularWeightCalculator;

use crate::cli::WeightArgs;
use crate::commands::build_calculator;

pub fn run_weight(args: WeightArgs) -> Result<()> {
    let calc = build_calculator(&args.table)?;

    if !args.formulas.is_empty() {
        for formula in &args.formulas {
            print_weight(&calc, formula, args.precision)?;
        }
        return Ok(());
    }

    if io::stdin().is_terminal() {
        bail!(
            "No formula specified and stdin is a terminal.\n\nUsage: molw weight <FORMULA> or pipe formulas via stdin."
        );
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let formula = line.trim();
        if formula.is_empty() {
            continue;
        }
        print_weight(&calc, formula, args.precision)?;
    }

    Ok(())
}

fn print_weight(calc: &MolecularWeightCalculator, formula: &str, precision: usize) -> Result<()> {
    let weight = calc
        .compute_weight(formula)
        .with_context(|| format!("Failed to compute the weight of '{}'", formula))?;
    println!("{}\t{:.*}", formula, precision, weight);
    Ok(())
}

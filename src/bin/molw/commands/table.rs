use anyhow::{bail, Result};

use crate::cli::TableArgs;
use crate::commands::build_calculator;

pub fn run_table(args: TableArgs) -> Result<()> {
    let calc = build_calculator(&args.table)?;
    let data = calc.data();

    let mut records: Vec<_> = if args.symbols.is_empty() {
        data.values().collect()
    } else {
        let mut selected = Vec::with_capacity(args.symbols.len());
        for symbol in &args.symbols {
            match data.get(symbol) {
                Some(record) => selected.push(record),
                None => bail!("Unknown element symbol '{}'", symbol),
            }
        }
        selected
    };
    records.sort_by_key(|record| record.number);

    println!("{:>4}  {:<4}  {:<14}  {:>10}", "Z", "Sym", "Name", "Mass");
    for record in records {
        println!(
            "{:>4}  {:<4}  {:<14}  {:>10.4}",
            record.number, record.symbol, record.name, record.mass
        );
    }

    Ok(())
}

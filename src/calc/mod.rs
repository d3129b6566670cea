mod dialect;
mod group;
mod simple;
mod tokenizer;

use std::collections::BTreeMap;

use crate::data;
use crate::error::Error;
use crate::model::{ElementRecord, ElementTable};
use tokenizer::SymbolTrie;

/// Ceiling on dialect-rewrite recursion. The rewrites (dash, ion marker,
/// compound) re-enter the full dispatcher, so crafted chained input could
/// otherwise grow the call stack without bound.
const MAX_RECURSION_DEPTH: usize = 64;

/// What one dialect stage reports for a formula.
enum Outcome {
    Matched(f64),
    NotApplicable,
}

type Stage = fn(&MolecularWeightCalculator, &str, usize) -> Result<Outcome, Error>;

/// The five dialect stages, tried in order; the first match wins.
const STAGES: &[Stage] = &[
    MolecularWeightCalculator::try_simple,
    MolecularWeightCalculator::try_groups,
    MolecularWeightCalculator::try_dashes,
    MolecularWeightCalculator::try_ion_markers,
    MolecularWeightCalculator::try_compound,
];

/// Computes molecular weights from textual chemical formulas.
///
/// The element table and the symbol matcher are built once at construction
/// and never mutated; each [`compute_weight`](Self::compute_weight) call
/// only builds private per-call state, so a constructed instance can be
/// shared freely across threads.
#[derive(Debug)]
pub struct MolecularWeightCalculator {
    table: ElementTable,
    trie: SymbolTrie,
}

impl MolecularWeightCalculator {
    /// Builds a calculator over the built-in element table.
    pub fn new() -> Result<Self, Error> {
        Self::from_records(data::default_elements().to_vec())
    }

    /// Builds a calculator over an injected element table.
    ///
    /// The records must satisfy the table contract (see
    /// [`ElementTable::from_records`]); violations fail with
    /// [`Error::CorruptedData`] and no instance is produced.
    pub fn from_records(records: Vec<ElementRecord>) -> Result<Self, Error> {
        let table = ElementTable::from_records(records)?;
        let trie = SymbolTrie::new(table.symbols().map(str::to_string));
        Ok(Self { table, trie })
    }

    /// Computes the molecular weight of `formula`.
    ///
    /// The formula is trimmed first; empty or blank input fails with
    /// [`Error::EmptyFormula`]. Five notations are recognized: flat
    /// symbol+quantity sequences, bracketed groups, dash-separated parts,
    /// oxidation-state markers, and middle-dot hydrate compounds. A
    /// formula that is malformed for its notation fails with
    /// [`Error::InvalidFormula`]; one that matches no notation fails with
    /// [`Error::UnableToCompute`].
    pub fn compute_weight(&self, formula: &str) -> Result<f64, Error> {
        self.dispatch(formula, 0)
    }

    /// The validated element table, keyed by symbol.
    pub fn data(&self) -> &BTreeMap<String, ElementRecord> {
        self.table.records()
    }

    fn dispatch(&self, formula: &str, depth: usize) -> Result<f64, Error> {
        if depth > MAX_RECURSION_DEPTH {
            return Err(Error::unable_to_compute(formula));
        }

        let formula = formula.trim();
        if formula.is_empty() {
            return Err(Error::EmptyFormula);
        }

        for stage in STAGES {
            if let Outcome::Matched(weight) = stage(self, formula, depth)? {
                return Ok(weight);
            }
        }
        Err(Error::unable_to_compute(formula))
    }

    fn try_simple(&self, formula: &str, _depth: usize) -> Result<Outcome, Error> {
        if !simple::is_applicable(formula) {
            return Ok(Outcome::NotApplicable);
        }
        simple::evaluate(&self.table, &self.trie, formula).map(Outcome::Matched)
    }

    fn try_groups(&self, formula: &str, _depth: usize) -> Result<Outcome, Error> {
        if !group::is_applicable(formula) {
            return Ok(Outcome::NotApplicable);
        }
        group::evaluate(&self.table, &self.trie, formula).map(Outcome::Matched)
    }

    fn try_dashes(&self, formula: &str, depth: usize) -> Result<Outcome, Error> {
        match dialect::strip_dashes(formula) {
            Some(cleaned) => self.dispatch(&cleaned, depth + 1).map(Outcome::Matched),
            None => Ok(Outcome::NotApplicable),
        }
    }

    fn try_ion_markers(&self, formula: &str, depth: usize) -> Result<Outcome, Error> {
        match dialect::strip_ion_markers(formula) {
            Some(cleaned) => self.dispatch(&cleaned, depth + 1).map(Outcome::Matched),
            None => Ok(Outcome::NotApplicable),
        }
    }

    fn try_compound(&self, formula: &str, depth: usize) -> Result<Outcome, Error> {
        let Some(parts) = dialect::split_compound(formula) else {
            return Ok(Outcome::NotApplicable);
        };

        // Each part resolves through the full dispatcher; whatever kind its
        // failure carries internally, the compound as a whole reports
        // UnableToCompute.
        let mut total = 0.0;
        for part in parts {
            let (digits, rest) = dialect::split_leading_digits(part);
            let multiplier = match digits {
                Some(raw) => raw
                    .parse::<f64>()
                    .map_err(|_| Error::unable_to_compute(formula))?,
                None => 1.0,
            };
            let weight = self
                .dispatch(rest, depth + 1)
                .map_err(|_| Error::unable_to_compute(formula))?;
            total += multiplier * weight;
        }
        Ok(Outcome::Matched(total))
    }
}

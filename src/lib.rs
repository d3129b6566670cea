//! A pure Rust library for computing molecular weights from textual
//! chemical formulas. It recognizes the notations found in mineralogical
//! and chemical reference data and folds them into a single weighted sum
//! of atomic masses.
//!
//! # Features
//!
//! - **Flat formulas** — symbol and quantity sequences such as `Na2CO3`,
//!   with comma as the decimal separator (`Pb4,5Sb4,5S11`)
//! - **Bracket groups** — nested round or square brackets with trailing
//!   multipliers (`Mg2(C2H4(OH)2)3SO4`, `K[AlSi3O8]`)
//! - **Dash notation** — dash-separated element runs (`H15-N3-C12-O4-S2-Cl`)
//! - **Oxidation markers** — charge notation such as `Fe3+`, ignored for
//!   weight purposes
//! - **Hydrates** — middle-dot compounds with per-part multipliers
//!   (`Mg6Cr2CO3(OH)16 · 4H2O`)
//!
//! # Quick Start
//!
//! The main entry point is [`MolecularWeightCalculator`], built over the
//! embedded 112-element table or over an injected one:
//!
//! ```
//! use molweight::MolecularWeightCalculator;
//!
//! let calc = MolecularWeightCalculator::new()?;
//!
//! let water = calc.compute_weight("H2O")?;
//! assert!((water - 18.015).abs() < 1e-3);
//!
//! let gypsum = calc.compute_weight("CaSO4 · 2H2O")?;
//! assert!((gypsum - 172.17).abs() < 0.01);
//!
//! // The validated table is available for inspection.
//! assert_eq!(calc.data().len(), 112);
//! # Ok::<(), molweight::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`MolecularWeightCalculator`] — dialect dispatch and evaluation
//! - [`data`] — the embedded element table and its TOML storage format
//! - [`ElementRecord`] / [`ElementTable`] — the element data model
//! - [`Error`] — all failure kinds, from malformed formulas to corrupted
//!   table data
//!
//! # Errors
//!
//! A computation either returns a weight or fails with one [`Error`] kind:
//! blank input, a structurally invalid formula, an unrecognized notation,
//! or (at construction only) a table contract violation.

mod calc;
mod error;
mod model;

pub mod data;

pub use calc::MolecularWeightCalculator;
pub use error::Error;
pub use model::{ElementRecord, ElementTable, ELEMENT_COUNT};

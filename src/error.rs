//! Error types for formula interpretation and element table construction.
//!
//! Every failure is synchronous and deterministic: a call either returns a
//! weight or fails with one of the kinds below. No partial results exist.

use thiserror::Error;

/// Errors produced by [`MolecularWeightCalculator`](crate::MolecularWeightCalculator).
#[derive(Debug, Error)]
pub enum Error {
    /// The formula argument is empty or blank.
    ///
    /// Detected before any dialect logic runs, including on recursive
    /// re-entries whose rewrites leave nothing behind.
    #[error("chemical formula must be a non-empty string")]
    EmptyFormula,

    /// The formula is structurally malformed for the dialect it matches.
    ///
    /// Covers unbalanced brackets, unknown symbols, leftover unconsumed
    /// characters, and empty bracket groups.
    #[error("invalid chemical formula: '{0}'")]
    InvalidFormula(String),

    /// The formula matches no recognized dialect, or a compound sub-part
    /// failed to resolve.
    #[error("unable to compute molecular weight of: '{0}'")]
    UnableToCompute(String),

    /// The injected element table violates its contract.
    ///
    /// Raised only during construction; a calculator is never left in a
    /// half-initialized state.
    #[error("corrupted element data: {0}")]
    CorruptedData(String),

    /// An element table file failed to parse.
    #[error("failed to parse element table: {0}")]
    TableParse(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn invalid_formula(formula: &str) -> Self {
        Self::InvalidFormula(formula.to_string())
    }

    pub(crate) fn unable_to_compute(formula: &str) -> Self {
        Self::UnableToCompute(formula.to_string())
    }

    pub(crate) fn corrupted_data(details: impl Into<String>) -> Self {
        Self::CorruptedData(details.into())
    }
}

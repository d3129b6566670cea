//! Element table storage: the embedded default table and the TOML parser
//! for user-supplied tables.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::error::Error;
use crate::model::ElementRecord;

const DEFAULT_ELEMENTS_TOML: &str = include_str!("../resources/elements.toml");

static DEFAULT_ELEMENTS: OnceLock<Vec<ElementRecord>> = OnceLock::new();

#[derive(Debug, Deserialize)]
struct ElementsFile {
    elements: Vec<ElementRecord>,
}

/// Parses an element table in its TOML storage format.
///
/// Returns the records in file order; contract validation happens in
/// [`ElementTable::from_records`](crate::ElementTable::from_records).
pub fn parse_elements(toml_text: &str) -> Result<Vec<ElementRecord>, Error> {
    let file: ElementsFile = toml::from_str(toml_text)?;
    Ok(file.elements)
}

/// The built-in element table shipped with the crate.
pub fn default_elements() -> &'static [ElementRecord] {
    DEFAULT_ELEMENTS.get_or_init(|| {
        parse_elements(DEFAULT_ELEMENTS_TOML)
            .expect("Failed to parse embedded element table. This is a library bug.")
    })
}

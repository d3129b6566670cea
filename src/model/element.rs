use serde::Deserialize;

/// One record of the element table: atomic number, name, symbol, and
/// average atomic mass in unified atomic mass units.
///
/// Records are plain data; all invariants are enforced by
/// [`ElementTable::from_records`](super::table::ElementTable::from_records).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ElementRecord {
    pub number: u32,
    pub name: String,
    pub symbol: String,
    pub mass: f64,
}

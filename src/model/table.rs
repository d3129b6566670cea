use std::collections::BTreeMap;

use crate::error::Error;
use crate::model::element::ElementRecord;

/// Number of records a valid element table must contain.
pub const ELEMENT_COUNT: usize = 112;

/// Validated, immutable element table keyed by symbol.
///
/// Construction checks the full contract once; lookups never re-validate.
#[derive(Debug, Clone)]
pub struct ElementTable {
    records: BTreeMap<String, ElementRecord>,
}

impl ElementTable {
    /// Builds a table from an ordered sequence of records.
    ///
    /// The contract: exactly [`ELEMENT_COUNT`] records, record *i* carries
    /// atomic number *i* + 1, names and symbols are non-empty, masses are
    /// at least 1.0, and symbols are pairwise distinct. Any violation fails
    /// with [`Error::CorruptedData`].
    pub fn from_records(records: Vec<ElementRecord>) -> Result<Self, Error> {
        if records.len() != ELEMENT_COUNT {
            return Err(Error::corrupted_data(format!(
                "expected {} element records, found {}",
                ELEMENT_COUNT,
                records.len()
            )));
        }

        let mut map = BTreeMap::new();
        for (i, record) in records.into_iter().enumerate() {
            let expected = (i + 1) as u32;
            if record.number != expected {
                return Err(Error::corrupted_data(format!(
                    "record {} has atomic number {}, expected {}",
                    i, record.number, expected
                )));
            }
            if record.name.trim().is_empty() {
                return Err(Error::corrupted_data(format!(
                    "element {} has an empty name",
                    record.number
                )));
            }
            if record.symbol.trim().is_empty() {
                return Err(Error::corrupted_data(format!(
                    "element {} has an empty symbol",
                    record.number
                )));
            }
            if record.mass < 1.0 {
                return Err(Error::corrupted_data(format!(
                    "element {} has atomic mass {} below 1.0",
                    record.symbol, record.mass
                )));
            }
            if let Some(previous) = map.insert(record.symbol.clone(), record) {
                return Err(Error::corrupted_data(format!(
                    "duplicate element symbol '{}'",
                    previous.symbol
                )));
            }
        }

        Ok(Self { records: map })
    }

    pub fn mass_of(&self, symbol: &str) -> Option<f64> {
        self.records.get(symbol).map(|r| r.mass)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    /// The validated records, keyed by symbol.
    pub fn records(&self) -> &BTreeMap<String, ElementRecord> {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn valid_records() -> Vec<ElementRecord> {
        data::default_elements().to_vec()
    }

    #[test]
    fn accepts_the_default_records() {
        let table = ElementTable::from_records(valid_records()).unwrap();
        assert_eq!(table.records().len(), ELEMENT_COUNT);
        assert_eq!(table.mass_of("H"), Some(1.008));
        assert_eq!(table.mass_of("Xx"), None);
    }

    #[test]
    fn rejects_wrong_record_count() {
        let mut records = valid_records();
        records.pop();
        let err = ElementTable::from_records(records).unwrap_err();
        assert!(matches!(err, Error::CorruptedData(_)));
    }

    #[test]
    fn rejects_non_contiguous_atomic_numbers() {
        let mut records = valid_records();
        records[41].number = 99;
        let err = ElementTable::from_records(records).unwrap_err();
        assert!(matches!(err, Error::CorruptedData(_)));
    }

    #[test]
    fn rejects_duplicate_symbols() {
        let mut records = valid_records();
        records[1].symbol = "H".to_string();
        let err = ElementTable::from_records(records).unwrap_err();
        assert!(matches!(err, Error::CorruptedData(_)));
    }

    #[test]
    fn rejects_blank_names_and_symbols() {
        let mut records = valid_records();
        records[7].name = "  ".to_string();
        assert!(matches!(
            ElementTable::from_records(records).unwrap_err(),
            Error::CorruptedData(_)
        ));

        let mut records = valid_records();
        records[7].symbol = String::new();
        assert!(matches!(
            ElementTable::from_records(records).unwrap_err(),
            Error::CorruptedData(_)
        ));
    }

    #[test]
    fn rejects_sub_unit_masses() {
        let mut records = valid_records();
        records[0].mass = 0.5;
        let err = ElementTable::from_records(records).unwrap_err();
        assert!(matches!(err, Error::CorruptedData(_)));
    }
}

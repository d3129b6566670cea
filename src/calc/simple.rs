use crate::calc::tokenizer::{parse_quantity, SymbolTrie};
use crate::error::Error;
use crate::model::ElementTable;

/// A simple formula is limited to digits, letters, and commas.
pub(crate) fn is_applicable(formula: &str) -> bool {
    formula
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_alphabetic() || c == ',')
}

/// Evaluates a flat sequence of symbol + optional quantity tokens.
///
/// Callers must have checked [`is_applicable`]; past that gate every
/// structural problem is a hard [`Error::InvalidFormula`], never a fallback
/// to another dialect. The error always carries the original `formula`.
pub(crate) fn evaluate(
    table: &ElementTable,
    trie: &SymbolTrie,
    formula: &str,
) -> Result<f64, Error> {
    let normalized = strip_letter_commas(formula);
    let matches = trie.scan(&normalized);

    let mut rest = normalized.as_str();
    let mut total = 0.0;
    for m in &matches {
        // Each occurrence must sit exactly where the previous one ended;
        // a gap means an unrecognized subsequence.
        rest = rest
            .strip_prefix(m.symbol)
            .ok_or_else(|| Error::invalid_formula(formula))?;

        let quantity = match m.quantity {
            Some(raw) => {
                rest = rest
                    .strip_prefix(raw)
                    .ok_or_else(|| Error::invalid_formula(formula))?;
                parse_quantity(raw).ok_or_else(|| Error::invalid_formula(formula))?
            }
            None => 1.0,
        };

        let mass = table
            .mass_of(m.symbol)
            .ok_or_else(|| Error::invalid_formula(formula))?;
        total += quantity * mass;
    }

    if !rest.is_empty() {
        return Err(Error::invalid_formula(formula));
    }

    Ok(total)
}

/// Deletes every comma sitting directly between two letters, leaving commas
/// inside numeric quantities untouched.
fn strip_letter_commas(formula: &str) -> String {
    let chars: Vec<char> = formula.chars().collect();
    let mut out = String::with_capacity(formula.len());
    for (i, &c) in chars.iter().enumerate() {
        let between_letters = c == ','
            && i > 0
            && chars[i - 1].is_alphabetic()
            && chars.get(i + 1).is_some_and(|n| n.is_alphabetic());
        if !between_letters {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn fixtures() -> (ElementTable, SymbolTrie) {
        let table = ElementTable::from_records(data::default_elements().to_vec()).unwrap();
        let trie = SymbolTrie::new(table.symbols().map(str::to_string));
        (table, trie)
    }

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn charset_gate() {
        assert!(is_applicable("H2O"));
        assert!(is_applicable("Pb4,5Sb4,5S11"));
        assert!(!is_applicable("Ca(OH)2"));
        assert!(!is_applicable("H2O-"));
        assert!(!is_applicable("A · B"));
    }

    #[test]
    fn sums_quantity_weighted_masses() {
        let (table, trie) = fixtures();
        let w = evaluate(&table, &trie, "H2O").unwrap();
        assert!(approx_eq(w, 2.0 * 1.008 + 15.999, 1e-9));

        let w = evaluate(&table, &trie, "NH4Cl").unwrap();
        assert!(approx_eq(w, 14.007 + 4.0 * 1.008 + 35.45, 1e-9));
    }

    #[test]
    fn quantity_defaults_to_one() {
        let (table, trie) = fixtures();
        let w = evaluate(&table, &trie, "CaFeBiBa").unwrap();
        assert!(approx_eq(w, 40.078 + 55.845 + 208.98 + 137.33, 1e-9));
    }

    #[test]
    fn decimal_comma_quantities() {
        let (table, trie) = fixtures();
        let w = evaluate(&table, &trie, "Pb4,5Sb4,5S11").unwrap();
        assert!(approx_eq(w, 4.5 * 207.2 + 4.5 * 121.76 + 11.0 * 32.06, 1e-9));
    }

    #[test]
    fn commas_between_letters_are_ignored() {
        let (table, trie) = fixtures();
        let plain = evaluate(&table, &trie, "KSrCe").unwrap();
        let commas = evaluate(&table, &trie, "K,Sr,Ce").unwrap();
        assert!(approx_eq(plain, commas, 1e-12));
    }

    #[test]
    fn rejects_unknown_subsequences() {
        let (table, trie) = fixtures();
        assert!(matches!(
            evaluate(&table, &trie, "MnOp3").unwrap_err(),
            Error::InvalidFormula(_)
        ));
        assert!(matches!(
            evaluate(&table, &trie, "COZ").unwrap_err(),
            Error::InvalidFormula(_)
        ));
    }

    #[test]
    fn rejects_text_before_the_first_symbol() {
        let (table, trie) = fixtures();
        assert!(matches!(
            evaluate(&table, &trie, "4H2O").unwrap_err(),
            Error::InvalidFormula(_)
        ));
    }

    #[test]
    fn rejects_formulas_with_no_symbols_at_all() {
        let (table, trie) = fixtures();
        assert!(matches!(
            evaluate(&table, &trie, ",").unwrap_err(),
            Error::InvalidFormula(_)
        ));
    }

    #[test]
    fn letter_comma_stripping_leaves_numeric_commas() {
        assert_eq!(strip_letter_commas("K,Sr,Ce"), "KSrCe");
        assert_eq!(strip_letter_commas("Pb4,5"), "Pb4,5");
        assert_eq!(strip_letter_commas("O,H2O,OH"), "OH2OOH");
    }
}

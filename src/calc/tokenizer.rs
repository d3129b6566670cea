use std::collections::HashMap;

/// One symbol occurrence found in a formula: the matched element symbol and
/// the raw quantity text directly following it, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SymbolMatch<'a> {
    pub symbol: &'a str,
    pub quantity: Option<&'a str>,
}

#[derive(Debug, Default)]
struct TrieNode {
    terminal: bool,
    children: HashMap<char, TrieNode>,
}

/// Longest-prefix matcher over the known element symbols.
///
/// Walking the trie greedily makes the two-letter symbol win over a
/// one-letter symbol sharing its first character ("Na" before "N").
#[derive(Debug)]
pub(crate) struct SymbolTrie {
    root: TrieNode,
}

impl SymbolTrie {
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = TrieNode::default();
        for symbol in symbols {
            let mut node = &mut root;
            for c in symbol.as_ref().chars() {
                node = node.children.entry(c).or_default();
            }
            node.terminal = true;
        }
        Self { root }
    }

    /// The longest known symbol that is a prefix of `input`, if any.
    pub fn longest_match<'a>(&self, input: &'a str) -> Option<&'a str> {
        let mut node = &self.root;
        let mut matched = 0;
        let mut best = None;
        for c in input.chars() {
            match node.children.get(&c) {
                Some(next) => {
                    matched += c.len_utf8();
                    node = next;
                    if node.terminal {
                        best = Some(&input[..matched]);
                    }
                }
                None => break,
            }
        }
        best
    }

    /// All (symbol, quantity?) occurrences in `input`, scanning left to
    /// right and skipping characters where no symbol matches.
    ///
    /// A quantity is a run of digits and commas directly after the symbol.
    pub fn scan<'a>(&self, input: &'a str) -> Vec<SymbolMatch<'a>> {
        let mut matches = Vec::new();
        let mut rest = input;
        while !rest.is_empty() {
            match self.longest_match(rest) {
                Some(symbol) => {
                    let after = &rest[symbol.len()..];
                    let quantity_len: usize = after
                        .chars()
                        .take_while(|c| c.is_ascii_digit() || *c == ',')
                        .map(char::len_utf8)
                        .sum();
                    let quantity = (quantity_len > 0).then(|| &after[..quantity_len]);
                    matches.push(SymbolMatch { symbol, quantity });
                    rest = &after[quantity_len..];
                }
                None => {
                    let mut chars = rest.chars();
                    chars.next();
                    rest = chars.as_str();
                }
            }
        }
        matches
    }
}

/// Parses a quantity token, with comma as the decimal separator.
pub(crate) fn parse_quantity(raw: &str) -> Option<f64> {
    raw.replace(',', ".").parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie() -> SymbolTrie {
        SymbolTrie::new(["H", "N", "Na", "O", "S", "Sb", "Pb"])
    }

    #[test]
    fn prefers_the_longest_symbol() {
        let t = trie();
        assert_eq!(t.longest_match("NaCl"), Some("Na"));
        assert_eq!(t.longest_match("NH4"), Some("N"));
        assert_eq!(t.longest_match("Sb2"), Some("Sb"));
    }

    #[test]
    fn no_match_on_unknown_prefix() {
        let t = trie();
        assert_eq!(t.longest_match("Zq"), None);
        assert_eq!(t.longest_match(""), None);
    }

    #[test]
    fn scan_captures_quantities() {
        let t = trie();
        let matches = t.scan("H2O");
        assert_eq!(
            matches,
            vec![
                SymbolMatch {
                    symbol: "H",
                    quantity: Some("2")
                },
                SymbolMatch {
                    symbol: "O",
                    quantity: None
                },
            ]
        );
    }

    #[test]
    fn scan_captures_decimal_comma_quantities() {
        let t = trie();
        let matches = t.scan("Pb4,5Sb4,5S11");
        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].symbol, "Pb");
        assert_eq!(matches[0].quantity, Some("4,5"));
        assert_eq!(matches[2].quantity, Some("11"));
    }

    #[test]
    fn scan_skips_unmatched_characters() {
        let t = trie();
        let matches = t.scan("xH2");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].symbol, "H");
    }

    #[test]
    fn quantity_parsing_uses_comma_as_decimal_point() {
        assert_eq!(parse_quantity("4,5"), Some(4.5));
        assert_eq!(parse_quantity("12"), Some(12.0));
        assert_eq!(parse_quantity("4,5,6"), None);
        assert_eq!(parse_quantity(","), None);
    }
}

//! Rewrite helpers for the dash, ion-marker, and compound dialects.
//!
//! Each helper reports "not applicable" as `None`; the dispatcher recurses
//! on the rewritten text it returns.

/// Removes every dash. `None` when the formula contains no dash.
pub(crate) fn strip_dashes(formula: &str) -> Option<String> {
    formula
        .contains('-')
        .then(|| formula.replace('-', ""))
}

/// Removes every digit run directly followed by `+` or `-`, the oxidation
/// state notation. `None` when no such marker occurs.
pub(crate) fn strip_ion_markers(formula: &str) -> Option<String> {
    let chars: Vec<char> = formula.chars().collect();
    let mut out = String::with_capacity(formula.len());
    let mut stripped = false;

    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_ascii_digit() {
            let mut j = i;
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                stripped = true;
                i = j + 1;
            } else {
                out.extend(&chars[i..j]);
                i = j;
            }
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    stripped.then_some(out)
}

/// Splits on the hydrate separator: a middle dot flanked by whitespace.
///
/// Returns the non-empty parts, or `None` when no separator occurs. A dot
/// without whitespace on both sides is not a separator.
pub(crate) fn split_compound(formula: &str) -> Option<Vec<&str>> {
    let chars: Vec<(usize, char)> = formula.char_indices().collect();
    let mut parts = Vec::new();
    let mut start = 0;
    let mut found = false;

    let mut k = 0;
    while k < chars.len() {
        let is_separator = chars[k].1 == '·'
            && k > 0
            && chars[k - 1].1.is_whitespace()
            && chars[k - 1].0 >= start
            && k + 1 < chars.len()
            && chars[k + 1].1.is_whitespace();
        if !is_separator {
            k += 1;
            continue;
        }

        let mut a = k;
        while a > 0 && chars[a - 1].1.is_whitespace() && chars[a - 1].0 >= start {
            a -= 1;
        }
        let part = &formula[start..chars[a].0];
        if !part.is_empty() {
            parts.push(part);
        }

        let mut b = k + 1;
        while b < chars.len() && chars[b].1.is_whitespace() {
            b += 1;
        }
        start = chars.get(b).map_or(formula.len(), |&(offset, _)| offset);
        found = true;
        k = b;
    }

    if !found {
        return None;
    }
    let tail = &formula[start..];
    if !tail.is_empty() {
        parts.push(tail);
    }
    Some(parts)
}

/// Splits a leading run of digits from the rest of the text.
pub(crate) fn split_leading_digits(text: &str) -> (Option<&str>, &str) {
    let digits: usize = text
        .chars()
        .take_while(char::is_ascii_digit)
        .map(char::len_utf8)
        .sum();
    if digits == 0 {
        (None, text)
    } else {
        (Some(&text[..digits]), &text[digits..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_removal() {
        assert_eq!(
            strip_dashes("H15-N3-C12-O4-S2-Cl").as_deref(),
            Some("H15N3C12O4S2Cl")
        );
        assert_eq!(strip_dashes("H2O"), None);
    }

    #[test]
    fn ion_marker_removal() {
        assert_eq!(strip_ion_markers("Fe3+").as_deref(), Some("Fe"));
        assert_eq!(strip_ion_markers("Fe2+Fe3+O4").as_deref(), Some("FeFeO4"));
        assert_eq!(strip_ion_markers("Mn12+").as_deref(), Some("Mn"));
        assert_eq!(strip_ion_markers("H2O"), None);
        // A sign with no digit before it is not an ion marker.
        assert_eq!(strip_ion_markers("Na+"), None);
    }

    #[test]
    fn compound_splitting() {
        assert_eq!(
            split_compound("Mg6Cr2CO3(OH)16 · 4H2O"),
            Some(vec!["Mg6Cr2CO3(OH)16", "4H2O"])
        );
        assert_eq!(split_compound("A  ·  B  ·  C"), Some(vec!["A", "B", "C"]));
        assert_eq!(split_compound("H2O"), None);
        // The dot needs whitespace on both sides.
        assert_eq!(split_compound("A·B"), None);
        assert_eq!(split_compound("A ·B"), None);
    }

    #[test]
    fn compound_splitting_drops_empty_parts() {
        assert_eq!(split_compound("A · · B"), Some(vec!["A", "· B"]));
    }

    #[test]
    fn leading_digit_splitting() {
        assert_eq!(split_leading_digits("4H2O"), (Some("4"), "H2O"));
        assert_eq!(split_leading_digits("H2O"), (None, "H2O"));
        assert_eq!(split_leading_digits("42"), (Some("42"), ""));
    }
}

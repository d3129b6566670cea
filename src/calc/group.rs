use crate::calc::simple;
use crate::calc::tokenizer::SymbolTrie;
use crate::error::Error;
use crate::model::ElementTable;

/// A grouped formula may additionally contain round and square brackets.
pub(crate) fn is_applicable(formula: &str) -> bool {
    formula.chars().all(|c| {
        c.is_ascii_digit() || c.is_alphabetic() || matches!(c, ',' | '(' | ')' | '[' | ']')
    })
}

#[derive(Debug)]
enum Node {
    Leaf { mass: f64 },
    Group { multiplier: f64, children: Vec<usize> },
}

/// Parses a bracketed, possibly nested formula into a tree and folds it
/// into a weight.
///
/// The tree lives in an index arena; open groups are tracked with an
/// explicit stack of arena indices, so no node is ever aliased.
pub(crate) fn evaluate(
    table: &ElementTable,
    trie: &SymbolTrie,
    formula: &str,
) -> Result<f64, Error> {
    // Square and round brackets are synonyms.
    let unified: String = formula
        .chars()
        .map(|c| match c {
            '[' => '(',
            ']' => ')',
            other => other,
        })
        .collect();

    let opens = unified.chars().filter(|&c| c == '(').count();
    let closes = unified.chars().filter(|&c| c == ')').count();
    if opens != closes {
        return Err(Error::invalid_formula(formula));
    }

    let mut pieces = split_pieces(&unified);

    let mut arena: Vec<Node> = vec![Node::Group {
        multiplier: 1.0,
        children: Vec::new(),
    }];
    let mut stack: Vec<usize> = vec![0];

    let mut i = 0;
    while i < pieces.len() {
        match pieces[i].as_str() {
            "(" => {
                let child = arena.len();
                arena.push(Node::Group {
                    multiplier: 1.0,
                    children: Vec::new(),
                });
                attach_child(&mut arena, &stack, child, formula)?;
                stack.push(child);
            }
            ")" => {
                // Equal bracket counts do not rule out an interleaving like
                // ")(", so underflow is still checked here.
                if stack.len() == 1 {
                    return Err(Error::invalid_formula(formula));
                }

                let mut multiplier = 1.0;
                if i + 1 < pieces.len() {
                    let next = &pieces[i + 1];
                    if next.chars().all(|c| c.is_ascii_digit()) {
                        multiplier = parse_digits(next, formula)?;
                        i += 1;
                    } else {
                        let digits = next
                            .chars()
                            .take_while(char::is_ascii_digit)
                            .map(char::len_utf8)
                            .sum::<usize>();
                        if digits > 0 {
                            multiplier = parse_digits(&next[..digits], formula)?;
                            pieces[i + 1] = next[digits..].to_string();
                        }
                    }
                }

                let Some(closed) = stack.pop() else {
                    return Err(Error::invalid_formula(formula));
                };
                if let Node::Group {
                    multiplier: quantity,
                    ..
                } = &mut arena[closed]
                {
                    *quantity = multiplier;
                }
            }
            text => {
                // Every non-bracket piece must be a valid simple sub-formula.
                let mass = simple::evaluate(table, trie, text)
                    .map_err(|_| Error::invalid_formula(formula))?;
                let leaf = arena.len();
                arena.push(Node::Leaf { mass });
                attach_child(&mut arena, &stack, leaf, formula)?;
            }
        }
        i += 1;
    }

    fold(&arena, 0, formula)
}

fn attach_child(
    arena: &mut [Node],
    stack: &[usize],
    child: usize,
    formula: &str,
) -> Result<(), Error> {
    let &top = stack
        .last()
        .ok_or_else(|| Error::invalid_formula(formula))?;
    match &mut arena[top] {
        Node::Group { children, .. } => {
            children.push(child);
            Ok(())
        }
        Node::Leaf { .. } => Err(Error::invalid_formula(formula)),
    }
}

fn parse_digits(digits: &str, formula: &str) -> Result<f64, Error> {
    digits
        .parse::<f64>()
        .map_err(|_| Error::invalid_formula(formula))
}

fn fold(arena: &[Node], index: usize, formula: &str) -> Result<f64, Error> {
    match &arena[index] {
        Node::Leaf { mass } => Ok(*mass),
        Node::Group {
            multiplier,
            children,
        } => {
            if children.is_empty() {
                return Err(Error::invalid_formula(formula));
            }
            let mut sum = 0.0;
            for &child in children {
                sum += fold(arena, child, formula)?;
            }
            Ok(multiplier * sum)
        }
    }
}

/// Splits into pieces where each bracket is its own piece and every other
/// run of text is a single piece, in order.
fn split_pieces(formula: &str) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut run = String::new();
    for c in formula.chars() {
        if c == '(' || c == ')' {
            if !run.is_empty() {
                pieces.push(std::mem::take(&mut run));
            }
            pieces.push(c.to_string());
        } else {
            run.push(c);
        }
    }
    if !run.is_empty() {
        pieces.push(run);
    }
    pieces
}

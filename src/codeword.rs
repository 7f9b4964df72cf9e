use std::collections::HashMap;
use std::fmt;

use log::trace;

use crate::node::Node;

pub type CodeTable<S> = HashMap<S, Codeword>;

/// Path of child indices from the root down to a symbol's leaf.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Codeword {
    digits: Vec<usize>,
    arity: usize,
}

impl Codeword {
    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Only the root of a single-symbol tree gets the empty codeword.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        other.digits.starts_with(&self.digits)
    }
}

/// Up to base 36 each digit prints as one character (`0-9` then `a-z`); wider trees print
/// dot-separated decimal digits.
impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.arity <= 36 {
            for &d in &self.digits {
                let c = char::from_digit(d as u32, 36).ok_or(fmt::Error)?;
                write!(f, "{c}")?;
            }
            return Ok(());
        }

        for (i, d) in self.digits.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

/// Lazy pre-order walk over a tree, yielding `(symbol, codeword)` for every symbol-bearing leaf.
///
/// Children are visited in digit order `0..arity`. Padding leaves and subtrees holding only
/// padding yield nothing.
pub struct Codewords<'a, S, W> {
    stack: Vec<(&'a Node<S, W>, Vec<usize>)>,
    arity: usize,
}

pub fn codewords<S, W>(root: &Node<S, W>, arity: usize) -> Codewords<'_, S, W> {
    Codewords {
        stack: vec![(root, Vec::new())],
        arity,
    }
}

impl<'a, S, W> Iterator for Codewords<'a, S, W> {
    type Item = (&'a S, Codeword);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, path)) = self.stack.pop() {
            if node.is_leaf() {
                let Some(symbol) = node.symbol() else {
                    continue;
                };
                let code = Codeword {
                    digits: path,
                    arity: self.arity,
                };
                trace!("Assigning codeword '{}'", code);
                return Some((symbol, code));
            }

            for (digit, child) in node.children().iter().enumerate().rev() {
                let mut child_path = Vec::with_capacity(path.len() + 1);
                child_path.extend_from_slice(&path);
                child_path.push(digit);
                self.stack.push((child, child_path));
            }
        }
        None
    }
}

use std::collections::HashMap;
use std::hash::Hash;

use log::{debug, trace};

use crate::codeword::{CodeTable, Codewords, codewords};
use crate::error::HuffmanError;
use crate::node::{Node, Weight};
use crate::queue::MergeQueue;

/// A finished N-ary huffman tree: the root node plus the arity it was merged with.
#[derive(Debug)]
pub struct HuffmanTree<S, W> {
    root: Node<S, W>,
    arity: usize,
}

impl<S, W: Weight> HuffmanTree<S, W> {
    pub fn root(&self) -> &Node<S, W> {
        &self.root
    }

    pub fn into_root(self) -> Node<S, W> {
        self.root
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Sum of every input weight.
    pub fn weight(&self) -> W {
        self.root.weight()
    }

    /// Depth-first walk yielding each symbol with its codeword.
    pub fn codewords(&self) -> Codewords<'_, S, W> {
        codewords(&self.root, self.arity)
    }
}

impl<S: Eq + Hash + Clone, W: Weight> HuffmanTree<S, W> {
    pub fn code_table(&self) -> CodeTable<S> {
        self.codewords()
            .map(|(symbol, code)| (symbol.clone(), code))
            .collect()
    }
}

/// Number of zero-weight leaves to add to `count` leaves so that repeatedly merging `arity`
/// nodes into one ends at exactly one node, i.e. `(count + k) % (arity - 1) == 1 % (arity - 1)`.
pub fn padding_needed(count: usize, arity: usize) -> usize {
    if arity < 2 {
        return 0;
    }
    let step = arity - 1;
    let target = 1 % step;
    (target + step - count % step) % step
}

/// Builds an N-ary huffman tree over `weights`.
///
/// Duplicate symbols collapse, the last weight given wins. Every merge takes the `arity`
/// lightest nodes, so ties between equal weights may shape the tree differently between runs;
/// codeword lengths stay optimal either way.
pub fn build<S, W, I>(weights: I, arity: usize) -> Result<HuffmanTree<S, W>, HuffmanError>
where
    S: Eq + Hash,
    W: Weight,
    I: IntoIterator<Item = (S, W)>,
{
    if arity < 2 {
        return Err(HuffmanError::InvalidArity(arity));
    }

    let dataset: HashMap<S, W> = weights.into_iter().collect();
    if dataset.is_empty() {
        return Err(HuffmanError::EmptyDataset);
    }
    if dataset.values().any(|w| *w < W::default()) {
        return Err(HuffmanError::NegativeWeight);
    }

    debug!(
        "Building {}-ary Huffman tree from {} unique symbols",
        arity,
        dataset.len()
    );

    let count = dataset.len();
    let padding = padding_needed(count, arity);
    let mut queue = MergeQueue::with_capacity(count + padding);

    for (symbol, weight) in dataset {
        queue.insert(Node::leaf(symbol, weight));
    }
    for _ in 0..padding {
        queue.insert(Node::padding());
    }
    debug!(
        "Initial queue size: {} ({} padding leaves)",
        queue.len(),
        padding
    );

    let mut merges = 0usize;
    while queue.len() > 1 {
        let mut children = Vec::with_capacity(arity);
        for _ in 0..arity {
            children.push(queue.extract_min()?);
        }

        let node = Node::internal(children, arity)?;
        trace!("Merge {}: new internal node of weight {:?}", merges, node.weight());
        queue.insert(node);
        merges += 1;
    }

    let root = queue.extract_min()?;
    debug!(
        "Tree construction complete after {} merges, total weight {:?}, longest codeword {}",
        merges,
        root.weight(),
        root.depth()
    );

    Ok(HuffmanTree { root, arity })
}

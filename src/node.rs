use std::fmt::Debug;

use num_traits::CheckedAdd;

use crate::error::HuffmanError;

/// Anything that can weigh a symbol: totally ordered, summable without overflow, with `Default`
/// as zero.
pub trait Weight: Copy + Ord + CheckedAdd + Default + Debug {}

impl<T> Weight for T where T: Copy + Ord + CheckedAdd + Default + Debug {}

#[derive(Debug, PartialEq, Eq)]
enum Kind<S, W> {
    Leaf { symbol: Option<S> },
    Internal { children: Box<[Node<S, W>]> },
}

/// A node of an N-ary huffman tree.
///
/// Either a leaf carrying an optional symbol (absent for padding), or an internal node owning
/// exactly N children whose weights sum to its own. Nodes are never cloned; a parent owns its
/// subtree and dropping it drops the children.
#[derive(Debug, PartialEq, Eq)]
pub struct Node<S, W> {
    weight: W,
    kind: Kind<S, W>,
}

impl<S, W: Weight> Node<S, W> {
    pub fn leaf(symbol: S, weight: W) -> Self {
        Node {
            weight,
            kind: Kind::Leaf {
                symbol: Some(symbol),
            },
        }
    }

    /// Zero-weight leaf with no symbol, used to make the leaf count mergeable.
    pub fn padding() -> Self {
        Node {
            weight: W::default(),
            kind: Kind::Leaf { symbol: None },
        }
    }

    /// Packages `children` under a new internal node of the given arity.
    ///
    /// The child count must equal `arity` exactly, so no internal node with a missing child can
    /// ever exist. Fails with `WeightOverflow` if the children's weights do not fit in `W`.
    pub fn internal(children: Vec<Node<S, W>>, arity: usize) -> Result<Self, HuffmanError> {
        if arity < 2 {
            return Err(HuffmanError::InvalidArity(arity));
        }
        if children.len() != arity {
            return Err(HuffmanError::Arity {
                expected: arity,
                found: children.len(),
            });
        }

        let weight = children
            .iter()
            .try_fold(W::default(), |acc, child| acc.checked_add(&child.weight))
            .ok_or(HuffmanError::WeightOverflow)?;

        Ok(Node {
            weight,
            kind: Kind::Internal {
                children: children.into_boxed_slice(),
            },
        })
    }
}

impl<S, W: Copy> Node<S, W> {
    pub fn weight(&self) -> W {
        self.weight
    }
}

impl<S, W> Node<S, W> {
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, Kind::Leaf { .. })
    }

    pub fn is_padding(&self) -> bool {
        matches!(self.kind, Kind::Leaf { symbol: None })
    }

    /// The symbol of a leaf. `None` for padding leaves and internal nodes.
    pub fn symbol(&self) -> Option<&S> {
        match &self.kind {
            Kind::Leaf { symbol } => symbol.as_ref(),
            Kind::Internal { .. } => None,
        }
    }

    /// Children of an internal node in digit order; empty for a leaf.
    pub fn children(&self) -> &[Node<S, W>] {
        match &self.kind {
            Kind::Leaf { .. } => &[],
            Kind::Internal { children } => children,
        }
    }

    pub fn child(&self, i: usize) -> Option<&Node<S, W>> {
        self.children().get(i)
    }

    /// Number of leaves under this node, padding included.
    pub fn leaf_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                count += 1;
            } else {
                stack.extend(node.children());
            }
        }
        count
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(node.children().iter().map(|child| (child, depth + 1)));
        }
        max
    }
}

use crate::error::HuffmanError;
use crate::node::{Node, Weight};

/// Binary min-heap of tree nodes keyed on weight alone.
///
/// `extract_min` hands the lightest node back by value, so a node is owned either by the queue
/// or by whoever popped it, never both. Ties between equal weights come out in no particular
/// order.
#[derive(Debug)]
pub struct MergeQueue<S, W> {
    nodes: Vec<Node<S, W>>,
}

impl<S, W> MergeQueue<S, W> {
    pub fn with_capacity(capacity: usize) -> Self {
        MergeQueue {
            nodes: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S, W: Weight> MergeQueue<S, W> {
    pub fn insert(&mut self, node: Node<S, W>) {
        self.nodes.push(node);
        self.sift_up(self.nodes.len() - 1);
    }

    pub fn extract_min(&mut self) -> Result<Node<S, W>, HuffmanError> {
        if self.nodes.is_empty() {
            return Err(HuffmanError::EmptyQueue);
        }

        let last = self.nodes.len() - 1;
        self.nodes.swap(0, last);
        let min = self.nodes.pop().ok_or(HuffmanError::EmptyQueue)?;
        if !self.nodes.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.nodes[i].weight() >= self.nodes[parent].weight() {
                break;
            }
            self.nodes.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.nodes.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;

            if left < n && self.nodes[left].weight() < self.nodes[smallest].weight() {
                smallest = left;
            }
            if right < n && self.nodes[right].weight() < self.nodes[smallest].weight() {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.nodes.swap(i, smallest);
            i = smallest;
        }
    }
}

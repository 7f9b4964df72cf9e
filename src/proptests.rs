use super::*;

use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

fn dataset() -> impl Strategy<Value = HashMap<u16, u64>> {
    prop::collection::hash_map(any::<u16>(), 0u64..10_000, 1..60)
}

fn validate_tree(node: &Node<u16, u64>) {
    let mut stack = vec![node];
    while let Some(node) = stack.pop() {
        if node.is_leaf() {
            assert!(node.children().is_empty(), "leaf with children");
            continue;
        }
        assert!(node.symbol().is_none(), "internal node carries a symbol");
        let sum: u64 = node.children().iter().map(Node::weight).sum();
        assert_eq!(node.weight(), sum, "internal weight must equal child sum");
        stack.extend(node.children());
    }
}

fn padding_leaves<S, W>(node: &Node<S, W>) -> usize {
    let mut count = 0;
    let mut stack = vec![node];
    while let Some(node) = stack.pop() {
        if node.is_padding() {
            count += 1;
        }
        stack.extend(node.children());
    }
    count
}

/// Cost of an optimal N-ary code, computed by re-sorting a plain vector on every merge.
fn reference_cost(weights: &[u64], arity: usize) -> u64 {
    let mut pool = weights.to_vec();
    pool.extend(std::iter::repeat(0).take(padding_needed(weights.len(), arity)));
    let mut cost = 0;
    while pool.len() > 1 {
        pool.sort_unstable_by(|a, b| b.cmp(a));
        let merged: u64 = (0..arity).filter_map(|_| pool.pop()).sum();
        cost += merged;
        pool.push(merged);
    }
    cost
}

/// Child-order-insensitive shape of a tree.
fn canonical(node: &Node<u16, u64>) -> String {
    if node.is_leaf() {
        return match node.symbol() {
            Some(s) => format!("{s}"),
            None => "_".to_string(),
        };
    }
    let mut parts: Vec<String> = node.children().iter().map(canonical).collect();
    parts.sort();
    format!("({})", parts.join(","))
}

proptest! {
    #[test]
    fn every_symbol_gets_one_unique_prefix_free_codeword(
        data in dataset(),
        arity in 2usize..16,
    ) {
        let tree = build(data.clone(), arity).unwrap();
        let pairs: Vec<(u16, Codeword)> = tree.codewords().map(|(s, c)| (*s, c)).collect();

        prop_assert_eq!(pairs.len(), data.len());
        let symbols: HashSet<u16> = pairs.iter().map(|(s, _)| *s).collect();
        prop_assert_eq!(symbols.len(), data.len());
        prop_assert!(symbols.iter().all(|s| data.contains_key(s)));

        let codes: HashSet<&Codeword> = pairs.iter().map(|(_, c)| c).collect();
        prop_assert_eq!(codes.len(), pairs.len());

        for (_, code) in &pairs {
            prop_assert!(code.digits().iter().all(|&d| d < arity));
        }

        for (i, (_, a)) in pairs.iter().enumerate() {
            for (_, b) in &pairs[i + 1..] {
                prop_assert!(!a.is_prefix_of(b), "{} is a prefix of {}", a, b);
                prop_assert!(!b.is_prefix_of(a), "{} is a prefix of {}", b, a);
            }
        }
    }

    #[test]
    fn weights_sum_up_the_tree(data in dataset(), arity in 2usize..16) {
        let tree = build(data.clone(), arity).unwrap();
        validate_tree(tree.root());
        prop_assert_eq!(tree.weight(), data.values().sum::<u64>());
    }

    #[test]
    fn padded_leaf_count_is_congruent(data in dataset(), arity in 2usize..16) {
        let tree = build(data.clone(), arity).unwrap();
        let root = tree.root();
        let leaves = root.leaf_count();
        let padding = padding_leaves(root);

        prop_assert_eq!(padding, padding_needed(data.len(), arity));
        prop_assert_eq!(leaves, data.len() + padding);
        prop_assert_eq!(leaves % (arity - 1), 1 % (arity - 1));
        if data.len() > 1 {
            prop_assert_eq!(root.children().len(), arity);
        }
    }

    #[test]
    fn code_cost_is_optimal(data in dataset(), arity in 2usize..8) {
        let tree = build(data.clone(), arity).unwrap();
        let table = tree.code_table();
        let cost: u64 = data
            .iter()
            .map(|(s, w)| w * table[s].len() as u64)
            .sum();

        let weights: Vec<u64> = data.values().copied().collect();
        prop_assert_eq!(cost, reference_cost(&weights, arity));
    }

    #[test]
    fn distinct_weights_rebuild_to_the_same_shape(
        symbols in prop::collection::hash_set(any::<u16>(), 1..40),
        arity in 2usize..10,
    ) {
        // Powers of two: no two distinct subsets share a sum, so no merge ever ties.
        let data: Vec<(u16, u64)> = symbols
            .into_iter()
            .enumerate()
            .map(|(i, s)| (s, 1u64 << i))
            .collect();

        let first = build(data.clone(), arity).unwrap();
        let second = build(data.into_iter().rev(), arity).unwrap();
        prop_assert_eq!(canonical(first.root()), canonical(second.root()));
    }
}

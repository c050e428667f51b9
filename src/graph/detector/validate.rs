//! Order validation against a dependency list.

use core::hash::Hash;
use std::collections::{HashMap, HashSet};

use crate::graph::Dependency;

/// Checks that `order` is a valid execution order for `nodes`.
///
/// Holds when `order` is a permutation of `nodes` (which must themselves be
/// distinct) and every edge's prerequisite appears strictly before its node.
/// Edges naming nodes outside the set make every order invalid.
///
/// ```rust
/// use depcycle::graph::{is_valid_order, Dependency};
///
/// let deps = [Dependency::new('b', 'a')];
/// assert!(is_valid_order(&['a', 'b'], &deps, &['a', 'b']));
/// assert!(!is_valid_order(&['a', 'b'], &deps, &['b', 'a']));
/// ```
pub fn is_valid_order<T: Eq + Hash>(nodes: &[T], dependencies: &[Dependency<T>], order: &[T]) -> bool {
    if order.len() != nodes.len() {
        return false;
    }

    let members: HashSet<&T> = nodes.iter().collect();
    if members.len() != nodes.len() {
        return false;
    }

    let mut position: HashMap<&T, usize> = HashMap::with_capacity(order.len());
    for (i, node) in order.iter().enumerate() {
        if !members.contains(node) || position.insert(node, i).is_some() {
            return false;
        }
    }

    dependencies.iter().all(|dependency| {
        match (
            position.get(&dependency.prerequisite),
            position.get(&dependency.node),
        ) {
            (Some(p), Some(n)) => p < n,
            _ => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps(pairs: &[(u8, u8)]) -> Vec<Dependency<u8>> {
        pairs.iter().copied().map(Dependency::from).collect()
    }

    #[test]
    fn accepts_orders_respecting_every_edge() {
        let d = deps(&[(1, 0), (2, 1)]);
        assert!(is_valid_order(&[0, 1, 2], &d, &[0, 1, 2]));
        assert!(is_valid_order::<u8>(&[], &[], &[]));
    }

    #[test]
    fn rejects_backward_edges() {
        let d = deps(&[(1, 0), (2, 1)]);
        assert!(!is_valid_order(&[0, 1, 2], &d, &[0, 2, 1]));
    }

    #[test]
    fn rejects_non_permutations() {
        let d = deps(&[]);
        assert!(!is_valid_order(&[0, 1, 2], &d, &[0, 1]));
        assert!(!is_valid_order(&[0, 1, 2], &d, &[0, 1, 1]));
        assert!(!is_valid_order(&[0, 1, 2], &d, &[0, 1, 5]));
        assert!(!is_valid_order(&[0, 0, 1], &d, &[0, 1, 2]));
    }

    #[test]
    fn rejects_self_loops_and_unknown_nodes() {
        assert!(!is_valid_order(&[0], &deps(&[(0, 0)]), &[0]));
        assert!(!is_valid_order(&[0], &deps(&[(0, 9)]), &[0]));
    }
}

use fxhash::FxBuildHasher;
/// This module implements a variant of
/// [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
/// which additionally records the order in which nodes are expanded, so a caller can show how
/// the frontier grew.
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::trace;
use num_traits::Zero;

use crate::path::reconstruct_path;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then creates subordering
        // based on cost, favoring exploration of largest cost nodes first
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

/// Result of [astar_search]: the path with its cost if the goal was reached, and the nodes in the
/// order they were expanded. The goal itself is never counted as expanded.
pub(crate) struct AstarOutcome<N, C> {
    pub path: Option<(Vec<N>, C)>,
    pub expanded: Vec<N>,
}

/// Best-first search over an implicit graph. The open set is a binary heap keyed by
/// `cost + heuristic`; entries made stale by a cheaper relaxation stay in the heap and are
/// skipped when popped. A successor is only relaxed when its new cost is strictly lower than the
/// best known one.
pub(crate) fn astar_search<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> AstarOutcome<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: Zero::zero(),
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    let mut expanded = Vec::new();
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let Some((node, &(_, c))) = parents.get_index(index) else {
                continue;
            };
            if success(node) {
                let path = reconstruct_path(start, node, parents.len(), |n| {
                    parents
                        .get(n)
                        .and_then(|&(parent_index, _)| parents.get_index(parent_index))
                        .map(|(parent, _)| parent.clone())
                });
                return AstarOutcome {
                    path: path.map(|p| (p, cost)),
                    expanded,
                };
            }
            // We may have inserted a node several time into the binary heap if we found
            // a better way to access it. Ensure that we are currently dealing with the
            // best path and discard the others.
            if cost > c {
                continue;
            }
            trace!("Expanding {:?}", node);
            expanded.push(node.clone());
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if new_cost < e.get().1 {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    AstarOutcome {
        path: None,
        expanded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A line graph 0 - 1 - 2 - 3 with a costly shortcut 0 - 3.
    fn line_successors(n: &i32) -> Vec<(i32, u32)> {
        let mut succ = vec![];
        if *n > 0 {
            succ.push((n - 1, 1));
        }
        if *n < 3 {
            succ.push((n + 1, 1));
        }
        if *n == 0 {
            succ.push((3, 5));
        }
        succ
    }

    #[test]
    fn prefers_cheaper_route_over_fewer_hops() {
        let outcome = astar_search(&0, line_successors, |n| (3 - n) as u32, |n| *n == 3);
        let (path, cost) = outcome.path.unwrap();
        assert_eq!(path, vec![0, 1, 2, 3]);
        assert_eq!(cost, 3);
        assert_eq!(outcome.expanded, vec![0, 1, 2]);
    }

    #[test]
    fn exhausted_graph_has_no_path() {
        let outcome = astar_search(&0, line_successors, |_| 0u32, |n| *n == 7);
        assert!(outcome.path.is_none());
        assert_eq!(outcome.expanded.len(), 4);
    }

    #[test]
    fn start_is_goal() {
        let outcome = astar_search(&2, line_successors, |_| 0u32, |n| *n == 2);
        assert_eq!(outcome.path.unwrap(), (vec![2], 0));
        assert!(outcome.expanded.is_empty());
    }
}

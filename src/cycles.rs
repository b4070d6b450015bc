//! Pass 2, stage 2: longest simple cycle in one key's subgraph.
//!
//! Two algorithms, chosen by shape: a linear functional-graph walk when every
//! node has out-degree ≤ 1, otherwise a canonical-start DFS that enumerates
//! each simple cycle exactly once.

use crate::graphbuilder::KeyGraph;
use ahash::{AHashMap, AHashSet, HashMapExt as _, HashSetExt as _};

/// Longest simple cycle length in `graph`, or `None` if it is acyclic.
pub fn longest_cycle(graph: &KeyGraph) -> Option<usize> {
    if graph.max_out_degree <= 1 {
        functional_walk(graph)
    } else {
        canonical_dfs(graph)
    }
}

/// Union of source and destination nodes, sorted lexicographically on raw bytes.
fn all_nodes(graph: &KeyGraph) -> Vec<&[u8]> {
    let mut set: AHashSet<&[u8]> = AHashSet::new();
    for (src, dests) in &graph.adjacency {
        set.insert(src.as_slice());
        for d in dests {
            set.insert(d.as_slice());
        }
    }
    let mut nodes: Vec<&[u8]> = set.into_iter().collect();
    nodes.sort_unstable();
    nodes
}

fn mark_walk_visited<'a>(
    position_in_path: &AHashMap<&'a [u8], usize>,
    current: &'a [u8],
    visited: &mut AHashSet<&'a [u8]>,
) {
    visited.extend(position_in_path.keys().copied());
    visited.insert(current);
}

/// Each node has out-degree ≤ 1. O(|V|): every node enters and leaves the
/// bookkeeping structures at most once across all walks.
fn functional_walk(graph: &KeyGraph) -> Option<usize> {
    let mut next_node: AHashMap<&[u8], &[u8]> = AHashMap::new();
    for (src, dests) in &graph.adjacency {
        if dests.len() == 1 {
            next_node.insert(src.as_slice(), dests.iter().next().unwrap().as_slice());
        }
    }

    let nodes = all_nodes(graph);
    let mut visited: AHashSet<&[u8]> = AHashSet::new();
    let mut best: Option<usize> = None;

    for &start in &nodes {
        if visited.contains(start) {
            continue;
        }

        let mut position_in_path: AHashMap<&[u8], usize> = AHashMap::new();
        let mut current = start;
        let mut step = 0usize;

        loop {
            let Some(&next) = next_node.get(current) else {
                mark_walk_visited(&position_in_path, current, &mut visited);
                break;
            };
            if visited.contains(current) {
                mark_walk_visited(&position_in_path, current, &mut visited);
                break;
            }
            if let Some(&entered_at) = position_in_path.get(current) {
                let length = step - entered_at;
                best = Some(best.map_or(length, |b| b.max(length)));
                mark_walk_visited(&position_in_path, current, &mut visited);
                break;
            }
            position_in_path.insert(current, step);
            current = next;
            step += 1;
        }
    }

    best
}

/// Canonical-start-rule DFS. Each simple cycle is explored exactly once, at
/// the moment its lexicographically smallest node is the DFS root.
fn canonical_dfs(graph: &KeyGraph) -> Option<usize> {
    let nodes = all_nodes(graph);
    let index_of: AHashMap<&[u8], usize> = nodes.iter().enumerate().map(|(i, &n)| (n, i)).collect();

    let mut on_path = vec![false; nodes.len()];
    let mut best: Option<usize> = None;

    for (s, &start_node) in nodes.iter().enumerate() {
        if graph.adjacency.get(start_node).map_or(true, AHashSet::is_empty) {
            continue;
        }
        dfs_from(graph, &nodes, &index_of, s, start_node, s, 0, &mut on_path, &mut best);
    }

    best
}

#[allow(clippy::too_many_arguments)]
fn dfs_from<'a>(
    graph: &KeyGraph,
    nodes: &[&'a [u8]],
    index_of: &AHashMap<&'a [u8], usize>,
    s: usize,
    start_node: &'a [u8],
    u_idx: usize,
    depth: usize,
    on_path: &mut [bool],
    best: &mut Option<usize>,
) {
    on_path[u_idx] = true;

    if let Some(dests) = graph.adjacency.get(nodes[u_idx]) {
        for v in dests {
            if v.as_slice() == start_node {
                let length = depth + 1;
                *best = Some(best.map_or(length, |b| b.max(length)));
                continue;
            }
            if let Some(&v_idx) = index_of.get(v.as_slice()) {
                if v_idx > s && !on_path[v_idx] {
                    dfs_from(graph, nodes, index_of, s, start_node, v_idx, depth + 1, on_path, best);
                }
            }
        }
    }

    on_path[u_idx] = false;
}

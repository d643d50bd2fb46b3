use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::utils::{INFINITY, VertexDistance};

/// A minimum-cost path, `path[0]` being the start and the last element the end.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Route<N> {
    pub path: Vec<N>,
    pub cost: f64,
}

impl<N> Route<N> {
    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&N> {
        self.path.first()
    }

    pub fn end(&self) -> Option<&N> {
        self.path.last()
    }
}

impl<N: fmt::Display> fmt::Display for Route<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

/// How the engine picks the next node to settle.
///
/// `LinearScan` scans every unvisited node and keeps the first one with the
/// smallest distance, so equal-cost routes resolve by enumeration order.
/// `BinaryHeap` is asymptotically faster but only guarantees the same cost;
/// among equal-cost routes it may report a different path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    LinearScan,
    BinaryHeap,
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "scan" | "linear" | "linear-scan" => Ok(Strategy::LinearScan),
            "heap" | "binary-heap" => Ok(Strategy::BinaryHeap),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::LinearScan => f.write_str("scan"),
            Strategy::BinaryHeap => f.write_str("heap"),
        }
    }
}

// Per-query tables; never outlive the call that built them.
struct Search {
    distances: Vec<f64>,
    predecessors: Vec<Option<usize>>,
    settled: usize,
}

/// Lowest-cost route from `start` to `end` using the linear-scan engine.
///
/// Returns `Err(Error::UnknownNode)` if either endpoint is not in the graph and
/// `Ok(None)` if both exist but no path connects them.
pub fn shortest_path<N>(graph: &Graph<N>, start: &N, end: &N) -> Result<Option<Route<N>>>
where
    N: Clone + Eq + Hash + Debug,
{
    shortest_path_with(graph, start, end, Strategy::LinearScan)
}

pub fn shortest_path_with<N>(
    graph: &Graph<N>,
    start: &N,
    end: &N,
    strategy: Strategy,
) -> Result<Option<Route<N>>>
where
    N: Clone + Eq + Hash + Debug,
{
    let source = graph.require(start)?;
    let goal = graph.require(end)?;
    debug!("route {start:?} -> {end:?} ({strategy})");

    let search = match strategy {
        Strategy::LinearScan => linear_scan(graph, source, Some(goal)),
        Strategy::BinaryHeap => binary_heap(graph, source, goal),
    };

    let cost = search.distances[goal];
    if cost == INFINITY {
        debug!("{end:?} unreachable from {start:?}, settled {} nodes", search.settled);
        return Ok(None);
    }

    let path = reconstruct_path(&search.predecessors, source, goal)
        .into_iter()
        .map(|idx| graph.label(idx).clone())
        .collect();
    debug!("route found, cost {cost}, settled {} nodes", search.settled);

    Ok(Some(Route { path, cost }))
}

/// Cost from `start` to every node reachable from it.
pub fn distances_from<N>(graph: &Graph<N>, start: &N) -> Result<HashMap<N, f64>>
where
    N: Clone + Eq + Hash + Debug,
{
    let source = graph.require(start)?;
    let search = linear_scan(graph, source, None);

    Ok(search
        .distances
        .iter()
        .enumerate()
        .filter(|&(_, &dist)| dist != INFINITY)
        .map(|(idx, &dist)| (graph.label(idx).clone(), dist))
        .collect())
}

/// Settle nodes one at a time, always the nearest unvisited one; stop once
/// `goal` is selected or nothing reachable is left.
fn linear_scan<N>(graph: &Graph<N>, source: usize, goal: Option<usize>) -> Search
where
    N: Clone + Eq + Hash + Debug,
{
    let n = graph.node_count();
    let mut distances = vec![INFINITY; n];
    let mut predecessors = vec![None; n];
    let mut visited = vec![false; n];
    let mut settled = 0;

    distances[source] = 0.0;

    loop {
        let mut current = None;
        let mut min_dist = INFINITY;
        for vertex in (0..n).filter(|&v| !visited[v]) {
            // strict `<`: the first node reaching the minimum wins
            if distances[vertex] < min_dist {
                min_dist = distances[vertex];
                current = Some(vertex);
            }
        }

        let Some(current) = current else { break };
        if Some(current) == goal {
            break;
        }
        trace!("settle {:?} at {min_dist}", graph.label(current));

        for edge in graph.adjacency(current) {
            let new_dist = distances[current] + edge.weight;
            if new_dist < distances[edge.to] {
                distances[edge.to] = new_dist;
                predecessors[edge.to] = Some(current);
            }
        }

        visited[current] = true;
        settled += 1;
    }

    Search {
        distances,
        predecessors,
        settled,
    }
}

fn binary_heap<N>(graph: &Graph<N>, source: usize, goal: usize) -> Search
where
    N: Clone + Eq + Hash + Debug,
{
    let n = graph.node_count();
    let mut distances = vec![INFINITY; n];
    let mut predecessors = vec![None; n];
    let mut visited = vec![false; n];
    let mut heap = BinaryHeap::new();
    let mut settled = 0;

    distances[source] = 0.0;
    heap.push(Reverse(VertexDistance::new(source, 0.0)));

    while let Some(Reverse(VertexDistance { vertex, distance })) = heap.pop() {
        if vertex == goal {
            break;
        }
        if visited[vertex] || distance > distances[vertex] {
            continue;
        }
        trace!("settle {:?} at {distance}", graph.label(vertex));

        for edge in graph.adjacency(vertex) {
            let new_dist = distance + edge.weight;
            if new_dist < distances[edge.to] {
                distances[edge.to] = new_dist;
                predecessors[edge.to] = Some(vertex);
                heap.push(Reverse(VertexDistance::new(edge.to, new_dist)));
            }
        }

        visited[vertex] = true;
        settled += 1;
    }

    Search {
        distances,
        predecessors,
        settled,
    }
}

/// Walk predecessor links back from `goal`; empty if the chain never reaches `source`.
fn reconstruct_path(predecessors: &[Option<usize>], source: usize, goal: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current = goal;
    while current != source {
        path.push(current);
        match predecessors[current] {
            Some(pred) => current = pred,
            None => return Vec::new(),
        }
    }
    path.push(source);
    path.reverse();
    path
}

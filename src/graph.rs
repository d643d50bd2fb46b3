#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Error, Result};

/// One half of an undirected edge, stored in the adjacency list of its source.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub to: usize,
    pub weight: f64,
}

/// Undirected weighted graph keyed by node label.
///
/// Labels are interned to dense indices in insertion order; that order is the
/// enumeration order used by [`Graph::nodes`] and by the linear-scan engine
/// when it breaks ties. Every edge is pushed into both endpoints' adjacency
/// lists, so the neighbor relation is always symmetric.
#[derive(Debug, Clone)]
pub struct Graph<N = String> {
    labels: Vec<N>,
    index: HashMap<N, usize>,
    edges: Vec<Vec<Edge>>,
    // Sum of all edge weights; bounds the cost of any simple path.
    total_weight: f64,
}

/// Serialisable form of a [`Graph`]: nodes in enumeration order plus each
/// undirected edge once.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GraphData<N> {
    pub nodes: Vec<N>,
    pub edges: Vec<(N, N, f64)>,
}

impl<N> Graph<N>
where
    N: Clone + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Graph {
            labels: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            total_weight: 0.0,
        }
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Graph {
            labels: Vec::with_capacity(nodes),
            index: HashMap::with_capacity(nodes),
            edges: Vec::with_capacity(nodes),
            total_weight: 0.0,
        }
    }

    /// Build a graph from undirected `(a, b, weight)` triples. Nodes are
    /// enumerated in order of first appearance.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, N, f64)>,
    {
        let mut graph = Graph::new();
        for (a, b, weight) in edges {
            graph.add_edge(a, b, weight)?;
        }
        Ok(graph)
    }

    /// Register a node, returning its index. Adding an existing node is a no-op.
    pub fn add_node(&mut self, node: N) -> usize {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.labels.len();
        self.index.insert(node.clone(), idx);
        self.labels.push(node);
        self.edges.push(Vec::new());
        idx
    }

    /// Add an undirected edge, registering unseen endpoints.
    ///
    /// Rejects negative or non-finite weights, self-loops, and any edge that
    /// would push the total edge weight past `f64::MAX`; the graph is left
    /// untouched on error.
    pub fn add_edge(&mut self, a: N, b: N, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight {
                from: format!("{a:?}"),
                to: format!("{b:?}"),
                weight,
            });
        }
        if a == b {
            return Err(Error::SelfLoop(format!("{a:?}")));
        }
        let total_weight = self.total_weight + weight;
        if !total_weight.is_finite() {
            return Err(Error::WeightOverflow {
                from: format!("{a:?}"),
                to: format!("{b:?}"),
            });
        }
        self.total_weight = total_weight;

        let from = self.add_node(a);
        let to = self.add_node(b);
        self.edges[from].push(Edge { to, weight });
        self.edges[to].push(Edge { to: from, weight });
        Ok(())
    }

    pub fn contains(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    pub fn index_of(&self, node: &N) -> Option<usize> {
        self.index.get(node).copied()
    }

    pub(crate) fn require(&self, node: &N) -> Result<usize> {
        self.index_of(node).ok_or_else(|| Error::unknown_node(node))
    }

    /// Label of the node at `idx`. Panics if `idx` is out of range.
    pub fn label(&self, idx: usize) -> &N {
        &self.labels[idx]
    }

    /// Nodes in enumeration (insertion) order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.labels.iter()
    }

    /// `(neighbor, weight)` pairs incident to `node`.
    pub fn neighbors<'a>(
        &'a self,
        node: &N,
    ) -> Result<impl Iterator<Item = (&'a N, f64)> + use<'a, N>> {
        let idx = self.require(node)?;
        Ok(self.edges[idx]
            .iter()
            .map(|edge| (&self.labels[edge.to], edge.weight)))
    }

    pub(crate) fn adjacency(&self, idx: usize) -> &[Edge] {
        &self.edges[idx]
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of undirected edges (parallel edges counted separately).
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(|adj| adj.len()).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Recompute the cost of walking `path`, taking the cheapest edge between
    /// consecutive nodes. `Ok(None)` if some consecutive pair is not adjacent.
    pub fn path_cost(&self, path: &[N]) -> Result<Option<f64>> {
        let indices = path
            .iter()
            .map(|node| self.require(node))
            .collect::<Result<Vec<_>>>()?;

        let mut total = 0.0;
        for pair in indices.windows(2) {
            let cheapest = self.edges[pair[0]]
                .iter()
                .filter(|edge| edge.to == pair[1])
                .map(|edge| edge.weight)
                .fold(None, |best: Option<f64>, w| Some(best.map_or(w, |b| b.min(w))));
            match cheapest {
                Some(weight) => total += weight,
                None => return Ok(None),
            }
        }
        Ok(Some(total))
    }

    pub fn to_data(&self) -> GraphData<N> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (from, adj) in self.edges.iter().enumerate() {
            for edge in adj.iter().filter(|edge| edge.to > from) {
                edges.push((
                    self.labels[from].clone(),
                    self.labels[edge.to].clone(),
                    edge.weight,
                ));
            }
        }
        GraphData {
            nodes: self.labels.clone(),
            edges,
        }
    }

    /// Rebuild a graph from its serialisable form, validating every edge.
    pub fn from_data(data: GraphData<N>) -> Result<Self> {
        let mut graph = Graph::with_capacity(data.nodes.len());
        for node in data.nodes {
            graph.add_node(node);
        }
        for (a, b, weight) in data.edges {
            graph.add_edge(a, b, weight)?;
        }
        Ok(graph)
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self>
    where
        N: serde::de::DeserializeOwned,
    {
        let data: GraphData<N> = serde_json::from_reader(reader)?;
        Graph::from_data(data)
    }

    #[cfg(feature = "serde_json")]
    pub fn to_json_writer<W: std::io::Write>(&self, writer: W) -> Result<()>
    where
        N: Serialize,
    {
        serde_json::to_writer_pretty(writer, &self.to_data())?;
        Ok(())
    }

    #[cfg(feature = "bincode")]
    pub fn from_file(path: &std::path::Path) -> Result<Self>
    where
        N: serde::de::DeserializeOwned,
    {
        let file = std::fs::File::open(path)?;
        let config = bincode::config::legacy();
        let mut reader = std::io::BufReader::new(file);
        let data: GraphData<N> = bincode::serde::decode_from_std_read(&mut reader, config)?;
        Graph::from_data(data)
    }

    #[cfg(feature = "bincode")]
    pub fn to_file(&self, path: &std::path::Path) -> Result<()>
    where
        N: Serialize,
    {
        let file = std::fs::File::create(path)?;
        let config = bincode::config::legacy();
        let mut writer = std::io::BufWriter::new(file);

        bincode::serde::encode_into_std_write(self.to_data(), &mut writer, config)?;

        Ok(())
    }

    #[cfg(feature = "petgraph")]
    pub fn to_petgraph(&self) -> petgraph::graph::UnGraph<N, f64> {
        let mut pg_graph = petgraph::Graph::new_undirected();
        let nodes: Vec<_> = self
            .labels
            .iter()
            .map(|label| pg_graph.add_node(label.clone()))
            .collect();

        for (from_idx, adj) in self.edges.iter().enumerate() {
            for edge in adj.iter().filter(|edge| edge.to > from_idx) {
                pg_graph.add_edge(nodes[from_idx], nodes[edge.to], edge.weight);
            }
        }
        pg_graph
    }
}

impl<N> Default for Graph<N>
where
    N: Clone + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

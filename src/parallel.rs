use rayon::prelude::*;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algo::{Route, Strategy, shortest_path_with};
use crate::error::Result;
use crate::graph::Graph;

/// Run independent `(start, end)` queries on the rayon pool against one
/// shared graph. Results come back in query order.
pub fn shortest_paths<N>(
    graph: &Graph<N>,
    queries: &[(N, N)],
    strategy: Strategy,
) -> Vec<Result<Option<Route<N>>>>
where
    N: Clone + Eq + Hash + Debug + Send + Sync,
{
    queries
        .par_iter()
        .map(|(start, end)| shortest_path_with(graph, start, end, strategy))
        .collect()
}

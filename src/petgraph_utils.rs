use crate::algo::{Route, shortest_path};
use crate::error::Result;
use crate::graph::Graph;
use petgraph::visit::{EdgeRef, IntoEdgeReferences, IntoNodeIdentifiers};
use std::fmt::Debug;
use std::hash::Hash;

/// Copy any petgraph graph into a [`Graph`] keyed by its node ids. Every edge
/// is read as undirected; weights are validated as they are added.
pub fn from_petgraph<G>(graph: G) -> Result<Graph<G::NodeId>>
where
    G: IntoEdgeReferences + IntoNodeIdentifiers,
    G::NodeId: Eq + Hash + Clone + Debug,
    G::EdgeWeight: Into<f64> + Copy,
{
    let mut our_graph = Graph::new();

    for node in graph.node_identifiers() {
        our_graph.add_node(node);
    }

    for edge in graph.edge_references() {
        let weight: f64 = (*edge.weight()).into();
        our_graph.add_edge(edge.source(), edge.target(), weight)?;
    }

    Ok(our_graph)
}

/// Lowest-cost route between two petgraph nodes, using the linear-scan engine.
pub fn route_petgraph<G>(
    graph: G,
    start: G::NodeId,
    goal: G::NodeId,
) -> Result<Option<Route<G::NodeId>>>
where
    G: IntoEdgeReferences + IntoNodeIdentifiers,
    G::NodeId: Eq + Hash + Clone + Debug,
    G::EdgeWeight: Into<f64> + Copy,
{
    let our_graph = from_petgraph(graph)?;
    shortest_path(&our_graph, &start, &goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use petgraph::graph::{NodeIndex, UnGraph};

    #[test]
    fn route_with_petgraph() {
        let mut pg_graph = UnGraph::<(), f64>::new_undirected();
        let a = pg_graph.add_node(()); // 0
        let b = pg_graph.add_node(()); // 1
        let c = pg_graph.add_node(()); // 2
        let d = pg_graph.add_node(()); // 3

        pg_graph.add_edge(a, b, 1.0);
        pg_graph.add_edge(a, c, 4.0);
        pg_graph.add_edge(b, c, 2.0);
        pg_graph.add_edge(b, d, 5.0);
        pg_graph.add_edge(c, d, 1.0);

        let route = route_petgraph(&pg_graph, a, d).unwrap().unwrap();

        assert_eq!(route.cost, 4.0);
        assert_eq!(route.path, vec![a, b, c, d]);
    }

    #[test]
    fn directed_edges_become_undirected() {
        let mut pg_graph = petgraph::Graph::<&str, u32>::new();
        let x = pg_graph.add_node("x");
        let y = pg_graph.add_node("y");
        pg_graph.add_edge(x, y, 3);

        let route = route_petgraph(&pg_graph, y, x).unwrap().unwrap();
        assert_eq!(route.cost, 3.0);
        assert_eq!(route.path, vec![y, x]);
    }

    #[test]
    fn unknown_petgraph_node() {
        let mut pg_graph = UnGraph::<(), f64>::new_undirected();
        let a = pg_graph.add_node(());

        let missing = NodeIndex::new(7);
        assert!(matches!(
            route_petgraph(&pg_graph, a, missing),
            Err(Error::UnknownNode(_))
        ));
    }

    #[test]
    fn round_trip_through_petgraph() {
        let graph = crate::network::korea_road_network().unwrap();
        let pg_graph = graph.to_petgraph();
        let seoul = pg_graph
            .node_indices()
            .find(|&i| pg_graph[i] == "Seoul")
            .unwrap();
        let busan = pg_graph
            .node_indices()
            .find(|&i| pg_graph[i] == "Busan")
            .unwrap();

        let route = route_petgraph(&pg_graph, seoul, busan).unwrap().unwrap();
        assert_eq!(route.cost, 317.0);
        assert_eq!(route.hops(), 4);
    }
}

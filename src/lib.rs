//! Minimum-cost routes between named nodes of a small, static, undirected
//! road network.
//!
//! Build a [`Graph`] once (by hand, from a file, or with
//! [`network::korea_road_network`]) and run any number of independent
//! [`shortest_path`] queries against it.

pub mod algo;
pub mod error;
pub mod graph;
pub mod network;
#[cfg(feature = "rayon")]
pub mod parallel;
#[cfg(feature = "petgraph")]
pub mod petgraph_utils;
pub mod utils;

pub use algo::{Route, Strategy, distances_from, shortest_path, shortest_path_with};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphData};

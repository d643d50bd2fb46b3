#![cfg(feature = "serde_json")]

use shortest_route::{Error, Graph, shortest_path};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn load(path: &str) -> Result<Graph<String>, Error> {
    let file = File::open(Path::new(path))?;
    Graph::from_json_reader(BufReader::new(file))
}

#[test]
fn json_network_matches_builtin() {
    let graph = load("tests/test_data/korea.json").unwrap();
    let builtin = shortest_route::network::korea_road_network().unwrap();

    assert_eq!(graph.node_count(), builtin.node_count() + 1);
    assert_eq!(graph.edge_count(), builtin.edge_count());

    let route = shortest_path(&graph, &"Seoul".to_string(), &"Busan".to_string())
        .unwrap()
        .unwrap();
    assert_eq!(route.cost, 317.0);
}

#[test]
fn json_island_is_unreachable() {
    let graph = load("tests/test_data/korea.json").unwrap();
    let result = shortest_path(&graph, &"Jeju".to_string(), &"Seoul".to_string()).unwrap();
    assert!(result.is_none());
}

#[test]
fn negative_weight_in_file_is_rejected() {
    let err = load("tests/test_data/negative.json").unwrap_err();
    assert!(matches!(err, Error::InvalidWeight { weight, .. } if weight == -4.0));
}

#[test]
fn missing_file_is_io_error() {
    assert!(matches!(load("tests/test_data/missing.json"), Err(Error::Io(_))));
}

#[test]
fn malformed_json_is_reported() {
    let result: Result<Graph<String>, Error> = Graph::from_json_reader("{\"nodes\": [".as_bytes());
    assert!(matches!(result, Err(Error::Json(_))));
}

#[cfg(feature = "bincode")]
#[test]
fn bincode_cache_round_trip() {
    let graph = load("tests/test_data/korea.json").unwrap();
    let path = std::env::temp_dir().join(format!("shortest_route_{}.bin", std::process::id()));

    graph.to_file(&path).unwrap();
    let cached: Graph<String> = Graph::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(cached.to_data(), graph.to_data());
}

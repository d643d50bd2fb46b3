//! Reference road network: 16 Korean cities and the roads between them.

use crate::error::Result;
use crate::graph::Graph;

pub const CITIES: [&str; 16] = [
    "Seoul", "Incheon", "Cheonan", "Suwon", "Wonju", "Gangneung", "Daejeon", "Nonsan", "Daegu",
    "Jecheon", "Andong", "Pohang", "Gwangju", "Suncheon", "Jeonju", "Busan",
];

/// Undirected roads with their length in km. Suwon–Seoul and Jeonju–Daegu
/// appear in only one direction in the source table; here they run both ways.
pub const ROADS: [(&str, &str, f64); 24] = [
    ("Seoul", "Cheonan", 85.0),
    ("Seoul", "Wonju", 87.0),
    ("Seoul", "Incheon", 27.0),
    ("Incheon", "Suwon", 42.0),
    ("Cheonan", "Daejeon", 48.0),
    ("Cheonan", "Nonsan", 60.0),
    ("Cheonan", "Suwon", 55.0),
    ("Suwon", "Seoul", 35.0),
    ("Wonju", "Gangneung", 110.0),
    ("Wonju", "Jecheon", 35.0),
    ("Gangneung", "Pohang", 160.0),
    ("Daejeon", "Daegu", 120.0),
    ("Daejeon", "Gwangju", 140.0),
    ("Nonsan", "Jeonju", 35.0),
    ("Nonsan", "Gwangju", 90.0),
    ("Daegu", "Pohang", 70.0),
    ("Daegu", "Busan", 95.0),
    ("Daegu", "Jecheon", 100.0),
    ("Jecheon", "Andong", 60.0),
    ("Andong", "Pohang", 80.0),
    ("Pohang", "Busan", 100.0),
    ("Gwangju", "Suncheon", 60.0),
    ("Suncheon", "Busan", 130.0),
    ("Jeonju", "Daegu", 130.0),
];

/// Build the reference network. Cities are enumerated in [`CITIES`] order.
pub fn korea_road_network() -> Result<Graph<String>> {
    let mut graph = Graph::with_capacity(CITIES.len());
    for city in CITIES {
        graph.add_node(city.to_string());
    }
    for (a, b, km) in ROADS {
        graph.add_edge(a.to_string(), b.to_string(), km)?;
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_shape() {
        let graph = korea_road_network().unwrap();
        assert_eq!(graph.node_count(), 16);
        assert_eq!(graph.edge_count(), 24);

        let order: Vec<&str> = graph.nodes().map(String::as_str).collect();
        assert_eq!(order, CITIES.to_vec());
    }

    #[test]
    fn test_seoul_roads() {
        let graph = korea_road_network().unwrap();
        let roads: Vec<(String, f64)> = graph
            .neighbors(&"Seoul".to_string())
            .unwrap()
            .map(|(city, km)| (city.clone(), km))
            .collect();

        assert!(roads.contains(&("Cheonan".to_string(), 85.0)));
        assert!(roads.contains(&("Wonju".to_string(), 87.0)));
        assert!(roads.contains(&("Incheon".to_string(), 27.0)));
        assert!(roads.contains(&("Suwon".to_string(), 35.0)));
    }

    #[test]
    fn test_one_way_rows_run_both_ways() {
        let graph = korea_road_network().unwrap();
        let road = |from: &str, to: &str| {
            graph
                .neighbors(&from.to_string())
                .unwrap()
                .find(|(city, _)| city.as_str() == to)
                .map(|(_, km)| km)
        };

        assert_eq!(road("Suwon", "Seoul"), Some(35.0));
        assert_eq!(road("Seoul", "Suwon"), Some(35.0));
        assert_eq!(road("Jeonju", "Daegu"), Some(130.0));
        assert_eq!(road("Daegu", "Jeonju"), Some(130.0));
    }

    #[test]
    fn test_every_city_connected() {
        let graph = korea_road_network().unwrap();
        for city in CITIES {
            let degree = graph.neighbors(&city.to_string()).unwrap().count();
            assert!(degree >= 2, "{city} has only {degree} roads");
        }
    }
}

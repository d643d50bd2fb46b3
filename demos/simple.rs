use shortest_route::network::korea_road_network;
use shortest_route::shortest_path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let graph = korea_road_network()?;

    let start = "Seoul".to_string();
    let end = "Busan".to_string();

    match shortest_path(&graph, &start, &end)? {
        Some(route) => {
            println!("From:     {}", start);
            println!("To:       {}", end);
            println!("Route:    {}", route);
            println!("Distance: {}km", route.cost);
        }
        None => println!("No route from {} to {}", start, end),
    }

    Ok(())
}

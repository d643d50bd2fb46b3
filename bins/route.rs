use log::info;
use shortest_route::network::korea_road_network;
use shortest_route::{Error, Graph, Strategy, shortest_path_with};
use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn print_help(program_name: &str) {
    println!("Find the shortest route between two cities.");
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS] <START> <END>", program_name);
    println!();
    println!("OPTIONS:");
    println!("    --strategy <scan|heap>   Node selection strategy (default: scan)");
    println!("    --graph <FILE>           JSON graph file (default: built-in road network)");
    println!("    --json                   Print the route as JSON");
    println!("    -h, --help               Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    {} Seoul Busan", program_name);
    println!("    {} --strategy heap --json Incheon Jeonju", program_name);
    println!();
    println!("Set RUST_LOG=shortest_route=debug to trace the search.");
}

fn load_graph(path: Option<&str>) -> Result<Graph<String>, Error> {
    match path {
        Some(path) => {
            info!("Loading graph from {}", path);
            let file = File::open(Path::new(path))?;
            Graph::from_json_reader(BufReader::new(file))
        }
        None => korea_road_network(),
    }
}

#[derive(Debug, PartialEq)]
struct Options {
    strategy: Strategy,
    graph_path: Option<String>,
    json_output: bool,
    start: String,
    end: String,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut strategy = Strategy::default();
    let mut graph_path = None;
    let mut json_output = false;
    let mut cities: Vec<&str> = Vec::new();

    let mut rest = args.iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--strategy" => {
                let name = rest.next().ok_or("--strategy needs a value")?;
                strategy = name.parse().map_err(|err: Error| err.to_string())?;
            }
            "--graph" => {
                let path = rest.next().ok_or("--graph needs a file path")?;
                graph_path = Some(path.clone());
            }
            "--json" => json_output = true,
            option if option.starts_with("--") => {
                return Err(format!("unrecognised option {}", option));
            }
            city => cities.push(city),
        }
    }

    match cities.as_slice() {
        [start, end] => Ok(Options {
            strategy,
            graph_path,
            json_output,
            start: start.to_string(),
            end: end.to_string(),
        }),
        _ => Err(format!("expected exactly two cities, got {}", cities.len())),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() >= 2 && (args[1] == "--help" || args[1] == "-h") {
        print_help(&args[0]);
        std::process::exit(0);
    }

    let options = match parse_args(&args[1..]) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!();
            eprintln!("Usage: {} [OPTIONS] <START> <END>", args[0]);
            eprintln!("Try '{} --help' for more information.", args[0]);
            std::process::exit(1);
        }
    };

    let graph = load_graph(options.graph_path.as_deref())?;
    info!(
        "Graph ready: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let (start, end) = (options.start, options.end);

    match shortest_path_with(&graph, &start, &end, options.strategy) {
        Ok(Some(route)) => {
            if options.json_output {
                println!("{}", serde_json::to_string_pretty(&route)?);
            } else {
                println!("From:     {}", start);
                println!("To:       {}", end);
                println!("Route:    {}", route);
                println!("Distance: {}km", route.cost);
            }
            Ok(())
        }
        Ok(None) => {
            eprintln!("No route from {} to {}", start, end);
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

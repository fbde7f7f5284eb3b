use std::process::ExitCode;

use metro_planner::config::DemoConfig;
use metro_planner::export::{NetworkSnapshot, RouteSummary};
use metro_planner::logging::init_tracing;
use metro_planner::network::ankara_red_line;
use metro_planner::planner::Planner;
use serde_json::json;
use tracing::info;

fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("Warning: failed to initialise logging: {e}");
    }

    let config = match DemoConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let network = ankara_red_line();
    info!(
        stations = network.len(),
        connections = network.connections().len(),
        "Network loaded"
    );

    let planner = Planner::new(&network);

    println!();
    println!("Fewest stops from {} to {}:", config.from, config.to);
    let fewest_stops = match planner.find_fewest_stops(&config.from, &config.to) {
        Ok(route) => {
            println!("  {} ({} stops)", route, route.hops());
            Some(RouteSummary::from_route(&route))
        }
        Err(e) => {
            println!("  No route found: {e}");
            None
        }
    };

    println!();
    println!("Fastest route from {} to {}:", config.from, config.to);
    let minimum_time = match planner.find_minimum_time(&config.from, &config.to) {
        Ok(route) => {
            println!("  {} ({} minutes)", route, route.total_minutes());
            Some(RouteSummary::from_route(&route))
        }
        Err(e) => {
            println!("  No route found: {e}");
            None
        }
    };

    if config.export {
        let output = json!({
            "network": NetworkSnapshot::from_network(&network),
            "fewest_stops": fewest_stops,
            "minimum_time": minimum_time,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(text) => {
                println!();
                println!("{text}");
            }
            Err(e) => {
                eprintln!("Failed to serialize output: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

//! Way2Valley command line navigator

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;
use svc_way2valley::router::router_types::node::Category;
use svc_way2valley::*;

/// Walking directions across the campus
#[derive(Parser, Debug)]
#[command(name = "way2valley", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List campus places
    Locations {
        /// Only places in this category, e.g. hostel or sports
        #[arg(long)]
        category: Option<Category>,

        /// Only places whose name or description contains this text
        #[arg(long)]
        search: Option<String>,
    },

    /// List campus roads with their lengths
    Roads,

    /// Find a walking route between two places
    Route {
        /// Starting place
        from: String,

        /// Destination place
        to: String,

        /// Routing model, overrides ROUTING_MODE
        #[arg(long)]
        mode: Option<RoutingMode>,

        /// Hop bound for road routing, overrides MAX_SEARCH_DEPTH
        #[arg(long)]
        max_depth: Option<usize>,
    },
}

#[derive(Serialize)]
struct RouteOutput<'a> {
    #[serde(flatten)]
    route: &'a RouteResult,
    distance: String,
    walking_minutes: u64,
}

#[derive(Serialize)]
struct RoadOutput<'a> {
    name: &'a str,
    length_meters: u64,
    points: usize,
}

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Will use default config settings if no environment vars are found.
    let config = Config::try_from_env()
        .map_err(|e| anyhow!("Failed to load configuration from environment: {}", e))?;

    // Will default to stderr debug logging if the file can not be loaded.
    if let Err(e) = load_logger_config_from_file(config.log_config.as_str()).await {
        log::error!("(main) {}", e);
    }

    info!("(main) Loading campus.");
    let campus = config.load_campus().context("Failed to load campus data")?;

    match cli.command {
        Command::Locations { category, search } => {
            let mut places = match category {
                Some(category) => campus.locations_by_category(category),
                None => campus.list_locations().iter().collect(),
            };
            if let Some(query) = search {
                let matches = campus.search(&query);
                places.retain(|node| matches.iter().any(|m| m.key == node.key));
            }

            println!("{}", serde_json::to_string_pretty(&places)?);
        }
        Command::Roads => {
            let roads: Vec<RoadOutput> = campus
                .list_roads()
                .iter()
                .map(|road| RoadOutput {
                    name: &road.name,
                    length_meters: road.length_meters().round() as u64,
                    points: road.points.len(),
                })
                .collect();

            println!("{}", serde_json::to_string_pretty(&roads)?);
        }
        Command::Route {
            from,
            to,
            mode,
            max_depth,
        } => {
            let navigator = Navigator::new(
                campus,
                mode.unwrap_or(config.routing_mode),
                max_depth.unwrap_or(config.max_search_depth),
            )?;

            let route = navigator.find_path(&from, &to)?;
            let output = RouteOutput {
                route: &route,
                distance: route.formatted_distance(),
                walking_minutes: route.walking_minutes(config.walking_speed_kmh),
            };

            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    // Make sure all log message are written/ displayed before shutdown
    log::logger().flush();

    Ok(())
}

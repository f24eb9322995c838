use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use nammametro_lib::{bengaluru_network, plan_route, Priority, RouteOutcome, StationId};

#[derive(Parser, Debug)]
#[command(author, version, about = "Namma Metro route planning utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read a station-index query from a file and write both route reports.
    Plan {
        /// Query file holding whitespace-separated station index pairs.
        #[arg(long, default_value = "input.txt")]
        input: PathBuf,
        /// Destination file for the time and price reports.
        #[arg(long, default_value = "output.txt")]
        output: PathBuf,
    },
    /// Compute time- and price-optimal routes between two station names.
    Route {
        /// Starting station name.
        #[arg(long = "from")]
        from: String,
        /// Destination station name.
        #[arg(long = "to")]
        to: String,
        /// Emit the reports as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List every station in the network.
    Stations,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Plan { input, output } => handle_plan(&input, &output),
        Command::Route { from, to, json } => handle_route(&from, &to, json),
        Command::Stations => handle_stations(),
    }
}

fn handle_plan(input: &Path, output: &Path) -> Result<()> {
    let network = bengaluru_network();
    let contents = fs::read_to_string(input)
        .with_context(|| format!("failed to read query file {}", input.display()))?;
    let (source, destination) = parse_query(&contents)?;

    let time = plan_route(&network, source, destination, Priority::Time)?;
    let price = plan_route(&network, source, destination, Priority::Price)?;

    let mut reports = time.render();
    reports.push('\n');
    reports.push_str(&price.render());

    fs::write(output, reports)
        .with_context(|| format!("failed to write report file {}", output.display()))?;
    Ok(())
}

/// Parse whitespace-separated station index pairs. Query files may hold
/// several pairs; the last complete pair wins.
fn parse_query(contents: &str) -> Result<(StationId, StationId)> {
    let mut query = None;
    let mut tokens = contents.split_whitespace();
    while let (Some(from), Some(to)) = (tokens.next(), tokens.next()) {
        let from = from
            .parse::<StationId>()
            .with_context(|| format!("invalid station index {from:?}"))?;
        let to = to
            .parse::<StationId>()
            .with_context(|| format!("invalid station index {to:?}"))?;
        query = Some((from, to));
    }
    query.ok_or_else(|| anyhow!("query file did not contain a station index pair"))
}

fn handle_route(from: &str, to: &str, json: bool) -> Result<()> {
    let network = bengaluru_network();
    let source = network.resolve_station(from)?;
    let destination = network.resolve_station(to)?;

    let time = plan_route(&network, source, destination, Priority::Time)?;
    let price = plan_route(&network, source, destination, Priority::Price)?;

    if json {
        let reports = serde_json::json!({
            "time": outcome_value(&time),
            "price": outcome_value(&price),
        });
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print!("{}", time.render());
        println!();
        print!("{}", price.render());
    }
    Ok(())
}

fn outcome_value(outcome: &RouteOutcome) -> serde_json::Value {
    match outcome {
        RouteOutcome::Route(report) => serde_json::json!(report),
        RouteOutcome::NoRoute => serde_json::Value::Null,
    }
}

fn handle_stations() -> Result<()> {
    let network = bengaluru_network();
    for station in network.stations() {
        println!("{:>3}: {} ({})", station.id, station.name, station.line);
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

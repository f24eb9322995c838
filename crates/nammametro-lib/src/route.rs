use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::network::{MetroNetwork, StationId};
use crate::solver::{solve, Priority, ShortestPaths};

/// Read-only view of one reconstructed route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    /// Dimension the solver optimized for.
    pub priority: Priority,
    /// Every station on the path, source first.
    pub stations: Vec<String>,
    /// Interior transfer stations, in path order.
    pub interchanges: Vec<String>,
    /// Minutes accumulated over the whole path.
    pub total_time: u32,
    /// Rupees accumulated over the whole path.
    pub total_fare: u32,
}

impl RouteReport {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    /// Render the textual route contract.
    ///
    /// The route line names the origin, the interchange stations in path
    /// order, and the destination, followed by the total for the optimized
    /// dimension. A zero-length route renders as the station name alone.
    pub fn render(&self) -> String {
        let mut stops: Vec<&str> = Vec::with_capacity(self.interchanges.len() + 2);
        if let Some(origin) = self.stations.first() {
            stops.push(origin);
        }
        stops.extend(self.interchanges.iter().map(String::as_str));
        if self.stations.len() > 1 {
            if let Some(terminus) = self.stations.last() {
                stops.push(terminus);
            }
        }

        let mut buffer = String::new();
        let _ = writeln!(buffer, "Route: {}", stops.join(" -> "));
        match self.priority {
            Priority::Time => {
                let _ = writeln!(buffer, "Total Time: {} minutes", self.total_time);
            }
            Priority::Price => {
                let _ = writeln!(buffer, "Total Price: {} rupees", self.total_fare);
            }
        }
        buffer
    }
}

/// Result of reconstructing a path from solver output.
///
/// An unreachable destination is not an error; it renders as the distinct
/// no-route message.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    Route(RouteReport),
    NoRoute,
}

impl RouteOutcome {
    /// Render either the route block or the no-route message.
    pub fn render(&self) -> String {
        match self {
            RouteOutcome::Route(report) => report.render(),
            RouteOutcome::NoRoute => "No route available.\n".to_string(),
        }
    }
}

/// Walk the predecessor chain from `destination` back to `source` and
/// build the route report.
///
/// Both totals are accumulated on every walk regardless of the dimension
/// the solver optimized. `paths` must come from a solve over the same
/// network with the same source; a chain that does not root at `source`
/// or refers to a missing link is reported as [`Error::RouteNotFound`].
/// The reconstructor holds no state across calls.
pub fn reconstruct_route(
    network: &MetroNetwork,
    paths: &ShortestPaths,
    source: StationId,
    destination: StationId,
) -> Result<RouteOutcome> {
    let station_count = network.station_count().min(paths.predecessor.len());
    for index in [source, destination] {
        if index >= station_count {
            return Err(Error::StationIndexOutOfRange {
                index,
                count: network.station_count(),
            });
        }
    }

    if source == destination {
        return Ok(RouteOutcome::Route(RouteReport {
            priority: paths.priority,
            stations: vec![station_label(network, source)],
            interchanges: Vec::new(),
            total_time: 0,
            total_fare: 0,
        }));
    }

    if paths.predecessor[destination].is_none() {
        return Ok(RouteOutcome::NoRoute);
    }

    let mut path = vec![destination];
    let mut interchanges: Vec<StationId> = Vec::new();
    let mut total_time = 0;
    let mut total_fare = 0;

    let mut current = destination;
    while let Some(previous) = paths.predecessor.get(current).copied().flatten() {
        // A chain longer than the station count can only come from corrupt
        // predecessor data; bail out instead of walking a cycle forever.
        if path.len() > station_count {
            return Err(route_not_found(network, source, destination));
        }

        let link = network
            .link(current, previous)
            .ok_or_else(|| route_not_found(network, source, destination))?;
        total_time += link.time;
        total_fare += link.fare;

        if current != destination && is_interchange(network, current) {
            interchanges.push(current);
        }

        path.push(previous);
        current = previous;
    }

    // A well-formed solver run roots every predecessor chain at its source.
    if current != source {
        return Err(route_not_found(network, source, destination));
    }

    path.reverse();
    interchanges.reverse();

    Ok(RouteOutcome::Route(RouteReport {
        priority: paths.priority,
        stations: path
            .into_iter()
            .map(|id| station_label(network, id))
            .collect(),
        interchanges: interchanges
            .into_iter()
            .map(|id| station_label(network, id))
            .collect(),
        total_time,
        total_fare,
    }))
}

/// Solve and reconstruct in one step for a single weight dimension.
pub fn plan_route(
    network: &MetroNetwork,
    source: StationId,
    destination: StationId,
    priority: Priority,
) -> Result<RouteOutcome> {
    let paths = solve(network, source, priority)?;
    reconstruct_route(network, &paths, source, destination)
}

fn station_label(network: &MetroNetwork, station: StationId) -> String {
    network.station_name(station).unwrap_or("<unknown>").to_string()
}

fn is_interchange(network: &MetroNetwork, station: StationId) -> bool {
    network
        .station(station)
        .map_or(false, |entry| entry.is_interchange)
}

fn route_not_found(network: &MetroNetwork, source: StationId, destination: StationId) -> Error {
    Error::RouteNotFound {
        start: station_label(network, source),
        goal: station_label(network, destination),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_route_renders_contract_text() {
        assert_eq!(RouteOutcome::NoRoute.render(), "No route available.\n");
    }

    #[test]
    fn same_station_is_a_zero_cost_route() {
        let mut network = MetroNetwork::new();
        network.add_station("Hebbal", "Blue").expect("capacity");
        network.add_station("Kempapura", "Blue").expect("capacity");
        network.add_connection("Hebbal", "Kempapura", 1, 2.8);

        let outcome = plan_route(&network, 0, 0, Priority::Time).expect("plan succeeds");
        let RouteOutcome::Route(report) = outcome else {
            panic!("expected a route");
        };
        assert_eq!(report.stations, vec!["Hebbal".to_string()]);
        assert!(report.interchanges.is_empty());
        assert_eq!(report.total_time, 0);
        assert_eq!(report.total_fare, 0);
        assert_eq!(report.render(), "Route: Hebbal\nTotal Time: 0 minutes\n");
    }
}

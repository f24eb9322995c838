use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::network::{Link, MetroNetwork, StationId};

/// Edge-weight dimension optimized by a solver run.
///
/// Always passed explicitly; there is no ambient default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Minimize travel time in minutes.
    Time,
    /// Minimize fare in rupees.
    Price,
}

impl Priority {
    /// Weight of a link under this dimension.
    pub fn weight(self, link: &Link) -> u32 {
        match self {
            Priority::Time => link.time,
            Priority::Price => link.fare,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Priority::Time => "time",
            Priority::Price => "price",
        };
        f.write_str(value)
    }
}

/// Distance and predecessor arrays produced by a single solver run.
///
/// Both arrays are indexed by station; `None` marks a station the source
/// cannot reach. Every run allocates fresh arrays, so the two priority
/// solves over one network are fully independent.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    pub priority: Priority,
    pub distance: Vec<Option<u32>>,
    pub predecessor: Vec<Option<StationId>>,
}

/// Run Dijkstra's algorithm from `source` under the given weight dimension.
///
/// Selection is a linear scan over the unvisited stations, so ties resolve
/// to the lowest station index. The loop runs at most V-1 relaxation
/// rounds and stops early once no unvisited reachable station remains.
/// Out-of-range sources are rejected rather than read out of bounds.
pub fn solve(
    network: &MetroNetwork,
    source: StationId,
    priority: Priority,
) -> Result<ShortestPaths> {
    let station_count = network.station_count();
    if source >= station_count {
        return Err(Error::StationIndexOutOfRange {
            index: source,
            count: station_count,
        });
    }

    debug!(source, %priority, "running shortest-path solve");

    let mut distance: Vec<Option<u32>> = vec![None; station_count];
    let mut predecessor: Vec<Option<StationId>> = vec![None; station_count];
    let mut visited = vec![false; station_count];
    distance[source] = Some(0);

    for _ in 1..station_count {
        let Some((current, current_cost)) = next_unvisited(&distance, &visited) else {
            break;
        };
        visited[current] = true;

        for link in network.neighbours(current) {
            if visited[link.target] {
                continue;
            }
            let candidate = current_cost + priority.weight(link);
            if distance[link.target].map_or(true, |existing| candidate < existing) {
                distance[link.target] = Some(candidate);
                predecessor[link.target] = Some(current);
            }
        }
    }

    Ok(ShortestPaths {
        priority,
        distance,
        predecessor,
    })
}

/// Linear scan for the unvisited station with the smallest finite distance.
fn next_unvisited(distance: &[Option<u32>], visited: &[bool]) -> Option<(StationId, u32)> {
    let mut best: Option<(StationId, u32)> = None;
    for (station, entry) in distance.iter().enumerate() {
        if visited[station] {
            continue;
        }
        let Some(cost) = *entry else { continue };
        match best {
            Some((_, smallest)) if cost >= smallest => {}
            _ => best = Some((station, cost)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_source() {
        let network = MetroNetwork::new();
        let error = solve(&network, 0, Priority::Time).expect_err("empty network");
        assert!(matches!(
            error,
            Error::StationIndexOutOfRange { index: 0, count: 0 }
        ));
    }

    #[test]
    fn single_station_network_solves_trivially() {
        let mut network = MetroNetwork::new();
        network.add_station("Hebbal", "Blue").expect("capacity");

        let paths = solve(&network, 0, Priority::Price).expect("solve succeeds");
        assert_eq!(paths.distance, vec![Some(0)]);
        assert_eq!(paths.predecessor, vec![None]);
    }
}

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::warn;

use crate::error::{Error, Result};

/// Index of a station within the network.
pub type StationId = usize;

/// Practical bound on the network size. The rollout tables stay well under
/// it; registrations beyond the bound are rejected, not fatal.
pub const MAX_STATIONS: usize = 150;

/// Stations carrying this marker in their display name are transfer points
/// shared by two or more lines.
const JUNCTION_MARKER: &str = "-junction";

/// Minimum Jaro-Winkler similarity for a station name to be suggested.
const FUZZY_MATCH_THRESHOLD: f64 = 0.8;

/// A station in the metro network.
///
/// The interchange flag is derived from the name once at registration; the
/// name itself stays purely cosmetic afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub line: String,
    pub is_interchange: bool,
}

/// Weighted connection to a neighbouring station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub target: StationId,
    /// Travel time in minutes.
    pub time: u32,
    /// Fare in whole rupees.
    pub fare: u32,
}

/// In-memory representation of the metro network.
///
/// Populated once at startup through [`MetroNetwork::add_station`] and
/// [`MetroNetwork::add_connection`], then treated as read-only by the
/// solver and reconstructor.
#[derive(Debug, Clone, Default)]
pub struct MetroNetwork {
    stations: Vec<Station>,
    name_to_id: HashMap<String, StationId>,
    adjacency: Vec<Vec<Link>>,
}

impl MetroNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered stations, orphaned duplicates included.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// All registered stations in registration order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id)
    }

    pub fn station_name(&self, id: StationId) -> Option<&str> {
        self.stations.get(id).map(|station| station.name.as_str())
    }

    /// Lookup a station identifier by its case-sensitive name.
    ///
    /// Duplicate registrations resolve to the first occurrence.
    pub fn station_id_by_name(&self, name: &str) -> Option<StationId> {
        self.name_to_id.get(name).copied()
    }

    /// Resolve a station name, returning an error with fuzzy-match
    /// suggestions for unknown names.
    pub fn resolve_station(&self, name: &str) -> Result<StationId> {
        self.station_id_by_name(name)
            .ok_or_else(|| Error::UnknownStation {
                name: name.to_string(),
                suggestions: self.fuzzy_station_matches(name, 3),
            })
    }

    /// Return up to `limit` station names similar to the requested one,
    /// best match first.
    pub fn fuzzy_station_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .stations
            .iter()
            .map(|station| {
                let score = strsim::jaro_winkler(&needle, &station.name.to_lowercase());
                (score, station.name.as_str())
            })
            .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        let mut matches: Vec<String> = Vec::new();
        for (_, candidate) in scored {
            if matches.iter().any(|existing| existing == candidate) {
                continue;
            }
            matches.push(candidate.to_string());
            if matches.len() == limit {
                break;
            }
        }
        matches
    }

    /// Return the outgoing links for a station.
    pub fn neighbours(&self, station: StationId) -> &[Link] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Return the link between two stations, if one exists.
    pub fn link(&self, from: StationId, to: StationId) -> Option<Link> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|link| link.target == to)
            .copied()
    }

    /// Register a new station.
    ///
    /// Fails with [`Error::CapacityExceeded`] once the practical bound is
    /// reached; the caller decides whether to surface or skip. Duplicate
    /// names are permitted, but name lookup keeps resolving to the first
    /// registration.
    pub fn add_station(&mut self, name: &str, line: &str) -> Result<StationId> {
        if self.stations.len() >= MAX_STATIONS {
            return Err(Error::CapacityExceeded {
                name: name.to_string(),
                limit: MAX_STATIONS,
            });
        }

        let id = self.stations.len();
        self.stations.push(Station {
            id,
            name: name.to_string(),
            line: line.to_string(),
            is_interchange: name.contains(JUNCTION_MARKER),
        });
        self.adjacency.push(Vec::new());
        self.name_to_id.entry(name.to_string()).or_insert(id);
        Ok(id)
    }

    /// Connect two stations symmetrically with the given weights.
    ///
    /// Fares arrive as fractional rupees but are tracked to the whole
    /// rupee. Connections referencing a name that was never registered are
    /// dropped with a warning and leave the network unchanged; re-adding an
    /// existing connection overwrites its weights.
    pub fn add_connection(&mut self, name_a: &str, name_b: &str, time: u32, fare: f64) {
        let (Some(a), Some(b)) = (
            self.station_id_by_name(name_a),
            self.station_id_by_name(name_b),
        ) else {
            warn!(
                from = name_a,
                to = name_b,
                "dropping connection referencing an unknown station"
            );
            return;
        };

        let fare = fare as u32;
        self.upsert_link(a, b, time, fare);
        self.upsert_link(b, a, time, fare);
    }

    fn upsert_link(&mut self, from: StationId, to: StationId, time: u32, fare: u32) {
        let links = &mut self.adjacency[from];
        if let Some(existing) = links.iter_mut().find(|link| link.target == to) {
            existing.time = time;
            existing.fare = fare;
        } else {
            links.push(Link { target: to, time, fare });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn junction_marker_sets_interchange_flag() {
        let mut network = MetroNetwork::new();
        let plain = network.add_station("Hebbal", "Blue").expect("capacity");
        let junction = network
            .add_station("Nagawara -junction", "Blue")
            .expect("capacity");

        assert!(!network.station(plain).expect("station").is_interchange);
        assert!(network.station(junction).expect("station").is_interchange);
    }

    #[test]
    fn fares_are_truncated_to_whole_rupees() {
        let mut network = MetroNetwork::new();
        network.add_station("A", "Test").expect("capacity");
        network.add_station("B", "Test").expect("capacity");
        network.add_connection("A", "B", 3, 3.9);

        assert_eq!(network.link(0, 1).expect("link").fare, 3);
    }

    #[test]
    fn reconnecting_overwrites_existing_weights() {
        let mut network = MetroNetwork::new();
        network.add_station("A", "Test").expect("capacity");
        network.add_station("B", "Test").expect("capacity");
        network.add_connection("A", "B", 3, 2.0);
        network.add_connection("A", "B", 5, 4.0);

        assert_eq!(network.neighbours(0).len(), 1);
        assert_eq!(
            network.link(1, 0),
            Some(Link {
                target: 0,
                time: 5,
                fare: 4
            })
        );
    }

    #[test]
    fn duplicate_names_resolve_to_first_registration() {
        let mut network = MetroNetwork::new();
        let first = network
            .add_station("KR Pura-junction", "Purple")
            .expect("capacity");
        let second = network
            .add_station("KR Pura-junction", "Blue")
            .expect("capacity");

        assert_ne!(first, second);
        assert_eq!(network.station_id_by_name("KR Pura-junction"), Some(first));
        assert_eq!(network.station_count(), 2);
    }
}

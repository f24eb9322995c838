//! Namma Metro route planning library.
//!
//! This crate models the Bengaluru metro network, runs Dijkstra's
//! algorithm over it under the time or fare dimension, and reconstructs
//! the optimal path into a renderable route report. Higher-level consumers
//! (the CLI) should only depend on the functions exported here instead of
//! reimplementing behavior.

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod network;
pub mod route;
pub mod solver;

pub use dataset::bengaluru_network;
pub use error::{Error, Result};
pub use network::{Link, MetroNetwork, Station, StationId, MAX_STATIONS};
pub use route::{plan_route, reconstruct_route, RouteOutcome, RouteReport};
pub use solver::{solve, Priority, ShortestPaths};

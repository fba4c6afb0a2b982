//! The solver module contains the optimizer which searches for the shortest round-the-world route.
//!
//! # Search
//!
//! Route search is exact and consists of the following steps:
//!
//! - all continents except the origin's one are collected, see [`get_continents_excluding_origin`]
//! - every visit order of these continents is enumerated
//! - for each order, a [`LayeredGraph`] is built: the origin as source, one layer of cities per
//!   continent, each layer fully connected to the next one, and the origin as sink
//! - the shortest path from source to sink is found using Dijkstra's algorithm
//! - the path with the smallest distance wins, on ties the order enumerated first is preferred
//!
//! Orders are independent from each other, so they are evaluated in parallel on a thread pool.
//!
//! # Examples
//!
//! ```
//! use rtw_core::models::{City, Location, group_by_continent};
//! use rtw_core::solver::OptimizerBuilder;
//!
//! let city = |id: &str, lat: f64, lon: f64, continent: &str| City {
//!     id: id.to_string(),
//!     name: id.to_string(),
//!     location: Location::new(lat, lon),
//!     continent: continent.to_string(),
//!     country: String::default(),
//! };
//!
//! let cities = vec![city("home", 0., 0., "D"), city("a", 0., 10., "A"), city("b", 0., 20., "B")];
//! let continents = group_by_continent(cities.iter());
//!
//! let mut optimizer = OptimizerBuilder::default().with_threads(1).build();
//! let (best, _) = optimizer.solve(&cities[0], &continents).expect("cannot find path");
//!
//! assert_eq!(best.cities.len(), 4);
//! ```

#[cfg(test)]
#[path = "../../tests/unit/solver/optimizer_test.rs"]
mod optimizer_test;

mod error;
pub use self::error::SolverError;

mod layered;
pub use self::layered::{LayeredGraph, SOURCE_INDEX};

mod partition;
pub use self::partition::get_continents_excluding_origin;

mod telemetry;
pub use self::telemetry::*;

use crate::algorithms::graph::Weight;
use crate::algorithms::permutations::get_permutations;
use crate::models::{City, ContinentGroup, ContinentMap};
use crate::utils::{ThreadPool, get_cpus, map_reduce};

/// An upper bound of route distance: ten times Earth radius in kilometers. Any real route
/// around the world is shorter.
pub const DISTANCE_UPPER_BOUND: Weight = 63_710;

/// The best route found: the origin city, one city per visited continent and the origin again.
#[derive(Clone, Debug, PartialEq)]
pub struct BestPath {
    /// Cities in visit order.
    pub cities: Vec<City>,
    /// Total distance in whole kilometers.
    pub distance: Weight,
}

/// Provides configurable way to build [`Optimizer`].
#[derive(Default)]
pub struct OptimizerBuilder {
    telemetry: Option<Telemetry>,
    threads: Option<usize>,
}

impl OptimizerBuilder {
    /// Sets telemetry. Default is no telemetry.
    pub fn with_telemetry(mut self, telemetry: Telemetry) -> Self {
        self.telemetry = Some(telemetry);
        self
    }

    /// Sets amount of worker threads. Default is amount of CPUs.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Builds [`Optimizer`].
    pub fn build(self) -> Optimizer {
        let threads = self.threads.unwrap_or_else(get_cpus).max(1);

        Optimizer {
            telemetry: self.telemetry.unwrap_or_else(|| Telemetry::new(TelemetryMode::None)),
            pool: ThreadPool::new(threads),
        }
    }
}

/// Searches for the shortest round-the-world route.
pub struct Optimizer {
    telemetry: Telemetry,
    pool: ThreadPool,
}

impl Optimizer {
    /// Finds the best route starting and ending at `origin` which visits exactly one city on every
    /// continent of `continents` except the origin's one. Returns telemetry metrics when they
    /// are requested.
    pub fn solve(
        &mut self,
        origin: &City,
        continents: &ContinentMap,
    ) -> Result<(BestPath, Option<TelemetryMetrics>), SolverError> {
        self.telemetry.start();

        let groups = get_continents_excluding_origin(origin, continents)?;
        let permutations = get_permutations(groups.len()).enumerate().collect::<Vec<_>>();
        let graph_size = groups.iter().map(|group| group.cities.len()).sum::<usize>() + 2;

        self.telemetry.on_partition(origin, groups.as_slice(), permutations.len());

        let telemetry = &self.telemetry;
        let groups = groups.as_slice();

        let reduction = self.pool.execute(|| {
            map_reduce(
                &permutations,
                |item: &(usize, Vec<usize>)| evaluate_order(origin, groups, item.0, item.1.as_slice(), telemetry),
                Reduction::default,
                Reduction::merge,
            )
        });

        let metrics = self.telemetry.on_result(
            reduction.best.as_ref().map(|candidate| candidate.distance),
            reduction.evaluated,
            reduction.skipped,
            graph_size,
        );

        reduction
            .best
            .map(|candidate| (BestPath { cities: candidate.cities, distance: candidate.distance }, metrics))
            .ok_or(SolverError::NoQualifyingPath)
    }
}

/// Finds the best route using default optimizer settings.
pub fn compute_best_path(origin: &City, continents: &ContinentMap) -> Result<BestPath, SolverError> {
    OptimizerBuilder::default().build().solve(origin, continents).map(|(best, _)| best)
}

struct Candidate {
    sequence: usize,
    distance: Weight,
    cities: Vec<City>,
}

#[derive(Default)]
struct Reduction {
    best: Option<Candidate>,
    evaluated: usize,
    skipped: usize,
}

impl Reduction {
    /// Keeps the shortest candidate, on equal distance the one with lower sequence number wins,
    /// which makes the result independent from evaluation order.
    fn merge(self, other: Self) -> Self {
        let best = match (self.best, other.best) {
            (Some(left), Some(right)) => {
                if (right.distance, right.sequence) < (left.distance, left.sequence) {
                    Some(right)
                } else {
                    Some(left)
                }
            }
            (left, right) => left.or(right),
        };

        Self { best, evaluated: self.evaluated + other.evaluated, skipped: self.skipped + other.skipped }
    }
}

fn evaluate_order(
    origin: &City,
    groups: &[ContinentGroup],
    sequence: usize,
    permutation: &[usize],
    telemetry: &Telemetry,
) -> Reduction {
    let order = permutation.iter().map(|&idx| &groups[idx]).collect::<Vec<_>>();
    let min_nodes = groups.len() + 2;

    let layered = LayeredGraph::new(origin, order.as_slice());

    let best = match layered.find_shortest_path() {
        None => {
            telemetry.on_skip(sequence, order.as_slice(), "source and sink are disconnected");
            None
        }
        Some(path) if path.nodes.len() < min_nodes => {
            let reason = format!("path has {} nodes, expected at least {}", path.nodes.len(), min_nodes);
            telemetry.on_skip(sequence, order.as_slice(), reason.as_str());
            None
        }
        Some(path) if path.weight >= DISTANCE_UPPER_BOUND => {
            let reason = format!("distance {} km exceeds upper bound", path.weight);
            telemetry.on_skip(sequence, order.as_slice(), reason.as_str());
            None
        }
        Some(path) => {
            telemetry.on_permutation(sequence, order.as_slice(), path.weight);

            let cities = path.nodes.iter().filter_map(|&node| layered.city(node)).cloned().collect();

            Some(Candidate { sequence, distance: path.weight, cities })
        }
    };

    Reduction { skipped: usize::from(best.is_none()), evaluated: 1, best }
}

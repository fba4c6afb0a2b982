//! A module which provides the logic to collect metrics about search execution and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/solver/telemetry_test.rs"]
mod telemetry_test;

use crate::algorithms::graph::Weight;
use crate::models::{City, ContinentGroup};
use crate::utils::Timer;
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the optimizer.
/// It can be called from multiple threads.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Encapsulates different measurements regarding search evaluation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TelemetryMetrics {
    /// Search duration in milliseconds.
    pub duration: usize,
    /// Total amount of evaluated continent orders.
    pub permutations: usize,
    /// Amount of orders which did not produce a qualifying path.
    pub skipped: usize,
    /// Amount of nodes in each layered graph.
    pub graph_size: usize,
}

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies whether result of every continent order is logged.
        log_permutations: bool,
    },
    /// Only metrics collection.
    OnlyMetrics,
    /// Both logging and metrics collection.
    All {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies whether result of every continent order is logged.
        log_permutations: bool,
    },
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    mode: TelemetryMode,
    time: Timer,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { mode, time: Timer::start() }
    }

    /// Starts telemetry reporting.
    pub fn start(&mut self) {
        self.time = Timer::start();
    }

    /// Reports continents which have to be visited.
    pub fn on_partition(&self, origin: &City, groups: &[ContinentGroup], permutations: usize) {
        if !self.is_logging() {
            return;
        }

        let continents = groups
            .iter()
            .map(|group| format!("{}({})", group.id, group.cities.len()))
            .collect::<Vec<_>>()
            .join(", ");

        self.log(
            format!(
                "origin '{}' on '{}', continents to visit: [{}], {} orders to evaluate",
                origin.id, origin.continent, continents, permutations
            )
            .as_str(),
        );
    }

    /// Reports a qualifying path found for a continent order.
    pub fn on_permutation(&self, sequence: usize, order: &[&ContinentGroup], distance: Weight) {
        let log_permutations = match &self.mode {
            TelemetryMode::OnlyLogging { log_permutations, .. } | TelemetryMode::All { log_permutations, .. } => {
                *log_permutations
            }
            _ => false,
        };

        if log_permutations {
            self.log(
                format!(
                    "[{}ms] order #{} {}: {} km",
                    self.time.elapsed_millis(),
                    sequence + 1,
                    format_order(order),
                    distance
                )
                .as_str(),
            );
        }
    }

    /// Reports a continent order which is skipped.
    pub fn on_skip(&self, sequence: usize, order: &[&ContinentGroup], reason: &str) {
        self.log(format!("order #{} {} is skipped: {}", sequence + 1, format_order(order), reason).as_str());
    }

    /// Reports search result and returns metrics if they are collected.
    pub fn on_result(
        &self,
        distance: Option<Weight>,
        permutations: usize,
        skipped: usize,
        graph_size: usize,
    ) -> Option<TelemetryMetrics> {
        let duration = self.time.elapsed_millis() as usize;

        let outcome = match distance {
            Some(distance) => format!("best distance is {distance} km"),
            None => "no qualifying path".to_string(),
        };
        self.log(format!("[{duration}ms] {outcome}, {skipped} of {permutations} orders skipped").as_str());

        match &self.mode {
            TelemetryMode::OnlyMetrics | TelemetryMode::All { .. } => {
                Some(TelemetryMetrics { duration, permutations, skipped, graph_size })
            }
            _ => None,
        }
    }

    /// Writes message into log if logging is enabled.
    pub fn log(&self, message: &str) {
        match &self.mode {
            TelemetryMode::OnlyLogging { logger, .. } | TelemetryMode::All { logger, .. } => (logger)(message),
            _ => {}
        }
    }

    fn is_logging(&self) -> bool {
        matches!(&self.mode, TelemetryMode::OnlyLogging { .. } | TelemetryMode::All { .. })
    }
}

fn format_order(order: &[&ContinentGroup]) -> String {
    order.iter().map(|group| group.id.as_str()).collect::<Vec<_>>().join("->")
}

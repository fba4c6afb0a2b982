//! This module reimports commonly used types.

pub use crate::format::{Dataset, DatasetReader, FormatError, RouteSolution};
pub use crate::models::{City, ContinentGroup, ContinentMap, Location};
pub use crate::solver::{BestPath, Optimizer, OptimizerBuilder, SolverError, compute_best_path};
pub use crate::solver::{InfoLogger, Telemetry, TelemetryMetrics, TelemetryMode};
pub use crate::utils::{Float, GenericError, GenericResult};

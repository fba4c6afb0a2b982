#[cfg(test)]
#[path = "../../tests/unit/format/solution_test.rs"]
mod solution_test;

use crate::format::FormatError;
use crate::solver::{BestPath, TelemetryMetrics};
use serde::Serialize;
use std::io::{BufWriter, Write};

/// A city as it is written in the result.
#[derive(Clone, Serialize, Debug)]
pub struct ApiStop {
    /// City id.
    pub id: String,
    /// City name.
    pub name: String,
    /// Continent id.
    pub continent: String,
    /// Country name.
    pub country: String,
}

/// Search metrics as they are written in the result.
#[derive(Clone, Serialize, Debug)]
pub struct ApiMetrics {
    /// Search duration in milliseconds.
    pub duration: usize,
    /// Amount of evaluated continent orders.
    pub permutations: usize,
    /// Amount of skipped continent orders.
    pub skipped: usize,
}

/// A result in json format.
#[derive(Clone, Serialize, Debug)]
pub struct ApiSolution {
    /// Cities in visit order, the origin is the first and the last one.
    pub path: Vec<ApiStop>,
    /// Total distance in kilometers.
    pub distance: u64,
    /// Search metrics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ApiMetrics>,
}

/// Writes the best path in various formats.
pub trait RouteSolution {
    /// Writes a human readable line of cities followed by total distance.
    fn write_text<W: Write>(&self, writer: BufWriter<W>) -> Result<(), FormatError>;

    /// Writes solution in json format.
    fn write_json<W: Write>(&self, metrics: Option<&TelemetryMetrics>, writer: BufWriter<W>) -> Result<(), FormatError>;
}

impl RouteSolution for BestPath {
    fn write_text<W: Write>(&self, mut writer: BufWriter<W>) -> Result<(), FormatError> {
        let path = self
            .cities
            .iter()
            .map(|city| format!("{}({})", city.name, city.continent))
            .collect::<Vec<_>>()
            .join(" -> ");

        writeln!(writer, "{path}")
            .and_then(|_| writeln!(writer, "Distance Travelled: {} KMS", self.distance))
            .and_then(|_| writer.flush())
            .map_err(create_write_error)
    }

    fn write_json<W: Write>(
        &self,
        metrics: Option<&TelemetryMetrics>,
        mut writer: BufWriter<W>,
    ) -> Result<(), FormatError> {
        let solution = create_api_solution(self, metrics);

        serde_json::to_writer_pretty(&mut writer, &solution)
            .map_err(|err| create_write_error(err.into()))
            .and_then(|_| writer.flush().map_err(create_write_error))
    }
}

/// Maps the best path into its json representation.
pub fn create_api_solution(best: &BestPath, metrics: Option<&TelemetryMetrics>) -> ApiSolution {
    ApiSolution {
        path: best
            .cities
            .iter()
            .map(|city| ApiStop {
                id: city.id.clone(),
                name: city.name.clone(),
                continent: city.continent.clone(),
                country: city.country.clone(),
            })
            .collect(),
        distance: best.distance,
        metrics: metrics.map(|metrics| ApiMetrics {
            duration: metrics.duration,
            permutations: metrics.permutations,
            skipped: metrics.skipped,
        }),
    }
}

fn create_write_error(err: std::io::Error) -> FormatError {
    FormatError::new_with_details(
        "E0002".to_string(),
        "cannot write result".to_string(),
        "check that output is writable".to_string(),
        err.to_string(),
    )
}

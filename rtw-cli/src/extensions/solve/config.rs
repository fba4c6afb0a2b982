//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use rtw_core::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// An algorithm configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct Config {
    /// Specifies parallelism configuration.
    pub parallelism: Option<ParallelismConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A parallelism configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct ParallelismConfig {
    /// Amount of threads used to evaluate continent orders. Default is amount of cpus.
    pub threads: usize,
}

/// A telemetry configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct TelemetryConfig {
    /// Logging configuration.
    pub logging: Option<LoggingConfig>,
    /// Metrics configuration.
    pub metrics: Option<MetricsConfig>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
    /// Specifies whether result of each continent order is logged. Default is false.
    pub log_permutations: Option<bool>,
}

/// A metrics configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct MetricsConfig {
    /// Specifies whether metrics collection is enabled. Default is false.
    pub enabled: bool,
}

impl Config {
    /// Enables logging keeping other logging settings.
    pub fn with_logging(mut self) -> Self {
        let mut telemetry = self.telemetry.take().unwrap_or_default();
        let log_permutations = telemetry.logging.as_ref().and_then(|logging| logging.log_permutations);
        telemetry.logging = Some(LoggingConfig { enabled: true, log_permutations });
        self.telemetry = Some(telemetry);

        self
    }

    /// Overrides amount of threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.parallelism = Some(ParallelismConfig { threads });
        self
    }
}

fn configure_from_telemetry(builder: OptimizerBuilder, telemetry_config: &Option<TelemetryConfig>) -> OptimizerBuilder {
    let create_logger = || -> InfoLogger { Arc::new(|msg: &str| println!("{msg}")) };

    let logging = telemetry_config
        .as_ref()
        .and_then(|telemetry| telemetry.logging.as_ref())
        .filter(|logging| logging.enabled)
        .map(|logging| logging.log_permutations.unwrap_or(false));
    let metrics = telemetry_config
        .as_ref()
        .and_then(|telemetry| telemetry.metrics.as_ref())
        .is_some_and(|metrics| metrics.enabled);

    let telemetry_mode = match (logging, metrics) {
        (Some(log_permutations), true) => TelemetryMode::All { logger: create_logger(), log_permutations },
        (Some(log_permutations), false) => TelemetryMode::OnlyLogging { logger: create_logger(), log_permutations },
        (None, true) => TelemetryMode::OnlyMetrics,
        (None, false) => TelemetryMode::None,
    };

    builder.with_telemetry(Telemetry::new(telemetry_mode))
}

fn configure_from_parallelism(
    builder: OptimizerBuilder,
    parallelism_config: &Option<ParallelismConfig>,
) -> GenericResult<OptimizerBuilder> {
    match parallelism_config {
        Some(ParallelismConfig { threads: 0 }) => Err("amount of threads should be greater than zero".into()),
        Some(ParallelismConfig { threads }) => Ok(builder.with_threads(*threads)),
        None => Ok(builder),
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| GenericError::from(format!("cannot deserialize config: '{err}'")))
}

/// Creates an optimizer builder from config file.
pub fn create_builder_from_config_file<R: Read>(reader: BufReader<R>) -> GenericResult<OptimizerBuilder> {
    read_config(reader).and_then(|config| create_builder_from_config(&config))
}

/// Creates an optimizer builder from config.
pub fn create_builder_from_config(config: &Config) -> GenericResult<OptimizerBuilder> {
    let builder = configure_from_telemetry(OptimizerBuilder::default(), &config.telemetry);

    configure_from_parallelism(builder, &config.parallelism)
}

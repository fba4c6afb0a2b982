//! Contains logic to configure the solver.

pub mod config;

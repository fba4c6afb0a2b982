//! Core crate contains building blocks to find the shortest ***round-the-world*** route: the
//! traveler leaves an origin city, visits exactly one city on every other continent and returns
//! home, minimizing the total great-circle distance.
//!
//! The search is exact: every order of continents is turned into a layered graph which is then
//! solved with a shortest path algorithm. See [`solver::Optimizer`] for the entry point.
//!

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod algorithms;
pub mod format;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;

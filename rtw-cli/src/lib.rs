//! A crate which exposes helpers to run round-the-world route solver from the command line.
//!

#![warn(missing_docs)]

pub mod extensions;

//! A collection of models which describe cities and continents.

mod city;
pub use self::city::*;

mod continent;
pub use self::continent::*;

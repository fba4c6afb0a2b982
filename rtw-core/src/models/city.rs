#[cfg(test)]
#[path = "../../tests/unit/models/city_test.rs"]
mod city_test;

use crate::algorithms::geo::haversine_distance;
use crate::utils::Float;

/// Represents a geographic location in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Location {
    /// Latitude.
    pub lat: Float,
    /// Longitude.
    pub lon: Float,
}

impl Location {
    /// Creates a new instance of `Location`.
    pub fn new(lat: Float, lon: Float) -> Self {
        Self { lat, lon }
    }

    /// Returns great-circle distance to `other` location in kilometers.
    pub fn distance_to(&self, other: &Location) -> Float {
        haversine_distance((self.lat, self.lon), (other.lat, other.lon))
    }
}

/// Represents a city. Immutable once loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct City {
    /// Unique city identifier.
    pub id: String,
    /// A display name.
    pub name: String,
    /// Geographic coordinates.
    pub location: Location,
    /// Continent identifier, empty when unknown.
    pub continent: String,
    /// Country name.
    pub country: String,
}

impl City {
    /// Returns great-circle distance to `other` city in kilometers.
    pub fn distance_to(&self, other: &City) -> Float {
        self.location.distance_to(&other.location)
    }
}

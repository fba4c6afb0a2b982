#[cfg(test)]
#[path = "../../tests/unit/solver/partition_test.rs"]
mod partition_test;

use crate::models::{City, ContinentGroup, ContinentMap};
use crate::solver::SolverError;

/// Returns all continent groups except the origin's own continent, in the key order of
/// `continents`. Fails when origin's continent is unknown.
pub fn get_continents_excluding_origin(
    origin: &City,
    continents: &ContinentMap,
) -> Result<Vec<ContinentGroup>, SolverError> {
    if origin.continent.trim().is_empty() {
        return Err(SolverError::MissingContinent { city_id: origin.id.clone() });
    }

    Ok(continents
        .iter()
        .filter(|(continent, cities)| **continent != origin.continent && !cities.is_empty())
        .map(|(continent, cities)| ContinentGroup::new(continent.clone(), cities.clone()))
        .collect())
}

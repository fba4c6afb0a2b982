#[cfg(test)]
#[path = "../../tests/unit/models/continent_test.rs"]
mod continent_test;

use crate::models::City;
use std::collections::BTreeMap;

/// Maps continent identifier to its cities. Keys are iterated in alphabetical order.
pub type ContinentMap = BTreeMap<String, Vec<City>>;

/// A continent identifier paired with its member cities.
#[derive(Clone, Debug, PartialEq)]
pub struct ContinentGroup {
    /// Continent identifier.
    pub id: String,
    /// Cities on the continent.
    pub cities: Vec<City>,
}

impl ContinentGroup {
    /// Creates a new instance of `ContinentGroup`.
    pub fn new(id: String, cities: Vec<City>) -> Self {
        Self { id, cities }
    }
}

/// Groups cities by their continent. Cities inside of each continent are ordered by id, so the
/// result does not depend on the iteration order of `cities`.
pub fn group_by_continent<'a, I>(cities: I) -> ContinentMap
where
    I: IntoIterator<Item = &'a City>,
{
    let mut continents = cities.into_iter().fold(ContinentMap::new(), |mut acc, city| {
        acc.entry(city.continent.clone()).or_default().push(city.clone());
        acc
    });

    continents.values_mut().for_each(|cities| cities.sort_by(|a, b| a.id.cmp(&b.id)));

    continents
}

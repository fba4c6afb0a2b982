#[cfg(test)]
#[path = "../../tests/unit/format/dataset_test.rs"]
mod dataset_test;

use crate::format::FormatError;
use crate::models::{City, ContinentMap, Location, group_by_continent};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::{BufReader, Read};

/// A city location as it is stored in dataset.
#[derive(Clone, Deserialize, Debug)]
pub struct ApiLocation {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lon: f64,
}

/// A city record as it is stored in dataset.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ApiCity {
    /// City id, a dataset key is used when missing.
    #[serde(default)]
    pub id: String,
    /// City name.
    pub name: String,
    /// City location.
    pub location: ApiLocation,
    /// Continent id.
    #[serde(rename = "contId", default)]
    pub continent: String,
    /// Country name.
    #[serde(default)]
    pub country_name: String,
}

/// A collection of cities addressed by their code.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    cities: FxHashMap<String, City>,
}

impl Dataset {
    /// Creates a dataset from cities using city id as a code.
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities: cities.into_iter().map(|city| (city.id.clone(), city)).collect() }
    }

    /// Returns city by its code.
    pub fn get_city(&self, code: &str) -> Result<&City, FormatError> {
        self.cities.get(code).ok_or_else(|| {
            FormatError::new(
                "E0001".to_string(),
                format!("unknown origin city: '{code}'"),
                "check that city code is present in dataset".to_string(),
            )
        })
    }

    /// Returns all cities in no particular order.
    pub fn cities(&self) -> impl Iterator<Item = &City> + '_ {
        self.cities.values()
    }

    /// Returns amount of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns true if there are no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Groups cities by their continent.
    pub fn get_continents(&self) -> ContinentMap {
        group_by_continent(self.cities())
    }
}

/// Reads dataset from various sources.
pub trait DatasetReader {
    /// Reads dataset defined as json object of city records keyed by city code.
    fn read_dataset(self) -> Result<Dataset, FormatError>;
}

impl<R: Read> DatasetReader for BufReader<R> {
    fn read_dataset(self) -> Result<Dataset, FormatError> {
        deserialize_dataset(self).map(map_to_dataset)
    }
}

impl DatasetReader for String {
    fn read_dataset(self) -> Result<Dataset, FormatError> {
        BufReader::new(self.as_bytes()).read_dataset()
    }
}

/// Deserializes dataset in json format from [`BufReader`].
pub fn deserialize_dataset<R: Read>(reader: BufReader<R>) -> Result<HashMap<String, ApiCity>, FormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        FormatError::new_with_details(
            "E0000".to_string(),
            "cannot deserialize dataset".to_string(),
            "check input json".to_string(),
            err.to_string(),
        )
    })
}

fn map_to_dataset(records: HashMap<String, ApiCity>) -> Dataset {
    let cities = records
        .into_iter()
        .map(|(code, record)| {
            let city = City {
                id: if record.id.is_empty() { code.clone() } else { record.id },
                name: record.name,
                location: Location::new(record.location.lat, record.location.lon),
                continent: record.continent,
                country: record.country_name,
            };

            (code, city)
        })
        .collect();

    Dataset { cities }
}

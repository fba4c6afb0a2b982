use crate::models::{City, ContinentMap, Location, group_by_continent};
use crate::solver::InfoLogger;
use std::sync::{Arc, Mutex};

pub fn test_city(id: &str, lat: f64, lon: f64, continent: &str) -> City {
    City {
        id: id.to_string(),
        name: format!("City {id}"),
        location: Location::new(lat, lon),
        continent: continent.to_string(),
        country: format!("Country {id}"),
    }
}

pub fn test_logger() -> InfoLogger {
    Arc::new(|_| ())
}

/// Returns a logger which keeps all messages and a storage of these messages.
pub fn create_collecting_logger() -> (InfoLogger, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let storage = messages.clone();

    (Arc::new(move |msg: &str| storage.lock().unwrap().push(msg.to_string())), messages)
}

/// Creates origin on equator and one city per continent A, B, C placed eastwards every 10 degrees.
pub fn create_equator_scenario() -> (City, ContinentMap) {
    let origin = test_city("home", 0., 0., "D");
    let cities = vec![
        origin.clone(),
        test_city("a", 0., 10., "A"),
        test_city("b", 0., 20., "B"),
        test_city("c", 0., 30., "C"),
    ];

    (origin, group_by_continent(cities.iter()))
}

/// Creates a world with six continents and a few cities on each of them.
pub fn create_world_cities() -> Vec<City> {
    vec![
        test_city("lon", 51.5074, -0.1278, "EU"),
        test_city("par", 48.8566, 2.3522, "EU"),
        test_city("ber", 52.52, 13.405, "EU"),
        test_city("nyc", 40.7128, -74.006, "NA"),
        test_city("lax", 34.0522, -118.2437, "NA"),
        test_city("mex", 19.4326, -99.1332, "NA"),
        test_city("rio", -22.9068, -43.1729, "SA"),
        test_city("bue", -34.6037, -58.3816, "SA"),
        test_city("cai", 30.0444, 31.2357, "AF"),
        test_city("nbo", -1.2921, 36.8219, "AF"),
        test_city("cpt", -33.9249, 18.4241, "AF"),
        test_city("tyo", 35.6762, 139.6503, "AS"),
        test_city("del", 28.7041, 77.1025, "AS"),
        test_city("sin", 1.3521, 103.8198, "AS"),
        test_city("syd", -33.8688, 151.2093, "OC"),
        test_city("akl", -36.8485, 174.7633, "OC"),
    ]
}

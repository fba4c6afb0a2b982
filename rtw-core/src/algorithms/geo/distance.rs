#[cfg(test)]
#[path = "../../../tests/unit/algorithms/geo/distance_test.rs"]
mod distance_test;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.;

/// Gets distance in kilometers between two points, specified as (latitude, longitude) pair in
/// degrees, using haversine formula.
pub fn haversine_distance(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (from_lat, from_lon) = from;
    let (to_lat, to_lon) = to;

    let d_lat = degree_rad(to_lat - from_lat);
    let d_lon = degree_rad(to_lon - from_lon);

    let lat1 = degree_rad(from_lat);
    let lat2 = degree_rad(to_lat);

    let a = (d_lat / 2.).sin() * (d_lat / 2.).sin() + (d_lon / 2.).sin() * (d_lon / 2.).sin() * lat1.cos() * lat2.cos();
    // rounding errors can push `a` slightly outside of [0, 1] for antipodal points
    let a = a.clamp(0., 1.);
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Converts degrees to radians.
#[inline(always)]
fn degree_rad(degrees: f64) -> f64 {
    std::f64::consts::PI * degrees / 180.
}

use super::*;

parameterized_test! {can_calculate_haversine_distance, (from, to, expected), {
    assert_eq!(haversine_distance(from, to).round(), expected);
}}

can_calculate_haversine_distance! {
    case_01_same_point: ((10., 20.), (10., 20.), 0.),
    case_02_equator_ten_degrees: ((0., 0.), (0., 10.), 1112.),
    case_03_london_paris: ((51.5074, -0.1278), (48.8566, 2.3522), 344.),
    case_04_berlin_short: ((52.52599, 13.45413), (52.5165, 13.3808), 5.),
    case_05_antipodes: ((0., 0.), (0., 180.), 20015.),
    case_06_poles: ((90., 0.), (-90., 0.), 20015.),
}

#[test]
fn can_calculate_non_negative_symmetric_distance() {
    let points = [(0., 0.), (45., 45.), (-45., 170.), (89.9, -179.9), (-12.5, 33.3)];

    points.iter().for_each(|&from| {
        points.iter().for_each(|&to| {
            let forward = haversine_distance(from, to);
            let backward = haversine_distance(to, from);

            assert!(forward >= 0.);
            assert!((forward - backward).abs() < 1E-9);
            assert_eq!(forward == 0., from == to);
        });
    });
}

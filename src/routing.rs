use crate::entities::Location;

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance in meters between two saved locations, via the
/// haversine formula.
///
/// Every "nearest" comparison made during tour construction goes through
/// this function, so route output depends only on the input order and the
/// assigned ids.
pub fn haversine_distance_m(a: &Location, b: &Location) -> f64 {
    let d_lat = degree_rad(b.latitude - a.latitude);
    let d_lng = degree_rad(b.longitude - a.longitude);

    let lat1 = degree_rad(a.latitude);
    let lat2 = degree_rad(b.latitude);

    let h = (d_lat / 2.).sin() * (d_lat / 2.).sin()
        + (d_lng / 2.).sin() * (d_lng / 2.).sin() * lat1.cos() * lat2.cos();
    let c = 2. * h.sqrt().atan2((1. - h).sqrt());

    EARTH_RADIUS_M * c
}

#[inline(always)]
fn degree_rad(degrees: f64) -> f64 {
    std::f64::consts::PI * degrees / 180.
}

/// Length in meters of the closed tour through `stops`: the consecutive
/// legs plus the leg from the last stop back to the first. Zero for fewer
/// than two stops.
pub fn tour_length_m(stops: &[Location]) -> f64 {
    if stops.len() < 2 {
        return 0.;
    }

    let legs: f64 = stops
        .windows(2)
        .map(|leg| haversine_distance_m(&leg[0], &leg[1]))
        .sum();

    legs + haversine_distance_m(&stops[stops.len() - 1], &stops[0])
}

/// Builds a closed visiting order over `points` with the nearest-neighbor
/// heuristic: start from the first point in input order, then repeatedly
/// extend to the nearest unvisited point. Equal distances keep the
/// candidate with the lowest id.
///
/// The result is a permutation of the input. Inputs with fewer than three
/// points are returned as given, any order closes to the same tour cost.
pub fn nearest_neighbor_tour(points: &[Location]) -> Vec<Location> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut visited = vec![false; points.len()];
    let mut order = Vec::with_capacity(points.len());

    let mut current = 0;
    visited[0] = true;
    order.push(0);

    for _ in 1..points.len() {
        let mut best: Option<usize> = None;
        let mut best_dist = f64::INFINITY;

        for (i, point) in points.iter().enumerate() {
            if visited[i] {
                continue;
            }

            let d = haversine_distance_m(&points[current], point);

            let better = match best {
                None => true,
                Some(j) => d < best_dist || (d == best_dist && point.id < points[j].id),
            };

            if better {
                best = Some(i);
                best_dist = d;
            }
        }

        if let Some(next) = best {
            visited[next] = true;
            order.push(next);
            current = next;
        }
    }

    order.into_iter().map(|i| points[i].clone()).collect()
}

#[cfg(test)]
fn point(id: i64, latitude: f64, longitude: f64) -> Location {
    Location::new(id, format!("p{}", id), latitude, longitude).unwrap()
}

#[test]
fn empty_and_trivial_inputs() {
    assert!(nearest_neighbor_tour(&[]).is_empty());

    let single = nearest_neighbor_tour(&[point(1, 10.0, 20.0)]);
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].id, 1);

    let pair = nearest_neighbor_tour(&[point(2, 0.0, 0.0), point(1, 1.0, 1.0)]);
    assert_eq!(
        pair.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![2, 1],
        "two points keep input order"
    );
}

#[test]
fn tour_is_a_permutation_of_the_input() {
    let points = vec![
        point(1, 51.5055, -0.0754),
        point(2, 51.5033, -0.1196),
        point(3, 51.5081, -0.0759),
        point(4, 51.4995, -0.1248),
        point(5, 51.5194, -0.1270),
    ];

    let tour = nearest_neighbor_tour(&points);

    assert_eq!(tour.len(), points.len());

    let mut ids: Vec<i64> = tour.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn tour_is_deterministic() {
    let points = vec![
        point(1, 48.8584, 2.2945),
        point(2, 48.8606, 2.3376),
        point(3, 48.8530, 2.3499),
        point(4, 48.8867, 2.3431),
    ];

    let first: Vec<i64> = nearest_neighbor_tour(&points).iter().map(|p| p.id).collect();
    let second: Vec<i64> = nearest_neighbor_tour(&points).iter().map(|p| p.id).collect();

    assert_eq!(first, second);
}

#[test]
fn duplicate_coordinates_are_tolerated() {
    let points = vec![
        point(1, 10.0, 10.0),
        point(2, 10.0, 10.0),
        point(3, 11.0, 10.0),
    ];

    let tour = nearest_neighbor_tour(&points);

    let mut ids: Vec<i64> = tour.iter().map(|p| p.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3]);

    // the duplicate is at distance zero, so it is visited right after its twin
    assert_eq!(tour[0].id, 1);
    assert_eq!(tour[1].id, 2);
}

// Unit square on the equator, input order A,B,C,D with ascending ids. From
// A both B and D are one degree away; the lowest id (B) must win the tie,
// after which the greedy walk follows the perimeter. The closed tour then
// equals four one-degree arcs, the optimal tour for this square.
#[test]
fn unit_square_tie_breaks_on_lowest_id() {
    let a = point(1, 0.0, 0.0);
    let b = point(2, 0.0, 1.0);
    let c = point(3, 1.0, 1.0);
    let d = point(4, 1.0, 0.0);

    let one_degree_arc = haversine_distance_m(&a, &b);
    assert_eq!(
        one_degree_arc,
        haversine_distance_m(&a, &d),
        "B and D are exactly equidistant from A"
    );

    let tour = nearest_neighbor_tour(&[a.clone(), b, c, d]);

    let ids: Vec<i64> = tour.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    // the square's perimeter; the C-D edge runs at latitude 1 degree and is
    // a hair shorter than an equatorial arc, hence the relative tolerance
    let total = tour_length_m(&tour);
    assert!((total / (4. * one_degree_arc) - 1.).abs() < 1e-3);
}

#[test]
fn tour_length_of_trivial_tours_is_zero() {
    assert_eq!(tour_length_m(&[]), 0.);
    assert_eq!(tour_length_m(&[point(1, 5.0, 5.0)]), 0.);
}

#[test]
fn pair_tour_length_counts_both_directions() {
    let a = point(1, 0.0, 0.0);
    let b = point(2, 0.0, 1.0);

    let one_way = haversine_distance_m(&a, &b);
    let total = tour_length_m(&[a, b]);

    assert!((total - 2. * one_way).abs() < 1e-6);
}

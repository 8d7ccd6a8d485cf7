#[cfg(test)]
#[path = "proximity_test.rs"]
mod proximity_test;

use crate::marker::Located;
use crate::viewport::Point;

/// A marker within the search radius and its distance from the query point.
#[derive(Debug, Clone, Copy)]
pub struct Nearby<'a, T> {
    pub marker: &'a T,
    pub distance: f64,
}

/// Markers within `radius` of `point`, nearest first.
///
/// The radius is inclusive. Equal distances keep their input order.
#[must_use]
pub fn find_near<'a, T: Located>(point: Point, markers: impl IntoIterator<Item = &'a T>, radius: f64) -> Vec<Nearby<'a, T>> {
    let mut found: Vec<Nearby<'a, T>> = markers
        .into_iter()
        .map(|marker| Nearby { marker, distance: point.distance_to(marker.location()) })
        .filter(|n| n.distance <= radius)
        .collect();
    found.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    found
}

use smallvec::SmallVec;

use crate::core::{Vector2, Vector3};

/// Vertex list of one emitted polygon; quads stay inline.
pub type PolygonVertices = SmallVec<[Vector3; 4]>;

/// Axis-aligned quad in counter-clockwise order (y-up):
/// bottom-left, bottom-right, top-right, top-left.
#[must_use]
pub fn quad(left: f64, bottom: f64, right: f64, top: f64) -> PolygonVertices {
    let (left, right) = if left <= right {
        (left, right)
    } else {
        (right, left)
    };
    let (bottom, top) = if bottom <= top {
        (bottom, top)
    } else {
        (top, bottom)
    };
    SmallVec::from_buf([
        Vector3::new(left, bottom, 0.0),
        Vector3::new(right, bottom, 0.0),
        Vector3::new(right, top, 0.0),
        Vector3::new(left, top, 0.0),
    ])
}

/// Shoelace area; positive for counter-clockwise rings in a y-up frame.
#[must_use]
pub fn signed_area(vertices: &[Vector3]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for (index, current) in vertices.iter().enumerate() {
        let next = vertices[(index + 1) % vertices.len()];
        twice_area += current.x * next.y - next.x * current.y;
    }
    twice_area * 0.5
}

/// Reverses clockwise rings in place. Zero-area rings are left as given.
pub fn ensure_counter_clockwise(vertices: &mut [Vector3]) {
    if signed_area(vertices) < 0.0 {
        vertices.reverse();
    }
}

#[must_use]
pub fn ring_from_points(points: &[Vector2]) -> PolygonVertices {
    points.iter().map(|point| point.extend(0.0)).collect()
}

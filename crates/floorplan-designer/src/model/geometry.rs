//! Measurement helpers over world-space vertex lists.

use floorplan_core::{GeometryError, PlanePoint, WorldPoint};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in world feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub width: f64,
    pub height: f64,
    pub center: WorldPoint,
}

impl Bounds {
    /// Bounding box of a non-empty point list.
    pub fn from_points(points: &[WorldPoint]) -> Result<Self, GeometryError> {
        let first = points.first().ok_or(GeometryError::EmptyVertices)?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Ok(Self {
            min_x,
            min_y,
            max_x,
            max_y,
            width: max_x - min_x,
            height: max_y - min_y,
            center: WorldPoint::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0),
        })
    }

    /// Smallest box covering both `self` and `other`.
    pub fn union(&self, other: &Bounds) -> Bounds {
        let min_x = self.min_x.min(other.min_x);
        let min_y = self.min_y.min(other.min_y);
        let max_x = self.max_x.max(other.max_x);
        let max_y = self.max_y.max(other.max_y);
        Bounds {
            min_x,
            min_y,
            max_x,
            max_y,
            width: max_x - min_x,
            height: max_y - min_y,
            center: WorldPoint::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0),
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn contains(&self, p: WorldPoint) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

/// Lengths of every edge of a closed loop, including last → first.
///
/// Used for rectangles and polygons. Open paths should use [`path_lengths`].
pub fn edge_lengths(vertices: &[WorldPoint]) -> Vec<f64> {
    let n = vertices.len();
    (0..n)
        .map(|i| vertices[i].distance_to(&vertices[(i + 1) % n]))
        .collect()
}

/// Lengths of the segments of an open path; no closing edge.
pub fn path_lengths(vertices: &[WorldPoint]) -> Vec<f64> {
    vertices
        .windows(2)
        .map(|pair| pair[0].distance_to(&pair[1]))
        .collect()
}

pub fn edge_midpoint(p1: WorldPoint, p2: WorldPoint) -> WorldPoint {
    p1.midpoint(&p2)
}

/// Returns a translated copy of `vertices`; the input is left untouched.
pub fn translate_vertices(vertices: &[WorldPoint], delta: WorldPoint) -> Vec<WorldPoint> {
    vertices.iter().map(|v| *v + delta).collect()
}

/// Unsigned polygon area (shoelace formula).
pub fn polygon_area(vertices: &[WorldPoint]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    twice.abs() / 2.0
}

/// Closest point to `p` on the segment `a`–`b`.
pub fn project_onto_segment(p: WorldPoint, a: WorldPoint, b: WorldPoint) -> WorldPoint {
    let ab = b - a;
    let len_sq = ab.x * ab.x + ab.y * ab.y;
    if len_sq == 0.0 {
        return a;
    }
    let t = (((p.x - a.x) * ab.x + (p.y - a.y) * ab.y) / len_sq).clamp(0.0, 1.0);
    WorldPoint::new(a.x + ab.x * t, a.y + ab.y * t)
}

pub fn distance_to_segment(p: WorldPoint, a: WorldPoint, b: WorldPoint) -> f64 {
    p.distance_to(&project_onto_segment(p, a, b))
}

/// Even-odd point-in-polygon test.
pub fn point_in_polygon(p: WorldPoint, vertices: &[WorldPoint]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (vi, vj) = (vertices[i], vertices[j]);
        if (vi.y > p.y) != (vj.y > p.y) && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

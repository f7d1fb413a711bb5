//! Convex hull (Andrew's monotone chain)
//!
//! Collinear or coincident inputs yield `HullOutcome::Degenerate` rather
//! than a zero-area polygon, so callers can tell the two apart.

use serde::Serialize;

use crate::models::Position;

/// Result of hull construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HullOutcome {
    /// Counter-clockwise vertex ring (not closed) and its area in m²
    Polygon { vertices: Vec<Position>, area: f32 },
    /// Fewer than 3 distinct points, or all points collinear
    Degenerate,
}

impl HullOutcome {
    /// Area, with degenerate hulls counted as zero.
    pub fn area(&self) -> f32 {
        match self {
            HullOutcome::Polygon { area, .. } => *area,
            HullOutcome::Degenerate => 0.0,
        }
    }

    pub fn vertices(&self) -> &[Position] {
        match self {
            HullOutcome::Polygon { vertices, .. } => vertices,
            HullOutcome::Degenerate => &[],
        }
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, HullOutcome::Degenerate)
    }
}

fn cross(o: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - o.0) * (b.1 - o.1) - (a.1 - o.1) * (b.0 - o.0)
}

/// Convex hull of a point set.
pub fn convex_hull(points: &[Position]) -> HullOutcome {
    let mut pts: Vec<(f64, f64)> = points
        .iter()
        .filter(|p| p.is_finite())
        .map(|p| (p.x as f64, p.y as f64))
        .collect();
    pts.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
    pts.dedup();

    if pts.len() < 3 {
        return HullOutcome::Degenerate;
    }

    let mut lower: Vec<(f64, f64)> = Vec::with_capacity(pts.len());
    for &p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<(f64, f64)> = Vec::with_capacity(pts.len());
    for &p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }

    // endpoints are shared between the chains
    lower.pop();
    upper.pop();
    lower.extend(upper);

    if lower.len() < 3 {
        return HullOutcome::Degenerate;
    }

    let area = shoelace(&lower);
    if area <= 0.0 {
        return HullOutcome::Degenerate;
    }

    HullOutcome::Polygon {
        vertices: lower
            .into_iter()
            .map(|(x, y)| Position::new(x as f32, y as f32))
            .collect(),
        area: area as f32,
    }
}

fn shoelace(ring: &[(f64, f64)]) -> f64 {
    let n = ring.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let (x0, y0) = ring[i];
            let (x1, y1) = ring[(i + 1) % n];
            x0 * y1 - x1 * y0
        })
        .sum();
    twice.abs() * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f32, f32)]) -> Vec<Position> {
        raw.iter().map(|&p| Position::from(p)).collect()
    }

    #[test]
    fn test_square_with_interior_point() {
        let hull = convex_hull(&pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (5.0, 5.0)]));
        assert!((hull.area() - 100.0).abs() < 1e-4);
        assert_eq!(hull.vertices().len(), 4);
        assert!(!hull.vertices().contains(&Position::new(5.0, 5.0)));
    }

    #[test]
    fn test_triangle() {
        let hull = convex_hull(&pts(&[(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)]));
        assert!((hull.area() - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_collinear_is_degenerate() {
        let hull = convex_hull(&pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (5.0, 5.0)]));
        assert!(hull.is_degenerate());
        assert_eq!(hull.area(), 0.0);
    }

    #[test]
    fn test_duplicates_are_degenerate() {
        let hull = convex_hull(&pts(&[(3.0, 3.0), (3.0, 3.0), (3.0, 3.0)]));
        assert_eq!(hull, HullOutcome::Degenerate);
    }

    #[test]
    fn test_ring_is_counter_clockwise() {
        let hull = convex_hull(&pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]));
        let v = hull.vertices();
        let signed: f32 = (0..v.len())
            .map(|i| {
                let a = v[i];
                let b = v[(i + 1) % v.len()];
                a.x * b.y - b.x * a.y
            })
            .sum();
        assert!(signed > 0.0);
    }
}

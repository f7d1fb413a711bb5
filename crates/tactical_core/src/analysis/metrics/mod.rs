//! # Metrics Module
//!
//! Geometric metrics of a team's shape.
//!
//! - `hull` - Convex hull with explicit degenerate outcome
//! - `shape` - Team width, depth, centroid, goalkeeper inference
//! - `compactness` - Compactness Index and defensive block

pub mod compactness;
pub mod hull;
pub mod shape;

pub use compactness::*;
pub use hull::*;
pub use shape::*;

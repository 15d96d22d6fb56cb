//! Polygon descriptors and the random generator that produces them.
//!
//! A descriptor is the immutable shape definition shared by tray items and
//! placed polygons: vertex strings in a 0..100 local space plus a fill color.
//! Vertices are kept as the `"x,y"` strings that travel in drag payloads and
//! the persisted record; [`PolygonDescriptor::vertices`] parses them when a
//! caller needs numbers (hit-testing, tests).

#[cfg(test)]
#[path = "polygon_test.rs"]
mod polygon_test;

use std::f64::consts::TAU;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::{LOCAL_CENTER, MAX_VERTICES, MIN_RADIUS, MIN_VERTICES, POLYGON_COLOR, RADIUS_JITTER};

/// Errors from parsing descriptor vertices.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PolygonError {
    #[error("vertex {index} is not an \"x,y\" pair: {raw:?}")]
    MalformedVertex { index: usize, raw: String },
}

/// Immutable shape definition: ordered `"x,y"` vertex strings and a fill color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolygonDescriptor {
    pub points: Vec<String>,
    pub color: String,
}

impl PolygonDescriptor {
    /// Build a descriptor from numeric vertices.
    #[must_use]
    pub fn from_vertices(vertices: &[Point], color: impl Into<String>) -> Self {
        Self {
            points: vertices.iter().map(|p| format!("{},{}", p.x, p.y)).collect(),
            color: color.into(),
        }
    }

    /// Parse the vertex strings into local-space points.
    ///
    /// # Errors
    ///
    /// Returns [`PolygonError::MalformedVertex`] for the first entry that is
    /// not two comma-separated numbers.
    pub fn vertices(&self) -> Result<Vec<Point>, PolygonError> {
        self.points
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                parse_vertex(raw).ok_or_else(|| PolygonError::MalformedVertex { index, raw: raw.clone() })
            })
            .collect()
    }

    /// Value for an SVG `points` attribute.
    #[must_use]
    pub fn points_attr(&self) -> String {
        self.points.join(" ")
    }
}

fn parse_vertex(raw: &str) -> Option<Point> {
    let (x, y) = raw.split_once(',')?;
    match (x.trim().parse::<f64>(), y.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => Some(Point::new(x, y)),
        _ => None,
    }
}

/// Generate one polygon on a jittered circle around the local center.
///
/// The vertex count is uniform in [`MIN_VERTICES`]..=[`MAX_VERTICES`]. Vertex
/// `i` of `n` sits at angle `2πi/n` with its own radius drawn from
/// `[MIN_RADIUS, MIN_RADIUS + RADIUS_JITTER)`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> PolygonDescriptor {
    let count = rng.random_range(MIN_VERTICES..=MAX_VERTICES);
    let vertices: Vec<Point> = (0..count)
        .map(|i| {
            let angle = f64::from(i) / f64::from(count) * TAU;
            let radius = MIN_RADIUS + rng.random::<f64>() * RADIUS_JITTER;
            Point::new(LOCAL_CENTER + angle.cos() * radius, LOCAL_CENTER + angle.sin() * radius)
        })
        .collect();
    PolygonDescriptor::from_vertices(&vertices, POLYGON_COLOR)
}

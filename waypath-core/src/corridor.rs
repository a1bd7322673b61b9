//! Inclusion corridor between two cities.
//!
//! The corridor is the planar buffer of the straight segment joining two
//! city centroids. Distances are Euclidean in degrees; no geodesic correction
//! is applied, so the region is slightly narrower east-west than north-south
//! in real distance at the latitudes involved.

use std::f64::consts::FRAC_PI_2;

use geo::{Coord, Distance, Euclidean, Line, LineString, Point, Polygon};
use thiserror::Error;

use crate::City;

/// Buffer radius applied to every corridor, in degrees.
pub const CORRIDOR_BUFFER_DEGREES: f64 = 0.25;

/// Segments used to approximate each quarter circle of the boundary.
const SEGMENTS_PER_QUADRANT: u32 = 16;

/// Errors raised while building corridor geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The city has no geometry or its centroid could not be computed.
    #[error("unresolved centroid for city '{city}'")]
    UnresolvedCentroid {
        /// Name of the offending city.
        city: String,
    },
}

/// Region within which sites are considered reachable on the way.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waypath_core::{City, Corridor};
///
/// let start = City::at("Start", Coord { x: 0.0, y: 0.0 });
/// let end = City::at("End", Coord { x: 1.0, y: 0.0 });
/// let corridor = Corridor::build(&start, &end).unwrap();
///
/// assert!(corridor.contains(Coord { x: 0.5, y: 0.25 }));
/// assert!(!corridor.contains(Coord { x: 0.5, y: 0.3 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corridor {
    centerline: Line<f64>,
    buffer_radius: f64,
}

impl Corridor {
    /// Build the corridor joining the centroids of `start` and `end`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnresolvedCentroid`] when either city lacks a
    /// usable centroid.
    pub fn build(start: &City, end: &City) -> Result<Self, GeometryError> {
        let from = centroid_of(start)?;
        let to = centroid_of(end)?;
        Ok(Self::between(from, to))
    }

    /// Build the corridor between two points with the standard radius.
    #[must_use]
    pub const fn between(start: Coord<f64>, end: Coord<f64>) -> Self {
        Self {
            centerline: Line { start, end },
            buffer_radius: CORRIDOR_BUFFER_DEGREES,
        }
    }

    /// Straight segment joining the two centroids.
    #[must_use]
    pub const fn centerline(&self) -> Line<f64> {
        self.centerline
    }

    /// Buffer radius in degrees.
    #[must_use]
    pub const fn buffer_radius(&self) -> f64 {
        self.buffer_radius
    }

    /// Whether the start and end centroids coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.centerline.start == self.centerline.end
    }

    /// Closed containment test: boundary points are inside.
    #[must_use]
    pub fn contains(&self, location: Coord<f64>) -> bool {
        self.distance_to(location) <= self.buffer_radius
    }

    /// Planar distance from `location` to the centerline segment.
    #[must_use]
    pub fn distance_to(&self, location: Coord<f64>) -> f64 {
        Euclidean.distance(&Point::from(location), &self.centerline)
    }

    /// Fraction along the centerline of the closest point to `location`.
    ///
    /// The result is clamped to `[0, 1]`; a degenerate corridor always
    /// yields `0`.
    #[expect(
        clippy::float_arithmetic,
        reason = "projection onto the centerline needs a dot product"
    )]
    #[must_use]
    pub fn progress_of(&self, location: Coord<f64>) -> f64 {
        let delta = self.centerline.delta();
        let length_sq = delta.x * delta.x + delta.y * delta.y;
        if length_sq == 0.0 {
            return 0.0;
        }
        let offset = location - self.centerline.start;
        ((offset.x * delta.x + offset.y * delta.y) / length_sq).clamp(0.0, 1.0)
    }

    /// Polygonal outline of the region for rendering.
    ///
    /// The outline is a capsule: two semicircular caps joined by the sides
    /// of the segment, traced counter-clockwise. A degenerate corridor
    /// produces a circle.
    #[expect(
        clippy::float_arithmetic,
        reason = "tracing circular caps requires trigonometry"
    )]
    #[must_use]
    pub fn boundary(&self) -> Polygon<f64> {
        let Line { start, end } = self.centerline;
        let step = FRAC_PI_2 / f64::from(SEGMENTS_PER_QUADRANT);
        let radius = self.buffer_radius;
        let arc = |centre: Coord<f64>, from: f64, steps: u32| {
            (0..=steps).map(move |i| {
                let angle = from + step * f64::from(i);
                Coord {
                    x: centre.x + radius * angle.cos(),
                    y: centre.y + radius * angle.sin(),
                }
            })
        };

        let ring: Vec<Coord<f64>> = if self.is_degenerate() {
            arc(start, 0.0, SEGMENTS_PER_QUADRANT * 4 - 1).collect()
        } else {
            let delta = self.centerline.delta();
            let heading = delta.y.atan2(delta.x);
            arc(end, heading - FRAC_PI_2, SEGMENTS_PER_QUADRANT * 2)
                .chain(arc(start, heading + FRAC_PI_2, SEGMENTS_PER_QUADRANT * 2))
                .collect()
        };
        Polygon::new(LineString::from(ring), Vec::new())
    }
}

fn centroid_of(city: &City) -> Result<Coord<f64>, GeometryError> {
    city.centroid()
        .ok_or_else(|| GeometryError::UnresolvedCentroid {
            city: city.name.clone(),
        })
}

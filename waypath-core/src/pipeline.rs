//! End-to-end trip planning.
//!
//! Loads the layers through a [`GeometryProvider`], builds the corridor,
//! selects sites and partitions them into days. Every failure aborts the
//! whole request; no partial plan is ever returned.

use geo::{Coord, Line, Polygon};
use log::{debug, info};
use thiserror::Error;

use crate::{
    CityNotFound, Corridor, DataSourceError, GeometryError, GeometryProvider, TripRequest,
    TripRequestError, Waypoint, apply_order, plan, select,
};

/// Failures surfaced by [`plan_trip`].
#[derive(Debug, Error)]
pub enum PlanError {
    /// A start or end city could not be resolved.
    #[error(transparent)]
    CityNotFound(#[from] CityNotFound),
    /// A layer could not be read.
    #[error(transparent)]
    DataSource(#[from] DataSourceError),
    /// Corridor geometry could not be built.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// The request itself was rejected.
    #[error(transparent)]
    InvalidRequest(#[from] TripRequestError),
}

/// Everything a map renderer needs to draw a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripPlan {
    /// Centroid of the starting city.
    pub start: Coord<f64>,
    /// Centroid of the destination city.
    pub end: Coord<f64>,
    /// Straight line joining the two centroids.
    pub centerline: Line<f64>,
    /// Outline of the inclusion corridor.
    pub corridor_boundary: Polygon<f64>,
    /// Planned stops, day by day.
    pub waypoints: Vec<Waypoint>,
}

impl TripPlan {
    /// Number of days that received at least one stop.
    #[must_use]
    pub fn populated_days(&self) -> usize {
        self.waypoints.last().map_or(0, |waypoint| waypoint.day + 1)
    }

    /// Waypoints scheduled on `day`.
    pub fn day(&self, day: usize) -> impl Iterator<Item = &Waypoint> + '_ {
        self.waypoints.iter().filter(move |waypoint| waypoint.day == day)
    }
}

/// Plan a trip for `request` using geometry from `provider`.
///
/// # Errors
///
/// - [`PlanError::DataSource`] when either layer cannot be loaded.
/// - [`PlanError::CityNotFound`] when the start or end city is missing from
///   the city layer. The site layer is not loaded in that case.
/// - [`PlanError::Geometry`] when a city has no usable centroid.
pub fn plan_trip(
    provider: &dyn GeometryProvider,
    request: &TripRequest,
) -> Result<TripPlan, PlanError> {
    let cities = provider.load_cities()?;
    let start = cities.resolve(request.start())?;
    let end = cities.resolve(request.end())?;
    let corridor = Corridor::build(start, end)?;
    debug!(
        "corridor from {} to {} with radius {}",
        start.name,
        end.name,
        corridor.buffer_radius()
    );

    let sites = provider.load_sites()?;
    let mut selected = select(&sites, request.categories(), &corridor);
    apply_order(&mut selected, request.order(), &corridor);
    let candidates = selected.len();

    let waypoints = plan(
        selected,
        usize::from(request.num_days()),
        usize::from(request.sites_per_day()),
        request.include_rest_stop(),
    );
    info!(
        "planned {} waypoints from {candidates} of {} sites between {} and {}",
        waypoints.len(),
        sites.len(),
        start.name,
        end.name
    );

    let centerline = corridor.centerline();
    Ok(TripPlan {
        start: centerline.start,
        end: centerline.end,
        centerline,
        corridor_boundary: corridor.boundary(),
        waypoints,
    })
}

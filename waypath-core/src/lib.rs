//! Core domain types for the Waypath trip planner.
//!
//! A trip runs between two cities. Sites of the requested categories that
//! lie within a fixed-width corridor around the straight line joining the
//! city centroids are selected and partitioned into days. Everything here is
//! pure and synchronous; loading geometry and drawing maps sit behind the
//! [`GeometryProvider`] and [`MapRenderer`] traits.

#![forbid(unsafe_code)]

pub mod category;
pub mod city;
pub mod corridor;
pub mod itinerary;
pub mod pipeline;
pub mod provider;
pub mod render;
pub mod request;
pub mod select;
pub mod site;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use category::{Category, UnknownCategory};
pub use city::{City, CityGeometry, CityName, CityNotFound, CitySet};
pub use corridor::{CORRIDOR_BUFFER_DEGREES, Corridor, GeometryError};
pub use itinerary::{Stop, Waypoint, plan};
pub use pipeline::{PlanError, TripPlan, plan_trip};
pub use provider::{DataSourceError, GeometryProvider, Layer};
pub use render::MapRenderer;
pub use request::{NUM_DAYS_RANGE, SITES_PER_DAY_RANGE, TripRequest, TripRequestError};
pub use select::{SiteOrder, apply_order, order_along_route, select};
pub use site::{Site, SiteSet};

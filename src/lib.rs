//! Facade crate for the waypath trip planner.
//!
//! This crate re-exports the core domain types and exposes the file-backed
//! layer provider behind the `data-files` feature.

#![forbid(unsafe_code)]

pub use waypath_core::{
    Category, City, CityGeometry, CityName, CityNotFound, CitySet, Corridor, DataSourceError,
    GeometryError, GeometryProvider, Layer, MapRenderer, PlanError, Site, SiteOrder, SiteSet,
    Stop, TripPlan, TripRequest, TripRequestError, Waypoint, plan_trip,
};

#[cfg(feature = "data-files")]
pub use waypath_data::{FeatureFileError, FeatureFileProvider, LayerSchema, TextEncoding};

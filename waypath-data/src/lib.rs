//! File-backed layer loading for the waypath planner.
//!
//! Responsibilities:
//! - Read city and site layers exported as `GeoJSON` feature collections.
//! - Retry alternative text encodings when a file is not valid UTF-8.
//! - Turn attribute rows into `waypath-core` cities and sites.
//!
//! Boundaries:
//! - Do not encode planning rules (live in `waypath-core`).
//! - Rows that cannot be interpreted are skipped with a warning; only
//!   whole-file failures surface as errors.
//!
//! Invariants:
//! - Feature order in a file is preserved in the loaded site set.
//! - No global mutable state.
#![forbid(unsafe_code)]

pub mod encoding;
pub mod geojson;
pub mod provider;

pub use encoding::{DEFAULT_ENCODINGS, DecodeError, TextEncoding};
pub use geojson::{Feature, FeatureCollection, GeometryShapeError, RawGeometry};
pub use provider::{
    DecodeAttempt, FeatureFileError, FeatureFileProvider, LayerSchema, read_feature_collection,
};

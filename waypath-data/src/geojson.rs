//! Minimal `GeoJSON` reading for city and site layers.
//!
//! Only the parts the planner needs are modelled: a `FeatureCollection` of
//! features with a property map and an optional geometry. Geometry
//! coordinates are kept as raw JSON until a layer asks for a specific shape.

use geo::{Coord, LineString, MultiPolygon, Point, Polygon};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use waypath_core::CityGeometry;

/// A decoded `FeatureCollection`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    /// Features in file order.
    pub features: Vec<Feature>,
}

/// A single `GeoJSON` feature.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    /// Attribute table row; `null` is treated as empty.
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    /// Feature geometry; `null` when the feature has none.
    #[serde(default)]
    pub geometry: Option<RawGeometry>,
}

/// Geometry with its coordinates still in JSON form.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGeometry {
    /// `GeoJSON` geometry type, such as `Point` or `Polygon`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Coordinate array for the geometry type.
    #[serde(default)]
    pub coordinates: Value,
}

/// A geometry could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryShapeError {
    /// The geometry type is not accepted for this layer.
    #[error("unsupported geometry type '{0}'")]
    Unsupported(String),
    /// Coordinates did not match the declared geometry type.
    #[error("malformed {0} coordinates")]
    Malformed(&'static str),
}

impl Feature {
    /// Read a string attribute, trimming surrounding whitespace.
    ///
    /// Blank strings count as missing.
    #[must_use]
    pub fn text_property(&self, key: &str) -> Option<&str> {
        self.properties
            .as_ref()?
            .get(key)?
            .as_str()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

impl RawGeometry {
    /// Interpret the geometry as a point.
    ///
    /// # Errors
    ///
    /// Fails for any other geometry type or malformed coordinates.
    pub fn to_point(&self) -> Result<Point<f64>, GeometryShapeError> {
        match self.kind.as_str() {
            "Point" => position(&self.coordinates)
                .map(Point::from)
                .ok_or(GeometryShapeError::Malformed("Point")),
            other => Err(GeometryShapeError::Unsupported(other.to_owned())),
        }
    }

    /// Interpret the geometry as a city boundary.
    ///
    /// # Errors
    ///
    /// Fails for geometry types other than `Point`, `Polygon` and
    /// `MultiPolygon`, or for malformed coordinates.
    pub fn to_city_geometry(&self) -> Result<CityGeometry, GeometryShapeError> {
        match self.kind.as_str() {
            "Point" => self.to_point().map(CityGeometry::Point),
            "Polygon" => polygon(&self.coordinates)
                .map(CityGeometry::Polygon)
                .ok_or(GeometryShapeError::Malformed("Polygon")),
            "MultiPolygon" => self
                .coordinates
                .as_array()
                .and_then(|parts| parts.iter().map(polygon).collect::<Option<Vec<_>>>())
                .map(|parts| CityGeometry::MultiPolygon(MultiPolygon::new(parts)))
                .ok_or(GeometryShapeError::Malformed("MultiPolygon")),
            other => Err(GeometryShapeError::Unsupported(other.to_owned())),
        }
    }
}

/// `[x, y]` or `[x, y, z]`; any extra ordinates are ignored.
fn position(value: &Value) -> Option<Coord<f64>> {
    let ordinates = value.as_array()?;
    let x = ordinates.first()?.as_f64()?;
    let y = ordinates.get(1)?.as_f64()?;
    Some(Coord { x, y })
}

fn ring(value: &Value) -> Option<LineString<f64>> {
    value
        .as_array()?
        .iter()
        .map(position)
        .collect::<Option<Vec<_>>>()
        .map(LineString::from)
}

fn polygon(value: &Value) -> Option<Polygon<f64>> {
    let mut rings = value
        .as_array()?
        .iter()
        .map(ring)
        .collect::<Option<Vec<_>>>()?
        .into_iter();
    let exterior = rings.next()?;
    Some(Polygon::new(exterior, rings.collect()))
}

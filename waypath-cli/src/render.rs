//! `GeoJSON` rendering of planned trips.
//!
//! Every feature carries a `role` property so map clients can style the
//! layers independently: `corridor`, `route`, `start`, `end`, `site` and
//! `rest_stop`.

use geo::{Coord, LineString, Polygon};
use serde_json::{Map, Value, json};
use thiserror::Error;
use waypath_core::{MapRenderer, Stop, TripPlan, Waypoint};

/// Rendering failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// `GeoJSON` cannot represent NaN or infinite ordinates.
    #[error("{role} feature has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Role of the offending feature.
        role: &'static str,
    },
}

/// Renders a [`TripPlan`] as a `GeoJSON` `FeatureCollection`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoJsonRenderer;

impl MapRenderer for GeoJsonRenderer {
    type Output = Value;
    type Error = RenderError;

    fn render(&self, plan: &TripPlan) -> Result<Value, RenderError> {
        let mut features = Vec::with_capacity(plan.waypoints.len() + 4);
        features.push(feature(
            polygon_geometry(&plan.corridor_boundary, "corridor")?,
            json!({ "role": "corridor" }),
        ));
        features.push(feature(
            json!({
                "type": "LineString",
                "coordinates": [
                    position(plan.centerline.start, "route")?,
                    position(plan.centerline.end, "route")?,
                ],
            }),
            json!({ "role": "route" }),
        ));
        features.push(feature(
            point_geometry(plan.start, "start")?,
            json!({ "role": "start" }),
        ));
        features.push(feature(
            point_geometry(plan.end, "end")?,
            json!({ "role": "end" }),
        ));
        for waypoint in &plan.waypoints {
            features.push(waypoint_feature(waypoint)?);
        }
        Ok(json!({
            "type": "FeatureCollection",
            "features": features,
        }))
    }
}

fn waypoint_feature(waypoint: &Waypoint) -> Result<Value, RenderError> {
    match &waypoint.stop {
        Stop::Site(site) => Ok(feature(
            point_geometry(site.location, "site")?,
            json!({
                "role": "site",
                "name": site.name,
                "category": site.category.as_str(),
                "day": waypoint.day,
            }),
        )),
        Stop::Rest { location } => Ok(feature(
            point_geometry(*location, "rest_stop")?,
            json!({ "role": "rest_stop", "day": waypoint.day }),
        )),
    }
}

fn feature(geometry: Value, properties: Value) -> Value {
    let mut object = Map::new();
    object.insert("type".to_owned(), Value::from("Feature"));
    object.insert("geometry".to_owned(), geometry);
    object.insert("properties".to_owned(), properties);
    Value::Object(object)
}

fn position(coord: Coord<f64>, role: &'static str) -> Result<Value, RenderError> {
    if coord.x.is_finite() && coord.y.is_finite() {
        Ok(json!([coord.x, coord.y]))
    } else {
        Err(RenderError::NonFiniteCoordinate { role })
    }
}

fn point_geometry(coord: Coord<f64>, role: &'static str) -> Result<Value, RenderError> {
    Ok(json!({ "type": "Point", "coordinates": position(coord, role)? }))
}

fn ring(line: &LineString<f64>, role: &'static str) -> Result<Value, RenderError> {
    line.coords()
        .map(|coord| position(*coord, role))
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

fn polygon_geometry(polygon: &Polygon<f64>, role: &'static str) -> Result<Value, RenderError> {
    let rings = std::iter::once(polygon.exterior())
        .chain(polygon.interiors())
        .map(|line| ring(line, role))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(json!({ "type": "Polygon", "coordinates": rings }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use waypath_core::test_support::end_to_end_fixture;
    use waypath_core::{Category, CityName, TripRequest, plan_trip};

    fn sample_plan(rest: bool) -> TripPlan {
        let request = TripRequest::new(
            [Category::Nature, Category::Culture].into_iter().collect(),
            CityName::Jeddah,
            CityName::Rabigh,
            3,
            5,
        )
        .expect("valid request")
        .with_rest_stop(rest);
        plan_trip(&end_to_end_fixture(), &request).expect("plan")
    }

    fn roles(rendered: &Value) -> Vec<&str> {
        rendered["features"]
            .as_array()
            .expect("features array")
            .iter()
            .map(|feature| feature["properties"]["role"].as_str().expect("role"))
            .collect()
    }

    #[rstest]
    fn renders_every_layer_with_roles() {
        let rendered = GeoJsonRenderer.render(&sample_plan(true)).expect("render");
        assert_eq!(rendered["type"], "FeatureCollection");
        assert_eq!(
            roles(&rendered),
            vec!["corridor", "route", "start", "end", "site", "rest_stop", "site"]
        );
    }

    #[rstest]
    fn site_features_carry_name_category_and_day() {
        let rendered = GeoJsonRenderer.render(&sample_plan(false)).expect("render");
        let site = &rendered["features"][4];
        assert_eq!(site["properties"]["name"], "A");
        assert_eq!(site["properties"]["category"], "Nature");
        assert_eq!(site["properties"]["day"], 0);
        assert_eq!(site["geometry"]["coordinates"], json!([39.0, 21.5]));
    }

    #[rstest]
    fn corridor_ring_is_closed() {
        let rendered = GeoJsonRenderer.render(&sample_plan(false)).expect("render");
        let ring = rendered["features"][0]["geometry"]["coordinates"][0]
            .as_array()
            .expect("exterior ring");
        assert!(ring.len() > 4);
        assert_eq!(ring.first(), ring.last());
    }

    #[rstest]
    fn rejects_non_finite_coordinates() {
        let mut plan = sample_plan(false);
        plan.start = Coord {
            x: f64::NAN,
            y: 21.4,
        };
        assert_eq!(
            GeoJsonRenderer.render(&plan),
            Err(RenderError::NonFiniteCoordinate { role: "start" })
        );
    }
}

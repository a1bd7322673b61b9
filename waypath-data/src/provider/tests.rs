//! Unit tests for the `GeoJSON` feature-file provider.

use super::*;
use rstest::{fixture, rstest};
use tempfile::TempDir;
use waypath_core::{CityGeometry, CityName};

struct Layers {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Layers {
    fn write(&self, name: &str, contents: &[u8]) -> Utf8PathBuf {
        let path = self.root.join(name);
        waypath_fs::write_file(&path, contents).expect("write layer");
        path
    }
}

#[fixture]
fn layers() -> Layers {
    let dir = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
    Layers { _dir: dir, root }
}

const CITIES: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "properties": {"NAME": "Jeddah"},
     "geometry": {"type": "Point", "coordinates": [39.0, 21.4]}},
    {"type": "Feature", "properties": {"NAME": "Rabigh"},
     "geometry": {"type": "Polygon", "coordinates": [[[39.1, 21.6], [39.3, 21.6], [39.3, 21.8], [39.1, 21.8], [39.1, 21.6]]]}},
    {"type": "Feature", "properties": {"NAME": "Badr"}, "geometry": null},
    {"type": "Feature", "properties": {"OTHER": "x"},
     "geometry": {"type": "Point", "coordinates": [1.0, 1.0]}},
    {"type": "Feature", "properties": {"NAME": "Umluj"},
     "geometry": {"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]}}
  ]
}"#;

const SITES: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {"type": "Feature", "properties": {"name": "A", "Category_c": "Nature"},
     "geometry": {"type": "Point", "coordinates": [39.0, 21.5]}},
    {"type": "Feature", "properties": {"name": "B", "Category_c": "culture"},
     "geometry": {"type": "Point", "coordinates": [39.1, 21.6]}},
    {"type": "Feature", "properties": {"name": "Unknown", "Category_c": "Shopping"},
     "geometry": {"type": "Point", "coordinates": [39.1, 21.6]}},
    {"type": "Feature", "properties": {"name": "Nowhere", "Category_c": "Nature"},
     "geometry": null},
    {"type": "Feature", "properties": {"Category_c": "Nature"},
     "geometry": {"type": "Point", "coordinates": [39.1, 21.6]}},
    {"type": "Feature", "properties": {"name": "Shape", "Category_c": "Nature"},
     "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]}}
  ]
}"#;

#[rstest]
fn loads_cities_and_skips_bad_features(layers: Layers) {
    let cities = layers.write("cities.geojson", CITIES.as_bytes());
    let provider = FeatureFileProvider::new(cities, layers.root.join("sites.geojson"));
    let loaded = provider.load_cities().expect("load cities");

    assert_eq!(loaded.len(), 3);
    let jeddah = loaded.resolve(CityName::Jeddah).expect("jeddah");
    assert_eq!(
        jeddah.boundary,
        Some(CityGeometry::Point(geo::Point::new(39.0, 21.4)))
    );
    let rabigh = loaded.resolve(CityName::Rabigh).expect("rabigh");
    assert!(matches!(rabigh.boundary, Some(CityGeometry::Polygon(_))));
    let badr = loaded.resolve(CityName::Badr).expect("badr");
    assert!(badr.boundary.is_none());
    assert!(loaded.resolve(CityName::Umluj).is_err());
}

#[rstest]
fn loads_sites_and_skips_bad_features(layers: Layers) {
    let sites = layers.write("sites.geojson", SITES.as_bytes());
    let provider = FeatureFileProvider::new(layers.root.join("cities.geojson"), sites);
    let loaded = provider.load_sites().expect("load sites");

    let names: Vec<_> = loaded.iter().map(|site| site.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(loaded[1].category, Category::Culture);
}

#[rstest]
fn falls_back_to_latin1(layers: Layers) {
    let mut bytes = br#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":{"NAME":"Caf"#.to_vec();
    bytes.push(0xE9);
    bytes.extend_from_slice(br#""},"geometry":null}]}"#);
    let cities = layers.write("cities.geojson", &bytes);

    let collection = read_feature_collection(&cities, &[TextEncoding::Utf8, TextEncoding::Latin1])
        .expect("latin1 fallback");
    assert_eq!(collection.features[0].text_property("NAME"), Some("Café"));
}

#[rstest]
fn default_encodings_read_arabic_site_names(layers: Layers) {
    let mut bytes = br#"{"type":"FeatureCollection","features":[{"type":"Feature","properties":{"name":""#.to_vec();
    bytes.extend_from_slice(&[0xCC, 0xCF, 0xC9]);
    bytes.extend_from_slice(
        br#"","Category_c":"Culture"},"geometry":{"type":"Point","coordinates":[39.1,21.5]}}]}"#,
    );
    let sites = layers.write("sites.geojson", &bytes);
    let provider = FeatureFileProvider::new(layers.root.join("cities.geojson"), sites);

    let loaded = provider.load_sites().expect("cp1256 fallback");
    let names: Vec<_> = loaded.iter().map(|site| site.name.as_str()).collect();
    assert_eq!(names, vec!["جدة"]);
}

#[rstest]
fn reports_every_failed_attempt(layers: Layers) {
    let path = layers.write("broken.geojson", b"not json \xFF");
    let err = read_feature_collection(&path, &DEFAULT_ENCODINGS).expect_err("unparseable");
    match err {
        FeatureFileError::Decode { attempts, .. } => {
            let tried: Vec<_> = attempts.iter().map(|attempt| attempt.encoding).collect();
            assert_eq!(tried, DEFAULT_ENCODINGS.to_vec());
        }
        other => panic!("expected decode failure, found {other:?}"),
    }
}

#[rstest]
fn empty_encoding_list_fails(layers: Layers) {
    let path = layers.write("cities.geojson", CITIES.as_bytes());
    let err = read_feature_collection(&path, &[]).expect_err("no encodings");
    assert!(err.to_string().contains("no text encodings configured"));
}

#[rstest]
fn missing_file_is_tagged_with_layer(layers: Layers) {
    let provider = FeatureFileProvider::new(
        layers.root.join("absent-cities.geojson"),
        layers.root.join("absent-sites.geojson"),
    );
    let err = provider.load_sites().expect_err("missing file");
    assert_eq!(err.layer, waypath_core::Layer::Sites);
    assert!(err.to_string().starts_with("failed to load sites layer"));
}

#[rstest]
fn custom_schema_reads_other_attributes(layers: Layers) {
    let cities = layers.write(
        "cities.geojson",
        br#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{"city":"Jeddah"},
             "geometry":{"type":"Point","coordinates":[39.0,21.4]}}]}"#,
    );
    let provider = FeatureFileProvider::new(cities, layers.root.join("sites.geojson"))
        .with_schema(LayerSchema {
            city_name: "city".to_owned(),
            ..LayerSchema::default()
        });
    let loaded = provider.load_cities().expect("load cities");
    assert!(loaded.resolve(CityName::Jeddah).is_ok());
}

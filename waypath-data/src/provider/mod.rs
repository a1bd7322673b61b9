//! File-backed [`GeometryProvider`] reading `GeoJSON` layers.

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, warn};
use thiserror::Error;
use waypath_core::{
    Category, City, CitySet, DataSourceError, GeometryProvider, Layer, Site, SiteSet,
};

use crate::encoding::{DEFAULT_ENCODINGS, TextEncoding};
use crate::geojson::{Feature, FeatureCollection, RawGeometry};

/// Attribute names used to read the layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerSchema {
    /// City name attribute in the city layer.
    pub city_name: String,
    /// Site name attribute in the site layer.
    pub site_name: String,
    /// Category attribute in the site layer.
    pub site_category: String,
}

impl Default for LayerSchema {
    fn default() -> Self {
        Self {
            city_name: "NAME".to_owned(),
            site_name: "name".to_owned(),
            site_category: "Category_c".to_owned(),
        }
    }
}

/// One failed decoding attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeAttempt {
    /// Encoding that was tried.
    pub encoding: TextEncoding,
    /// Why the attempt failed.
    pub reason: String,
}

/// Failures reading a layer file.
#[derive(Debug, Error)]
pub enum FeatureFileError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Layer file location.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Every configured encoding failed to decode or parse the file.
    #[error("could not decode {path}: {}", describe(.attempts))]
    Decode {
        /// Layer file location.
        path: Utf8PathBuf,
        /// Attempts in the order they were made.
        attempts: Vec<DecodeAttempt>,
    },
}

fn describe(attempts: &[DecodeAttempt]) -> String {
    if attempts.is_empty() {
        return "no text encodings configured".to_owned();
    }
    attempts
        .iter()
        .map(|attempt| format!("{} ({})", attempt.encoding, attempt.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Read a `FeatureCollection`, trying `encodings` in order.
///
/// An attempt succeeds only when the text both decodes and parses; the first
/// success wins.
///
/// # Errors
///
/// Returns [`FeatureFileError::Io`] when the file cannot be read and
/// [`FeatureFileError::Decode`] listing every attempt when none succeeds.
pub fn read_feature_collection(
    path: &Utf8Path,
    encodings: &[TextEncoding],
) -> Result<FeatureCollection, FeatureFileError> {
    let bytes = waypath_fs::read_file(path).map_err(|source| FeatureFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut attempts = Vec::with_capacity(encodings.len());
    for &encoding in encodings {
        let parsed = encoding
            .decode(&bytes)
            .map_err(|err| err.to_string())
            .and_then(|text| {
                serde_json::from_str::<FeatureCollection>(&text).map_err(|err| err.to_string())
            });
        match parsed {
            Ok(collection) => {
                debug!(
                    "decoded {path} as {encoding} with {} features",
                    collection.features.len()
                );
                return Ok(collection);
            }
            Err(reason) => {
                debug!("decoding {path} as {encoding} failed: {reason}");
                attempts.push(DecodeAttempt { encoding, reason });
            }
        }
    }
    Err(FeatureFileError::Decode {
        path: path.to_path_buf(),
        attempts,
    })
}

/// Provider reading a city layer and a site layer from `GeoJSON` files.
///
/// # Examples
///
/// ```no_run
/// use waypath_core::GeometryProvider;
/// use waypath_data::FeatureFileProvider;
///
/// let provider = FeatureFileProvider::new("data/cities.geojson", "data/sites.geojson");
/// let cities = provider.load_cities()?;
/// println!("{} cities", cities.len());
/// # Ok::<(), waypath_core::DataSourceError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureFileProvider {
    cities: Utf8PathBuf,
    sites: Utf8PathBuf,
    encodings: Vec<TextEncoding>,
    schema: LayerSchema,
}

impl FeatureFileProvider {
    /// Create a provider with the default encodings and attribute names.
    #[must_use]
    pub fn new(cities: impl Into<Utf8PathBuf>, sites: impl Into<Utf8PathBuf>) -> Self {
        Self {
            cities: cities.into(),
            sites: sites.into(),
            encodings: DEFAULT_ENCODINGS.to_vec(),
            schema: LayerSchema::default(),
        }
    }

    /// Replace the ordered list of encodings to try.
    #[must_use]
    pub fn with_encodings(mut self, encodings: Vec<TextEncoding>) -> Self {
        self.encodings = encodings;
        self
    }

    /// Replace the attribute names.
    #[must_use]
    pub fn with_schema(mut self, schema: LayerSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Path of the city layer.
    #[must_use]
    pub fn cities_path(&self) -> &Utf8Path {
        &self.cities
    }

    /// Path of the site layer.
    #[must_use]
    pub fn sites_path(&self) -> &Utf8Path {
        &self.sites
    }

    fn city_from_feature(&self, index: usize, feature: &Feature) -> Option<City> {
        let Some(name) = feature.text_property(&self.schema.city_name) else {
            warn!(
                "skipping city feature {index} in {}: missing '{}' attribute",
                self.cities, self.schema.city_name
            );
            return None;
        };
        let boundary = match feature.geometry.as_ref().map(RawGeometry::to_city_geometry) {
            None => None,
            Some(Ok(geometry)) => Some(geometry),
            Some(Err(err)) => {
                warn!("skipping city '{name}' in {}: {err}", self.cities);
                return None;
            }
        };
        Some(City::new(name, boundary))
    }

    fn site_from_feature(&self, index: usize, feature: &Feature) -> Option<Site> {
        let Some(name) = feature.text_property(&self.schema.site_name) else {
            warn!(
                "skipping site feature {index} in {}: missing '{}' attribute",
                self.sites, self.schema.site_name
            );
            return None;
        };
        let category = match feature
            .text_property(&self.schema.site_category)
            .map(str::parse::<Category>)
        {
            Some(Ok(category)) => category,
            Some(Err(err)) => {
                warn!("skipping site '{name}' in {}: {err}", self.sites);
                return None;
            }
            None => {
                warn!(
                    "skipping site '{name}' in {}: missing '{}' attribute",
                    self.sites, self.schema.site_category
                );
                return None;
            }
        };
        let location = match feature.geometry.as_ref().map(RawGeometry::to_point) {
            Some(Ok(point)) => point.0,
            Some(Err(err)) => {
                warn!("skipping site '{name}' in {}: {err}", self.sites);
                return None;
            }
            None => {
                warn!("skipping site '{name}' in {}: no geometry", self.sites);
                return None;
            }
        };
        Some(Site::new(name, category, location))
    }
}

impl GeometryProvider for FeatureFileProvider {
    fn load_cities(&self) -> Result<CitySet, DataSourceError> {
        let collection = read_feature_collection(&self.cities, &self.encodings)
            .map_err(|err| DataSourceError::new(Layer::Cities, err))?;
        let cities: CitySet = collection
            .features
            .iter()
            .enumerate()
            .filter_map(|(index, feature)| self.city_from_feature(index, feature))
            .collect();
        debug!("loaded {} cities from {}", cities.len(), self.cities);
        Ok(cities)
    }

    fn load_sites(&self) -> Result<SiteSet, DataSourceError> {
        let collection = read_feature_collection(&self.sites, &self.encodings)
            .map_err(|err| DataSourceError::new(Layer::Sites, err))?;
        let sites: SiteSet = collection
            .features
            .iter()
            .enumerate()
            .filter_map(|(index, feature)| self.site_from_feature(index, feature))
            .collect();
        debug!("loaded {} sites from {}", sites.len(), self.sites);
        Ok(sites)
    }
}

#[cfg(test)]
mod tests;

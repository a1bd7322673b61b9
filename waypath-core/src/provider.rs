//! Access to the city and site layers.
//!
//! The [`GeometryProvider`] trait hides where geometry comes from. Decoding
//! problems, including any retry with alternative text encodings, are the
//! provider's concern; callers only see a [`DataSourceError`].

use std::error::Error as StdError;

use thiserror::Error;

use crate::{CitySet, SiteSet};

/// Which layer a provider was loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// City boundaries and centroids.
    Cities,
    /// Tourism sites.
    Sites,
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Cities => "cities",
            Self::Sites => "sites",
        })
    }
}

/// The backing store for a layer could not be read.
#[derive(Debug, Error)]
#[error("failed to load {layer} layer: {source}")]
pub struct DataSourceError {
    /// Layer being loaded.
    pub layer: Layer,
    /// Underlying cause reported by the provider.
    #[source]
    pub source: Box<dyn StdError + Send + Sync + 'static>,
}

impl DataSourceError {
    /// Wrap a provider-specific failure.
    pub fn new(layer: Layer, source: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
        Self {
            layer,
            source: source.into(),
        }
    }
}

/// Read-only source of city and site geometry.
///
/// Each call is a single synchronous load with no partial results.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use waypath_core::{City, CitySet, DataSourceError, GeometryProvider, SiteSet};
///
/// struct OneCity;
///
/// impl GeometryProvider for OneCity {
///     fn load_cities(&self) -> Result<CitySet, DataSourceError> {
///         Ok(CitySet::from_iter([City::at("Badr", Coord { x: 38.8, y: 23.7 })]))
///     }
///
///     fn load_sites(&self) -> Result<SiteSet, DataSourceError> {
///         Ok(SiteSet::new())
///     }
/// }
///
/// assert_eq!(OneCity.load_cities().unwrap().len(), 1);
/// ```
pub trait GeometryProvider: Send + Sync {
    /// Load every city feature.
    ///
    /// # Errors
    ///
    /// Returns [`DataSourceError`] when the city layer cannot be read.
    fn load_cities(&self) -> Result<CitySet, DataSourceError>;

    /// Load every site feature, in layer order.
    ///
    /// # Errors
    ///
    /// Returns [`DataSourceError`] when the site layer cannot be read.
    fn load_sites(&self) -> Result<SiteSet, DataSourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn error_names_the_layer_and_cause() {
        let err = DataSourceError::new(Layer::Sites, "unsupported text encoding");
        assert_eq!(
            err.to_string(),
            "failed to load sites layer: unsupported text encoding"
        );
        assert!(err.source().is_some());
    }
}

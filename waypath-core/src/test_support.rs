//! In-memory `GeometryProvider` and fixtures used by unit and behaviour
//! tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use geo::Coord;

use crate::{
    Category, City, CitySet, DataSourceError, GeometryProvider, Layer, Site, SiteSet,
};

/// In-memory provider returning clones of fixed layers.
///
/// The provider counts site loads so tests can assert that a pipeline
/// stopped before touching the site layer.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    cities: CitySet,
    sites: SiteSet,
    site_failure: Option<String>,
    site_loads: AtomicUsize,
}

impl MemoryProvider {
    /// Create a provider serving the given cities and sites.
    pub fn new<I>(cities: I, sites: SiteSet) -> Self
    where
        I: IntoIterator<Item = City>,
    {
        Self {
            cities: cities.into_iter().collect(),
            sites,
            site_failure: None,
            site_loads: AtomicUsize::new(0),
        }
    }

    /// Create a provider whose site layer always fails with `message`.
    pub fn failing_sites<I>(cities: I, message: &str) -> Self
    where
        I: IntoIterator<Item = City>,
    {
        Self {
            site_failure: Some(message.to_owned()),
            ..Self::new(cities, SiteSet::new())
        }
    }

    /// Number of times the site layer was requested.
    pub fn site_loads(&self) -> usize {
        self.site_loads.load(Ordering::Relaxed)
    }
}

impl GeometryProvider for MemoryProvider {
    fn load_cities(&self) -> Result<CitySet, DataSourceError> {
        Ok(self.cities.clone())
    }

    fn load_sites(&self) -> Result<SiteSet, DataSourceError> {
        self.site_loads.fetch_add(1, Ordering::Relaxed);
        self.site_failure.as_ref().map_or_else(
            || Ok(self.sites.clone()),
            |message| Err(DataSourceError::new(Layer::Sites, message.clone())),
        )
    }
}

/// Build a site at `(x, y)`.
#[must_use]
pub fn site(name: &str, category: Category, x: f64, y: f64) -> Site {
    Site::new(name, category, Coord { x, y })
}

/// Provider holding Jeddah at `(39.0, 21.4)`, Rabigh at `(39.2, 21.7)` and
/// three sites: `A` (Nature, inside), `B` (Culture, inside) and `Far`
/// (Nature, well outside the corridor).
#[must_use]
pub fn end_to_end_fixture() -> MemoryProvider {
    MemoryProvider::new(
        [
            City::at("Jeddah", Coord { x: 39.0, y: 21.4 }),
            City::at("Rabigh", Coord { x: 39.2, y: 21.7 }),
        ],
        vec![
            site("A", Category::Nature, 39.0, 21.5),
            site("B", Category::Culture, 39.1, 21.6),
            site("Far", Category::Nature, 42.0, 25.0),
        ],
    )
}

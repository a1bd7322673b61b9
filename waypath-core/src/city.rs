//! Cities that anchor the start and end of a trip.
//!
//! [`CityName`] is the closed set of cities a traveller may pick. The loaded
//! [`CitySet`] is keyed by the raw layer name so that lookups compare against
//! whatever the data provider actually supplied.

use std::collections::HashMap;

use geo::{Centroid, Coord, MultiPolygon, Point, Polygon};
use thiserror::Error;

/// Error raised when a city cannot be resolved by name.
///
/// Returned both for names outside the known fleet and for known names that
/// are absent from the loaded city layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("city not found: '{name}'")]
pub struct CityNotFound {
    /// The name that failed to resolve.
    pub name: String,
}

macro_rules! city_names {
    ($($variant:ident => $label:literal),+ $(,)?) => {
        /// Cities offered as trip start and end points.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum CityName {
            $(
                #[doc = $label]
                #[cfg_attr(feature = "serde", serde(rename = $label))]
                $variant,
            )+
        }

        impl CityName {
            /// Every known city, in picker order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Return the name as it appears in the city layer.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }
    };
}

city_names! {
    Jeddah => "Jeddah",
    Rabigh => "Rabigh",
    Khulays => "Khulays",
    AlKamil => "Al-Kamil",
    AlMadinah => "Al-Madinah",
    YanbuAlBahr => "Yanbu Al-Bahr",
    AlUla => "Al-Ula",
    AlMahd => "Al-Mahd",
    Badr => "Badr",
    Khaybar => "Khaybar",
    AlHinakiyah => "Al-Hinakiyah",
    WadiAlFare => "Wadi Al Fare'",
    AlAis => "Al Ais",
    AlWajh => "Al-Wajh",
    Umluj => "Umluj",
    AlHaet => "Al Ha'et",
}

impl std::fmt::Display for CityName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CityName {
    type Err = CityNotFound;

    /// Match a layer name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|city| city.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CityNotFound { name: s.to_owned() })
    }
}

/// Boundary geometry of a city feature.
#[derive(Debug, Clone, PartialEq)]
pub enum CityGeometry {
    /// A single representative point.
    Point(Point<f64>),
    /// A simple administrative area.
    Polygon(Polygon<f64>),
    /// An area made of several parts.
    MultiPolygon(MultiPolygon<f64>),
}

impl CityGeometry {
    /// Geometric centre of the feature.
    ///
    /// Empty polygons and non-finite results yield `None`.
    #[must_use]
    pub fn centroid(&self) -> Option<Coord<f64>> {
        let centre = match self {
            Self::Point(point) => Some(*point),
            Self::Polygon(polygon) => polygon.centroid(),
            Self::MultiPolygon(parts) => parts.centroid(),
        }?;
        let coord = centre.0;
        (coord.x.is_finite() && coord.y.is_finite()).then_some(coord)
    }
}

/// A named city feature.
///
/// # Examples
/// ```
/// use geo::{Coord, Point};
/// use waypath_core::{City, CityGeometry};
///
/// let city = City::new("Badr", Some(CityGeometry::Point(Point::new(38.8, 23.7))));
/// assert_eq!(city.centroid(), Some(Coord { x: 38.8, y: 23.7 }));
/// assert_eq!(City::new("Nowhere", None).centroid(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    /// Name as recorded in the city layer.
    pub name: String,
    /// Boundary geometry, absent when the feature had none.
    pub boundary: Option<CityGeometry>,
}

impl City {
    /// Construct a city from its name and optional geometry.
    pub fn new(name: impl Into<String>, boundary: Option<CityGeometry>) -> Self {
        Self {
            name: name.into(),
            boundary,
        }
    }

    /// Construct a city represented by a single point.
    pub fn at(name: impl Into<String>, location: Coord<f64>) -> Self {
        Self::new(name, Some(CityGeometry::Point(Point::from(location))))
    }

    /// Centroid of the boundary geometry, if it can be resolved.
    #[must_use]
    pub fn centroid(&self) -> Option<Coord<f64>> {
        self.boundary.as_ref().and_then(CityGeometry::centroid)
    }
}

/// Cities indexed by their layer name.
///
/// When the layer repeats a name, the first feature wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CitySet {
    cities: HashMap<String, City>,
}

impl CitySet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a city unless one with the same name is already present.
    ///
    /// Returns `true` when the city was added.
    pub fn insert(&mut self, city: City) -> bool {
        if self.cities.contains_key(&city.name) {
            return false;
        }
        self.cities.insert(city.name.clone(), city);
        true
    }

    /// Look up a city by exact layer name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&City> {
        self.cities.get(name)
    }

    /// Resolve one of the known cities.
    ///
    /// # Errors
    ///
    /// Returns [`CityNotFound`] when the layer has no feature with that name.
    pub fn resolve(&self, name: CityName) -> Result<&City, CityNotFound> {
        self.get(name.as_str()).ok_or_else(|| CityNotFound {
            name: name.as_str().to_owned(),
        })
    }

    /// Number of cities in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Whether the set holds no cities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl FromIterator<City> for CitySet {
    fn from_iter<I: IntoIterator<Item = City>>(iter: I) -> Self {
        let mut set = Self::new();
        for city in iter {
            set.insert(city);
        }
        set
    }
}

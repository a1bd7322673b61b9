//! Tourism sites that may become trip waypoints.

use geo::Coord;

use crate::Category;

/// A named tourism site.
///
/// Coordinates are in the layer's native degrees with `x = longitude` and
/// `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waypath_core::{Category, Site};
///
/// let site = Site::new("Hegra", Category::Culture, Coord { x: 37.95, y: 26.78 });
/// assert_eq!(site.category, Category::Culture);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    /// Display name.
    pub name: String,
    /// Category used for filtering.
    pub category: Category,
    /// Location of the site.
    pub location: Coord<f64>,
}

impl Site {
    /// Construct a site.
    pub fn new(name: impl Into<String>, category: Category, location: Coord<f64>) -> Self {
        Self {
            name: name.into(),
            category,
            location,
        }
    }
}

/// Sites in the order the provider supplied them.
pub type SiteSet = Vec<Site>;

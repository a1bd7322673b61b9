//! Candidate site selection inside a corridor.

use std::collections::BTreeSet;

use crate::{Category, Corridor, Site};

/// Order in which selected sites are handed to the itinerary planner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SiteOrder {
    /// Keep the order of the site layer.
    #[default]
    Input,
    /// Sort by progress along the corridor centerline, start first.
    AlongRoute,
}

impl std::str::FromStr for SiteOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "input" => Ok(Self::Input),
            "along-route" | "along_route" => Ok(Self::AlongRoute),
            _ => Err(format!("unknown site order '{s}'")),
        }
    }
}

/// Select sites whose category was requested and which lie in `corridor`.
///
/// An empty `categories` set selects nothing. The relative order of `sites`
/// is preserved.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use geo::Coord;
/// use waypath_core::{Category, Corridor, Site, select};
///
/// let corridor = Corridor::between(Coord { x: 39.0, y: 21.4 }, Coord { x: 39.2, y: 21.7 });
/// let sites = vec![
///     Site::new("A", Category::Nature, Coord { x: 39.0, y: 21.5 }),
///     Site::new("B", Category::Culture, Coord { x: 39.1, y: 21.6 }),
///     Site::new("Far", Category::Nature, Coord { x: 42.0, y: 25.0 }),
/// ];
/// let picked = select(&sites, &BTreeSet::from([Category::Nature]), &corridor);
///
/// assert_eq!(picked.len(), 1);
/// assert_eq!(picked[0].name, "A");
/// ```
#[must_use]
pub fn select(sites: &[Site], categories: &BTreeSet<Category>, corridor: &Corridor) -> Vec<Site> {
    if categories.is_empty() {
        return Vec::new();
    }
    sites
        .iter()
        .filter(|site| categories.contains(&site.category))
        .filter(|site| corridor.contains(site.location))
        .cloned()
        .collect()
}

/// Stable sort of `sites` by their projected position along `corridor`.
///
/// Sites projecting onto the same point keep their relative order.
pub fn order_along_route(sites: &mut [Site], corridor: &Corridor) {
    sites.sort_by(|a, b| {
        corridor
            .progress_of(a.location)
            .total_cmp(&corridor.progress_of(b.location))
    });
}

/// Apply `order` to an already selected list of sites.
pub fn apply_order(sites: &mut [Site], order: SiteOrder, corridor: &Corridor) {
    match order {
        SiteOrder::Input => {}
        SiteOrder::AlongRoute => order_along_route(sites, corridor),
    }
}

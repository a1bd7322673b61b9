//! Partition selected sites into trip days.
//!
//! Days are filled in order with consecutive runs of at most
//! `sites_per_day` sites. Sites that do not fit into `num_days` days are
//! dropped. Rest stops are additive and do not consume day capacity.

use geo::Coord;

use crate::Site;

/// What a waypoint represents.
#[derive(Debug, Clone, PartialEq)]
pub enum Stop {
    /// A selected tourism site.
    Site(Site),
    /// A synthetic break inserted into a day.
    Rest {
        /// Where the break is suggested.
        location: Coord<f64>,
    },
}

/// A planned stop on a given day.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    /// Zero-based day index.
    pub day: usize,
    /// The stop itself.
    pub stop: Stop,
}

impl Waypoint {
    /// Whether this waypoint is a synthetic rest stop.
    #[must_use]
    pub const fn is_rest_stop(&self) -> bool {
        matches!(self.stop, Stop::Rest { .. })
    }

    /// The site visited at this waypoint, if any.
    #[must_use]
    pub const fn site(&self) -> Option<&Site> {
        match &self.stop {
            Stop::Site(site) => Some(site),
            Stop::Rest { .. } => None,
        }
    }

    /// Location of the stop.
    #[must_use]
    pub const fn location(&self) -> Coord<f64> {
        match &self.stop {
            Stop::Site(site) => site.location,
            Stop::Rest { location } => *location,
        }
    }
}

/// Assign `selected` sites to days.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waypath_core::{Category, Site, plan};
///
/// let sites: Vec<Site> = (0..5)
///     .map(|i| Site::new(format!("s{i}"), Category::Nature, Coord { x: f64::from(i), y: 0.0 }))
///     .collect();
/// let waypoints = plan(sites, 2, 2, true);
///
/// // Two full days of two sites each, plus one rest stop per day.
/// assert_eq!(waypoints.len(), 6);
/// assert!(waypoints[1].is_rest_stop());
/// assert_eq!(waypoints[5].day, 1);
/// ```
#[must_use]
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "the rest stop goes at the floor of half the day's length"
)]
pub fn plan(
    selected: Vec<Site>,
    num_days: usize,
    sites_per_day: usize,
    include_rest_stop: bool,
) -> Vec<Waypoint> {
    if num_days == 0 || sites_per_day == 0 {
        return Vec::new();
    }
    let capacity = num_days.saturating_mul(sites_per_day);
    let mut remaining = selected.into_iter().take(capacity).peekable();
    let mut waypoints = Vec::new();
    let mut day = 0;

    while remaining.peek().is_some() {
        let chunk: Vec<Site> = remaining.by_ref().take(sites_per_day).collect();
        let rest_at = chunk.len() / 2;
        let rest_location = include_rest_stop.then(|| rest_location(&chunk, rest_at));

        for (position, site) in chunk.into_iter().enumerate() {
            if position == rest_at
                && let Some(location) = rest_location
            {
                waypoints.push(Waypoint {
                    day,
                    stop: Stop::Rest { location },
                });
            }
            waypoints.push(Waypoint {
                day,
                stop: Stop::Site(site),
            });
        }
        day += 1;
    }
    waypoints
}

/// Midpoint between the sites either side of the insertion point.
fn rest_location(chunk: &[Site], rest_at: usize) -> Coord<f64> {
    let after = chunk.get(rest_at).map(|site| site.location);
    let before = rest_at
        .checked_sub(1)
        .and_then(|index| chunk.get(index))
        .map(|site| site.location);
    match (before, after) {
        (Some(a), Some(b)) => Coord {
            x: a.x.midpoint(b.x),
            y: a.y.midpoint(b.y),
        },
        (Some(only), None) | (None, Some(only)) => only,
        (None, None) => Coord { x: 0.0, y: 0.0 },
    }
}

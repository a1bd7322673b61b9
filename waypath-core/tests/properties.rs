//! Property-based tests for corridor selection and itinerary planning.
//!
//! # Invariants tested
//!
//! - **Category filter:** every selected site has a requested category; an
//!   empty category set selects nothing.
//! - **Spatial filter:** selected sites lie in the corridor; matching sites
//!   left out lie outside it.
//! - **Symmetry:** swapping start and end does not change the region.
//! - **Degenerate corridor:** identical endpoints give a disk.
//! - **Capacity:** no day holds more than `sites_per_day` sites and no site
//!   lands beyond the last day.
//! - **Rest stops:** enabling rest stops adds exactly one stop per populated
//!   day.

use std::collections::BTreeSet;

use geo::{Coord, Distance, Euclidean, Point};
use proptest::prelude::*;
use waypath_core::{CORRIDOR_BUFFER_DEGREES, Category, Corridor, Site, plan, select};

/// Distances this close to the radius are treated as on the boundary.
const BOUNDARY_TOLERANCE: f64 = 1e-9;

fn coord_strategy() -> impl Strategy<Value = Coord<f64>> {
    (38.0_f64..40.0, 21.0_f64..23.0).prop_map(|(x, y)| Coord { x, y })
}

fn site_strategy() -> impl Strategy<Value = Site> {
    (prop::sample::select(Category::ALL.to_vec()), coord_strategy())
        .prop_map(|(category, location)| Site::new("site", category, location))
}

fn categories_strategy() -> impl Strategy<Value = BTreeSet<Category>> {
    prop::sample::subsequence(Category::ALL.to_vec(), 0..=Category::ALL.len())
        .prop_map(|picked| picked.into_iter().collect())
}

fn near_boundary(corridor: &Corridor, location: Coord<f64>) -> bool {
    (corridor.distance_to(location) - corridor.buffer_radius()).abs() < BOUNDARY_TOLERANCE
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn selected_sites_have_requested_categories(
        sites in prop::collection::vec(site_strategy(), 0..40),
        categories in categories_strategy(),
        start in coord_strategy(),
        end in coord_strategy(),
    ) {
        let corridor = Corridor::between(start, end);
        let picked = select(&sites, &categories, &corridor);
        if categories.is_empty() {
            prop_assert!(picked.is_empty());
        }
        for site in &picked {
            prop_assert!(categories.contains(&site.category));
        }
    }

    #[test]
    fn spatial_filter_splits_inside_from_outside(
        sites in prop::collection::vec(site_strategy(), 0..40),
        start in coord_strategy(),
        end in coord_strategy(),
    ) {
        let corridor = Corridor::between(start, end);
        let everything: BTreeSet<_> = Category::ALL.into_iter().collect();
        let picked = select(&sites, &everything, &corridor);
        for site in &picked {
            prop_assert!(corridor.contains(site.location));
        }
        let excluded = sites.iter().filter(|site| !picked.contains(site));
        for site in excluded {
            prop_assert!(!corridor.contains(site.location));
        }
    }

    #[test]
    fn corridor_is_orientation_independent(
        start in coord_strategy(),
        end in coord_strategy(),
        probe in coord_strategy(),
    ) {
        let forward = Corridor::between(start, end);
        let backward = Corridor::between(end, start);
        let gap = (forward.distance_to(probe) - backward.distance_to(probe)).abs();
        prop_assert!(gap < BOUNDARY_TOLERANCE);
        if !near_boundary(&forward, probe) {
            prop_assert_eq!(forward.contains(probe), backward.contains(probe));
        }
    }

    #[test]
    fn degenerate_corridor_is_a_disk(
        centre in coord_strategy(),
        probe in coord_strategy(),
    ) {
        let disk = Corridor::between(centre, centre);
        let radial = Euclidean.distance(Point::from(centre), Point::from(probe));
        if (radial - CORRIDOR_BUFFER_DEGREES).abs() >= BOUNDARY_TOLERANCE {
            prop_assert_eq!(disk.contains(probe), radial <= CORRIDOR_BUFFER_DEGREES);
        }
    }

    #[test]
    fn itinerary_respects_day_capacity(
        sites in prop::collection::vec(site_strategy(), 0..60),
        days in 1_usize..=10,
        per_day in 1_usize..=20,
        rest in any::<bool>(),
    ) {
        let waypoints = plan(sites, days, per_day, rest);
        let visits: Vec<_> = waypoints.iter().filter(|w| !w.is_rest_stop()).collect();
        prop_assert!(visits.len() <= days * per_day);
        for day in 0..days {
            let count = visits.iter().filter(|w| w.day == day).count();
            prop_assert!(count <= per_day);
        }
        prop_assert!(waypoints.iter().all(|w| w.day < days));
    }

    #[test]
    fn rest_stops_add_one_per_populated_day(
        sites in prop::collection::vec(site_strategy(), 0..60),
        days in 1_usize..=10,
        per_day in 1_usize..=20,
    ) {
        let populated = days.min(sites.len().div_ceil(per_day));
        let without = plan(sites.clone(), days, per_day, false);
        let with = plan(sites, days, per_day, true);
        prop_assert_eq!(with.len(), without.len() + populated);
        let rest_stops = with.iter().filter(|w| w.is_rest_stop()).count();
        prop_assert_eq!(rest_stops, populated);
    }
}

//! Trip planning requests.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use thiserror::Error;

use crate::{Category, CityName, SiteOrder};

/// Accepted number of trip days.
pub const NUM_DAYS_RANGE: RangeInclusive<u8> = 1..=10;

/// Accepted number of sites per day.
pub const SITES_PER_DAY_RANGE: RangeInclusive<u8> = 1..=20;

/// Validation failures for [`TripRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripRequestError {
    /// The number of days fell outside [`NUM_DAYS_RANGE`].
    #[error("number of days must be between 1 and 10, got {0}")]
    NumDays(u8),
    /// The number of sites per day fell outside [`SITES_PER_DAY_RANGE`].
    #[error("sites per day must be between 1 and 20, got {0}")]
    SitesPerDay(u8),
}

/// Everything needed to plan one trip.
///
/// Requests are immutable once validated. An empty category set is legal
/// and plans a trip with no sites.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use waypath_core::{Category, CityName, TripRequest};
///
/// let request = TripRequest::new(
///     BTreeSet::from([Category::Nature]),
///     CityName::Jeddah,
///     CityName::AlMadinah,
///     3,
///     5,
/// )?
/// .with_rest_stop(true);
///
/// assert_eq!(request.num_days(), 3);
/// assert!(request.include_rest_stop());
/// # Ok::<(), waypath_core::TripRequestError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTripRequest"))]
pub struct TripRequest {
    categories: BTreeSet<Category>,
    start: CityName,
    end: CityName,
    num_days: u8,
    sites_per_day: u8,
    include_rest_stop: bool,
    order: SiteOrder,
}

impl TripRequest {
    /// Validate and construct a request without rest stops, keeping the
    /// site layer order.
    ///
    /// # Errors
    ///
    /// Returns [`TripRequestError`] when `num_days` or `sites_per_day` is
    /// out of range.
    pub fn new(
        categories: BTreeSet<Category>,
        start: CityName,
        end: CityName,
        num_days: u8,
        sites_per_day: u8,
    ) -> Result<Self, TripRequestError> {
        if !NUM_DAYS_RANGE.contains(&num_days) {
            return Err(TripRequestError::NumDays(num_days));
        }
        if !SITES_PER_DAY_RANGE.contains(&sites_per_day) {
            return Err(TripRequestError::SitesPerDay(sites_per_day));
        }
        Ok(Self {
            categories,
            start,
            end,
            num_days,
            sites_per_day,
            include_rest_stop: false,
            order: SiteOrder::Input,
        })
    }

    /// Request a rest stop in the middle of each day.
    #[must_use]
    pub const fn with_rest_stop(mut self, include: bool) -> Self {
        self.include_rest_stop = include;
        self
    }

    /// Choose how selected sites are ordered before day assignment.
    #[must_use]
    pub const fn with_order(mut self, order: SiteOrder) -> Self {
        self.order = order;
        self
    }

    /// Requested site categories.
    #[must_use]
    pub const fn categories(&self) -> &BTreeSet<Category> {
        &self.categories
    }

    /// Starting city.
    #[must_use]
    pub const fn start(&self) -> CityName {
        self.start
    }

    /// Destination city.
    #[must_use]
    pub const fn end(&self) -> CityName {
        self.end
    }

    /// Number of trip days.
    #[must_use]
    pub const fn num_days(&self) -> u8 {
        self.num_days
    }

    /// Maximum number of sites visited per day.
    #[must_use]
    pub const fn sites_per_day(&self) -> u8 {
        self.sites_per_day
    }

    /// Whether each day gets a rest stop.
    #[must_use]
    pub const fn include_rest_stop(&self) -> bool {
        self.include_rest_stop
    }

    /// Ordering applied to the selection.
    #[must_use]
    pub const fn order(&self) -> SiteOrder {
        self.order
    }
}

/// Unvalidated wire form of [`TripRequest`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTripRequest {
    #[serde(default)]
    categories: BTreeSet<Category>,
    start: CityName,
    end: CityName,
    num_days: u8,
    sites_per_day: u8,
    #[serde(default)]
    include_rest_stop: bool,
    #[serde(default)]
    order: SiteOrder,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTripRequest> for TripRequest {
    type Error = TripRequestError;

    fn try_from(raw: RawTripRequest) -> Result<Self, Self::Error> {
        Ok(Self::new(
            raw.categories,
            raw.start,
            raw.end,
            raw.num_days,
            raw.sites_per_day,
        )?
        .with_rest_stop(raw.include_rest_stop)
        .with_order(raw.order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request(days: u8, per_day: u8) -> Result<TripRequest, TripRequestError> {
        TripRequest::new(
            BTreeSet::from([Category::Culture]),
            CityName::Badr,
            CityName::Khaybar,
            days,
            per_day,
        )
    }

    #[rstest]
    #[case(1, 1)]
    #[case(10, 20)]
    fn accepts_boundary_values(#[case] days: u8, #[case] per_day: u8) {
        assert!(request(days, per_day).is_ok());
    }

    #[rstest]
    #[case(0, 5, TripRequestError::NumDays(0))]
    #[case(11, 5, TripRequestError::NumDays(11))]
    #[case(3, 0, TripRequestError::SitesPerDay(0))]
    #[case(3, 21, TripRequestError::SitesPerDay(21))]
    fn rejects_out_of_range_values(
        #[case] days: u8,
        #[case] per_day: u8,
        #[case] expected: TripRequestError,
    ) {
        assert_eq!(request(days, per_day), Err(expected));
    }

    #[rstest]
    fn defaults_to_input_order_without_rest_stop() {
        let request = request(2, 2).expect("valid request");
        assert!(!request.include_rest_stop());
        assert_eq!(request.order(), SiteOrder::Input);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialising_validates_ranges() {
        let json = r#"{"start":"Badr","end":"Al-Ula","num_days":0,"sites_per_day":3}"#;
        let err = serde_json::from_str::<TripRequest>(json).unwrap_err();
        assert!(err.to_string().contains("number of days"));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialises_wire_names() {
        let json = r#"{
            "categories": ["Nature", "Culture"],
            "start": "Yanbu Al-Bahr",
            "end": "Al Ha'et",
            "num_days": 2,
            "sites_per_day": 4,
            "include_rest_stop": true,
            "order": "along-route"
        }"#;
        let request: TripRequest = serde_json::from_str(json).expect("valid request");
        assert_eq!(request.start(), CityName::YanbuAlBahr);
        assert_eq!(request.end(), CityName::AlHaet);
        assert_eq!(request.categories().len(), 2);
        assert_eq!(request.order(), SiteOrder::AlongRoute);
        assert!(request.include_rest_stop());
    }
}

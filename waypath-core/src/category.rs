//! Categories used to classify tourism sites.
//!
//! The set is closed so that a misspelt category is rejected when it is
//! parsed rather than silently matching nothing during selection.
//!
//! # Examples
//! ```
//! use waypath_core::Category;
//!
//! assert_eq!(Category::Nature.as_str(), "Nature");
//! assert_eq!("culture".parse::<Category>(), Ok(Category::Culture));
//! ```

use std::collections::BTreeSet;

use thiserror::Error;

/// Broad classification of a tourism site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Outdoor and thrill-seeking activities.
    Adventure,
    /// Heritage, museums and historic landmarks.
    Culture,
    /// Landscapes, parks and natural reserves.
    Nature,
    /// Traveller services such as accommodation and fuel.
    Services,
    /// Eco-tourism and sustainability projects.
    Sustainability,
}

/// Error returned when a category name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{name}'")]
pub struct UnknownCategory {
    /// The rejected input.
    pub name: String,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 5] = [
        Self::Adventure,
        Self::Culture,
        Self::Nature,
        Self::Services,
        Self::Sustainability,
    ];

    /// Return the display name used by the site layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adventure => "Adventure",
            Self::Culture => "Culture",
            Self::Nature => "Nature",
            Self::Services => "Services",
            Self::Sustainability => "Sustainability",
        }
    }

    /// Parse a comma-separated list such as `"nature, culture"`.
    ///
    /// Blank entries are ignored, so an empty string yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownCategory`] for the first entry that does not name a
    /// category.
    ///
    /// # Examples
    /// ```
    /// use waypath_core::Category;
    ///
    /// let set = Category::parse_list("Nature,culture").unwrap();
    /// assert_eq!(set.len(), 2);
    /// assert!(Category::parse_list("").unwrap().is_empty());
    /// ```
    pub fn parse_list(list: &str) -> Result<BTreeSet<Self>, UnknownCategory> {
        list.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(str::parse::<Self>)
            .collect()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory {
                name: s.to_owned(),
            })
    }
}

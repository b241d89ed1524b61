//! Selection state
//!
//! Ephemeral listing state: which category is selected. The selection
//! round-trips through the `category=<slug-or-id>` URL query parameter so
//! pre-filtered listings can be deep-linked.

use std::fmt;

/// Query parameter value meaning "no category filtering".
pub const ALL_SENTINEL: &str = "All";

/// The category portion of the listing selection state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategorySelection {
    /// No category filtering
    #[default]
    All,

    /// A category id or slug
    Key(String),
}

impl CategorySelection {
    /// Parse the raw value of the `category` query parameter.
    ///
    /// The `All` sentinel and an empty value both mean no filtering.
    #[must_use]
    pub fn from_query_param(value: &str) -> Self {
        if value.is_empty() || value == ALL_SENTINEL {
            Self::All
        } else {
            Self::Key(value.to_string())
        }
    }

    /// Render back to the `category` query parameter value.
    #[must_use]
    pub fn as_query_param(&self) -> &str {
        match self {
            Self::All => ALL_SENTINEL,
            Self::Key(key) => key,
        }
    }

    /// Whether this selection filters at all.
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_param())
    }
}

impl From<&str> for CategorySelection {
    fn from(value: &str) -> Self {
        Self::from_query_param(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_and_empty_mean_all() {
        assert_eq!(
            CategorySelection::from_query_param("All"),
            CategorySelection::All,
            "sentinel should parse to All"
        );
        assert_eq!(
            CategorySelection::from_query_param(""),
            CategorySelection::All,
            "empty value should parse to All"
        );
    }

    #[test]
    fn keys_round_trip_through_the_query_param() {
        let selection = CategorySelection::from_query_param("drills");

        assert_eq!(
            selection,
            CategorySelection::Key("drills".to_string()),
            "non-sentinel values are keys"
        );
        assert_eq!(
            selection.as_query_param(),
            "drills",
            "rendering should restore the raw value"
        );
        assert_eq!(
            CategorySelection::All.as_query_param(),
            "All",
            "All should render as the sentinel"
        );
    }
}

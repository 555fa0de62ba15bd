use std::collections::BTreeSet;

use crate::category::{Category, FacetName};
use crate::models::Filters;

/// Browsing state: the active category, the search term, and the facet
/// selections. Owned by the presentation layer and mutated only through
/// the operations below; the filter engine reads it but never writes it.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserState {
    pub category: Category,
    pub search_term: String,
    pub filters: Filters,
}

impl BrowserState {
    /// Fresh state on the fish tab with no constraints, the guide's
    /// startup view.
    pub fn new() -> Self {
        Self {
            category: Category::Fish,
            search_term: String::new(),
            filters: Filters::new(),
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Insert the value into its facet's selection set, or remove it if
    /// already selected. Toggling the same value twice restores the
    /// previous state.
    pub fn toggle_facet_value(&mut self, value: FacetValue) {
        match value {
            FacetValue::Level(level) => toggle(&mut self.filters.levels, level),
            FacetValue::Weather(weather) => toggle(&mut self.filters.weathers, weather),
            FacetValue::Location(location) => toggle(&mut self.filters.locations, location),
            FacetValue::Shadow(shadow) => toggle(&mut self.filters.shadows, shadow),
        }
    }

    /// Empty every facet set. The search term is left alone.
    pub fn clear_all_filters(&mut self) {
        self.filters.clear();
    }

    /// Switch tabs. Facet selections belong to the old category's
    /// vocabulary and are dropped; a stale selection would otherwise
    /// silently filter the new collection down to nothing. The search
    /// term carries over.
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        self.filters.clear();
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new()
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

/// One selectable facet value. The facet is part of the type, so a toggle
/// can never address a facet that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacetValue {
    Level(u32),
    Weather(String),
    Location(String),
    Shadow(String),
}

impl FacetValue {
    /// Parse a selection from its textual `facet`/`value` form. An unknown
    /// facet name or a non-numeric level is a caller error, reported
    /// loudly rather than ignored.
    pub fn parse(name: &str, raw: &str) -> Result<FacetValue, String> {
        let facet: FacetName = name.parse()?;
        match facet {
            FacetName::Level => raw
                .parse::<u32>()
                .map(FacetValue::Level)
                .map_err(|_| format!("level must be a positive integer, got '{}'", raw)),
            FacetName::Weather => Ok(FacetValue::Weather(raw.to_string())),
            FacetName::Location => Ok(FacetValue::Location(raw.to_string())),
            FacetName::Shadow => Ok(FacetValue::Shadow(raw.to_string())),
        }
    }
}

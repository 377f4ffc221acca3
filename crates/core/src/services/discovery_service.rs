use std::cmp::Ordering;

use crate::models::fund::{FundListing, FundQuery, FundSortKey};

/// Filters, searches and sorts the fund catalog for the discovery section.
pub struct DiscoveryService {
    suggested_count: usize,
}

impl DiscoveryService {
    pub fn new(suggested_count: usize) -> Self {
        Self { suggested_count }
    }

    /// Apply `query` to `funds`.
    ///
    /// With no type filter and no search term only the first
    /// `suggested_count` results are returned. The default sort keeps
    /// catalog order, so the suggestions are the head of the catalog.
    pub fn discover(&self, funds: &[FundListing], query: &FundQuery) -> Vec<FundListing> {
        let scheme_type = query
            .scheme_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty() && !t.eq_ignore_ascii_case("all"));
        let needle = query
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let mut matches: Vec<FundListing> = funds
            .iter()
            .filter(|f| scheme_type.map_or(true, |t| f.scheme_type.eq_ignore_ascii_case(t)))
            .filter(|f| needle.as_deref().map_or(true, |n| Self::matches_search(f, n)))
            .cloned()
            .collect();

        // sort_by is stable, so equal keys keep catalog order
        matches.sort_by(|a, b| Self::compare(a, b, query.sort_by));

        if query.is_unfiltered() {
            matches.truncate(self.suggested_count);
        }
        matches
    }

    fn matches_search(fund: &FundListing, needle: &str) -> bool {
        [
            &fund.scheme_name,
            &fund.category,
            &fund.scheme_code,
            &fund.amc_code,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
    }

    fn compare(a: &FundListing, b: &FundListing, key: FundSortKey) -> Ordering {
        let desc = |x: f64, y: f64| y.partial_cmp(&x).unwrap_or(Ordering::Equal);
        match key {
            FundSortKey::Catalog => Ordering::Equal,
            FundSortKey::Returns1Y => desc(
                a.nav_1year_return.unwrap_or(0.0),
                b.nav_1year_return.unwrap_or(0.0),
            ),
            FundSortKey::Returns3Y => desc(
                a.nav_3year_return.unwrap_or(0.0),
                b.nav_3year_return.unwrap_or(0.0),
            ),
            FundSortKey::Returns5Y => desc(
                a.nav_5year_return.unwrap_or(0.0),
                b.nav_5year_return.unwrap_or(0.0),
            ),
            FundSortKey::Nav => desc(a.nav_value, b.nav_value),
            FundSortKey::MinInvestment => a
                .min_investment
                .partial_cmp(&b.min_investment)
                .unwrap_or(Ordering::Equal),
            FundSortKey::Name => a
                .scheme_name
                .to_lowercase()
                .cmp(&b.scheme_name.to_lowercase()),
        }
    }
}

impl Default for DiscoveryService {
    fn default() -> Self {
        Self::new(6)
    }
}

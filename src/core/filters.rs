use std::cmp::Ordering;

use crate::models::{OpportunityQuery, OpportunityRecord};

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 100;

/// One page of a filtered catalog listing
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub items: Vec<OpportunityRecord>,
}

/// Check if an opportunity satisfies the location and company constraints
///
/// Both are case-insensitive substring matches; an absent or blank
/// constraint matches everything.
#[inline]
pub fn matches_query(opportunity: &OpportunityRecord, query: &OpportunityQuery) -> bool {
    contains_ignore_case(&opportunity.location, query.location.as_deref())
        && contains_ignore_case(&opportunity.company, query.company.as_deref())
}

fn contains_ignore_case(field: &str, needle: Option<&str>) -> bool {
    match needle.map(str::trim) {
        None | Some("") => true,
        Some(needle) => field.to_lowercase().contains(&needle.to_lowercase()),
    }
}

/// Filter, order and paginate a catalog snapshot.
///
/// Newest `createdAt` first; records without a timestamp go last and keep
/// catalog order among themselves. `limit` is clamped to 1..=100 (0 means the
/// default of 20) and `page` is at least 1.
pub fn filter_catalog(catalog: &[OpportunityRecord], query: &OpportunityQuery) -> CatalogPage {
    let limit = match query.limit {
        0 => DEFAULT_PAGE_SIZE,
        n => n.min(MAX_PAGE_SIZE),
    };
    let page = query.page.max(1);

    let mut matching: Vec<&OpportunityRecord> = catalog
        .iter()
        .filter(|opportunity| matches_query(opportunity, query))
        .collect();

    matching.sort_by(|a, b| match (&a.created_at, &b.created_at) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    let total = matching.len();
    let total_pages = total.div_ceil(limit);

    let items = matching
        .into_iter()
        .skip((page - 1).saturating_mul(limit))
        .take(limit)
        .cloned()
        .collect();

    CatalogPage {
        total,
        page,
        total_pages,
        items,
    }
}

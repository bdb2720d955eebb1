//! Library reports.

use super::catalog::Catalog;
use super::types::{Book, LoanRequest};
use crate::dispatch::DispatchOutcome;
use crate::error::{DispatchError, Result};
use crate::record::Timestamp;
use crate::traversal::{reachable_in_order, TraversalConfig};

/// Hop limit the recommendation report uses when the caller has no
/// preference. Shallower than [`TraversalConfig::default`].
pub const DEFAULT_RECOMMENDATION_DEPTH: usize = 2;

/// Number of books listed by [`catalog_report`] when no limit is given.
pub const DEFAULT_CATALOG_REPORT_LIMIT: usize = 50;

/// One processed request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoanReportEntry {
    pub request_id: String,
    pub priority: i64,
    pub timestamp: Timestamp,
    pub book_id: String,
    pub outcome: Option<DispatchOutcome>,
    pub user_id: String,
    pub kind: String,
}

/// Processed requests in dispatch order.
pub fn loan_report(processed: &[LoanRequest]) -> Vec<LoanReportEntry> {
    processed
        .iter()
        .map(|r| LoanReportEntry {
            request_id: r.id.clone(),
            priority: r.priority,
            timestamp: r.timestamp,
            book_id: r.book_id.clone(),
            outcome: r.outcome,
            user_id: r.user_id.clone(),
            kind: r.kind.clone(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendedBook {
    pub id: String,
    pub title: String,
    pub year: i32,
}

/// Books reachable from an origin through recommendation links.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendationReport {
    pub origin_id: String,
    pub origin_title: String,
    pub depth: usize,
    /// In discovery order.
    pub recommendations: Vec<RecommendedBook>,
    pub total: usize,
}

/// Explores recommendations of `book_id` up to `config.max_depth` hops.
///
/// The usual report depth is [`DEFAULT_RECOMMENDATION_DEPTH`]:
///
/// ```
/// use u_dispatch::library::{recommendation_report, Book, Catalog, DEFAULT_RECOMMENDATION_DEPTH};
/// use u_dispatch::traversal::TraversalConfig;
///
/// let catalog: Catalog = vec![
///     Book::new("A", "Dune", 1965).with_recommendation("B"),
///     Book::new("B", "Hyperion", 1989),
/// ]
/// .into_iter()
/// .collect();
/// let config = TraversalConfig::default().with_max_depth(DEFAULT_RECOMMENDATION_DEPTH);
/// let report = recommendation_report(&catalog, "A", &config).unwrap();
/// assert_eq!(report.total, 1);
/// ```
///
/// # Errors
///
/// Returns [`DispatchError::UnknownRecord`] if `book_id` is not in the
/// catalog, and in strict mode any error of
/// [`reachable_with`](crate::traversal::reachable_with).
pub fn recommendation_report(
    catalog: &Catalog,
    book_id: &str,
    config: &TraversalConfig,
) -> Result<RecommendationReport> {
    let origin = catalog
        .get(book_id)
        .ok_or_else(|| DispatchError::UnknownRecord(book_id.to_string()))?;

    let recommendations: Vec<RecommendedBook> = reachable_in_order(book_id, catalog, config)?
        .iter()
        .filter_map(|id| catalog.get(id))
        .map(|b| RecommendedBook {
            id: b.id.clone(),
            title: b.title.clone(),
            year: b.year,
        })
        .collect();

    Ok(RecommendationReport {
        origin_id: origin.id.clone(),
        origin_title: origin.title.clone(),
        depth: config.max_depth,
        total: recommendations.len(),
        recommendations,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub available_copies: u32,
}

/// The first `limit` books of an already sorted catalog, or the first
/// [`DEFAULT_CATALOG_REPORT_LIMIT`] when `limit` is `None`.
pub fn catalog_report(sorted: &[Book], limit: Option<usize>) -> Vec<CatalogEntry> {
    sorted
        .iter()
        .take(limit.unwrap_or(DEFAULT_CATALOG_REPORT_LIMIT))
        .map(|b| CatalogEntry {
            id: b.id.clone(),
            title: b.title.clone(),
            year: b.year,
            available_copies: b.available_copies,
        })
        .collect()
}

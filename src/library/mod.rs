//! Library loan scenario.
//!
//! Loan requests are dispatched by priority against a [`Catalog`] whose
//! per-book copy counter is the shared resource. Books link to each other
//! through recommendations, forming a possibly cyclic graph explored by
//! [`recommendation_report`].

mod catalog;
mod handler;
mod order;
mod report;
mod types;

pub use catalog::{Admission, Catalog};
pub use handler::LoanHandler;
pub use order::{CatalogCriterion, CatalogOrder};
pub use report::{
    catalog_report, loan_report, recommendation_report, CatalogEntry, LoanReportEntry,
    RecommendationReport, RecommendedBook, DEFAULT_CATALOG_REPORT_LIMIT,
    DEFAULT_RECOMMENDATION_DEPTH,
};
pub use types::{Book, LoanRequest};

//! Dispatch side effect for loan requests.

use super::catalog::Catalog;
use super::types::LoanRequest;
use crate::dispatch::{DispatchHandler, DispatchOutcome};
use crate::record::Timestamp;

/// Checks out the requested book from the catalog.
pub struct LoanHandler<'a> {
    catalog: &'a mut Catalog,
}

impl<'a> LoanHandler<'a> {
    pub fn new(catalog: &'a mut Catalog) -> Self {
        Self { catalog }
    }
}

impl DispatchHandler<LoanRequest> for LoanHandler<'_> {
    fn name(&self) -> &str {
        "library"
    }

    fn dispatch(&mut self, request: &mut LoanRequest, _at: Timestamp) -> DispatchOutcome {
        let outcome = self.catalog.checkout(&request.book_id);
        request.outcome = Some(outcome);
        outcome
    }
}

//! Book catalog.

use std::collections::HashMap;

use super::order::{CatalogCriterion, CatalogOrder};
use super::types::{Book, LoanRequest};
use crate::dispatch::DispatchOutcome;
use crate::error::Result;
use crate::queue::{load_batch, PriorityQueue};
use crate::sorting::{SortAlgorithm, SortEngine, SortOutcome};
use crate::traversal::LinkGraph;

/// Books keyed by id, iterated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Vec<Book>,
    index: HashMap<String, usize>,
}

/// Requests accepted into the dispatch queue, plus those that were
/// rejected because their book is not in the catalog.
#[derive(Debug)]
pub struct Admission {
    pub queue: PriorityQueue<LoanRequest>,
    pub skipped: Vec<LoanRequest>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Inserts a book, replacing (in place) any book with the same id.
    pub fn insert(&mut self, book: Book) -> Option<Book> {
        match self.index.get(&book.id) {
            Some(&pos) => Some(std::mem::replace(&mut self.books[pos], book)),
            None => {
                self.index.insert(book.id.clone(), self.books.len());
                self.books.push(book);
                None
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Book> {
        self.index.get(id).map(|&pos| &self.books[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Books in insertion order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn iter(&self) -> impl Iterator<Item = &Book> {
        self.books.iter()
    }

    /// Lends one copy of `book_id` if any is left.
    ///
    /// The availability check and the decrement happen together, so the
    /// counter can never go below zero. Unknown ids have no availability.
    pub fn checkout(&mut self, book_id: &str) -> DispatchOutcome {
        let Some(&pos) = self.index.get(book_id) else {
            return DispatchOutcome::NoAvailability;
        };
        let book = &mut self.books[pos];
        match book.available_copies.checked_sub(1) {
            Some(left) => {
                book.available_copies = left;
                DispatchOutcome::Success
            }
            None => DispatchOutcome::NoAvailability,
        }
    }

    /// Queues requests for known books and sets the rest aside.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::AlreadyDispatched`](crate::DispatchError::AlreadyDispatched)
    /// if an accepted request was already processed.
    pub fn admit_requests<I>(&self, requests: I) -> Result<Admission>
    where
        I: IntoIterator<Item = LoanRequest>,
    {
        let (accepted, skipped): (Vec<_>, Vec<_>) = requests
            .into_iter()
            .partition(|r| self.contains(&r.book_id));

        for request in &skipped {
            tracing::warn!(
                request = %request.id,
                book = %request.book_id,
                "book not found in catalog, skipping request"
            );
        }

        let queue = load_batch(accepted)?;
        tracing::info!(
            queued = queue.len(),
            skipped = skipped.len(),
            "admitted loan requests"
        );
        Ok(Admission { queue, skipped })
    }

    /// Sorts a copy of the catalog.
    pub fn sorted(&self, criterion: CatalogCriterion, algorithm: SortAlgorithm) -> SortOutcome<Book> {
        SortEngine::sort(&self.books, algorithm, &CatalogOrder::new(criterion))
    }

    /// Sorts a copy of the catalog, selecting criterion and algorithm by name.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnsupportedCriterion`](crate::DispatchError::UnsupportedCriterion)
    /// or [`DispatchError::UnsupportedAlgorithm`](crate::DispatchError::UnsupportedAlgorithm)
    /// for unknown names.
    pub fn sorted_by_name(&self, criterion: &str, algorithm: &str) -> Result<SortOutcome<Book>> {
        let criterion: CatalogCriterion = criterion.parse()?;
        let algorithm: SortAlgorithm = algorithm.parse()?;
        Ok(self.sorted(criterion, algorithm))
    }
}

impl FromIterator<Book> for Catalog {
    fn from_iter<I: IntoIterator<Item = Book>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for book in iter {
            catalog.insert(book);
        }
        catalog
    }
}

impl LinkGraph for Catalog {
    fn contains(&self, id: &str) -> bool {
        Catalog::contains(self, id)
    }

    fn links(&self, id: &str) -> Option<&[String]> {
        self.get(id).map(|b| b.recommendations.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DispatchError;
    use crate::traversal::reachable_set;
    use chrono::DateTime;

    fn catalog() -> Catalog {
        vec![
            Book::new("B1", "Neuromancer", 1984)
                .with_copies(1)
                .with_recommendation("B2"),
            Book::new("B2", "Count Zero", 1986).with_recommendation("B3"),
            Book::new("B3", "Mona Lisa Overdrive", 1988)
                .with_copies(2)
                .with_recommendation("B1")
                .with_recommendation("B404"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut cat = catalog();
        let old = cat.insert(Book::new("B2", "Count Zero (2nd ed.)", 1987));
        assert_eq!(old.unwrap().year, 1986);
        assert_eq!(cat.len(), 3);
        assert_eq!(cat.books()[1].title, "Count Zero (2nd ed.)");
    }

    #[test]
    fn test_checkout_never_goes_negative() {
        let mut cat = catalog();
        assert_eq!(cat.checkout("B1"), DispatchOutcome::Success);
        assert_eq!(cat.checkout("B1"), DispatchOutcome::NoAvailability);
        assert_eq!(cat.get("B1").unwrap().available_copies, 0);
        assert_eq!(cat.checkout("B404"), DispatchOutcome::NoAvailability);
    }

    #[test]
    fn test_admit_skips_unknown_books() {
        let cat = catalog();
        let ts = DateTime::from_timestamp(0, 0).unwrap();
        let admission = cat
            .admit_requests(vec![
                LoanRequest::new("S1", "U1", "B1", 1, ts),
                LoanRequest::new("S2", "U2", "B999", 1, ts),
            ])
            .unwrap();

        assert_eq!(admission.queue.len(), 1);
        assert_eq!(admission.skipped.len(), 1);
        assert_eq!(admission.skipped[0].id, "S2");
    }

    #[test]
    fn test_sorted_by_name() {
        let cat = catalog();
        let by_title = cat.sorted_by_name("title", "mergesort").unwrap();
        let titles: Vec<&str> = by_title.records.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Count Zero", "Mona Lisa Overdrive", "Neuromancer"]);

        assert_eq!(
            cat.sorted_by_name("isbn", "mergesort").unwrap_err(),
            DispatchError::UnsupportedCriterion("isbn".into())
        );
        assert_eq!(
            cat.sorted_by_name("year", "shellsort").unwrap_err(),
            DispatchError::UnsupportedAlgorithm("shellsort".into())
        );
    }

    #[test]
    fn test_catalog_as_link_graph() {
        let cat = catalog();
        let reached = reachable_set("B1", &cat, 5);
        assert_eq!(reached.len(), 2);
        assert!(reached.contains("B2") && reached.contains("B3"));
    }
}

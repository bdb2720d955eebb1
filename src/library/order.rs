//! Catalog ordering criteria.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::types::Book;
use crate::error::DispatchError;
use crate::ordering::RecordOrder;

/// Primary field used to order the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CatalogCriterion {
    /// Title, then year, then id.
    Title,
    /// Year, then title, then id.
    Year,
}

impl CatalogCriterion {
    pub fn as_str(self) -> &'static str {
        match self {
            CatalogCriterion::Title => "title",
            CatalogCriterion::Year => "year",
        }
    }
}

impl fmt::Display for CatalogCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogCriterion {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(CatalogCriterion::Title),
            "year" => Ok(CatalogCriterion::Year),
            other => Err(DispatchError::UnsupportedCriterion(other.to_string())),
        }
    }
}

/// Total order over books for a [`CatalogCriterion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOrder {
    pub criterion: CatalogCriterion,
}

impl CatalogOrder {
    pub fn new(criterion: CatalogCriterion) -> Self {
        Self { criterion }
    }
}

impl RecordOrder<Book> for CatalogOrder {
    fn name(&self) -> &str {
        self.criterion.as_str()
    }

    fn compare(&self, a: &Book, b: &Book) -> Ordering {
        let primary = match self.criterion {
            CatalogCriterion::Title => a.title.cmp(&b.title).then(a.year.cmp(&b.year)),
            CatalogCriterion::Year => a.year.cmp(&b.year).then_with(|| a.title.cmp(&b.title)),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

//! Catalog and request records.

use crate::dispatch::DispatchOutcome;
use crate::record::{Dispatchable, Prioritized, Timestamp};

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Book {
    pub id: String,
    pub title: String,
    pub year: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub popularity: u32,
    /// Ids of recommended books. May dangle or form cycles.
    #[cfg_attr(feature = "serde", serde(default))]
    pub recommendations: Vec<String>,
    /// Copies that can still be lent. Never negative.
    #[cfg_attr(feature = "serde", serde(default))]
    pub available_copies: u32,
}

impl Book {
    pub fn new(id: impl Into<String>, title: impl Into<String>, year: i32) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year,
            popularity: 0,
            recommendations: Vec::new(),
            available_copies: 0,
        }
    }

    pub fn with_copies(mut self, copies: u32) -> Self {
        self.available_copies = copies;
        self
    }

    pub fn with_popularity(mut self, popularity: u32) -> Self {
        self.popularity = popularity;
        self
    }

    pub fn with_recommendation(mut self, id: impl Into<String>) -> Self {
        self.recommendations.push(id.into());
        self
    }
}

/// A request to borrow a book.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoanRequest {
    pub id: String,
    pub user_id: String,
    pub book_id: String,
    /// Lower is served first.
    pub priority: i64,
    pub timestamp: Timestamp,
    /// Request type, `"loan"` unless stated otherwise.
    #[cfg_attr(feature = "serde", serde(default = "default_kind"))]
    pub kind: String,
    /// Set once by the dispatch engine.
    #[cfg_attr(feature = "serde", serde(default))]
    pub outcome: Option<DispatchOutcome>,
}

#[cfg(feature = "serde")]
fn default_kind() -> String {
    "loan".to_string()
}

impl LoanRequest {
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        book_id: impl Into<String>,
        priority: i64,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            book_id: book_id.into(),
            priority,
            timestamp,
            kind: "loan".to_string(),
            outcome: None,
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }
}

impl Prioritized for LoanRequest {
    fn id(&self) -> &str {
        &self.id
    }

    fn priority(&self) -> i64 {
        self.priority
    }

    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

impl Dispatchable for LoanRequest {
    fn is_dispatched(&self) -> bool {
        self.outcome.is_some()
    }
}

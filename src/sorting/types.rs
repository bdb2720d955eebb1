//! Algorithm selection.

use std::fmt;
use std::str::FromStr;

use crate::error::DispatchError;

/// Available report sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortAlgorithm {
    /// Iterative quicksort with Lomuto partitioning.
    Quicksort,
    /// Recursive top-down merge sort.
    Mergesort,
    /// The standard library's stable sort.
    Baseline,
}

/// Algorithmic properties reported alongside timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmProfile {
    pub stable: bool,
    pub average: &'static str,
    pub worst_case: &'static str,
    pub auxiliary_space: &'static str,
}

impl SortAlgorithm {
    /// All algorithms, in reporting order.
    pub const ALL: [SortAlgorithm; 3] = [
        SortAlgorithm::Quicksort,
        SortAlgorithm::Mergesort,
        SortAlgorithm::Baseline,
    ];

    /// Canonical name accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            SortAlgorithm::Quicksort => "quicksort",
            SortAlgorithm::Mergesort => "mergesort",
            SortAlgorithm::Baseline => "baseline",
        }
    }

    pub fn is_stable(self) -> bool {
        self.profile().stable
    }

    pub fn profile(self) -> AlgorithmProfile {
        match self {
            SortAlgorithm::Quicksort => AlgorithmProfile {
                stable: false,
                average: "O(n log n)",
                worst_case: "O(n^2)",
                auxiliary_space: "O(log n) range stack, O(n) worst",
            },
            SortAlgorithm::Mergesort => AlgorithmProfile {
                stable: true,
                average: "O(n log n)",
                worst_case: "O(n log n)",
                auxiliary_space: "O(n)",
            },
            SortAlgorithm::Baseline => AlgorithmProfile {
                stable: true,
                average: "O(n log n)",
                worst_case: "O(n log n)",
                auxiliary_space: "O(n)",
            },
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortAlgorithm {
    type Err = DispatchError;

    /// Parses an algorithm name. `timsort` is accepted as an alias of
    /// `baseline`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quicksort" => Ok(SortAlgorithm::Quicksort),
            "mergesort" => Ok(SortAlgorithm::Mergesort),
            "baseline" | "timsort" => Ok(SortAlgorithm::Baseline),
            other => Err(DispatchError::UnsupportedAlgorithm(other.to_string())),
        }
    }
}

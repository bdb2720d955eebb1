//! Interchangeable report sorters.
//!
//! Three independently implemented algorithms realize the same
//! [`RecordOrder`](crate::ordering::RecordOrder) so their behavior and
//! running time can be compared on identical input:
//!
//! | Algorithm   | Stable | Average    | Worst      | Aux. space |
//! |-------------|--------|------------|------------|------------|
//! | `quicksort` | no     | O(n log n) | O(n²)      | O(log n)*  |
//! | `mergesort` | yes    | O(n log n) | O(n log n) | O(n)       |
//! | `baseline`  | yes    | O(n log n) | O(n log n) | O(n)       |
//!
//! \* range stack; degrades with unbalanced partitions.
//!
//! Quicksort uses a Lomuto partition with the last element as pivot and
//! no randomization, so already-sorted input hits the quadratic case.
//! Under a total order all three produce identical output.

mod config;
mod engine;
mod mergesort;
mod quicksort;
mod types;

pub use config::ReportConfig;
pub use engine::{SortComparison, SortEngine, SortOutcome};
pub use mergesort::mergesort;
pub use quicksort::quicksort;
pub use types::{AlgorithmProfile, SortAlgorithm};

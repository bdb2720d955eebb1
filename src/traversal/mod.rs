//! Bounded traversal over record hierarchies and link graphs.
//!
//! Two shapes share one contract (explicit work-lists, no call-stack
//! recursion, deterministic visit order):
//!
//! - **Tree flattening** ([`flatten_tree`], [`FlattenIter`]): pre-order
//!   linearization of nested subtasks, each annotated with the `/`-joined
//!   path of 0-based child indices from the root.
//! - **Reachability** ([`reachable_set`], [`reachable_with`]): distinct
//!   nodes reachable from an origin within `max_depth` hops over a
//!   possibly cyclic [`LinkGraph`]. A node is expanded at most once.
//!
//! Dangling links are skipped unless [`TraversalConfig::strict`] is set.

mod config;
mod flatten;
mod reach;

pub use config::TraversalConfig;
pub use flatten::{flatten_tree, FlatSubtask, FlattenIter, TaskNode};
pub use reach::{reachable_in_order, reachable_set, reachable_with, LinkGraph};

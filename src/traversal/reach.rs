//! Depth-bounded reachability over link graphs.
//!
//! # Visit order
//!
//! Exploration is depth-first over each node's links in their stored
//! order, using an explicit frame stack `(node, depth, next_link)`. A
//! node is added to the result the first time it is seen and is never
//! expanded again, even if a later path reaches it in fewer hops. The
//! result therefore matches a recursive DFS that shares one visited set.

use std::collections::{HashMap, HashSet};

use super::config::TraversalConfig;
use crate::error::{DispatchError, Result};

/// A directed graph over string identifiers.
pub trait LinkGraph {
    /// Whether `id` is a node of the graph.
    fn contains(&self, id: &str) -> bool;

    /// Outgoing links of `id`, or `None` if `id` is unknown.
    fn links(&self, id: &str) -> Option<&[String]>;
}

impl LinkGraph for HashMap<String, Vec<String>> {
    fn contains(&self, id: &str) -> bool {
        self.contains_key(id)
    }

    fn links(&self, id: &str) -> Option<&[String]> {
        self.get(id).map(Vec::as_slice)
    }
}

/// Returns the distinct nodes reachable from `origin` within
/// `max_depth` hops, excluding `origin` itself.
///
/// Dangling links and an unknown origin are tolerated: they contribute
/// nothing to the result.
pub fn reachable_set<G: LinkGraph + ?Sized>(
    origin: &str,
    graph: &G,
    max_depth: usize,
) -> HashSet<String> {
    // Non-strict exploration has no failure path.
    explore(origin, graph, max_depth, false)
        .unwrap_or_default()
        .into_iter()
        .collect()
}

/// Like [`reachable_set`], honoring [`TraversalConfig::strict`].
///
/// # Errors
///
/// In strict mode, returns [`DispatchError::UnknownRecord`] if `origin`
/// is not in the graph and [`DispatchError::MissingReference`] on the
/// first dangling link encountered.
pub fn reachable_with<G: LinkGraph + ?Sized>(
    origin: &str,
    graph: &G,
    config: &TraversalConfig,
) -> Result<HashSet<String>> {
    Ok(explore(origin, graph, config.max_depth, config.strict)?
        .into_iter()
        .collect())
}

/// Reachable nodes in discovery order.
///
/// # Errors
///
/// Same as [`reachable_with`].
pub fn reachable_in_order<G: LinkGraph + ?Sized>(
    origin: &str,
    graph: &G,
    config: &TraversalConfig,
) -> Result<Vec<String>> {
    explore(origin, graph, config.max_depth, config.strict)
}

fn explore<G: LinkGraph + ?Sized>(
    origin: &str,
    graph: &G,
    max_depth: usize,
    strict: bool,
) -> Result<Vec<String>> {
    if !graph.contains(origin) {
        if strict {
            return Err(DispatchError::UnknownRecord(origin.to_string()));
        }
        return Ok(Vec::new());
    }

    let mut visited: HashSet<&str> = HashSet::from([origin]);
    let mut found: Vec<String> = Vec::new();
    if max_depth == 0 {
        return Ok(found);
    }

    let mut stack: Vec<(&str, usize, usize)> = vec![(origin, 0, 0)];
    while let Some(&(node, depth, next)) = stack.last() {
        let links = graph.links(node).unwrap_or_default();
        let Some(target) = links.get(next) else {
            stack.pop();
            continue;
        };
        if let Some(top) = stack.last_mut() {
            top.2 += 1;
        }

        if visited.contains(target.as_str()) {
            continue;
        }
        if !graph.contains(target) {
            if strict {
                return Err(DispatchError::MissingReference {
                    from: node.to_string(),
                    missing: target.clone(),
                });
            }
            tracing::trace!(from = node, missing = %target, "skipping dangling link");
            continue;
        }

        visited.insert(target.as_str());
        found.push(target.clone());
        if depth + 1 < max_depth {
            stack.push((target.as_str(), depth + 1, 0));
        }
    }

    tracing::debug!(origin, max_depth, reachable = found.len(), "explored links");
    Ok(found)
}

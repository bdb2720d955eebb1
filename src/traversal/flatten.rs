//! Pre-order tree flattening.

/// A node in a subtask tree.
pub trait TaskNode: Sized {
    /// Kind of work this node represents.
    fn kind(&self) -> &str;

    /// Resource estimated for this node.
    fn estimated_resource(&self) -> &str;

    /// Ordered child nodes.
    fn children(&self) -> &[Self];
}

/// One flattened tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatSubtask {
    pub kind: String,
    pub estimated_resource: String,
    /// `/`-joined 0-based child indices from the root, e.g. `"1/0"`.
    pub path: String,
}

/// Pre-order iterator over a forest of [`TaskNode`]s.
///
/// Parents are yielded before their children and siblings in their
/// original order. The iterator is single-pass; build a new one to
/// traverse again.
pub struct FlattenIter<'a, N> {
    // Pending nodes, next to visit on top.
    stack: Vec<(&'a N, String)>,
}

impl<'a, N: TaskNode> FlattenIter<'a, N> {
    pub fn new(roots: &'a [N]) -> Self {
        let stack = roots
            .iter()
            .enumerate()
            .rev()
            .map(|(i, node)| (node, i.to_string()))
            .collect();
        Self { stack }
    }
}

impl<'a, N: TaskNode> Iterator for FlattenIter<'a, N> {
    type Item = FlatSubtask;

    fn next(&mut self) -> Option<FlatSubtask> {
        let (node, path) = self.stack.pop()?;
        for (i, child) in node.children().iter().enumerate().rev() {
            self.stack.push((child, format!("{path}/{i}")));
        }
        Some(FlatSubtask {
            kind: node.kind().to_string(),
            estimated_resource: node.estimated_resource().to_string(),
            path,
        })
    }
}

/// Flattens a forest of subtasks in pre-order.
///
/// An empty forest yields an empty vector. Depth is unbounded.
pub fn flatten_tree<N: TaskNode>(roots: &[N]) -> Vec<FlatSubtask> {
    FlattenIter::new(roots).collect()
}

//! Content tree traversal along an entry path

use crate::node::ContentNode;
use crate::path::PathSegment;

/// Walk `root` along `entry_path` and return the node it ends on.
///
/// Each segment without an index must name a field holding a node; each
/// segment with an index must name an array field whose element at that
/// position is a node. The first hop that cannot be satisfied ends the walk
/// with `None`. An empty entry path returns `root`.
pub fn find_node<N: ContentNode>(root: N, entry_path: &[PathSegment]) -> Option<N> {
    let mut current = root;
    for segment in entry_path {
        let next = match segment.index {
            Some(index) => current.child_at(&segment.name, index),
            None => current.child(&segment.name),
        };
        match next {
            Some(node) => current = node,
            None => {
                tracing::trace!(segment = %segment, "No node at path segment");
                return None;
            }
        }
    }
    Some(current)
}

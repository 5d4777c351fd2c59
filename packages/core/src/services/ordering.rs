//! Sibling Ordering Engine
//!
//! Pure functions that compute dense 1..=N sibling orderings. The service
//! layer feeds these the current sibling set and persists whatever comes
//! back; nothing here touches the store.
//!
//! Three structural changes exist:
//!
//! - **Insertion / arrival**: the node is appended, taking rank max+1
//!   ([`next_ordering`])
//! - **Departure**: handled by the store's `shift_orderings` bulk update
//!   (every sibling past the departure point moves down one)
//! - **Explicit reorder**: the node is spliced out of the sequence and
//!   reinserted at the requested position, then the whole set is renumbered
//!   ([`resequence`])

use crate::models::Node;

/// Rank for a node joining a sibling set: one past the current maximum, or 1
/// for an empty set.
///
/// Used both for fresh creation and for arrival under a new parent.
pub fn next_ordering(siblings: &[Node]) -> i64 {
    siblings.iter().map(|n| n.ordering).max().unwrap_or(0) + 1
}

/// Move `node_id` to the 1-based `position` within its sibling set and
/// renumber everything densely.
///
/// `siblings` must be the full sibling set sorted by current `ordering` and
/// must contain `node_id`. The node is removed from the sequence, reinserted
/// at `position` (clamped to `[1, N]`), and every sibling's `ordering` is
/// rewritten to its new 1-based sequence index. The rewrite covers the whole
/// set even when only a slice of it actually moved.
///
/// Returns the renumbered siblings in sequence order.
pub fn resequence(mut siblings: Vec<Node>, node_id: i64, position: i64) -> Vec<Node> {
    let Some(current) = siblings.iter().position(|n| n.id == node_id) else {
        // Caller guarantees membership; nothing sensible to do otherwise.
        return siblings;
    };
    let node = siblings.remove(current);

    // Clamp the requested position instead of failing; out-of-range input
    // places the node at the nearest end.
    let index = (position.clamp(1, siblings.len() as i64 + 1) - 1) as usize;
    siblings.insert(index, node);

    for (index, sibling) in siblings.iter_mut().enumerate() {
        sibling.ordering = index as i64 + 1;
    }
    siblings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sibling(id: i64, ordering: i64) -> Node {
        Node::new(id, format!("node-{id}"), Some(1), ordering)
    }

    fn ids_and_orderings(nodes: &[Node]) -> Vec<(i64, i64)> {
        nodes.iter().map(|n| (n.id, n.ordering)).collect()
    }

    #[test]
    fn test_next_ordering_empty_set() {
        assert_eq!(next_ordering(&[]), 1);
    }

    #[test]
    fn test_next_ordering_appends_after_max() {
        let siblings = vec![sibling(2, 1), sibling(3, 2)];
        assert_eq!(next_ordering(&siblings), 3);
    }

    #[test]
    fn test_resequence_moves_first_to_last() {
        // [X(1), Y(2), Z(3)], X -> position 3 yields [Y(1), Z(2), X(3)]
        let siblings = vec![sibling(10, 1), sibling(11, 2), sibling(12, 3)];
        let result = resequence(siblings, 10, 3);
        assert_eq!(ids_and_orderings(&result), vec![(11, 1), (12, 2), (10, 3)]);
    }

    #[test]
    fn test_resequence_moves_last_to_first() {
        let siblings = vec![sibling(10, 1), sibling(11, 2), sibling(12, 3)];
        let result = resequence(siblings, 12, 1);
        assert_eq!(ids_and_orderings(&result), vec![(12, 1), (10, 2), (11, 3)]);
    }

    #[test]
    fn test_resequence_same_position_is_identity() {
        let siblings = vec![sibling(10, 1), sibling(11, 2)];
        let result = resequence(siblings, 11, 2);
        assert_eq!(ids_and_orderings(&result), vec![(10, 1), (11, 2)]);
    }

    #[test]
    fn test_resequence_clamps_position_above_range() {
        let siblings = vec![sibling(10, 1), sibling(11, 2), sibling(12, 3)];
        let result = resequence(siblings, 10, 99);
        assert_eq!(ids_and_orderings(&result), vec![(11, 1), (12, 2), (10, 3)]);
    }

    #[test]
    fn test_resequence_clamps_position_below_range() {
        let siblings = vec![sibling(10, 1), sibling(11, 2), sibling(12, 3)];
        let result = resequence(siblings, 12, 0);
        assert_eq!(ids_and_orderings(&result), vec![(12, 1), (10, 2), (11, 3)]);

        let siblings = vec![sibling(10, 1), sibling(11, 2)];
        let result = resequence(siblings, 11, -5);
        assert_eq!(ids_and_orderings(&result), vec![(11, 1), (10, 2)]);
    }

    #[test]
    fn test_resequence_repairs_gapped_input() {
        // A sibling set with a stale gap still comes out dense.
        let siblings = vec![sibling(10, 1), sibling(11, 3), sibling(12, 7)];
        let result = resequence(siblings, 11, 2);
        assert_eq!(ids_and_orderings(&result), vec![(10, 1), (11, 2), (12, 3)]);
    }

    #[test]
    fn test_resequence_single_node() {
        let siblings = vec![sibling(10, 1)];
        let result = resequence(siblings, 10, 1);
        assert_eq!(ids_and_orderings(&result), vec![(10, 1)]);
    }
}

//! Reply-tree construction and point grouping.
//!
//! Replies arrive as a flat list in which each entry may reference a parent
//! reply. [`build_forest`] turns that list into a forest of [`ReplyNode`]s,
//! and [`group_roots`] partitions the roots by the AI point they respond to.
//!
//! Two policies are deliberate and load-bearing:
//!
//! - **Orphan fallback**: a reply whose declared parent is absent from the
//!   input set (deleted, not yet loaded, or filtered out upstream) becomes a
//!   root. It is never dropped and never an error.
//! - **Cycle detection**: the data model does not forbid a reply citing a
//!   descendant as its parent. A cyclic parent chain is a data defect and
//!   construction fails fast with [`TreeError::CyclicParentChain`] instead of
//!   recursing forever.

use std::collections::{HashMap, HashSet};

use branches_model::Reply;
use serde::Serialize;

use crate::error::TreeError;

/// A reply with its resolved children, forming one node of the forest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyNode {
    /// The reply itself.
    pub reply: Reply,
    /// Nesting depth: 0 for roots, parent depth + 1 otherwise.
    ///
    /// The engine imposes no depth cap; any interactive nesting limit is a
    /// presentation policy applied by the caller.
    pub depth: usize,
    /// Child nodes, in the order their replies appeared in the input list.
    pub children: Vec<Self>,
}

impl ReplyNode {
    /// Returns an iterator over this node and all descendants in pre-order
    /// (depth-first).
    pub fn iter_preorder(&self) -> PreorderIter<'_> {
        PreorderIter { stack: vec![self] }
    }

    /// Returns the total number of nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        self.iter_preorder().count()
    }
}

/// Pre-order iterator over a reply subtree.
pub struct PreorderIter<'a> {
    /// Nodes still to visit, top of stack next.
    stack: Vec<&'a ReplyNode>,
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = &'a ReplyNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Push children in reverse so the first child is visited first.
        for child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

/// Root replies grouped under one AI point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointGroup {
    /// The AI point id the roots in this group respond to.
    pub point_id: String,
    /// Root nodes anchored to the point, in input order.
    pub replies: Vec<ReplyNode>,
}

/// The result of partitioning root nodes by target point.
///
/// Every root lands in exactly one place: the group for its
/// `target_point_id`, or `general` when it has none. Children are never
/// independently bucketed — a deep reply stays attached to its conversational
/// parent regardless of its own point reference.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GroupedRoots {
    /// Point-anchored groups, in first-seen order of their point ids.
    pub point_groups: Vec<PointGroup>,
    /// Roots with no target point.
    pub general: Vec<ReplyNode>,
}

impl GroupedRoots {
    /// Looks up the group for a point id, if any root referenced it.
    pub fn group(&self, point_id: &str) -> Option<&PointGroup> {
        self.point_groups.iter().find(|g| g.point_id == point_id)
    }

    /// Total number of root nodes across all groups.
    pub fn root_count(&self) -> usize {
        let grouped: usize = self.point_groups.iter().map(|g| g.replies.len()).sum();
        grouped + self.general.len()
    }
}

/// Builds a forest from a flat reply list.
///
/// Sibling order (and root order) is the order replies appeared in the input.
/// A reply whose `parent_reply_id` does not resolve within the input set is
/// promoted to a root. A cyclic parent chain fails with
/// [`TreeError::CyclicParentChain`].
pub fn build_forest(replies: &[Reply]) -> Result<Vec<ReplyNode>, TreeError> {
    detect_cycles(replies)?;

    let ids: HashSet<&str> = replies.iter().map(|r| r.id.as_str()).collect();

    // Adjacency from parent id to child indices, preserving input order.
    let mut children_of: HashMap<&str, Vec<usize>> = HashMap::new();
    let mut roots: Vec<usize> = Vec::new();
    for (idx, reply) in replies.iter().enumerate() {
        match reply.parent_reply_id.as_deref() {
            Some(parent_id) if ids.contains(parent_id) => {
                children_of.entry(parent_id).or_default().push(idx);
            }
            // Orphan fallback: absent parent promotes the reply to a root.
            _ => roots.push(idx),
        }
    }

    Ok(roots
        .into_iter()
        .map(|idx| attach(replies, &children_of, idx, 0))
        .collect())
}

/// Recursively assembles the node for `idx` and its descendants.
fn attach(
    replies: &[Reply],
    children_of: &HashMap<&str, Vec<usize>>,
    idx: usize,
    depth: usize,
) -> ReplyNode {
    let reply = replies[idx].clone();
    let children = children_of
        .get(reply.id.as_str())
        .map(|child_indices| {
            child_indices
                .iter()
                .map(|&child| attach(replies, children_of, child, depth + 1))
                .collect()
        })
        .unwrap_or_default();

    ReplyNode {
        reply,
        depth,
        children,
    }
}

/// Walks every parent chain and fails on the first cycle found.
///
/// A chain that leaves the input set (orphan) terminates legitimately; only a
/// revisited id within one walk is a cycle.
fn detect_cycles(replies: &[Reply]) -> Result<(), TreeError> {
    let by_id: HashMap<&str, &Reply> = replies.iter().map(|r| (r.id.as_str(), r)).collect();

    for reply in replies {
        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(reply.id.as_str());

        let mut current = reply;
        while let Some(parent_id) = current.parent_reply_id.as_deref() {
            let Some(parent) = by_id.get(parent_id) else {
                break;
            };
            if !visited.insert(parent_id) {
                return Err(TreeError::CyclicParentChain {
                    reply_id: reply.id.clone(),
                });
            }
            current = parent;
        }
    }

    Ok(())
}

/// Partitions root nodes by the AI point they respond to.
///
/// Only depth-0 roots are inspected: a root with a `target_point_id` goes
/// into that point's group (groups ordered by first appearance, roots in
/// input order within each group); a root without one goes into `general`.
pub fn group_roots(forest: Vec<ReplyNode>) -> GroupedRoots {
    let mut grouped = GroupedRoots::default();
    let mut group_index: HashMap<String, usize> = HashMap::new();

    for node in forest {
        match node.reply.target_point_id.clone() {
            Some(point_id) => {
                let idx = *group_index.entry(point_id.clone()).or_insert_with(|| {
                    grouped.point_groups.push(PointGroup {
                        point_id,
                        replies: Vec::new(),
                    });
                    grouped.point_groups.len() - 1
                });
                grouped.point_groups[idx].replies.push(node);
            }
            None => grouped.general.push(node),
        }
    }

    grouped
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn reply(id: &str, parent: Option<&str>) -> Reply {
        let mut r = Reply::new(
            id,
            format!("content of {id}"),
            "author",
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        );
        r.parent_reply_id = parent.map(str::to_string);
        r
    }

    fn reply_on_point(id: &str, point: &str) -> Reply {
        let mut r = reply(id, None);
        r.target_point_id = Some(point.to_string());
        r
    }

    #[test]
    fn builds_nested_forest_in_input_order() {
        let replies = vec![
            reply("a", None),
            reply("b", Some("a")),
            reply("c", Some("a")),
            reply("d", Some("b")),
            reply("e", None),
        ];

        let forest = build_forest(&replies).unwrap();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].reply.id, "a");
        assert_eq!(forest[1].reply.id, "e");

        let a = &forest[0];
        assert_eq!(a.children.len(), 2);
        assert_eq!(a.children[0].reply.id, "b");
        assert_eq!(a.children[1].reply.id, "c");
        assert_eq!(a.children[0].children[0].reply.id, "d");
    }

    #[test]
    fn depth_reflects_nesting_level() {
        let replies = vec![reply("a", None), reply("b", Some("a")), reply("c", Some("b"))];

        let forest = build_forest(&replies).unwrap();
        let depths: Vec<usize> = forest[0].iter_preorder().map(|n| n.depth).collect();
        assert_eq!(depths, vec![0, 1, 2]);
    }

    #[test]
    fn orphan_parent_promotes_to_root() {
        let replies = vec![
            reply("a", None),
            reply("b", Some("a")),
            reply("c", Some("missing")),
        ];

        let forest = build_forest(&replies).unwrap();
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].reply.id, "a");
        assert_eq!(forest[1].reply.id, "c");
        assert_eq!(forest[1].depth, 0);

        let total: usize = forest.iter().map(ReplyNode::node_count).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn preorder_visits_every_input_exactly_once() {
        // Supply children before parents to exercise order independence.
        let replies = vec![
            reply("d", Some("b")),
            reply("b", Some("a")),
            reply("c", Some("a")),
            reply("a", None),
        ];

        let forest = build_forest(&replies).unwrap();
        let mut visited: Vec<&str> = forest
            .iter()
            .flat_map(|root| root.iter_preorder())
            .map(|n| n.reply.id.as_str())
            .collect();
        visited.sort_unstable();
        assert_eq!(visited, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn two_node_cycle_is_detected() {
        let replies = vec![reply("a", Some("b")), reply("b", Some("a"))];

        let err = build_forest(&replies).unwrap_err();
        assert!(matches!(err, TreeError::CyclicParentChain { .. }));
    }

    #[test]
    fn self_cycle_is_detected() {
        let replies = vec![reply("a", Some("a"))];

        let err = build_forest(&replies).unwrap_err();
        assert_eq!(
            err,
            TreeError::CyclicParentChain {
                reply_id: "a".to_string()
            }
        );
    }

    #[test]
    fn long_chain_is_not_mistaken_for_a_cycle() {
        let replies = vec![
            reply("a", None),
            reply("b", Some("a")),
            reply("c", Some("b")),
            reply("d", Some("c")),
            reply("e", Some("d")),
        ];

        let forest = build_forest(&replies).unwrap();
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].node_count(), 5);
    }

    #[test]
    fn roots_partition_into_point_and_general_buckets() {
        let replies = vec![
            reply_on_point("a", "p1"),
            reply("b", None),
            reply_on_point("c", "p2"),
            reply_on_point("d", "p1"),
        ];

        let grouped = group_roots(build_forest(&replies).unwrap());

        // Bucket order is first-seen, contents in input order.
        assert_eq!(grouped.point_groups.len(), 2);
        assert_eq!(grouped.point_groups[0].point_id, "p1");
        assert_eq!(grouped.point_groups[0].replies.len(), 2);
        assert_eq!(grouped.point_groups[0].replies[0].reply.id, "a");
        assert_eq!(grouped.point_groups[0].replies[1].reply.id, "d");
        assert_eq!(grouped.point_groups[1].point_id, "p2");
        assert_eq!(grouped.general.len(), 1);
        assert_eq!(grouped.general[0].reply.id, "b");
        assert_eq!(grouped.root_count(), 4);
    }

    #[test]
    fn deep_replies_are_never_independently_bucketed() {
        let mut child = reply("b", Some("a"));
        child.target_point_id = Some("p1".to_string());
        let replies = vec![reply("a", None), child];

        let grouped = group_roots(build_forest(&replies).unwrap());

        // The child stays nested under its parent despite its point reference.
        assert!(grouped.point_groups.is_empty());
        assert_eq!(grouped.general.len(), 1);
        assert_eq!(grouped.general[0].children[0].reply.id, "b");
    }

    #[test]
    fn empty_input_yields_empty_forest() {
        let forest = build_forest(&[]).unwrap();
        assert!(forest.is_empty());
        let grouped = group_roots(forest);
        assert_eq!(grouped.root_count(), 0);
    }
}

//! Hierarchical dynamic generation.
//!
//! A [`Forest`] holds one row of generated [`Node`]s per level in use. Each
//! event is described by a [`Trigger`] and folded into the forest with
//! [`grow`], which always consumes the previous forest and returns the next.

mod trigger;

pub use trigger::{Trigger, ROOT_COMPONENT};

use crate::config::GridConfig;

/// Prefix shared by every generated node's component id.
pub const LEVEL_PREFIX: &str = "level_";

/// One generated interactive element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    /// Depth at which the node was created (1 = first level).
    pub level: usize,
    /// Click aggregate at creation time; labels and colors derive from it.
    pub sequence_id: u64,
    /// Layout weight in grid units.
    pub width: u16,
}

impl Node {
    /// Create a new node.
    pub fn new(level: usize, sequence_id: u64, width: u16) -> Self {
        Self {
            level,
            sequence_id,
            width,
        }
    }

    /// Identifier used to route events from this node back to the reducer.
    pub fn component_id(&self) -> String {
        format!("{}{}#{}", LEVEL_PREFIX, self.level, self.sequence_id)
    }

    /// Button caption.
    pub fn label(&self) -> String {
        format!("level: {} number: {}", self.level, self.sequence_id)
    }

    /// Index into a palette of `palette_len` entries.
    pub fn palette_index(&self, palette_len: usize) -> usize {
        if palette_len == 0 {
            return 0;
        }
        (self.sequence_id % palette_len as u64) as usize
    }
}

/// Ordered rows of nodes; row `i` holds the nodes created at level `i + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forest {
    rows: Vec<Vec<Node>>,
}

impl Forest {
    /// Create an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether no row has been created yet.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows (the deepest level reached).
    pub fn depth(&self) -> usize {
        self.rows.len()
    }

    /// Total number of nodes across all rows.
    pub fn node_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// All rows, shallowest first.
    pub fn rows(&self) -> &[Vec<Node>] {
        &self.rows
    }

    /// The row holding nodes of `level` (1-based).
    pub fn row(&self, level: usize) -> Option<&[Node]> {
        level
            .checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(Vec::as_slice)
    }

    /// The node at `position` within the row of `level`.
    pub fn node(&self, level: usize, position: usize) -> Option<&Node> {
        self.row(level).and_then(|row| row.get(position))
    }

    /// Check whether a node with `component_id` exists.
    pub fn contains(&self, component_id: &str) -> bool {
        self.rows
            .iter()
            .flatten()
            .any(|n| n.component_id() == component_id)
    }

    /// Sum of widths in the row of `level`.
    pub fn row_width(&self, level: usize) -> u32 {
        self.row(level)
            .map(|row| row.iter().map(|n| u32::from(n.width)).sum())
            .unwrap_or(0)
    }

    fn push_root(&mut self, sequence_id: u64, total_width: u16) {
        if self.rows.is_empty() {
            self.rows.push(vec![Node::new(1, sequence_id, total_width)]);
            return;
        }

        let row = &mut self.rows[0];
        row.push(Node::new(1, sequence_id, 0));

        let count = u16::try_from(row.len()).unwrap_or(u16::MAX);
        let width = total_width / count;
        for node in row.iter_mut() {
            node.width = width;
        }
    }

    fn push_below(&mut self, level: usize, sequence_id: u64, deep_width: u16) {
        let next_level = level + 1;

        if self.rows.len() < next_level {
            while self.rows.len() < next_level {
                let row_level = self.rows.len() + 1;
                self.rows
                    .push(vec![Node::new(row_level, sequence_id, deep_width)]);
            }
        } else {
            self.rows[next_level - 1].push(Node::new(next_level, sequence_id, deep_width));
        }
    }
}

/// Fold one trigger into the forest.
///
/// Only the first row is rebalanced when it grows; deeper rows keep the
/// fixed `deep_width` for every node regardless of how many they hold.
pub fn grow(mut forest: Forest, trigger: Trigger, grid: &GridConfig) -> Forest {
    match trigger {
        Trigger::Root { clicks } => forest.push_root(clicks, grid.total_width),
        Trigger::FromNode { level, clicks } => forest.push_below(level, clicks, grid.deep_width),
    }

    tracing::debug!(
        ?trigger,
        depth = forest.depth(),
        nodes = forest.node_count(),
        "forest grown"
    );

    forest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridConfig {
        GridConfig::default()
    }

    fn widths(forest: &Forest, level: usize) -> Vec<u16> {
        forest
            .row(level)
            .map(|row| row.iter().map(|n| n.width).collect())
            .unwrap_or_default()
    }

    #[test]
    fn contains_matches_component_ids() {
        let g = grid();
        let mut forest = grow(Forest::new(), Trigger::Root { clicks: 1 }, &g);
        forest = grow(forest, Trigger::FromNode { level: 1, clicks: 1 }, &g);
        assert!(forest.contains("level_1#1"));
        assert!(forest.contains("level_2#1"));
        assert!(!forest.contains("level_2#2"));
        assert!(!forest.contains("main_button"));
    }

    #[test]
    fn first_root_takes_full_width() {
        let forest = grow(Forest::new(), Trigger::Root { clicks: 1 }, &grid());
        assert_eq!(forest.rows(), &[vec![Node::new(1, 1, 12)]]);
    }

    #[test]
    fn walkthrough_matches_expected_rows() {
        let g = grid();
        let mut forest = grow(Forest::new(), Trigger::Root { clicks: 1 }, &g);
        forest = grow(forest, Trigger::Root { clicks: 2 }, &g);
        assert_eq!(forest.rows(), &[vec![Node::new(1, 1, 6), Node::new(1, 2, 6)]]);

        forest = grow(forest, Trigger::FromNode { level: 1, clicks: 1 }, &g);
        assert_eq!(forest.depth(), 2);
        assert_eq!(forest.row(2), Some(&[Node::new(2, 1, 2)][..]));

        forest = grow(forest, Trigger::FromNode { level: 1, clicks: 2 }, &g);
        assert_eq!(forest.row(1), Some(&[Node::new(1, 1, 6), Node::new(1, 2, 6)][..]));
        assert_eq!(
            forest.row(2),
            Some(&[Node::new(2, 1, 2), Node::new(2, 2, 2)][..])
        );
    }

    #[test]
    fn three_roots_split_twelve_into_fours() {
        let g = grid();
        let forest = (1..=3).fold(Forest::new(), |f, clicks| {
            grow(f, Trigger::Root { clicks }, &g)
        });
        assert_eq!(widths(&forest, 1), vec![4, 4, 4]);
    }

    #[test]
    fn root_widths_lose_at_most_the_truncation_remainder() {
        let g = grid();
        let mut forest = Forest::new();
        for n in 1..=20u64 {
            forest = grow(forest, Trigger::Root { clicks: n }, &g);
            let count = n as u32;
            let total = u32::from(g.total_width);
            assert_eq!(forest.row(1).map(<[Node]>::len), Some(n as usize));
            assert!(forest.row_width(1) <= total);
            assert!(total - forest.row_width(1) <= count - 1);
        }
    }

    #[test]
    fn seven_roots_truncate_toward_zero() {
        let g = grid();
        let forest = (1..=7).fold(Forest::new(), |f, clicks| {
            grow(f, Trigger::Root { clicks }, &g)
        });
        assert_eq!(widths(&forest, 1), vec![1; 7]);
        assert_eq!(forest.row_width(1), 7);
    }

    #[test]
    fn deep_rows_do_not_rebalance() {
        let g = grid();
        let mut forest = grow(Forest::new(), Trigger::Root { clicks: 1 }, &g);
        for clicks in 1..=9 {
            forest = grow(forest, Trigger::FromNode { level: 1, clicks }, &g);
        }
        assert_eq!(widths(&forest, 2), vec![2; 9]);
        assert_eq!(forest.row_width(2), 18);
    }

    #[test]
    fn from_node_on_empty_forest_fills_every_level() {
        let g = grid();
        for level in 0..5usize {
            let m = 4u64;
            let forest = (1..=m).fold(Forest::new(), |f, clicks| {
                grow(f, Trigger::FromNode { level, clicks }, &g)
            });
            assert_eq!(forest.depth(), level + 1);
            for (i, row) in forest.rows().iter().enumerate() {
                let expected = if i == level { m as usize } else { 1 };
                assert_eq!(row.len(), expected, "row {} at level {}", i, level);
                assert!(row.iter().all(|n| n.level == i + 1));
            }
        }
    }

    #[test]
    fn replaying_a_sequence_gives_the_same_shape() {
        let g = grid();
        let triggers = [
            Trigger::Root { clicks: 1 },
            Trigger::FromNode { level: 1, clicks: 1 },
            Trigger::Root { clicks: 2 },
            Trigger::FromNode { level: 2, clicks: 1 },
            Trigger::FromNode { level: 1, clicks: 2 },
            Trigger::Root { clicks: 3 },
        ];
        let run = || {
            triggers
                .iter()
                .fold(Forest::new(), |f, &t| grow(f, t, &g))
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn counts_never_decrease() {
        let g = grid();
        let triggers = [
            Trigger::FromNode { level: 2, clicks: 1 },
            Trigger::Root { clicks: 1 },
            Trigger::FromNode { level: 0, clicks: 2 },
            Trigger::FromNode { level: 3, clicks: 1 },
            Trigger::Root { clicks: 2 },
            Trigger::FromNode { level: 1, clicks: 5 },
        ];
        let mut forest = Forest::new();
        for trigger in triggers {
            let before: Vec<usize> = forest.rows().iter().map(Vec::len).collect();
            forest = grow(forest, trigger, &g);
            let after: Vec<usize> = forest.rows().iter().map(Vec::len).collect();
            assert!(after.len() >= before.len());
            for (b, a) in before.iter().zip(&after) {
                assert!(a >= b);
            }
        }
    }

    #[test]
    fn node_identity_and_palette() {
        let node = Node::new(3, 10, 2);
        assert_eq!(node.component_id(), "level_3#10");
        assert_eq!(node.label(), "level: 3 number: 10");
        assert_eq!(node.palette_index(8), 2);
        assert_eq!(node.palette_index(0), 0);
    }

    #[test]
    fn lookups_out_of_range() {
        let forest = grow(Forest::new(), Trigger::Root { clicks: 1 }, &grid());
        assert!(forest.row(0).is_none());
        assert!(forest.row(2).is_none());
        assert!(forest.node(1, 1).is_none());
        assert_eq!(forest.node(1, 0), Some(&Node::new(1, 1, 12)));
        assert_eq!(forest.row_width(5), 0);
    }
}

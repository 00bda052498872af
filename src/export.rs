//! Text outlines of a forest.

use crate::clipboard;
use crate::error::Result;
use crate::forest::{Forest, Node};

/// Draw the forest as a tree: one branch per level, one leaf per node.
pub fn format_forest(forest: &Forest, title: Option<&str>) -> String {
    let mut text = String::new();

    match title {
        Some(t) => text.push_str(&format!("Forest: {}\n", t)),
        None => text.push_str("Forest\n"),
    }

    if forest.is_empty() {
        text.push_str("(empty)\n");
        return text;
    }

    let rows = forest.rows();
    for (i, row) in rows.iter().enumerate() {
        let last_row = i + 1 == rows.len();
        let connector = if last_row { "└── " } else { "├── " };
        text.push_str(&format!(
            "{}level {} ({} nodes, width {})\n",
            connector,
            i + 1,
            row.len(),
            forest.row_width(i + 1)
        ));

        let prefix = if last_row { "    " } else { "│   " };
        for (j, node) in row.iter().enumerate() {
            let leaf = if j + 1 == row.len() { "└── " } else { "├── " };
            text.push_str(&format!("{}{}{}\n", prefix, leaf, describe(node)));
        }
    }

    text
}

fn describe(node: &Node) -> String {
    format!("{} [{}] w={}", node.label(), node.component_id(), node.width)
}

/// Copy the forest outline to the clipboard.
pub fn copy_forest(forest: &Forest, title: Option<&str>) -> Result<()> {
    clipboard::copy_to_clipboard(&format_forest(forest, title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::forest::{grow, Trigger};

    #[test]
    fn empty_forest_outline() {
        assert_eq!(format_forest(&Forest::new(), None), "Forest\n(empty)\n");
    }

    #[test]
    fn outline_lists_rows_and_nodes() {
        let g = GridConfig::default();
        let mut forest = grow(Forest::new(), Trigger::Root { clicks: 1 }, &g);
        forest = grow(forest, Trigger::Root { clicks: 2 }, &g);
        forest = grow(forest, Trigger::FromNode { level: 1, clicks: 1 }, &g);

        let expected = "\
Forest: demo
├── level 1 (2 nodes, width 12)
│   ├── level: 1 number: 1 [level_1#1] w=6
│   └── level: 1 number: 2 [level_1#2] w=6
└── level 2 (1 nodes, width 2)
    └── level: 2 number: 1 [level_2#1] w=2
";
        assert_eq!(format_forest(&forest, Some("demo")), expected);
    }
}

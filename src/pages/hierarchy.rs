//! Hierarchical generation: every button adds a button one level deeper.

use crate::config::GridConfig;
use crate::error::{DashgridError, Result};
use crate::forest::{grow, Forest, Node, Trigger, LEVEL_PREFIX, ROOT_COMPONENT};
use crate::reactive::{Binding, CallbackContext, Session, Source, Value};

/// Area holding the generated rows.
pub const DISPLAY_AREA: &str = "display_area";

/// Button styles, indexed by `sequence_id mod len`.
pub const COLOR_OPTIONS: [&str; 8] = [
    "primary",
    "secondary",
    "success",
    "warning",
    "danger",
    "info",
    "light",
    "dark",
];

/// Register the reducer binding.
pub fn register(session: &mut Session, grid: GridConfig) {
    session.register(
        Binding::new(move |ctx| Ok(vec![Value::Forest(next_forest(ctx, &grid)?)]))
            .output(DISPLAY_AREA)
            .input(Source::id(ROOT_COMPONENT))
            .input(Source::pattern(LEVEL_PREFIX))
            .state(DISPLAY_AREA),
    );
}

fn next_forest(ctx: &CallbackContext<'_>, grid: &GridConfig) -> Result<Forest> {
    let Some(id) = ctx.triggered_id() else {
        return Ok(Forest::new());
    };

    let clicks = match Trigger::level_of(id) {
        Some(level) => ctx.clicks_matching(&Trigger::level_prefix(level)),
        None => ctx.clicks(id),
    };
    let trigger = Trigger::parse(id, clicks)?;

    let previous = ctx
        .value(DISPLAY_AREA)
        .and_then(Value::as_forest)
        .cloned()
        .unwrap_or_default();

    if matches!(trigger, Trigger::FromNode { .. }) && !previous.contains(id) {
        return Err(DashgridError::unknown_component(id));
    }

    Ok(grow(previous, trigger, grid))
}

/// Current generated rows.
pub fn forest(session: &Session) -> Forest {
    session
        .value(DISPLAY_AREA)
        .and_then(Value::as_forest)
        .cloned()
        .unwrap_or_default()
}

/// Style name of a node's button.
pub fn color_name(node: &Node) -> &'static str {
    COLOR_OPTIONS[node.palette_index(COLOR_OPTIONS.len())]
}

/// Click `ids` in order on a fresh hierarchy session and return the result.
pub fn replay<S: AsRef<str>>(ids: &[S], grid: GridConfig) -> Result<Forest> {
    let mut session = Session::new();
    register(&mut session, grid);
    session.fire_initial()?;
    for id in ids {
        session.click(id.as_ref())?;
    }
    Ok(forest(&session))
}

/// Keyboard cursor over the generated buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HierarchyCursor {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based position within the row.
    pub col: usize,
}

impl HierarchyCursor {
    /// Node under the cursor.
    pub fn node<'a>(&self, forest: &'a Forest) -> Option<&'a Node> {
        forest.node(self.row + 1, self.col)
    }

    /// Move between rows, keeping the column inside the new row.
    pub fn move_row(&mut self, forest: &Forest, delta: isize) {
        if forest.is_empty() {
            return;
        }
        let last = forest.depth() as isize - 1;
        self.row = (self.row as isize + delta).clamp(0, last) as usize;
        self.clamp_col(forest);
    }

    /// Move within the current row.
    pub fn move_col(&mut self, forest: &Forest, delta: isize) {
        let Some(row) = forest.row(self.row + 1) else {
            return;
        };
        let last = row.len() as isize - 1;
        self.col = (self.col as isize + delta).clamp(0, last.max(0)) as usize;
    }

    fn clamp_col(&mut self, forest: &Forest) {
        let len = forest.row(self.row + 1).map(<[Node]>::len).unwrap_or(0);
        self.col = self.col.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        let mut session = Session::new();
        register(&mut session, GridConfig::default());
        session.fire_initial().unwrap();
        session
    }

    fn shape(forest: &Forest) -> Vec<Vec<(usize, u64, u16)>> {
        forest
            .rows()
            .iter()
            .map(|row| row.iter().map(|n| (n.level, n.sequence_id, n.width)).collect())
            .collect()
    }

    #[test]
    fn initial_display_is_empty() {
        assert!(forest(&session()).is_empty());
    }

    #[test]
    fn clicking_through_the_walkthrough() {
        let mut session = session();
        session.click(ROOT_COMPONENT).unwrap();
        session.click(ROOT_COMPONENT).unwrap();
        assert_eq!(shape(&forest(&session)), vec![vec![(1, 1, 6), (1, 2, 6)]]);

        session.click("level_1#1").unwrap();
        assert_eq!(
            shape(&forest(&session)),
            vec![vec![(1, 1, 6), (1, 2, 6)], vec![(2, 1, 2)]]
        );

        // A different level-1 button still aggregates over the whole level.
        session.click("level_1#2").unwrap();
        assert_eq!(
            shape(&forest(&session))[1],
            vec![(2, 1, 2), (2, 2, 2)]
        );

        session.click("level_2#2").unwrap();
        assert_eq!(shape(&forest(&session))[2], vec![(3, 1, 2)]);
    }

    #[test]
    fn generated_ids_are_unique() {
        let ids = [
            "main_button",
            "level_1#1",
            "level_1#1",
            "level_2#1",
            "level_2#2",
            "level_1#1",
        ];
        let forest = replay(&ids, GridConfig::default()).unwrap();
        let mut seen: Vec<String> = forest
            .rows()
            .iter()
            .flatten()
            .map(Node::component_id)
            .collect();
        let total = seen.len();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), total);
    }

    #[test]
    fn malformed_generated_id_fails_fast() {
        let mut session = session();
        session.click(ROOT_COMPONENT).unwrap();
        let err = session.click("level_one#1").unwrap_err();
        assert!(matches!(err, DashgridError::InvalidTrigger { .. }));
        assert_eq!(forest(&session).node_count(), 1);
        assert_eq!(session.clicks("level_one#1"), 0);
    }

    #[test]
    fn level_zero_id_is_rejected() {
        let err = replay(&["main_button", "level_0#1"], GridConfig::default()).unwrap_err();
        assert!(matches!(err, DashgridError::InvalidTrigger { .. }));
    }

    #[test]
    fn ids_not_on_screen_are_refused() {
        let mut session = session();
        session.click(ROOT_COMPONENT).unwrap();
        let before = forest(&session);

        let err = session.click("level_3#1").unwrap_err();
        assert!(matches!(err, DashgridError::UnknownComponent { .. }));
        let err = session.click("level_1#2").unwrap_err();
        assert!(matches!(err, DashgridError::UnknownComponent { .. }));

        assert_eq!(forest(&session), before);
        assert_eq!(session.clicks("level_3#1"), 0);

        session.click("level_1#1").unwrap();
        assert_eq!(forest(&session).node_count(), 2);
    }

    #[test]
    fn unrelated_id_is_unknown() {
        let err = replay(&["submit"], GridConfig::default()).unwrap_err();
        assert!(matches!(err, DashgridError::UnknownComponent { .. }));
    }

    #[test]
    fn replay_is_deterministic() {
        let ids = ["main_button", "main_button", "level_1#2", "main_button"];
        let a = replay(&ids, GridConfig::default()).unwrap();
        let b = replay(&ids, GridConfig::default()).unwrap();
        assert_eq!(a, b);
        assert_eq!(shape(&a)[0], vec![(1, 1, 4), (1, 2, 4), (1, 3, 4)]);
    }

    #[test]
    fn custom_grid_widths_are_used() {
        let grid = GridConfig {
            total_width: 10,
            deep_width: 3,
        };
        let forest = replay(&["main_button", "main_button", "main_button", "level_1#1"], grid).unwrap();
        assert_eq!(shape(&forest), vec![
            vec![(1, 1, 3), (1, 2, 3), (1, 3, 3)],
            vec![(2, 1, 3)],
        ]);
    }

    #[test]
    fn colors_cycle_through_options() {
        assert_eq!(color_name(&Node::new(1, 1, 2)), "secondary");
        assert_eq!(color_name(&Node::new(1, 8, 2)), "primary");
    }

    #[test]
    fn cursor_stays_on_nodes() {
        let forest = replay(
            &["main_button", "main_button", "main_button", "level_1#1"],
            GridConfig::default(),
        )
        .unwrap();
        let mut cursor = HierarchyCursor::default();
        cursor.move_col(&forest, 5);
        assert_eq!(cursor, HierarchyCursor { row: 0, col: 2 });
        cursor.move_row(&forest, 1);
        assert_eq!(cursor, HierarchyCursor { row: 1, col: 0 });
        cursor.move_row(&forest, 4);
        assert_eq!(cursor.row, 1);
        assert_eq!(cursor.node(&forest).map(Node::component_id), Some("level_2#1".to_string()));
        cursor.move_row(&forest, -1);
        cursor.move_col(&forest, -3);
        assert_eq!(cursor, HierarchyCursor { row: 0, col: 0 });
    }

    #[test]
    fn cursor_on_empty_forest_is_inert() {
        let forest = Forest::new();
        let mut cursor = HierarchyCursor::default();
        cursor.move_row(&forest, 1);
        cursor.move_col(&forest, 1);
        assert_eq!(cursor, HierarchyCursor::default());
        assert!(cursor.node(&forest).is_none());
    }
}

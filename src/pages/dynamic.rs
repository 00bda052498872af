//! A single row of columns that rebalance their widths as they grow.

use crate::config::GridConfig;
use crate::forest::{grow, Forest, Node, Trigger};
use crate::reactive::{Binding, Session, Source, Value};

/// The add-column button.
pub const BUTTON: &str = "button";
/// The row holding generated columns.
pub const OUTPUT_ROW: &str = "output_row";

/// Register the add-column binding.
pub fn register(session: &mut Session, grid: GridConfig) {
    session.register(
        Binding::new(move |ctx| {
            let forest = match ctx.triggered_id() {
                None => Forest::new(),
                Some(_) => {
                    let previous = ctx
                        .value(OUTPUT_ROW)
                        .and_then(Value::as_forest)
                        .cloned()
                        .unwrap_or_default();
                    let clicks = ctx.clicks(BUTTON);
                    grow(previous, Trigger::Root { clicks }, &grid)
                },
            };
            Ok(vec![Value::Forest(forest)])
        })
        .output(OUTPUT_ROW)
        .input(Source::id(BUTTON))
        .state(OUTPUT_ROW),
    );
}

/// Current columns.
pub fn forest(session: &Session) -> Forest {
    session
        .value(OUTPUT_ROW)
        .and_then(Value::as_forest)
        .cloned()
        .unwrap_or_default()
}

/// Column caption.
pub fn label(node: &Node) -> String {
    format!("New Col {}", node.sequence_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_share_the_row() {
        let mut session = Session::new();
        register(&mut session, GridConfig::default());
        session.fire_initial().unwrap();

        for _ in 0..4 {
            session.click(BUTTON).unwrap();
        }

        let forest = forest(&session);
        assert_eq!(forest.depth(), 1);
        let row = forest.row(1).unwrap();
        assert_eq!(row.iter().map(|n| n.width).collect::<Vec<_>>(), vec![3; 4]);
        assert_eq!(label(&row[3]), "New Col 4");
    }
}

//! Two text inputs echoed into two outputs by one binding.

use crate::reactive::{Binding, Session, Source, Value};

/// First text input.
pub const INPUT_1: &str = "my-in1";
/// Second text input.
pub const INPUT_2: &str = "my-in2";
/// Output echoing both inputs.
pub const OUTPUT_1: &str = "my-out1";
/// Output echoing the second input.
pub const OUTPUT_2: &str = "my-out2";

/// Register the echo binding and seed the inputs.
pub fn register(session: &mut Session) {
    session.seed(INPUT_1, Value::text("initial value"));
    session.seed(INPUT_2, Value::text("second value"));
    session.register(
        Binding::new(|ctx| {
            let in1 = ctx.text(INPUT_1);
            let in2 = ctx.text(INPUT_2);
            Ok(vec![
                Value::text(format!("You've entered {} and {}", in1, in2)),
                Value::text(format!("Second input: {}", in2)),
            ])
        })
        .output(OUTPUT_1)
        .output(OUTPUT_2)
        .input(Source::id(INPUT_1))
        .input(Source::id(INPUT_2)),
    );
}

/// Which input has keyboard focus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallbacksState {
    focus: usize,
}

impl CallbacksState {
    /// Create a new state focused on the first input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Component id of the focused input.
    pub fn focused(&self) -> &'static str {
        if self.focus == 0 {
            INPUT_1
        } else {
            INPUT_2
        }
    }

    /// Move focus to the other input.
    pub fn toggle_focus(&mut self) {
        self.focus = 1 - self.focus;
    }
}

/// Text of the focused input after typing `c`.
pub fn typed(current: &str, c: char) -> String {
    let mut s = current.to_string();
    s.push(c);
    s
}

/// Text of the focused input after a backspace.
pub fn erased(current: &str) -> String {
    let mut s = current.to_string();
    s.pop();
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        let mut session = Session::new();
        register(&mut session);
        session.fire_initial().unwrap();
        session
    }

    #[test]
    fn initial_outputs_echo_seeds() {
        let session = session();
        assert_eq!(
            session.text(OUTPUT_1),
            "You've entered initial value and second value"
        );
        assert_eq!(session.text(OUTPUT_2), "Second input: second value");
    }

    #[test]
    fn typing_updates_both_outputs() {
        let mut session = session();
        let mut state = CallbacksState::new();
        state.toggle_focus();
        assert_eq!(state.focused(), INPUT_2);

        let next = typed(session.text(state.focused()), '!');
        let updated = session.set_input(state.focused(), Value::text(next)).unwrap();
        assert_eq!(updated, vec![OUTPUT_1.to_string(), OUTPUT_2.to_string()]);
        assert_eq!(session.text(OUTPUT_2), "Second input: second value!");

        let next = erased(session.text(INPUT_1));
        session.set_input(INPUT_1, Value::text(next)).unwrap();
        assert_eq!(
            session.text(OUTPUT_1),
            "You've entered initial valu and second value!"
        );
    }

    #[test]
    fn erase_on_empty_stays_empty() {
        assert_eq!(erased(""), "");
    }
}

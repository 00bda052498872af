//! Bindings between component inputs and outputs.

use super::Value;
use crate::error::Result;
use std::collections::BTreeMap;
use std::fmt;

/// Handler invoked when a bound input changes.
pub type Handler = Box<dyn Fn(&CallbackContext<'_>) -> Result<Vec<Value>>>;

/// An input a binding listens to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Exactly one component id.
    Id(String),
    /// Every component whose id starts with the prefix.
    Pattern(String),
}

impl Source {
    /// Listen to a single component.
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Listen to every component sharing a prefix.
    pub fn pattern(prefix: impl Into<String>) -> Self {
        Self::Pattern(prefix.into())
    }

    /// Check whether `id` is covered by this source.
    pub fn matches(&self, id: &str) -> bool {
        match self {
            Self::Id(own) => own == id,
            Self::Pattern(prefix) => id.starts_with(prefix.as_str()),
        }
    }
}

/// Outputs, inputs, states and the handler tying them together.
pub struct Binding {
    pub(super) outputs: Vec<String>,
    pub(super) inputs: Vec<Source>,
    pub(super) states: Vec<String>,
    pub(super) handler: Handler,
}

impl Binding {
    /// Create a binding around `handler`; add outputs and inputs with the builder methods.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&CallbackContext<'_>) -> Result<Vec<Value>> + 'static,
    {
        Self {
            outputs: Vec::new(),
            inputs: Vec::new(),
            states: Vec::new(),
            handler: Box::new(handler),
        }
    }

    /// Add an output; handler results are written to outputs in order.
    pub fn output(mut self, id: impl Into<String>) -> Self {
        self.outputs.push(id.into());
        self
    }

    /// Add an input that triggers the handler.
    pub fn input(mut self, source: Source) -> Self {
        self.inputs.push(source);
        self
    }

    /// Add a state read by the handler without triggering it.
    pub fn state(mut self, id: impl Into<String>) -> Self {
        self.states.push(id.into());
        self
    }

    /// Output ids.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Check whether a change of `id` should run this binding.
    pub fn listens_to(&self, id: &str) -> bool {
        self.inputs.iter().any(|s| s.matches(id))
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("outputs", &self.outputs)
            .field("inputs", &self.inputs)
            .field("states", &self.states)
            .finish_non_exhaustive()
    }
}

/// What a handler sees while it runs.
///
/// Only ids the binding declared as inputs or states are readable; any
/// other id reads as unset.
#[derive(Debug)]
pub struct CallbackContext<'a> {
    pub(super) triggered: Option<&'a str>,
    pub(super) store: &'a BTreeMap<String, Value>,
    pub(super) inputs: &'a [Source],
    pub(super) states: &'a [String],
}

impl<'a> CallbackContext<'a> {
    pub(super) fn for_binding(
        binding: &'a Binding,
        triggered: Option<&'a str>,
        store: &'a BTreeMap<String, Value>,
    ) -> Self {
        Self {
            triggered,
            store,
            inputs: &binding.inputs,
            states: &binding.states,
        }
    }

    /// Id of the input that fired, or `None` on the initial run.
    pub fn triggered_id(&self) -> Option<&'a str> {
        self.triggered
    }

    /// Check whether the binding declared `id` as an input or state.
    pub fn can_read(&self, id: &str) -> bool {
        self.inputs.iter().any(|s| s.matches(id)) || self.states.iter().any(|s| s == id)
    }

    /// Current value of a declared component.
    pub fn value(&self, id: &str) -> Option<&'a Value> {
        if !self.can_read(id) {
            tracing::warn!(id, "read of undeclared component refused");
            return None;
        }
        self.store.get(id)
    }

    /// Text of a component, empty when unset.
    pub fn text(&self, id: &str) -> &'a str {
        self.value(id).and_then(Value::as_text).unwrap_or("")
    }

    /// Click count of a component, zero when unset.
    pub fn clicks(&self, id: &str) -> u64 {
        self.value(id).and_then(Value::as_clicks).unwrap_or(0)
    }

    /// Sum of click counts over every declared component id starting with `prefix`.
    pub fn clicks_matching(&self, prefix: &str) -> u64 {
        self.store
            .range(prefix.to_string()..)
            .take_while(|(id, _)| id.starts_with(prefix))
            .filter(|(id, _)| self.can_read(id))
            .filter_map(|(_, v)| v.as_clicks())
            .sum()
    }
}

//! Reactive bindings between dashboard components.
//!
//! A [`Session`] owns the current value of every component property and the
//! list of registered [`Binding`]s. Pages register their bindings once at
//! startup; afterwards every input change runs the bindings listening to it,
//! synchronously and to completion, and writes their results to the outputs.

mod binding;
mod value;

pub use binding::{Binding, CallbackContext, Handler, Source};
pub use value::{AxisRange, PointEvent, Value};

use crate::error::{DashgridError, Result};
use std::collections::BTreeMap;

/// Explicit dashboard context: component store plus bindings.
#[derive(Debug, Default)]
pub struct Session {
    store: BTreeMap<String, Value>,
    bindings: Vec<Binding>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding.
    pub fn register(&mut self, binding: Binding) {
        tracing::debug!(outputs = ?binding.outputs(), "binding registered");
        self.bindings.push(binding);
    }

    /// Set an initial value without running any binding.
    pub fn seed(&mut self, id: impl Into<String>, value: Value) {
        self.store.insert(id.into(), value);
    }

    /// Current value of a component.
    pub fn value(&self, id: &str) -> Option<&Value> {
        self.store.get(id)
    }

    /// Text of a component, empty when unset.
    pub fn text(&self, id: &str) -> &str {
        self.value(id).and_then(Value::as_text).unwrap_or("")
    }

    /// Click count of a component, zero when unset.
    pub fn clicks(&self, id: &str) -> u64 {
        self.value(id).and_then(Value::as_clicks).unwrap_or(0)
    }

    /// Number of registered bindings.
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Run every binding once with no triggering input, as on first page load.
    pub fn fire_initial(&mut self) -> Result<()> {
        let snapshot = self.store.clone();
        for index in 0..self.bindings.len() {
            if let Err(e) = self.run(index, None) {
                self.store = snapshot;
                return Err(e);
            }
        }
        Ok(())
    }

    /// Store a new input value and run every binding listening to `id`.
    ///
    /// Returns the ids of the outputs that were written. On failure the
    /// store is left exactly as it was before the call.
    pub fn set_input(&mut self, id: &str, value: Value) -> Result<Vec<String>> {
        let targets: Vec<usize> = self
            .bindings
            .iter()
            .enumerate()
            .filter(|(_, b)| b.listens_to(id))
            .map(|(i, _)| i)
            .collect();

        if targets.is_empty() {
            return Err(DashgridError::unknown_component(id));
        }

        tracing::debug!(id, ?value, bindings = targets.len(), "dispatch");

        let snapshot = self.store.clone();
        self.store.insert(id.to_string(), value);

        let mut updated = Vec::new();
        for index in targets {
            match self.run(index, Some(id)) {
                Ok(outputs) => updated.extend(outputs),
                Err(e) => {
                    tracing::error!(id, "handler failed: {}", e);
                    self.store = snapshot;
                    return Err(e);
                },
            }
        }

        Ok(updated)
    }

    /// Increment the click counter of `id` and dispatch it.
    pub fn click(&mut self, id: &str) -> Result<Vec<String>> {
        let clicks = self.clicks(id) + 1;
        self.set_input(id, Value::Clicks(clicks))
    }

    fn run(&mut self, index: usize, triggered: Option<&str>) -> Result<Vec<String>> {
        let values = {
            let binding = &self.bindings[index];
            let ctx = CallbackContext::for_binding(binding, triggered, &self.store);
            (binding.handler)(&ctx)?
        };

        let binding = &self.bindings[index];
        if values.len() != binding.outputs.len() {
            return Err(DashgridError::BindingOutput {
                outputs: binding.outputs.join(", "),
                returned: values.len(),
            });
        }

        for (id, value) in binding.outputs.iter().zip(values) {
            self.store.insert(id.clone(), value);
        }

        Ok(binding.outputs.clone())
    }
}

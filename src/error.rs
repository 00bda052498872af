//! Error types for Dashgrid.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Dashgrid operations.
pub type Result<T> = std::result::Result<T, DashgridError>;

/// Errors that can occur in Dashgrid.
#[derive(Debug, Error)]
pub enum DashgridError {
    /// A control identifier could not be mapped onto a trigger.
    #[error("Invalid trigger: {id}")]
    InvalidTrigger {
        /// Offending identifier.
        id: String,
    },

    /// An event was dispatched to a component that no binding listens to or that is not on screen.
    #[error("Unknown component: {id}")]
    UnknownComponent {
        /// Component that received the event.
        id: String,
    },

    /// A handler returned a different number of values than it has outputs.
    #[error("Binding for {outputs} returned {returned} values")]
    BindingOutput {
        /// Comma-separated output ids.
        outputs: String,
        /// Number of values the handler returned.
        returned: usize,
    },

    /// Failed to read NetCDF file.
    #[error("NetCDF error: {0}")]
    NetCDF(String),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DashgridError {
    /// Create an InvalidTrigger error.
    pub fn invalid_trigger(id: impl Into<String>) -> Self {
        Self::InvalidTrigger { id: id.into() }
    }

    /// Create an UnknownComponent error.
    pub fn unknown_component(id: impl Into<String>) -> Self {
        Self::UnknownComponent { id: id.into() }
    }
}

impl From<netcdf::Error> for DashgridError {
    fn from(err: netcdf::Error) -> Self {
        Self::NetCDF(err.to_string())
    }
}

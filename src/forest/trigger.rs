//! Mapping control identifiers onto reducer triggers.

use super::LEVEL_PREFIX;
use crate::error::{DashgridError, Result};

/// Component id of the top-level "add" control.
pub const ROOT_COMPONENT: &str = "main_button";

/// The event that caused a reducer invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The top-level control fired; `clicks` is its click count.
    Root {
        /// Click count used as the new node's sequence id.
        clicks: u64,
    },
    /// A generated node at `level` fired.
    FromNode {
        /// Level of the node that fired.
        level: usize,
        /// Aggregate click count of every control at `level`.
        clicks: u64,
    },
}

impl Trigger {
    /// Parse a component id into a trigger.
    ///
    /// `clicks` is the aggregate for the level the id belongs to. Ids look
    /// like `main_button` or `level_<L>#<sequence_id>`.
    pub fn parse(id: &str, clicks: u64) -> Result<Self> {
        if id == ROOT_COMPONENT {
            return Ok(Trigger::Root { clicks });
        }

        let level = Self::level_of(id).ok_or_else(|| DashgridError::invalid_trigger(id))?;
        Ok(Trigger::FromNode { level, clicks })
    }

    /// Level encoded in a generated node's component id.
    ///
    /// Levels start at 1, so `level_0#N` is not a generated id.
    pub fn level_of(id: &str) -> Option<usize> {
        let rest = id.strip_prefix(LEVEL_PREFIX)?;
        let (level, sequence) = rest.split_once('#')?;
        sequence.parse::<u64>().ok()?;
        level.parse().ok().filter(|&level| level > 0)
    }

    /// Prefix matching every component id at `level`.
    pub fn level_prefix(level: usize) -> String {
        format!("{}{}#", LEVEL_PREFIX, level)
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Access actions that can be granted on a table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum GrantAction {
    Select,
    Remove,
    Insert,
}

impl GrantAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantAction::Select => "select",
            GrantAction::Remove => "remove",
            GrantAction::Insert => "insert",
        }
    }
}

impl fmt::Display for GrantAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An access permission on a table.
///
/// Two grants with the same action and principal are the same grant, so a
/// set of grants never holds duplicates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Grant {
    pub action: GrantAction,
    pub principal: String,
}

impl Grant {
    pub fn new(action: GrantAction, principal: impl Into<String>) -> Self {
        Self {
            action,
            principal: principal.into(),
        }
    }

    pub fn select(principal: impl Into<String>) -> Self {
        Self::new(GrantAction::Select, principal)
    }

    pub fn insert(principal: impl Into<String>) -> Self {
        Self::new(GrantAction::Insert, principal)
    }

    pub fn remove(principal: impl Into<String>) -> Self {
        Self::new(GrantAction::Remove, principal)
    }
}

impl fmt::Display for Grant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.action, self.principal)
    }
}

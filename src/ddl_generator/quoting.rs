//! Identifier and literal rendering.
//!
//! [`Quoting::Verbatim`] is the default and writes names and property
//! values exactly as declared; downstream migration runners compare the
//! output byte for byte. [`Quoting::Strict`] is an explicit opt-in that
//! deviates from that format: identifiers are back-tick quoted per dotted
//! segment and property keys and values become single-quoted literals.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quoting {
    #[default]
    Verbatim,
    Strict,
}

/// Rendering options for the statement builders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DdlOptions {
    #[serde(default)]
    pub quoting: Quoting,
}

impl DdlOptions {
    pub fn strict() -> Self {
        Self {
            quoting: Quoting::Strict,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.quoting == Quoting::Strict
    }

    /// A dotted name such as `catalog.schema.table`
    pub(crate) fn qualified_name(&self, name: &str) -> String {
        match self.quoting {
            Quoting::Verbatim => name.to_string(),
            Quoting::Strict => name
                .split('.')
                .map(quote_identifier)
                .collect::<Vec<_>>()
                .join("."),
        }
    }

    pub(crate) fn column_name(&self, name: &str) -> String {
        match self.quoting {
            Quoting::Verbatim => name.to_string(),
            Quoting::Strict => quote_identifier(name),
        }
    }

    /// Table property key or value
    pub(crate) fn property(&self, text: &str) -> String {
        match self.quoting {
            Quoting::Verbatim => text.to_string(),
            Quoting::Strict => quote_literal(text),
        }
    }

    /// Body of the single-quoted `LOCATION` literal
    pub(crate) fn location_body(&self, location: &str) -> String {
        match self.quoting {
            Quoting::Verbatim => location.to_string(),
            Quoting::Strict => location.replace('\'', "''"),
        }
    }
}

fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

fn quote_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::DdlGeneratorError;
use super::table_ddl::DdlGenerator;
use crate::field_schema::FieldSchemaEngine;
use crate::model_catalog::{ExecutionContext, ResolvedModel};

/// The four table statements a model can be rendered into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
#[value(rename_all = "kebab-case")]
pub enum TableStatement {
    #[default]
    CreateIfNotExists,
    CreateOrReplace,
    CreateExternalIfNotExists,
    CreateOrReplaceExternal,
}

impl TableStatement {
    pub const ALL: [TableStatement; 4] = [
        TableStatement::CreateIfNotExists,
        TableStatement::CreateOrReplace,
        TableStatement::CreateExternalIfNotExists,
        TableStatement::CreateOrReplaceExternal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TableStatement::CreateIfNotExists => "create-if-not-exists",
            TableStatement::CreateOrReplace => "create-or-replace",
            TableStatement::CreateExternalIfNotExists => "create-external-if-not-exists",
            TableStatement::CreateOrReplaceExternal => "create-or-replace-external",
        }
    }

    /// External statements need a location prefix
    pub fn is_external(&self) -> bool {
        matches!(
            self,
            TableStatement::CreateExternalIfNotExists | TableStatement::CreateOrReplaceExternal
        )
    }

    pub fn render<E, C>(
        &self,
        generator: &DdlGenerator<E>,
        model: &ResolvedModel<'_, C>,
    ) -> Result<String, DdlGeneratorError>
    where
        E: FieldSchemaEngine,
        C: ExecutionContext,
    {
        match self {
            TableStatement::CreateIfNotExists => generator.create_table_if_not_exists(model),
            TableStatement::CreateOrReplace => generator.create_or_replace_table(model),
            TableStatement::CreateExternalIfNotExists => {
                generator.create_external_table_if_not_exists(model)
            }
            TableStatement::CreateOrReplaceExternal => {
                generator.create_or_replace_external_table(model)
            }
        }
    }
}

impl fmt::Display for TableStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableStatement {
    type Err = DdlGeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TableStatement::ALL
            .into_iter()
            .find(|statement| statement.as_str() == s)
            .ok_or_else(|| {
                let expected = TableStatement::ALL
                    .iter()
                    .map(TableStatement::as_str)
                    .collect::<Vec<_>>()
                    .join(", ");
                DdlGeneratorError::UnknownStatement(s.to_string(), expected)
            })
    }
}

use log::debug;

use super::errors::DdlGeneratorError;
use super::quoting::DdlOptions;
use crate::field_schema::{FieldSchemaEngine, SparkTypeEngine};
use crate::model_catalog::{ExecutionContext, ResolvedModel};

/// Builds table DDL for resolved models.
///
/// Every builder is a single pass over the model's metadata: it returns the
/// complete statement or fails before producing any output.
#[derive(Debug, Clone)]
pub struct DdlGenerator<E = SparkTypeEngine> {
    engine: E,
    options: DdlOptions,
}

impl Default for DdlGenerator<SparkTypeEngine> {
    fn default() -> Self {
        Self::new(SparkTypeEngine)
    }
}

impl<E: FieldSchemaEngine> DdlGenerator<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            options: DdlOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DdlOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &DdlOptions {
        &self.options
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// `name TYPE, name TYPE, ...` in the order the engine reports
    pub fn column_definition<C: ExecutionContext>(
        &self,
        model: &ResolvedModel<'_, C>,
    ) -> Result<String, DdlGeneratorError> {
        let columns = self.engine.schema_of(model.definition())?;
        Ok(columns
            .iter()
            .map(|column| {
                format!(
                    "{} {}",
                    self.options.column_name(&column.name),
                    column.data_type.to_uppercase()
                )
            })
            .collect::<Vec<_>>()
            .join(", "))
    }

    /// Appends ` TBLPROPERTIES(k = v, ...)`; identity when there are none
    pub fn with_table_properties<C: ExecutionContext>(
        &self,
        sql: String,
        model: &ResolvedModel<'_, C>,
    ) -> String {
        let properties = model.table_properties();
        if properties.is_empty() {
            return sql;
        }

        let rendered = properties
            .iter()
            .map(|(key, value)| {
                format!(
                    "{} = {}",
                    self.options.property(key),
                    self.options.property(value)
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} TBLPROPERTIES({})", sql, rendered)
    }

    pub fn create_table_if_not_exists<C: ExecutionContext>(
        &self,
        model: &ResolvedModel<'_, C>,
    ) -> Result<String, DdlGeneratorError> {
        self.managed_table("CREATE TABLE IF NOT EXISTS", model)
    }

    pub fn create_or_replace_table<C: ExecutionContext>(
        &self,
        model: &ResolvedModel<'_, C>,
    ) -> Result<String, DdlGeneratorError> {
        self.managed_table("CREATE OR REPLACE TABLE", model)
    }

    pub fn create_external_table_if_not_exists<C: ExecutionContext>(
        &self,
        model: &ResolvedModel<'_, C>,
    ) -> Result<String, DdlGeneratorError> {
        self.external_table("CREATE EXTERNAL TABLE IF NOT EXISTS", model)
    }

    pub fn create_or_replace_external_table<C: ExecutionContext>(
        &self,
        model: &ResolvedModel<'_, C>,
    ) -> Result<String, DdlGeneratorError> {
        self.external_table("CREATE OR REPLACE EXTERNAL TABLE", model)
    }

    fn managed_table<C: ExecutionContext>(
        &self,
        keyword: &str,
        model: &ResolvedModel<'_, C>,
    ) -> Result<String, DdlGeneratorError> {
        let columns = self.column_definition(model)?;
        let full_table_name = model.full_table_name()?;

        let sql = format!(
            "{} {} ({})",
            keyword,
            self.options.qualified_name(&full_table_name),
            columns
        );
        Ok(self.finish(sql, model))
    }

    fn external_table<C: ExecutionContext>(
        &self,
        keyword: &str,
        model: &ResolvedModel<'_, C>,
    ) -> Result<String, DdlGeneratorError> {
        let columns = self.column_definition(model)?;
        let full_table_name = model.full_table_name()?;
        let location_prefix = model.location_prefix()?;

        let location = format!("{}/{}", location_prefix, full_table_name);
        let sql = format!(
            "{} {} ({}) USING DELTA LOCATION '{}'",
            keyword,
            self.options.qualified_name(&full_table_name),
            columns,
            self.options.location_body(&location)
        );
        Ok(self.finish(sql, model))
    }

    fn finish<C: ExecutionContext>(&self, sql: String, model: &ResolvedModel<'_, C>) -> String {
        let sql = self.with_table_properties(sql, model);
        debug!("Generated DDL for model {}: {}", model.name(), sql);
        sql
    }
}

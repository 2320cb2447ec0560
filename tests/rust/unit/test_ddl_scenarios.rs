//! Statement output for the documented model scenarios
//!
//! Output is compared byte for byte; migration runners depend on it.

#[cfg(test)]
mod ddl_scenario_tests {
    use delta_ddl::model_catalog::FixedContext;
    use delta_ddl::{
        DdlGenerator, DdlGeneratorError, ModelDefinition, ModelError, ModelRegistry,
        TableStatement,
    };

    fn foo() -> ModelDefinition {
        ModelDefinition::new("Foo")
            .table("table")
            .schema("schema")
            .field("c1", "str")
            .field("c2", "int")
    }

    fn render(model: ModelDefinition, statement: TableStatement) -> Result<String, DdlGeneratorError> {
        let registry = ModelRegistry::from_models(vec![model]).unwrap();
        let resolved = registry.resolve("Foo", FixedContext::LOCAL).unwrap();
        statement.render(&DdlGenerator::default(), &resolved)
    }

    #[test]
    fn test_table_properties_are_appended() {
        let model = foo()
            .property("property1", "value1")
            .property("property2", "value2");
        assert_eq!(
            render(model, TableStatement::CreateIfNotExists).unwrap(),
            "CREATE TABLE IF NOT EXISTS schema.table (c1 STRING, c2 LONG) TBLPROPERTIES(property1 = value1, property2 = value2)"
        );
    }

    #[test]
    fn test_create_table_if_not_exists() {
        assert_eq!(
            render(foo(), TableStatement::CreateIfNotExists).unwrap(),
            "CREATE TABLE IF NOT EXISTS schema.table (c1 STRING, c2 LONG)"
        );
    }

    #[test]
    fn test_create_or_replace_table() {
        assert_eq!(
            render(foo(), TableStatement::CreateOrReplace).unwrap(),
            "CREATE OR REPLACE TABLE schema.table (c1 STRING, c2 LONG)"
        );
    }

    #[test]
    fn test_create_or_replace_external_table() {
        assert_eq!(
            render(foo().location("s3://some-bucket"), TableStatement::CreateOrReplaceExternal).unwrap(),
            "CREATE OR REPLACE EXTERNAL TABLE schema.table (c1 STRING, c2 LONG) USING DELTA LOCATION 's3://some-bucket/schema.table'"
        );
    }

    #[test]
    fn test_create_external_table_if_not_exists_with_location_prefix() {
        assert_eq!(
            render(foo().location("s3://some-bucket"), TableStatement::CreateExternalIfNotExists).unwrap(),
            "CREATE EXTERNAL TABLE IF NOT EXISTS schema.table (c1 STRING, c2 LONG) USING DELTA LOCATION 's3://some-bucket/schema.table'"
        );
    }

    #[test]
    fn test_create_external_table_without_location_prefix() {
        let err = render(foo(), TableStatement::CreateExternalIfNotExists).unwrap_err();
        assert_eq!(
            err.model_error(),
            Some(&ModelError::LocationPrefixNotSet {
                model: "Foo".to_string()
            })
        );
    }

    #[test]
    fn test_get_column_definition() {
        let model = ModelDefinition::new("Foo")
            .field("c1", "str")
            .field("c2", "int")
            .field("c3", "float")
            .field("c4", "bool")
            .field("c5", "datetime");
        let registry = ModelRegistry::from_models(vec![model]).unwrap();
        let resolved = registry.resolve("Foo", FixedContext::LOCAL).unwrap();

        assert_eq!(
            DdlGenerator::default().column_definition(&resolved).unwrap(),
            "c1 STRING, c2 LONG, c3 DOUBLE, c4 BOOLEAN, c5 TIMESTAMP"
        );
    }
}

//! Resolver and generator properties that hold for every statement path

#[cfg(test)]
mod resolution_property_tests {
    use delta_ddl::model_catalog::FixedContext;
    use delta_ddl::{
        DdlGenerator, Grant, ModelDefinition, ModelError, ModelRegistry, TableStatement,
    };
    use test_case::test_case;

    #[test_case("schema", "table")]
    #[test_case("raw", "events")]
    #[test_case("a_b", "c_d")]
    fn test_full_table_name_without_qualification(schema: &str, table: &str) {
        let registry = ModelRegistry::from_models(vec![ModelDefinition::new("M")
            .catalog("ignored")
            .schema(schema)
            .table(table)])
        .unwrap();
        let model = registry.resolve("M", FixedContext::LOCAL).unwrap();
        assert_eq!(model.full_table_name().unwrap(), format!("{}.{}", schema, table));
    }

    #[test]
    fn test_grant_resolution_is_idempotent_and_deduplicated() {
        let registry = ModelRegistry::from_models(vec![
            ModelDefinition::new("Child")
                .extends("Parent")
                .grant(Grant::select("analysts")),
            ModelDefinition::new("Parent").grant(Grant::select("analysts")),
        ])
        .unwrap();
        let model = registry.resolve("Child", FixedContext::LOCAL).unwrap();

        let first = model.grants();
        assert_eq!(first.len(), 1);
        assert_eq!(first, model.grants());
    }

    #[test]
    fn test_properties_clause_only_when_declared() {
        let registry = ModelRegistry::from_models(vec![ModelDefinition::new("M")
            .schema("s")
            .table("t")
            .location("s3://b")
            .field("id", "int")])
        .unwrap();
        let model = registry.resolve("M", FixedContext::LOCAL).unwrap();
        let generator = DdlGenerator::default();

        for statement in TableStatement::ALL {
            let sql = statement.render(&generator, &model).unwrap();
            assert!(!sql.contains("TBLPROPERTIES"), "{}: {}", statement, sql);
            assert_eq!(generator.with_table_properties(sql.clone(), &model), sql);
        }
    }

    #[test]
    fn test_missing_location_only_fails_external_statements() {
        let registry = ModelRegistry::from_models(vec![ModelDefinition::new("M")
            .schema("s")
            .table("t")
            .field("id", "int")])
        .unwrap();
        let model = registry.resolve("M", FixedContext::LOCAL).unwrap();
        let generator = DdlGenerator::default();

        for statement in TableStatement::ALL {
            let result = statement.render(&generator, &model);
            if statement.is_external() {
                assert!(matches!(
                    result.unwrap_err().model_error(),
                    Some(ModelError::LocationPrefixNotSet { .. })
                ));
            } else {
                assert!(result.is_ok());
            }
        }
    }

    #[test_case(ModelDefinition::new("M").table("t").location("s3://b").field("id", "int"), "schema"; "missing schema")]
    #[test_case(ModelDefinition::new("M").schema("s").location("s3://b").field("id", "int"), "table"; "missing table")]
    fn test_missing_names_fail_every_statement(model: ModelDefinition, missing: &str) {
        let registry = ModelRegistry::from_models(vec![model]).unwrap();
        let resolved = registry.resolve("M", FixedContext::LOCAL).unwrap();
        let generator = DdlGenerator::default();

        for statement in TableStatement::ALL {
            let err = statement.render(&generator, &resolved).unwrap_err();
            let model_error = err.model_error().cloned();
            match missing {
                "schema" => assert_eq!(
                    model_error,
                    Some(ModelError::SchemaNameNotSet {
                        model: "M".to_string()
                    })
                ),
                _ => assert_eq!(
                    model_error,
                    Some(ModelError::TableNameNotSet {
                        model: "M".to_string()
                    })
                ),
            }
        }
    }

    #[test]
    fn test_columns_keep_declaration_order() {
        let registry = ModelRegistry::from_models(vec![ModelDefinition::new("M")
            .field("zz", "bool")
            .field("aa", "Optional[str]")
            .field("mm", "list[int]")])
        .unwrap();
        let model = registry.resolve("M", FixedContext::LOCAL).unwrap();

        assert_eq!(
            DdlGenerator::default().column_definition(&model).unwrap(),
            "zz BOOLEAN, aa STRING, mm ARRAY<LONG>"
        );
    }
}

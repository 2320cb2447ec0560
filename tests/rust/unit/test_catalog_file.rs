//! Loading model catalogs from YAML and rendering them end to end
//!
//! Uses temporary files and no external services.

#[cfg(test)]
mod catalog_file_tests {
    use std::collections::BTreeSet;
    use std::env;
    use std::io::Write;

    use delta_ddl::config::GeneratorConfig;
    use delta_ddl::model_catalog::{load_registry, FixedContext, RuntimeEnvProbe};
    use delta_ddl::{DdlGenerator, Grant, ModelError, TableStatement};
    use serial_test::serial;

    const CATALOG: &str = r#"
name: warehouse
models:
  - name: Audited
    grants:
      - { action: select, principal: auditors }
  - name: Writable
    grants:
      - { action: insert, principal: etl }
      - { action: select, principal: auditors }
  - name: Events
    extends: [Audited, Writable]
    catalog_name: main
    schema_name: raw
    table_name: events
    location_prefix: s3://lake
    grants:
      - { action: remove, principal: admins }
    table_properties:
      delta.appendOnly: "true"
      delta.logRetentionDuration: interval 30 days
    fields:
      - { name: id, type: int }
      - { name: payload, type: "dict[str, str]" }
      - { name: at, type: datetime }
"#;

    fn catalog_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_external_table_from_catalog_in_platform_runtime() {
        let file = catalog_file(CATALOG);
        let registry = load_registry(file.path()).unwrap();
        let model = registry.resolve("Events", FixedContext::PLATFORM).unwrap();

        assert_eq!(
            TableStatement::CreateOrReplaceExternal
                .render(&DdlGenerator::default(), &model)
                .unwrap(),
            "CREATE OR REPLACE EXTERNAL TABLE main.raw.events (id LONG, payload MAP<STRING,STRING>, at TIMESTAMP) USING DELTA LOCATION 's3://lake/main.raw.events' TBLPROPERTIES(delta.appendOnly = true, delta.logRetentionDuration = interval 30 days)"
        );
    }

    #[test]
    fn test_grants_from_catalog() {
        let file = catalog_file(CATALOG);
        let registry = load_registry(file.path()).unwrap();
        let model = registry.resolve("Events", FixedContext::LOCAL).unwrap();

        let expected: BTreeSet<Grant> = [
            Grant::select("auditors"),
            Grant::insert("etl"),
            Grant::remove("admins"),
        ]
        .into_iter()
        .collect();
        assert_eq!(model.grants(), expected);
    }

    #[test]
    fn test_cyclic_catalog_is_rejected() {
        let file = catalog_file(
            r#"
models:
  - { name: A, extends: [C] }
  - { name: B, extends: [A] }
  - { name: C, extends: [B] }
"#,
        );
        let err = load_registry(file.path()).unwrap_err();
        assert_eq!(
            err,
            ModelError::CyclicInheritance {
                cycle: vec![
                    "A".to_string(),
                    "C".to_string(),
                    "B".to_string(),
                    "A".to_string()
                ]
            }
        );
    }

    #[test]
    fn test_duplicate_models_are_rejected() {
        let file = catalog_file("models: [ { name: A }, { name: A } ]");
        assert_eq!(
            load_registry(file.path()).unwrap_err(),
            ModelError::DuplicateModel {
                model: "A".to_string()
            }
        );
    }

    #[test]
    #[serial]
    fn test_runtime_probe_switches_qualification() {
        const VAR: &str = "DELTA_DDL_IT_RUNTIME_VERSION";
        let file = catalog_file(CATALOG);
        let registry = load_registry(file.path()).unwrap();
        let probe = RuntimeEnvProbe::new(VAR);
        let model = registry.resolve("Events", &probe).unwrap();

        env::remove_var(VAR);
        assert_eq!(model.full_table_name().unwrap(), "raw.events");

        env::set_var(VAR, "15.4");
        assert_eq!(model.full_table_name().unwrap(), "main.raw.events");

        env::remove_var(VAR);
    }

    #[test]
    fn test_generator_config_drives_context_and_quoting() {
        let file = catalog_file(CATALOG);
        let registry = load_registry(file.path()).unwrap();
        let config = GeneratorConfig {
            force_platform_runtime: Some(true),
            strict_quoting: true,
            ..Default::default()
        };
        let context = config.execution_context();
        let model = registry.resolve("Events", &context).unwrap();
        let generator = DdlGenerator::default().with_options(config.ddl_options());

        assert_eq!(
            generator.create_table_if_not_exists(&model).unwrap(),
            "CREATE TABLE IF NOT EXISTS `main`.`raw`.`events` (`id` LONG, `payload` MAP<STRING,STRING>, `at` TIMESTAMP) TBLPROPERTIES('delta.appendOnly' = 'true', 'delta.logRetentionDuration' = 'interval 30 days')"
        );
    }
}

use std::path::PathBuf;
use std::process;

use clap::Parser;
use delta_ddl::config::{self, GeneratorConfig};
use delta_ddl::model_catalog;
use delta_ddl::{DdlGenerator, ModelRegistry, SparkTypeEngine, TableStatement};
use dotenvy::dotenv;
use log::debug;

/// delta-ddl - Render Delta table DDL from a YAML model catalog
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Model catalog YAML file
    #[arg(long)]
    catalog: PathBuf,

    /// Model to render (required unless --all is given)
    #[arg(long, required_unless_present = "all")]
    model: Option<String>,

    /// Render every model in the catalog that declares a table name
    #[arg(long, conflicts_with = "model")]
    all: bool,

    /// Statement kind
    #[arg(long, value_enum, default_value_t = TableStatement::CreateIfNotExists)]
    statement: TableStatement,

    /// Print the resolved grants instead of DDL
    #[arg(long)]
    show_grants: bool,

    /// Generator configuration YAML file (defaults to environment variables)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Environment variable that marks the platform runtime [default: DATABRICKS_RUNTIME_VERSION]
    #[arg(long)]
    runtime_env_var: Option<String>,

    /// Force platform runtime qualification on or off
    #[arg(long)]
    platform_runtime: Option<bool>,

    /// Quote identifiers and property literals
    #[arg(long)]
    strict_quoting: bool,
}

impl From<&Cli> for config::CliConfig {
    fn from(cli: &Cli) -> Self {
        config::CliConfig {
            runtime_env_var: cli.runtime_env_var.clone(),
            force_platform_runtime: cli.platform_runtime,
            strict_quoting: cli.strict_quoting,
        }
    }
}

fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = GeneratorConfig::from_sources(cli.config.as_ref(), cli.into())?;
    debug!("Using configuration: {:?}", config);

    let registry = model_catalog::load_registry(&cli.catalog)?;
    let names = model_names(cli, &registry);
    let context = config.execution_context();
    let generator = DdlGenerator::new(SparkTypeEngine).with_options(config.ddl_options());

    for name in names {
        let model = registry.resolve(&name, &context)?;
        if cli.show_grants {
            for grant in model.grants() {
                println!("{}\t{}\t{}", model.name(), grant.action, grant.principal);
            }
        } else {
            println!("{}", cli.statement.render(&generator, &model)?);
        }
    }
    Ok(())
}

fn model_names(cli: &Cli, registry: &ModelRegistry) -> Vec<String> {
    if cli.all {
        registry
            .models()
            .filter(|model| {
                let is_table = model.table_name.as_deref().is_some_and(|t| !t.is_empty());
                if !is_table {
                    debug!("Skipping model {} without a table name", model.name);
                }
                is_table
            })
            .map(|model| model.name.clone())
            .collect()
    } else {
        cli.model.iter().cloned().collect()
    }
}

//! Model registry and metadata resolution.
//!
//! A [`ModelRegistry`] owns every [`ModelDefinition`] and the explicit
//! `extends` relation between them. The relation is acyclic by construction:
//! [`ModelRegistry::register`] only accepts a model once all of its parents
//! are registered, and [`ModelRegistry::from_models`] orders a batch of
//! models so that parents come first, rejecting cycles.
//!
//! [`ResolvedModel`] is a view of one registered model plus an
//! [`ExecutionContext`]. Nothing is cached: every accessor recomputes its
//! value from the declared state, so repeated calls agree.

use indexmap::IndexMap;
use log::{debug, warn};
use std::collections::{BTreeSet, HashMap, HashSet};

use super::environment::ExecutionContext;
use super::errors::ModelError;
use super::grant::Grant;
use super::model::{ModelDefinition, TableProperties};

/// Rendered in place of a missing catalog when qualifying inside the platform
pub const ABSENT_CATALOG_SEGMENT: &str = "None";

#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: IndexMap<String, ModelDefinition>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from models in any order.
    ///
    /// Parents are registered before their children. Unknown parents,
    /// duplicate names and cycles are rejected.
    pub fn from_models<I>(models: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = ModelDefinition>,
    {
        let mut pending: IndexMap<String, ModelDefinition> = IndexMap::new();
        for model in models {
            if pending.contains_key(&model.name) {
                return Err(ModelError::DuplicateModel { model: model.name });
            }
            pending.insert(model.name.clone(), model);
        }

        for model in pending.values() {
            for parent in &model.extends {
                if !pending.contains_key(parent) {
                    return Err(ModelError::UnknownParent {
                        model: model.name.clone(),
                        parent: parent.clone(),
                    });
                }
            }
        }

        let order = registration_order(&pending)?;
        let mut registry = Self::new();
        for name in order {
            if let Some(model) = pending.swap_remove(&name) {
                registry.register(model)?;
            }
        }
        Ok(registry)
    }

    /// Register a single model; every parent must already be registered
    pub fn register(&mut self, model: ModelDefinition) -> Result<(), ModelError> {
        if self.models.contains_key(&model.name) {
            return Err(ModelError::DuplicateModel { model: model.name });
        }
        if let Some(parent) = model
            .extends
            .iter()
            .find(|parent| !self.models.contains_key(parent.as_str()))
        {
            return Err(ModelError::UnknownParent {
                model: model.name.clone(),
                parent: parent.clone(),
            });
        }

        debug!(
            "Registered model {} (extends: {:?})",
            model.name, model.extends
        );
        self.models.insert(model.name.clone(), model);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ModelDefinition> {
        self.models.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.models.contains_key(name)
    }

    /// Models in registration order
    pub fn models(&self) -> impl Iterator<Item = &ModelDefinition> {
        self.models.values()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Resolve a registered model under the given execution context
    pub fn resolve<C: ExecutionContext>(
        &self,
        name: &str,
        context: C,
    ) -> Result<ResolvedModel<'_, C>, ModelError> {
        let model = self.get(name).ok_or_else(|| ModelError::UnknownModel {
            model: name.to_string(),
        })?;
        Ok(ResolvedModel {
            registry: self,
            model,
            context,
        })
    }
}

/// Topological order over the `extends` relation, parents first.
///
/// Ties keep declaration order so output is stable.
fn registration_order(
    models: &IndexMap<String, ModelDefinition>,
) -> Result<Vec<String>, ModelError> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Visiting,
        Done,
    }

    fn visit(
        name: &str,
        models: &IndexMap<String, ModelDefinition>,
        marks: &mut HashMap<String, Mark>,
        path: &mut Vec<String>,
        order: &mut Vec<String>,
    ) -> Result<(), ModelError> {
        match marks.get(name) {
            Some(Mark::Done) => return Ok(()),
            Some(Mark::Visiting) => {
                let start = path.iter().position(|n| n == name).unwrap_or(0);
                let mut cycle = path[start..].to_vec();
                cycle.push(name.to_string());
                return Err(ModelError::CyclicInheritance { cycle });
            }
            None => {}
        }

        marks.insert(name.to_string(), Mark::Visiting);
        path.push(name.to_string());
        if let Some(model) = models.get(name) {
            for parent in &model.extends {
                visit(parent, models, marks, path, order)?;
            }
        }
        path.pop();
        marks.insert(name.to_string(), Mark::Done);
        order.push(name.to_string());
        Ok(())
    }

    let mut marks = HashMap::new();
    let mut order = Vec::with_capacity(models.len());
    for name in models.keys() {
        let mut path = Vec::new();
        visit(name, models, &mut marks, &mut path, &mut order)?;
    }
    Ok(order)
}

/// A registered model together with the context used to qualify its names
#[derive(Debug, Clone)]
pub struct ResolvedModel<'a, C> {
    registry: &'a ModelRegistry,
    model: &'a ModelDefinition,
    context: C,
}

impl<'a, C: ExecutionContext> ResolvedModel<'a, C> {
    pub fn name(&self) -> &'a str {
        &self.model.name
    }

    pub fn definition(&self) -> &'a ModelDefinition {
        self.model
    }

    pub fn catalog_name(&self) -> Option<&'a str> {
        self.model.catalog_name.as_deref()
    }

    pub fn schema_name(&self) -> Option<&'a str> {
        self.model.schema_name.as_deref()
    }

    pub fn table_name(&self) -> Option<&'a str> {
        self.model.table_name.as_deref()
    }

    /// Declared location prefix; only external tables need it
    pub fn location_prefix(&self) -> Result<&'a str, ModelError> {
        non_empty(self.model.location_prefix.as_deref()).ok_or_else(|| {
            ModelError::LocationPrefixNotSet {
                model: self.model.name.clone(),
            }
        })
    }

    /// Declared table properties, empty when none were set
    pub fn table_properties(&self) -> &'a TableProperties {
        &self.model.table_properties
    }

    /// Own grants merged with the grants of every ancestor.
    ///
    /// Diamond hierarchies visit each ancestor once; equal grants collapse
    /// into one entry.
    pub fn grants(&self) -> BTreeSet<Grant> {
        let mut grants = BTreeSet::new();
        let mut visited = HashSet::new();
        let mut stack = vec![self.model];

        while let Some(model) = stack.pop() {
            if !visited.insert(model.name.as_str()) {
                continue;
            }
            grants.extend(model.grants.iter().cloned());
            for parent in &model.extends {
                match self.registry.get(parent) {
                    Some(parent_model) => stack.push(parent_model),
                    None => warn!(
                        "Model {} extends unregistered model {}; skipping its grants",
                        model.name, parent
                    ),
                }
            }
        }

        debug!(
            "Resolved {} grant(s) for model {} across {} model(s)",
            grants.len(),
            self.model.name,
            visited.len()
        );
        grants
    }

    /// Schema name, prefixed with the catalog inside the platform runtime.
    ///
    /// Inside the platform a missing catalog is not an error; the segment is
    /// rendered as [`ABSENT_CATALOG_SEGMENT`].
    pub fn full_schema_name(&self) -> Result<String, ModelError> {
        let schema_name =
            non_empty(self.schema_name()).ok_or_else(|| ModelError::SchemaNameNotSet {
                model: self.model.name.clone(),
            })?;

        if !self.context.is_platform_runtime() {
            return Ok(schema_name.to_string());
        }

        let catalog_name = match self.catalog_name() {
            Some(catalog_name) => catalog_name,
            None => {
                warn!(
                    "Model {} has no catalog_name; qualifying schema as {}.{}",
                    self.model.name, ABSENT_CATALOG_SEGMENT, schema_name
                );
                ABSENT_CATALOG_SEGMENT
            }
        };
        Ok(format!("{}.{}", catalog_name, schema_name))
    }

    pub fn full_table_name(&self) -> Result<String, ModelError> {
        let table_name =
            non_empty(self.table_name()).ok_or_else(|| ModelError::TableNameNotSet {
                model: self.model.name.clone(),
            })?;
        Ok(format!("{}.{}", self.full_schema_name()?, table_name))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

//! Declared field types to Spark SQL type names.
//!
//! | Declared | Spark |
//! |---|---|
//! | `str` | `string` |
//! | `int` | `long` |
//! | `float` | `double` |
//! | `bool` | `boolean` |
//! | `datetime` | `timestamp` |
//! | `date` | `date` |
//! | `bytes` | `binary` |
//! | `decimal` | `decimal(38,18)` |
//! | `Optional[T]` | mapping of `T` |
//! | `list[T]`, `set[T]` | `array<T>` |
//! | `dict[K, V]` | `map<K,V>` |

use log::debug;

use super::column_info::ColumnInfo;
use super::errors::FieldSchemaError;
use super::FieldSchemaEngine;
use crate::model_catalog::ModelDefinition;

/// Default engine: maps declared types of a model's fields in declaration order
#[derive(Debug, Clone, Copy, Default)]
pub struct SparkTypeEngine;

impl FieldSchemaEngine for SparkTypeEngine {
    fn schema_of(&self, model: &ModelDefinition) -> Result<Vec<ColumnInfo>, FieldSchemaError> {
        let columns = model
            .fields
            .iter()
            .map(|field| {
                let declared = field.declared_type.trim();
                if declared.is_empty() {
                    return Err(FieldSchemaError::EmptyTypeName {
                        field: field.name.clone(),
                    });
                }
                let data_type =
                    spark_type(declared).ok_or_else(|| FieldSchemaError::UnsupportedType {
                        field: field.name.clone(),
                        declared_type: field.declared_type.clone(),
                    })?;
                Ok(ColumnInfo::new(field.name.clone(), data_type))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Derived {} column(s) for model {}",
            columns.len(),
            model.name
        );
        Ok(columns)
    }
}

/// Spark type name for a declared type, `None` when unsupported
pub fn spark_type(declared: &str) -> Option<String> {
    let declared = declared.trim();

    if let Some((outer, args)) = split_generic(declared) {
        return match outer {
            "Optional" => match args.as_slice() {
                [inner] => spark_type(inner),
                _ => None,
            },
            "list" | "List" | "set" | "Set" | "tuple" | "Tuple" => match args.as_slice() {
                [inner] => Some(format!("array<{}>", spark_type(inner)?)),
                [inner, "..."] if matches!(outer, "tuple" | "Tuple") => {
                    Some(format!("array<{}>", spark_type(inner)?))
                }
                _ => None,
            },
            "dict" | "Dict" => match args.as_slice() {
                [key, value] => Some(format!("map<{},{}>", spark_type(key)?, spark_type(value)?)),
                _ => None,
            },
            _ => None,
        };
    }

    let name = match declared {
        "str" => "string",
        "int" => "long",
        "float" => "double",
        "bool" => "boolean",
        "datetime" => "timestamp",
        "date" => "date",
        "bytes" => "binary",
        "decimal" | "Decimal" => "decimal(38,18)",
        _ => return None,
    };
    Some(name.to_string())
}

/// `outer[a, b[c, d]]` into `("outer", ["a", "b[c, d]"])`
fn split_generic(declared: &str) -> Option<(&str, Vec<&str>)> {
    let open = declared.find('[')?;
    let inner = declared[open + 1..].strip_suffix(']')?;
    let outer = declared[..open].trim();

    let mut args = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, ch) in inner.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                args.push(inner[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }
    args.push(inner[start..].trim());
    if args.iter().any(|arg| arg.is_empty()) {
        return None;
    }
    Some((outer, args))
}

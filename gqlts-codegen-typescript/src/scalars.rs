//! Scalar representations.

use gqlts_codegen::generation::ImportCollector;
use gqlts_schema::{BUILT_IN_SCALARS, Schema, TypeDefinition};
use indexmap::IndexMap;
use tracing::debug;

use crate::{
    config::{Config, ScalarsConfig},
    error::{Error, Result},
    mapper::{ImportSpec, Mapping},
};

fn built_in_default(name: &str) -> &'static str {
    match name {
        "Boolean" => "boolean",
        "Int" | "Float" => "number",
        _ => "string",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarEntry {
    /// TypeScript type expression, or the local name of an imported type.
    pub representation: String,
    pub description: Option<String>,
}

/// Every scalar of a schema mapped to its representation.
///
/// Built-ins come first in their fixed order, followed by custom scalars in
/// declaration order. Other declarations refer to a scalar as
/// `Scalars['Name']`, never to its representation directly.
#[derive(Debug, Clone, Default)]
pub struct ScalarMap {
    entries: IndexMap<String, ScalarEntry>,
}

impl ScalarMap {
    /// Resolve all scalars, registering imports for descriptor mappings.
    ///
    /// Fails with [`Error::UnknownScalar`] under `strictScalars` when a
    /// custom scalar has neither a mapping nor a `defaultScalarType`.
    pub fn build(schema: &Schema, config: &Config, imports: &mut ImportCollector) -> Result<Self> {
        let mut entries = IndexMap::new();

        for name in BUILT_IN_SCALARS {
            let representation = match configured(config, name) {
                Some(mapping) => bind(mapping, name, imports),
                None => built_in_default(name).to_string(),
            };
            entries.insert(
                name.to_string(),
                ScalarEntry {
                    representation,
                    description: None,
                },
            );
        }

        for scalar in schema.custom_scalars() {
            let name = scalar.name.as_str();
            let representation = if let Some(mapping) = configured(config, name) {
                bind(mapping, name, imports)
            } else if let ScalarsConfig::Module(module) = &config.scalars {
                ImportSpec::named(module, name).bind(name, imports)
            } else if let Some(default) = &config.default_scalar_type {
                default.clone()
            } else if config.strict_scalars {
                return Err(Error::UnknownScalar {
                    name: name.to_string(),
                });
            } else {
                config.default_scalar().to_string()
            };
            debug!(scalar = name, representation = %representation, "resolved scalar");
            entries.insert(
                name.to_string(),
                ScalarEntry {
                    representation,
                    description: scalar.description.clone(),
                },
            );
        }

        Ok(Self { entries })
    }

    pub fn get(&self, name: &str) -> Option<&ScalarEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScalarEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }
}

/// Whether `name` should be referenced through the `Scalars` map.
pub(crate) fn is_scalar(schema: &Schema, scalars: &ScalarMap, name: &str) -> bool {
    scalars.contains(name) || matches!(schema.get(name), Some(TypeDefinition::Scalar(_)))
}

fn configured<'c>(config: &'c Config, name: &str) -> Option<&'c str> {
    match &config.scalars {
        ScalarsConfig::Map(map) => map.get(name).map(String::as_str),
        ScalarsConfig::Module(_) => None,
    }
}

fn bind(mapping: &str, name: &str, imports: &mut ImportCollector) -> String {
    match Mapping::parse(mapping) {
        Mapping::Literal(literal) => literal,
        Mapping::Import(spec) => spec.bind(name, imports),
    }
}

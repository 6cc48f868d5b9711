//! Enum resolution.
//!
//! Every enum is either declared locally, with resolved member keys and
//! values, or bound to an external symbol that is imported and re-exported
//! instead of declared.

use std::collections::HashSet;

use gqlts_codegen::generation::ImportCollector;
use gqlts_schema::{EnumType, EnumValue, InternalValue, Schema, TypeDefinition, deprecation_reason};
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::{
    config::{Config, EnumValueMapping, EnumValuesConfig, Literal},
    mapper::{ImportSpec, Mapping},
    naming::{Namer, property_key, quote},
};

/// A member of a locally declared enum.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    pub raw: String,
    /// Property key, quoted when it is not a legal identifier.
    pub key: String,
    /// TypeScript literal of the member's value.
    pub value: String,
    pub description: Option<String>,
    pub deprecation: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedEnum {
    Local { members: Vec<EnumMember> },
    /// Bound to an imported symbol; `expr` is the imported local name or
    /// `Namespace.Member` path.
    External { expr: String },
}

/// All enums of a schema, keyed by raw name in declaration order.
#[derive(Debug, Clone, Default)]
pub struct EnumTable {
    enums: IndexMap<String, ResolvedEnum>,
}

impl EnumTable {
    pub fn build(schema: &Schema, config: &Config, imports: &mut ImportCollector) -> Self {
        let namer = Namer::new(config);
        let mut enums = IndexMap::new();

        for ty in schema.types().filter(|ty| !ty.is_introspection()) {
            let TypeDefinition::Enum(enum_type) = ty else {
                continue;
            };
            let resolved = match external_spec(config, &enum_type.name) {
                Some(spec) => {
                    let expr = spec.bind(&enum_type.name, imports);
                    debug!(name = %enum_type.name, expr = %expr, "enum bound to external symbol");
                    ResolvedEnum::External { expr }
                }
                None => ResolvedEnum::Local {
                    members: resolve_members(enum_type, config, namer),
                },
            };
            enums.insert(enum_type.name.clone(), resolved);
        }

        Self { enums }
    }

    pub fn get(&self, name: &str) -> Option<&ResolvedEnum> {
        self.enums.get(name)
    }

    pub fn is_external(&self, name: &str) -> bool {
        matches!(self.enums.get(name), Some(ResolvedEnum::External { .. }))
    }

    /// `import Name = expr;` lines for external enums whose bound
    /// expression differs from their name.
    pub fn alias_lines(&self) -> Vec<String> {
        self.externals()
            .filter(|(name, expr)| name != expr)
            .map(|(name, expr)| format!("import {name} = {expr};"))
            .collect()
    }

    /// Names of external enums, which are re-exported after all declarations.
    pub fn re_exports(&self) -> Vec<&str> {
        self.externals().map(|(name, _)| name).collect()
    }

    fn externals(&self) -> impl Iterator<Item = (&str, &str)> {
        self.enums.iter().filter_map(|(name, resolved)| match resolved {
            ResolvedEnum::External { expr } => Some((name.as_str(), expr.as_str())),
            ResolvedEnum::Local { .. } => None,
        })
    }
}

fn external_spec(config: &Config, name: &str) -> Option<ImportSpec> {
    match &config.enum_values {
        EnumValuesConfig::Module(module) => Some(ImportSpec::named(module, name)),
        EnumValuesConfig::Map(map) => match map.get(name)? {
            EnumValueMapping::External(value) => match Mapping::parse(value) {
                Mapping::Import(spec) => Some(spec),
                Mapping::Literal(module) => Some(ImportSpec::named(&module, name)),
            },
            EnumValueMapping::Values(_) => None,
        },
    }
}

fn overrides<'c>(config: &'c Config, name: &str) -> Option<&'c IndexMap<String, Literal>> {
    match &config.enum_values {
        EnumValuesConfig::Map(map) => match map.get(name)? {
            EnumValueMapping::Values(values) => Some(values),
            EnumValueMapping::External(_) => None,
        },
        EnumValuesConfig::Module(_) => None,
    }
}

fn resolve_members(enum_type: &EnumType, config: &Config, namer: Namer<'_>) -> Vec<EnumMember> {
    let overrides = overrides(config, &enum_type.name);
    let mut taken = HashSet::new();

    enum_type
        .values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let key = unique_key(&enum_type.name, value, namer, &mut taken);
            EnumMember {
                raw: value.name.clone(),
                key: property_key(&key),
                value: member_value(value, index, overrides, config),
                description: value.description.clone(),
                deprecation: deprecation_reason(&value.directives).map(str::to_string),
            }
        })
        .collect()
}

/// Configured override, then schema-level value, then position under
/// `numericEnums`, then the raw name.
fn member_value(
    value: &EnumValue,
    index: usize,
    overrides: Option<&IndexMap<String, Literal>>,
    config: &Config,
) -> String {
    if let Some(literal) = overrides.and_then(|o| o.get(&value.name)) {
        return literal.to_typescript();
    }
    match &value.internal {
        Some(InternalValue::String(s)) => quote(s),
        Some(InternalValue::Int(i)) => i.to_string(),
        Some(InternalValue::Float(f)) => f.to_string(),
        None if config.numeric_enums => index.to_string(),
        None => quote(&value.name),
    }
}

fn unique_key(
    enum_name: &str,
    value: &EnumValue,
    namer: Namer<'_>,
    taken: &mut HashSet<String>,
) -> String {
    let converted = namer.enum_member(&value.name);
    if taken.insert(converted.clone()) {
        return converted;
    }
    warn!(
        enum_name,
        value = %value.name,
        key = %converted,
        "enum member key collides with an earlier member"
    );
    if taken.insert(value.name.clone()) {
        return value.name.clone();
    }
    let mut n = 1;
    loop {
        let candidate = format!("{converted}_{n}");
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

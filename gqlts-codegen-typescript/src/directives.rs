//! Directive-driven type overrides.
//!
//! `directiveArgumentAndInputFieldMappings` maps a directive name to a
//! type. An input field or argument carrying a mapped directive is typed
//! through the `DirectiveArgumentAndInputFieldMappings` record instead of
//! its schema type.

use gqlts_codegen::generation::ImportCollector;
use gqlts_schema::{Directive, Schema};
use indexmap::IndexMap;
use tracing::debug;

use crate::{
    ast::Field,
    config::{Config, DeclarationKind},
    declaration::Declaration,
    mapper::Mapping,
};

pub const MAPPINGS_TYPE: &str = "DirectiveArgumentAndInputFieldMappings";

/// Directive name to representation, in configuration order.
#[derive(Debug, Clone, Default)]
pub struct DirectiveTable {
    mappings: IndexMap<String, String>,
}

impl DirectiveTable {
    /// Resolve every configured mapping, registering imports for
    /// descriptors. The type suffix, when set, is appended to the local
    /// name of imported symbols.
    pub fn build(config: &Config, imports: &mut ImportCollector) -> Self {
        let suffix = config
            .directive_argument_and_input_field_mapping_type_suffix
            .as_deref();
        let mappings = config
            .directive_argument_and_input_field_mappings
            .iter()
            .map(|(name, value)| {
                let representation = match Mapping::parse(value) {
                    Mapping::Literal(literal) => literal,
                    Mapping::Import(spec) => match suffix {
                        Some(suffix) => spec.with_suffix(suffix, name).bind(name, imports),
                        None => spec.bind(name, imports),
                    },
                };
                debug!(directive = %name, representation = %representation, "resolved directive mapping");
                (name.clone(), representation)
            })
            .collect();
        Self { mappings }
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Override for a field or argument carrying `directives`.
    ///
    /// The last mapped directive wins; unmapped directives are ignored.
    pub fn override_for(&self, directives: &[Directive]) -> Option<String> {
        directives
            .iter()
            .rev()
            .find(|d| self.mappings.contains_key(&d.name))
            .map(|d| format!("{MAPPINGS_TYPE}['{}']", d.name))
    }

    /// The mappings record, or nothing when no directive is mapped.
    pub fn declaration(&self, schema: &Schema, config: &Config) -> Option<Declaration> {
        if self.is_empty() {
            return None;
        }
        let description = |name: &str| {
            schema
                .directive(name)
                .and_then(|d| d.description.clone())
                .filter(|_| !config.disable_descriptions)
        };
        let fields = self
            .mappings
            .iter()
            .map(|(name, representation)| {
                Field::new(name, representation).doc(description(name))
            })
            .collect();

        Some(Declaration::Object {
            kind: DeclarationKind::Type,
            name: MAPPINGS_TYPE.to_string(),
            comment: (!config.disable_descriptions)
                .then(|| "Type overrides using directives".to_string()),
            bases: Vec::new(),
            fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn config(value: serde_json::Value) -> Config {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_last_mapped_directive_wins() {
        let config = config(json!({
            "directiveArgumentAndInputFieldMappings": {
                "asNumber": "number",
                "asString": "string"
            }
        }));
        let table = DirectiveTable::build(&config, &mut ImportCollector::new());

        let directives = [
            Directive::new("asNumber"),
            Directive::new("unmapped"),
            Directive::new("asString"),
        ];
        assert_eq!(
            table.override_for(&directives).as_deref(),
            Some("DirectiveArgumentAndInputFieldMappings['asString']")
        );
        assert_eq!(table.override_for(&[Directive::new("unmapped")]), None);
    }

    #[test]
    fn test_imported_mapping_with_suffix() {
        let config = config(json!({
            "directiveArgumentAndInputFieldMappings": {
                "asNumber": "./someModule#MyType",
                "asDefault": "./other#default"
            },
            "directiveArgumentAndInputFieldMappingTypeSuffix": "Model"
        }));
        let mut imports = ImportCollector::new();
        let table = DirectiveTable::build(&config, &mut imports);
        let schema = Schema::parse(r#""As a number" directive @asNumber on ARGUMENT_DEFINITION"#)
            .unwrap();

        let Some(Declaration::Object { name, comment, fields, .. }) =
            table.declaration(&schema, &config)
        else {
            panic!("expected mappings record");
        };
        assert_eq!(name, MAPPINGS_TYPE);
        assert_eq!(comment.as_deref(), Some("Type overrides using directives"));
        assert_eq!(
            fields,
            vec![
                Field::new("asNumber", "MyTypeModel").doc(Some("As a number")),
                Field::new("asDefault", "asDefaultModel"),
            ]
        );
        assert_eq!(imports.local_name("./someModule", "MyType"), Some("MyTypeModel"));
        assert_eq!(imports.default_name("./other"), Some("asDefaultModel"));
    }

    #[test]
    fn test_no_mappings_no_declaration() {
        let config = Config::default();
        let table = DirectiveTable::build(&config, &mut ImportCollector::new());
        assert!(table.declaration(&Schema::new(), &config).is_none());
    }
}

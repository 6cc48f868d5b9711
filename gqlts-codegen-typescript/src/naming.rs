//! Identifier resolution.
//!
//! [`Namer`] applies the configured case convention, prefix and suffix to a
//! single raw name. [`NameTable`] resolves every named entity of a schema
//! once, before anything is emitted.

use std::collections::HashMap;

use gqlts_core::Case;
use gqlts_schema::{Schema, TypeDefinition};
use indexmap::IndexMap;
use tracing::warn;

use crate::{config::Config, enums::EnumTable};

/// Single-quoted TypeScript string literal.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Whether `s` can be used as a bare TypeScript identifier or property key.
pub(crate) fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// A property key, quoted when it is not a legal identifier.
pub(crate) fn property_key(s: &str) -> String {
    if is_identifier(s) {
        s.to_string()
    } else {
        quote(s)
    }
}

/// Case conversion, prefix and suffix rules for one run.
#[derive(Debug, Clone, Copy)]
pub struct Namer<'a> {
    config: &'a Config,
}

impl<'a> Namer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    fn convert(&self, raw: &str) -> String {
        let convention = &self.config.naming_convention;
        convention
            .type_names
            .convert(raw, convention.transform_underscore)
    }

    /// Identifier of an object, interface, union or input type.
    pub fn type_name(&self, raw: &str) -> String {
        format!(
            "{}{}{}",
            self.config.types_prefix,
            self.convert(raw),
            self.config.types_suffix
        )
    }

    /// Identifier of a locally declared enum.
    pub fn enum_name(&self, raw: &str) -> String {
        let prefix = if self.config.enum_prefix {
            self.config.types_prefix.as_str()
        } else {
            ""
        };
        let suffix = if self.config.enum_suffix {
            self.config.types_suffix.as_str()
        } else {
            ""
        };
        format!("{prefix}{}{suffix}", self.convert(raw))
    }

    /// Identifier of the argument bag of `owner.field`.
    pub fn args_name(&self, owner: &str, field: &str) -> String {
        let separator = if self.config.add_underscore_to_args_type {
            "_"
        } else {
            ""
        };
        let field = self.convert(field);
        format!(
            "{}{}{}",
            self.config.types_prefix,
            self.convert(&format!("{owner}{separator}{field}Args")),
            self.config.types_suffix
        )
    }

    /// Unquoted key of an enum member.
    ///
    /// The whole raw name is converted, so underscores between words and
    /// leading underscores disappear (`_TEST` becomes `Test`). The literal
    /// value is resolved separately and keeps the raw spelling.
    pub fn enum_member(&self, raw: &str) -> String {
        let case = self.config.naming_convention.enum_values;
        match case {
            Case::Keep => raw.to_string(),
            _ => case.convert(raw, true),
        }
    }
}

/// Resolved identifiers for every named entity of a schema.
#[derive(Debug, Clone)]
pub struct NameTable<'a> {
    namer: Namer<'a>,
    types: IndexMap<String, String>,
    args: IndexMap<(String, String), String>,
}

impl<'a> NameTable<'a> {
    /// Resolve type and argument-bag names for `schema`.
    ///
    /// Externally mapped enums keep their raw name, which is the local
    /// binding the prelude creates for them. Two entities resolving to the
    /// same identifier are reported but not renamed.
    pub fn build(schema: &Schema, config: &'a Config, enums: &EnumTable) -> Self {
        let namer = Namer::new(config);
        let mut table = Self {
            namer,
            types: IndexMap::new(),
            args: IndexMap::new(),
        };
        let mut owners: HashMap<String, String> = HashMap::new();

        for ty in schema.types().filter(|ty| !ty.is_introspection()) {
            let raw = ty.name();
            let name = match ty {
                TypeDefinition::Scalar(_) => continue,
                TypeDefinition::Enum(_) if enums.is_external(raw) => raw.to_string(),
                TypeDefinition::Enum(_) => namer.enum_name(raw),
                _ => namer.type_name(raw),
            };
            claim(&mut owners, &name, raw);
            table.types.insert(raw.to_string(), name);

            if let TypeDefinition::Object(obj) | TypeDefinition::Interface(obj) = ty {
                for field in obj.fields.iter().filter(|f| !f.arguments.is_empty()) {
                    let name = namer.args_name(&obj.name, &field.name);
                    claim(&mut owners, &name, &format!("{}.{}", obj.name, field.name));
                    table
                        .args
                        .insert((obj.name.clone(), field.name.clone()), name);
                }
            }
        }
        table
    }

    /// Identifier for a named type; types missing from the schema are
    /// resolved on the fly.
    pub fn type_name(&self, raw: &str) -> String {
        self.types
            .get(raw)
            .cloned()
            .unwrap_or_else(|| self.namer.type_name(raw))
    }

    pub fn args_name(&self, owner: &str, field: &str) -> String {
        self.args
            .get(&(owner.to_string(), field.to_string()))
            .cloned()
            .unwrap_or_else(|| self.namer.args_name(owner, field))
    }
}

fn claim(owners: &mut HashMap<String, String>, name: &str, owner: &str) {
    if let Some(previous) = owners.insert(name.to_string(), owner.to_string()) {
        warn!(
            identifier = name,
            first = %previous,
            second = owner,
            "two schema entities resolve to the same identifier"
        );
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
    fn test_quote() {
        assert_eq!(quote("A_B"), "'A_B'");
        assert_eq!(quote("it's"), "'it\\'s'");
        assert_eq!(quote("a\\b"), "'a\\\\b'");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("ABC"));
        assert!(is_identifier("_TEST"));
        assert!(is_identifier("$x1"));
        assert!(!is_identifier("1X2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("a-b"));
        assert_eq!(property_key("1X2"), "'1X2'");
        assert_eq!(property_key("Axb"), "Axb");
    }

    #[test]
    fn test_type_names_keep_underscores() {
        let config = Config::default();
        let namer = Namer::new(&config);
        assert_eq!(namer.type_name("My_Type"), "My_Type");
        assert_eq!(namer.type_name("impl_3"), "Impl_3");
        assert_eq!(namer.type_name("Some_Interface"), "Some_Interface");
    }

    #[test]
    fn test_prefix_and_enum_prefix() {
        let config = config(json!({ "typesPrefix": "I", "enumPrefix": false }));
        let namer = Namer::new(&config);
        assert_eq!(namer.type_name("MyType"), "IMyType");
        assert_eq!(namer.enum_name("FilterOption"), "FilterOption");

        let config = Config {
            types_suffix: "Type".into(),
            enum_suffix: false,
            ..Default::default()
        };
        let namer = Namer::new(&config);
        assert_eq!(namer.type_name("User"), "UserType");
        assert_eq!(namer.enum_name("Role"), "Role");
    }

    #[test]
    fn test_args_names() {
        let defaults = Config::default();
        let namer = Namer::new(&defaults);
        assert_eq!(namer.args_name("MyType", "foo"), "MyTypeFooArgs");

        let lower = config_with_case("change-case-all#lowerCase");
        assert_eq!(Namer::new(&lower).args_name("MyType", "foo"), "mytypefooargs");

        let keep = config(json!({ "namingConvention": { "typeNames": "keep" } }));
        assert_eq!(Namer::new(&keep).args_name("MyType", "foo"), "MyTypefooArgs");

        let underscore = config(json!({ "addUnderscoreToArgsType": true }));
        let namer = Namer::new(&underscore);
        assert_eq!(
            namer.args_name("PullRequest", "reviewThreads"),
            "PullRequest_ReviewThreadsArgs"
        );
        assert_eq!(
            namer.args_name("PullRequestReview", "threads"),
            "PullRequestReview_ThreadsArgs"
        );
    }

    fn config_with_case(case: &str) -> Config {
        config(json!({ "namingConvention": case }))
    }

    #[test]
    fn test_enum_members() {
        let config = Config::default();
        let namer = Namer::new(&config);
        assert_eq!(namer.enum_member("A_B_C"), "ABC");
        assert_eq!(namer.enum_member("_TEST"), "Test");
        assert_eq!(namer.enum_member("My_Value"), "MyValue");
        assert_eq!(namer.enum_member("AXB"), "Axb");
        assert_eq!(namer.enum_member("_1X2"), "1X2");
        assert_eq!(namer.enum_member("TEST_VALUE"), "TestValue");

        let keep = config_with_case("keep");
        assert_eq!(Namer::new(&keep).enum_member("My_Value"), "My_Value");
    }
}

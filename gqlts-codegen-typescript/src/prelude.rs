//! Lines that precede all declarations.
//!
//! Imports come first, grouped per module in first-registration order,
//! then `import E = ...;` aliases for enums bound to namespace members or
//! renamed symbols, then the generic wrapper aliases.

use gqlts_codegen::generation::ImportCollector;

use crate::{
    ast::{Import, TypeAlias},
    config::Config,
    enums::EnumTable,
};

pub fn render(imports: &ImportCollector, enums: &EnumTable, config: &Config) -> Vec<String> {
    let mut lines: Vec<String> = imports
        .iter()
        .filter(|(_, symbols)| !symbols.is_empty())
        .map(|(module, symbols)| {
            let import = symbols
                .named
                .iter()
                .fold(Import::new(module), |import, (symbol, alias)| {
                    import.named_as(symbol, alias.clone())
                });
            let import = match &symbols.default {
                Some(local) => import.default(local),
                None => import,
            };
            line(import.build())
        })
        .collect();

    lines.extend(enums.alias_lines());

    let mut aliases = vec![
        ("Maybe<T>", &config.maybe_value),
        ("InputMaybe<T>", &config.input_maybe_value),
    ];
    if config.wrap_field_definitions {
        aliases.push(("FieldWrapper<T>", &config.field_wrapper_value));
    }
    if config.wrap_entire_field_definitions {
        aliases.push(("EntireFieldWrapper<T>", &config.entire_field_wrapper_value));
    }
    lines.extend(aliases.into_iter().map(|(name, value)| {
        line(TypeAlias::new(name, value).exported(!config.no_export).build())
    }));

    lines
}

fn line(rendered: String) -> String {
    rendered.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use gqlts_schema::Schema;
    use serde_json::json;

    use super::*;

    fn config(value: serde_json::Value) -> Config {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_default_prelude() {
        let lines = render(&ImportCollector::new(), &EnumTable::default(), &Config::default());
        assert_eq!(
            lines,
            vec![
                "export type Maybe<T> = T | null;",
                "export type InputMaybe<T> = Maybe<T>;",
            ]
        );
    }

    #[test]
    fn test_imports_aliases_and_wrappers() {
        let config = config(json!({
            "noExport": true,
            "wrapFieldDefinitions": true,
            "fieldWrapperValue": "T | Promise<T>",
            "maybeValue": "T | undefined",
            "enumValues": { "Color": "./enums#NS.Color" }
        }));
        let schema = Schema::parse("enum Color { RED }").unwrap();
        let mut imports = ImportCollector::new();
        imports.add_default("./money", "Money");
        imports.add_named("./scalars", "Json", Some("JsonValue"));
        imports.add_named("./scalars", "DateTime", None);
        let enums = EnumTable::build(&schema, &config, &mut imports);

        assert_eq!(
            render(&imports, &enums, &config),
            vec![
                "import Money from './money';",
                "import { Json as JsonValue, DateTime } from './scalars';",
                "import { NS } from './enums';",
                "import Color = NS.Color;",
                "type Maybe<T> = T | undefined;",
                "type InputMaybe<T> = Maybe<T>;",
                "type FieldWrapper<T> = T | Promise<T>;",
            ]
        );
    }
}

//! Parsing of `module#symbol` mapping values.
//!
//! `scalars`, `enumValues` and `directiveArgumentAndInputFieldMappings`
//! accept either a literal TypeScript type or an import descriptor:
//!
//! | descriptor                   | import                               | local name |
//! |------------------------------|--------------------------------------|------------|
//! | `./m#default`                | `import Name from './m';`            | `Name`     |
//! | `./m#default as Local`       | `import Local from './m';`           | `Local`    |
//! | `./m#Symbol`                 | `import { Symbol } from './m';`      | `Symbol`   |
//! | `./m#Symbol as Local`        | `import { Symbol as Local } ...`     | `Local`    |
//! | `./m#NS.Member`              | `import { NS } from './m';`          | `NS.Member`|

use gqlts_codegen::generation::ImportCollector;

/// A mapping value, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mapping {
    /// Used verbatim as a type expression.
    Literal(String),
    Import(ImportSpec),
}

impl Mapping {
    /// Classify a mapping value.
    ///
    /// A value is an import descriptor when it contains `#` and no quote
    /// characters, so string literal types such as `'a#b'` stay literals.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        let quoted = value.contains(['\'', '"', '`']);
        match value.split_once('#') {
            Some((module, spec)) if !quoted => Self::Import(ImportSpec::parse(module, spec)),
            _ => Self::Literal(value.to_string()),
        }
    }
}

/// What a descriptor imports from its module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Imported {
    /// The default export, bound to `local` or to the mapped entity's name.
    Default { local: Option<String> },
    Named {
        symbol: String,
        alias: Option<String>,
    },
    /// A member reached through a named namespace export.
    Namespace { namespace: String, member: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    pub module: String,
    pub imported: Imported,
}

impl ImportSpec {
    fn parse(module: &str, spec: &str) -> Self {
        let spec = spec.trim();
        let (symbol, alias) = match spec.split_once(" as ") {
            Some((symbol, alias)) => (symbol.trim(), Some(alias.trim().to_string())),
            None => (spec, None),
        };
        let imported = if symbol == "default" {
            Imported::Default { local: alias }
        } else if let Some((namespace, member)) =
            symbol.split_once('.').filter(|_| alias.is_none())
        {
            Imported::Namespace {
                namespace: namespace.to_string(),
                member: member.to_string(),
            }
        } else {
            Imported::Named {
                symbol: symbol.to_string(),
                alias,
            }
        };
        Self {
            module: module.trim().to_string(),
            imported,
        }
    }

    /// Import `symbol` from `module` under its own name.
    pub fn named(module: &str, symbol: &str) -> Self {
        Self {
            module: module.to_string(),
            imported: Imported::Named {
                symbol: symbol.to_string(),
                alias: None,
            },
        }
    }

    /// Append `suffix` to the local binding.
    ///
    /// Namespace members are left untouched since their binding is the
    /// namespace, not the member.
    pub fn with_suffix(mut self, suffix: &str, name: &str) -> Self {
        match &mut self.imported {
            Imported::Default { local } => {
                let base = local.as_deref().unwrap_or(name);
                *local = Some(format!("{base}{suffix}"));
            }
            Imported::Named { symbol, alias } => {
                let base = alias.as_deref().unwrap_or(symbol);
                *alias = Some(format!("{base}{suffix}"));
            }
            Imported::Namespace { .. } => {}
        }
        self
    }

    /// Register the import and return the local type expression.
    ///
    /// `name` is the mapped entity's own name, used as the binding of a
    /// default import without an explicit alias.
    pub fn bind(&self, name: &str, imports: &mut ImportCollector) -> String {
        match &self.imported {
            Imported::Default { local } => {
                let local = local.as_deref().unwrap_or(name);
                imports.add_default(&self.module, local);
                local.to_string()
            }
            Imported::Named { symbol, alias } => {
                imports.add_named(&self.module, symbol, alias.as_deref());
                alias.clone().unwrap_or_else(|| symbol.clone())
            }
            Imported::Namespace { namespace, member } => {
                imports.add_named(&self.module, namespace, None);
                format!("{namespace}.{member}")
            }
        }
    }
}

//! Import collection and deduplication.

use indexmap::IndexMap;
use tracing::warn;

/// Symbols imported from a single module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleImports {
    /// Local binding of the module's default export.
    pub default: Option<String>,
    /// Exported symbol -> optional local alias, in first-seen order.
    pub named: IndexMap<String, Option<String>>,
}

impl ModuleImports {
    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.named.is_empty()
    }
}

/// Tracks imports and deduplicates them.
///
/// Modules and the symbols within a module keep first-seen order. Imports
/// are keyed by (module, exported symbol); registering the same symbol
/// again replaces its alias, so the last registration wins.
///
/// # Example
///
/// ```
/// use gqlts_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add_named("./scalars", "DateTime", None);
/// imports.add_named("./scalars", "Json", Some("JsonValue"));
/// imports.add_default("./money", "Money");
///
/// assert_eq!(imports.local_name("./scalars", "Json"), Some("JsonValue"));
/// assert_eq!(imports.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    imports: IndexMap<String, ModuleImports>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Import a module's default export under `local`.
    ///
    /// A module has one default binding; a different earlier local is
    /// replaced and returned.
    pub fn add_default(&mut self, module: &str, local: &str) -> Option<String> {
        let entry = self.imports.entry(module.to_string()).or_default();
        let previous = entry.default.replace(local.to_string())?;
        if previous == local {
            return None;
        }
        warn!(
            module,
            replaced = %previous,
            local,
            "default import bound twice; earlier references to the replaced name are unresolved"
        );
        Some(previous)
    }

    /// Import a named export, optionally renamed.
    pub fn add_named(&mut self, module: &str, symbol: &str, alias: Option<&str>) {
        let alias = alias.filter(|a| *a != symbol).map(str::to_string);
        self.imports
            .entry(module.to_string())
            .or_default()
            .named
            .insert(symbol.to_string(), alias);
    }

    /// The name a named import is bound to locally.
    pub fn local_name(&self, module: &str, symbol: &str) -> Option<&str> {
        self.imports
            .get(module)?
            .named
            .get_key_value(symbol)
            .map(|(symbol, alias)| alias.as_deref().unwrap_or(symbol.as_str()))
    }

    /// The local binding of a module's default export.
    pub fn default_name(&self, module: &str) -> Option<&str> {
        self.imports.get(module)?.default.as_deref()
    }

    /// Check if a specific symbol is imported from a module.
    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports
            .get(module)
            .is_some_and(|symbols| symbols.named.contains_key(symbol))
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ModuleImports)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_collector_basic() {
        let mut imports = ImportCollector::new();
        imports.add_named("./scalars", "Date", None);
        imports.add_named("./scalars", "Json", None);
        imports.add_named("./enums", "Color", None);

        assert!(imports.has_symbol("./scalars", "Date"));
        assert!(!imports.has_symbol("./scalars", "Color"));
        assert_eq!(imports.len(), 2);
    }

    #[test]
    fn test_first_seen_order_is_kept() {
        let mut imports = ImportCollector::new();
        imports.add_named("./b", "Z", None);
        imports.add_named("./a", "Y", None);
        imports.add_named("./b", "A", None);

        let modules: Vec<_> = imports.iter().map(|(m, _)| m).collect();
        assert_eq!(modules, vec!["./b", "./a"]);
        let symbols: Vec<_> = imports
            .iter()
            .next()
            .map(|(_, s)| s.named.keys().cloned().collect())
            .unwrap_or_default();
        assert_eq!(symbols, vec!["Z".to_string(), "A".to_string()]);
    }

    #[test]
    fn test_last_alias_wins() {
        let mut imports = ImportCollector::new();
        imports.add_named("./m", "Sym", Some("First"));
        imports.add_named("./m", "Sym", Some("Second"));
        assert_eq!(imports.local_name("./m", "Sym"), Some("Second"));

        imports.add_named("./m", "Sym", None);
        assert_eq!(imports.local_name("./m", "Sym"), Some("Sym"));
    }

    #[test]
    fn test_alias_equal_to_symbol_is_dropped() {
        let mut imports = ImportCollector::new();
        imports.add_named("./m", "Sym", Some("Sym"));
        let named = imports.iter().next().map(|(_, s)| s.named.clone());
        assert_eq!(named.and_then(|n| n.get("Sym").cloned()), Some(None));
    }

    #[test]
    fn test_default_import() {
        let mut imports = ImportCollector::new();
        imports.add_default("./files", "MyEnum");
        imports.add_named("./files", "Other", None);
        assert_eq!(imports.default_name("./files"), Some("MyEnum"));
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn test_default_rebinding_reports_replaced_local() {
        let mut imports = ImportCollector::new();
        assert_eq!(imports.add_default("./m", "X"), None);
        assert_eq!(imports.add_default("./m", "X"), None);
        assert_eq!(imports.add_default("./m", "Y"), Some("X".to_string()));
        assert_eq!(imports.default_name("./m"), Some("Y"));
    }
}

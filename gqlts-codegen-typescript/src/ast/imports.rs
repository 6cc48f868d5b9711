use gqlts_codegen::{CodeFragment, Renderable};

/// One `import ... from '<module>';` statement.
///
/// A named symbol whose alias equals its own name is written without the
/// `as` clause.
#[derive(Debug, Clone)]
pub struct Import {
    module: String,
    default: Option<String>,
    named: Vec<(String, Option<String>)>,
}

impl Import {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            default: None,
            named: Vec::new(),
        }
    }

    /// Bind the module's default export to `local`.
    pub fn default(mut self, local: impl Into<String>) -> Self {
        self.default = Some(local.into());
        self
    }

    /// Import `name`, optionally as `alias`.
    pub fn named_as(mut self, name: impl Into<String>, alias: Option<String>) -> Self {
        self.named.push((name.into(), alias));
        self
    }

    pub fn build(&self) -> String {
        self.to_code()
    }

    fn bindings(&self) -> String {
        let named = self
            .named
            .iter()
            .map(|(name, alias)| match alias {
                Some(alias) if alias != name => format!("{name} as {alias}"),
                _ => name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ");

        match (&self.default, named.is_empty()) {
            (Some(local), true) => local.clone(),
            (Some(local), false) => format!("{local}, {{ {named} }}"),
            (None, _) => format!("{{ {named} }}"),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::Line(format!(
            "import {} from '{}';",
            self.bindings(),
            self.module
        ))]
    }
}

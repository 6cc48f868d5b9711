use gqlts_codegen::{CodeFragment, Renderable};

/// `export { A, B };`, used to re-export enums that are imported from
/// another module.
#[derive(Debug, Clone, Default)]
pub struct Export {
    names: Vec<String>,
}

impl Export {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn build(&self) -> String {
        self.to_code()
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.names.is_empty() {
            return Vec::new();
        }
        vec![CodeFragment::Line(format!(
            "export {{ {} }};",
            self.names.join(", ")
        ))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export() {
        assert_eq!(Export::new().named("Color").build(), "export { Color };\n");
        assert_eq!(
            Export::new().named("Color").named("Size").build(),
            "export { Color, Size };\n"
        );
        assert_eq!(Export::new().build(), "");
    }
}

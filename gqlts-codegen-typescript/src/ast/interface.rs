//! TypeScript interface and class builders.

use gqlts_codegen::{CodeFragment, Renderable};

use super::types::Field;

/// Which keyword opens the declaration and how it names its bases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Interface,
    Class,
}

impl Keyword {
    fn as_str(self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::Class => "class",
        }
    }

    fn heritage(self) -> &'static str {
        match self {
            Self::Interface => "extends",
            Self::Class => "implements",
        }
    }
}

/// Builder for `interface` and `class` declarations.
///
/// Both share the same body layout; only the keyword and the heritage
/// clause (`extends` / `implements`) differ.
#[derive(Debug, Clone)]
pub struct Interface {
    keyword: Keyword,
    name: String,
    doc: Option<String>,
    bases: Vec<String>,
    fields: Vec<Field>,
    exported: bool,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            keyword: Keyword::Interface,
            name: name.into(),
            doc: None,
            bases: Vec::new(),
            fields: Vec::new(),
            exported: true,
        }
    }

    /// A `class` declaration; bases become `implements` clauses.
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            keyword: Keyword::Class,
            ..Self::new(name)
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    pub fn extends(mut self, base: impl Into<String>) -> Self {
        self.bases.push(base.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        self.to_code()
    }

    fn header(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let heritage = if self.bases.is_empty() {
            String::new()
        } else {
            format!(" {} {}", self.keyword.heritage(), self.bases.join(", "))
        };
        format!("{export}{} {}{heritage}", self.keyword.as_str(), self.name)
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        fragments.extend(CodeFragment::maybe_jsdoc(self.doc.as_deref()));

        if self.fields.is_empty() {
            fragments.push(CodeFragment::Line(format!("{} {{}}", self.header())));
        } else {
            fragments.push(CodeFragment::Block {
                header: format!("{} {{", self.header()),
                body: Field::fragments(&self.fields),
                close: Some("}".to_string()),
            });
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_interface() {
        assert_eq!(Interface::new("MyInput").build(), "export interface MyInput {}\n");
    }

    #[test]
    fn test_interface_with_fields() {
        let i = Interface::new("Person")
            .field(Field::new("name", "string"))
            .field(Field::new("age", "number").optional(true))
            .build();
        assert_eq!(
            i,
            "export interface Person {\n  name: string;\n  age?: number;\n}\n"
        );
    }

    #[test]
    fn test_interface_extends() {
        let i = Interface::new("MyType")
            .extends("MyInterface")
            .extends("MyOtherInterface")
            .field(Field::new("foo", "string"))
            .build();
        assert!(i.starts_with("export interface MyType extends MyInterface, MyOtherInterface {\n"));
    }

    #[test]
    fn test_class_implements() {
        let c = Interface::class("MyType")
            .extends("Base")
            .field(Field::new("id", "string"))
            .build();
        assert_eq!(c, "export class MyType implements Base {\n  id: string;\n}\n");
    }

    #[test]
    fn test_private_interface() {
        let i = Interface::new("Internal")
            .exported(false)
            .field(Field::new("x", "number").readonly(true))
            .build();
        assert_eq!(i, "interface Internal {\n  readonly x: number;\n}\n");
    }

    #[test]
    fn test_documented_interface() {
        let i = Interface::new("Node").doc(Some("A node")).build();
        assert_eq!(i, "/** A node */\nexport interface Node {}\n");
    }
}

//! Enum-like declarations: `enum`, `const enum` and `as const` objects.

use gqlts_codegen::{CodeFragment, Renderable};

/// A member of an enum or const object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub key: String,
    pub value: String,
    pub doc: Option<String>,
}

impl Member {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            doc: None,
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Enum,
    ConstEnum,
    ConstObject,
}

/// Builder for `enum`, `const enum` and `as const` object declarations.
///
/// Enums separate members with `=` and omit the comma after the last one.
/// Const objects use `:` with a comma after every member, and are followed
/// by a type of the same name covering their values.
#[derive(Debug, Clone)]
pub struct Enum {
    style: Style,
    name: String,
    doc: Option<String>,
    members: Vec<Member>,
    exported: bool,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            style: Style::Enum,
            name: name.into(),
            doc: None,
            members: Vec::new(),
            exported: true,
        }
    }

    /// `const enum Name { ... }`
    pub fn const_enum(name: impl Into<String>) -> Self {
        Self {
            style: Style::ConstEnum,
            ..Self::new(name)
        }
    }

    /// `const Name = { ... } as const;` plus `type Name = typeof Name[keyof typeof Name];`
    pub fn const_object(name: impl Into<String>) -> Self {
        Self {
            style: Style::ConstObject,
            ..Self::new(name)
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    pub fn member(mut self, member: Member) -> Self {
        self.members.push(member);
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

    fn body(&self) -> Vec<CodeFragment> {
        let last = self.members.len().saturating_sub(1);
        self.members
            .iter()
            .enumerate()
            .flat_map(|(i, member)| {
                let line = match self.style {
                    Style::ConstObject => format!("{}: {},", member.key, member.value),
                    Style::Enum | Style::ConstEnum if i == last => {
                        format!("{} = {}", member.key, member.value)
                    }
                    Style::Enum | Style::ConstEnum => {
                        format!("{} = {},", member.key, member.value)
                    }
                };
                CodeFragment::maybe_jsdoc(member.doc.as_deref())
                    .into_iter()
                    .chain([CodeFragment::Line(line)])
            })
            .collect()
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let mut fragments = Vec::new();
        fragments.extend(CodeFragment::maybe_jsdoc(self.doc.as_deref()));

        let (header, close) = match self.style {
            Style::Enum => (format!("{export}enum {} {{", self.name), "}"),
            Style::ConstEnum => (format!("{export}const enum {} {{", self.name), "}"),
            Style::ConstObject => (format!("{export}const {} = {{", self.name), "} as const;"),
        };
        fragments.push(CodeFragment::Block {
            header,
            body: self.body(),
            close: Some(close.to_string()),
        });

        if self.style == Style::ConstObject {
            fragments.push(CodeFragment::Blank);
            fragments.push(CodeFragment::Line(format!(
                "{export}type {name} = typeof {name}[keyof typeof {name}];",
                name = self.name
            )));
        }

        fragments
    }
}

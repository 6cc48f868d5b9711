//! Type alias, object type and union builders.

use gqlts_codegen::{CodeFragment, Renderable};

fn export_keyword(exported: bool) -> &'static str {
    if exported { "export " } else { "" }
}

/// A property of an object type, interface or class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub doc: Option<String>,
    pub optional: bool,
    pub readonly: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            optional: false,
            readonly: false,
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// `readonly name?: ty;`
    pub fn signature(&self) -> String {
        let readonly = if self.readonly { "readonly " } else { "" };
        let optional = if self.optional { "?" } else { "" };
        format!("{}{}{}: {};", readonly, self.name, optional, self.ty)
    }

    pub(crate) fn fragments(fields: &[Field]) -> Vec<CodeFragment> {
        fields
            .iter()
            .flat_map(|field| {
                CodeFragment::maybe_jsdoc(field.doc.as_deref())
                    .into_iter()
                    .chain([CodeFragment::Line(field.signature())])
            })
            .collect()
    }
}

/// Builder for object types: `type Foo = Base & { ... };`.
#[derive(Debug, Clone)]
pub struct ObjectType {
    name: String,
    doc: Option<String>,
    intersections: Vec<String>,
    fields: Vec<Field>,
    exported: bool,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            intersections: Vec::new(),
            fields: Vec::new(),
            exported: true,
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    /// Intersect the literal with another type (`Base & { ... }`).
    pub fn intersect(mut self, ty: impl Into<String>) -> Self {
        self.intersections.push(ty.into());
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

    /// Build the object type as a string.
    pub fn build(&self) -> String {
        self.to_code()
    }
}

impl Renderable for ObjectType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        fragments.extend(CodeFragment::maybe_jsdoc(self.doc.as_deref()));

        let bases: String = self
            .intersections
            .iter()
            .map(|ty| format!("{ty} & "))
            .collect();
        let head = format!(
            "{}type {} = {}",
            export_keyword(self.exported),
            self.name,
            bases
        );

        if self.fields.is_empty() {
            fragments.push(CodeFragment::Line(format!("{head}{{}};")));
        } else {
            fragments.push(CodeFragment::Block {
                header: format!("{head}{{"),
                body: Field::fragments(&self.fields),
                close: Some("};".to_string()),
            });
        }

        fragments
    }
}

/// Builder for type aliases: `type Foo = ...;`.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    doc: Option<String>,
    ty: String,
    exported: bool,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            ty: ty.into(),
            exported: true,
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    pub fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    /// Build the type alias as a string.
    pub fn build(&self) -> String {
        self.to_code()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        fragments.extend(CodeFragment::maybe_jsdoc(self.doc.as_deref()));
        fragments.push(CodeFragment::Line(format!(
            "{}type {} = {};",
            export_keyword(self.exported),
            self.name,
            self.ty
        )));
        fragments
    }
}

/// Builder for union types.
///
/// Inline unions render on one line. Stacked unions put each variant on its
/// own line, optionally preceded by a doc comment:
///
/// ```text
/// export type Status =
///   /** Waiting */
///   | 'IDLE'
///   | 'RUNNING';
/// ```
#[derive(Debug, Clone)]
pub struct Union {
    name: String,
    doc: Option<String>,
    variants: Vec<(String, Option<String>)>,
    stacked: bool,
    leading_bar: bool,
    exported: bool,
}

impl Union {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            variants: Vec::new(),
            stacked: false,
            leading_bar: true,
            exported: true,
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variants.push((variant.into(), None));
        self
    }

    /// Add a variant with a doc comment; only shown when stacked.
    pub fn documented_variant(mut self, variant: impl Into<String>, doc: Option<String>) -> Self {
        self.variants.push((variant.into(), doc));
        self
    }

    /// One variant per line.
    pub fn stacked(mut self) -> Self {
        self.stacked = true;
        self
    }

    /// Omit the `|` before the first stacked variant.
    pub fn without_leading_bar(mut self) -> Self {
        self.leading_bar = false;
        self
    }

    pub fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    /// Build the union type as a string.
    pub fn build(&self) -> String {
        self.to_code()
    }

    fn stacked_body(&self) -> Vec<CodeFragment> {
        let last = self.variants.len().saturating_sub(1);
        self.variants
            .iter()
            .enumerate()
            .flat_map(|(i, (variant, doc))| {
                let bar = if i > 0 || self.leading_bar { "| " } else { "" };
                let end = if i == last { ";" } else { "" };
                CodeFragment::maybe_jsdoc(doc.as_deref())
                    .into_iter()
                    .chain([CodeFragment::Line(format!("{bar}{variant}{end}"))])
            })
            .collect()
    }
}

impl Renderable for Union {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = export_keyword(self.exported);
        let mut fragments = Vec::new();
        fragments.extend(CodeFragment::maybe_jsdoc(self.doc.as_deref()));

        if self.variants.is_empty() {
            fragments.push(CodeFragment::Line(format!(
                "{export}type {} = never;",
                self.name
            )));
        } else if self.stacked {
            fragments.push(CodeFragment::Block {
                header: format!("{export}type {} =", self.name),
                body: self.stacked_body(),
                close: None,
            });
        } else {
            let variants: Vec<&str> = self.variants.iter().map(|(v, _)| v.as_str()).collect();
            fragments.push(CodeFragment::Line(format!(
                "{export}type {} = {};",
                self.name,
                variants.join(" | ")
            )));
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_type_empty() {
        let t = ObjectType::new("Empty").build();
        assert_eq!(t, "export type Empty = {};\n");
    }

    #[test]
    fn test_object_type_with_fields() {
        let t = ObjectType::new("Person")
            .doc(Some("A person"))
            .field(Field::new("__typename", "'Person'").optional(true))
            .field(Field::new("name", "Scalars['String']").doc(Some("Full name")))
            .build();
        assert_eq!(
            t,
            "/** A person */\n\
             export type Person = {\n  \
             __typename?: 'Person';\n  \
             /** Full name */\n  \
             name: Scalars['String'];\n\
             };\n"
        );
    }

    #[test]
    fn test_object_type_with_intersections() {
        let t = ObjectType::new("MyType")
            .intersect("MyInterface")
            .intersect("MyOtherInterface")
            .field(Field::new("foo", "Scalars['String']"))
            .build();
        assert!(t.starts_with("export type MyType = MyInterface & MyOtherInterface & {\n"));
    }

    #[test]
    fn test_readonly_field() {
        let f = Field::new("x", "number").readonly(true).optional(true);
        assert_eq!(f.signature(), "readonly x?: number;");
    }

    #[test]
    fn test_type_alias() {
        let t = TypeAlias::new("Maybe<T>", "T | null").build();
        assert_eq!(t, "export type Maybe<T> = T | null;\n");
        let t = TypeAlias::new("Internal", "number").exported(false).build();
        assert_eq!(t, "type Internal = number;\n");
    }

    #[test]
    fn test_inline_union() {
        let u = Union::new("MyUnion")
            .doc(Some("my union"))
            .variant("MyType")
            .variant("MyOtherType")
            .build();
        assert_eq!(u, "/** my union */\nexport type MyUnion = MyType | MyOtherType;\n");
    }

    #[test]
    fn test_stacked_union() {
        let u = Union::new("MyEnum")
            .documented_variant("'A'", Some("this is a".to_string()))
            .documented_variant("'B'", None)
            .stacked()
            .build();
        assert_eq!(
            u,
            "export type MyEnum =\n  /** this is a */\n  | 'A'\n  | 'B';\n"
        );
    }

    #[test]
    fn test_stacked_union_without_leading_bar() {
        let u = Union::new("Input")
            .variant("{ a: A; b?: never; }")
            .variant("{ a?: never; b: B; }")
            .stacked()
            .without_leading_bar()
            .build();
        assert_eq!(
            u,
            "export type Input =\n  { a: A; b?: never; }\n  | { a?: never; b: B; };\n"
        );
    }

    #[test]
    fn test_empty_union_is_never() {
        assert_eq!(Union::new("Nothing").build(), "export type Nothing = never;\n");
    }
}

//! Tagged declaration model.
//!
//! The emitter decides *what* to declare; rendering dispatches on the tag to
//! the matching AST builder. Declaration kinds are resolved from the
//! configuration once, when the declaration is created.

use crate::{
    ast::{Enum, Export, Field, Interface, Member, ObjectType, Union},
    config::{DeclarationKind, EnumMode},
};

/// Sentinel variant appended by `futureProofEnums`.
pub const FUTURE_ENUM_VALUE: &str = "'%future added value'";

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// Object, interface, input object, argument bag or a fixed record such
    /// as `Scalars`.
    Object {
        kind: DeclarationKind,
        name: String,
        comment: Option<String>,
        bases: Vec<String>,
        fields: Vec<Field>,
    },
    Union {
        name: String,
        comment: Option<String>,
        variants: Vec<String>,
    },
    /// `@oneOf` input: one variant per field, the others set to `never`.
    OneOf {
        name: String,
        comment: Option<String>,
        variants: Vec<Vec<Field>>,
    },
    Enum {
        name: String,
        comment: Option<String>,
        mode: EnumMode,
        future_proof: bool,
        members: Vec<Member>,
    },
    /// Externally bound enums, re-exported under their schema name.
    ReExports { names: Vec<String> },
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Self::Object { name, .. }
            | Self::Union { name, .. }
            | Self::OneOf { name, .. }
            | Self::Enum { name, .. } => name,
            Self::ReExports { .. } => "",
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Object {
                kind: DeclarationKind::Type,
                ..
            } => "type",
            Self::Object {
                kind: DeclarationKind::Interface,
                ..
            } => "interface",
            Self::Object {
                kind: DeclarationKind::Class,
                ..
            } => "class",
            Self::Union { .. } => "union",
            Self::OneOf { .. } => "oneOf",
            Self::Enum { .. } => "enum",
            Self::ReExports { .. } => "re-export",
        }
    }

    /// Render to TypeScript, with `export` unless `exported` is false.
    pub fn render(&self, exported: bool) -> String {
        match self {
            Self::Object {
                kind,
                name,
                comment,
                bases,
                fields,
            } => render_object(*kind, name, comment.as_deref(), bases, fields, exported),
            Self::Union {
                name,
                comment,
                variants,
            } => variants
                .iter()
                .fold(Union::new(name).doc(comment.as_deref()), |u, v| u.variant(v))
                .exported(exported)
                .build(),
            Self::OneOf {
                name,
                comment,
                variants,
            } => variants
                .iter()
                .fold(Union::new(name).doc(comment.as_deref()), |u, fields| {
                    u.variant(inline_object(fields))
                })
                .stacked()
                .without_leading_bar()
                .exported(exported)
                .build(),
            Self::Enum {
                name,
                comment,
                mode,
                future_proof,
                members,
            } => render_enum(name, comment.as_deref(), *mode, *future_proof, members, exported),
            Self::ReExports { names } => names
                .iter()
                .map(|name| Export::new().named(name).build())
                .collect(),
        }
    }
}

fn render_object(
    kind: DeclarationKind,
    name: &str,
    comment: Option<&str>,
    bases: &[String],
    fields: &[Field],
    exported: bool,
) -> String {
    match kind {
        DeclarationKind::Type => {
            let object = bases
                .iter()
                .fold(ObjectType::new(name).doc(comment), |o, base| o.intersect(base));
            fields
                .iter()
                .fold(object, |o, field| o.field(field.clone()))
                .exported(exported)
                .build()
        }
        DeclarationKind::Interface | DeclarationKind::Class => {
            let decl = if kind == DeclarationKind::Class {
                Interface::class(name)
            } else {
                Interface::new(name)
            };
            let decl = bases
                .iter()
                .fold(decl.doc(comment), |d, base| d.extends(base));
            fields
                .iter()
                .fold(decl, |d, field| d.field(field.clone()))
                .exported(exported)
                .build()
        }
    }
}

/// `{ a: A; b?: never; }`
fn inline_object(fields: &[Field]) -> String {
    let body: Vec<String> = fields.iter().map(Field::signature).collect();
    format!("{{ {} }}", body.join(" "))
}

fn render_enum(
    name: &str,
    comment: Option<&str>,
    mode: EnumMode,
    future_proof: bool,
    members: &[Member],
    exported: bool,
) -> String {
    match mode {
        EnumMode::Union => {
            let union = members
                .iter()
                .fold(Union::new(name).doc(comment).stacked(), |u, m| {
                    u.documented_variant(&m.value, m.doc.clone())
                });
            let union = if future_proof {
                union.variant(FUTURE_ENUM_VALUE)
            } else {
                union
            };
            union.exported(exported).build()
        }
        EnumMode::Native | EnumMode::ConstEnum | EnumMode::ConstObject => {
            let decl = match mode {
                EnumMode::ConstEnum => Enum::const_enum(name),
                EnumMode::ConstObject => Enum::const_object(name),
                _ => Enum::new(name),
            };
            members
                .iter()
                .fold(decl.doc(comment), |e, m| e.member(m.clone()))
                .exported(exported)
                .build()
        }
    }
}

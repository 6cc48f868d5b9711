//! SDL loading.
//!
//! Definitions are collected first and `extend` blocks are folded into
//! them afterwards, so an extension may appear before the type it extends.

use async_graphql_parser::{
    Positioned,
    types::{
        BaseType, ConstDirective, FieldDefinition, InputValueDefinition, ServiceDocument, Type,
        TypeDefinition as AstTypeDefinition, TypeKind, TypeSystemDefinition,
    },
};
use tracing::{debug, warn};

use crate::{
    Directive, DirectiveDefinition, EnumType, EnumValue, Error, Field, InputObjectType,
    InputValue, ObjectType, Result, ScalarType, Schema, TypeDefinition, TypeRef, UnionType, Value,
};

pub(crate) fn parse_schema(sdl: &str, filename: &str) -> Result<Schema> {
    let document =
        async_graphql_parser::parse_schema(sdl).map_err(|e| Error::parse(e, sdl, filename))?;
    Ok(build_schema(document))
}

fn build_schema(document: ServiceDocument) -> Schema {
    let mut schema = Schema::new();
    let mut extensions = Vec::new();

    for definition in document.definitions {
        match definition {
            TypeSystemDefinition::Type(ty) if ty.node.extend => extensions.push(ty.node),
            TypeSystemDefinition::Type(ty) => {
                schema.add_type(convert_type(ty.node));
            }
            TypeSystemDefinition::Directive(directive) => {
                let directive = directive.node;
                let mut definition = DirectiveDefinition::new(directive.name.node.to_string());
                definition.description = description(directive.description);
                definition.arguments = directive.arguments.into_iter().map(input_value).collect();
                schema.add_directive(definition);
            }
            TypeSystemDefinition::Schema(_) => {}
        }
    }

    for extension in extensions {
        let name = extension.name.node.to_string();
        match schema.get_mut(&name) {
            Some(target) => extend(target, convert_type(extension)),
            None => warn!(%name, "ignoring extension of undefined type"),
        }
    }

    debug!(types = schema.len(), "parsed schema");
    schema
}

fn convert_type(ty: AstTypeDefinition) -> TypeDefinition {
    let name = ty.name.node.to_string();
    let description = description(ty.description);
    let directives = directives(ty.directives);

    match ty.kind {
        TypeKind::Scalar => TypeDefinition::Scalar(ScalarType {
            name,
            description,
            directives,
        }),
        TypeKind::Object(object) => TypeDefinition::Object(ObjectType {
            name,
            description,
            interfaces: names(object.implements),
            fields: object.fields.into_iter().map(field).collect(),
            directives,
        }),
        TypeKind::Interface(interface) => TypeDefinition::Interface(ObjectType {
            name,
            description,
            interfaces: names(interface.implements),
            fields: interface.fields.into_iter().map(field).collect(),
            directives,
        }),
        TypeKind::Union(union) => TypeDefinition::Union(UnionType {
            name,
            description,
            members: names(union.members),
            directives,
        }),
        TypeKind::Enum(enum_type) => TypeDefinition::Enum(EnumType {
            name,
            description,
            values: enum_type
                .values
                .into_iter()
                .map(|value| {
                    let value = value.node;
                    EnumValue {
                        name: value.value.node.to_string(),
                        description: self::description(value.description),
                        directives: self::directives(value.directives),
                        internal: None,
                    }
                })
                .collect(),
            directives,
        }),
        TypeKind::InputObject(input) => TypeDefinition::InputObject(InputObjectType {
            name,
            description,
            fields: input.fields.into_iter().map(input_value).collect(),
            one_of: has_one_of(&directives),
            directives,
        }),
    }
}

/// Fold an extension into its base definition. Mismatched kinds are ignored.
fn extend(target: &mut TypeDefinition, extension: TypeDefinition) {
    match (target, extension) {
        (TypeDefinition::Scalar(base), TypeDefinition::Scalar(ext)) => {
            base.directives.extend(ext.directives);
        }
        (TypeDefinition::Object(base), TypeDefinition::Object(ext))
        | (TypeDefinition::Interface(base), TypeDefinition::Interface(ext)) => {
            base.interfaces.extend(ext.interfaces);
            base.fields.extend(ext.fields);
            base.directives.extend(ext.directives);
        }
        (TypeDefinition::Union(base), TypeDefinition::Union(ext)) => {
            base.members.extend(ext.members);
            base.directives.extend(ext.directives);
        }
        (TypeDefinition::Enum(base), TypeDefinition::Enum(ext)) => {
            base.values.extend(ext.values);
            base.directives.extend(ext.directives);
        }
        (TypeDefinition::InputObject(base), TypeDefinition::InputObject(ext)) => {
            base.fields.extend(ext.fields);
            base.one_of |= ext.one_of;
            base.directives.extend(ext.directives);
        }
        (base, ext) => {
            warn!(
                name = base.name(),
                expected = base.kind(),
                found = ext.kind(),
                "ignoring extension of a different kind"
            );
        }
    }
}

fn field(field: Positioned<FieldDefinition>) -> Field {
    let field = field.node;
    Field {
        name: field.name.node.to_string(),
        description: description(field.description),
        arguments: field.arguments.into_iter().map(input_value).collect(),
        ty: type_ref(field.ty.node),
        directives: directives(field.directives),
    }
}

fn input_value(value: Positioned<InputValueDefinition>) -> InputValue {
    let value = value.node;
    InputValue {
        name: value.name.node.to_string(),
        description: description(value.description),
        ty: type_ref(value.ty.node),
        default_value: value.default_value.map(|v| Value::from(v.node)),
        directives: directives(value.directives),
    }
}

fn type_ref(ty: Type) -> TypeRef {
    let inner = match ty.base {
        BaseType::Named(name) => TypeRef::Named(name.to_string()),
        BaseType::List(inner) => TypeRef::list(type_ref(*inner)),
    };
    if ty.nullable {
        inner
    } else {
        TypeRef::non_null(inner)
    }
}

fn directives(directives: Vec<Positioned<ConstDirective>>) -> Vec<Directive> {
    directives
        .into_iter()
        .map(|directive| {
            let directive = directive.node;
            Directive {
                name: directive.name.node.to_string(),
                arguments: directive
                    .arguments
                    .into_iter()
                    .map(|(name, value)| (name.node.to_string(), Value::from(value.node)))
                    .collect(),
            }
        })
        .collect()
}

fn description(description: Option<Positioned<String>>) -> Option<String> {
    description.map(|d| d.node)
}

fn names(names: Vec<Positioned<async_graphql_value::Name>>) -> Vec<String> {
    names.into_iter().map(|n| n.node.to_string()).collect()
}

fn has_one_of(directives: &[Directive]) -> bool {
    directives.iter().any(|d| d.name == "oneOf")
}

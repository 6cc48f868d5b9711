//! Declaration emitter.
//!
//! Walks the schema in declaration order and produces one [`Declaration`]
//! per emitted unit: the `Scalars` record, the directive mappings record,
//! then every named type with argument bags directly after their owner,
//! and finally re-exports of externally bound enums.

use gqlts_schema::{
    EnumType, Field as SchemaField, InputObjectType, InputValue, ObjectType, Schema,
    TypeDefinition, UnionType, deprecation_reason,
};
use tracing::trace;

use crate::{
    ast::{Field, Member},
    config::{Config, DeclarationKind, EnumMode},
    declaration::{Declaration, FUTURE_ENUM_VALUE},
    directives::DirectiveTable,
    enums::{EnumTable, ResolvedEnum},
    error::{Error, Result},
    naming::{NameTable, quote},
    scalars::{ScalarMap, is_scalar},
    wrapper::{Position, Wrapper},
};

const SCALARS_TYPE: &str = "Scalars";
const SCALARS_COMMENT: &str = "All built-in and custom scalars, mapped to their actual values";

/// Read-only inputs of one emission run.
pub struct Emitter<'a> {
    schema: &'a Schema,
    config: &'a Config,
    names: &'a NameTable<'a>,
    scalars: &'a ScalarMap,
    enums: &'a EnumTable,
    directives: &'a DirectiveTable,
    wrapper: Wrapper<'a>,
    enum_mode: EnumMode,
}

impl<'a> Emitter<'a> {
    pub fn new(
        schema: &'a Schema,
        config: &'a Config,
        names: &'a NameTable<'a>,
        scalars: &'a ScalarMap,
        enums: &'a EnumTable,
        directives: &'a DirectiveTable,
    ) -> Self {
        Self {
            schema,
            config,
            names,
            scalars,
            enums,
            directives,
            wrapper: Wrapper::new(config),
            enum_mode: config.enum_mode(),
        }
    }

    /// All declarations, in output order.
    pub fn emit(&self) -> Result<Vec<Declaration>> {
        let mut declarations = vec![self.scalars_record()];
        declarations.extend(self.directives.declaration(self.schema, self.config));

        for ty in self.schema.types().filter(|ty| !ty.is_introspection()) {
            match ty {
                TypeDefinition::Scalar(_) => {}
                TypeDefinition::Object(object) => {
                    declarations.push(self.object(object));
                    declarations.extend(self.argument_bags(object));
                }
                TypeDefinition::Interface(interface) => {
                    declarations.push(self.interface(interface));
                    declarations.extend(self.argument_bags(interface));
                }
                TypeDefinition::Union(union) => declarations.push(self.union(union)),
                TypeDefinition::Enum(enum_type) => {
                    declarations.extend(self.enumeration(enum_type));
                }
                TypeDefinition::InputObject(input) => declarations.push(self.input(input)?),
            }
        }

        let re_exports = self.enums.re_exports();
        if !self.config.no_export && !re_exports.is_empty() {
            declarations.push(Declaration::ReExports {
                names: re_exports.into_iter().map(str::to_string).collect(),
            });
        }

        for declaration in &declarations {
            trace!(kind = declaration.kind(), name = declaration.name(), "declaration");
        }
        Ok(declarations)
    }

    fn scalars_record(&self) -> Declaration {
        let fields = self
            .scalars
            .iter()
            .map(|(name, entry)| {
                Field::new(name, &entry.representation)
                    .doc(self.description(entry.description.as_deref()))
            })
            .collect();
        Declaration::Object {
            kind: DeclarationKind::Type,
            name: SCALARS_TYPE.to_string(),
            comment: self.description(Some(SCALARS_COMMENT)),
            bases: Vec::new(),
            fields,
        }
    }

    fn object(&self, object: &ObjectType) -> Declaration {
        let mut fields = Vec::new();
        if !self.config.skip_typename {
            fields.push(
                Field::new("__typename", quote(&object.name))
                    .optional(!self.config.non_optional_typename)
                    .readonly(self.config.immutable_types),
            );
        }
        fields.extend(object.fields.iter().map(|field| self.output_field(field)));

        Declaration::Object {
            kind: self.config.declaration_kind.object,
            name: self.names.type_name(&object.name),
            comment: self.description(object.description.as_deref()),
            bases: self.bases(object),
            fields,
        }
    }

    fn interface(&self, interface: &ObjectType) -> Declaration {
        Declaration::Object {
            kind: self.config.declaration_kind.interface,
            name: self.names.type_name(&interface.name),
            comment: self.description(interface.description.as_deref()),
            bases: self.bases(interface),
            fields: interface
                .fields
                .iter()
                .map(|field| self.output_field(field))
                .collect(),
        }
    }

    fn bases(&self, object: &ObjectType) -> Vec<String> {
        object
            .interfaces
            .iter()
            .map(|name| self.names.type_name(name))
            .collect()
    }

    fn argument_bags(&self, owner: &ObjectType) -> Vec<Declaration> {
        owner
            .fields
            .iter()
            .filter(|field| !field.arguments.is_empty())
            .map(|field| Declaration::Object {
                kind: self.config.declaration_kind.arguments,
                name: self.names.args_name(&owner.name, &field.name),
                comment: None,
                bases: Vec::new(),
                fields: field
                    .arguments
                    .iter()
                    .map(|argument| self.input_value(argument))
                    .collect(),
            })
            .collect()
    }

    fn union(&self, union: &UnionType) -> Declaration {
        let mut variants: Vec<String> = union
            .members
            .iter()
            .map(|member| self.reference(member))
            .collect();
        if self.config.future_proof_unions {
            let readonly = if self.config.immutable_types { "readonly " } else { "" };
            variants.push(format!("{{ {readonly}__typename?: \"%other\" }}"));
        }
        Declaration::Union {
            name: self.names.type_name(&union.name),
            comment: self.description(union.description.as_deref()),
            variants,
        }
    }

    fn enumeration(&self, enum_type: &EnumType) -> Option<Declaration> {
        let ResolvedEnum::Local { members } = self.enums.get(&enum_type.name)? else {
            return None;
        };
        let members = members
            .iter()
            .map(|member| {
                Member::new(&member.key, &member.value).doc(
                    self.comment(member.description.as_deref(), member.deprecation.as_deref()),
                )
            })
            .collect();
        Some(Declaration::Enum {
            name: self.names.type_name(&enum_type.name),
            comment: self.description(enum_type.description.as_deref()),
            mode: self.enum_mode,
            future_proof: self.config.future_proof_enums,
            members,
        })
    }

    fn input(&self, input: &InputObjectType) -> Result<Declaration> {
        let name = self.names.type_name(&input.name);
        let comment = self.description(input.description.as_deref());
        if input.one_of {
            return self.one_of(input, name, comment);
        }
        Ok(Declaration::Object {
            kind: self.config.declaration_kind.input,
            name,
            comment,
            bases: Vec::new(),
            fields: input
                .fields
                .iter()
                .map(|value| self.input_value(value))
                .collect(),
        })
    }

    /// One variant per field: that field required, every sibling `?: never`.
    fn one_of(
        &self,
        input: &InputObjectType,
        name: String,
        comment: Option<String>,
    ) -> Result<Declaration> {
        if let Some(field) = input.fields.iter().find(|field| field.ty.is_non_null()) {
            return Err(Error::NonNullOneOfField {
                input: input.name.clone(),
                field: field.name.clone(),
            });
        }

        let variants = (0..input.fields.len())
            .map(|chosen| {
                input
                    .fields
                    .iter()
                    .enumerate()
                    .map(|(i, value)| {
                        let field = if i == chosen {
                            let named = self.input_named(value);
                            Field::new(
                                &value.name,
                                self.wrapper.required(&value.ty, &named, Position::Input),
                            )
                        } else {
                            Field::new(&value.name, "never").optional(true)
                        };
                        field.readonly(self.config.immutable_types)
                    })
                    .collect()
            })
            .collect();

        Ok(Declaration::OneOf {
            name,
            comment,
            variants,
        })
    }

    fn output_field(&self, field: &SchemaField) -> Field {
        let named = self.output_named(field.ty.base_name());
        Field::new(&field.name, self.wrapper.output(&field.ty, &named))
            .doc(self.comment(
                field.description.as_deref(),
                deprecation_reason(&field.directives),
            ))
            .optional(self.wrapper.is_optional_field(&field.ty))
            .readonly(self.config.immutable_types)
    }

    fn input_value(&self, value: &InputValue) -> Field {
        let named = self.input_named(value);
        Field::new(&value.name, self.wrapper.input(&value.ty, &named))
            .doc(self.comment(
                value.description.as_deref(),
                deprecation_reason(&value.directives),
            ))
            .optional(self.wrapper.is_optional_input(value))
            .readonly(self.config.immutable_types)
    }

    /// Named type of an output field, with abstract types expanded to their
    /// concrete types under `useImplementingTypes`.
    fn output_named(&self, name: &str) -> String {
        let is_abstract = matches!(
            self.schema.get(name),
            Some(TypeDefinition::Interface(_) | TypeDefinition::Union(_))
        );
        if !(self.config.use_implementing_types && is_abstract) {
            return self.named(name);
        }
        let possible = self.schema.possible_types(name);
        if possible.is_empty() {
            return "never".to_string();
        }
        possible
            .iter()
            .map(|ty| self.names.type_name(ty))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Named type of an input field or argument; a mapped directive replaces it.
    fn input_named(&self, value: &InputValue) -> String {
        self.directives
            .override_for(&value.directives)
            .unwrap_or_else(|| self.named(value.ty.base_name()))
    }

    /// Usage-site expression of a named type.
    fn named(&self, name: &str) -> String {
        if matches!(self.schema.get(name), Some(TypeDefinition::Enum(_))) {
            self.enum_usage(self.names.type_name(name))
        } else {
            self.reference(name)
        }
    }

    fn reference(&self, name: &str) -> String {
        if is_scalar(self.schema, self.scalars, name) {
            format!("{SCALARS_TYPE}['{name}']")
        } else {
            self.names.type_name(name)
        }
    }

    /// Enum identifier plus the future-proof sentinel and template literal
    /// variants. Literal unions carry the sentinel in their declaration.
    fn enum_usage(&self, ident: String) -> String {
        if self.enum_mode == EnumMode::Union {
            return ident;
        }
        let mut usage = ident.clone();
        if self.config.future_proof_enums {
            usage = format!("{usage} | {FUTURE_ENUM_VALUE}");
        }
        if self.config.allow_enum_string_types {
            usage = format!("{usage} | `${{{ident}}}`");
        }
        usage
    }

    fn description(&self, text: Option<&str>) -> Option<String> {
        text.filter(|_| !self.config.disable_descriptions)
            .map(str::to_string)
    }

    /// Description and deprecation note; the note survives
    /// `disableDescriptions`.
    fn comment(&self, description: Option<&str>, deprecation: Option<&str>) -> Option<String> {
        let deprecation = deprecation.map(|reason| format!("@deprecated {reason}"));
        match (self.description(description), deprecation) {
            (Some(description), Some(deprecation)) => Some(format!("{description}\n{deprecation}")),
            (description, deprecation) => description.or(deprecation),
        }
    }
}

//! Generator configuration.
//!
//! Keys are camelCase so the same document can be written as JSON or as the
//! `[config]` table of `gqlts.toml`. Options that accept either a shorthand
//! or a record are normalised while deserializing.

use gqlts_core::Case;
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::warn;

/// All recognised generator options.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub naming_convention: NamingConvention,
    pub types_prefix: String,
    pub types_suffix: String,
    /// Apply `typesPrefix` to enum names.
    pub enum_prefix: bool,
    /// Apply `typesSuffix` to enum names.
    pub enum_suffix: bool,

    pub scalars: ScalarsConfig,
    /// Representation of scalars without a mapping. `any` when unset.
    pub default_scalar_type: Option<String>,
    pub strict_scalars: bool,

    pub enum_values: EnumValuesConfig,
    pub enums_as_const: bool,
    pub enums_as_types: bool,
    pub numeric_enums: bool,
    pub const_enums: bool,
    pub future_proof_enums: bool,
    pub future_proof_unions: bool,
    pub allow_enum_string_types: bool,

    pub declaration_kind: DeclarationKinds,
    pub immutable_types: bool,
    pub avoid_optionals: AvoidOptionals,
    pub maybe_value: String,
    pub input_maybe_value: String,
    pub wrap_field_definitions: bool,
    pub field_wrapper_value: String,
    pub wrap_entire_field_definitions: bool,
    pub entire_field_wrapper_value: String,

    pub skip_typename: bool,
    pub non_optional_typename: bool,
    pub no_export: bool,
    pub add_underscore_to_args_type: bool,
    pub use_implementing_types: bool,

    pub directive_argument_and_input_field_mappings: IndexMap<String, String>,
    pub directive_argument_and_input_field_mapping_type_suffix: Option<String>,
    pub disable_descriptions: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            naming_convention: NamingConvention::default(),
            types_prefix: String::new(),
            types_suffix: String::new(),
            enum_prefix: true,
            enum_suffix: true,
            scalars: ScalarsConfig::default(),
            default_scalar_type: None,
            strict_scalars: false,
            enum_values: EnumValuesConfig::default(),
            enums_as_const: false,
            enums_as_types: false,
            numeric_enums: false,
            const_enums: false,
            future_proof_enums: false,
            future_proof_unions: false,
            allow_enum_string_types: false,
            declaration_kind: DeclarationKinds::default(),
            immutable_types: false,
            avoid_optionals: AvoidOptionals::default(),
            maybe_value: "T | null".to_string(),
            input_maybe_value: "Maybe<T>".to_string(),
            wrap_field_definitions: false,
            field_wrapper_value: "T".to_string(),
            wrap_entire_field_definitions: false,
            entire_field_wrapper_value: "T".to_string(),
            skip_typename: false,
            non_optional_typename: false,
            no_export: false,
            add_underscore_to_args_type: false,
            use_implementing_types: false,
            directive_argument_and_input_field_mappings: IndexMap::new(),
            directive_argument_and_input_field_mapping_type_suffix: None,
            disable_descriptions: false,
        }
    }
}

impl Config {
    /// The single enum representation in effect.
    ///
    /// `enumsAsTypes` beats `enumsAsConst`, which beats `constEnums`.
    /// Conflicting flags are reported and the losers ignored.
    pub fn enum_mode(&self) -> EnumMode {
        let requested = [
            (self.enums_as_types, EnumMode::Union),
            (self.enums_as_const, EnumMode::ConstObject),
            (self.const_enums, EnumMode::ConstEnum),
        ];
        let mut enabled = requested.iter().filter(|(on, _)| *on).map(|(_, mode)| *mode);
        let mode = enabled.next().unwrap_or(EnumMode::Native);
        let ignored: Vec<_> = enabled.map(EnumMode::option_name).collect();
        if !ignored.is_empty() {
            warn!(
                using = mode.option_name(),
                ignored = %ignored.join(", "),
                "multiple enum representations requested"
            );
        }
        mode
    }

    /// Representation of scalars that have no explicit mapping.
    pub fn default_scalar(&self) -> &str {
        self.default_scalar_type.as_deref().unwrap_or("any")
    }
}

/// How enums are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumMode {
    /// `export enum E { ... }`
    Native,
    /// `export const enum E { ... }`
    ConstEnum,
    /// `export type E = 'A' | 'B';`
    Union,
    /// `export const E = { ... } as const;` plus a derived type
    ConstObject,
}

impl EnumMode {
    fn option_name(self) -> &'static str {
        match self {
            Self::Native => "native enums",
            Self::ConstEnum => "constEnums",
            Self::Union => "enumsAsTypes",
            Self::ConstObject => "enumsAsConst",
        }
    }
}

/// Case conventions for generated identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "RawNamingConvention")]
pub struct NamingConvention {
    pub type_names: Case,
    pub enum_values: Case,
    /// Convert across `_` in type names instead of per segment.
    pub transform_underscore: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNamingConvention {
    All(Case),
    Detailed {
        #[serde(default, rename = "typeNames")]
        type_names: Option<Case>,
        #[serde(default, rename = "enumValues")]
        enum_values: Option<Case>,
        #[serde(default, rename = "transformUnderscore")]
        transform_underscore: bool,
    },
}

impl From<RawNamingConvention> for NamingConvention {
    fn from(raw: RawNamingConvention) -> Self {
        match raw {
            RawNamingConvention::All(case) => Self {
                type_names: case,
                enum_values: case,
                transform_underscore: false,
            },
            RawNamingConvention::Detailed {
                type_names,
                enum_values,
                transform_underscore,
            } => Self {
                type_names: type_names.unwrap_or_default(),
                enum_values: enum_values.unwrap_or_default(),
                transform_underscore,
            },
        }
    }
}

/// `scalars`: a module every custom scalar is imported from, or a per-scalar map.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ScalarsConfig {
    Module(String),
    Map(IndexMap<String, String>),
}

impl Default for ScalarsConfig {
    fn default() -> Self {
        Self::Map(IndexMap::new())
    }
}

/// `enumValues`: a module every enum is imported from, or a per-enum map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EnumValuesConfig {
    Module(String),
    Map(IndexMap<String, EnumValueMapping>),
}

impl Default for EnumValuesConfig {
    fn default() -> Self {
        Self::Map(IndexMap::new())
    }
}

/// Per-enum entry of `enumValues`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EnumValueMapping {
    /// Import descriptor (`./file#Enum`) or module path.
    External(String),
    /// Replacement values for individual members.
    Values(IndexMap<String, Literal>),
}

/// A literal enum member value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    Int(i64),
    Float(f64),
    String(String),
}

impl Literal {
    /// TypeScript source for the literal.
    pub fn to_typescript(&self) -> String {
        match self {
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::String(s) => crate::naming::quote(s),
        }
    }
}

/// Declaration form for a category of object-like types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    #[default]
    Type,
    Interface,
    Class,
}

/// `declarationKind`, resolved per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "RawDeclarationKinds")]
pub struct DeclarationKinds {
    pub object: DeclarationKind,
    pub input: DeclarationKind,
    pub interface: DeclarationKind,
    pub arguments: DeclarationKind,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDeclarationKinds {
    All(DeclarationKind),
    PerCategory {
        #[serde(default, rename = "type")]
        object: Option<DeclarationKind>,
        #[serde(default)]
        input: Option<DeclarationKind>,
        #[serde(default)]
        interface: Option<DeclarationKind>,
        #[serde(default)]
        arguments: Option<DeclarationKind>,
    },
}

impl From<RawDeclarationKinds> for DeclarationKinds {
    fn from(raw: RawDeclarationKinds) -> Self {
        match raw {
            RawDeclarationKinds::All(kind) => Self {
                object: kind,
                input: kind,
                interface: kind,
                arguments: kind,
            },
            RawDeclarationKinds::PerCategory {
                object,
                input,
                interface,
                arguments,
            } => Self {
                object: object.unwrap_or_default(),
                input: input.unwrap_or_default(),
                interface: interface.unwrap_or_default(),
                arguments: arguments.unwrap_or_default(),
            },
        }
    }
}

/// `avoidOptionals`, resolved per position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "RawAvoidOptionals")]
pub struct AvoidOptionals {
    /// Nullable output fields are required attributes.
    pub field: bool,
    /// Nullable input fields and arguments without a default are required.
    pub input_value: bool,
    /// Input fields and arguments with a default are required.
    pub default_value: bool,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAvoidOptionals {
    All(bool),
    Scoped {
        #[serde(default)]
        field: bool,
        #[serde(default, rename = "inputValue")]
        input_value: bool,
        #[serde(default, rename = "defaultValue")]
        default_value: bool,
    },
}

impl From<RawAvoidOptionals> for AvoidOptionals {
    fn from(raw: RawAvoidOptionals) -> Self {
        match raw {
            RawAvoidOptionals::All(on) => Self {
                field: on,
                input_value: on,
                default_value: false,
            },
            RawAvoidOptionals::Scoped {
                field,
                input_value,
                default_value,
            } => Self {
                field,
                input_value,
                default_value,
            },
        }
    }
}

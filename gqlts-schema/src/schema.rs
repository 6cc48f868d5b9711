use std::path::Path;

use indexmap::IndexMap;

use crate::{DirectiveDefinition, Error, ObjectType, Result, TypeDefinition};

/// Scalars every schema has, in the order generators list them.
pub const BUILT_IN_SCALARS: [&str; 5] = ["ID", "String", "Boolean", "Int", "Float"];

pub fn is_built_in_scalar(name: &str) -> bool {
    BUILT_IN_SCALARS.contains(&name)
}

/// A GraphQL schema: named types and directive declarations in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    types: IndexMap<String, TypeDefinition>,
    directives: IndexMap<String, DirectiveDefinition>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse SDL source.
    pub fn parse(sdl: &str) -> Result<Self> {
        crate::parse::parse_schema(sdl, "schema.graphql")
    }

    /// Parse SDL source, labelling diagnostics with `filename`.
    pub fn parse_with_filename(sdl: &str, filename: &str) -> Result<Self> {
        crate::parse::parse_schema(sdl, filename)
    }

    /// Read and parse an SDL file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::parse_with_filename(&content, &path.display().to_string())
    }

    /// Add a type, replacing any previous type of the same name in place.
    pub fn add_type(&mut self, ty: impl Into<TypeDefinition>) -> &mut Self {
        let ty = ty.into();
        self.types.insert(ty.name().to_string(), ty);
        self
    }

    /// Builder-style [`Schema::add_type`].
    pub fn with_type(mut self, ty: impl Into<TypeDefinition>) -> Self {
        self.add_type(ty);
        self
    }

    pub fn add_directive(&mut self, directive: DirectiveDefinition) -> &mut Self {
        self.directives.insert(directive.name.clone(), directive);
        self
    }

    pub fn get(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut TypeDefinition> {
        self.types.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// All declared types in declaration order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.types.values()
    }

    pub fn directive(&self, name: &str) -> Option<&DirectiveDefinition> {
        self.directives.get(name)
    }

    pub fn directives(&self) -> impl Iterator<Item = &DirectiveDefinition> {
        self.directives.values()
    }

    /// Whether `ty` implements `interface`, directly or through another interface.
    pub fn implements(&self, ty: &ObjectType, interface: &str) -> bool {
        self.implements_inner(ty, interface, &mut Vec::new())
    }

    fn implements_inner<'a>(
        &'a self,
        ty: &'a ObjectType,
        interface: &str,
        seen: &mut Vec<&'a str>,
    ) -> bool {
        if seen.contains(&ty.name.as_str()) {
            return false;
        }
        seen.push(&ty.name);
        ty.interfaces.iter().any(|name| {
            name == interface
                || matches!(
                    self.types.get(name),
                    Some(TypeDefinition::Interface(parent))
                        if self.implements_inner(parent, interface, seen)
                )
        })
    }

    /// Object types that can appear where `name` is expected.
    ///
    /// For an interface these are the object types implementing it (also
    /// through interface inheritance); for a union, its members. Schema
    /// order is preserved. Any other type yields nothing.
    pub fn possible_types(&self, name: &str) -> Vec<&str> {
        match self.types.get(name) {
            Some(TypeDefinition::Interface(_)) => self
                .types
                .values()
                .filter_map(|ty| match ty {
                    TypeDefinition::Object(obj) if self.implements(obj, name) => {
                        Some(obj.name.as_str())
                    }
                    _ => None,
                })
                .collect(),
            Some(TypeDefinition::Union(union)) => {
                union.members.iter().map(String::as_str).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Custom scalars in declaration order, built-ins excluded.
    pub fn custom_scalars(&self) -> impl Iterator<Item = &crate::ScalarType> {
        self.types.values().filter_map(|ty| match ty {
            TypeDefinition::Scalar(scalar) if !is_built_in_scalar(&scalar.name) => Some(scalar),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

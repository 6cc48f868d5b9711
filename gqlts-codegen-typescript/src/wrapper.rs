//! Nullability, list and field-value wrappers.
//!
//! Wrappers compose innermost first:
//!
//! 1. the named type's representation,
//! 2. `FieldWrapper<T>` (output fields only),
//! 3. `Maybe`/`InputMaybe` and `Array`/`ReadonlyArray`, one pair per list
//!    level from the inside out,
//! 4. `EntireFieldWrapper<T>` (output fields only).
//!
//! Whether the attribute carries `?` is decided separately.

use gqlts_schema::{InputValue, TypeRef};

use crate::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Object and interface fields.
    Output,
    /// Input object fields and arguments.
    Input,
}

#[derive(Debug, Clone, Copy)]
pub struct Wrapper<'a> {
    config: &'a Config,
}

impl<'a> Wrapper<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Full type expression of an output field whose named type is `named`.
    pub fn output(&self, ty: &TypeRef, named: &str) -> String {
        let named = if self.config.wrap_field_definitions {
            format!("FieldWrapper<{named}>")
        } else {
            named.to_string()
        };
        let wrapped = self.wrap(ty, &named, Position::Output);
        if self.config.wrap_entire_field_definitions {
            format!("EntireFieldWrapper<{wrapped}>")
        } else {
            wrapped
        }
    }

    /// Full type expression of an input field or argument.
    pub fn input(&self, ty: &TypeRef, named: &str) -> String {
        self.wrap(ty, named, Position::Input)
    }

    /// Type expression with the outermost nullability dropped.
    pub fn required(&self, ty: &TypeRef, named: &str, position: Position) -> String {
        match ty {
            TypeRef::NonNull(inner) => self.required(inner, named, position),
            TypeRef::Named(_) => named.to_string(),
            TypeRef::List(inner) => {
                format!("{}<{}>", self.array(), self.wrap(inner, named, position))
            }
        }
    }

    fn wrap(&self, ty: &TypeRef, named: &str, position: Position) -> String {
        match ty {
            TypeRef::NonNull(inner) => self.required(inner, named, position),
            _ => self.maybe(&self.required(ty, named, position), position),
        }
    }

    fn maybe(&self, inner: &str, position: Position) -> String {
        match position {
            Position::Output => format!("Maybe<{inner}>"),
            Position::Input => format!("InputMaybe<{inner}>"),
        }
    }

    fn array(&self) -> &'static str {
        if self.config.immutable_types {
            "ReadonlyArray"
        } else {
            "Array"
        }
    }

    /// Whether an output field is declared with `?`.
    pub fn is_optional_field(&self, ty: &TypeRef) -> bool {
        !ty.is_non_null() && !self.config.avoid_optionals.field
    }

    /// Whether an input field or argument is declared with `?`.
    pub fn is_optional_input(&self, value: &InputValue) -> bool {
        let avoid = self.config.avoid_optionals;
        let nullable = !value.ty.is_non_null();
        if value.default_value.is_some() {
            nullable || !avoid.default_value
        } else {
            nullable && !avoid.input_value
        }
    }
}

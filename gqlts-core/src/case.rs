//! Named case transforms selectable from configuration.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::utils::{to_camel_case, to_constant_case, to_kebab_case, to_pascal_case, to_snake_case};

/// A case transform applied to generated identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Case {
    /// Leave names untouched.
    Keep,
    #[default]
    PascalCase,
    CamelCase,
    ConstantCase,
    SnakeCase,
    /// kebab-case
    ParamCase,
    LowerCase,
    UpperCase,
}

impl Case {
    /// Apply the transform to a whole string.
    pub fn apply(self, s: &str) -> String {
        match self {
            Self::Keep => s.to_string(),
            Self::PascalCase => to_pascal_case(s),
            Self::CamelCase => to_camel_case(s),
            Self::ConstantCase => to_constant_case(s),
            Self::SnakeCase => to_snake_case(s),
            Self::ParamCase => to_kebab_case(s),
            Self::LowerCase => s.to_lowercase(),
            Self::UpperCase => s.to_uppercase(),
        }
    }

    /// Apply the transform, optionally preserving underscores.
    ///
    /// With `transform_underscore` unset, each `_`-separated segment is
    /// converted on its own and the segments are re-joined with `_`, so
    /// `My_Type` keeps its underscore under PascalCase.
    pub fn convert(self, s: &str, transform_underscore: bool) -> String {
        if transform_underscore || self == Self::Keep {
            return self.apply(s);
        }
        s.split('_')
            .map(|segment| self.apply(segment))
            .collect::<Vec<_>>()
            .join("_")
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Keep => "keep",
            Self::PascalCase => "pascalCase",
            Self::CamelCase => "camelCase",
            Self::ConstantCase => "constantCase",
            Self::SnakeCase => "snakeCase",
            Self::ParamCase => "paramCase",
            Self::LowerCase => "lowerCase",
            Self::UpperCase => "upperCase",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a case name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCase(pub String);

impl fmt::Display for UnknownCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown naming convention '{}', expected one of: keep, pascalCase, camelCase, constantCase, snakeCase, paramCase, lowerCase, upperCase",
            self.0
        )
    }
}

impl std::error::Error for UnknownCase {}

impl FromStr for Case {
    type Err = UnknownCase;

    /// Accepts both bare names (`pascalCase`) and module-qualified ones
    /// (`change-case-all#pascalCase`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.rsplit('#').next().unwrap_or(s).trim();
        match name {
            "keep" => Ok(Self::Keep),
            "pascalCase" => Ok(Self::PascalCase),
            "camelCase" => Ok(Self::CamelCase),
            "constantCase" => Ok(Self::ConstantCase),
            "snakeCase" => Ok(Self::SnakeCase),
            "paramCase" | "kebabCase" => Ok(Self::ParamCase),
            "lowerCase" => Ok(Self::LowerCase),
            "upperCase" => Ok(Self::UpperCase),
            _ => Err(UnknownCase(s.to_string())),
        }
    }
}

impl TryFrom<String> for Case {
    type Error = UnknownCase;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

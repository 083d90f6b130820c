use serde::Deserialize;
use std::str::FromStr;

use crate::api::SchemaError;
use crate::constant::{SHORT_PREFIX, VALUE_DELIMITER};
use crate::model::Kind;

/// The declaration of one recognized option.
///
/// ```
/// use argmap_builder::{Kind, OptionDefinition};
///
/// let definition = OptionDefinition::number("array").alias('a').multiple();
/// assert_eq!(definition.name(), "array");
/// assert_eq!(definition.short(), Some('a'));
/// assert_eq!(definition.kind(), Kind::Number);
/// assert!(definition.is_multiple());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawDefinition")]
pub struct OptionDefinition {
    name: String,
    short: Option<char>,
    kind: Kind,
    multiple: bool,
    lazy: bool,
    default: bool,
}

impl OptionDefinition {
    /// Create a single-valued option definition.
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        Self {
            name: name.into(),
            short: None,
            kind,
            multiple: false,
            lazy: false,
            default: false,
        }
    }

    /// Create a [`Kind::String`] option definition.
    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, Kind::String)
    }

    /// Create a [`Kind::Number`] option definition.
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, Kind::Number)
    }

    /// Create a [`Kind::Boolean`] option definition.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, Kind::Boolean)
    }

    /// Specify the single character alias, matched as `-<alias>`.
    pub fn alias(mut self, short: char) -> Self {
        self.short.replace(short);
        self
    }

    /// Collect every value, from one or several occurrences, into a list.
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// Collect into a list, taking at most one value per occurrence.
    pub fn lazy_multiple(mut self) -> Self {
        self.multiple = true;
        self.lazy = true;
        self
    }

    /// Route bare values that no other option claims to this option.
    pub fn default_option(mut self) -> Self {
        self.default = true;
        self
    }

    /// The canonical (long) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The single character alias, if any.
    pub fn short(&self) -> Option<char> {
        self.short
    }

    /// The declared value type.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Whether the parsed result is a list.
    pub fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Whether each occurrence takes at most one value.
    pub fn is_lazy(&self) -> bool {
        self.lazy
    }

    /// Whether this is the default option.
    pub fn is_default(&self) -> bool {
        self.default
    }

    pub(crate) fn check(&self) -> Result<(), SchemaError> {
        if self.name.is_empty() {
            return Err(SchemaError::EmptyName);
        }

        // Such names would never match as '--<name>'.
        if self.name.starts_with(SHORT_PREFIX)
            || self
                .name
                .chars()
                .any(|c| c == VALUE_DELIMITER || c.is_whitespace())
        {
            return Err(SchemaError::InvalidName(self.name.clone()));
        }

        if let Some(short) = self.short {
            // Digits are reserved for negative numbers such as '-1'.
            if short.is_ascii_digit()
                || short.is_whitespace()
                || short == '-'
                || short == VALUE_DELIMITER
            {
                return Err(SchemaError::InvalidAlias(short.to_string()));
            }
        }

        Ok(())
    }
}

impl FromStr for Kind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("string") {
            Ok(Kind::String)
        } else if s.eq_ignore_ascii_case("number") {
            Ok(Kind::Number)
        } else if s.eq_ignore_ascii_case("boolean") {
            Ok(Kind::Boolean)
        } else {
            Err(SchemaError::InvalidType(s.to_string()))
        }
    }
}

// The serialized shape of a definition, before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawDefinition {
    name: String,
    #[serde(default)]
    alias: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    multiple: bool,
    #[serde(default, alias = "lazy_multiple")]
    lazy_multiple: bool,
    #[serde(default, alias = "default_option")]
    default_option: bool,
}

impl TryFrom<RawDefinition> for OptionDefinition {
    type Error = SchemaError;

    fn try_from(raw: RawDefinition) -> Result<Self, Self::Error> {
        let kind = match raw.kind {
            Some(kind) => Kind::from_str(&kind)?,
            None => Kind::String,
        };
        let mut definition = OptionDefinition::new(raw.name, kind);

        if let Some(alias) = raw.alias {
            let mut chars = alias.chars();
            match (chars.next(), chars.next()) {
                (Some(short), None) => {
                    definition = definition.alias(short);
                }
                _ => return Err(SchemaError::InvalidAlias(alias)),
            };
        }

        if raw.lazy_multiple {
            definition = definition.lazy_multiple();
        } else if raw.multiple {
            definition = definition.multiple();
        }

        if raw.default_option {
            definition = definition.default_option();
        }

        Ok(definition)
    }
}

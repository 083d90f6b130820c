use thiserror::Error;

use crate::api::definition::RawDefinition;
use crate::api::OptionDefinition;
use crate::matcher::OptionIndex;

/// A malformed schema.
///
/// Raised once, when the schema (or a parser over it) is constructed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// An option has an empty name.
    #[error("Option name cannot be empty.")]
    EmptyName,

    /// An option name that cannot be matched as `--<name>`.
    #[error("Option name '{0}' cannot start with '-'.")]
    InvalidName(String),

    /// An alias that is not a single, non-digit character.
    #[error("Invalid alias '{0}': must be a single character and not a digit, '-', or '='.")]
    InvalidAlias(String),

    /// A type other than `string`, `number`, or `boolean`.
    #[error("Invalid type '{0}': must be one of string, number, boolean.")]
    InvalidType(String),

    /// Two options share a name.
    #[error("Cannot duplicate the option '{0}'.")]
    DuplicateName(String),

    /// Two options share an alias.
    #[error("Cannot duplicate the alias '{0}'.")]
    DuplicateAlias(char),

    /// More than one option is marked as the default option.
    #[error("Only one default option is allowed (found '{0}' and '{1}').")]
    MultipleDefaultOptions(String, String),

    /// The serialized schema could not be read.
    #[error("Malformed schema: {0}")]
    Malformed(String),
}

/// An ordered, validated collection of option definitions.
///
/// ```
/// use argmap_builder::{OptionDefinition, Schema, SchemaError};
///
/// let schema = Schema::new(vec![
///     OptionDefinition::boolean("verbose").alias('v'),
///     OptionDefinition::number("depth"),
/// ])
/// .unwrap();
/// assert_eq!(schema.get_by_alias('v').unwrap().name(), "verbose");
///
/// let error = Schema::new(vec![
///     OptionDefinition::boolean("verbose"),
///     OptionDefinition::number("verbose"),
/// ])
/// .unwrap_err();
/// assert_eq!(error, SchemaError::DuplicateName("verbose".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct Schema {
    definitions: Vec<OptionDefinition>,
    index: OptionIndex,
    default: Option<usize>,
}

impl Schema {
    /// Validate the definitions and index them for lookup.
    pub fn new(definitions: Vec<OptionDefinition>) -> Result<Self, SchemaError> {
        let mut default: Option<usize> = None;

        for (i, definition) in definitions.iter().enumerate() {
            definition.check()?;

            if definition.is_default() {
                if let Some(previous) = default.replace(i) {
                    return Err(SchemaError::MultipleDefaultOptions(
                        definitions[previous].name().to_string(),
                        definition.name().to_string(),
                    ));
                }
            }
        }

        let index = OptionIndex::build(&definitions, false)?;

        Ok(Self {
            definitions,
            index,
            default,
        })
    }

    /// Load and validate the definitions from a JSON array.
    ///
    /// ```
    /// use argmap_builder::{Kind, Schema};
    ///
    /// let schema = Schema::from_json(r#"[{"name": "array", "type": "number", "multiple": true}]"#).unwrap();
    /// assert_eq!(schema.get("array").unwrap().kind(), Kind::Number);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let raw: Vec<RawDefinition> = serde_json::from_str(json)
            .map_err(|error| SchemaError::Malformed(error.to_string()))?;
        let definitions = raw
            .into_iter()
            .map(OptionDefinition::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(definitions)
    }

    /// Find an option definition by its name.
    pub fn get(&self, name: &str) -> Option<&OptionDefinition> {
        self.index
            .by_name(name)
            .and_then(|i| self.definitions.get(i))
    }

    /// Find an option definition by its alias.
    pub fn get_by_alias(&self, short: char) -> Option<&OptionDefinition> {
        self.index
            .by_short(short)
            .and_then(|i| self.definitions.get(i))
    }

    /// Iterate the definitions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &OptionDefinition> {
        self.definitions.iter()
    }

    /// The number of definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether there are no definitions.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub(crate) fn definitions(&self) -> &[OptionDefinition] {
        &self.definitions
    }

    pub(crate) fn index(&self) -> &OptionIndex {
        &self.index
    }

    pub(crate) fn default_option(&self) -> Option<usize> {
        self.default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Kind;
    use rstest::rstest;

    #[test]
    fn schema_empty() {
        let schema = Schema::new(Vec::default()).unwrap();
        assert!(schema.is_empty());
        assert_eq!(schema.len(), 0);
        assert_eq!(schema.get("anything"), None);
        assert_eq!(schema.default_option(), None);
    }

    #[test]
    fn schema_lookup() {
        let schema = Schema::new(vec![
            OptionDefinition::string("file").alias('f').default_option(),
            OptionDefinition::boolean("verbose").alias('v'),
            OptionDefinition::number("depth"),
        ])
        .unwrap();

        assert_eq!(schema.len(), 3);
        assert_eq!(schema.get("depth").unwrap().kind(), Kind::Number);
        assert_eq!(schema.get_by_alias('f').unwrap().name(), "file");
        assert_eq!(schema.get_by_alias('d'), None);
        assert_eq!(schema.get("Depth"), None);
        assert_eq!(schema.default_option(), Some(0));

        let names: Vec<&str> = schema.iter().map(OptionDefinition::name).collect();
        assert_eq!(names, vec!["file", "verbose", "depth"]);
    }

    #[rstest]
    #[case(
        vec![OptionDefinition::string("abc"), OptionDefinition::number("abc")],
        SchemaError::DuplicateName("abc".to_string())
    )]
    #[case(
        vec![OptionDefinition::string("abc").alias('a'), OptionDefinition::number("xyz").alias('a')],
        SchemaError::DuplicateAlias('a')
    )]
    #[case(
        vec![OptionDefinition::string("abc").default_option(), OptionDefinition::number("xyz").default_option()],
        SchemaError::MultipleDefaultOptions("abc".to_string(), "xyz".to_string())
    )]
    #[case(
        vec![OptionDefinition::string("abc"), OptionDefinition::number("")],
        SchemaError::EmptyName
    )]
    #[case(
        vec![OptionDefinition::string("abc").alias('7')],
        SchemaError::InvalidAlias("7".to_string())
    )]
    fn schema_invalid(#[case] definitions: Vec<OptionDefinition>, #[case] expected: SchemaError) {
        assert_eq!(Schema::new(definitions).unwrap_err(), expected);
    }

    #[test]
    fn schema_case_distinct() {
        // Only a case insensitive parser treats these as colliding.
        Schema::new(vec![
            OptionDefinition::string("abc").alias('a'),
            OptionDefinition::string("ABC").alias('A'),
        ])
        .unwrap();
    }

    #[test]
    fn schema_from_json() {
        let schema = Schema::from_json(
            r#"[
                {"name": "array", "alias": "a", "type": "number", "multiple": true},
                {"name": "verbose", "type": "boolean"},
                {"name": "file"}
            ]"#,
        )
        .unwrap();

        assert_eq!(schema.len(), 3);
        assert!(schema.get_by_alias('a').unwrap().is_multiple());
        assert_eq!(schema.get("verbose").unwrap().kind(), Kind::Boolean);
        assert_eq!(schema.get("file").unwrap().kind(), Kind::String);
    }

    #[rstest]
    #[case(r#"{"name": "abc"}"#)]
    #[case(r#"[{"alias": "a"}]"#)]
    fn schema_from_json_malformed(#[case] json: &str) {
        assert_matches!(Schema::from_json(json), Err(SchemaError::Malformed(_)));
    }

    #[rstest]
    #[case(r#"[{"name": "abc", "type": "regex"}]"#, SchemaError::InvalidType("regex".to_string()))]
    #[case(r#"[{"name": "abc", "alias": "ab"}]"#, SchemaError::InvalidAlias("ab".to_string()))]
    #[case(r#"[{"name": "abc", "alias": "1"}]"#, SchemaError::InvalidAlias("1".to_string()))]
    #[case(r#"[{"name": "a=b"}]"#, SchemaError::InvalidName("a=b".to_string()))]
    #[case(r#"[{"name": "a b"}]"#, SchemaError::InvalidName("a b".to_string()))]
    fn schema_from_json_invalid(#[case] json: &str, #[case] expected: SchemaError) {
        assert_eq!(Schema::from_json(json).unwrap_err(), expected);
    }

    #[test]
    fn schema_from_json_duplicate() {
        let result = Schema::from_json(r#"[{"name": "abc"}, {"name": "abc"}]"#);
        assert_matches!(result, Err(SchemaError::DuplicateName(name)) if name == "abc");
    }
}

use indexmap::IndexMap;
use thiserror::Error;

use crate::api::{OptionDefinition, ParseConfig, Schema, SchemaError};
use crate::matcher::{Matches, OptionIndex, TokenMatcher, UnknownOptionError};
use crate::model::{Kind, OptionValue, ParseResult, Value};
use crate::parser::coerce::CoercionError;

/// A parse that failed.
///
/// The failure is atomic: no partial result is produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A value token could not convert to its option's type.
    #[error("Parse error: {0}")]
    Coercion(#[from] CoercionError),

    /// A token matched no option (strict mode only).
    #[error("Parse error: {0}")]
    UnknownOption(#[from] UnknownOptionError),
}

/// Any failure from the one-shot [`parse_args`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The option definitions are malformed.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// The tokens could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// The configured option parser.
///
/// Each call to [`ArgumentParser::parse`] is independent; the parser holds no per-parse state.
///
/// ```
/// use argmap_builder::{ArgumentParser, OptionDefinition, OptionValue, Schema};
///
/// let schema = Schema::new(vec![OptionDefinition::number("array").multiple()]).unwrap();
/// let parser = ArgumentParser::new(schema);
///
/// let result = parser.parse(&["--array", "1", "2", "3"]).unwrap();
/// assert_eq!(result.get("array"), Some(&OptionValue::from(vec![1, 2, 3])));
/// assert_eq!(result, parser.parse(&["--array", "1", "--array", "2", "--array", "3"]).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct ArgumentParser {
    schema: Schema,
    config: ParseConfig,
    index: Option<OptionIndex>,
    keys: Vec<String>,
}

impl ArgumentParser {
    /// Create a strict, case sensitive parser.
    pub fn new(schema: Schema) -> Self {
        let keys = schema.iter().map(|d| d.name().to_string()).collect();

        Self {
            schema,
            config: ParseConfig::default(),
            index: None,
            keys,
        }
    }

    /// Create a parser with the given configuration.
    ///
    /// Fails if, under the configuration, option names or aliases collide, or a name camel-cases to nothing.
    /// For example: `foo` and `FOO` when matching case insensitively, or `dry-run` and `dryRun` when camel-casing.
    pub fn with_config(schema: Schema, config: ParseConfig) -> Result<Self, SchemaError> {
        let index = if config.is_case_insensitive() {
            Some(OptionIndex::build(schema.definitions(), true)?)
        } else {
            None
        };

        let mut keys: Vec<String> = Vec::with_capacity(schema.len());

        for definition in schema.iter() {
            let key = if config.is_camel_case() {
                camel_case(definition.name())
            } else {
                definition.name().to_string()
            };

            // A name made only of separators has no camel-cased key.
            if key.is_empty() {
                return Err(SchemaError::InvalidName(definition.name().to_string()));
            }

            if keys.contains(&key) {
                return Err(SchemaError::DuplicateName(key));
            }

            keys.push(key);
        }

        Ok(Self {
            schema,
            config,
            index,
            keys,
        })
    }

    /// The schema this parser matches against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The configuration this parser applies.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Run the parser against the input tokens.
    ///
    /// Parsing happens in two phases:
    /// 1. Token matching aligns the tokens to options (see [`ParseConfig`] for how unknown tokens are treated).
    /// 2. Coercion converts each matched raw value into its option's [`Kind`], in encounter order.
    ///
    /// The input should exclude the program name.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ParseResult, ParseError> {
        let index = self.index.as_ref().unwrap_or_else(|| self.schema.index());
        let mut token_matcher = TokenMatcher::new(
            self.schema.definitions(),
            index,
            self.schema.default_option(),
            &self.config,
        );

        // 1. Feed the raw token strings to the matcher.
        for token in tokens {
            token_matcher.feed(token.as_ref())?;
        }

        // 2. Coerce and merge the occurrences of each option.
        let Matches { values, unknown } = token_matcher.close();
        let mut slots: Vec<Option<OptionValue>> = vec![None; self.schema.len()];

        for match_tokens in values {
            let definition = &self.schema.definitions()[match_tokens.index];
            let coerced = match_tokens
                .values
                .iter()
                .map(|value| definition.kind().coerce(definition.name(), value))
                .collect::<Result<Vec<Value>, CoercionError>>()?;
            merge(&mut slots[match_tokens.index], definition, coerced);
        }

        // 3. Lay out the result in declaration order.
        let options: IndexMap<String, OptionValue> = self
            .keys
            .iter()
            .zip(slots)
            .filter_map(|(key, slot)| slot.map(|value| (key.clone(), value)))
            .collect();

        Ok(ParseResult::new(options, unknown))
    }
}

fn merge(slot: &mut Option<OptionValue>, definition: &OptionDefinition, mut coerced: Vec<Value>) {
    // An occurrence of a boolean without a value means 'true'.
    if definition.kind() == Kind::Boolean && coerced.is_empty() {
        coerced.push(Value::Boolean(true));
    }

    if definition.is_multiple() {
        match slot.get_or_insert_with(|| OptionValue::Multiple(Vec::default())) {
            OptionValue::Multiple(values) => values.extend(coerced),
            _ => unreachable!("internal error - a multiple option must hold a list"),
        }
    } else {
        // The last occurrence wins.
        let value = match coerced.into_iter().next() {
            Some(value) => OptionValue::Single(value),
            None => OptionValue::Empty,
        };
        slot.replace(value);
    }
}

/// Camel-case an option name: `dry-run` (or `dry_run`) becomes `dryRun`.
fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());

    for (i, part) in name
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .enumerate()
    {
        if i == 0 {
            out.push_str(part);
        } else {
            let mut chars = part.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }

    out
}

/// Parse `tokens` against `definitions` in one shot.
///
/// ```
/// use argmap_builder::{parse_args, OptionDefinition, OptionValue, ParseConfig, Value};
///
/// let result = parse_args(
///     vec![OptionDefinition::boolean("verbose").alias('v')],
///     &["-v", "extra"],
///     ParseConfig::default().partial(true),
/// )
/// .unwrap();
/// assert_eq!(result.get("verbose"), Some(&OptionValue::Single(Value::Boolean(true))));
/// assert_eq!(result.unknown(), ["extra"]);
/// ```
pub fn parse_args<S: AsRef<str>>(
    definitions: Vec<OptionDefinition>,
    tokens: &[S],
    config: ParseConfig,
) -> Result<ParseResult, Error> {
    let schema = Schema::new(definitions)?;
    let parser = ArgumentParser::with_config(schema, config)?;
    Ok(parser.parse(tokens)?)
}

//! `argmap` is a declarative command line option parser for Rust.
//!
//! Describe the options your program recognizes as a list of [`OptionDefinition`]s, hand `argmap` the raw tokens, and receive a [`ParseResult`]: a map from option name to typed value.
//! `argmap` deliberately does very little beyond that:
//! * *Declarative*:
//! Option definitions are plain data (they may even be loaded from JSON via [`Schema::from_json`]).
//! There is no global registry; every parse receives its schema explicitly.
//! * *Typed*:
//! Each option declares a [`Kind`] (`String`, `Number`, or `Boolean`), and every matched value is coerced into it.
//! A value which cannot be coerced is an error, never silently dropped.
//! * *Pure*:
//! A parse is a function of the schema, the configuration, and the tokens.
//! It reads no environment, performs no I/O, and either succeeds completely or fails without a partial result.
//!
//! Help messages, validation of required options, and defaults are left to the caller.
//!
//! # Usage
//! ```
//! use argmap::{ArgumentParser, OptionDefinition, OptionValue, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     OptionDefinition::number("array").alias('a').multiple(),
//!     OptionDefinition::boolean("verbose").alias('v'),
//! ])
//! .unwrap();
//! let parser = ArgumentParser::new(schema);
//!
//! // In a real program: `std::env::args().skip(1).collect::<Vec<String>>()`.
//! let result = parser.parse(&["-v", "--array", "1", "2", "--array", "3"]).unwrap();
//! assert_eq!(result.get("array"), Some(&OptionValue::from(vec![1, 2, 3])));
//! assert_eq!(result.get("verbose"), Some(&OptionValue::Single(Value::Boolean(true))));
//! assert_eq!(result.to_json().unwrap(), r#"{"array":[1.0,2.0,3.0],"verbose":true}"#);
//! ```
//!
//! # Semantics
//! `argmap` matches the tokens according to the following rules.
//!
//! * Options are matched by `--NAME` or, when an alias is declared, by `-A`.
//! Subsequent bare tokens are values of that option, until it is full or another option token appears.
//! * A `multiple` option is never full: it captures greedily.
//! Values from repeated occurrences are concatenated in encounter order, so `--array 1 2 3` is equivalent to `--array 1 --array 2 --array 3`.
//! * A `lazy_multiple` option also collects a list, but takes at most one value per occurrence.
//! * A single-valued option takes one value per occurrence; when repeated, the last occurrence wins.
//! An occurrence without any value is reported as [`OptionValue::Empty`].
//! * A `Boolean` option is `true` when specified alone.
//! It only consumes a following bare token if that token is exactly `true` or `false`.
//! * The value of an option may be attached with `=`: `--key=123` is equivalent to `--key 123`.
//! Subsequent tokens always roll over, even for `multiple` options.
//! Only the first `=` is a separator: `--key=1=2` attaches `1=2`.
//! * Multiple aliases may be combined into a single token: `-abc` is equivalent to `-a -b -c`.
//! Only the final alias may take values (ex: `-abc=1`).
//! * Tokens such as `-1`, `-2.5`, `-`, and `--` are values, never options.
//! * A bare token that no option takes goes to the `default_option` (if any); otherwise it is unknown.
//! A single-valued default option takes only the first such token.
//!
//! # Unknown tokens
//! By default, an unknown token is an [`UnknownOptionError`].
//! [`ParseConfig`] relaxes this:
//! * `partial`: unknown tokens are collected in [`ParseResult::unknown`].
//! * `stop_at_first_unknown`: the first unknown token and everything after it are collected verbatim.
//!
//! [`ParseConfig`] additionally supports matching ignoring case (`case_insensitive`) and camel-cased output keys (`camel_case`).
//!
//! # Errors
//! * [`SchemaError`]: the definitions are malformed (duplicate names or aliases, invalid aliases, etc).
//! Raised once, on construction.
//! * [`CoercionError`]: a value token does not convert to its option's [`Kind`].
//! * [`UnknownOptionError`]: a token matched nothing (strict mode only).
//!
//! # Features
//! * `tracing_debug`: Emit [`tracing`](https://docs.rs/tracing) events while matching tokens.
pub use argmap_builder::*;

//! Engine module for `argmap`.
//! See [documentation root](https://docs.rs/argmap/latest/argmap/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;

pub use api::*;
pub use matcher::UnknownOptionError;
pub use model::*;
pub use parser::{parse_args, ArgumentParser, CoercionError, Error, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

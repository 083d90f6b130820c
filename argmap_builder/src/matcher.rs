mod core;
mod index;
mod model;
mod token;

pub use self::core::UnknownOptionError;
pub(crate) use self::core::TokenMatcher;
pub(crate) use index::*;
pub(crate) use model::*;

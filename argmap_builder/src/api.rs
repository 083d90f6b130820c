mod config;
mod definition;
mod schema;

pub use config::*;
pub use definition::*;
pub use schema::*;

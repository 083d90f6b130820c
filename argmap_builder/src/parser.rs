mod base;
mod coerce;

pub use base::*;
pub use coerce::CoercionError;

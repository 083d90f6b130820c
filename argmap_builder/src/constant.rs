pub(crate) const LONG_PREFIX: &str = "--";
pub(crate) const SHORT_PREFIX: &str = "-";
pub(crate) const VALUE_DELIMITER: char = '=';
pub(crate) const UNKNOWN_KEY: &str = "_unknown";

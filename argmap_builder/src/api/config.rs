use serde::Deserialize;

/// Toggles for a parse, all of which default to off.
///
/// ```
/// use argmap_builder::ParseConfig;
///
/// let config = ParseConfig::default().partial(true).camel_case(true);
/// assert!(config.is_partial());
/// assert!(!config.is_case_insensitive());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseConfig {
    partial: bool,
    #[serde(alias = "case_insensitive")]
    case_insensitive: bool,
    #[serde(alias = "stop_at_first_unknown")]
    stop_at_first_unknown: bool,
    #[serde(alias = "camel_case")]
    camel_case: bool,
}

impl ParseConfig {
    /// Accumulate unknown tokens instead of failing with `UnknownOptionError`.
    pub fn partial(mut self, partial: bool) -> Self {
        self.partial = partial;
        self
    }

    /// Match option names and aliases ignoring case.
    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Stop matching at the first unknown token, passing it and the remaining tokens through as unknown.
    pub fn stop_at_first_unknown(mut self, stop_at_first_unknown: bool) -> Self {
        self.stop_at_first_unknown = stop_at_first_unknown;
        self
    }

    /// Camel-case the output keys (ex: `dry-run` becomes `dryRun`).
    pub fn camel_case(mut self, camel_case: bool) -> Self {
        self.camel_case = camel_case;
        self
    }

    /// Whether unknown tokens are accumulated rather than rejected.
    ///
    /// `stop_at_first_unknown` implies this.
    pub fn is_partial(&self) -> bool {
        self.partial || self.stop_at_first_unknown
    }

    /// Whether names and aliases match ignoring case.
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Whether matching stops at the first unknown token.
    pub fn is_stop_at_first_unknown(&self) -> bool {
        self.stop_at_first_unknown
    }

    /// Whether output keys are camel-cased.
    pub fn is_camel_case(&self) -> bool {
        self.camel_case
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ParseConfig::default();
        assert!(!config.is_partial());
        assert!(!config.is_case_insensitive());
        assert!(!config.is_stop_at_first_unknown());
        assert!(!config.is_camel_case());
    }

    #[test]
    fn stop_implies_partial() {
        let config = ParseConfig::default().stop_at_first_unknown(true);
        assert!(config.is_partial());
        assert!(config.is_stop_at_first_unknown());
    }

    #[test]
    fn deserialize() {
        let config: ParseConfig =
            serde_json::from_str(r#"{"partial": true, "caseInsensitive": true}"#).unwrap();
        assert_eq!(
            config,
            ParseConfig::default().partial(true).case_insensitive(true)
        );

        let config: ParseConfig = serde_json::from_str(r#"{"camel_case": true}"#).unwrap();
        assert!(config.is_camel_case());
    }
}

use thiserror::Error;

use crate::api::{OptionDefinition, ParseConfig};
use crate::matcher::index::OptionIndex;
use crate::matcher::model::*;
use crate::matcher::token::{classify, Token};

#[cfg(feature = "tracing_debug")]
use tracing::{debug, trace};

/// A token that no option accepts, raised in strict mode.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown option '{token}'.")]
pub struct UnknownOptionError {
    token: String,
}

impl UnknownOptionError {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// The offending token (or `-<alias>` when it came from a short option cluster).
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Aligns raw tokens to the options they belong to.
///
/// The matcher is always in one of two states:
/// * scanning (`buffer` is `None`): the next bare value goes to the default option, or is unknown.
/// * accumulating (`buffer` is `Some`): the next bare value goes to the open option, while it accepts it.
///
/// Any option token closes the open buffer before opening its own.
#[derive(Debug)]
pub(crate) struct TokenMatcher<'s> {
    definitions: &'s [OptionDefinition],
    index: &'s OptionIndex,
    default: Option<usize>,
    partial: bool,
    stop_at_first_unknown: bool,
    stopped: bool,
    buffer: Option<MatchBuffer>,
    matches: Matches,
}

impl<'s> TokenMatcher<'s> {
    pub(crate) fn new(
        definitions: &'s [OptionDefinition],
        index: &'s OptionIndex,
        default: Option<usize>,
        config: &ParseConfig,
    ) -> Self {
        Self {
            definitions,
            index,
            default,
            partial: config.is_partial(),
            stop_at_first_unknown: config.is_stop_at_first_unknown(),
            stopped: false,
            buffer: None,
            matches: Matches::default(),
        }
    }

    pub(crate) fn feed(&mut self, token: &str) -> Result<(), UnknownOptionError> {
        if self.stopped {
            self.matches.unknown.push(token.to_string());
            return Ok(());
        }

        match classify(token) {
            Token::Long { name, value } => {
                self.close_buffer();

                match self.index.by_name(name) {
                    Some(index) => {
                        self.open(index, value);
                        Ok(())
                    }
                    None => self.reject(token),
                }
            }
            Token::Short { shorts, value } => {
                self.close_buffer();
                self.match_shorts(token, shorts, value)
            }
            Token::Value(value) => self.match_value(value),
        }
    }

    fn match_shorts(
        &mut self,
        token: &str,
        shorts: &str,
        value: Option<&str>,
    ) -> Result<(), UnknownOptionError> {
        let resolved: Vec<(char, Option<usize>)> = shorts
            .chars()
            .map(|short| (short, self.index.by_short(short)))
            .collect();

        if self.stop_at_first_unknown && resolved.iter().any(|(_, index)| index.is_none()) {
            return self.reject(token);
        }

        let last = resolved.len() - 1;

        for (i, (short, index)) in resolved.into_iter().enumerate() {
            // Only the final option of the cluster may take values.
            let value = if i == last { value } else { None };

            match index {
                Some(index) => {
                    self.open(index, value);

                    if i != last {
                        self.close_buffer();
                    }
                }
                None => match value {
                    Some(value) => self.reject(&format!("-{short}={value}"))?,
                    None => self.reject(&format!("-{short}"))?,
                },
            }
        }

        Ok(())
    }

    fn match_value(&mut self, token: &str) -> Result<(), UnknownOptionError> {
        if let Some(match_buffer) = self.buffer.as_mut() {
            if match_buffer.accepts(token) {
                match_buffer.push(token);

                if !match_buffer.is_open() {
                    self.close_buffer();
                }

                return Ok(());
            }
        }

        self.close_buffer();

        if let Some(index) = self.default {
            let definition = &self.definitions[index];

            if definition.is_multiple() || !self.matches.contains(index) {
                #[cfg(feature = "tracing_debug")]
                {
                    trace!(
                        "Routing '{token}' to the default option '{}'.",
                        definition.name()
                    );
                }

                self.matches.values.push(MatchTokens {
                    index,
                    values: vec![token.to_string()],
                });
                return Ok(());
            }
        }

        self.reject(token)
    }

    fn open(&mut self, index: usize, value: Option<&str>) {
        let definition = &self.definitions[index];
        let mut match_buffer = MatchBuffer::new(index, Capacity::from(definition));

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Opening option '{}' (value={value:?}).", definition.name());
        }

        match value {
            Some(value) => {
                match_buffer.push(value);
                // Options using k=v syntax cannot follow up with more values afterwards.
                self.matches.values.push(match_buffer.close());
            }
            None => {
                if self.buffer.replace(match_buffer).is_some() {
                    unreachable!("internal error - the buffer is expected to be closed");
                }
            }
        }
    }

    fn close_buffer(&mut self) {
        if let Some(match_buffer) = self.buffer.take() {
            let match_tokens = match_buffer.close();

            #[cfg(feature = "tracing_debug")]
            {
                debug!(
                    "Closing option '{}' with {} value(s).",
                    self.definitions[match_tokens.index].name(),
                    match_tokens.values.len()
                );
            }

            self.matches.values.push(match_tokens);
        }
    }

    fn reject(&mut self, token: &str) -> Result<(), UnknownOptionError> {
        #[cfg(feature = "tracing_debug")]
        {
            debug!("Unknown token '{token}'.");
        }

        if self.stop_at_first_unknown {
            self.stopped = true;
            self.matches.unknown.push(token.to_string());
            Ok(())
        } else if self.partial {
            self.matches.unknown.push(token.to_string());
            Ok(())
        } else {
            Err(UnknownOptionError::new(token))
        }
    }

    pub(crate) fn close(mut self) -> Matches {
        self.close_buffer();
        self.matches
    }
}

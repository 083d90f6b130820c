use std::borrow::Cow;
use std::collections::HashMap;

use crate::api::{OptionDefinition, SchemaError};

/// Lookup from `--name` and `-alias` to the position of the definition in its schema.
#[derive(Debug, Clone)]
pub(crate) struct OptionIndex {
    names: HashMap<String, usize>,
    shorts: HashMap<char, usize>,
    folded: bool,
}

impl OptionIndex {
    /// Index the definitions, optionally folding case.
    ///
    /// Names or aliases which collide (after folding, when `folded`) are rejected.
    pub(crate) fn build(
        definitions: &[OptionDefinition],
        folded: bool,
    ) -> Result<Self, SchemaError> {
        let mut names = HashMap::default();
        let mut shorts = HashMap::default();

        for (i, definition) in definitions.iter().enumerate() {
            if names
                .insert(fold_name(definition.name(), folded).into_owned(), i)
                .is_some()
            {
                return Err(SchemaError::DuplicateName(definition.name().to_string()));
            }

            if let Some(short) = definition.short() {
                if shorts.insert(fold_short(short, folded), i).is_some() {
                    return Err(SchemaError::DuplicateAlias(short));
                }
            }
        }

        Ok(Self {
            names,
            shorts,
            folded,
        })
    }

    pub(crate) fn by_name(&self, name: &str) -> Option<usize> {
        self.names.get(fold_name(name, self.folded).as_ref()).copied()
    }

    pub(crate) fn by_short(&self, short: char) -> Option<usize> {
        self.shorts.get(&fold_short(short, self.folded)).copied()
    }
}

fn fold_name(name: &str, folded: bool) -> Cow<'_, str> {
    if folded {
        Cow::Owned(name.to_lowercase())
    } else {
        Cow::Borrowed(name)
    }
}

fn fold_short(short: char, folded: bool) -> char {
    if !folded {
        return short;
    }

    // Only fold when the lowercase form is itself a single character (ex: not 'İ').
    let mut lower = short.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(c), None) => c,
        _ => short,
    }
}

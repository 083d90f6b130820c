use crate::api::OptionDefinition;
use crate::model::Kind;

/// How many values a single occurrence of an option may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Capacity {
    /// At most one value, and only a literal `true` or `false`.
    Flag,
    /// At most one value.
    One,
    /// Any number of values; captured greedily.
    Greedy,
}

impl From<&OptionDefinition> for Capacity {
    fn from(definition: &OptionDefinition) -> Self {
        match definition.kind() {
            Kind::Boolean => Capacity::Flag,
            _ if definition.is_multiple() && !definition.is_lazy() => Capacity::Greedy,
            _ => Capacity::One,
        }
    }
}

/// The raw values matched by one occurrence of an option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct MatchTokens {
    pub index: usize,
    pub values: Vec<String>,
}

/// Every occurrence, in encounter order, plus the tokens nothing claimed.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Matches {
    pub values: Vec<MatchTokens>,
    pub unknown: Vec<String>,
}

impl Matches {
    pub(crate) fn contains(&self, index: usize) -> bool {
        self.values.iter().any(|mt| mt.index == index)
    }
}

/// The values accumulating for the currently open option.
#[derive(Debug)]
pub(super) struct MatchBuffer {
    index: usize,
    capacity: Capacity,
    values: Vec<String>,
}

impl MatchBuffer {
    pub(super) fn new(index: usize, capacity: Capacity) -> Self {
        Self {
            index,
            capacity,
            values: Vec::default(),
        }
    }

    pub(super) fn push(&mut self, value: impl Into<String>) {
        self.values.push(value.into());
    }

    /// Whether the buffer would take `token` as its next value.
    pub(super) fn accepts(&self, token: &str) -> bool {
        match self.capacity {
            Capacity::Flag => self.values.is_empty() && (token == "true" || token == "false"),
            Capacity::One => self.values.is_empty(),
            Capacity::Greedy => true,
        }
    }

    pub(super) fn is_open(&self) -> bool {
        match self.capacity {
            Capacity::Flag | Capacity::One => self.values.is_empty(),
            Capacity::Greedy => true,
        }
    }

    pub(super) fn close(self) -> MatchTokens {
        MatchTokens {
            index: self.index,
            values: self.values,
        }
    }
}

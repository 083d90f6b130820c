use thiserror::Error;

use crate::model::{Kind, Value};

/// A value token that cannot convert to its option's declared type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Option '{option}' cannot convert '{token}' to {kind}.")]
pub struct CoercionError {
    option: String,
    token: String,
    kind: Kind,
}

impl CoercionError {
    pub(crate) fn new(option: impl Into<String>, token: impl Into<String>, kind: Kind) -> Self {
        Self {
            option: option.into(),
            token: token.into(),
            kind,
        }
    }

    /// The name of the option the token was matched to.
    pub fn option(&self) -> &str {
        &self.option
    }

    /// The raw token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The type the token failed to convert to.
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

type Coerce = fn(&str) -> Option<Value>;

impl Kind {
    fn coercer(self) -> Coerce {
        match self {
            Kind::String => coerce_string,
            Kind::Number => coerce_number,
            Kind::Boolean => coerce_boolean,
        }
    }

    /// Convert a raw token into a value of this kind.
    pub(crate) fn coerce(self, option: &str, token: &str) -> Result<Value, CoercionError> {
        (self.coercer())(token).ok_or_else(|| CoercionError::new(option, token, self))
    }
}

fn coerce_string(token: &str) -> Option<Value> {
    Some(Value::String(token.to_string()))
}

fn coerce_number(token: &str) -> Option<Value> {
    // `f64::from_str` also takes 'inf' & 'NaN', which are not numeric literals.
    token
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .map(Value::Number)
}

fn coerce_boolean(token: &str) -> Option<Value> {
    match token {
        "true" => Some(Value::Boolean(true)),
        "false" => Some(Value::Boolean(false)),
        _ => None,
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// The runtime kind of a [`Value`](crate::Value).
///
/// Every value belongs to exactly one kind. `Array` and `Object` are the
/// composite kinds; everything else is atomic and is never traversed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// The uninitialized sentinel.
    Undefined,
    /// The absent sentinel.
    Null,
    Boolean,
    /// Any IEEE 754 number, including NaN and the infinities.
    Number,
    String,
    Array,
    Object,
    Function,
}

impl ValueKind {
    /// Stable lowercase name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Function => "function",
        }
    }

    /// Returns `true` for the kinds that clone and merge recurse into.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Array | Self::Object)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

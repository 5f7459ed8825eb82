use crate::callable::Callable;
use crate::kind::ValueKind;
use crate::map::Map;
use crate::predicates;

/// A value in the tree.
///
/// The variants form a closed set. `Array` and `Object` are composite and
/// own their children, so a tree can never reference itself.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The uninitialized sentinel. Array gaps are filled with it.
    #[default]
    Undefined,
    /// The absent sentinel.
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
    Function(Callable),
}

impl Value {
    /// An empty object.
    pub fn object() -> Self {
        Value::Object(Map::new())
    }

    /// An empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Undefined => ValueKind::Undefined,
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
            Value::Function(_) => ValueKind::Function,
        }
    }

    /// Lowercase kind name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.kind().as_str()
    }

    // ---------------------------------------------------------------
    // Predicates
    // ---------------------------------------------------------------

    pub fn is_array(&self) -> bool {
        predicates::is_array(self)
    }

    pub fn is_function(&self) -> bool {
        predicates::is_function(self)
    }

    /// Composite and defined: an array or an object.
    pub fn is_object(&self) -> bool {
        predicates::is_object(self)
    }

    /// A finite number.
    pub fn is_number(&self) -> bool {
        predicates::is_number(self)
    }

    /// Neither null nor undefined.
    pub fn is_valid(&self) -> bool {
        predicates::is_valid(self)
    }

    pub fn is_boolean(&self) -> bool {
        predicates::is_boolean(self)
    }

    pub fn is_string(&self) -> bool {
        predicates::is_string(self)
    }

    // ---------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The numeric payload, finite or not.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Look up a child by key.
    ///
    /// Objects resolve the key directly. Arrays resolve it only when it is a
    /// canonical index (see [`array_index`]). Atomic values have no children.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            Value::Array(items) => array_index(key).and_then(|i| items.get(i)),
            _ => None,
        }
    }

    /// Mutable form of [`get`](Value::get).
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Value::Object(map) => map.get_mut(key),
            Value::Array(items) => array_index(key).and_then(|i| items.get_mut(i)),
            _ => None,
        }
    }
}

/// Exclusive upper bound on array indices, `2^32 - 1`.
pub const MAX_ARRAY_INDEX: u32 = u32::MAX;

/// Parse `key` as a canonical array index.
///
/// Only plain decimal digits without a leading zero qualify (`"0"` itself
/// does); `"01"`, `"-1"`, `"+1"` and `" 1"` are ordinary keys, and so is
/// anything at or above [`MAX_ARRAY_INDEX`].
pub fn array_index(key: &str) -> Option<usize> {
    let canonical = !key.is_empty()
        && key.bytes().all(|b| b.is_ascii_digit())
        && (key == "0" || !key.starts_with('0'));
    if !canonical {
        return None;
    }
    match key.parse::<u32>() {
        Ok(i) if i < MAX_ARRAY_INDEX => usize::try_from(i).ok(),
        _ => None,
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl From<Callable> for Value {
    fn from(f: Callable) -> Self {
        Value::Function(f)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

//! Bridge between [`Value`] and `serde_json::Value`.
//!
//! Every JSON document converts into a `Value`. The reverse direction is
//! partial: `Undefined`, functions and non-finite numbers have no JSON
//! form. Inside objects, undefined and function entries are omitted the
//! way JSON serializers drop them; anywhere else they are an error.

use serde_json::Value as Json;

use crate::error::{TypeError, TypeResult};
use crate::map::Map;
use crate::value::Value;

/// Largest magnitude at which every integer is exactly representable in `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Map>(),
            ),
        }
    }
}

impl TryFrom<&Value> for Json {
    type Error = TypeError;

    fn try_from(value: &Value) -> TypeResult<Self> {
        match value {
            Value::Undefined | Value::Function(_) => Err(TypeError::NotRepresentable {
                kind: value.kind(),
            }),
            Value::Null => Ok(Json::Null),
            Value::Bool(b) => Ok(Json::Bool(*b)),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => Ok(Json::String(s.clone())),
            Value::Array(items) => items
                .iter()
                .map(Json::try_from)
                .collect::<TypeResult<Vec<_>>>()
                .map(Json::Array),
            Value::Object(map) => {
                let mut out = serde_json::Map::with_capacity(map.len());
                for (key, v) in map.iter() {
                    if matches!(v, Value::Undefined | Value::Function(_)) {
                        continue;
                    }
                    out.insert(key.clone(), Json::try_from(v)?);
                }
                Ok(Json::Object(out))
            }
        }
    }
}

impl TryFrom<Value> for Json {
    type Error = TypeError;

    fn try_from(value: Value) -> TypeResult<Self> {
        Json::try_from(&value)
    }
}

/// Integral values within the safe range serialize without a fraction.
/// Negative zero stays a float so its sign survives.
fn number_to_json(n: f64) -> TypeResult<Json> {
    if !n.is_finite() {
        return Err(TypeError::NonFiniteNumber(n));
    }
    let negative_zero = n == 0.0 && n.is_sign_negative();
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER && !negative_zero {
        return Ok(Json::from(n as i64));
    }
    serde_json::Number::from_f64(n)
        .map(Json::Number)
        .ok_or(TypeError::NonFiniteNumber(n))
}

impl Value {
    /// Parse a JSON document.
    pub fn from_json_str(s: &str) -> TypeResult<Self> {
        serde_json::from_str::<Json>(s)
            .map(Value::from)
            .map_err(|e| TypeError::InvalidJson(e.to_string()))
    }

    /// Render as JSON text.
    pub fn to_json_string(&self, pretty: bool) -> TypeResult<String> {
        let json = Json::try_from(self)?;
        let rendered = if pretty {
            serde_json::to_string_pretty(&json)
        } else {
            serde_json::to_string(&json)
        };
        rendered.map_err(|e| TypeError::InvalidJson(e.to_string()))
    }
}

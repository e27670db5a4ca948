use crate::io::error::Error;
use serde_json::{Map, Value};

pub(super) type Object = Map<String, Value>;

fn present<'a>(map: &'a Object, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

pub(super) fn has_key(map: &Object, key: &str) -> bool {
    present(map, key).is_some()
}

pub(super) fn object<'a>(
    map: &'a Object,
    key: &str,
    path: &'static str,
) -> Result<Option<&'a Object>, Error> {
    match present(map, key) {
        None => Ok(None),
        Some(Value::Object(inner)) => Ok(Some(inner)),
        Some(_) => Err(Error::wrong_type(path, "object")),
    }
}

pub(super) fn array<'a>(
    map: &'a Object,
    key: &str,
    path: &'static str,
) -> Result<Option<&'a [Value]>, Error> {
    match present(map, key) {
        None => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items.as_slice())),
        Some(_) => Err(Error::wrong_type(path, "array")),
    }
}

pub(super) fn non_empty_array<'a>(
    map: &'a Object,
    key: &str,
    path: &'static str,
) -> Result<Option<&'a [Value]>, Error> {
    Ok(array(map, key, path)?.filter(|items| !items.is_empty()))
}

pub(super) fn lenient_str<'a>(map: &'a Object, key: &str) -> Option<&'a str> {
    present(map, key).and_then(Value::as_str)
}

pub(super) fn number(map: &Object, key: &str) -> Option<f64> {
    present(map, key).and_then(Value::as_f64)
}

pub(super) fn reals(items: &[Value], path: &'static str) -> Result<Vec<f64>, Error> {
    items
        .iter()
        .map(|v| v.as_f64().ok_or_else(|| Error::wrong_type(path, "numeric array")))
        .collect()
}

pub(super) fn integers(items: &[Value], path: &'static str) -> Result<Vec<i64>, Error> {
    items
        .iter()
        .map(|v| integer(v).ok_or_else(|| Error::wrong_type(path, "numeric array")))
        .collect()
}

fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| u as i64))
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        _ => None,
    }
}

// Keeps the low byte, so 300 becomes 44.
#[inline]
pub(super) fn narrow_u8(value: i64) -> u8 {
    value as u8
}

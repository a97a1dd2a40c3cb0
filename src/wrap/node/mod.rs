use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::wrap::{DecodeError, NodePath, Result};

/// How a field appears in its parent object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldState<'a> {
	/// Key is not present at all.
	Absent,
	/// Key is present with an explicit `null`.
	Null,
	/// Key is present with a non-null value.
	Present(&'a Value),
}

impl<'a> FieldState<'a> {
	/// Classify the result of a field lookup.
	pub fn of(node: Option<&'a Value>) -> Self {
		match node {
			None => Self::Absent,
			Some(Value::Null) => Self::Null,
			Some(value) => Self::Present(value),
		}
	}

	/// Stable lowercase label.
	pub fn label(self) -> &'static str {
		match self {
			Self::Absent => "absent",
			Self::Null => "null",
			Self::Present(_) => "present",
		}
	}
}

/// Decode `node` as `T`, reporting shape mismatches against `path`.
pub fn decode_value<T: DeserializeOwned>(node: &Value, path: &NodePath) -> Result<T> {
	T::deserialize(node).map_err(|err| DecodeError::type_mismatch::<T>(path, err.to_string()))
}

/// Decode each element of an array node with `decode`.
///
/// Element paths are `path[0]`, `path[1]`, and so on. Fails on the first
/// element that does not decode.
pub fn decode_elements<T>(node: &Value, path: &NodePath, mut decode: impl FnMut(&Value, &NodePath) -> Result<T>) -> Result<Vec<T>> {
	let items = node
		.as_array()
		.ok_or_else(|| DecodeError::TypeMismatch {
			path: path.clone(),
			expected: "array".to_owned(),
			detail: format!("found {}", kind_name(node)),
		})?;

	let mut out = Vec::with_capacity(items.len());
	for (index, item) in items.iter().enumerate() {
		out.push(decode(item, &path.index(index))?);
	}
	Ok(out)
}

/// Short name of a node's kind for diagnostics.
pub fn kind_name(node: &Value) -> &'static str {
	match node {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

#[cfg(test)]
mod tests;

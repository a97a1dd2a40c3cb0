use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::wrap::{Absolute, AbsoluteValue, DecodeError, DefaultValueProvider, Defaulted, FieldState, NodePath, Result, decode_value, kind_name};

/// Borrowed view over one object node, used to decode its fields explicitly.
///
/// Each accessor picks the decode rule for one field, so a record's decode
/// function reads as a list of `record.<rule>("key")` calls.
#[derive(Debug, Clone)]
pub struct Record<'a> {
	fields: &'a Map<String, Value>,
	path: NodePath,
}

impl<'a> Record<'a> {
	/// View `node` as a record located at `path`.
	pub fn new(node: &'a Value, path: NodePath) -> Result<Self> {
		let fields = node.as_object().ok_or_else(|| DecodeError::TypeMismatch {
			path: path.clone(),
			expected: "object".to_owned(),
			detail: format!("found {}", kind_name(node)),
		})?;
		Ok(Self { fields, path })
	}

	/// View a document root as a record.
	pub fn root(node: &'a Value) -> Result<Self> {
		Self::new(node, NodePath::root())
	}

	/// Location of this record.
	pub fn path(&self) -> &NodePath {
		&self.path
	}

	/// Raw lookup of `key`.
	pub fn get(&self, key: &str) -> Option<&'a Value> {
		self.fields.get(key)
	}

	/// Location of the member `key`.
	pub fn field_path(&self, key: &str) -> NodePath {
		self.path.key(key)
	}

	/// Classify `key` as absent, null, or present.
	pub fn state(&self, key: &str) -> FieldState<'a> {
		FieldState::of(self.get(key))
	}

	/// Decode `key` with a caller-supplied rule receiving the raw lookup.
	pub fn decode_with<T>(&self, key: &str, decode: impl FnOnce(Option<&'a Value>, &NodePath) -> Result<T>) -> Result<T> {
		decode(self.get(key), &self.field_path(key))
	}

	/// Decode a field that must be present. `null` is passed to `T` as-is.
	pub fn required<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
		self.decode_with(key, |node, path| {
			let node = node.ok_or_else(|| DecodeError::MissingField { path: path.clone() })?;
			decode_value(node, path)
		})
	}

	/// Decode a field that may be absent or `null`.
	pub fn optional<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
		self.decode_with(key, |node, path| match FieldState::of(node) {
			FieldState::Present(node) => decode_value(node, path).map(Some),
			FieldState::Absent | FieldState::Null => Ok(None),
		})
	}

	/// Decode a field through [`Defaulted`].
	pub fn defaulted<P>(&self, key: &str) -> Result<Defaulted<P>>
	where
		P: DefaultValueProvider,
		P::Value: DeserializeOwned,
	{
		self.decode_with(key, Defaulted::<P>::decode)
	}

	/// Decode a field through [`Absolute`].
	pub fn absolute<T>(&self, key: &str) -> Result<Absolute<T>>
	where
		T: AbsoluteValue + DeserializeOwned,
	{
		self.decode_with(key, Absolute::<T>::decode)
	}

	/// View a required member object as a nested record.
	pub fn nested(&self, key: &str) -> Result<Record<'a>> {
		self.decode_with(key, |node, path| {
			let node = node.ok_or_else(|| DecodeError::MissingField { path: path.clone() })?;
			Record::new(node, path.clone())
		})
	}
}

#[cfg(test)]
mod tests;

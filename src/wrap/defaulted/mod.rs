use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::trace;

use crate::wrap::{DefaultValueProvider, FieldState, NodePath, Result, decode_value};

/// Field adapter that falls back to `P::default_value()` when the field is
/// absent or `null`.
///
/// Present, non-null values decode normally; a shape mismatch is still an
/// error and never silently replaced by the fallback. Callers are not told
/// whether a fallback was used.
///
/// With serde, a `Defaulted<P>` field in a `#[derive(Deserialize)]` struct
/// needs no extra attribute: serde reports a missing field to the field's own
/// `Deserialize` impl as an empty option, which takes the fallback branch.
pub struct Defaulted<P: DefaultValueProvider> {
	/// Decoded or fallback value.
	pub value: P::Value,
}

impl<P: DefaultValueProvider> Defaulted<P> {
	/// Wrap a known value without validation.
	pub fn new(value: P::Value) -> Self {
		Self { value }
	}

	/// Unwrap into the inner value.
	pub fn into_inner(self) -> P::Value {
		self.value
	}

	/// Decode a looked-up field node.
	///
	/// `node` is the result of looking the field up in its parent: `None` when
	/// the key is absent.
	pub fn decode(node: Option<&Value>, path: &NodePath) -> Result<Self>
	where
		P::Value: DeserializeOwned,
	{
		Self::decode_with(node, path, decode_value::<P::Value>)
	}

	/// Like [`Defaulted::decode`], with a caller-supplied decoder for the
	/// present case.
	pub fn decode_with(node: Option<&Value>, path: &NodePath, decode: impl FnOnce(&Value, &NodePath) -> Result<P::Value>) -> Result<Self> {
		match FieldState::of(node) {
			FieldState::Present(node) => decode(node, path).map(Self::new),
			state => {
				trace!(path = %path, reason = state.label(), "substituting provider default");
				Ok(Self::default())
			}
		}
	}
}

impl<P: DefaultValueProvider> Default for Defaulted<P> {
	fn default() -> Self {
		Self::new(P::default_value())
	}
}

impl<P: DefaultValueProvider> Deref for Defaulted<P> {
	type Target = P::Value;

	fn deref(&self) -> &P::Value {
		&self.value
	}
}

impl<P: DefaultValueProvider> DerefMut for Defaulted<P> {
	fn deref_mut(&mut self) -> &mut P::Value {
		&mut self.value
	}
}

impl<P: DefaultValueProvider> AsRef<P::Value> for Defaulted<P> {
	fn as_ref(&self) -> &P::Value {
		&self.value
	}
}

impl<P> fmt::Debug for Defaulted<P>
where
	P: DefaultValueProvider,
	P::Value: fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Defaulted").field(&self.value).finish()
	}
}

impl<P> Clone for Defaulted<P>
where
	P: DefaultValueProvider,
	P::Value: Clone,
{
	fn clone(&self) -> Self {
		Self::new(self.value.clone())
	}
}

impl<P> Copy for Defaulted<P>
where
	P: DefaultValueProvider,
	P::Value: Copy,
{
}

impl<P> PartialEq for Defaulted<P>
where
	P: DefaultValueProvider,
	P::Value: PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.value == other.value
	}
}

impl<P> Eq for Defaulted<P>
where
	P: DefaultValueProvider,
	P::Value: Eq,
{
}

impl<P> Hash for Defaulted<P>
where
	P: DefaultValueProvider,
	P::Value: Hash,
{
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.value.hash(state);
	}
}

impl<P> Serialize for Defaulted<P>
where
	P: DefaultValueProvider,
	P::Value: Serialize,
{
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		self.value.serialize(serializer)
	}
}

impl<'de, P> Deserialize<'de> for Defaulted<P>
where
	P: DefaultValueProvider,
	P::Value: Deserialize<'de>,
{
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		match Option::<P::Value>::deserialize(deserializer)? {
			Some(value) => Ok(Self::new(value)),
			None => Ok(Self::default()),
		}
	}
}

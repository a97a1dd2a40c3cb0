use std::fmt;
use std::ops::Deref;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::wrap::{DecodeError, NodePath, Result, decode_value};

/// Signed numeric types with an absolute value.
pub trait AbsoluteValue: Copy + PartialOrd + fmt::Debug {
	/// Absolute value, or `None` when it is not representable (`i32::MIN`).
	fn checked_absolute(self) -> Option<Self>;
}

macro_rules! impl_absolute_int {
	($($ty:ty),* $(,)?) => {
		$(
			impl AbsoluteValue for $ty {
				fn checked_absolute(self) -> Option<Self> {
					self.checked_abs()
				}
			}
		)*
	};
}

macro_rules! impl_absolute_float {
	($($ty:ty),* $(,)?) => {
		$(
			impl AbsoluteValue for $ty {
				fn checked_absolute(self) -> Option<Self> {
					Some(self.abs())
				}
			}
		)*
	};
}

impl_absolute_int!(i8, i16, i32, i64, i128, isize);
impl_absolute_float!(f32, f64);

/// Field adapter that decodes a signed number and keeps its absolute value.
///
/// Unlike [`Defaulted`](crate::wrap::Defaulted) there is no fallback: an
/// absent or `null` field is an error. Only the decode paths normalize;
/// [`Absolute::new`] stores its argument unchanged. The value is read-only
/// once wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Absolute<T> {
	value: T,
}

impl<T: AbsoluteValue> Absolute<T> {
	/// Wrap a value as-is, without taking its absolute value.
	pub fn new(value: T) -> Self {
		Self { value }
	}

	/// Wrap the absolute value of `value`. `None` when it overflows.
	pub fn checked_new(value: T) -> Option<Self> {
		value.checked_absolute().map(Self::new)
	}

	/// Unwrap into the inner value.
	pub fn into_inner(self) -> T {
		self.value
	}

	/// Decode a looked-up field node and take its absolute value.
	///
	/// `None` (key absent) fails with [`DecodeError::MissingField`]; `null` and
	/// non-numeric nodes fail with [`DecodeError::TypeMismatch`].
	pub fn decode(node: Option<&Value>, path: &NodePath) -> Result<Self>
	where
		T: DeserializeOwned,
	{
		let node = node.ok_or_else(|| DecodeError::MissingField { path: path.clone() })?;
		let raw = decode_value::<T>(node, path)?;
		Self::checked_new(raw).ok_or_else(|| DecodeError::type_mismatch::<T>(path, overflow_detail(raw)))
	}
}

impl<T> Deref for Absolute<T> {
	type Target = T;

	fn deref(&self) -> &T {
		&self.value
	}
}

impl<T> AsRef<T> for Absolute<T> {
	fn as_ref(&self) -> &T {
		&self.value
	}
}

impl<T: Serialize> Serialize for Absolute<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		self.value.serialize(serializer)
	}
}

impl<'de, T> Deserialize<'de> for Absolute<T>
where
	T: AbsoluteValue + Deserialize<'de>,
{
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let raw = T::deserialize(deserializer)?;
		Self::checked_new(raw).ok_or_else(|| D::Error::custom(overflow_detail(raw)))
	}
}

fn overflow_detail<T: fmt::Debug>(raw: T) -> String {
	format!("absolute value of {raw:?} is not representable")
}

//! Fallback value strategies for [`Defaulted`](crate::wrap::Defaulted) fields.
//!
//! A provider is a type-level marker: it is never instantiated, only named as
//! a type parameter. Adding a strategy means implementing
//! [`DefaultValueProvider`] for a new marker; the adapter does not change.

use std::marker::PhantomData;

/// Stateless strategy that produces a fallback value of type [`Self::Value`].
pub trait DefaultValueProvider {
	/// Type of the produced fallback value.
	type Value;

	/// Produce the fallback value. Must not fail.
	fn default_value() -> Self::Value;
}

/// Falls back to `false`.
#[derive(Debug)]
pub enum False {}

impl DefaultValueProvider for False {
	type Value = bool;

	fn default_value() -> bool {
		false
	}
}

/// Falls back to `true`.
#[derive(Debug)]
pub enum True {}

impl DefaultValueProvider for True {
	type Value = bool;

	fn default_value() -> bool {
		true
	}
}

/// Falls back to an empty collection `C`.
///
/// Any collection that can be built empty and extended with its own items
/// qualifies: `Vec`, `VecDeque`, `HashSet`, `BTreeSet`, `HashMap`, `BTreeMap`.
#[derive(Debug)]
pub struct Empty<C>(PhantomData<fn() -> C>);

impl<C> DefaultValueProvider for Empty<C>
where
	C: Default + IntoIterator + Extend<<C as IntoIterator>::Item>,
{
	type Value = C;

	fn default_value() -> C {
		C::default()
	}
}

/// `Vec<T>` is its own provider, falling back to `[]`.
impl<T> DefaultValueProvider for Vec<T> {
	type Value = Vec<T>;

	fn default_value() -> Vec<T> {
		Vec::new()
	}
}

/// Falls back to numeric zero.
#[derive(Debug)]
pub struct Zero<T>(PhantomData<fn() -> T>);

macro_rules! impl_zero {
	($($ty:ty => $zero:expr),* $(,)?) => {
		$(
			impl DefaultValueProvider for Zero<$ty> {
				type Value = $ty;

				fn default_value() -> $ty {
					$zero
				}
			}
		)*
	};
}

impl_zero! {
	i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
	u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
	f32 => 0.0, f64 => 0.0,
}

/// Falls back to `T::default()`.
#[derive(Debug)]
pub struct TypeDefault<T>(PhantomData<fn() -> T>);

impl<T: Default> DefaultValueProvider for TypeDefault<T> {
	type Value = T;

	fn default_value() -> T {
		T::default()
	}
}

#[cfg(test)]
mod tests;

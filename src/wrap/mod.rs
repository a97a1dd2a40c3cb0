mod absolute;
mod defaulted;
mod error;
mod node;
mod path;
mod provider;
mod record;

/// Absolute-value field adapter and its numeric bound.
pub use absolute::{Absolute, AbsoluteValue};
/// Default-on-missing field adapter.
pub use defaulted::Defaulted;
/// Error and result aliases.
pub use error::{DecodeError, Result};
/// Node classification and decode helpers.
pub use node::{FieldState, decode_elements, decode_value, kind_name};
/// Node path types.
pub use path::{NodePath, PathStep};
/// Fallback value strategies.
pub use provider::{DefaultValueProvider, Empty, False, True, TypeDefault, Zero};
/// Explicit record decoding view.
pub use record::Record;

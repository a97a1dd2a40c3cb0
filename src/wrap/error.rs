use thiserror::Error;

use crate::wrap::NodePath;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors produced while decoding fields out of semi-structured values.
#[derive(Debug, Error)]
pub enum DecodeError {
	/// Node was present but could not be decoded as the target type.
	#[error("type mismatch at {path}: expected {expected}: {detail}")]
	TypeMismatch {
		/// Location of the offending node.
		path: NodePath,
		/// Short name of the type the node was decoded as, e.g. `Vec<String>`.
		expected: String,
		/// Underlying decoder message.
		detail: String,
	},
	/// Required field was not present in its parent object.
	#[error("missing field at {path}")]
	MissingField {
		/// Location where the field was expected.
		path: NodePath,
	},
	/// Node path expression syntax is invalid.
	#[error("invalid node path: {path}")]
	InvalidNodePath {
		/// Original user-provided path string.
		path: String,
	},
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Document text was not valid JSON, or output could not be encoded.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}

impl DecodeError {
	/// Build a [`DecodeError::TypeMismatch`] naming `T` as the expected type.
	pub fn type_mismatch<T: ?Sized>(path: &NodePath, detail: impl Into<String>) -> Self {
		Self::TypeMismatch {
			path: path.clone(),
			expected: short_type_name(std::any::type_name::<T>()),
			detail: detail.into(),
		}
	}
}

/// Strip module paths from every segment of a type name.
///
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub(crate) fn short_type_name(full: &str) -> String {
	let mut out = String::with_capacity(full.len());
	let mut token = String::new();
	for ch in full.chars() {
		if ch.is_alphanumeric() || ch == '_' || ch == ':' {
			token.push(ch);
			continue;
		}
		out.push_str(last_segment(&token));
		token.clear();
		out.push(ch);
	}
	out.push_str(last_segment(&token));
	out
}

fn last_segment(token: &str) -> &str {
	token.rsplit("::").next().unwrap_or(token)
}

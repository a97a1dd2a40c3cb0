use std::path::Path;

use fieldwrap::wrap::{DecodeError, NodePath, PathStep, Record, Result};
use serde_json::Value;
use tracing::debug;

/// Read and parse a JSON document from disk.
pub(crate) fn read_document(path: &Path) -> Result<Value> {
	let bytes = std::fs::read(path)?;
	let doc = serde_json::from_slice::<Value>(&bytes)?;
	debug!(path = %path.display(), bytes = bytes.len(), "loaded document");
	Ok(doc)
}

/// Parse a field path whose final step is an object key.
pub(crate) fn parse_field_path(field: &str) -> Result<NodePath> {
	let path = NodePath::parse(field)?;
	match path.last() {
		Some(PathStep::Key(_)) => Ok(path),
		_ => Err(DecodeError::InvalidNodePath { path: field.to_owned() }),
	}
}

/// Resolve the record holding the final key of `field`, plus that key.
pub(crate) fn resolve_field<'a, 'p>(doc: &'a Value, field: &'p NodePath) -> Result<(Record<'a>, &'p str)> {
	let (Some(PathStep::Key(key)), Some(parent)) = (field.last(), field.parent()) else {
		return Err(DecodeError::InvalidNodePath { path: field.to_string() });
	};
	let node = parent.resolve(doc).ok_or_else(|| DecodeError::MissingField { path: parent.clone() })?;
	Ok((Record::new(node, parent)?, key.as_str()))
}

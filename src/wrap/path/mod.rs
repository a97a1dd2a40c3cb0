use std::fmt;

use serde_json::Value;

use crate::wrap::{DecodeError, Result};

/// One step from a node to one of its children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
	/// Select an object member by key.
	Key(String),
	/// Select an array element by zero-based index.
	Index(usize),
}

/// Location of a node inside a semi-structured value tree.
///
/// Renders as `$` for the root, `$.items[2].name` for nested nodes. Keys that
/// are not plain identifiers render quoted, e.g. `$["two words"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath {
	/// Ordered sequence of steps from the root.
	pub steps: Vec<PathStep>,
}

impl NodePath {
	/// Path of the document root.
	pub fn root() -> Self {
		Self::default()
	}

	/// Path of the member `key` below this node.
	pub fn key(&self, key: &str) -> Self {
		let mut out = self.clone();
		out.steps.push(PathStep::Key(key.to_owned()));
		out
	}

	/// Path of element `index` below this node.
	pub fn index(&self, index: usize) -> Self {
		let mut out = self.clone();
		out.steps.push(PathStep::Index(index));
		out
	}

	/// Whether this path addresses the root.
	pub fn is_root(&self) -> bool {
		self.steps.is_empty()
	}

	/// Final step, if any.
	pub fn last(&self) -> Option<&PathStep> {
		self.steps.last()
	}

	/// Path with the final step removed. `None` for the root.
	pub fn parent(&self) -> Option<Self> {
		let (_, head) = self.steps.split_last()?;
		Some(Self { steps: head.to_vec() })
	}

	/// Walk `root` along this path.
	pub fn resolve<'a>(&self, root: &'a Value) -> Option<&'a Value> {
		let mut node = root;
		for step in &self.steps {
			node = match step {
				PathStep::Key(key) => node.as_object()?.get(key)?,
				PathStep::Index(index) => node.as_array()?.get(*index)?,
			};
		}
		Some(node)
	}

	/// Parse dotted key syntax with optional `[index]` and `["key"]` selectors.
	///
	/// Accepts an optional leading `$`; a lone `$` is the root. Quoted keys use
	/// JSON string escapes, so every path this type renders parses back.
	pub fn parse(input: &str) -> Result<Self> {
		let invalid = || DecodeError::InvalidNodePath { path: input.to_owned() };

		let (body, rooted) = match input.strip_prefix('$') {
			Some(rest) => (rest, true),
			None => (input, false),
		};

		let bytes = body.as_bytes();
		let mut idx = 0_usize;
		let mut steps = Vec::new();

		if !rooted && bytes.first() != Some(&b'[') {
			idx = parse_key(body, idx, &mut steps).ok_or_else(invalid)?;
		}

		loop {
			while idx < bytes.len() && bytes[idx] == b'[' {
				idx = parse_selector(body, idx, &mut steps).ok_or_else(invalid)?;
			}

			if idx >= bytes.len() {
				break;
			}
			if bytes[idx] != b'.' {
				return Err(invalid());
			}
			idx = parse_key(body, idx + 1, &mut steps).ok_or_else(invalid)?;
		}

		Ok(Self { steps })
	}
}

/// Read a bare key starting at `start`; returns the index after it.
fn parse_key(body: &str, start: usize, steps: &mut Vec<PathStep>) -> Option<usize> {
	let bytes = body.as_bytes();
	let mut end = start;
	while end < bytes.len() && is_key_byte(bytes[end]) {
		end += 1;
	}
	if end == start {
		return None;
	}

	steps.push(PathStep::Key(body[start..end].to_owned()));
	Some(end)
}

/// Read a `[N]` or `["key"]` selector whose `[` sits at `start`.
fn parse_selector(body: &str, start: usize, steps: &mut Vec<PathStep>) -> Option<usize> {
	let bytes = body.as_bytes();
	let open = start + 1;

	if bytes.get(open) == Some(&b'"') {
		let mut close = open + 1;
		loop {
			match *bytes.get(close)? {
				b'\\' => close += 2,
				b'"' => break,
				_ => close += 1,
			}
		}
		if bytes.get(close + 1) != Some(&b']') {
			return None;
		}

		let key = serde_json::from_str::<String>(&body[open..=close]).ok()?;
		steps.push(PathStep::Key(key));
		return Some(close + 2);
	}

	let mut end = open;
	while bytes.get(end).is_some_and(u8::is_ascii_digit) {
		end += 1;
	}
	if end == open || bytes.get(end) != Some(&b']') {
		return None;
	}

	let number = body[open..end].parse::<usize>().ok()?;
	steps.push(PathStep::Index(number));
	Some(end + 1)
}

impl fmt::Display for NodePath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("$")?;
		for step in &self.steps {
			match step {
				PathStep::Key(key) if !key.is_empty() && key.bytes().all(is_key_byte) => write!(f, ".{key}")?,
				PathStep::Key(key) => write!(f, "[{}]", Value::String(key.clone()))?,
				PathStep::Index(index) => write!(f, "[{index}]")?,
			}
		}
		Ok(())
	}
}

fn is_key_byte(byte: u8) -> bool {
	byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-'
}

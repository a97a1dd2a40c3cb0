use std::path::PathBuf;

use clap::ValueEnum;
use fieldwrap::wrap::{Empty, False, Record, Result, True, Zero};
use serde_json::{Value, json};

use crate::cmd::util::{parse_field_path, read_document, resolve_field};

/// Adapter selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AdapterKind {
	/// Boolean, `false` when absent or null.
	BoolOrFalse,
	/// Boolean, `true` when absent or null.
	BoolOrTrue,
	/// Array, `[]` when absent or null.
	ListOrEmpty,
	/// Integer, `0` when absent or null.
	IntOrZero,
	/// Absolute value of an integer.
	AbsInt,
	/// Absolute value of a float.
	AbsFloat,
	/// Integer that must be present.
	RequiredInt,
	/// Boolean that must be present.
	RequiredBool,
}

impl AdapterKind {
	/// Command-line spelling.
	pub fn label(self) -> &'static str {
		match self {
			Self::BoolOrFalse => "bool-or-false",
			Self::BoolOrTrue => "bool-or-true",
			Self::ListOrEmpty => "list-or-empty",
			Self::IntOrZero => "int-or-zero",
			Self::AbsInt => "abs-int",
			Self::AbsFloat => "abs-float",
			Self::RequiredInt => "required-int",
			Self::RequiredBool => "required-bool",
		}
	}

	/// Decode `key` of `record` and render the result as JSON.
	pub fn apply(self, record: &Record<'_>, key: &str) -> Result<Value> {
		let value = match self {
			Self::BoolOrFalse => json!(record.defaulted::<False>(key)?.into_inner()),
			Self::BoolOrTrue => json!(record.defaulted::<True>(key)?.into_inner()),
			Self::ListOrEmpty => Value::Array(record.defaulted::<Empty<Vec<Value>>>(key)?.into_inner()),
			Self::IntOrZero => json!(record.defaulted::<Zero<i64>>(key)?.into_inner()),
			Self::AbsInt => json!(record.absolute::<i64>(key)?.into_inner()),
			Self::AbsFloat => json!(record.absolute::<f64>(key)?.into_inner()),
			Self::RequiredInt => json!(record.required::<i64>(key)?),
			Self::RequiredBool => json!(record.required::<bool>(key)?),
		};
		Ok(value)
	}
}

/// Output formatting switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
	/// Emit one JSON object instead of `key: value` lines.
	pub json: bool,
	/// Indent JSON output.
	pub pretty: bool,
}

/// Decode `field` of the document at `path` through `adapter` and print it.
pub fn run(path: PathBuf, field: String, adapter: AdapterKind, options: OutputOptions) -> Result<()> {
	let doc = read_document(&path)?;
	let field_path = parse_field_path(&field)?;
	let (record, key) = resolve_field(&doc, &field_path)?;
	let value = adapter.apply(&record, key)?;

	if options.json {
		let out = DecodeJson {
			path: field_path.to_string(),
			adapter: adapter.label(),
			value,
		};
		let text = if options.pretty {
			serde_json::to_string_pretty(&out)?
		} else {
			serde_json::to_string(&out)?
		};
		println!("{text}");
		return Ok(());
	}

	println!("path: {field_path}");
	println!("adapter: {}", adapter.label());
	println!("value: {value}");
	Ok(())
}

#[derive(serde::Serialize)]
struct DecodeJson {
	path: String,
	adapter: &'static str,
	value: Value,
}

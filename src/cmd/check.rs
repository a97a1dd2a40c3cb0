use std::path::PathBuf;

use fieldwrap::wrap::Result;

use crate::cmd::util::{parse_field_path, read_document, resolve_field};

/// Print whether `field` is absent, null, or present in the document at `path`.
pub fn run(path: PathBuf, field: String, json: bool) -> Result<()> {
	let doc = read_document(&path)?;
	let field_path = parse_field_path(&field)?;
	let (record, key) = resolve_field(&doc, &field_path)?;
	let state = record.state(key);

	if json {
		let out = CheckJson {
			path: field_path.to_string(),
			state: state.label(),
		};
		println!("{}", serde_json::to_string(&out)?);
		return Ok(());
	}

	println!("path: {field_path}");
	println!("state: {}", state.label());
	Ok(())
}

#[derive(serde::Serialize)]
struct CheckJson {
	path: String,
	state: &'static str,
}

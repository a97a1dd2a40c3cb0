mod accessors {
	use serde_json::json;

	use crate::wrap::{DecodeError, Empty, False, FieldState, Record, Zero};

	#[test]
	fn non_object_is_rejected() {
		let doc = json!([1, 2]);
		let err = Record::root(&doc).expect_err("array is not a record");
		assert!(matches!(err, DecodeError::TypeMismatch { ref expected, ref detail, .. } if expected == "object" && detail == "found array"));
	}

	#[test]
	fn defaulted_fields_collapse_absent_and_null() {
		let doc = json!({ "nil": null, "flag": true });
		let record = Record::root(&doc).expect("object record");

		assert!(!record.defaulted::<False>("missing").expect("absent decodes").value);
		assert!(!record.defaulted::<False>("nil").expect("null decodes").value);
		assert!(record.defaulted::<False>("flag").expect("bool decodes").value);
		assert!(record.defaulted::<Empty<Vec<i64>>>("nil").expect("null decodes").is_empty());
		assert_eq!(record.defaulted::<Zero<i64>>("missing").expect("absent decodes").into_inner(), 0);
	}

	#[test]
	fn required_and_optional_fields() {
		let doc = json!({ "name": "ada", "nil": null });
		let record = Record::root(&doc).expect("object record");

		assert_eq!(record.required::<String>("name").expect("name decodes"), "ada");
		assert!(matches!(record.required::<String>("age"), Err(DecodeError::MissingField { ref path }) if path.to_string() == "$.age"));
		assert!(matches!(record.required::<String>("nil"), Err(DecodeError::TypeMismatch { .. })));
		assert_eq!(record.optional::<String>("nil").expect("null decodes"), None);
		assert_eq!(record.optional::<String>("age").expect("absent decodes"), None);
		assert_eq!(record.optional::<String>("name").expect("name decodes").as_deref(), Some("ada"));
	}

	#[test]
	fn absolute_fields_have_no_fallback() {
		let doc = json!({ "idk": -9001, "nil": null });
		let record = Record::root(&doc).expect("object record");

		assert_eq!(record.absolute::<i64>("idk").expect("number decodes").into_inner(), 9001);
		assert!(record.absolute::<i64>("nil").is_err());
		assert!(matches!(record.absolute::<i64>("gone"), Err(DecodeError::MissingField { .. })));
	}

	#[test]
	fn state_reports_lookup_shape() {
		let doc = json!({ "nil": null, "n": 1 });
		let record = Record::root(&doc).expect("object record");

		assert_eq!(record.state("gone"), FieldState::Absent);
		assert_eq!(record.state("nil"), FieldState::Null);
		assert_eq!(record.state("n").label(), "present");
	}
}

mod nesting {
	use serde_json::json;

	use crate::wrap::{DecodeError, False, Record};

	#[test]
	fn nested_records_extend_paths() {
		let doc = json!({ "outer": { "inner": { "flag": "nope" } } });
		let root = Record::root(&doc).expect("object record");
		let inner = root.nested("outer").and_then(|outer| outer.nested("inner")).expect("nested records");

		assert_eq!(inner.path().to_string(), "$.outer.inner");
		let err = inner.defaulted::<False>("flag").expect_err("string is not bool");
		assert!(err.to_string().starts_with("type mismatch at $.outer.inner.flag: expected bool"), "unexpected error: {err}");
	}

	#[test]
	fn nested_requires_presence() {
		let doc = json!({});
		let root = Record::root(&doc).expect("object record");
		assert!(matches!(root.nested("outer"), Err(DecodeError::MissingField { .. })));
	}
}

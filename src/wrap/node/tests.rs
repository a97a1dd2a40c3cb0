mod field_state {
	use serde_json::json;

	use crate::wrap::FieldState;

	#[test]
	fn lookup_results_classify_three_ways() {
		let doc = json!({ "nil": null, "flag": false });
		let fields = doc.as_object().expect("object");

		assert_eq!(FieldState::of(fields.get("missing")), FieldState::Absent);
		assert_eq!(FieldState::of(fields.get("nil")), FieldState::Null);
		assert_eq!(FieldState::of(fields.get("flag")), FieldState::Present(&json!(false)));
		assert_eq!(FieldState::of(fields.get("flag")).label(), "present");
	}
}

mod decode {
	use serde_json::json;

	use crate::wrap::{DecodeError, NodePath, decode_elements, decode_value};

	#[test]
	fn decode_value_reports_path_and_type() {
		let path = NodePath::root().key("count");
		let err = decode_value::<u8>(&json!("many"), &path).expect_err("string is not u8");

		let DecodeError::TypeMismatch { path: at, expected, detail } = err else {
			panic!("expected type mismatch");
		};
		assert_eq!(at, path);
		assert_eq!(expected, "u8");
		assert!(detail.contains("invalid type"), "unexpected detail: {detail}");
	}

	#[test]
	fn decode_elements_indexes_failures() {
		let path = NodePath::root().key("ids");
		let err = decode_elements(&json!([1, 2, "x"]), &path, decode_value::<i32>).expect_err("third element fails");

		assert!(matches!(err, DecodeError::TypeMismatch { ref path, .. } if path.to_string() == "$.ids[2]"));
	}

	#[test]
	fn decode_elements_rejects_non_arrays() {
		let err = decode_elements(&json!({}), &NodePath::root(), decode_value::<i32>).expect_err("object is not an array");
		assert!(matches!(err, DecodeError::TypeMismatch { ref expected, .. } if expected == "array"));
	}

	#[test]
	fn decode_elements_keeps_order() {
		let out = decode_elements(&json!([3, 1, 2]), &NodePath::root(), decode_value::<i32>).expect("array decodes");
		assert_eq!(out, vec![3, 1, 2]);
	}
}

mod builtin {
	use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

	use crate::wrap::{DefaultValueProvider, Empty, False, True, TypeDefault, Zero};

	#[derive(Debug, Default, PartialEq)]
	struct Member {
		name: String,
	}

	#[test]
	fn boolean_providers() {
		assert!(!False::default_value());
		assert!(True::default_value());
	}

	#[test]
	fn empty_works_for_scalar_and_record_elements() {
		assert_eq!(Empty::<Vec<i32>>::default_value(), Vec::<i32>::new());
		assert_eq!(Empty::<Vec<Member>>::default_value(), Vec::<Member>::new());
		assert!(Empty::<VecDeque<String>>::default_value().is_empty());
		assert!(Empty::<HashSet<u8>>::default_value().is_empty());
		assert!(Empty::<BTreeSet<String>>::default_value().is_empty());
		assert!(Empty::<BTreeMap<String, Member>>::default_value().is_empty());
	}

	#[test]
	fn vec_is_its_own_provider() {
		assert!(<Vec<Member> as DefaultValueProvider>::default_value().is_empty());
	}

	#[test]
	fn zero_and_type_default() {
		assert_eq!(Zero::<i64>::default_value(), 0);
		assert_eq!(Zero::<u8>::default_value(), 0);
		assert_eq!(Zero::<f64>::default_value(), 0.0);
		assert_eq!(TypeDefault::<Member>::default_value(), Member::default());
		assert_eq!(TypeDefault::<String>::default_value(), "");
	}

	#[test]
	fn providers_are_deterministic() {
		assert_eq!(Empty::<Vec<u8>>::default_value(), Empty::<Vec<u8>>::default_value());
		assert_eq!(False::default_value(), False::default_value());
	}
}

mod custom {
	use crate::wrap::DefaultValueProvider;

	enum Unnamed {}

	impl DefaultValueProvider for Unnamed {
		type Value = String;

		fn default_value() -> String {
			"unnamed".to_owned()
		}
	}

	#[test]
	fn user_providers_plug_in() {
		assert_eq!(Unnamed::default_value(), "unnamed");
	}
}

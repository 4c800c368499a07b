//! Unit tests for tablog-core.

#[cfg(test)]
mod value_tests {
    use crate::value::{ScalarValue, TabularValue};

    #[test]
    fn scalar_display() {
        assert_eq!(ScalarValue::Int(42).to_string(), "42");
        assert_eq!(ScalarValue::Float(0.5).to_string(), "0.5");
        assert_eq!(ScalarValue::Bool(true).to_string(), "true");
        assert_eq!(ScalarValue::Str("abc".into()).to_string(), "abc");
    }

    #[test]
    fn scalar_from_primitives() {
        assert_eq!(ScalarValue::from(3i32), ScalarValue::Int(3));
        assert_eq!(ScalarValue::from(3u32), ScalarValue::Int(3));
        assert_eq!(ScalarValue::from(0.25f32), ScalarValue::Float(0.25));
        assert_eq!(ScalarValue::from("x"), ScalarValue::Str("x".into()));
    }

    #[test]
    fn nested_flattens_depth_first() {
        let v = TabularValue::nested([
            ("lr", TabularValue::from(0.01)),
            ("momentum", TabularValue::from(0.9)),
        ]);
        let mut out = Vec::new();
        v.flatten_into("optimizer", &mut out);
        let keys: Vec<_> = out.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["optimizer.lr", "optimizer.momentum"]);
    }
}

#[cfg(test)]
mod tabular_tests {
    use crate::tabular::TabularInput;
    use crate::value::{ScalarValue, TabularValue};

    #[test]
    fn flat_map_preserves_insertion_order() {
        let mut tab = TabularInput::new();
        tab.record("loss", 0.5);
        tab.record("acc", 0.9);
        tab.record("epoch", 3);
        let keys: Vec<_> = tab
            .as_flat_primitive_map()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, ["loss", "acc", "epoch"]);
    }

    #[test]
    fn overwrite_keeps_original_position() {
        let mut tab = TabularInput::new();
        tab.record("loss", 0.5);
        tab.record("acc", 0.9);
        tab.record("loss", 0.4);
        let flat = tab.as_flat_primitive_map();
        assert_eq!(flat[0], ("loss".to_owned(), ScalarValue::Float(0.4)));
        assert_eq!(flat[1].0, "acc");
        assert_eq!(flat.len(), 2);
    }

    #[test]
    fn nested_values_flatten_with_dotted_keys() {
        let mut tab = TabularInput::new();
        tab.record("loss", 0.5);
        tab.record(
            "optimizer",
            TabularValue::nested([("lr", 0.01), ("momentum", 0.9)]),
        );
        let keys: Vec<_> = tab
            .as_flat_primitive_map()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, ["loss", "optimizer.lr", "optimizer.momentum"]);
    }

    #[test]
    fn reset_clears_values_but_not_marks() {
        let mut tab = TabularInput::new();
        tab.record("loss", 0.5);
        tab.mark("loss");
        tab.reset();
        assert!(tab.is_empty());
        assert!(tab.is_marked("loss"));
    }

    #[test]
    fn unmarked_keys_reports_never_persisted_metrics() {
        let mut tab = TabularInput::new();
        tab.record("loss", 0.5);
        tab.record("acc", 0.9);
        tab.mark("loss");
        assert_eq!(tab.unmarked_keys(), ["acc"]);
    }

    #[test]
    fn unmarked_keys_sees_flattened_names() {
        let mut tab = TabularInput::new();
        tab.record("optimizer", TabularValue::nested([("lr", 0.01)]));
        assert_eq!(tab.unmarked_keys(), ["optimizer.lr"]);
        tab.mark("optimizer.lr");
        assert!(tab.unmarked_keys().is_empty());
    }
}

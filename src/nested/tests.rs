#![cfg(test)]

use super::*;
use crate::node;

#[test]
fn test_nested_matches_in_order() {
    let data = node!({ "a": 1, "b": { "a": 2, "c": { "a": 3 } } });

    assert_eq!(
        find_value_by_key(&data, "a"),
        [&Node::Scalar(1), &Node::Scalar(2), &Node::Scalar(3)],
        "Matches should be yielded depth-first, in key order."
    );
}

#[test]
fn test_arrays_are_opaque() {
    let data = node!({ "a": [1, 2, { "a": 99 }] });
    let found = find_value_by_key(&data, "a");

    assert_eq!(found.len(), 1, "Mappings inside an array should never be searched.");
    assert_eq!(found[0], &node!([1, 2, { "a": 99 }]), "The array itself is the match.");
}

#[test]
fn test_outer_match_before_inner() {
    let data = node!({ "x": { "x": { "x": 0 } } });
    let found = find_value_by_key(&data, "x");

    assert_eq!(found.len(), 3);
    assert_eq!(found[0], &node!({ "x": { "x": 0 } }), "The outermost match should come first.");
    assert_eq!(found[1], &node!({ "x": 0 }));
    assert_eq!(found[2], &Node::Scalar(0));
}

#[test]
fn test_pre_order_across_siblings() {
    // Everything under "first" is visited before "second", even though "second" is shallower.
    let data = node!({
        "first": { "deep": { "k": "first.deep" }, "k": "first" },
        "k": "root",
        "second": { "k": "second" },
    });

    let found: Vec<_> = data
        .find_by_key("k")
        .filter_map(Node::as_scalar)
        .copied()
        .collect();
    assert_eq!(found, ["first.deep", "first", "root", "second"]);
}

#[test]
fn test_non_mapping_roots() {
    let scalar: Node<u8> = Node::Scalar(1);
    let array = node!([{ "a": 1 }, { "a": 2 }]);

    assert!(find_value_by_key(&scalar, "a").is_empty(), "A scalar has no keys to match.");
    assert!(find_value_by_key(&array, "a").is_empty(), "An array root shouldn't be searched.");
    let empty: Node<u8> = node!({});
    assert!(find_value_by_key(&empty, "a").is_empty());
}

#[test]
fn test_no_match_and_exhaustion() {
    let data = node!({ "a": { "b": 1 }, "c": [2] });
    let mut search = data.find_by_key("missing");

    assert_eq!(search.target(), "missing");
    assert_eq!(search.next(), None);
    assert_eq!(search.next(), None, "A finished search should stay finished.");
}

#[test]
fn test_deep_nesting() {
    // Deep enough that a call-stack recursion would be a concern in debug builds.
    let mut data = Node::Scalar(0_u32);
    for depth in 1..=100_000 {
        data = Node::Mapping(Mapping::from_iter([("k", data)]));
        if depth % 50_000 == 0 {
            data = Node::Mapping(Mapping::from_iter([("k", data), ("marker", Node::Scalar(depth))]));
        }
    }

    // The outer marker sits after "k" in its mapping, so the inner one is reached first.
    let markers: Vec<_> = data.find_by_key("marker").collect();
    assert_eq!(markers, [&Node::Scalar(50_000), &Node::Scalar(100_000)]);

    // Dropping a structure this deep recursively would overflow the stack, so take it apart
    // iteratively.
    let mut next = Some(data);
    while let Some(node) = next.take() {
        if let Node::Mapping(mapping) = node {
            next = mapping.into_iter().find(|(key, _)| key == "k").map(|(_, value)| value);
        }
    }
}

#[test]
fn test_mapping_insert_keeps_position() {
    let mut mapping = Mapping::new();
    mapping.insert("one", Node::Scalar(1));
    mapping.insert("two", Node::Scalar(2));
    assert_eq!(mapping.insert("one", Node::Scalar(10)), Some(Node::Scalar(1)));

    assert_eq!(mapping.len(), 2, "Keys should be unique.");
    assert_eq!(mapping.keys().collect::<Vec<_>>(), ["one", "two"]);
    assert_eq!(mapping.get("one"), Some(&Node::Scalar(10)));
    assert!(!mapping.contains_key("three"));
}

#[test]
fn test_index_keys_enumerate_first() {
    let data = node!({ "b": { "x": "b" }, "2": { "x": "two" }, "1": { "x": "one" } });

    let found: Vec<_> = data
        .find_by_key("x")
        .filter_map(Node::as_scalar)
        .copied()
        .collect();
    assert_eq!(
        found,
        ["one", "two", "b"],
        "Index keys should be visited in ascending order before any other key."
    );
}

#[test]
fn test_index_key_ordering() {
    let mut mapping = Mapping::new();
    for key in ["z", "10", "01", "2", "a", "0", "4294967295", "4294967294", "-1", "1.5"] {
        mapping.insert(key, Node::Scalar(()));
    }

    assert_eq!(
        mapping.keys().collect::<Vec<_>>(),
        ["0", "2", "10", "4294967294", "z", "01", "a", "4294967295", "-1", "1.5"],
        "Only canonical integers below u32::MAX should be ordered numerically."
    );

    mapping.insert("2", Node::Scalar(()));
    mapping.insert("z", Node::Scalar(()));
    assert_eq!(mapping.len(), 10, "Re-inserting index or plain keys shouldn't duplicate them.");
    assert_eq!(mapping.keys().nth(1), Some("2"));
}

#[test]
fn test_mapping_equality_ignores_order() {
    let left = node!({ "a": 1, "b": [2, 3] });
    let right = node!({ "b": [2, 3], "a": 1 });
    assert_eq!(left, right);
    assert_ne!(left, node!({ "a": 1, "b": [3, 2] }), "Array order should still matter.");
    assert_ne!(left, node!({ "a": 1 }));
}

#[test]
fn test_variants_and_display() {
    let data = node!({ "a": 1, "b": [2, { "c": 3 }] });
    assert!(data.is_mapping());
    assert!(!data.is_array());
    assert_eq!(data.to_string(), "{a: 1, b: [2, {c: 3}]}");

    let array = data.as_mapping().and_then(|m| m.get("b")).and_then(Node::as_array);
    assert_eq!(array.map(<[_]>::len), Some(2));

    assert_eq!(Node::Scalar(5).into_scalar(), Ok(5));
    assert_eq!(node!([5]).into_scalar(), Err(node!([5])));
}

#[cfg(feature = "json")]
mod json {
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn test_from_json_keeps_key_order() {
        let data = Node::<Value>::from_json_str(r#"{"z": 1, "a": {"z": 2}, "m": [{"z": 3}]}"#)
            .expect("valid JSON should parse");

        let found: Vec<_> = data.find_by_key("z").cloned().map(Value::from).collect();
        assert_eq!(found, [json!(1), json!(2)], "Object keys should keep their document order.");
    }

    #[test]
    fn test_from_json_orders_index_keys() {
        let data = Node::<Value>::from_json_str(
            r#"{"b": {"x": "b"}, "2": {"x": "two"}, "1": {"x": "one"}}"#,
        )
        .expect("valid JSON should parse");

        let found: Vec<_> = data.find_by_key("x").cloned().map(Value::from).collect();
        assert_eq!(found, [json!("one"), json!("two"), json!("b")]);
    }

    #[test]
    fn test_json_round_trip() {
        let value = json!({ "name": "root", "tags": ["a", null, true], "meta": { "n": 1.5 } });
        let node = Node::from(value.clone());

        assert!(node.as_mapping().is_some_and(|m| m.get("tags").is_some_and(Node::is_array)));
        assert_eq!(Value::from(node), value);
    }

    #[test]
    fn test_invalid_json() {
        assert!(Node::<Value>::from_json_str("{not json").is_err());
    }
}

//! Matching behaviour over a table of (input, schema, expected) cases.
//!
//! Every case is also checked wrapped in `{"_$not": schema}` with the
//! opposite expectation.

use json_match::{matches, Schema};
use serde_json::{json, Value};

const CASES: &[(&str, &str, bool)] = &[
    (r#"{"type":"created"}"#, r#"{"type":"created"}"#, true),
    (r#"{}"#, r#"{"type":"created"}"#, false),
    (r#"{"type":"updated"}"#, r#"{"type":"created"}"#, false),
    (r#"{"type":1}"#, r#"{"type":"created"}"#, false),
    (r#"{"type":1}"#, r#"{"type":1}"#, true),
    (r#"{"count":1,"type":"created"}"#, r#"{"count":1}"#, true),
    (r#"{"count":1,"type":"created"}"#, r#"{"count":1,"type":"created"}"#, true),
    (r#"{"count":1}"#, r#"{"count":1,"type":"created"}"#, false),
    (r#"{"count":0}"#, r#"{"count":{"_$lt":1}}"#, true),
    (r#"{"count":2}"#, r#"{"count":{"_$lt":1}}"#, false),
    (r#"{"count":2}"#, r#"{"count":{"_$eq":2}}"#, true),
    (r#"{"count":2}"#, r#"{"count":{"_$neq":2}}"#, false),
    (r#"{"count":2}"#, r#"{"count":{"_$gt":1,"_$lt":3}}"#, true),
    (r#"{"title":"a"}"#, r#"{"title":{"_$gt":"b"}}"#, false),
    (r#"{"title":"c"}"#, r#"{"title":{"_$gt":"b"}}"#, true),
    (r#"{"type":"created"}"#, r#"{"type":{"_$neq":"created"}}"#, false),
    (r#"{"type":"created"}"#, r#"{"type":{"_$eq":"created"}}"#, true),
    (r#"{"type":{"something":"created"}}"#, r#"{"type":{"something":"created"}}"#, true),
    (r#"{"type":{"something":"created"}}"#, r#"{"type":{"something":"updated"}}"#, false),
    (r#"{"type":{"something":"created"}}"#, r#"{"type":1}"#, false),
    (r#"{"tags":["test","other"]}"#, r#"{"tags":"test"}"#, true),
    (r#"{"tags":["test","other"]}"#, r#"{"tags":"nope"}"#, false),
    (r#"{"items":[{"sku":"test"}]}"#, r#"{"items":{"sku":"test"}}"#, true),
    (r#"{"items":[{"sku":"test"}]}"#, r#"{"items":{"sku":"1"}}"#, false),
    (
        r#"{"items":[{"inventory":9},{"inventory":11}]}"#,
        r#"{"items":{"inventory":{"_$lte":10}}}"#,
        true,
    ),
    (
        r#"{"items":[{"inventory":12},{"inventory":11}]}"#,
        r#"{"items":{"inventory":{"_$lte":10}}}"#,
        false,
    ),
    (r#"{"tags":["test","other","more"]}"#, r#"{"tags":["test","other"]}"#, true),
    (r#"{"tags":["test","other","more"]}"#, r#"{"tags":["test","whatever"]}"#, false),
    (r#"{"tags":["test","other"]}"#, r#"{"tags":{"_$eq":["test","other"]}}"#, true),
    (r#"{"tags":["test","other","more"]}"#, r#"{"tags":{"_$eq":["test","other"]}}"#, false),
    (r#"[1,2,3]"#, r#"3"#, true),
    (r#"[1,2,3]"#, r#"4"#, false),
    (r#"[1,2,3]"#, r#"[{"_$eq":3}]"#, true),
    (r#"[1,2,3]"#, r#"[{"_$eq":4}]"#, false),
    (r#"[1,2,3]"#, r#"{"_$eq":3}"#, false),
    (r#"{"exist":true}"#, r#"{"exist":true}"#, true),
    (r#"{"exist":true}"#, r#"{"exist":false}"#, false),
    (r#"{"exist":null}"#, r#"{"exist":null}"#, true),
    (r#"{"exist":null}"#, r#"{"exist":false}"#, false),
    (r#"{"exist":null}"#, r#"{"exist":{"_$eq":null}}"#, true),
    (r#"{"exist":null}"#, r#"{"exist":{"_$neq":null}}"#, false),
    (r#""created""#, r#""created""#, true),
    (r#"1"#, r#"2"#, false),
    (r#"10"#, r#"{"_$gte":5}"#, true),
    (r#"{"test":true}"#, r#"true"#, false),
    (r#"{"test":"some-text"}"#, r#"{"test":{"_$startsWith":"some"}}"#, true),
    (r#"{"test":"some-text"}"#, r#"{"test":{"_$endsWith":"some"}}"#, false),
    (r#"{"test":"some-text"}"#, r#"{"test":{"_$endsWith":"text"}}"#, true),
    (r#"{"test":"some-text"}"#, r#"{"test":{"something":"text"}}"#, false),
    (r#"{"test":{"more":true}}"#, r#"{"test":{"_$startsWith":"text"}}"#, false),
    (
        r#"{"test":"some-text","id":123}"#,
        r#"{"test":{"_$in":"text"},"id":{"_$in":[123,456]}}"#,
        true,
    ),
    (r#"{"id":123}"#, r#"{"id":{"_$in":[123,456]}}"#, true),
    (r#"{"id":123}"#, r#"{"id":{"_$nin":[123,456]}}"#, false),
    (r#"{"test":"some-text"}"#, r#"{"test":{"_$in":"text"}}"#, true),
    (r#"{"test":"some-text"}"#, r#"{"test":{"_$nin":"some"}}"#, false),
    (r#"{"tags":["test","something"]}"#, r#"{"tags":{"_$nin":"test"}}"#, false),
    (r#"{"test":true,"test2":true}"#, r#"{"test2":{"_$ref":"test"}}"#, true),
    (r#"{"test":true,"test2":false}"#, r#"{"test2":{"_$ref":"test"}}"#, false),
    (r#"{"test":1,"test2":2}"#, r#"{"test2":{"_$gt":{"_$ref":"test"}}}"#, true),
    (r#"{"types":["something","else"],"test2":"else"}"#, r#"{"types":{"_$ref":"test2"}}"#, true),
    (r#"{"types":["something","else"],"test2":"else"}"#, r#"{"test2":{"_$ref":"types[1]"}}"#, true),
    (
        r#"{"current":{"something":true},"another":{"thing":true}}"#,
        r#"{"another":{"thing":{"_$ref":"current.something"}}}"#,
        true,
    ),
    (
        r#"{"current":{"something":true},"another":{"thing":true}}"#,
        r#"{"another":{"thing":{"_$ref":{"bad":"ref"}}}}"#,
        false,
    ),
    (
        r#"{"test":[{"a":2,"b":1},{"a":2,"b":2}]}"#,
        r#"{"test":{"a":{"_$eq":{"_$ref":"test[_$index].b"}}}}"#,
        true,
    ),
    (
        r#"{"test":[{"a":2,"b":1},{"a":2,"b":2}]}"#,
        r#"{"_$or":[{"test":{"a":{"_$eq":{"_$ref":"test[_$index].b"}}}}]}"#,
        true,
    ),
    (
        r#"{"test":[{"a":[{"b":3,"c":3}]},{"a":[{"b":2,"c":3}]}]}"#,
        r#"{"test":{"a":{"b":{"_$ref":"test[_$index].a[_$index].c"}}}}"#,
        true,
    ),
    (
        r#"{"test":[{"a":[{"b":3,"c":4}]},{"a":[{"b":2,"c":3}]}]}"#,
        r#"{"test":{"a":{"b":{"_$ref":"test[_$index].a[_$index].c"}}}}"#,
        false,
    ),
    (r#"[{"a":2,"b":1},{"a":2,"b":2}]"#, r#"{"a":{"_$eq":{"_$ref":"[_$index].b"}}}"#, true),
    (r#"{"test":1}"#, r#"{"test":{"_$gt":[1,2,3]}}"#, false),
    (r#"{"test":true}"#, r#"{"_$or":[{"test":true}]}"#, true),
    (r#"{"test":true}"#, r#"{"_$or":[{"test":false}]}"#, false),
    (
        r#"{"test":{"something":"else"}}"#,
        r#"{"test":{"_$or":[{"something":true},{"something":{"_$in":"else"}}]}}"#,
        true,
    ),
    (
        r#"{"test":{"something":"else"}}"#,
        r#"{"test":{"_$or":[{"something":true},{"something":{"_$in":"no"}}]}}"#,
        false,
    ),
    (r#"1"#, r#"{"_$or":[1,2]}"#, true),
    (r#"1"#, r#"{"_$or":[2,3]}"#, false),
    (r#"{"test":true}"#, r#"{"_$and":[{"test":true}]}"#, true),
    (r#"{"test":true}"#, r#"{"_$or":[{"test":false}]}"#, false),
    (
        r#"{"test":{"something":"else"}}"#,
        r#"{"test":{"_$and":[{"something":{"_$neq":null}},{"something":{"_$in":"else"}}]}}"#,
        true,
    ),
    (
        r#"{"test":{"something":null}}"#,
        r#"{"test":{"_$and":[{"something":{"_$neq":null}},{"something":{"_$in":"else"}}]}}"#,
        false,
    ),
    (r#"1"#, r#"{"_$and":[1,2]}"#, false),
    (
        r#"{"current":{"a":"a"},"previous":{"a":"test"}}"#,
        r#"{"current":{"_$and":[{"a":{"_$neq":null}},{"a":{"_$neq":{"_$ref":"previous.a"}}}]}}"#,
        true,
    ),
    (r#"{"test":"else"}"#, r#"{"test":{"_$exist":true}}"#, true),
    (r#"{"test":"else"}"#, r#"{"test":{"_$exist":false}}"#, false),
    (r#"{"test1":"else"}"#, r#"{"test":{"_$exist":true}}"#, false),
    (r#"{"test1":"else"}"#, r#"{"test":{"_$exist":false}}"#, true),
    (r#""/test""#, r#""/test""#, true),
    (r#""/test""#, r#""/test2""#, false),
    (r#"1"#, r#"1"#, true),
    (r#"1"#, r#"2"#, false),
    (r#"1"#, r#"{}"#, false),
    (
        r#"{"test":{"test1":"else"}}"#,
        r#"{"test":{"test1":{"_$exist":true,"_$or":["else","not"]}}}"#,
        true,
    ),
    (
        r#"{"test":{"test1":"else1"}}"#,
        r#"{"test":{"test1":{"_$exist":true,"_$or":["else","not"]}}}"#,
        false,
    ),
    (r#"{"test":{"test1":"else"}}"#, r#"{"test":{"test1":{"_$exist":true,"_$in":"el"}}}"#, true),
    (r#"{"test":{"test1":"else"}}"#, r#"{"test":{"test1":{"_$exist":true,"_$in":"no"}}}"#, false),
    (
        r#"{"test":{"test1":"else","test2":"not"}}"#,
        r#"{"test":{"test1":{"_$exist":true,"_$or":["else","not"]},"_$and":[{"test1":"else"},{"test2":"not"}]}}"#,
        true,
    ),
    (
        r#"{"test":{"test1":"else","test2":"not"}}"#,
        r#"{"test":{"test1":{"_$exist":true,"_$or":["else1","not1"]},"_$and":[{"test1":"else1"},{"test2":"not1"}]}}"#,
        false,
    ),
    (
        r#"{"test":{"test1":{"test2":"else"}}}"#,
        r#"{"test":{"test1":{"test2":{"_$exist":true}}}}"#,
        true,
    ),
    (
        r#"{"test":{"test1":{"test2":"else"}}}"#,
        r#"{"test":{"test1":{"test2":{"_$exist":false}}}}"#,
        false,
    ),
    (
        r#"{"test":{"test1":{"test3":"else"}}}"#,
        r#"{"test":{"test1":{"test2":{"_$exist":false}}}}"#,
        true,
    ),
    (
        r#"{"test":{"test1":{"test3":"else"}}}"#,
        r#"{"test":{"test1":{"test2":{"_$exist":true}}}}"#,
        false,
    ),
    (
        r#"{"test":{"test1":"else"}}"#,
        r#"{"_$or":[{"test":{"test1":{"_$exist":true}}},{"test":{"test1":"else1"}}]}"#,
        true,
    ),
    (
        r#"{"test":{"test1":"else"}}"#,
        r#"{"_$or":[{"test":{"test1":{"_$exist":false}}},{"test":{"test1":"else"}}]}"#,
        true,
    ),
    (
        r#"{"test":{"test2":"else"}}"#,
        r#"{"_$or":[{"test":{"test1":{"_$exist":true}}},{"test":{"test2":"else"}}]}"#,
        true,
    ),
    (
        r#"{"test":{"test2":"else"}}"#,
        r#"{"_$or":[{"test":{"test1":{"_$exist":true}}},{"test":{"test2":"else1"}}]}"#,
        false,
    ),
    (
        r#"{"test":{"test1":"else","test2":"not"}}"#,
        r#"{"_$or":[{"test":{"test1":{"_$exist":true}}},{"test":{"test2":"else1"}}]}"#,
        true,
    ),
    (
        r#"{"test":{"test1":"else","test2":"not"}}"#,
        r#"{"_$and":[{"test":{"test1":{"_$exist":true}}},{"test":{"test2":"not"}}]}"#,
        true,
    ),
    (
        r#"{"test":{"test1":"else","test2":"not"}}"#,
        r#"{"_$and":[{"test":{"test1":{"_$exist":true}}},{"test":{"test2":"not1"}}]}"#,
        false,
    ),
    (
        r#"{"test":{"test1":"else","test2":"not"}}"#,
        r#"{"_$and":[{"test":{"test1":{"_$exist":true}}},{"test":{"test1":"else"}}]}"#,
        true,
    ),
    (
        r#"{"test":{"test1":"else","test2":"not"}}"#,
        r#"{"_$and":[{"test":{"test1":{"_$exist":true}}},{"test":{"test1":"else1"}}]}"#,
        false,
    ),
    (
        r#"{"test":{"test1":"else","test2":"not"}}"#,
        r#"{"_$and":[{"test":{"test1":{"_$exist":true,"_$eq":"else"}}}]}"#,
        true,
    ),
    (
        r#"{"test":{"test2":"not"}}"#,
        r#"{"_$and":[{"test":{"test1":{"_$exist":true,"_$eq":"not"}}}]}"#,
        false,
    ),
    (
        r#"{"test":{"test1":"else","test2":"not"}}"#,
        r#"{"_$and":[{"test":{"test1":{"_$exist":true}}},{"test":{"test2":{"_$exist":true}}}]}"#,
        true,
    ),
    (
        r#"{"test":{"test1":"else","test2":"not"}}"#,
        r#"{"_$and":[{"test":{"test1":{"_$exist":true}}},{"test":{"test2":{"_$exist":false}}}]}"#,
        false,
    ),
    (
        r#"{"test":{"test1":"else"}}"#,
        r#"{"_$and":[{"test":{"test1":{"_$exist":true}}},{"test":{"test2":{"_$exist":false}}}]}"#,
        true,
    ),
    (
        r#"{"test":{"test1":"else"}}"#,
        r#"{"_$or":[{"test":{"test1":{"_$exist":true}}},{"test":{"test2":{"_$exist":false}}}]}"#,
        true,
    ),
    (
        r#"{"test":{"test3":"else"}}"#,
        r#"{"_$or":[{"test":{"test1":{"_$exist":true}}},{"test":{"test2":{"_$exist":false}}}]}"#,
        true,
    ),
];

const NOT_WITH_SIBLINGS: &[(&str, &str, bool)] = &[
    (
        r#"{"test":{"test1":"else","test2":"not"}}"#,
        r#"{"_$not":{"test":{"test1":"else2"}},"_$and":[{"test":{"test1":"else"}},{"test":{"test2":"not"}}]}"#,
        true,
    ),
    (
        r#"{"test":{"test1":"else","test2":"not"}}"#,
        r#"{"_$not":{"test":{"test1":"else"}},"_$and":[{"test":{"test1":"else"}},{"test":{"test2":"not"}}]}"#,
        false,
    ),
    (
        r#"{"test":{"test1":"else","test2":"not"}}"#,
        r#"{"_$not":{"test":{"test1":{"_$exist":true}}},"_$and":[{"test":{"test1":"else"}},{"test":{"test2":"not"}}]}"#,
        false,
    ),
    (
        r#"{"test":{"test1":"else","test2":"not"}}"#,
        r#"{"_$not":{"test":{"test1":{"_$exist":false}}},"_$and":[{"test":{"test1":"else"}},{"test":{"test2":"not"}}]}"#,
        true,
    ),
    (
        r#"{"test":{"test1":"else","test2":"not"}}"#,
        r#"{"_$not":{"test":{"test1":{"_$exist":false}}},"_$and":[{"test":{"test3":{"_$exist":false}}},{"test":{"test2":"not"}}]}"#,
        true,
    ),
    (
        r#"{"test":{"test1":"else","test2":"not"}}"#,
        r#"{"_$not":{"test":{"test1":{"_$exist":false}}},"_$and":[{"test":{"test3":{"_$exist":true}}},{"test":{"test2":"not"}}]}"#,
        false,
    ),
    (
        r#"{"test":{"test1":"else","test2":"not"}}"#,
        r#"{"_$not":{"test":{"test1":"else2"}},"_$or":[{"test":{"test3":{"_$exist":true}}},{"test":{"test2":"not"}}]}"#,
        true,
    ),
    (
        r#"{"test":{"test1":"else","test2":"not"}}"#,
        r#"{"_$not":{"test":{"test1":"else"}},"_$or":[{"test":{"test3":{"_$exist":true}}},{"test":{"test2":"not"}}]}"#,
        false,
    ),
    (
        r#"{"test":{"test1":"else","test2":"not"}}"#,
        r#"{"_$not":{"test":{"test1":"else"}},"_$or":[{"test":{"test3":{"_$exist":false}}},{"test":{"test2":"not"}}]}"#,
        false,
    ),
    (
        r#"{"test":{"test1":"else","test2":"not"}}"#,
        r#"{"_$not":{"test":{"test1":"else"}},"_$or":[{"test":{"test3":{"_$exist":false}}},{"test":{"test2":"not2"}}]}"#,
        false,
    ),
    (
        r#"{"test":{"test1":"else","test2":"not"}}"#,
        r#"{"_$not":{"test":{"test1":"else2"}},"_$or":[{"test":{"test3":{"_$exist":true}}},{"test":{"test2":"not2"}}]}"#,
        false,
    ),
    (
        r#"{"test":{"test1":"else","test2":"not"}}"#,
        r#"{"_$not":{"test":{"test1":"else2"}},"_$or":[{"test":{"test3":{"_$exist":false}}},{"test":{"test2":"not"}}]}"#,
        true,
    ),
];

fn parse(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

#[test]
fn fixture_table() {
    for (input, schema, expected) in CASES {
        let (input, schema) = (parse(input), parse(schema));
        assert_eq!(
            matches(&input, &schema),
            *expected,
            "input {input} against {schema}"
        );
    }
}

#[test]
fn fixture_table_negated() {
    for (input, schema, expected) in CASES {
        let (input, schema) = (parse(input), parse(schema));
        let negated = json!({ "_$not": schema });
        assert_eq!(
            matches(&input, &negated),
            !*expected,
            "input {input} against {negated}"
        );
    }
}

#[test]
fn not_with_sibling_conditions() {
    for (input, schema, expected) in NOT_WITH_SIBLINGS {
        let (input, schema) = (parse(input), parse(schema));
        assert_eq!(
            matches(&input, &schema),
            *expected,
            "input {input} against {schema}"
        );
    }
}

#[test]
fn parsed_schema_agrees_with_raw_schema() {
    for (input, schema, expected) in CASES {
        let (input, raw) = (parse(input), parse(schema));
        let schema = Schema::parse(&raw);
        assert_eq!(schema.matches(&input), *expected, "input {input} against {raw}");
        // Matching twice with the same parsed schema gives the same answer.
        assert_eq!(schema.matches(&input), *expected, "input {input} against {raw}");
    }
}

#[test]
fn positional_references_follow_each_element() {
    let input = json!({"test": [{"a": 2, "b": 1}, {"a": 2, "b": 2}]});
    let schema = json!({"test": {"a": {"_$eq": {"_$ref": "test[_$index].b"}}}});
    assert!(matches(&input, &schema));

    let input = json!({"test": [{"a": 2, "b": 1}, {"a": 3, "b": 2}]});
    assert!(!matches(&input, &schema));
}

#[test]
fn references_may_use_absolute_and_descendant_paths() {
    let input = json!({"limits": {"max": 10}, "value": 7});
    assert!(matches(&input, &json!({"value": {"_$lt": {"_$ref": "$.limits.max"}}})));
    assert!(matches(&input, &json!({"value": {"_$lt": {"_$ref": "$..max"}}})));
    assert!(!matches(&input, &json!({"value": {"_$gt": {"_$ref": "limits['max']"}}})));
}

#[test]
fn unresolved_references_compare_as_null() {
    let input = json!({"a": null, "b": 1});
    assert!(matches(&input, &json!({"a": {"_$ref": "missing"}})));
    assert!(!matches(&input, &json!({"b": {"_$ref": "missing"}})));
}

#[test]
fn unparsable_reference_paths_fail_the_condition() {
    let input = json!({"a": 1});
    let schema = json!({"a": {"_$eq": {"_$ref": "a[[["}}});
    assert!(!matches(&input, &schema));
    assert!(matches(&input, &json!({"_$not": schema})));
}

#[test]
fn oversized_slice_steps_do_not_panic() {
    let input = json!({"a": [1, 2, 3], "b": 2});
    assert!(matches(&input, &json!({"b": {"_$eq": {"_$ref": "a[1::9223372036854775807]"}}})));
    assert!(!matches(&input, &json!({"b": {"_$eq": {"_$ref": "a[0::9223372036854775807]"}}})));
    assert!(matches(&input, &json!({"b": {"_$eq": {"_$ref": "a[1::-9223372036854775808]"}}})));
}

#[test]
fn whole_number_floats_equal_integers_in_structures() {
    let input: Value = serde_json::from_str(r#"{"a": [1.0], "b": {"n": 2.0}}"#).unwrap();
    assert!(matches(&input, &json!({"a": {"_$eq": [1]}, "b": {"_$eq": {"n": 2}}})));
}

#[test]
fn schema_deserializes_from_rule_files() {
    let schema: Schema = serde_json::from_str(r#"{"tags": ["a", "b"], "n": {"_$gte": 2}}"#).unwrap();
    assert!(schema.matches(&json!({"tags": ["b", "c", "a"], "n": 2})));
    assert!(!schema.matches(&json!({"tags": ["b", "c"], "n": 2})));
}

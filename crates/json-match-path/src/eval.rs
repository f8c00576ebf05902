//! Path evaluator.

use crate::types::*;
use serde_json::Value;

/// Evaluates parsed paths against a document.
pub struct JsonPathEval;

impl JsonPathEval {
    /// Returns every value addressed by `path`, in document order.
    pub fn eval<'a>(path: &JsonPath, doc: &'a Value) -> Vec<&'a Value> {
        let mut results = vec![doc];

        for segment in &path.segments {
            let mut next = Vec::new();
            for value in results {
                if segment.recursive {
                    Self::eval_descendants(value, &segment.selectors, &mut next);
                } else {
                    for selector in &segment.selectors {
                        Self::eval_selector(value, selector, &mut next);
                    }
                }
            }
            if next.is_empty() {
                return next;
            }
            results = next;
        }

        results
    }

    fn eval_descendants<'a>(
        value: &'a Value,
        selectors: &[Selector],
        results: &mut Vec<&'a Value>,
    ) {
        for selector in selectors {
            Self::eval_selector(value, selector, results);
        }
        match value {
            Value::Object(map) => {
                for child in map.values() {
                    Self::eval_descendants(child, selectors, results);
                }
            }
            Value::Array(arr) => {
                for child in arr {
                    Self::eval_descendants(child, selectors, results);
                }
            }
            _ => {}
        }
    }

    fn eval_selector<'a>(value: &'a Value, selector: &Selector, results: &mut Vec<&'a Value>) {
        match selector {
            Selector::Name(name) => {
                if let Some(child) = value.as_object().and_then(|map| map.get(name)) {
                    results.push(child);
                }
            }
            Selector::Index(index) => {
                if let Value::Array(arr) = value {
                    let idx = if *index < 0 {
                        arr.len() as isize + index
                    } else {
                        *index
                    };
                    if idx >= 0 {
                        if let Some(child) = arr.get(idx as usize) {
                            results.push(child);
                        }
                    }
                }
            }
            Selector::Wildcard => match value {
                Value::Object(map) => results.extend(map.values()),
                Value::Array(arr) => results.extend(arr.iter()),
                _ => {}
            },
            Selector::Slice { start, end, step } => {
                if let Value::Array(arr) = value {
                    Self::eval_slice(arr, *start, *end, step.unwrap_or(1), results);
                }
            }
        }
    }

    fn eval_slice<'a>(
        arr: &'a [Value],
        start: Option<isize>,
        end: Option<isize>,
        step: isize,
        results: &mut Vec<&'a Value>,
    ) {
        let len = arr.len() as isize;
        let normalize = |i: isize| if i < 0 { len + i } else { i };

        if step > 0 {
            let lower = start.map(normalize).unwrap_or(0).clamp(0, len);
            let upper = end.map(normalize).unwrap_or(len).clamp(0, len);
            let mut i = lower;
            while i < upper {
                results.push(&arr[i as usize]);
                i = match i.checked_add(step) {
                    Some(next) => next,
                    None => break,
                };
            }
        } else if step < 0 {
            let upper = start.map(normalize).unwrap_or(len - 1).clamp(-1, len - 1);
            let lower = end.map(normalize).unwrap_or(-1).clamp(-1, len - 1);
            let mut i = upper;
            while i > lower {
                results.push(&arr[i as usize]);
                i = match i.checked_add(step) {
                    Some(next) => next,
                    None => break,
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JsonPathParser;
    use serde_json::json;

    fn eval<'a>(path: &str, doc: &'a Value) -> Vec<&'a Value> {
        JsonPathEval::eval(&JsonPathParser::parse(path).unwrap(), doc)
    }

    #[test]
    fn root_returns_document() {
        let doc = json!({"a": 1});
        assert_eq!(eval("$", &doc), vec![&doc]);
    }

    #[test]
    fn negative_index_counts_from_end() {
        let doc = json!([1, 2, 3]);
        assert_eq!(eval("$[-1]", &doc), vec![&json!(3)]);
        assert!(eval("$[-4]", &doc).is_empty());
    }

    #[test]
    fn slices_forward_and_backward() {
        let doc = json!(["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(eval("$[1:3]", &doc), vec![&json!("b"), &json!("c")]);
        assert_eq!(eval("$[5:1:-2]", &doc), vec![&json!("f"), &json!("d")]);
        assert_eq!(eval("$[::-3]", &doc), vec![&json!("g"), &json!("d"), &json!("a")]);
        assert!(eval("$[1:3:0]", &doc).is_empty());
    }

    #[test]
    fn huge_steps_stop_after_first_element() {
        let doc = json!([1, 2, 3]);
        assert_eq!(eval("$[1::9223372036854775807]", &doc), vec![&json!(2)]);
        assert_eq!(eval("$[2::-9223372036854775808]", &doc), vec![&json!(3)]);
    }

    #[test]
    fn descendant_index_visits_nested_arrays() {
        let doc = json!({"items": [["a", "b"], ["c", "d"]]});
        assert_eq!(
            eval("$..[0]", &doc),
            vec![&json!(["a", "b"]), &json!("a"), &json!("c")]
        );
    }

    #[test]
    fn name_on_non_object_yields_nothing() {
        let doc = json!({"a": [1, 2]});
        assert!(eval("$.a.b", &doc).is_empty());
        assert!(eval("$.a.b.c", &doc).is_empty());
    }
}

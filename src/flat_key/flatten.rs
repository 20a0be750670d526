use {
    super::{KeyPath, Segment, boxed_iter},
    crate::Record,
    serde_json::Value,
    std::{borrow::Cow, iter::once},
    tap::Pipe,
};

pub fn flattened_iter<'prefix>(prefix: KeyPath<'prefix>, value: Value) -> impl Iterator<Item = (KeyPath<'static>, Value)> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .flat_map({
                let prefix = prefix.clone();
                move |(idx, item)| flattened_iter(prefix.clone().join(Segment::Idx(idx)), item)
            })
            .pipe(boxed_iter),
        Value::Object(map) => map
            .into_iter()
            .flat_map({
                let prefix = prefix.clone();
                move |(key, value)| flattened_iter(prefix.clone().join(Segment::Field(Cow::Owned(key))), value)
            })
            .pipe(boxed_iter),
        scalar => once((prefix.to_owned(), scalar)).pipe(boxed_iter),
    }
    .pipe(boxed_iter)
}

pub fn flattened(value: serde_json::Value) -> Record {
    flattened_iter(Default::default(), value)
        .map(|(path, value)| (path.to_string(), value))
        .collect()
}

/// Collapses all nesting inside a single record into dotted keys mapping
/// to scalars. Array indices stay literal path segments (`items.0.name`).
pub fn flattened_record(record: Record) -> Record {
    flattened(Value::Object(record))
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    #[test]
    fn test_flatten_simple() {
        let input = json!({
            "name": "John",
            "age": 30
        });

        let result = flattened(input);
        assert_eq!(result.get("name").unwrap(), &json!("John"));
        assert_eq!(result.get("age").unwrap(), &json!(30));
    }

    #[test]
    fn test_flatten_nested_and_arrays() {
        let input = json!({
            "a": { "b": 1 },
            "c": [10, 20]
        });

        let result = flattened(input);
        assert_eq!(result.len(), 3);
        assert_eq!(result.get("a.b").unwrap(), &json!(1));
        assert_eq!(result.get("c.0").unwrap(), &json!(10));
        assert_eq!(result.get("c.1").unwrap(), &json!(20));
    }

    #[test]
    fn test_flatten_array_of_objects() {
        let input = json!({
            "items": [
                { "name": "bolt", "qty": 4 },
                { "name": "nut" }
            ]
        });

        let result = flattened(input);
        assert_eq!(result.get("items.0.name").unwrap(), &json!("bolt"));
        assert_eq!(result.get("items.0.qty").unwrap(), &json!(4));
        assert_eq!(result.get("items.1.name").unwrap(), &json!("nut"));
    }

    #[test]
    fn test_flatten_keeps_nulls_as_leaves() {
        let input = json!({ "user": { "email": null } });

        let result = flattened(input);
        assert_eq!(result.get("user.email").unwrap(), &json!(null));
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let input = json!({
            "user": {
                "name": "John",
                "address": { "city": "NYC", "zip": "10001" }
            },
            "tags": ["a", "b"],
            "active": true
        });

        let once = flattened(input);
        let twice = flattened_record(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_flat_key_count_bounded_by_leaf_count() {
        // 5 leaves in the tree below
        let input = json!({
            "a": { "b": 1, "c": [2, 3] },
            "d": "x",
            "e": null
        });

        assert!(flattened(input).len() <= 5);
    }
}

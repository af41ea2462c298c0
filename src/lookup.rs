//! Nested element lookup in JSON documents.

use serde_json::Value;
use tracing::error;

/// Walk `data` along `keys`. Object members are matched by name, array
/// elements by decimal index.
pub fn find_elem<'a, K: AsRef<str>>(data: &'a Value, keys: &[K]) -> Option<&'a Value> {
    keys.iter().try_fold(data, |current, key| {
        let key = key.as_ref();
        match current {
            Value::Object(map) => map.get(key),
            Value::Array(items) => key.parse::<usize>().ok().and_then(|idx| items.get(idx)),
            _ => None,
        }
    })
}

/// Like [`find_elem`], but logs the key path when nothing is found.
pub fn get_elem<'a, K: AsRef<str>>(data: &'a Value, keys: &[K]) -> Option<&'a Value> {
    let found = find_elem(data, keys);
    if found.is_none() {
        let path: Vec<&str> = keys.iter().map(|k| k.as_ref()).collect();
        error!("Could not find elements [{}]", path.join(", "));
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "platform": {
                "name": "dataproc",
                "clusters": [
                    {"id": "cpu-0", "workers": 4},
                    {"id": "gpu-0", "workers": 2}
                ]
            },
            "enabled": true
        })
    }

    #[test]
    fn test_find_elem_nested() {
        let data = sample();
        assert_eq!(
            find_elem(&data, &["platform", "name"]),
            Some(&json!("dataproc"))
        );
        assert_eq!(
            find_elem(&data, &["platform", "clusters", "1", "workers"]),
            Some(&json!(2))
        );
        assert_eq!(find_elem(&data, &["enabled"]), Some(&json!(true)));
    }

    #[test]
    fn test_find_elem_empty_keys_returns_root() {
        let data = sample();
        let keys: [&str; 0] = [];
        assert_eq!(find_elem(&data, &keys), Some(&data));
    }

    #[test]
    fn test_find_elem_missing() {
        let data = sample();
        assert!(find_elem(&data, &["platform", "region"]).is_none());
        assert!(find_elem(&data, &["platform", "clusters", "7"]).is_none());
        assert!(find_elem(&data, &["platform", "clusters", "first"]).is_none());
        assert!(find_elem(&data, &["enabled", "value"]).is_none());
    }

    #[test]
    fn test_get_elem_with_owned_keys() {
        let data = sample();
        let keys = vec!["platform".to_string(), "clusters".to_string(), "0".to_string()];
        assert_eq!(
            get_elem(&data, &keys).and_then(|v| v.get("id")),
            Some(&json!("cpu-0"))
        );
        assert!(get_elem(&data, &["missing"]).is_none());
    }
}

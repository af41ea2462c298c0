use anyhow::{Context, Result};
use serde_json::Value;

use crate::lookup::get_elem;
use crate::paths::stringify_path;

pub fn load_json(file: &str) -> Result<Value> {
    let path = stringify_path(file).with_context(|| format!("Invalid file path: {}", file))?;
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read JSON file: {}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON file: {}", path))
}

pub fn run_lookup(file: &str, keys: &[String]) -> Result<()> {
    let data = load_json(file)?;
    let Some(elem) = get_elem(&data, keys) else {
        anyhow::bail!("No element at [{}] in {}", keys.join(", "), file);
    };

    match elem {
        Value::String(s) => println!("{}", s),
        other => println!("{}", serde_json::to_string_pretty(other)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_json() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("cluster.json");
        std::fs::write(&file, r#"{"cluster": {"workers": [{"cores": 16}]}}"#).unwrap();

        let data = load_json(&file.to_string_lossy()).unwrap();
        assert_eq!(data["cluster"]["workers"][0]["cores"], 16);
        run_lookup(
            &file.to_string_lossy(),
            &["cluster".to_string(), "workers".to_string()],
        )
        .unwrap();
    }

    #[test]
    fn test_lookup_errors() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("broken.json");
        std::fs::write(&file, "{not json").unwrap();
        assert!(load_json(&file.to_string_lossy()).is_err());
        assert!(load_json(&tmp.path().join("absent.json").to_string_lossy()).is_err());

        std::fs::write(&file, r#"{"a": 1}"#).unwrap();
        assert!(run_lookup(&file.to_string_lossy(), &["b".to_string()]).is_err());
    }
}

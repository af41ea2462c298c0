//! Identifier conversions between snake_case and camelCase/PascalCase.
//!
//! Used when mapping external field names onto internal ones.

/// Uppercase the first character, leave the rest unchanged.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `max_retry_count` -> `maxRetryCount`.
///
/// The first segment is kept as written. An empty segment after the first one
/// (from consecutive underscores) is emitted as a literal `_`, so `a__b`
/// becomes `a_B`. Existing serialized field names depend on this.
pub fn to_camel_case(word: &str) -> String {
    let mut segments = word.split('_');
    let mut converted = segments.next().unwrap_or_default().to_string();
    for segment in segments {
        if segment.is_empty() {
            converted.push('_');
        } else {
            converted.push_str(&capitalize(segment));
        }
    }
    converted
}

/// `max_retry_count` -> `MaxRetryCount`. Empty segments are dropped.
pub fn to_camel_capital_case(word: &str) -> String {
    word.split('_').map(capitalize).collect()
}

/// `MaxRetryCount` -> `max_retry_count`, `maxRetryCount` -> `max_retry_count`.
pub fn to_snake_case(word: &str) -> String {
    let mut converted = String::with_capacity(word.len() + 4);
    for (idx, ch) in word.chars().enumerate() {
        if ch.is_uppercase() {
            if idx > 0 {
                converted.push('_');
            }
            converted.extend(ch.to_lowercase());
        } else {
            converted.push(ch);
        }
    }
    converted
}

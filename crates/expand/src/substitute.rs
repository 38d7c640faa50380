use crate::EnvMapping;

/// Replace every `${KEY}` occurrence whose key exists in the mapping.
///
/// Null values substitute as the empty string. A `${...}` with no closing
/// brace, an empty name, or a key the mapping does not declare is emitted
/// unchanged. Values are inserted literally, never rescanned.
pub(crate) fn substitute(input: &str, mapping: &EnvMapping) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' || chars.peek() != Some(&'{') {
            result.push(ch);
            continue;
        }
        chars.next(); // consume '{'

        let mut name = String::new();
        let mut found_close = false;
        for c in chars.by_ref() {
            if c == '}' {
                found_close = true;
                break;
            }
            name.push(c);
        }

        if found_close && mapping.contains_key(&name) {
            if let Some(value) = mapping.value(&name) {
                result.push_str(value);
            }
        } else {
            result.push_str("${");
            result.push_str(&name);
            if found_close {
                result.push('}');
            }
        }
    }

    result
}

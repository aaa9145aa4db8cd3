//! Parsing of list-valued cells.
//!
//! Upstream extracts write array cells either as JSON lists (`["a", "b"]`) or
//! as Python list literals (`['a', 'b']`, `[1.5, None]`). Both forms are read
//! here without ever failing: malformed input degrades to a best-effort split.

/// Tokens that mean "no value" in upstream extracts.
pub fn is_null_token(token: &str) -> bool {
    matches!(
        token.trim(),
        "" | "None" | "none" | "null" | "NULL" | "nan" | "NaN" | "NaT" | "<NA>"
    )
}

/// Whether the cell is shaped like a list literal.
pub fn looks_like_list(raw: &str) -> bool {
    let t = raw.trim();
    t.len() >= 2 && t.starts_with('[') && t.ends_with(']')
}

/// Parse a list-valued cell into its string items, dropping null tokens.
///
/// A cell that is not bracketed is a single item.
pub fn parse_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if is_null_token(trimmed) {
        return Vec::new();
    }
    if !looks_like_list(trimmed) {
        return vec![trimmed.to_string()];
    }

    if let Ok(values) = serde_json::from_str::<Vec<serde_json::Value>>(trimmed) {
        return values.into_iter().filter_map(json_item).collect();
    }

    match parse_python_list(&trimmed[1..trimmed.len() - 1]) {
        Some(items) => items,
        None => split_loose(&trimmed[1..trimmed.len() - 1], &[',']),
    }
}

/// Split on any of `delims`, stripping whitespace and stray quotes.
pub fn split_loose(raw: &str, delims: &[char]) -> Vec<String> {
    raw.split(|c| delims.contains(&c))
        .map(|item| item.trim().trim_matches(|c| c == '\'' || c == '"').trim())
        .filter(|item| !is_null_token(item))
        .map(str::to_string)
        .collect()
}

fn json_item(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if is_null_token(&s) => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// Tokenize the inside of a Python list literal. Returns `None` on an
/// unterminated quote so the caller can fall back to a loose split.
fn parse_python_list(inner: &str) -> Option<Vec<String>> {
    let mut items = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        while chars.peek().is_some_and(|c| c.is_whitespace() || *c == ',') {
            chars.next();
        }
        let Some(&first) = chars.peek() else {
            break;
        };

        if first == '\'' || first == '"' {
            chars.next();
            let mut item = String::new();
            let mut closed = false;
            while let Some(c) = chars.next() {
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        item.push(escaped);
                    }
                } else if c == first {
                    closed = true;
                    break;
                } else {
                    item.push(c);
                }
            }
            if !closed {
                return None;
            }
            if !is_null_token(&item) {
                items.push(item);
            }
        } else {
            let mut token = String::new();
            while let Some(&c) = chars.peek() {
                if c == ',' {
                    break;
                }
                token.push(c);
                chars.next();
            }
            let token = token.trim();
            if !is_null_token(token) {
                items.push(token.to_string());
            }
        }
    }

    Some(items)
}

//! JSON pointer (RFC 6901) tokenizing

/// Splits a JSON pointer into unescaped reference tokens.
///
/// # Examples
/// ```
/// use sst_init::patch::pointer::parse_pointer;
///
/// assert_eq!(parse_pointer("/compilerOptions/paths").unwrap(), vec!["compilerOptions", "paths"]);
/// assert_eq!(parse_pointer("/a~1b/c~0d").unwrap(), vec!["a/b", "c~d"]);
/// assert!(parse_pointer("").unwrap().is_empty());
/// ```
pub fn parse_pointer(pointer: &str) -> Result<Vec<String>, String> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    let Some(rest) = pointer.strip_prefix('/') else {
        return Err(format!("invalid JSON pointer '{pointer}': must start with '/'"));
    };
    Ok(rest.split('/').map(|token| token.replace("~1", "/").replace("~0", "~")).collect())
}

/// Parses an array index token. Leading zeros and signs are rejected.
pub fn parse_index(token: &str) -> Result<usize, String> {
    let valid = !token.is_empty()
        && token.chars().all(|c| c.is_ascii_digit())
        && (token == "0" || !token.starts_with('0'));
    if !valid {
        return Err(format!("invalid array index '{token}'"));
    }
    token.parse::<usize>().map_err(|e| format!("invalid array index '{token}': {e}"))
}

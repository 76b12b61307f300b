/// Byte that starts the query component
pub const QUERY_START: u8 = b'?';

/// Byte that separates a parameter name from its value
pub const PARAM_EQUALS: u8 = b'=';

/// Byte that separates two query tokens (and, like `?`, introduces one)
pub const PARAM_SEPARATOR: u8 = b'&';

/// Check if a byte can appear inside a token key or value.
/// Everything except `&` and `=` qualifies, including `?`, `#` and spaces.
pub fn is_token_byte(b: u8) -> bool {
    !matches!(b, PARAM_EQUALS | PARAM_SEPARATOR)
}

/// Length of the maximal run of token bytes at the start of `bytes`
pub fn token_run_len(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .position(|&b| !is_token_byte(b))
        .unwrap_or(bytes.len())
}

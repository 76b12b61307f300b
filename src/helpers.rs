use crate::character_sets::{PARAM_SEPARATOR, QUERY_START};

/// Position of the first `?`, which marks the end of the base path
/// Optimization: Uses SIMD-accelerated memchr for fast '?' search
pub fn find_query_start(input: &str) -> Option<usize> {
    memchr::memchr(QUERY_START, input.as_bytes())
}

/// Split input into (`base_path`, `query_with_leading_question_mark`)
/// The query half keeps its leading '?' since that byte introduces the first token
pub fn split_base_path(input: &str) -> (&str, Option<&str>) {
    find_query_start(input).map_or((input, None), |pos| (&input[..pos], Some(&input[pos..])))
}

/// Position of the next token introducer (`?` or `&`) at or after `from`
pub fn find_next_introducer(bytes: &[u8], from: usize) -> Option<usize> {
    let rest = bytes.get(from..)?;
    memchr::memchr2(QUERY_START, PARAM_SEPARATOR, rest).map(|pos| from + pos)
}

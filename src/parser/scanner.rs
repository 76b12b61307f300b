use crate::character_sets::{PARAM_EQUALS, token_run_len};
use crate::helpers::find_next_introducer;

/// Find-all scanner over a query string that still carries its leading `?`.
///
/// Yields every `key=value` token introduced by `?` or `&`, where key and
/// value are both non-empty runs of bytes other than `&` and `=`. Residue
/// that does not form a token is skipped, and scanning resumes at the next
/// introducer.
pub struct QueryScanner<'a> {
    query: &'a str,
    pos: usize,
}

impl<'a> QueryScanner<'a> {
    pub fn new(query: &'a str) -> Self {
        Self { query, pos: 0 }
    }

    /// Try to match a token whose introducer sits at `at`.
    /// Returns (key, value, `end_offset`), or on failure the offset to resume from.
    ///
    /// A failed non-empty key run is skipped whole: every `?` inside it ends
    /// its own key at the same byte and fails the same way.
    fn match_at(&self, at: usize) -> Result<(&'a str, &'a str, usize), usize> {
        let query = self.query;
        let bytes = query.as_bytes();

        let key_start = at + 1;
        let key_end = key_start + token_run_len(bytes.get(key_start..).unwrap_or_default());
        if key_end == key_start {
            return Err(key_start);
        }
        if bytes.get(key_end) != Some(&PARAM_EQUALS) {
            return Err(key_end);
        }

        let value_start = key_end + 1;
        let value_end = value_start + token_run_len(bytes.get(value_start..).unwrap_or_default());
        if value_end == value_start {
            return Err(key_end);
        }

        // All boundaries sit next to ASCII delimiters, so slicing is char-safe
        Ok((
            &query[key_start..key_end],
            &query[value_start..value_end],
            value_end,
        ))
    }
}

impl<'a> Iterator for QueryScanner<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.query.as_bytes();
        while let Some(at) = find_next_introducer(bytes, self.pos) {
            match self.match_at(at) {
                Ok((key, value, end)) => {
                    self.pos = end;
                    return Some((key, value));
                }
                Err(resume) => {
                    tracing::trace!(offset = at, resume, "skipping query residue");
                    self.pos = resume;
                }
            }
        }
        self.pos = bytes.len();
        None
    }
}

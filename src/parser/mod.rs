mod scanner;

pub use scanner::QueryScanner;

use crate::compat::{BTreeMap, ToString};
use crate::error::{ParseError, Result};
use crate::helpers::split_base_path;
use crate::modifiable_url::ModifiableUrl;

/// Parse a URL string into its base path and committed query parameters.
///
/// Empty input yields `Ok(None)`. Input without `?` is all base path.
/// Otherwise every `key=value` token after the first `?` is recorded verbatim,
/// later duplicates overwriting earlier ones.
///
/// # Errors
///
/// Returns [`ParseError::MalformedInput`] if a `?` is present but no token
/// can be extracted from what follows it.
pub fn parse_modifiable_url(input: &str) -> Result<Option<ModifiableUrl>> {
    if input.is_empty() {
        return Ok(None);
    }

    let (base_path, query) = split_base_path(input);
    let Some(query) = query else {
        tracing::debug!(has_query = false, "parsed URL");
        return Ok(Some(ModifiableUrl::from_parts(base_path, BTreeMap::new())));
    };

    let mut params = BTreeMap::new();
    for (key, value) in QueryScanner::new(query) {
        params.insert(key.to_string(), value.to_string());
    }

    if params.is_empty() {
        return Err(ParseError::MalformedInput);
    }

    tracing::debug!(has_query = true, tokens = params.len(), "parsed URL");
    Ok(Some(ModifiableUrl::from_parts(base_path, params)))
}

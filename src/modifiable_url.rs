use crate::compat::{BTreeMap, Cow, String, ToString, Vec};
use crate::error::{EncodingFailure, Result};
use crate::percent_encode::form_encode;
use core::fmt::{self, Write};

/// A URL split into an immutable base path and a mutable set of query parameters.
///
/// Parameters found while parsing are *committed*: they are kept exactly as
/// they appeared and are never re-encoded. Parameters supplied through
/// [`add_param`](Self::add_param) or
/// [`replace_first_matching_value`](Self::replace_first_matching_value) are
/// *pending*: they hold raw values and are form-encoded by the next
/// [`serialize`](Self::serialize), which also commits them.
///
/// A parameter name lives in at most one of the two maps. Output order
/// follows map iteration and is not part of the contract.
#[derive(Debug, Clone)]
pub struct ModifiableUrl {
    base_path: String,
    committed: BTreeMap<String, String>,
    pending: BTreeMap<String, String>,
    /// Last serialized output, trusted only while `pending` is empty
    cached: Option<String>,
}

impl ModifiableUrl {
    pub(crate) fn from_parts(base_path: &str, committed: BTreeMap<String, String>) -> Self {
        Self {
            base_path: base_path.to_string(),
            committed,
            pending: BTreeMap::new(),
            cached: None,
        }
    }

    /// Parse a URL string.
    ///
    /// Returns `Ok(None)` for empty input.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedInput`](crate::ParseError::MalformedInput)
    /// if the input contains `?` but no `key=value` token follows it.
    pub fn parse(input: &str) -> Result<Option<Self>> {
        crate::parser::parse_modifiable_url(input)
    }

    /// Parse a URL string, collapsing every failure into `None`.
    pub fn try_parse(input: &str) -> Option<Self> {
        match Self::parse(input) {
            Ok(url) => url,
            Err(err) => {
                tracing::debug!(%err, "discarding unparseable URL");
                None
            }
        }
    }

    /// Everything before the first `?` (or the whole input if it had none)
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Check whether un-encoded parameters are waiting for the next serialization
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of distinct parameter names
    pub fn len(&self) -> usize {
        self.committed.len() + self.pending.len()
    }

    /// Check whether there are no parameters at all
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.pending.is_empty()
    }

    /// Set `key` to the raw `value`, replacing whatever was stored before.
    /// The value is form-encoded on the next serialization.
    pub fn add_param(&mut self, key: &str, value: &str) {
        self.committed.remove(key);
        self.pending.insert(key.to_string(), value.to_string());
        self.cached = None;
    }

    /// Replace a parameter by its current value rather than by its name.
    ///
    /// A committed entry whose value equals `token` becomes pending with
    /// `replacement` as its raw value. Independently, a pending entry whose
    /// value equals `token` is overwritten with `replacement`. At most one
    /// entry of each map is touched; when several share the value, which one
    /// is picked is unspecified.
    ///
    /// Returns `true` if any entry was updated.
    pub fn replace_first_matching_value(&mut self, token: &str, replacement: &str) -> bool {
        let mut replaced = false;

        if let Some(key) = find_key_by_value(&self.committed, token) {
            self.committed.remove(&key);
            self.pending.insert(key, replacement.to_string());
            replaced = true;
        }

        if let Some(key) = find_key_by_value(&self.pending, token) {
            self.pending.insert(key, replacement.to_string());
            replaced = true;
        }

        if replaced {
            self.cached = None;
        }
        replaced
    }

    /// Merged snapshot of all parameters.
    /// Pending values are returned raw, not in the encoded form `serialize` emits.
    pub fn params(&self) -> BTreeMap<String, String> {
        let mut params = self.committed.clone();
        params.extend(
            self.pending
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        params
    }

    /// Encode and commit pending parameters, then return the full URL.
    /// The result is cached until the next mutation.
    pub fn serialize(&mut self) -> &str {
        if !self.pending.is_empty() {
            self.commit_pending_with(form_encode);
        }

        let Self {
            base_path,
            committed,
            cached,
            ..
        } = self;
        cached.get_or_insert_with(|| {
            let mut href = String::with_capacity(base_path.len() + query_len(committed));
            // Writing into a String cannot fail
            let _ = write_url(
                &mut href,
                base_path,
                committed.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            );
            href
        })
    }

    /// Move every pending parameter into the committed map using `encode`.
    ///
    /// If any value fails to encode, all pending parameters are dropped and
    /// the committed map is left as it was.
    fn commit_pending_with<F>(&mut self, encode: F)
    where
        F: Fn(&str) -> core::result::Result<String, EncodingFailure>,
    {
        let pending = core::mem::take(&mut self.pending);
        let count = pending.len();

        let encoded: core::result::Result<Vec<(String, String)>, EncodingFailure> = pending
            .into_iter()
            .map(|(key, value)| encode(&value).map(|value| (key, value)))
            .collect();

        match encoded {
            Ok(entries) => self.committed.extend(entries),
            Err(err) => {
                tracing::warn!(
                    dropped = count,
                    %err,
                    "dropping pending query parameters that failed to encode"
                );
            }
        }
        self.cached = None;
    }
}

impl fmt::Display for ModifiableUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pending.is_empty() {
            if let Some(cached) = &self.cached {
                return f.write_str(cached);
            }
        }

        let mut merged: BTreeMap<&str, Cow<'_, str>> = self
            .committed
            .iter()
            .map(|(key, value)| (key.as_str(), Cow::Borrowed(value.as_str())))
            .collect();

        let encoded: core::result::Result<Vec<_>, EncodingFailure> = self
            .pending
            .iter()
            .map(|(key, value)| form_encode(value).map(|value| (key.as_str(), Cow::Owned(value))))
            .collect();
        if let Ok(entries) = encoded {
            merged.extend(entries);
        }

        write_url(
            f,
            &self.base_path,
            merged.iter().map(|(key, value)| (*key, value.as_ref())),
        )
    }
}

impl From<ModifiableUrl> for String {
    fn from(mut url: ModifiableUrl) -> Self {
        url.serialize();
        url.cached.unwrap_or_default()
    }
}

/// Last key (in iteration order) whose value equals `token`
fn find_key_by_value(map: &BTreeMap<String, String>, token: &str) -> Option<String> {
    map.iter()
        .rev()
        .find(|(_, value)| value.as_str() == token)
        .map(|(key, _)| key.clone())
}

/// Bytes needed for `?k=v&k=v...`
fn query_len(params: &BTreeMap<String, String>) -> usize {
    params.iter().map(|(k, v)| k.len() + v.len() + 2).sum()
}

/// Write `base_path`, then `?` and the `&`-joined pairs if there are any
fn write_url<'a, W, I>(out: &mut W, base_path: &str, params: I) -> fmt::Result
where
    W: Write + ?Sized,
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    out.write_str(base_path)?;
    for (i, (key, value)) in params.into_iter().enumerate() {
        out.write_char(if i == 0 { '?' } else { '&' })?;
        out.write_str(key)?;
        out.write_char('=')?;
        out.write_str(value)?;
    }
    Ok(())
}

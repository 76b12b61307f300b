use crate::compat::String;
use crate::error::EncodingFailure;
use core::fmt::Write;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// application/x-www-form-urlencoded percent-encode set
/// Everything but ASCII alphanumerics and *, -, ., _
/// Space is in the set but is never passed to the encoder (it becomes '+')
/// Based on https://url.spec.whatwg.org/#application-x-www-form-urlencoded-percent-encode-set
pub const FORM_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Form-encode `input` and append it to `buffer`.
/// Space becomes '+', other bytes in `FORM_SET` become %XX of their UTF-8 encoding.
pub fn form_encode_into(buffer: &mut String, input: &str) -> Result<(), EncodingFailure> {
    buffer.reserve(input.len());

    for (i, piece) in input.split(' ').enumerate() {
        if i > 0 {
            buffer.push('+');
        }
        write!(buffer, "{}", utf8_percent_encode(piece, FORM_SET))?;
    }
    Ok(())
}

/// Form-encode `input` into a new string
pub fn form_encode(input: &str) -> Result<String, EncodingFailure> {
    let mut buffer = String::with_capacity(input.len());
    form_encode_into(&mut buffer, input)?;
    Ok(buffer)
}

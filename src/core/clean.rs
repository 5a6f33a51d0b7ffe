use std::borrow::Cow;

use super::kind::{CNPJ_LENGTH, CPF_LENGTH};

/// Largest raw input, in bytes, that [`clean`] and the validators will
/// process. Generous for any formatted document (`"12.ABC.345/01DE-35"` is
/// 18 bytes) while bounding the work done on hostile input.
pub const MAX_INPUT_SIZE: usize = 1000;

/// Whether `text` is already in canonical form: 11 ASCII digits, or 14
/// characters of ASCII digits and uppercase letters. Lowercase letters
/// always fail this check.
pub(crate) fn is_already_clean(text: &str) -> bool {
    let bytes = text.as_bytes();
    match bytes.len() {
        CPF_LENGTH => bytes.iter().all(u8::is_ascii_digit),
        CNPJ_LENGTH => bytes
            .iter()
            .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()),
        _ => false,
    }
}

/// Keep ASCII digits and letters, upper-casing the latter; drop the rest.
pub(crate) fn clean_slow(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '0'..='9' | 'A'..='Z' => Some(c),
            'a'..='z' => Some(c.to_ascii_uppercase()),
            _ => None,
        })
        .collect()
}

/// Normalize a CPF or CNPJ for validation.
///
/// Strips punctuation, whitespace, control and non-ASCII characters and
/// upper-cases ASCII letters. A result of exactly 11 characters is treated
/// as a CPF and loses any letters, so a stray letter surfaces as a length
/// error rather than a misread digit.
///
/// Input that is already canonical is returned borrowed. Input longer than
/// [`MAX_INPUT_SIZE`] yields an empty string.
///
/// ```rust
/// use brdoc::core::clean;
///
/// assert_eq!(clean("716.566.867-59"), "71656686759");
/// assert_eq!(clean("12.abc.345/01de-35"), "12ABC34501DE35");
/// ```
pub fn clean(text: &str) -> Cow<'_, str> {
    if text.is_empty() || text.len() > MAX_INPUT_SIZE {
        return Cow::Borrowed("");
    }

    if is_already_clean(text) {
        return Cow::Borrowed(text);
    }

    let mut cleaned = clean_slow(text);
    if cleaned.len() == CPF_LENGTH {
        cleaned.retain(|c| c.is_ascii_digit());
    }
    Cow::Owned(cleaned)
}

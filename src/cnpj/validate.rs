use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    CNPJ_LENGTH, DocumentError, DocumentKind, Module11Weights, check_digits, check_input_size,
    clean, is_same_character,
};

/// A validated CNPJ, stored as its 14 raw characters.
///
/// Covers both the legacy all-numeric form and the alphanumeric form where
/// the 12 base characters may be `A-Z`. Only obtainable through
/// [`validate_cnpj`] (or `FromStr`, `TryFrom` and serde, which all call it).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj(String);

impl Cnpj {
    /// The 14 raw characters, e.g. `"12ABC34501DE35"`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Alias for [`as_str`](Self::as_str).
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Display form, e.g. `"12.ABC.345/01DE-35"`.
    pub fn formatted(&self) -> String {
        DocumentKind::Cnpj.format(&self.0)
    }

    /// Whether the base contains at least one letter.
    pub fn is_alphanumeric(&self) -> bool {
        self.0.bytes().any(|b| b.is_ascii_uppercase())
    }
}

/// Check the CNPJ character classes: positions 0-11 in `0-9`/`A-Z`,
/// positions 12-13 in `0-9`. Anything not exactly 14 bytes fails.
pub fn is_valid_cnpj_format(cleaned: &str) -> bool {
    let bytes = cleaned.as_bytes();
    if bytes.len() != CNPJ_LENGTH {
        return false;
    }
    let (base, check) = bytes.split_at(DocumentKind::Cnpj.base_len());
    base.iter()
        .all(|b| b.is_ascii_digit() || b.is_ascii_uppercase())
        && check.iter().all(u8::is_ascii_digit)
}

/// Validate a CNPJ after cleaning it.
///
/// Checks, in order: input size, length (14 characters), character
/// classes, all-same characters, and the two Module 11 check digits.
///
/// ```rust
/// use brdoc::cnpj::validate_cnpj;
///
/// let cnpj = validate_cnpj("12.abc.345/01de-35").unwrap();
/// assert_eq!(cnpj.as_str(), "12ABC34501DE35");
/// assert_eq!(cnpj.to_string(), "12.ABC.345/01DE-35");
/// ```
pub fn validate_cnpj(text: &str) -> Result<Cnpj, DocumentError> {
    check_input_size(text)?;
    let cleaned = clean(text);

    match check_cnpj(&cleaned) {
        Ok(()) => {
            trace!(kind = %DocumentKind::Cnpj, "document accepted");
            Ok(Cnpj(cleaned.into_owned()))
        }
        Err(err) => {
            debug!(
                kind = %DocumentKind::Cnpj,
                error_kind = ?err.kind(),
                cleaned_len = cleaned.len(),
                "document rejected"
            );
            Err(err)
        }
    }
}

/// Shortcut for `validate_cnpj(text).is_ok()`.
pub fn is_valid_cnpj(text: &str) -> bool {
    validate_cnpj(text).is_ok()
}

fn check_cnpj(cleaned: &str) -> Result<(), DocumentError> {
    let kind = DocumentKind::Cnpj;

    if cleaned.len() != kind.length() {
        return Err(DocumentError::InvalidLength {
            kind,
            expected: kind.length(),
            actual: cleaned.len(),
        });
    }

    if !is_valid_cnpj_format(cleaned) {
        return Err(DocumentError::InvalidAlphanumericFormat);
    }

    if is_same_character(cleaned) {
        return Err(DocumentError::AllSameCharacter { kind });
    }

    let (base, supplied) = cleaned.split_at(kind.base_len());
    let digits = check_digits(base, Module11Weights::CNPJ)
        .map_err(|source| DocumentError::CheckDigits { kind, source })?;
    if !digits.matches(supplied.as_bytes()) {
        return Err(DocumentError::InvalidChecksum { kind });
    }

    Ok(())
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Cnpj {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_cnpj(s)
    }
}

impl TryFrom<&str> for Cnpj {
    type Error = DocumentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        validate_cnpj(value)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_cnpj(&value)
    }
}

impl AsRef<str> for Cnpj {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.0
    }
}

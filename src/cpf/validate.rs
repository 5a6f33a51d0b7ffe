use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{
    DocumentError, DocumentKind, Module11Weights, check_digits, check_input_size, clean,
    is_same_character,
};

/// A validated CPF, stored as its 11 raw digits.
///
/// Only obtainable through [`validate_cpf`] (or `FromStr`, `TryFrom` and
/// serde, which all call it). Ordering and equality compare the raw digits.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// The 11 raw digits, e.g. `"71656686759"`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Alias for [`as_str`](Self::as_str).
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Display form, e.g. `"716.566.867-59"`.
    pub fn formatted(&self) -> String {
        DocumentKind::Cpf.format(&self.0)
    }
}

/// Validate a CPF after cleaning it.
///
/// Checks, in order: input size, length (11 digits), all-same digits, and
/// the two Module 11 check digits.
///
/// ```rust
/// use brdoc::cpf::validate_cpf;
///
/// let cpf = validate_cpf("716.566.867-59").unwrap();
/// assert_eq!(cpf.as_str(), "71656686759");
/// assert_eq!(cpf.to_string(), "716.566.867-59");
/// ```
pub fn validate_cpf(text: &str) -> Result<Cpf, DocumentError> {
    check_input_size(text)?;
    let cleaned = clean(text);

    match check_cpf(&cleaned) {
        Ok(()) => {
            trace!(kind = %DocumentKind::Cpf, "document accepted");
            Ok(Cpf(cleaned.into_owned()))
        }
        Err(err) => {
            debug!(
                kind = %DocumentKind::Cpf,
                error_kind = ?err.kind(),
                cleaned_len = cleaned.len(),
                "document rejected"
            );
            Err(err)
        }
    }
}

/// Shortcut for `validate_cpf(text).is_ok()`.
pub fn is_valid_cpf(text: &str) -> bool {
    validate_cpf(text).is_ok()
}

fn check_cpf(cleaned: &str) -> Result<(), DocumentError> {
    let kind = DocumentKind::Cpf;

    if cleaned.len() != kind.length() {
        return Err(DocumentError::InvalidLength {
            kind,
            expected: kind.length(),
            actual: cleaned.len(),
        });
    }

    if is_same_character(cleaned) {
        return Err(DocumentError::AllSameCharacter { kind });
    }

    let (base, supplied) = cleaned.split_at(kind.base_len());
    let digits = check_digits(base, Module11Weights::CPF)
        .map_err(|source| DocumentError::CheckDigits { kind, source })?;
    if !digits.matches(supplied.as_bytes()) {
        return Err(DocumentError::InvalidChecksum { kind });
    }

    Ok(())
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Cpf {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_cpf(s)
    }
}

impl TryFrom<&str> for Cpf {
    type Error = DocumentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        validate_cpf(value)
    }
}

impl TryFrom<String> for Cpf {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_cpf(&value)
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn valid_formatted_and_unformatted() {
        for input in ["716.566.867-59", "71656686759", " 716.566.867-59 "] {
            let cpf = validate_cpf(input).unwrap();
            assert_eq!(cpf.as_str(), "71656686759");
        }
    }

    #[test]
    fn length_checked_before_anything_else() {
        let err = validate_cpf("123456789").unwrap_err();
        assert_eq!(
            err,
            DocumentError::InvalidLength {
                kind: DocumentKind::Cpf,
                expected: 11,
                actual: 9,
            }
        );
    }

    #[test]
    fn all_same_digits() {
        let err = validate_cpf("11111111111").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AllSameCharacter);
    }

    #[test]
    fn wrong_check_digits() {
        let err = validate_cpf("12345678901").unwrap_err();
        assert_eq!(err, DocumentError::InvalidChecksum { kind: DocumentKind::Cpf });
    }

    #[test]
    fn stray_letter_is_a_length_error() {
        let err = validate_cpf("71656686A59").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLength);
    }

    #[test]
    fn display_is_formatted() {
        let cpf: Cpf = "71656686759".parse().unwrap();
        assert_eq!(cpf.to_string(), "716.566.867-59");
        assert_eq!(cpf.raw(), "71656686759");
    }
}

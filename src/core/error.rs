use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::kind::DocumentKind;

/// Returned by the character classifier when a byte is outside `0-9` / `A-Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid character {:?} (ASCII {byte})", char::from(*.byte))]
pub struct InvalidCharacter {
    /// The offending byte.
    pub byte: u8,
}

/// Which of the two Module 11 passes was running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckDigitPass {
    First,
    Second,
}

impl fmt::Display for CheckDigitPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

/// A classifier failure wrapped with the position it occurred at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("error calculating {pass} check digit: character at position {position}")]
pub struct ChecksumError {
    /// The pass that hit the character.
    pub pass: CheckDigitPass,
    /// Zero-based index into the base string.
    pub position: usize,
    /// The classifier error.
    pub source: InvalidCharacter,
}

/// Errors that can occur while validating a CPF or CNPJ.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DocumentError {
    /// Raw input exceeds [`MAX_INPUT_SIZE`](crate::core::MAX_INPUT_SIZE).
    #[error("input string too large: maximum {max} characters allowed, got {actual}")]
    InputTooLarge { max: usize, actual: usize },

    /// Cleaned input has the wrong number of characters.
    #[error("{kind} must have exactly {expected} {}, got {actual}", length_unit(.kind))]
    InvalidLength {
        kind: DocumentKind,
        expected: usize,
        actual: usize,
    },

    /// CNPJ character classes violated.
    #[error(
        "CNPJ format is invalid: first 12 characters must be A-Z or 0-9, last 2 must be 0-9"
    )]
    InvalidAlphanumericFormat,

    /// Every character of the cleaned input is identical.
    #[error("{kind} cannot have {}", same_character_phrase(.kind))]
    AllSameCharacter { kind: DocumentKind },

    /// Computed check digits differ from the supplied ones.
    #[error("{kind} check digits are invalid")]
    InvalidChecksum { kind: DocumentKind },

    /// The checksum engine could not score a base character.
    #[error("error calculating {kind} check digits")]
    CheckDigits {
        kind: DocumentKind,
        #[source]
        source: ChecksumError,
    },

    /// Auto-detection could not map the cleaned length to a document kind.
    #[error("unable to determine document type from length {actual}")]
    UnrecognizedLength { actual: usize },
}

fn length_unit(kind: &DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Cpf => "digits",
        DocumentKind::Cnpj => "characters",
    }
}

fn same_character_phrase(kind: &DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Cpf => "all digits the same",
        DocumentKind::Cnpj => "all same characters",
    }
}

/// Discriminant of a [`DocumentError`], for matching on the failure class
/// without caring about the attached context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ErrorKind {
    InputTooLarge,
    InvalidLength,
    InvalidAlphanumericFormat,
    AllSameCharacter,
    InvalidChecksum,
    InvalidCharacter,
}

impl DocumentError {
    /// The failure class of this error.
    ///
    /// A classifier failure surfacing through the checksum engine reports
    /// [`ErrorKind::InvalidCharacter`]; an unrecognized length during
    /// auto-detection reports [`ErrorKind::InvalidLength`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InputTooLarge { .. } => ErrorKind::InputTooLarge,
            Self::InvalidLength { .. } | Self::UnrecognizedLength { .. } => {
                ErrorKind::InvalidLength
            }
            Self::InvalidAlphanumericFormat => ErrorKind::InvalidAlphanumericFormat,
            Self::AllSameCharacter { .. } => ErrorKind::AllSameCharacter,
            Self::InvalidChecksum { .. } => ErrorKind::InvalidChecksum,
            Self::CheckDigits { .. } => ErrorKind::InvalidCharacter,
        }
    }

    /// The document kind this error was raised for, if any.
    pub fn document_kind(&self) -> Option<DocumentKind> {
        match self {
            Self::InvalidLength { kind, .. }
            | Self::AllSameCharacter { kind }
            | Self::InvalidChecksum { kind }
            | Self::CheckDigits { kind, .. } => Some(*kind),
            Self::InvalidAlphanumericFormat => Some(DocumentKind::Cnpj),
            Self::InputTooLarge { .. } | Self::UnrecognizedLength { .. } => None,
        }
    }
}

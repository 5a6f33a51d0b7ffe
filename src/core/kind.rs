use std::fmt;

use serde::{Deserialize, Serialize};

use super::format::format_document;

/// Number of characters in a cleaned CPF.
pub const CPF_LENGTH: usize = 11;
/// Number of characters in a cleaned CNPJ.
pub const CNPJ_LENGTH: usize = 14;

/// Display pattern for CPF; every `X` takes one source character.
pub const CPF_PATTERN: &str = "XXX.XXX.XXX-XX";
/// Display pattern for CNPJ, numeric or alphanumeric.
pub const CNPJ_PATTERN: &str = "XX.XXX.XXX/XXXX-XX";

/// The two supported Brazilian taxpayer identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Cadastro de Pessoas Físicas: 11 digits.
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica: 12 alphanumeric + 2 check digits.
    Cnpj,
}

impl DocumentKind {
    /// Cleaned length including check digits.
    pub const fn length(self) -> usize {
        match self {
            Self::Cpf => CPF_LENGTH,
            Self::Cnpj => CNPJ_LENGTH,
        }
    }

    /// Length of the base the check digits are computed over.
    pub const fn base_len(self) -> usize {
        self.length() - 2
    }

    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Cpf => CPF_PATTERN,
            Self::Cnpj => CNPJ_PATTERN,
        }
    }

    /// Kind whose cleaned length is `len`, if any.
    pub const fn from_len(len: usize) -> Option<Self> {
        match len {
            CPF_LENGTH => Some(Self::Cpf),
            CNPJ_LENGTH => Some(Self::Cnpj),
            _ => None,
        }
    }

    /// Render `raw` with this kind's display pattern.
    ///
    /// If `raw` does not have exactly [`length`](Self::length) characters it is
    /// returned unchanged.
    pub fn format(self, raw: &str) -> String {
        if raw.len() != self.length() {
            return raw.to_string();
        }
        format_document(raw, self.pattern())
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpf => f.write_str("CPF"),
            Self::Cnpj => f.write_str("CNPJ"),
        }
    }
}

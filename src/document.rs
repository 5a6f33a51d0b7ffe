//! CPF or CNPJ, picked from the cleaned input length.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cnpj::{Cnpj, validate_cnpj};
use crate::core::{DocumentError, DocumentKind, check_input_size, clean};
use crate::cpf::{Cpf, validate_cpf};

/// A validated taxpayer identifier of either kind.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Document {
    Cpf(Cpf),
    Cnpj(Cnpj),
}

impl Document {
    /// Clean `text` and validate it as a CPF (11 characters) or a CNPJ
    /// (14 characters). Other lengths fail with
    /// [`DocumentError::UnrecognizedLength`].
    ///
    /// ```rust
    /// use brdoc::{Document, DocumentKind};
    ///
    /// let doc = Document::parse("  7 1 6 . 5 6 6 . 8 6 7 - 5 9  ").unwrap();
    /// assert_eq!(doc.kind(), DocumentKind::Cpf);
    /// assert_eq!(doc.to_string(), "716.566.867-59");
    /// ```
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        check_input_size(text)?;
        let cleaned = clean(text);
        match DocumentKind::from_len(cleaned.len()) {
            Some(DocumentKind::Cpf) => validate_cpf(&cleaned).map(Self::Cpf),
            Some(DocumentKind::Cnpj) => validate_cnpj(&cleaned).map(Self::Cnpj),
            None => {
                debug!(cleaned_len = cleaned.len(), "document length not recognized");
                Err(DocumentError::UnrecognizedLength {
                    actual: cleaned.len(),
                })
            }
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Cpf(_) => DocumentKind::Cpf,
            Self::Cnpj(_) => DocumentKind::Cnpj,
        }
    }

    /// The raw cleaned characters.
    pub fn raw(&self) -> &str {
        match self {
            Self::Cpf(cpf) => cpf.as_str(),
            Self::Cnpj(cnpj) => cnpj.as_str(),
        }
    }

    /// Display form with the kind's punctuation.
    pub fn formatted(&self) -> String {
        self.kind().format(self.raw())
    }

    pub fn as_cpf(&self) -> Option<&Cpf> {
        match self {
            Self::Cpf(cpf) => Some(cpf),
            Self::Cnpj(_) => None,
        }
    }

    pub fn as_cnpj(&self) -> Option<&Cnpj> {
        match self {
            Self::Cnpj(cnpj) => Some(cnpj),
            Self::Cpf(_) => None,
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Document {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Document {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cpf> for Document {
    fn from(cpf: Cpf) -> Self {
        Self::Cpf(cpf)
    }
}

impl From<Cnpj> for Document {
    fn from(cnpj: Cnpj) -> Self {
        Self::Cnpj(cnpj)
    }
}

impl From<Document> for String {
    fn from(doc: Document) -> Self {
        match doc {
            Document::Cpf(cpf) => cpf.into(),
            Document::Cnpj(cnpj) => cnpj.into(),
        }
    }
}

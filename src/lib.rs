//! # brdoc
//!
//! Validation, normalization and formatting of Brazilian taxpayer
//! identifiers: CPF (11 digits) and CNPJ (14 characters, numeric or the
//! alphanumeric form where the 12 base positions may hold `A-Z`).
//!
//! Every input goes through the same pipeline: [`clean`] strips formatting
//! and upper-cases letters, the validator checks length, character classes
//! and repeated characters, and finally the two Module 11 check digits.
//! A successful validation yields a [`Cpf`](cpf::Cpf) or
//! [`Cnpj`](cnpj::Cnpj) value that can only exist in validated form.
//!
//! ## Quick Start
//!
//! ```rust
//! use brdoc::cnpj::validate_cnpj;
//! use brdoc::cpf::validate_cpf;
//! use brdoc::{ErrorKind, clean};
//!
//! let cpf = validate_cpf("716.566.867-59").unwrap();
//! assert_eq!(cpf.as_str(), "71656686759");
//! assert_eq!(cpf.to_string(), "716.566.867-59");
//!
//! let cnpj = validate_cnpj("12.ABC.345/01DE-35").unwrap();
//! assert_eq!(cnpj.to_string(), "12.ABC.345/01DE-35");
//!
//! let err = validate_cpf("111.111.111-11").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::AllSameCharacter);
//!
//! assert_eq!(clean("  7 1 6 . 5 6 6 . 8 6 7 - 5 9  "), "71656686759");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Cleaning, Module 11 check digits, formatting, errors |
//! | `cpf` (default) | CPF validation and the [`Cpf`](cpf::Cpf) type |
//! | `cnpj` (default) | CNPJ validation and the [`Cnpj`](cnpj::Cnpj) type |
//! | `all` | Everything, including auto-detecting [`Document`] |
//!
//! [`Document`] is available whenever both `cpf` and `cnpj` are enabled.
//!
//! ## Logging
//!
//! Validators emit [`tracing`] events (`debug` on rejection, `trace` on
//! acceptance) carrying the document kind and error kind. Raw identifiers
//! are never logged.

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "cpf")]
pub mod cpf;

#[cfg(feature = "cnpj")]
pub mod cnpj;

#[cfg(all(feature = "cpf", feature = "cnpj"))]
mod document;

#[cfg(all(feature = "cpf", feature = "cnpj"))]
pub use crate::document::Document;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

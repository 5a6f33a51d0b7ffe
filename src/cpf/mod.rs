//! CPF (Cadastro de Pessoas Físicas): 11-digit individual taxpayer number.
//!
//! # Example
//!
//! ```rust
//! use brdoc::cpf::*;
//!
//! let cpf = validate_cpf("716.566.867-59").unwrap();
//! assert_eq!(cpf.formatted(), "716.566.867-59");
//! assert!(!is_valid_cpf("111.111.111-11"));
//! ```

mod validate;

pub use validate::{Cpf, is_valid_cpf, validate_cpf};

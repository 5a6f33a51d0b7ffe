//! CNPJ (Cadastro Nacional da Pessoa Jurídica): 14-character entity
//! taxpayer number, numeric or alphanumeric.
//!
//! The alphanumeric form allows `A-Z` in the 12 base positions; the two
//! check digits stay numeric. Letters are scored by their ASCII code minus
//! 48, which keeps every legacy numeric CNPJ valid under the same rules.
//!
//! # Example
//!
//! ```rust
//! use brdoc::cnpj::*;
//!
//! let cnpj = validate_cnpj("12.ABC.345/01DE-35").unwrap();
//! assert!(cnpj.is_alphanumeric());
//! assert_eq!(cnpj.formatted(), "12.ABC.345/01DE-35");
//! ```

mod validate;

pub use validate::{Cnpj, is_valid_cnpj, is_valid_cnpj_format, validate_cnpj};

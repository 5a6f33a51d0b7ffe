//! Normalization, Module 11 check digits, formatting and errors.
//!
//! This module holds the machinery shared by [`cpf`](crate::cpf) and
//! [`cnpj`](crate::cnpj): the input cleaner, the character classifier, the
//! check digit engine and the display pattern formatter.

mod checksum;
mod clean;
mod error;
mod format;
mod kind;

pub use checksum::*;
pub use clean::{MAX_INPUT_SIZE, clean};
pub use error::*;
pub use format::*;
pub use kind::*;

/// Whether `cleaned` has at least two characters and all of them are equal.
#[cfg(any(feature = "cpf", feature = "cnpj"))]
pub(crate) fn is_same_character(cleaned: &str) -> bool {
    match cleaned.as_bytes() {
        [first, rest @ ..] if !rest.is_empty() => rest.iter().all(|b| b == first),
        _ => false,
    }
}

/// Reject oversized raw input before any cleaning work.
#[cfg(any(feature = "cpf", feature = "cnpj"))]
pub(crate) fn check_input_size(text: &str) -> Result<(), DocumentError> {
    if text.len() > MAX_INPUT_SIZE {
        return Err(DocumentError::InputTooLarge {
            max: MAX_INPUT_SIZE,
            actual: text.len(),
        });
    }
    Ok(())
}

//! Module 11 check digits shared by CPF and CNPJ.
//!
//! Both documents use the same two-pass weighted sum; only the weight
//! tables and the base length differ.

use super::error::{CheckDigitPass, ChecksumError, InvalidCharacter};

/// CPF first check digit weights (9 base digits).
pub const CPF_FIRST_WEIGHTS: &[u32] = &[10, 9, 8, 7, 6, 5, 4, 3, 2];
/// CPF second check digit weights (9 base digits + first check digit).
pub const CPF_SECOND_WEIGHTS: &[u32] = &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// CNPJ first check digit weights (12 base characters).
pub const CNPJ_FIRST_WEIGHTS: &[u32] = &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
/// CNPJ second check digit weights (12 base characters + first check digit).
pub const CNPJ_SECOND_WEIGHTS: &[u32] = &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Pair of weight tables for one document kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Module11Weights {
    /// One weight per base position.
    pub first: &'static [u32],
    /// One weight per base position, plus one for the first check digit.
    pub second: &'static [u32],
}

impl Module11Weights {
    pub const CPF: Self = Self {
        first: CPF_FIRST_WEIGHTS,
        second: CPF_SECOND_WEIGHTS,
    };

    pub const CNPJ: Self = Self {
        first: CNPJ_FIRST_WEIGHTS,
        second: CNPJ_SECOND_WEIGHTS,
    };
}

/// The two computed check digits, each in `0..=9`.
///
/// Only [`check_digits`] builds these, so both digits are always decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckDigits {
    first: u8,
    second: u8,
}

impl CheckDigits {
    pub fn first(self) -> u8 {
        self.first
    }

    pub fn second(self) -> u8 {
        self.second
    }

    /// The digits as ASCII bytes.
    pub fn to_ascii(self) -> [u8; 2] {
        [b'0' + self.first, b'0' + self.second]
    }

    /// Whether `suffix` spells exactly these two digits.
    pub fn matches(self, suffix: &[u8]) -> bool {
        suffix == self.to_ascii()
    }
}

/// Checksum value of a single character.
///
/// Digits map to `0..=9`. Uppercase letters map to their ASCII code minus
/// 48, so `'A'` is 17 and `'Z'` is 42. Anything else is rejected.
pub fn char_value(byte: u8) -> Result<u32, InvalidCharacter> {
    match byte {
        b'0'..=b'9' | b'A'..=b'Z' => Ok(u32::from(byte - b'0')),
        _ => Err(InvalidCharacter { byte }),
    }
}

/// Weighted positional sum over the common prefix of `base` and `weights`.
fn weighted_sum(base: &[u8], weights: &[u32], pass: CheckDigitPass) -> Result<u32, ChecksumError> {
    base.iter()
        .zip(weights)
        .enumerate()
        .try_fold(0u32, |sum, (position, (&byte, &weight))| {
            char_value(byte)
                .map(|value| sum + weight * value)
                .map_err(|source| ChecksumError {
                    pass,
                    position,
                    source,
                })
        })
}

fn digit_from_sum(sum: u32) -> u8 {
    match sum % 11 {
        r if r < 2 => 0,
        // r is in 2..=10, so the digit is in 1..=9
        r => (11 - r) as u8,
    }
}

/// Compute both Module 11 check digits for `base`.
///
/// The second pass weighs the base with `weights.second` and adds the
/// first check digit times the weight right after the base.
///
/// ```rust
/// use brdoc::core::{Module11Weights, check_digits};
///
/// let digits = check_digits("716566867", Module11Weights::CPF).unwrap();
/// assert_eq!((digits.first(), digits.second()), (5, 9));
/// ```
pub fn check_digits(base: &str, weights: Module11Weights) -> Result<CheckDigits, ChecksumError> {
    let base = base.as_bytes();

    let first = digit_from_sum(weighted_sum(base, weights.first, CheckDigitPass::First)?);

    let mut sum = weighted_sum(base, weights.second, CheckDigitPass::Second)?;
    if let Some(&weight) = weights.second.get(base.len()) {
        sum += u32::from(first) * weight;
    }
    let second = digit_from_sum(sum);

    Ok(CheckDigits { first, second })
}

//! Property-based tests for the cleaning and validation pipeline.
//!
//! Run with: `cargo test --features all --test proptest_tests`

#![cfg(all(feature = "cpf", feature = "cnpj"))]

use brdoc::cnpj::validate_cnpj;
use brdoc::cpf::validate_cpf;
use brdoc::{Document, ErrorKind, Module11Weights, check_digits, clean};
use proptest::prelude::*;

// ── Proptest Strategies ─────────────────────────────────────────────────────

/// Append the correct check digits to `base`.
fn with_check_digits(base: &str, weights: Module11Weights) -> String {
    let digits = check_digits(base, weights).unwrap();
    let [a, b] = digits.to_ascii();
    format!("{base}{}{}", char::from(a), char::from(b))
}

fn not_uniform(s: &str) -> bool {
    let first = s.as_bytes()[0];
    s.bytes().any(|b| b != first)
}

/// A valid raw CPF.
fn arb_cpf() -> impl Strategy<Value = String> {
    "[0-9]{9}"
        .prop_map(|base| with_check_digits(&base, Module11Weights::CPF))
        .prop_filter("uniform CPF", |s| not_uniform(s))
}

/// A valid raw CNPJ, numeric or alphanumeric.
fn arb_cnpj() -> impl Strategy<Value = String> {
    "[0-9A-Z]{12}"
        .prop_map(|base| with_check_digits(&base, Module11Weights::CNPJ))
        .prop_filter("uniform CNPJ", |s| not_uniform(s))
}

/// Interleave formatting noise into a raw identifier.
fn arb_noisy(raw: String) -> impl Strategy<Value = String> {
    let len = raw.len();
    prop::collection::vec(prop::sample::select(vec!["", " ", ".", "-", "/", "\t", "(", ")"]), len)
        .prop_map(move |noise| {
            raw.chars()
                .zip(noise)
                .map(|(c, n)| format!("{n}{c}"))
                .collect::<String>()
        })
}

// ── Property Tests ──────────────────────────────────────────────────────────

proptest! {
    /// clean(clean(s)) == clean(s) for arbitrary text.
    #[test]
    fn clean_is_idempotent(s in "\\PC{0,64}") {
        let once = clean(&s).into_owned();
        prop_assert_eq!(clean(&once), once.as_str());
    }

    /// Any string that cleans to 11 characters is all digits.
    #[test]
    fn cpf_sized_output_is_numeric(s in "[0-9a-zA-Z .\\-/]{0,20}") {
        let cleaned = clean(&s);
        if cleaned.len() == 11 {
            prop_assert!(cleaned.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    /// A valid CPF survives format() → clean() unchanged.
    #[test]
    fn cpf_roundtrip(raw in arb_cpf()) {
        let cpf = validate_cpf(&raw).unwrap();
        prop_assert_eq!(cpf.as_str(), raw.as_str());
        let formatted = cpf.formatted();
        prop_assert_eq!(clean(&formatted), cpf.as_str());
        prop_assert_eq!(validate_cpf(&cpf.to_string()).unwrap(), cpf);
    }

    /// A valid CNPJ survives format() → clean() unchanged.
    #[test]
    fn cnpj_roundtrip(raw in arb_cnpj()) {
        let cnpj = validate_cnpj(&raw).unwrap();
        let formatted = cnpj.formatted();
        prop_assert_eq!(clean(&formatted), cnpj.as_str());
        prop_assert_eq!(validate_cnpj(&cnpj.to_string()).unwrap(), cnpj);
    }

    /// Lower-casing a valid CNPJ still validates to the same value.
    #[test]
    fn cnpj_case_insensitive(raw in arb_cnpj()) {
        let upper = validate_cnpj(&raw).unwrap();
        let lower = validate_cnpj(&raw.to_ascii_lowercase()).unwrap();
        prop_assert_eq!(upper, lower);
    }

    /// Formatting noise never changes the outcome.
    #[test]
    fn noise_is_ignored(noisy in arb_cpf().prop_flat_map(arb_noisy)) {
        let doc = Document::parse(&noisy).unwrap();
        let displayed = doc.to_string();
        prop_assert_eq!(clean(&displayed), doc.raw());
    }

    /// Changing one check digit always breaks validation.
    #[test]
    fn corrupted_check_digit_rejected(raw in arb_cpf(), pos in 9usize..11, bump in 1u8..10) {
        let mut bytes = raw.into_bytes();
        bytes[pos] = b'0' + (bytes[pos] - b'0' + bump) % 10;
        let corrupted = String::from_utf8(bytes).unwrap();
        let err = validate_cpf(&corrupted).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidChecksum);
    }

    /// Uniform digit strings are rejected as all-same, whatever their checksum.
    #[test]
    fn uniform_digits_rejected(d in 0u8..10) {
        let c = char::from(b'0' + d);
        let cpf: String = std::iter::repeat_n(c, 11).collect();
        let cnpj: String = std::iter::repeat_n(c, 14).collect();
        prop_assert_eq!(validate_cpf(&cpf).unwrap_err().kind(), ErrorKind::AllSameCharacter);
        prop_assert_eq!(validate_cnpj(&cnpj).unwrap_err().kind(), ErrorKind::AllSameCharacter);
    }

    /// Uniform letter strings never validate.
    #[test]
    fn uniform_letters_rejected(l in 0u8..26) {
        let c = char::from(b'A' + l);
        let cpf: String = std::iter::repeat_n(c, 11).collect();
        let cnpj: String = std::iter::repeat_n(c, 14).collect();
        prop_assert_eq!(validate_cpf(&cpf).unwrap_err().kind(), ErrorKind::InvalidLength);
        prop_assert_eq!(
            validate_cnpj(&cnpj).unwrap_err().kind(),
            ErrorKind::InvalidAlphanumericFormat
        );
    }

    /// Validators never panic and every accepted value is canonical.
    #[test]
    fn validators_total(s in "\\PC{0,40}") {
        if let Ok(cpf) = validate_cpf(&s) {
            prop_assert_eq!(cpf.as_str().len(), 11);
        }
        if let Ok(cnpj) = validate_cnpj(&s) {
            prop_assert_eq!(cnpj.as_str().len(), 14);
        }
        let _ = Document::parse(&s);
    }
}

use std::error::Error;

use brdoc::cnpj::validate_cnpj;
use brdoc::cpf::validate_cpf;
use brdoc::{DocumentError, ErrorKind, Module11Weights, check_digits};

fn print_chain(err: &dyn Error) {
    println!("  error: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        println!("    caused by: {cause}");
        source = cause.source();
    }
}

fn main() {
    // ── 1. Matching on the error kind ─────────────────────────────────
    println!("=== Error kinds ===");
    for input in ["123", "111.111.111-11", "123.456.789-01"] {
        match validate_cpf(input) {
            Ok(cpf) => println!("  {input}: valid ({cpf})"),
            Err(e) => match e.kind() {
                ErrorKind::InvalidLength => println!("  {input}: wrong length ({e})"),
                ErrorKind::AllSameCharacter => println!("  {input}: repeated digits"),
                ErrorKind::InvalidChecksum => println!("  {input}: typo in the number?"),
                other => println!("  {input}: {other:?}"),
            },
        }
    }

    // ── 2. Structured context ─────────────────────────────────────────
    println!("\n=== Context ===");
    if let Err(DocumentError::InvalidLength {
        kind,
        expected,
        actual,
    }) = validate_cnpj("12.345.678")
    {
        println!("  {kind}: expected {expected} characters, got {actual}");
    }
    if let Err(e) = validate_cnpj("12ABC34501DEAB") {
        print_chain(&e);
    }

    // ── 3. Classifier errors through the checksum engine ──────────────
    println!("\n=== Invalid character ===");
    match check_digits("12abc34501de", Module11Weights::CNPJ) {
        Ok(d) => println!("  digits: {}{}", d.first(), d.second()),
        Err(e) => print_chain(&e),
    }
}

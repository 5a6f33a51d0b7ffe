use brdoc::cnpj::validate_cnpj;
use brdoc::cpf::validate_cpf;
use brdoc::{Document, clean};

fn main() {
    // ── 1. CPF ────────────────────────────────────────────────────────
    println!("=== CPF ===");
    let cpf = validate_cpf("716.566.867-59").expect("CPF should be valid");
    println!("  raw:       {}", cpf.as_str());
    println!("  formatted: {}", cpf);

    // ── 2. CNPJ, numeric and alphanumeric ─────────────────────────────
    println!("\n=== CNPJ ===");
    for input in ["22.796.729/0001-59", "12.abc.345/01de-35"] {
        let cnpj = validate_cnpj(input).expect("CNPJ should be valid");
        println!(
            "  {input:<20} -> {} (alphanumeric: {})",
            cnpj,
            cnpj.is_alphanumeric()
        );
    }

    // ── 3. Auto-detection from user input ─────────────────────────────
    println!("\n=== Auto-detect ===");
    for input in [
        "  7 1 6 . 5 6 6 . 8 6 7 - 5 9  ",
        "12ABC34501DE35",
        "123.456",
    ] {
        print!("  {:?} cleans to {:?}: ", input, clean(input));
        match Document::parse(input) {
            Ok(doc) => println!("{} {}", doc.kind(), doc),
            Err(e) => println!("rejected ({e})"),
        }
    }
}

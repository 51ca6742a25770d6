//! Basic card validation walkthrough.
//!
//! Run with: `cargo run --example basic`

use bandeira::{identify_brand, is_valid, passes_checksum, validate};

fn main() {
    println!("=== Credit Card Validation ===\n");

    // Full validation - separators are fine
    let number = "4111-1111-1111-1111";
    println!("Validating: {}", number);
    let result = validate(number);
    println!("  Valid: {}", if result.is_valid() { "yes" } else { "no" });
    println!("  Brand: {}", result.brand_label());
    println!();

    // A typo in the last digit keeps the brand but fails the checksum
    let typo = "4111-1111-1111-1112";
    let result = validate(typo);
    println!("Validating: {}", typo);
    println!("  Valid: {}", if result.is_valid() { "yes" } else { "no" });
    println!("  Brand: {}", result.brand_label());
    if let Some(message) = result.error_message() {
        println!("  Error: {}", message);
    }
    println!();

    // Quick checks across brands
    let samples = [
        "4111111111111111",  // Visa
        "5500000000000004",  // Mastercard
        "378282246310005",   // American Express
        "6011111111111117",  // Discover
        "3530111333300000",  // JCB
        "30569309025904",    // Diners Club
        "6362970000457013",  // Elo
        "6062825624254001",  // Hipercard
        "1234567890123456",  // unknown, bad checksum
    ];

    println!("Quick checks:");
    for sample in samples {
        println!(
            "  {:<22} brand={:<16} luhn={} valid={}",
            sample,
            identify_brand(sample).name(),
            passes_checksum(sample),
            is_valid(sample),
        );
    }
}

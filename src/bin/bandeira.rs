//! CLI tool for credit card validation.
//!
//! # Usage
//!
//! ```bash
//! # Validate a card number
//! bandeira validate 4111111111111111
//!
//! # JSON output
//! bandeira validate 4111111111111111 --output json
//!
//! # Identify the brand only
//! bandeira brand 5500000000000004
//!
//! # Check the Luhn checksum only
//! bandeira luhn 4111111111111111
//!
//! # No subcommand: interactive shell
//! bandeira
//! ```

use std::io::{self, BufRead, Write};

use bandeira::{identify_brand, passes_checksum, validate};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "bandeira")]
#[command(version, about = "Credit card number validation and brand identification")]
struct Cli {
    /// Runs the interactive shell when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a credit card number
    Validate {
        /// Card number to validate (spaces and hyphens allowed)
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Identify the card brand without validating the checksum
    Brand {
        /// Card number (or prefix)
        card_number: String,
    },

    /// Check whether a card number passes the Luhn checksum
    Luhn {
        /// Card number to check
        card_number: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Validate {
            card_number,
            output,
        }) => cmd_validate(&card_number, output),
        Some(Commands::Brand { card_number }) => cmd_brand(&card_number),
        Some(Commands::Luhn { card_number }) => cmd_luhn(&card_number),
        None => run_shell(),
    }
}

fn cmd_validate(card_number: &str, output: OutputFormat) {
    let result = validate(card_number);

    match output {
        OutputFormat::Text => {
            println!("Valid: {}", if result.is_valid() { "yes" } else { "no" });
            println!("Brand: {}", result.brand_label());
            if let Some(message) = result.error_message() {
                println!("Error: {}", message);
            }
        }
        OutputFormat::Json => {
            println!("{{");
            println!("  \"valid\": {},", result.is_valid());
            if let Some(message) = result.error_message() {
                println!("  \"brand\": \"{}\",", result.brand_label());
                println!("  \"error\": \"{}\"", message);
            } else {
                println!("  \"brand\": \"{}\"", result.brand_label());
            }
            println!("}}");
        }
    }

    std::process::exit(if result.is_valid() { 0 } else { 1 });
}

fn cmd_brand(card_number: &str) {
    println!("Brand: {}", identify_brand(card_number));
}

fn cmd_luhn(card_number: &str) {
    if passes_checksum(card_number) {
        println!("Luhn check: PASS");
        std::process::exit(0);
    } else {
        println!("Luhn check: FAIL");
        std::process::exit(1);
    }
}

/// Interactive loop: one card number per line, `q` or `quit` to exit.
fn run_shell() {
    println!("Credit Card Validator");
    println!("=====================");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("\nEnter a card number (or 'quit' to exit): ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            // EOF or read error ends the session
            _ => break,
        };

        let input = line.trim();
        if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        let result = validate(input);
        if result.is_valid() {
            println!("✓ Valid {} card", result.brand_label());
        } else if result.brand().is_none() {
            // Rejected before classification
            println!("✗ {}", result.brand_label());
            if let Some(message) = result.error_message() {
                println!("  {}", message);
            }
        } else {
            println!(
                "✗ Invalid card ({})",
                result.error_message().unwrap_or_default()
            );
            println!("  Detected pattern: {}", result.brand_label());
        }
    }

    println!("\nThank you for using the Credit Card Validator!");
}

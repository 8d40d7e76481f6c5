//! Pattern 7: Radix Parsing and Formatting
//! Hex in, octal out, and typed errors for everything that can go wrong
//!
//! Run with: cargo run --bin p7_radix_format

use colored::Colorize;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
enum RadixError {
    #[error("radix {0} is not between 2 and 36")]
    UnsupportedRadix(u32),
    #[error("invalid digits: {0}")]
    Digit(#[from] ParseIntError),
}

/// Parses `text` as an unsigned number in the given radix.
///
/// The radix is checked up front; `from_str_radix` itself panics outside
/// 2..=36, so the guard keeps that failure in the error channel.
fn parse_radix(text: &str, radix: u32) -> Result<u64, RadixError> {
    if !(2..=36).contains(&radix) {
        return Err(RadixError::UnsupportedRadix(radix));
    }
    Ok(u64::from_str_radix(text, radix)?)
}

fn main() {
    println!("=== Hex In, Octal Out ===\n");

    match parse_radix("C8", 16) {
        Ok(value) => {
            println!("\"C8\" as hex     -> {}", value);
            println!("{} as decimal  -> \"{}\"", value, value);
            println!("{} as octal    -> \"{:o}\"", value, value);
        }
        Err(err) => println!("{}", format!("parse failed: {}", err).red()),
    }

    // Reading "310" back without saying octal silently gives 310, not 200.
    let octal_text = format!("{:o}", 200);
    match octal_text.parse::<u64>() {
        Ok(value) => println!("\"{}\" as decimal -> {} (radix matters!)", octal_text, value),
        Err(err) => println!("parse failed: {}", err),
    }
    match parse_radix(&octal_text, 8) {
        Ok(value) => println!("\"{}\" as octal   -> {}", octal_text, value),
        Err(err) => println!("parse failed: {}", err),
    }

    println!("\n=== One Value, Every Base ===\n");

    let value = 200u64;
    println!("decimal: {}", value);
    println!("hex:     {:x} / {:X} / {:#x}", value, value, value);
    println!("octal:   {:o} / {:#o}", value, value);
    println!("binary:  {:b} / {:#010b}", value, value);
    println!("padded:  {:08x}", value);

    println!("\n=== Typed Errors for Bad Input ===\n");

    for (text, radix) in [("C8", 16), ("zz", 16), ("C8", 99)] {
        match parse_radix(text, radix) {
            Ok(value) => {
                println!("{} \"{}\" in base {} -> {}", "ok ".green(), text, radix, value)
            }
            Err(err) => println!("{} \"{}\" in base {}: {}", "err".red(), text, radix, err),
        }
    }

    println!("\n=== Key Points ===");
    println!("1. from_str_radix and {{:x}}/{{:o}}/{{:b}} cover both directions");
    println!("2. The radix is part of the meaning; \"310\" is 200 only in octal");
    println!("3. #[from] folds ParseIntError into the local error with ?");
    println!("4. Guard unsupported radixes early; panics are not an error channel");
}

// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with: cargo run --example basic_usage --features logging
// Set RUST_LOG=calculator=trace to see every evaluation.

use calculator::prelude::*;

fn main() {
    calculator::logging::init_from_verbosity(1);

    println!("=== Calculator Example ===\n");

    let rest = [1.0, 2.0, 3.0, 4.0, 5.0];

    println!("Variadic operations over {:?}:", rest);
    println!("  add(0, ..)      = {}", add(0.0, &rest));
    println!("  subtract(0, ..) = {}", subtract(0.0, &rest));
    println!("  multiply(1, ..) = {}", multiply(1.0, &rest));
    match divide(240.0, &rest) {
        Ok(value) => println!("  divide(240, ..) = {}", value),
        Err(err) => println!("  divide(240, ..) failed: {}", err),
    }

    // Failures carry the offending operand
    println!("\n=== Failures ===");
    if let Err(err) = divide(240.0, &[1.0, 2.0, 3.0, 4.0, 0.0]) {
        println!("  {}", err);
    }
    if let Err(err) = sqrt(-12.0) {
        println!("  {} (sentinel: {})", err, err.sentinel());
    }

    // Deferred calculations, built from operation names
    println!("\n=== Calculations ===");
    let requests = [
        ("add", 1.0, vec![1.0]),
        ("subtract", 1.4, vec![1.2]),
        ("x", -1.0, vec![-10.0]),
        ("/", 1.0, vec![0.5]),
        ("sqrt", 33.0, vec![]),
        ("sqrt", 4.0, vec![9.0]),
        ("pow", 2.0, vec![8.0]),
    ];

    for (name, first, rest) in requests {
        let result = name
            .parse::<Operation>()
            .and_then(|op| Calculation::new(op, first).with_operands(rest.clone()).evaluate());

        match result {
            Ok(value) => println!("  {} {} {:?} = {:.6}", name, first, rest, value),
            Err(err) => println!("  {} {} {:?} failed: {}", name, first, rest, err),
        }
    }
}

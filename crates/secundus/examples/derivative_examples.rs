//! Symbolic Differentiation Examples
//!
//! Demonstrates Secundus's expression trees, derivative rules, constant
//! folding, and factor extraction.
//!
//! Run with: cargo run --example derivative_examples

use std::time::Instant;

use secundus::prelude::*;

// Helper to build x
fn x() -> Expr {
    Expr::var("x")
}

// Helper to build a dense-ish polynomial c₀ + c₁x + c₂x² + ...
fn polynomial(coeffs: &[i64]) -> Expr {
    Expr::add(coeffs.iter().enumerate().map(|(i, &c)| {
        let term = Expr::integer(c);
        match i {
            0 => term,
            1 => term * x(),
            _ => term * x().pow(Expr::integer(i as i64)),
        }
    }))
}

fn main() {
    println!("╔════════════════════════════════════════════════════════════════════╗");
    println!("║            Secundus: Symbolic Differentiation Examples             ║");
    println!("╚════════════════════════════════════════════════════════════════════╝\n");

    example_1_building_expressions();
    example_2_derivatives();
    example_3_simplification();
    example_4_factor_extraction();
    example_5_performance();
}

/// Example 1: Building Expression Trees
fn example_1_building_expressions() {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Example 1: Building Expression Trees");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    let linear = x() * 3 + 1;
    println!("  x·3 + 1          →  {linear}");

    let trig = Expr::sin(x().pow(Expr::integer(2)));
    println!("  sin(x²)          →  {trig}");

    let quotient = (x() + 1) / (x() - 1);
    println!("  (x+1)/(x-1)      →  {quotient}");

    let with_pi = Expr::named_constant("pi") * x();
    println!("  pi·x             →  {with_pi}");

    let mixed = x() + Expr::var("y") + Expr::constant(0.5);
    println!("  x + y + 0.5      →  {mixed}");
    println!("  depends on       →  {} variables", mixed.dependencies().len());
    println!();
}

/// Example 2: Derivatives Before Folding
fn example_2_derivatives() {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Example 2: Derivatives Before Folding");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    let var = x();

    let sine = Expr::sin(x());
    println!("  d/dx sin(x)      →  {}", sine.derivative(&var));

    let product = x() * Expr::var("y");
    println!("  d/dx x·y         →  {}", product.derivative(&var));

    let quotient = Expr::div(Expr::integer(1), x());
    println!("  d/dx 1/x         →  {}", quotient.derivative(&var));

    // Powers go through the exp∘log rewrite, so the raw tree is wide
    let square = x().pow(Expr::integer(2));
    println!("  d/dx x²          →  {}", square.derivative(&var));
    println!();
}

/// Example 3: Folding the Noise Away
fn example_3_simplification() {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Example 3: Folding the Noise Away");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    let var = x();

    let cases = [
        ("sin(x)", Expr::sin(x())),
        ("x·3 + 1", x() * 3 + 1),
        ("pi·x", Expr::named_constant("pi") * x()),
        ("1/x", Expr::div(Expr::integer(1), x())),
    ];

    for (label, expr) in cases {
        let raw = expr.derivative(&var);
        let folded = raw.simplified();
        println!("  d/dx {label}");
        println!("    raw     →  {raw}");
        println!("    folded  →  {folded}");
    }
    println!();
}

/// Example 4: Factor Extraction
fn example_4_factor_extraction() {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Example 4: Factor Extraction");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    let twelve = Expr::integer(12);
    let mut factors: Vec<String> = twelve.factors().iter().map(Expr::to_string).collect();
    factors.sort();
    println!("  factors of 12        →  {{{}}}", factors.join(", "));

    // 6x + 9y: numeric content is shared, the variables are not
    let sum = Expr::mul([Expr::integer(6), x()]) + Expr::mul([Expr::integer(9), Expr::var("y")]);
    let mut common: Vec<String> = sum.factors().iter().map(Expr::to_string).collect();
    common.sort();
    println!("  factors of 6x + 9y   →  {{{}}}", common.join(", "));

    let product = Expr::mul([Expr::integer(4), x()]);
    let mut union: Vec<String> = product.factors().iter().map(Expr::to_string).collect();
    union.sort();
    println!("  factors of 4x        →  {{{}}}", union.join(", "));
    println!();
}

/// Example 5: Performance
fn example_5_performance() {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Example 5: Performance");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    let var = x();
    let iterations = 1000u32;

    for degree in [8, 32, 128] {
        let coeffs: Vec<i64> = (0..=degree).map(|i| (i % 7) - 3).collect();
        let poly = polynomial(&coeffs);

        let start = Instant::now();
        for _ in 0..iterations {
            let _ = poly.derivative(&var).simplified();
        }
        let elapsed = start.elapsed();
        println!(
            "  degree {degree:>3}: {:?} per derivative+fold",
            elapsed / iterations
        );
    }
    println!();
}

//! Quadrature Rule Comparison
//!
//! Runs every panel rule against the standard benchmark cases, timing the
//! repeated integrations and checking each result against the known value.
//!
//! Run with: cargo run --example quadrature_comparison --release

use std::time::Instant;

use quadrans::prelude::*;

fn main() -> Result<(), FunctionError> {
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║{:^66}║", "Quadrans - Composite Quadrature Rule Comparison");
    println!("╚══════════════════════════════════════════════════════════════════╝\n");

    for case in standard_cases()? {
        run_case(&case)?;
    }

    println!("\n✓ All cases completed.");
    Ok(())
}

fn run_case(case: &BenchmarkCase) -> Result<(), FunctionError> {
    let derivative = case.function.derive()?;

    println!("═══════════════════════════════════════════════════════════════════");
    println!("{:^67}", case.name.to_uppercase());
    println!("═══════════════════════════════════════════════════════════════════\n");

    println!("  Function:    f(x)  = {}", case.function);
    println!("  Derivative:  f'(x) = {}", derivative);
    println!("  Interval:    [{}, {}]", case.lower, case.upper);
    println!("  Epsilon:     {:e}", case.epsilon);
    println!("  Expected:    {:.10}", case.expected);
    println!("  Repetitions: {}\n", case.repetitions);

    println!(
        "  {:<20} | {:>14} | {:>16} | {:>11}",
        "Algorithm", "Time", "Result", "Refinements"
    );
    println!("  {}", "-".repeat(70));

    for rule in QuadratureRule::ALL {
        let (result, elapsed_ms) = run_rule(rule, case)?;
        let marker = if case.relative_error(result.value) <= case.epsilon {
            ""
        } else {
            "  ✗ off-target"
        };
        println!(
            "  {:<20} | {:>11.6} ms | {:>16.10} | {:>11}{}",
            rule.to_string(),
            elapsed_ms,
            result.value,
            result.refinements,
            marker
        );
    }
    println!();
    Ok(())
}

fn run_rule(
    rule: QuadratureRule,
    case: &BenchmarkCase,
) -> Result<(QuadratureResult, f64), FunctionError> {
    let started = Instant::now();
    let result = rule.integrate(&case.function, case.lower, case.upper, case.epsilon)?;
    for _ in 1..case.repetitions {
        rule.integrate(&case.function, case.lower, case.upper, case.epsilon)?;
    }
    let elapsed_ms = started.elapsed().as_secs_f64() * 1_000.0;
    Ok((result, elapsed_ms))
}

// src/main.rs

use std::process;

use env_logger::Env;
use log::{debug, error, info};
use serde::Serialize;

use nums::config::NumsConfig;
use nums::core::{NumsError, Result};
use nums::fraction::Fraction;
use nums::number_theory::{integral_of, quad_form, round_to_base, sin_d, triangle_area};
use nums::sequences::{collatz_with_limit, fib, is_prime, prev_primes, prev_tri_nums, prime_range};

/// Summary of the sequence example, printed with --json
#[derive(Debug, Serialize)]
struct SequenceReport {
    limit: u64,
    is_prime: bool,
    primes_up_to_limit: usize,
    primes_from_1000: usize,
    triangle_numbers: Vec<u64>,
    fib_100: String,
    collatz_25: Vec<u64>,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let config = match NumsConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration ({}), using defaults", e);
            NumsConfig::default()
        }
    };

    // Initialize the logger
    let env = Env::default()
        .filter_or("NUMS_LOG_LEVEL", config.log_level.as_str())
        .write_style_or("NUMS_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();
    debug!("Loaded configuration: {:?}", config);

    let json = args.iter().skip(1).any(|a| a == "--json");
    let section = args
        .iter()
        .skip(1)
        .find(|a| !a.starts_with("--"))
        .map(String::as_str)
        .unwrap_or("all");

    if let Err(e) = run(section, json, &config) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(section: &str, json: bool, config: &NumsConfig) -> Result<()> {
    if json {
        let report = sequence_report(config)?;
        let text = serde_json::to_string_pretty(&report).map_err(|e| NumsError::invalid_value(e.to_string()))?;
        println!("{}", text);
        return Ok(());
    }

    match section {
        "fraction" => fraction_example(),
        "number-theory" => number_theory_example(config),
        "sequences" => sequences_example(config),
        "all" => {
            fraction_example()?;
            number_theory_example(config)?;
            sequences_example(config)
        }
        other => Err(NumsError::invalid_value(format!(
            "unknown example '{}', expected fraction, number-theory, sequences or all",
            other
        ))),
    }
}

fn fraction_example() -> Result<()> {
    info!("Running fraction example");
    let a = Fraction::new(1, 2)?;
    let b = Fraction::new(1, 2)?;
    println!("a: {}, b: {}", a, b);
    println!("a + b = {}", (a + b)?);
    println!("a - b = {}", (a - b)?);
    println!("a * b = {}", (a * b)?);
    println!("a / b = {}", (a / b)?);

    let c: Fraction = "649/200".parse()?;
    let terms: Vec<i64> = c.continued_fraction()?.collect();
    println!("{} = {} as a continued fraction {:?}", c, c.decimal(), terms);
    Ok(())
}

fn number_theory_example(config: &NumsConfig) -> Result<()> {
    info!("Running number theory example");
    let n = config.sequences.demo_limit;
    println!(
        "Integral of x^2 on [{}, {}] ({}): {}",
        config.integral.start,
        config.integral.stop,
        config.integral.method,
        integral_of("x**2", &config.integral)?
    );
    println!("Is {} prime: {}", n, is_prime(n));
    println!("Number of primes up to {}: {}", n, prev_primes(n)?.len());
    println!("{} rounded to base 100: {}", n, round_to_base(n as f64, 100.0)?);
    println!("Roots of x^2 - 3x + 2: {:?}", quad_form(1.0, -3.0, 2.0)?);
    println!("sin(30°) = {}", sin_d(30.0));
    println!("Area of the 6-8-10 triangle: {}", triangle_area(6.0, 8.0, 10.0, None)?);
    Ok(())
}

fn sequences_example(config: &NumsConfig) -> Result<()> {
    info!("Running sequences example");
    let report = sequence_report(config)?;
    println!("is_prime({}) --> {}", report.limit, report.is_prime);
    println!("Primes up to {}: {}", report.limit, report.primes_up_to_limit);
    println!("Primes from 1000 to {}: {}", report.limit, report.primes_from_1000);
    println!("Triangle numbers up to {}: {:?}", report.limit, report.triangle_numbers);
    println!("100th Fibonacci number: {}", report.fib_100);
    println!("Collatz chain of 25: {:?}", report.collatz_25);
    Ok(())
}

fn sequence_report(config: &NumsConfig) -> Result<SequenceReport> {
    let limit = config.sequences.demo_limit;
    Ok(SequenceReport {
        limit,
        is_prime: is_prime(limit),
        primes_up_to_limit: prev_primes(limit)?.len(),
        primes_from_1000: prime_range(1000, limit)?.len(),
        triangle_numbers: prev_tri_nums(limit),
        fib_100: fib(100)?.to_string(),
        collatz_25: collatz_with_limit(25, config.sequences.collatz_max_iterations)?,
    })
}

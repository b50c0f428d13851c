//! # Exact calculator
//!
//! Evaluates a single operation on two rational numbers and prints the canonical form
//! of the result, e.g. `qratio 1/2 + 1/3` prints `5/6`. The multiplication operator
//! can be spelled `x` to avoid shell globbing, and `cmp` prints the ordering of the
//! two operands instead of a number.
use std::cmp::Ordering;
use std::process::exit;

use clap::{App, Arg};

use qratio::Rational;
use qratio::io::parse;

fn main() {
    let matches = App::new("qratio")
        .arg(Arg::new("left").required(true).index(1))
        .arg(Arg::new("operator").required(true).index(2))
        .arg(Arg::new("right").required(true).index(3))
        .get_matches();

    let left = read(matches.value_of("left").unwrap());
    let operator = matches.value_of("operator").unwrap();
    let right = read(matches.value_of("right").unwrap());

    match operator {
        "+" => println!("{}", left + right),
        "-" => println!("{}", left - right),
        "*" | "x" => println!("{}", left * right),
        "/" => match left.checked_div(&right) {
            Ok(quotient) => println!("{}", quotient),
            Err(error) => fail(&error.to_string()),
        },
        "cmp" => println!("{}", describe(left.cmp(&right))),
        other => fail(&format!("Unknown operator \"{}\".", other)),
    }
}

fn read(text: &str) -> Rational {
    match parse(text) {
        Ok(value) => value,
        Err(error) => fail(&error.to_string()),
    }
}

fn describe(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "==",
        Ordering::Greater => ">",
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    exit(1)
}
